#![warn(
    unused,
    clippy::pedantic,
    future_incompatible,
    missing_debug_implementations,
    nonstandard_style,
    rust_2018_idioms,
    rust_2021_compatibility
)]
#![allow(clippy::module_name_repetitions)]

use expect_call::CallMode;
use proc_macro::TokenStream;

mod call;
mod expect_call;
mod misc;

/// Call a method on a double: `call!(double, method(arg, ...))`.
///
/// Every argument is converted using `Value::from`. An optional third
/// argument is passed as block: `call!(double, each(1), |args| ...)`.
#[proc_macro]
pub fn call(input: TokenStream) -> TokenStream {
    call::exec(input.into()).into()
}

/// Register a strict handler: `expect_call!(double, method(matcher, _, ...))`.
///
/// `_` accepts any argument, an empty argument list only accepts calls
/// without arguments.
#[proc_macro]
pub fn expect_call(input: TokenStream) -> TokenStream {
    expect_call::exec(input.into(), CallMode::Expect).into()
}

/// Same as [`expect_call!`] but registers a lenient handler.
#[proc_macro]
pub fn stub_call(input: TokenStream) -> TokenStream {
    expect_call::exec(input.into(), CallMode::Stub).into()
}
