use std::borrow::Cow;

use proc_macro2::{Ident, TokenStream};
use quote::{quote, ToTokens};
use syn::{
    parse::{Parse, ParseStream},
    parse2,
    punctuated::Punctuated,
    token::Comma,
    Expr, ExprCall, Result as ParseResult, Token,
};

use crate::misc::{ident_decoy, method_name};

#[derive(Debug, Clone, Copy)]
pub(crate) enum CallMode {
    Expect,
    Stub,
}

pub(crate) fn exec(input: TokenStream, mode: CallMode) -> TokenStream {
    let call: Call = match parse2(input) {
        Ok(call) => call,
        Err(err) => {
            return err.to_compile_error();
        }
    };

    call.render(mode)
}

struct Call {
    obj: Expr,
    method: Ident,
    args: Punctuated<Expr, Comma>,
}

impl Parse for Call {
    fn parse(input: ParseStream<'_>) -> ParseResult<Self> {
        let obj = input.parse()?;

        input.parse::<Token![,]>()?;

        let call: ExprCall = input.parse()?;

        let method = if let Expr::Path(p) = *call.func {
            if let Some(method) = p.path.get_ident() {
                method.clone()
            } else {
                return Err(input.error("Expect method identifier"));
            }
        } else {
            return Err(input.error("Expect method identifier"));
        };

        let args = call.args;

        Ok(Self { obj, method, args })
    }
}

impl Call {
    fn render(&self, mode: CallMode) -> TokenStream {
        let Self { obj, method, args } = self;

        let decoy = ident_decoy();
        let obj = obj.to_token_stream();
        let method = method_name(method);
        let register = match mode {
            CallMode::Expect => quote!(expects),
            CallMode::Stub => quote!(stubs),
        };
        let args = if args.is_empty() {
            quote!(.with(#decoy::matcher::no_args()))
        } else {
            let args = args.iter().map(|a| {
                if a.to_token_stream().to_string() == "_" {
                    Cow::Owned(Expr::Verbatim(quote!(#decoy::matcher::any())))
                } else {
                    Cow::Borrowed(a)
                }
            });

            quote!(.with(#decoy::matcher::multi((#( #args, )*))))
        };

        let tokens = quote! {
            #obj.#register(#method)#args
        };

        #[cfg(feature = "debug")]
        println!("\n{mode:?}:\n{tokens:#}\n");

        tokens
    }
}
