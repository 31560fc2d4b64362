//! The [`matcher`](self) module contains the matchers that decide whether the
//! arguments of an intercepted call are accepted by a handler.
//!
//! A [`Matcher`] checks a single argument, a [`ParametersMatcher`] checks the
//! whole argument list. [`multi`] combines one matcher per argument into a
//! parameters matcher.

mod any;
mod closure;
mod collection;
mod compare;
mod kind;
mod multi;
mod no_args;
mod pattern;
mod range;
mod string;

use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::Value;

pub use ::regex::Regex;
pub use any::{any, any_parameters, Any, AnyParameters};
pub use closure::{closure, Closure};
pub use collection::{has_entry, has_key, includes, HasEntry, HasKey, Includes};
pub use compare::{eq, ge, gt, le, lt, ne, Eq, Ge, Gt, Le, Lt, Ne};
pub use kind::{is_nil, kind_of, IsNil, KindOf};
pub use multi::{multi, params, Multi, Params};
pub use no_args::{no_args, NoArgs};
pub use pattern::{regex_matches, RegexMatches};
pub use range::{range, Range};
pub use string::{
    contains as str_contains, ends_with as str_ends_with, is_empty, starts_with as str_starts_with,
    Contains as StrContains, EndsWith as StrEndsWith, IsEmpty, StartsWith as StrStartsWith,
};

/// A matcher is used to check if a single argument of an intercepted call
/// matches a pre-defined expectation.
pub trait Matcher {
    /// Returns `true` if the passed `value` matches the expectations, `false`
    /// otherwise.
    fn matches(&self, value: &Value) -> bool;

    /// Write a human readable representation of the matcher to the passed
    /// formatter.
    ///
    /// # Errors
    /// Returns an error if writing to the formatter failed.
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult;
}

/// A parameters matcher checks the complete argument list of an intercepted
/// call.
pub trait ParametersMatcher {
    /// Returns `true` if the passed `args` are accepted, `false` otherwise.
    fn matches(&self, args: &[Value]) -> bool;

    /// Write a human readable representation of the matcher to the passed
    /// formatter.
    ///
    /// # Errors
    /// Returns an error if writing to the formatter failed.
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult;
}

impl<M> Matcher for Box<M>
where
    M: Matcher + ?Sized,
{
    fn matches(&self, value: &Value) -> bool {
        (**self).matches(value)
    }

    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Matcher::fmt(&**self, f)
    }
}

/// Helper to use a [`Matcher`] or [`ParametersMatcher`] as [`Display`].
#[derive(Debug)]
pub struct Describe<'a, M: ?Sized>(pub &'a M);

impl<M> Display for Describe<'_, M>
where
    M: ParametersMatcher + ?Sized,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        ParametersMatcher::fmt(self.0, f)
    }
}
