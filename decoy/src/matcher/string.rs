use std::fmt::{Formatter, Result as FmtResult};

use crate::Value;

use super::Matcher;

/* IsEmpty */

/// Matches empty strings, lists and maps.
pub fn is_empty() -> IsEmpty {
    IsEmpty
}

#[must_use]
#[derive(Debug)]
pub struct IsEmpty;

impl Matcher for IsEmpty {
    fn matches(&self, value: &Value) -> bool {
        match value {
            Value::Str(s) => s.is_empty(),
            Value::List(l) => l.is_empty(),
            Value::Map(m) => m.is_empty(),
            _ => false,
        }
    }

    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "is_empty")
    }
}

macro_rules! impl_str_matcher {
    ($type:ident, str::$method:ident, $fmt:tt) => {
        pub fn $method<P: Into<String>>(pattern: P) -> $type {
            $type(pattern.into())
        }

        #[must_use]
        #[derive(Debug)]
        pub struct $type(String);

        impl Matcher for $type {
            fn matches(&self, value: &Value) -> bool {
                value.as_str().is_some_and(|s| s.$method(self.0.as_str()))
            }

            fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
                write!(f, $fmt, self.0)
            }
        }
    };
}

impl_str_matcher!(StartsWith, str::starts_with, "starts_with({:?})");
impl_str_matcher!(EndsWith, str::ends_with, "ends_with({:?})");
impl_str_matcher!(Contains, str::contains, "contains({:?})");
