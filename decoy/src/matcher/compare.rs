use std::fmt::{Formatter, Result as FmtResult};

use crate::Value;

use super::Matcher;

macro_rules! impl_matcher {
    ($type:ident, $method:ident, $op:tt, $fmt:tt) => {
        pub fn $method<T: Into<Value>>(value: T) -> $type {
            $type(value.into())
        }

        #[must_use]
        #[derive(Debug)]
        pub struct $type(pub Value);

        impl Matcher for $type {
            fn matches(&self, value: &Value) -> bool {
                value $op &self.0
            }

            fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
                write!(f, $fmt, self.0)
            }
        }
    };
}

impl_matcher!(Eq, eq, ==, "{}");
impl_matcher!(Ne, ne, !=, "not({})");

impl_matcher!(Lt, lt, <, "less_than({})");
impl_matcher!(Le, le, <=, "less_or_equal({})");
impl_matcher!(Gt, gt, >, "greater_than({})");
impl_matcher!(Ge, ge, >=, "greater_or_equal({})");
