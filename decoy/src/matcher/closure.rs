use std::fmt::{Formatter, Result as FmtResult};

use crate::Value;

use super::Matcher;

pub fn closure<F>(f: F) -> Closure<F>
where
    F: Fn(&Value) -> bool,
{
    Closure(f)
}

#[must_use]
#[derive(Debug)]
pub struct Closure<F>(pub F);

impl<F> Matcher for Closure<F>
where
    F: Fn(&Value) -> bool,
{
    fn matches(&self, value: &Value) -> bool {
        self.0(value)
    }

    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "closure")
    }
}
