use std::fmt::{Formatter, Result as FmtResult};

use crate::Value;

use super::Matcher;

pub fn is_nil() -> IsNil {
    IsNil
}

#[must_use]
#[derive(Debug)]
pub struct IsNil;

impl Matcher for IsNil {
    fn matches(&self, value: &Value) -> bool {
        value.is_nil()
    }

    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "nil")
    }
}

/// Matches any value of the passed kind, see [`Value::kind`].
pub fn kind_of(kind: &'static str) -> KindOf {
    KindOf(kind)
}

#[must_use]
#[derive(Debug)]
pub struct KindOf(pub &'static str);

impl Matcher for KindOf {
    fn matches(&self, value: &Value) -> bool {
        value.kind() == self.0
    }

    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "kind_of({})", self.0)
    }
}
