use std::fmt::{Formatter, Result as FmtResult};

use crate::Value;

use super::{Matcher, ParametersMatcher};

pub fn any() -> Any {
    Any
}

#[must_use]
#[derive(Debug)]
pub struct Any;

impl Matcher for Any {
    fn matches(&self, _value: &Value) -> bool {
        true
    }

    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "any")
    }
}

/// Accepts any argument list. This is the default of every handler.
pub fn any_parameters() -> AnyParameters {
    AnyParameters
}

#[must_use]
#[derive(Default, Debug)]
pub struct AnyParameters;

impl ParametersMatcher for AnyParameters {
    fn matches(&self, _args: &[Value]) -> bool {
        true
    }

    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "any parameters")
    }
}
