use std::fmt::{Formatter, Result as FmtResult};

use crate::Value;

use super::ParametersMatcher;

pub fn no_args() -> NoArgs {
    NoArgs
}

#[must_use]
#[derive(Debug)]
pub struct NoArgs;

impl ParametersMatcher for NoArgs {
    fn matches(&self, args: &[Value]) -> bool {
        args.is_empty()
    }

    fn fmt(&self, _: &mut Formatter<'_>) -> FmtResult {
        Ok(())
    }
}
