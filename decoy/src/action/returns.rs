use crate::{Call, Failure, Value};

use super::Action;

/// Creates a [`Return`] action that returns the passed `value` when called.
pub fn return_<T: Into<Value>>(value: T) -> Return {
    Return(value.into())
}

/// Action that returns a clone of the passed value when called.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct Return(pub Value);

impl Action for Return {
    fn exec(&mut self, _call: &Call<'_>) -> Result<Value, Failure> {
        Ok(self.0.clone())
    }
}
