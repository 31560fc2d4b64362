use crate::{Call, Failure, Value};

use super::Action;

/// Creates an [`Invoke`] action that computes the result from the call arguments.
pub fn invoke<F>(func: F) -> Invoke<F> {
    Invoke(func)
}

#[derive(Debug)]
pub struct Invoke<F>(pub F);

impl<F, R> Action for Invoke<F>
where
    F: FnMut(&[Value]) -> R,
    R: Into<Value>,
{
    fn exec(&mut self, call: &Call<'_>) -> Result<Value, Failure> {
        Ok((self.0)(call.args()).into())
    }
}
