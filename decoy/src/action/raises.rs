use std::error::Error;
use std::sync::Arc;

use crate::{Call, Failure, Value};

use super::Action;

/// Creates a [`Raise`] action that fails with the passed `error` when called.
pub fn raise<E>(error: E) -> Raise
where
    E: Into<Box<dyn Error + Send + Sync>>,
{
    Raise(Arc::from(error.into()))
}

/// Action that fails the call with [`Failure::ConfiguredFailure`].
#[derive(Debug, Clone)]
pub struct Raise(pub Arc<dyn Error + Send + Sync>);

impl Action for Raise {
    fn exec(&mut self, _call: &Call<'_>) -> Result<Value, Failure> {
        Err(Failure::ConfiguredFailure(self.0.clone()))
    }
}
