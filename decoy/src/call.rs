//! The [`call`](self) module defines the [`Interceptor`] trait, the explicit
//! interface every call to a double is routed through.

use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::value::write_separated;
use crate::{Failure, Value};

/// Optional trailing callable that is passed along with a call.
///
/// A handler configured with [`yields`](crate::Expectation::yields) invokes it
/// with the configured parameters.
pub type Block<'a> = Option<&'a mut dyn FnMut(&[Value]) -> Value>;

/// A single intercepted call: the method name and the positional arguments.
#[derive(Debug, Clone, Copy)]
pub struct Call<'a> {
    method: &'a str,
    args: &'a [Value],
}

impl<'a> Call<'a> {
    /// Create a new [`Call`] instance.
    #[must_use]
    pub fn new(method: &'a str, args: &'a [Value]) -> Self {
        Self { method, args }
    }

    /// Name of the called method.
    #[must_use]
    pub fn method(&self) -> &'a str {
        self.method
    }

    /// Arguments the method was called with.
    #[must_use]
    pub fn args(&self) -> &'a [Value] {
        self.args
    }
}

impl Display for Call<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}(", self.method)?;
        write_separated(f, self.args)?;
        write!(f, ")")
    }
}

/// Receives calls that are not implemented natively by the receiver.
///
/// [`Double`](crate::Double) resolves them against its registry of handlers.
/// Any `FnMut(&Call<'_>) -> Result<Value, Failure>` closure is an interceptor
/// as well, which makes it easy to install a fallback with
/// [`Double::delegate_to`](crate::Double::delegate_to).
pub trait Interceptor {
    /// Resolve the passed `call`.
    ///
    /// # Errors
    /// Returns a [`Failure`] if the call could not be resolved or the resolved
    /// handler failed.
    fn intercept(&mut self, call: &Call<'_>, block: Block<'_>) -> Result<Value, Failure>;
}

impl<F> Interceptor for F
where
    F: FnMut(&Call<'_>) -> Result<Value, Failure>,
{
    fn intercept(&mut self, call: &Call<'_>, _block: Block<'_>) -> Result<Value, Failure> {
        self(call)
    }
}
