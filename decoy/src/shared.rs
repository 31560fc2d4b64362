//! The [`shared`](self) module implements [`SharedDouble`], a clonable handle
//! to a [`Double`].

use std::sync::Arc;

use parking_lot::{Mutex, MutexGuard};

use crate::{Block, Call, Double, Failure, Interceptor, Value};

/// Clonable handle to a [`Double`].
///
/// The code under test usually takes ownership of its collaborators. Hand it
/// a clone of the handle and keep another one in the test to configure and
/// verify the double. The double is verified when the last handle is dropped.
#[derive(Clone, Default)]
pub struct SharedDouble {
    inner: Arc<Mutex<Double>>,
}

impl SharedDouble {
    /// Create a new handle for the passed `double`.
    #[must_use]
    pub fn new(double: Double) -> Self {
        Self {
            inner: Arc::new(Mutex::new(double)),
        }
    }

    /// Lock the double to configure or inspect it.
    ///
    /// # Panics
    /// Panics if the double is already locked, e.g. because it is accessed
    /// from inside the block or action of one of its own handlers.
    #[track_caller]
    pub fn lock(&self) -> MutexGuard<'_, Double> {
        if let Some(locked) = self.inner.try_lock() {
            locked
        } else {
            panic!("Unable to lock double: Deadlock? Make sure that you do not access a double from inside an action or block of one of its own handlers.");
        }
    }

    /// See [`Double::try_call`].
    ///
    /// # Errors
    /// Returns the failure of the call.
    pub fn try_call(&self, method: &str, args: &[Value]) -> Result<Value, Failure> {
        self.lock().try_call(method, args)
    }

    /// See [`Double::call`].
    #[track_caller]
    pub fn call(&self, method: &str, args: &[Value]) -> Value {
        let result = self.lock().try_call(method, args);

        match result {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }

    /// See [`Double::verify`].
    #[track_caller]
    pub fn verify(&self) {
        self.lock().verify();
    }

    /// See [`Double::responds_to`].
    #[must_use]
    pub fn responds_to(&self, method: &str) -> bool {
        self.lock().responds_to(method)
    }

    /// Returns `true` if both handles refer to the same double.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl From<Double> for SharedDouble {
    fn from(double: Double) -> Self {
        Self::new(double)
    }
}

impl Interceptor for SharedDouble {
    fn intercept(&mut self, call: &Call<'_>, block: Block<'_>) -> Result<Value, Failure> {
        self.lock()
            .try_call_with_block(call.method(), call.args(), block)
    }
}

impl std::fmt::Debug for SharedDouble {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.inner.try_lock() {
            Some(double) => f.debug_tuple("SharedDouble").field(&*double).finish(),
            None => f.write_str("SharedDouble(<locked>)"),
        }
    }
}
