//! The [`verification`](self) module defines the context that is passed to the
//! handlers of a double when it is verified.

use std::panic::Location;

/// Context that is forwarded to every handler during verification.
///
/// Test framework integrations use it to count assertions and to attribute a
/// failure to the place the verification was requested from.
pub trait VerifyContext {
    /// Called once for every handler that is verified.
    fn record_assertion(&mut self) {}

    /// Source location the failure should be attributed to.
    fn location(&self) -> Option<&'static Location<'static>> {
        None
    }
}

/// Simple [`VerifyContext`] that counts the verified handlers.
#[derive(Default, Debug, Clone, Copy)]
pub struct AssertionCounter {
    count: usize,
    location: Option<&'static Location<'static>>,
}

impl AssertionCounter {
    /// Create a new counter without a location.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new counter that attributes failures to the caller.
    #[must_use]
    #[track_caller]
    pub fn here() -> Self {
        Self::at(Location::caller())
    }

    /// Create a new counter that attributes failures to `location`.
    #[must_use]
    pub fn at(location: &'static Location<'static>) -> Self {
        Self {
            count: 0,
            location: Some(location),
        }
    }

    /// Number of assertions recorded so far.
    #[must_use]
    pub fn count(&self) -> usize {
        self.count
    }
}

impl VerifyContext for AssertionCounter {
    fn record_assertion(&mut self) {
        self.count += 1;
    }

    fn location(&self) -> Option<&'static Location<'static>> {
        self.location
    }
}
