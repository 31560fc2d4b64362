//! The [`error`](self) module defines the [`Failure`] type that is raised when
//! the actual usage of a double diverges from its configuration.

use std::error::Error;
use std::sync::Arc;

/// Error that is raised by a [`Double`](crate::Double) or one of its handlers.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Failure {
    /// A call did not match any of the registered handlers.
    #[error("{report}")]
    UnmatchedCall {
        /// Debug identity of the double that received the call.
        double: String,

        /// The call that could not be matched.
        call: String,

        /// Full report including the handlers that were tried.
        report: String,
    },

    /// A handler was invoked less or more often than it expects.
    #[error(
        "not all expectations were satisfied\nunsatisfied expectation:\n- expected {expected}, {invoked}: {expectation}{}{}",
        .defined_at.as_ref().map(|at| format!("\n  defined at {at}")).unwrap_or_default(),
        .verified_at.as_ref().map(|at| format!("\n  verified at {at}")).unwrap_or_default(),
    )]
    CardinalityViolation {
        /// Description of the handler.
        expectation: String,

        /// Expected number of invocations.
        expected: String,

        /// Actual number of invocations.
        invoked: String,

        /// Source location the handler was registered at.
        defined_at: Option<String>,

        /// Source location the verification was requested from.
        verified_at: Option<String>,
    },

    /// A handler was configured to raise this error when invoked.
    #[error("{0}")]
    ConfiguredFailure(Arc<dyn Error + Send + Sync>),

    /// A handler was configured to yield but the call had no block attached.
    #[error("no block given (yield) for {expectation}")]
    NoBlockGiven {
        /// Description of the handler.
        expectation: String,
    },

    /// A stub was never invoked and the configuration prevents unnecessary stubbing.
    #[error("stubbing method unnecessarily: {expectation}")]
    UnnecessaryStubbing {
        /// Description of the handler.
        expectation: String,
    },
}

impl Failure {
    /// Create a [`Failure::ConfiguredFailure`] from any error type.
    pub fn configured<E>(error: E) -> Self
    where
        E: Into<Box<dyn Error + Send + Sync>>,
    {
        Self::ConfiguredFailure(Arc::from(error.into()))
    }

    /// Returns `true` if this is a [`Failure::UnmatchedCall`].
    #[must_use]
    pub fn is_unmatched_call(&self) -> bool {
        matches!(self, Self::UnmatchedCall { .. })
    }

    /// Returns `true` if this is a [`Failure::CardinalityViolation`].
    #[must_use]
    pub fn is_cardinality_violation(&self) -> bool {
        matches!(self, Self::CardinalityViolation { .. })
    }

    /// Returns `true` if this is a [`Failure::ConfiguredFailure`].
    #[must_use]
    pub fn is_configured(&self) -> bool {
        matches!(self, Self::ConfiguredFailure(_))
    }
}
