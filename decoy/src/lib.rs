//! Dynamic test doubles.
//!
//! A [`Double`] stands in for a real collaborator during a test. Handlers are
//! registered per method name with [`Double::expects`] (strict, exactly once
//! by default) and [`Double::stubs`] (lenient, any number of times). Every call
//! to the double is routed through the [`Interceptor`] interface and resolved
//! against the handlers, the most recently registered one first. At the end of
//! the test [`Double::verify`] checks that every handler was invoked as often
//! as it expects.

pub mod action;
pub mod call;
pub mod cardinality;
pub mod config;
pub mod double;
pub mod error;
pub mod expectation;
pub mod expectation_list;
pub mod matcher;
pub mod sequence;
pub mod shared;
pub mod unexpected_invocation;
pub mod value;
pub mod verification;

pub use decoy_macros::{call, expect_call, stub_call};

pub use action::Action;
pub use call::{Block, Call, Interceptor};
pub use cardinality::{Cardinality, CardinalityRange};
pub use config::{Configuration, Policy};
pub use double::Double;
pub use error::Failure;
pub use expectation::{Expectation, Kind};
pub use matcher::{Matcher, ParametersMatcher};
pub use sequence::{InSequence, Sequence, SequenceHandle};
pub use shared::SharedDouble;
pub use unexpected_invocation::UnexpectedInvocation;
pub use value::Value;
pub use verification::{AssertionCounter, VerifyContext};
