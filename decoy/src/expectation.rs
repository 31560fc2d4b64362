//! The [`expectation`](self) module implements the [`Expectation`] type, the
//! handler that is registered for a method of a [`Double`](crate::Double).

use std::collections::VecDeque;
use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::panic::Location;

use tracing::warn;

use crate::action::{invoke, raise, return_, Responses};
use crate::cardinality::{Cardinality, CardinalityRange};
use crate::config::{Configuration, Policy};
use crate::matcher::{any_parameters, no_args, Describe, ParametersMatcher};
use crate::sequence::{InSequence, Sequence, SequenceHandle};
use crate::value::write_separated;
use crate::{Block, Call, Failure, Value, VerifyContext};

/// Variant of a handler. The variants only differ in their default
/// cardinality and in how never invoked handlers are reported.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Kind {
    /// Strict handler, registered with [`expects`](crate::Double::expects).
    /// Must be invoked exactly once unless configured otherwise.
    Expectation,

    /// Lenient handler, registered with [`stubs`](crate::Double::stubs).
    /// May be invoked any number of times.
    Stub,
}

/// Handler for the calls of one method of a [`Double`](crate::Double).
///
/// The handler decides which arguments it accepts, how often it expects to be
/// invoked and how it responds to an invocation. All configuration methods
/// return `&mut Self` so they can be chained directly after registration:
///
/// ```
/// use decoy::{matcher::{eq, multi}, Double};
///
/// let mut double = Double::new();
/// double
///     .expects("add")
///     .with(multi((eq(1), eq(2))))
///     .returns(3);
///
/// assert_eq!(double.call("add", &decoy::args![1, 2]), decoy::Value::Int(3));
/// ```
pub struct Expectation {
    double: String,
    method: String,
    kind: Kind,
    parameters: Box<dyn ParametersMatcher + Send + Sync>,
    cardinality: Cardinality,
    responses: Responses,
    yields: VecDeque<Vec<Value>>,
    sequences: Vec<SequenceHandle>,
    invocations: Vec<Vec<Value>>,
    description: Option<String>,
    defined_at: Option<&'static Location<'static>>,
}

impl Expectation {
    /// Create a new handler for `method` of the double identified by `double`.
    pub fn new<S: Into<String>>(
        kind: Kind,
        double: &str,
        method: S,
        defined_at: Option<&'static Location<'static>>,
    ) -> Self {
        let cardinality = match kind {
            Kind::Expectation => Cardinality::exactly(1),
            Kind::Stub => Cardinality::any(),
        };

        let ret = Self {
            double: double.into(),
            method: method.into(),
            kind,
            parameters: Box::new(any_parameters()),
            cardinality,
            responses: Responses::default(),
            yields: VecDeque::new(),
            sequences: InSequence::create_handle().into_iter().collect(),
            invocations: Vec::new(),
            description: None,
            defined_at,
        };

        ret.sync_sequences();

        ret
    }

    /// Name of the method this handler is registered for.
    #[must_use]
    pub fn method(&self) -> &str {
        &self.method
    }

    /// Variant of this handler.
    #[must_use]
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// Invocation count and expected range of this handler.
    #[must_use]
    pub fn cardinality(&self) -> &Cardinality {
        &self.cardinality
    }

    /// Number of times this handler was invoked.
    #[must_use]
    pub fn invocation_count(&self) -> usize {
        self.cardinality.count()
    }

    /// Arguments of all invocations of this handler, in call order.
    #[must_use]
    pub fn invocations(&self) -> &[Vec<Value>] {
        &self.invocations
    }

    /// Source location the handler was registered at.
    #[must_use]
    pub fn location(&self) -> Option<&'static Location<'static>> {
        self.defined_at
    }

    /* configuration */

    /// Only accept calls whose arguments are accepted by `matcher`.
    pub fn with<M>(&mut self, matcher: M) -> &mut Self
    where
        M: ParametersMatcher + Send + Sync + 'static,
    {
        self.parameters = Box::new(matcher);
        self.sync_sequences();

        self
    }

    /// Only accept calls without arguments.
    pub fn with_no_args(&mut self) -> &mut Self {
        self.with(no_args())
    }

    /// Set the expected number of invocations.
    pub fn times<R: Into<CardinalityRange>>(&mut self, range: R) -> &mut Self {
        self.cardinality.set_range(range);
        self.sync_sequences();

        self
    }

    /// Expect exactly one invocation.
    pub fn once(&mut self) -> &mut Self {
        self.times(1)
    }

    /// Expect exactly two invocations.
    pub fn twice(&mut self) -> &mut Self {
        self.times(2)
    }

    /// Expect no invocation at all.
    pub fn never(&mut self) -> &mut Self {
        self.times(0)
    }

    /// Expect at least `n` invocations.
    pub fn at_least(&mut self, n: usize) -> &mut Self {
        self.times(n..)
    }

    /// Expect at least one invocation.
    pub fn at_least_once(&mut self) -> &mut Self {
        self.at_least(1)
    }

    /// Expect at most `n` invocations.
    pub fn at_most(&mut self, n: usize) -> &mut Self {
        self.times(..=n)
    }

    /// Expect at most one invocation.
    pub fn at_most_once(&mut self) -> &mut Self {
        self.at_most(1)
    }

    /// Respond with `value`.
    ///
    /// Responses are queued: every invocation consumes the next one and the
    /// last one answers all further invocations.
    pub fn returns<T: Into<Value>>(&mut self, value: T) -> &mut Self {
        self.responses.push(return_(value));

        self
    }

    /// Respond by failing with `error`, see [`returns`](Self::returns) for
    /// the queueing behavior.
    pub fn raises<E>(&mut self, error: E) -> &mut Self
    where
        E: Into<Box<dyn Error + Send + Sync>>,
    {
        self.responses.push(raise(error));

        self
    }

    /// Respond with the result of `func`, called with the call arguments.
    pub fn invokes<F, R>(&mut self, func: F) -> &mut Self
    where
        F: FnMut(&[Value]) -> R + Send + 'static,
        R: Into<Value> + 'static,
    {
        self.responses.push(invoke(func));

        self
    }

    /// Invoke the block passed with the call using `params`.
    ///
    /// Parameter groups are queued the same way as responses.
    pub fn yields<I, T>(&mut self, params: I) -> &mut Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        self.yields
            .push_back(params.into_iter().map(Into::into).collect());

        self
    }

    /// Add this handler to the end of `sequence`.
    pub fn in_sequence(&mut self, sequence: &Sequence) -> &mut Self {
        self.sequences.push(sequence.create_handle());
        self.sync_sequences();

        self
    }

    /// Set a description that is added to failure messages.
    pub fn description<S: Into<String>>(&mut self, value: S) -> &mut Self {
        self.description = Some(value.into());
        self.sync_sequences();

        self
    }

    /// Override the source location the handler was registered at.
    pub fn defined_at(&mut self, location: &'static Location<'static>) -> &mut Self {
        self.defined_at = Some(location);

        self
    }

    /* handler contract */

    /// Returns `true` if this handler accepts the passed `call`.
    ///
    /// This does not change any state of the handler.
    #[must_use]
    pub fn matches(&self, call: &Call<'_>) -> bool {
        self.method == call.method()
            && self.parameters.matches(call.args())
            && self.sequences.iter().all(SequenceHandle::is_active)
    }

    /// Returns `true` if another invocation would still be in the expected range.
    #[must_use]
    pub fn allows_invocation(&self) -> bool {
        self.cardinality.allows_invocation()
    }

    /// Invoke the handler for the passed `call`.
    ///
    /// # Errors
    /// Returns [`Failure::NoBlockGiven`] if the handler is configured to yield
    /// but no `block` was passed, and the failure of a configured
    /// [`raises`](Self::raises) response.
    pub fn invoke(&mut self, call: &Call<'_>, block: Block<'_>) -> Result<Value, Failure> {
        self.cardinality.increment();
        self.invocations.push(call.args().to_vec());
        self.sync_sequences();

        if let Some(params) = self.next_yield() {
            let Some(block) = block else {
                return Err(Failure::NoBlockGiven {
                    expectation: self.to_string(),
                });
            };

            block(params.as_slice());
        }

        self.responses.next(call)
    }

    /// Check if the handler was invoked as often as it expects.
    ///
    /// # Errors
    /// Returns [`Failure::CardinalityViolation`] if the invocation count is
    /// outside the expected range, and [`Failure::UnnecessaryStubbing`] for a
    /// never invoked stub if the [`Configuration`] prevents this.
    pub fn verify(&self, mut context: Option<&mut dyn VerifyContext>) -> Result<(), Failure> {
        if let Some(context) = context.as_deref_mut() {
            context.record_assertion();
        }

        if !self.cardinality.is_verified() {
            return Err(Failure::CardinalityViolation {
                expectation: self.to_string(),
                expected: self.cardinality.range().to_string(),
                invoked: self.cardinality.invoked(),
                defined_at: self.defined_at.map(ToString::to_string),
                verified_at: context
                    .and_then(|context| context.location())
                    .map(ToString::to_string),
            });
        }

        if self.kind == Kind::Stub && self.cardinality.count() == 0 {
            match Configuration::current().unnecessary_stubbing {
                Policy::Allow => (),
                Policy::Warn => warn!(expectation = %self, "stubbing method unnecessarily"),
                Policy::Prevent => {
                    return Err(Failure::UnnecessaryStubbing {
                        expectation: self.to_string(),
                    })
                }
            }
        }

        Ok(())
    }

    /// Summary that is used in failure reports, e.g.
    /// `expected exactly once, invoked never: Mock:0x1.fuu(any parameters)`.
    ///
    /// Followed by the recorded invocations if configured, and by the
    /// sequences that currently prevent this handler from matching.
    #[must_use]
    pub fn summary(&self) -> String {
        let mut ret = format!("{}, {}: {}", self.cardinality, self.cardinality.invoked(), self);

        if Configuration::current().display_invocations_on_failure {
            for args in &self.invocations {
                ret.push_str(&format!("\n  - {}", Invocation(&self.method, args)));
            }
        }

        for seq_handle in self.sequences.iter().filter(|h| !h.is_active()) {
            ret.push_str(&format!(
                "\n  sequence #{} not active, waiting for:",
                seq_handle.sequence_id()
            ));

            for ex in seq_handle.unsatisfied() {
                ret.push_str(&format!("\n    - {ex}"));
            }
        }

        ret
    }

    pub(crate) fn set_double(&mut self, identity: &str) {
        identity.clone_into(&mut self.double);
        self.sync_sequences();
    }

    fn next_yield(&mut self) -> Option<Vec<Value>> {
        if self.yields.len() > 1 {
            self.yields.pop_front()
        } else {
            self.yields.front().cloned()
        }
    }

    fn sync_sequences(&self) {
        if self.sequences.is_empty() {
            return;
        }

        let desc = self.to_string();
        let is_ready = self.cardinality.is_satisfied();

        for seq_handle in &self.sequences {
            seq_handle.set_description(desc.clone());
            seq_handle.set_ready(is_ready);
        }
    }
}

impl Display for Expectation {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(
            f,
            "{}.{}({})",
            self.double,
            self.method,
            Describe(&*self.parameters)
        )?;

        if let Some(desc) = &self.description {
            write!(f, " ({desc})")?;
        }

        Ok(())
    }
}

impl std::fmt::Debug for Expectation {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("Expectation")
            .field("double", &self.double)
            .field("method", &self.method)
            .field("kind", &self.kind)
            .field("parameters", &Describe(&*self.parameters).to_string())
            .field("cardinality", &self.cardinality)
            .field("responses", &self.responses)
            .field("invocations", &self.invocations)
            .field("defined_at", &self.defined_at)
            .finish_non_exhaustive()
    }
}

struct Invocation<'a>(&'a str, &'a [Value]);

impl Display for Invocation<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}(", self.0)?;
        write_separated(f, self.1)?;
        write!(f, ")")
    }
}
