//! The [`double`](self) module implements the [`Double`] type, the test double
//! that intercepts calls and resolves them against its registered handlers.

use std::fmt::{Debug, Display, Formatter, Result as FmtResult};
use std::panic::Location;
use std::sync::atomic::{AtomicU64, Ordering};

use tracing::{debug, trace};

use crate::expectation::Kind;
use crate::expectation_list::ExpectationList;
use crate::{
    AssertionCounter, Block, Call, Configuration, Expectation, Failure, Interceptor, SharedDouble,
    UnexpectedInvocation, Value, VerifyContext,
};

/// Test double that stands in for a real collaborator.
///
/// A double does not implement any method natively. Every call is routed
/// through [`Interceptor::intercept`] (or one of the `call` helpers) and
/// resolved like this:
///
/// 1. The registered handlers are scanned from the most recently registered
///    to the oldest one. The first handler that matches the call is invoked
///    and its result becomes the result of the call.
/// 2. If no handler matches and the double stubs everything, the call is
///    absorbed and returns [`Value::Nil`].
/// 3. Otherwise the fallback installed by [`delegate_to`](Self::delegate_to)
///    is asked. If there is none, or it fails, the call fails with
///    [`Failure::UnmatchedCall`].
///
/// Like a mock handle the double verifies itself when it is dropped, see
/// [`Configuration::verify_on_drop`] and [`release`](Self::release).
///
/// ```
/// use decoy::{args, Double, Value};
///
/// let mut double = Double::named("greeter");
/// double.expects("greet").returns("hi");
///
/// assert_eq!(double.call("greet", &args![]), Value::from("hi"));
/// double.verify();
/// ```
pub struct Double {
    id: u64,
    name: Option<String>,
    stub_everything: bool,
    expectations: ExpectationList,
    fallback: Option<Box<dyn Interceptor + Send>>,
    check_on_drop: bool,
}

impl Double {
    /// Create a new anonymous double.
    #[must_use]
    pub fn new() -> Self {
        Self::build(None, false)
    }

    /// Create a new double with a name that is used in failure messages.
    #[must_use]
    pub fn named<S: Into<String>>(name: S) -> Self {
        Self::build(Some(name.into()), false)
    }

    /// Create a new double that silently absorbs every call no handler matches.
    #[must_use]
    pub fn stub_everything() -> Self {
        Self::build(None, true)
    }

    /// Set the name that is used in failure messages.
    ///
    /// Handlers that are already registered are updated as well, so all
    /// failures of the double report the same identity.
    #[must_use]
    pub fn with_name<S: Into<String>>(mut self, name: S) -> Self {
        self.name = Some(name.into());

        let identity = self.debug_identity();
        self.expectations.set_double(&identity);

        self
    }

    fn build(name: Option<String>, stub_everything: bool) -> Self {
        Self {
            id: NEXT_ID.fetch_add(1, Ordering::Relaxed),
            name,
            stub_everything,
            expectations: ExpectationList::default(),
            fallback: None,
            check_on_drop: true,
        }
    }

    /// Unique id of this double, assigned in creation order.
    #[must_use]
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Name of the double, if any.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns `true` if calls without a matching handler are absorbed.
    #[must_use]
    pub fn is_stub_everything(&self) -> bool {
        self.stub_everything
    }

    /// Stable token identifying this double in diagnostics:
    /// `Mock:<name>` for named doubles, `Mock:0x<id>` otherwise.
    #[must_use]
    pub fn debug_identity(&self) -> String {
        match &self.name {
            Some(name) => format!("Mock:{name}"),
            None => format!("Mock:{:#x}", self.id),
        }
    }

    /* registration */

    /// Register a strict handler for `method` that expects to be invoked
    /// exactly once. Returns the new handler for further configuration.
    #[track_caller]
    pub fn expects<S: Into<String>>(&mut self, method: S) -> &mut Expectation {
        self.register(Kind::Expectation, method.into(), Location::caller())
    }

    /// Register a lenient handler for `method` that may be invoked any number
    /// of times. Returns the new handler for further configuration.
    #[track_caller]
    pub fn stubs<S: Into<String>>(&mut self, method: S) -> &mut Expectation {
        self.register(Kind::Stub, method.into(), Location::caller())
    }

    /// Register one strict handler per `(method, return value)` pair.
    ///
    /// This is the same as calling [`expects`](Self::expects) followed by
    /// [`returns`](Expectation::returns) for each pair. Returns the handler of
    /// the last pair, or `None` if `pairs` was empty.
    #[track_caller]
    pub fn expects_many<I, S, V>(&mut self, pairs: I) -> Option<&mut Expectation>
    where
        I: IntoIterator<Item = (S, V)>,
        S: Into<String>,
        V: Into<Value>,
    {
        self.register_many(Kind::Expectation, pairs, Location::caller())
    }

    /// Register one lenient handler per `(method, return value)` pair, see
    /// [`expects_many`](Self::expects_many).
    #[track_caller]
    pub fn stubs_many<I, S, V>(&mut self, pairs: I) -> Option<&mut Expectation>
    where
        I: IntoIterator<Item = (S, V)>,
        S: Into<String>,
        V: Into<Value>,
    {
        self.register_many(Kind::Stub, pairs, Location::caller())
    }

    /// Install an interceptor that is asked for calls no handler matched.
    ///
    /// If the interceptor fails, the call is reported as unmatched.
    pub fn delegate_to<I>(&mut self, interceptor: I) -> &mut Self
    where
        I: Interceptor + Send + 'static,
    {
        self.fallback = Some(Box::new(interceptor));

        self
    }

    fn register(
        &mut self,
        kind: Kind,
        method: String,
        location: &'static Location<'static>,
    ) -> &mut Expectation {
        let identity = self.debug_identity();

        trace!(double = %identity, %method, ?kind, %location, "register handler");

        self.expectations
            .push(Expectation::new(kind, &identity, method, Some(location)))
    }

    fn register_many<I, S, V>(
        &mut self,
        kind: Kind,
        pairs: I,
        location: &'static Location<'static>,
    ) -> Option<&mut Expectation>
    where
        I: IntoIterator<Item = (S, V)>,
        S: Into<String>,
        V: Into<Value>,
    {
        let mut last = None;

        for (method, value) in pairs {
            self.register(kind, method.into(), location).returns(value);

            last = Some(self.expectations.len() - 1);
        }

        last.and_then(|index| self.expectations.get_mut(index))
    }

    /* interception */

    /// Resolve a call of `method` with `args`.
    ///
    /// # Errors
    /// Returns [`Failure::UnmatchedCall`] if the call could not be resolved,
    /// or the failure of the matched handler.
    pub fn try_call(&mut self, method: &str, args: &[Value]) -> Result<Value, Failure> {
        self.try_call_with_block(method, args, None)
    }

    /// Resolve a call of `method` with `args` and a trailing `block`.
    ///
    /// # Errors
    /// Returns [`Failure::UnmatchedCall`] if the call could not be resolved,
    /// or the failure of the matched handler.
    pub fn try_call_with_block(
        &mut self,
        method: &str,
        args: &[Value],
        block: Block<'_>,
    ) -> Result<Value, Failure> {
        let call = Call::new(method, args);

        if let Some(expectation) = self.expectations.match_mut(&call) {
            trace!(%expectation, %call, "invoke handler");

            return expectation.invoke(&call, block);
        }

        if self.stub_everything {
            debug!(double = %self, %call, "absorbed call");

            return Ok(Value::Nil);
        }

        if let Some(fallback) = self.fallback.as_mut() {
            match fallback.intercept(&call, block) {
                Ok(value) => return Ok(value),
                Err(err) => debug!(%call, %err, "fallback did not resolve call"),
            }
        }

        Err(UnexpectedInvocation::new(self, method).with(args).verify())
    }

    /// Same as [`try_call`](Self::try_call) but panics if the call fails.
    ///
    /// # Panics
    /// Panics with the message of the [`Failure`] if the call fails.
    #[track_caller]
    pub fn call(&mut self, method: &str, args: &[Value]) -> Value {
        match self.try_call(method, args) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }

    /// Same as [`try_call_with_block`](Self::try_call_with_block) but panics
    /// if the call fails.
    ///
    /// # Panics
    /// Panics with the message of the [`Failure`] if the call fails.
    #[track_caller]
    pub fn call_with_block(
        &mut self,
        method: &str,
        args: &[Value],
        block: &mut dyn FnMut(&[Value]) -> Value,
    ) -> Value {
        match self.try_call_with_block(method, args, Some(block)) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }

    /* verification */

    /// Verify every handler in registration order, forwarding `context` to
    /// each of them.
    ///
    /// # Errors
    /// Returns the failure of the first handler whose expectations are not met.
    pub fn try_verify(&self, context: Option<&mut dyn VerifyContext>) -> Result<(), Failure> {
        self.expectations.verify(context)
    }

    /// Verify every handler and panic on the first one whose expectations
    /// are not met. The failure is attributed to the caller.
    ///
    /// # Panics
    /// Panics with the message of the [`Failure`] if the verification fails.
    #[track_caller]
    pub fn verify(&self) {
        let mut counter = AssertionCounter::at(Location::caller());

        if let Err(err) = self.try_verify(Some(&mut counter)) {
            panic!("{err}");
        }
    }

    /// Drop the double without verifying it.
    pub fn release(mut self) {
        self.check_on_drop = false;

        drop(self);
    }

    /* introspection */

    /// Returns `true` if at least one handler is registered for `method`,
    /// regardless of the arguments it accepts.
    #[must_use]
    pub fn responds_to(&self, method: &str) -> bool {
        self.expectations.contains_method(method)
    }

    /// Iterate the registered handlers in registration order.
    pub fn expectations(&self) -> impl Iterator<Item = &Expectation> + '_ {
        self.expectations.iter()
    }

    /// Move the double into a [`SharedDouble`] handle.
    #[must_use]
    pub fn into_shared(self) -> SharedDouble {
        SharedDouble::new(self)
    }
}

impl Default for Double {
    fn default() -> Self {
        Self::new()
    }
}

impl Interceptor for Double {
    fn intercept(&mut self, call: &Call<'_>, block: Block<'_>) -> Result<Value, Failure> {
        self.try_call_with_block(call.method(), call.args(), block)
    }
}

impl Display for Double {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.debug_identity())
    }
}

impl Debug for Double {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("Double")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("stub_everything", &self.stub_everything)
            .field("expectations", &self.expectations)
            .field("has_fallback", &self.fallback.is_some())
            .finish()
    }
}

impl Drop for Double {
    fn drop(&mut self) {
        if !self.check_on_drop
            || ::std::thread::panicking()
            || !Configuration::current().verify_on_drop
        {
            return;
        }

        if let Err(err) = self.try_verify(None) {
            panic!("{err}");
        }
    }
}

static NEXT_ID: AtomicU64 = AtomicU64::new(1);
