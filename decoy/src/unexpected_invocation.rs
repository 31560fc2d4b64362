//! The [`unexpected_invocation`](self) module implements the reporter that
//! builds the failure for a call no handler of a double accepted.

use tracing::debug;

use crate::{Call, Double, Failure, Value};

/// Builds a [`Failure::UnmatchedCall`] for a call to `double` that did not match
/// any of its handlers.
///
/// The report lists the attempted call followed by the registered handlers,
/// split into the ones that are not yet verified and the ones that are.
#[must_use]
#[derive(Debug)]
pub struct UnexpectedInvocation<'a> {
    double: &'a Double,
    method: &'a str,
    args: &'a [Value],
}

impl<'a> UnexpectedInvocation<'a> {
    /// Create a new reporter for a call of `method` on `double`.
    pub fn new(double: &'a Double, method: &'a str) -> Self {
        Self {
            double,
            method,
            args: &[],
        }
    }

    /// Set the arguments of the call.
    pub fn with(mut self, args: &'a [Value]) -> Self {
        self.args = args;

        self
    }

    /// Build the failure. The returned failure must be raised by the caller,
    /// the call it describes never succeeds.
    pub fn verify(self) -> Failure {
        let double = self.double.debug_identity();
        let call = format!("{double}.{}", Call::new(self.method, self.args));

        let mut unsatisfied = Vec::new();
        let mut satisfied = Vec::new();
        for expectation in self.double.expectations() {
            if expectation.cardinality().is_verified() {
                satisfied.push(expectation.summary());
            } else {
                unsatisfied.push(expectation.summary());
            }
        }

        let mut report = format!("unexpected invocation: {call}");
        write_section(&mut report, "unsatisfied expectations", &unsatisfied);
        write_section(&mut report, "satisfied expectations", &satisfied);

        debug!(%double, %call, "unexpected invocation");

        Failure::UnmatchedCall {
            double,
            call,
            report,
        }
    }
}

fn write_section(report: &mut String, title: &str, lines: &[String]) {
    if lines.is_empty() {
        return;
    }

    report.push_str(&format!("\n{title}:"));
    for line in lines {
        report.push_str(&format!("\n- {line}"));
    }
}
