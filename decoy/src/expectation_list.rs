//! The [`expectation_list`](self) module implements the ordered registry of
//! handlers that is owned by every [`Double`](crate::Double).

use crate::{Call, Expectation, Failure, VerifyContext};

/// Insertion ordered list of [`Expectation`]s.
///
/// Handlers are only ever appended. Lookups scan the list from the most
/// recently added handler to the oldest one, so a later registration for the
/// same method shadows the earlier ones without removing them.
#[derive(Default, Debug)]
pub struct ExpectationList {
    expectations: Vec<Expectation>,
}

impl ExpectationList {
    /// Append `expectation` and return a mutable reference to it.
    pub fn push(&mut self, expectation: Expectation) -> &mut Expectation {
        self.expectations.push(expectation);

        let last = self.expectations.len() - 1;

        &mut self.expectations[last]
    }

    /// Most recently added handler that matches `call`.
    pub fn match_mut(&mut self, call: &Call<'_>) -> Option<&mut Expectation> {
        self.expectations
            .iter_mut()
            .rev()
            .find(|expectation| expectation.matches(call))
    }

    /// Handler at `index` in insertion order.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Expectation> {
        self.expectations.get_mut(index)
    }

    /// Returns `true` if at least one handler is registered for `method`.
    #[must_use]
    pub fn contains_method(&self, method: &str) -> bool {
        self.expectations
            .iter()
            .any(|expectation| expectation.method() == method)
    }

    /// Verify all handlers in insertion order.
    ///
    /// # Errors
    /// Returns the failure of the first handler that could not be verified.
    pub fn verify(&self, mut context: Option<&mut dyn VerifyContext>) -> Result<(), Failure> {
        for expectation in &self.expectations {
            let context = match context {
                Some(ref mut context) => Some(&mut **context as &mut dyn VerifyContext),
                None => None,
            };

            expectation.verify(context)?;
        }

        Ok(())
    }

    /// Update the double identity every handler renders in its failures.
    pub(crate) fn set_double(&mut self, identity: &str) {
        for expectation in &mut self.expectations {
            expectation.set_double(identity);
        }
    }

    /// Iterate the handlers in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Expectation> + '_ {
        self.expectations.iter()
    }

    /// Number of registered handlers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.expectations.len()
    }

    /// Returns `true` if no handler is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.expectations.is_empty()
    }
}
