//! The [`action`](self) module contains the pre-defined responses a handler of a
//! double may produce when it is invoked.

mod invoke;
mod raises;
mod returns;

use std::collections::VecDeque;

pub use invoke::{invoke, Invoke};
pub use raises::{raise, Raise};
pub use returns::{return_, Return};

use crate::{Call, Failure, Value};

/// Trait that defines the response of a handler to a matched call.
///
/// An action may be executed repeatedly, so it must be able to produce its
/// result more than once.
pub trait Action {
    /// Execute the action for the passed call.
    ///
    /// # Errors
    /// Returns the failure the action is configured to raise.
    fn exec(&mut self, call: &Call<'_>) -> Result<Value, Failure>;
}

/// Ordered queue of [`Action`]s of one handler.
///
/// Each invocation consumes the next action. The last action is never
/// consumed, it answers every further invocation. An empty queue answers with
/// [`Value::Nil`].
#[derive(Default)]
pub struct Responses {
    actions: VecDeque<Box<dyn Action + Send>>,
}

impl Responses {
    /// Append an action to the end of the queue.
    pub fn push<A>(&mut self, action: A)
    where
        A: Action + Send + 'static,
    {
        self.actions.push_back(Box::new(action));
    }

    /// Number of queued actions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Returns `true` if no action is queued.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Execute the next action for the passed call.
    ///
    /// # Errors
    /// Returns the failure the executed action is configured to raise.
    pub fn next(&mut self, call: &Call<'_>) -> Result<Value, Failure> {
        if self.actions.len() > 1 {
            if let Some(mut action) = self.actions.pop_front() {
                return action.exec(call);
            }
        }

        match self.actions.front_mut() {
            Some(action) => action.exec(call),
            None => Ok(Value::Nil),
        }
    }
}

impl std::fmt::Debug for Responses {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Responses")
            .field("len", &self.actions.len())
            .finish()
    }
}
