//! The [`config`](self) module implements the [`Configuration`] of the crate.
//!
//! There is one process wide configuration that can be changed using
//! [`Configuration::set_global`]. Tests that are executed in parallel should
//! prefer [`Configuration::scoped`], which overrides the configuration for the
//! current thread only until the returned guard is dropped.

use std::cell::RefCell;
use std::marker::PhantomData;

use once_cell::sync::Lazy;
use parking_lot::RwLock;

/// Behavior for stubs that were never invoked when the double is verified.
#[derive(Default, Debug, Clone, Copy, Eq, PartialEq)]
pub enum Policy {
    /// Silently accept.
    #[default]
    Allow,

    /// Emit a warning using `tracing`.
    Warn,

    /// Fail the verification.
    Prevent,
}

/// Settings that change how doubles report and verify.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Configuration {
    /// Verify the double when it is dropped.
    pub verify_on_drop: bool,

    /// What to do with stubs that were never invoked.
    pub unnecessary_stubbing: Policy,

    /// Add the recorded invocations of every handler to the unmatched call report.
    pub display_invocations_on_failure: bool,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            verify_on_drop: true,
            unnecessary_stubbing: Policy::Allow,
            display_invocations_on_failure: false,
        }
    }
}

impl Configuration {
    /// Get the configuration that is active for the current thread.
    #[must_use]
    pub fn current() -> Self {
        SCOPED
            .with(|cell| cell.borrow().last().cloned())
            .unwrap_or_else(|| GLOBAL.read().clone())
    }

    /// Change the process wide configuration.
    pub fn set_global<F>(f: F)
    where
        F: FnOnce(&mut Self),
    {
        f(&mut GLOBAL.write());
    }

    /// Override the configuration for the current thread. The override is
    /// removed again when the returned [`ScopedConfiguration`] is dropped.
    pub fn scoped<F>(f: F) -> ScopedConfiguration
    where
        F: FnOnce(&mut Self),
    {
        let mut config = Self::current();
        f(&mut config);

        SCOPED.with(|cell| cell.borrow_mut().push(config));

        ScopedConfiguration {
            _marker: PhantomData,
        }
    }
}

/// Guard returned by [`Configuration::scoped`].
#[must_use]
#[derive(Debug)]
pub struct ScopedConfiguration {
    _marker: PhantomData<*const ()>,
}

impl Drop for ScopedConfiguration {
    fn drop(&mut self) {
        SCOPED.with(|cell| {
            cell.borrow_mut().pop();
        });
    }
}

static GLOBAL: Lazy<RwLock<Configuration>> = Lazy::new(Default::default);

thread_local! {
    static SCOPED: RefCell<Vec<Configuration>> = const { RefCell::new(Vec::new()) };
}
