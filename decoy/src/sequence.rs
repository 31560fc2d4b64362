//! The [`sequence`](self) module contains different types and helpers to manage
//! the order in which handlers of one or more doubles may be invoked.

use std::cell::RefCell;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;

/// A sequence is used to constrain the order of handler invocations.
///
/// Every handler that is added to a sequence reserves a position in it. A
/// handler only matches a call if all handlers at earlier positions are
/// satisfied, i.e. have been invoked at least as often as their lower bound
/// requires.
///
/// A handler is added to a sequence using
/// [`in_sequence`](crate::Expectation::in_sequence), or implicitly while an
/// [`InSequence`] guard is alive.
#[must_use]
#[derive(Default, Debug, Clone)]
pub struct Sequence {
    inner: Arc<Mutex<Inner>>,
}

impl Sequence {
    /// Create a new empty sequence.
    pub fn new() -> Self {
        Self::default()
    }

    /// Id of the sequence, used in failure messages.
    #[must_use]
    pub fn id(&self) -> usize {
        self.inner.lock().sequence_id
    }

    /// Create a new handle that is added to the end of the sequence.
    #[must_use]
    pub fn create_handle(&self) -> SequenceHandle {
        Inner::create_handle(self.inner.clone())
    }
}

/// Represents a reserved position in a [`Sequence`].
#[derive(Debug)]
pub struct SequenceHandle {
    id: usize,
    inner: Arc<Mutex<Inner>>,
    sequence_id: usize,
}

impl SequenceHandle {
    /// Returns `true` if all positions before this handle are ready.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.inner.lock().is_active(self.id)
    }

    /// Get the id of the sequence this handle belongs to.
    #[must_use]
    pub fn sequence_id(&self) -> usize {
        self.sequence_id
    }

    /// Mark the current handle as ready (or not ready).
    pub fn set_ready(&self, value: bool) {
        self.inner.lock().item_mut(self.id).is_ready = value;
    }

    /// Set the description of the handle.
    pub fn set_description(&self, value: String) {
        self.inner.lock().item_mut(self.id).description = value;
    }

    /// Get the descriptions of the positions before this handle that are not
    /// ready yet.
    #[must_use]
    pub fn unsatisfied(&self) -> Vec<String> {
        let inner = self.inner.lock();

        inner.items[..self.id]
            .iter()
            .filter(|meta| !meta.is_ready)
            .map(|meta| meta.description.clone())
            .collect()
    }
}

impl Drop for SequenceHandle {
    fn drop(&mut self) {
        self.set_ready(true);
    }
}

/// Same like [`Sequence`] with the difference that all handlers that are
/// registered while the [`InSequence`] is alive are added to the sequence
/// automatically.
///
/// [`InSequence`] is thread local.
#[must_use]
#[derive(Debug)]
pub struct InSequence {
    parent: Option<Arc<Mutex<Inner>>>,
}

impl InSequence {
    /// Create a new [`InSequence`] instance that automatically adds handlers
    /// to the passed `sequence`.
    pub fn new(sequence: &Sequence) -> Self {
        Self::new_with(sequence.inner.clone())
    }

    /// Returns a new `Some(SequenceHandle)` for the sequence that was defined
    /// by the innermost [`InSequence`]. `None` is returned if no [`InSequence`]
    /// is alive in the current thread.
    #[must_use]
    pub fn create_handle() -> Option<SequenceHandle> {
        CURRENT_SEQUENCE.with(|cell| {
            cell.borrow()
                .as_ref()
                .map(|inner| Inner::create_handle(inner.clone()))
        })
    }

    fn new_with(inner: Arc<Mutex<Inner>>) -> Self {
        let parent = CURRENT_SEQUENCE.with(|cell| cell.borrow_mut().replace(inner));

        Self { parent }
    }
}

impl Default for InSequence {
    fn default() -> Self {
        Self::new_with(Arc::new(Mutex::new(Inner::default())))
    }
}

impl Drop for InSequence {
    fn drop(&mut self) {
        CURRENT_SEQUENCE.with(|cell| *cell.borrow_mut() = self.parent.take());
    }
}

/// Inner state of a sequence.
#[derive(Debug)]
struct Inner {
    items: Vec<Meta>,
    sequence_id: usize,
}

#[derive(Default, Debug)]
struct Meta {
    is_ready: bool,
    description: String,
}

impl Inner {
    fn create_handle(inner: Arc<Mutex<Self>>) -> SequenceHandle {
        let (id, sequence_id) = {
            let mut inner = inner.lock();
            let id = inner.items.len();
            inner.items.push(Meta::default());

            (id, inner.sequence_id)
        };

        SequenceHandle {
            id,
            inner,
            sequence_id,
        }
    }

    fn is_active(&self, id: usize) -> bool {
        self.items[..id].iter().all(|meta| meta.is_ready)
    }

    fn item_mut(&mut self, id: usize) -> &mut Meta {
        // Handles are only created by `create_handle`, so the id is always valid.
        &mut self.items[id]
    }
}

impl Default for Inner {
    fn default() -> Self {
        Self {
            sequence_id: SEQUENCE_ID.fetch_add(1, Ordering::Relaxed),
            items: Vec::new(),
        }
    }
}

static SEQUENCE_ID: AtomicUsize = AtomicUsize::new(0);

thread_local! {
    static CURRENT_SEQUENCE: RefCell<Option<Arc<Mutex<Inner>>>> = const { RefCell::new(None) };
}
