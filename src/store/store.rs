//! The state container: owns the current state, runs the reducer, and
//! notifies subscribers after every dispatch.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Weak};

use parking_lot::Mutex;

use super::reducer::Reducer;

type Listener = Box<dyn FnMut() + Send>;

/// Handle to a state container.
///
/// Cloning a `Store` clones the handle, not the state: all clones share
/// the same underlying container. Construct one at startup and pass it
/// to whichever components need to read or dispatch.
pub struct Store<R: Reducer> {
    inner: Arc<StoreInner<R>>,
}

struct StoreInner<R: Reducer> {
    state: Mutex<R::State>,
    listeners: Mutex<ListenerTable>,
    /// Set for the duration of a dispatch to reject reentrant dispatches.
    dispatching: AtomicBool,
}

#[derive(Default)]
struct ListenerTable {
    next_id: u64,
    entries: Vec<(u64, Listener)>,
}

impl<R: Reducer> Store<R> {
    /// Creates a store holding the state type's default value.
    pub fn new() -> Self {
        Self::with_state(R::State::default())
    }

    /// Creates a store holding `initial`.
    pub fn with_state(initial: R::State) -> Self {
        Self {
            inner: Arc::new(StoreInner {
                state: Mutex::new(initial),
                listeners: Mutex::new(ListenerTable::default()),
                dispatching: AtomicBool::new(false),
            }),
        }
    }

    /// Returns a snapshot of the current state.
    ///
    /// The snapshot is an owned clone: it stays stable even if further
    /// actions are dispatched after it is taken.
    pub fn state(&self) -> R::State {
        self.inner.state.lock().clone()
    }

    /// Runs the reducer on the current state and `action`, swaps in the
    /// result, then invokes every registered listener in subscription
    /// order with no payload. Listeners re-read [`Store::state`] to see
    /// the change.
    ///
    /// # Panics
    ///
    /// Panics if called from within a listener notification. Reentrant
    /// dispatch would interleave with the in-progress notification pass;
    /// listeners that need to dispatch must defer to their own event
    /// loop instead.
    pub fn dispatch(&self, action: R::Action) {
        if self.inner.dispatching.swap(true, Ordering::Acquire) {
            panic!("Store::dispatch called from within a change notification");
        }
        let _reset = scopeguard::guard(&self.inner.dispatching, |flag| {
            flag.store(false, Ordering::Release);
        });

        {
            let mut state = self.inner.state.lock();
            let previous = std::mem::take(&mut *state);
            *state = R::reduce(previous, action);
        }

        // The state lock is released before notification so listeners
        // can call `state()` freely. The listener table stays locked for
        // the whole pass; subscribing from within a listener is not
        // supported.
        let mut table = self.inner.listeners.lock();
        for (_, listener) in table.entries.iter_mut() {
            listener();
        }
    }

    /// Registers `listener` to be invoked after every dispatch.
    ///
    /// Registration is scoped: the returned [`Subscription`] removes
    /// exactly this listener when dropped. Listeners registered earlier
    /// are notified before listeners registered later.
    pub fn subscribe<F>(&self, listener: F) -> Subscription<R>
    where
        F: FnMut() + Send + 'static,
    {
        let mut table = self.inner.listeners.lock();
        let id = table.next_id;
        table.next_id += 1;
        table.entries.push((id, Box::new(listener)));
        Subscription {
            inner: Arc::downgrade(&self.inner),
            id,
        }
    }
}

impl<R: Reducer> Default for Store<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Reducer> Clone for Store<R> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

/// Scoped listener registration returned by [`Store::subscribe`].
///
/// Dropping the subscription removes its listener; the store is
/// unaffected if it has already been torn down. Because removal is tied
/// to ownership of this value, a listener cannot be released twice.
pub struct Subscription<R: Reducer> {
    inner: Weak<StoreInner<R>>,
    id: u64,
}

impl<R: Reducer> Subscription<R> {
    /// Removes the listener now instead of at end of scope.
    pub fn unsubscribe(self) {
        drop(self);
    }
}

impl<R: Reducer> Drop for Subscription<R> {
    fn drop(&mut self) {
        if let Some(inner) = self.inner.upgrade() {
            let mut table = inner.listeners.lock();
            table.entries.retain(|(id, _)| *id != self.id);
        }
    }
}
