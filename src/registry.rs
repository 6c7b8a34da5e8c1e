use std::sync::{Arc, Weak};

use tracing::trace;

use crate::observable::Observable;

/// The `ObserverRegistry` tracks which observers of capability type `T` are
/// currently interested in a subject's events. Entries are held weakly: the
/// registry never extends an observer's lifetime, and an observer whose last
/// `Arc` is dropped elsewhere falls out of the live set on its own.
///
/// Observers are identified by allocation, not by value. Registering an
/// observer that is already tracked leaves the set unchanged, and removing
/// one that was never registered is a safe no-op.
pub struct ObserverRegistry<T: ?Sized> {
    observers: Vec<Weak<T>>,
}

impl<T: ?Sized> ObserverRegistry<T> {
    /// Create a new, empty `ObserverRegistry`
    pub fn new() -> Self {
        ObserverRegistry { observers: vec![] }
    }

    /// Add `observer` to the tracked set.
    pub fn register_observer(&mut self, observer: &Arc<T>) {
        self.prune();
        if self.position(observer).is_some() {
            trace!("observer already registered");
            return;
        }
        self.observers.push(Arc::downgrade(observer));
    }

    /// Remove `observer` from the tracked set.
    pub fn remove_observer(&mut self, observer: &Arc<T>) {
        self.prune();
        match self.position(observer) {
            Some(index) => {
                self.observers.remove(index);
            }
            None => trace!("observer not registered, nothing to remove"),
        }
    }

    /// Is `observer` currently in the tracked set?
    pub fn contains(&self, observer: &Arc<T>) -> bool {
        self.position(observer).is_some()
    }

    /// The number of live observers in the tracked set.
    pub fn len(&self) -> usize {
        self.observers
            .iter()
            .filter(|weak| weak.strong_count() > 0)
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Upgraded handles to the live observers, in registration order.
    pub fn observers(&self) -> Vec<Arc<T>> {
        self.observers.iter().filter_map(Weak::upgrade).collect()
    }

    // index of the entry sharing an allocation with `observer`, if any
    fn position(&self, observer: &Arc<T>) -> Option<usize> {
        self.observers.iter().position(|weak| match weak.upgrade() {
            Some(live) => Arc::ptr_eq(&live, observer),
            None => false,
        })
    }

    // drop entries whose observer is already gone
    fn prune(&mut self) {
        self.observers.retain(|weak| weak.strong_count() > 0);
    }
}

impl<T: ?Sized> Default for ObserverRegistry<T> {
    fn default() -> Self {
        ObserverRegistry::new()
    }
}

impl<T: ?Sized> Observable<T> for ObserverRegistry<T> {
    fn register_observer(&mut self, observer: &Arc<T>) {
        ObserverRegistry::register_observer(self, observer);
    }

    fn remove_observer(&mut self, observer: &Arc<T>) {
        ObserverRegistry::remove_observer(self, observer);
    }
}
