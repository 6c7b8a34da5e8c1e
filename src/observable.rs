use std::sync::Arc;

/// The two-method contract a subject exposes to parties interested in its
/// events. `T` is the observer capability type, usually a trait object.
///
/// This covers registration bookkeeping only. How (and whether) a subject
/// notifies the observers it tracks is the subject's own business.
pub trait Observable<T: ?Sized> {
    /// Add `observer` to the subject's tracked set.
    fn register_observer(&mut self, observer: &Arc<T>);

    /// Remove `observer` from the subject's tracked set.
    fn remove_observer(&mut self, observer: &Arc<T>);
}
