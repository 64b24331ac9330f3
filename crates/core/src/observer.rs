/// Receives solver events and decides how the iteration should proceed.
///
/// Solvers in this framework do not print or log; anything a caller wants to
/// know about the iteration arrives through an observer. Returning
/// `Some(action)` requests a solver-specific control action (stopping early,
/// for example), while `None` lets the solver continue unchanged.
///
/// Closures implement `Observer` automatically, and `()` is the no-op
/// observer for callers that want no observation at all.
pub trait Observer<E, A> {
    /// Observes a solver event and optionally returns a control action.
    fn observe(&mut self, event: &E) -> Option<A>;
}

/// Blanket implementation for observer closures.
impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

/// A no-op observer that always returns `None`.
impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}
