/// Sees each solver event and may answer with an action.
///
/// `E` and `A` are the solver's event and action types. Returning `None`
/// leaves the solver alone. Any `FnMut(&E) -> Option<A>` is an observer, and
/// `()` is the observer that never acts.
pub trait Observer<E, A> {
    fn observe(&mut self, event: &E) -> Option<A>;
}

impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}
