/// Watches an orbit or escape-time run one iteration at a time.
///
/// After every application of `z ↦ z² + c` the run hands the observer an event
/// describing the grid at that iteration: the orbit driver reports the step
/// number and current `z`, the escape-time driver also reports how many points
/// are above the threshold. Returning an action (such as stopping early) ends
/// the run with the partial result; returning `None` lets it continue.
///
/// Any `FnMut(&E) -> Option<A>` closure is an observer, which covers most
/// one-off uses like collecting per-iteration escape counts. The unit type
/// `()` never acts and backs the unobserved `n_steps` and `divergence_iters`.
pub trait Observer<E, A> {
    /// Inspects the event for the iteration that just finished.
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

/// Lets every iteration run to completion.
impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}
