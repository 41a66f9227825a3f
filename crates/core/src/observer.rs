/// Watches a refinement loop one event at a time and may steer it.
///
/// A solver calls [`observe`](Observer::observe) once per event. Returning
/// `None` leaves the loop alone; `Some(action)` hands the solver one of its
/// own control actions, such as stopping early.
///
/// Any `FnMut(&E) -> Option<A>` closure is an observer, including a `&mut`
/// borrow of one, so a single closure can watch several runs. `()` never acts.
///
/// ```
/// use rootscan_core::Observer;
///
/// let mut seen = 0;
/// let mut stop_after_three = |_: &f64| {
///     seen += 1;
///     (seen == 3).then_some(())
/// };
///
/// assert_eq!(stop_after_three.observe(&1.0), None);
/// assert_eq!(stop_after_three.observe(&0.5), None);
/// assert_eq!(stop_after_three.observe(&0.25), Some(()));
/// ```
pub trait Observer<E, A> {
    /// Inspects `event` and optionally requests an action.
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
