use super::Iteration;

/// Control actions supported by the bracketing refiners.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver early and return the current approximation.
    StopEarly,
}

/// Iteration event emitted by the bracketing refiners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// The approximation computed in this iteration.
    pub iteration: Iteration,

    /// The bracket the approximation was computed from.
    pub bracket: [f64; 2],
}
