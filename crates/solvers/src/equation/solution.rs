use std::fmt;

/// Indicates whether the solver converged or hit the iteration limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// `|f(x)|` fell below the residual tolerance.
    Converged,

    /// Reached the iteration limit without converging.
    MaxIters,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// One refinement step: the approximation `x` and its residual.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Iteration {
    /// Iteration counter (1-based).
    pub iter: usize,
    pub x: f64,
    pub residual: f64,
}

impl fmt::Display for Iteration {
    /// Formats as `Iteration k: c = <x>, f(c) = <residual>` with six decimals.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Iteration {}: c = {:.6}, f(c) = {:.6}",
            self.iter, self.x, self.residual
        )
    }
}

/// The result of a bracketing refinement.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// Final solver status.
    pub status: Status,

    /// The last computed approximation of the root.
    pub x: f64,

    /// Residual at `x`.
    pub residual: f64,

    /// Iteration count when the solver finished.
    pub iters: usize,

    /// Every approximation, in the order it was computed.
    pub trace: Vec<Iteration>,
}

impl Solution {
    /// Builds a solution that reports `last` as the approximation.
    pub(crate) fn finish(status: Status, last: Iteration, trace: Vec<Iteration>) -> Self {
        Self {
            status,
            x: last.x,
            residual: last.residual,
            iters: last.iter,
            trace,
        }
    }

    /// Returns true if the solver met the residual tolerance.
    #[must_use]
    pub fn is_converged(&self) -> bool {
        self.status == Status::Converged
    }
}
