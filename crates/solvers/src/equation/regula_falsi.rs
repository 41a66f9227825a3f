//! Regula falsi (false position) for single-variable equations.
//!
//! # Algorithm
//!
//! Starting from a bracket `[a, b]` with `f(a) * f(b) < 0`, each iteration
//! evaluates the point where the chord through `(a, f(a))` and `(b, f(b))`
//! crosses zero:
//!
//! ```text
//! c = (a * f(b) - b * f(a)) / (f(b) - f(a))
//! ```
//!
//! If `|f(c)| < residual_tol` the solver stops; otherwise `b = c` when
//! `f(a) * f(c) < 0` and `a = c` when not.
//!
//! This is the unmodified method: on strongly convex or concave functions one
//! endpoint can stay fixed for many iterations, and the bracket width does not
//! shrink to zero. Termination relies on the residual tolerance and the
//! iteration cap alone.
//!
//! # Termination
//!
//! Same as [`bisection`](super::bisection): [`Status::Converged`],
//! [`Status::MaxIters`] (reporting the last `c`), or
//! [`Status::StoppedByObserver`].

mod error;


pub use error::Error;

use rootscan_core::{Equation, Observer};
use tracing::debug;

use super::{
    Action, Config, Event, Interval, Iteration, Solution, Status, evaluate::evaluate,
};

/// Finds a root of the equation using the regula falsi method.
///
/// The observer sees every iteration before the convergence check.
///
/// # Errors
///
/// Returns an error if the bracket is invalid, the equation cannot be
/// evaluated, or the endpoint residuals become equal.
pub fn solve<E, Obs>(
    equation: &E,
    bracket: [f64; 2],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    E: Equation,
    Obs: Observer<Event, Action>,
{
    let mut interval = Interval::from_equation::<_, Error>(equation, bracket)?;
    let mut trace = Vec::with_capacity(config.max_iters());
    let mut iter = 1;

    loop {
        let bracket = interval.as_array();
        let x = interval
            .false_position()
            .ok_or_else(|| Error::Degenerate {
                left: interval.left(),
                right: interval.right(),
                residual: interval.left_residual(),
            })?;
        let residual = evaluate(equation, x)?;
        debug!(iter, x, residual, "regula falsi iteration");

        let iteration = Iteration { iter, x, residual };
        trace.push(iteration);

        let event = Event { iteration, bracket };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(Solution::finish(Status::StoppedByObserver, iteration, trace));
        }

        if residual.abs() < config.residual_tol() {
            return Ok(Solution::finish(Status::Converged, iteration, trace));
        }

        if iter == config.max_iters() {
            return Ok(Solution::finish(Status::MaxIters, iteration, trace));
        }

        interval.shrink(x, residual);
        iter += 1;
    }
}

/// Runs regula falsi without observation.
///
/// # Errors
///
/// Returns an error if the bracket is invalid, the equation cannot be
/// evaluated, or the endpoint residuals become equal.
pub fn solve_unobserved<E: Equation>(
    equation: &E,
    bracket: [f64; 2],
    config: &Config,
) -> Result<Solution, Error> {
    solve(equation, bracket, config, ())
}
