//! Bisection for single-variable equations.
//!
//! # Algorithm
//!
//! Starting from a bracket `[a, b]` with `f(a) * f(b) < 0`, each iteration
//! evaluates the midpoint `c = (a + b) / 2`. If `|f(c)| < residual_tol` the
//! solver stops; otherwise `b = c` when `f(a) * f(c) < 0` and `a = c` when not.
//!
//! Endpoint residuals are evaluated once and then carried along with the
//! bracket, so each iteration costs exactly one evaluation of `f`.
//!
//! # Termination
//!
//! - [`Status::Converged`] when `|f(c)| < residual_tol`
//! - [`Status::MaxIters`] after `max_iters` iterations, reporting the last `c`
//! - [`Status::StoppedByObserver`] when the observer returns [`Action::StopEarly`]
//!
//! After `n` iterations without convergence the last midpoint lies within
//! `(b - a) / 2^n` of a sign change of `f`.

mod error;

#[cfg(test)]
mod tests;

pub use error::Error;

use rootscan_core::{Equation, Observer};
use tracing::debug;

use super::{
    Action, Config, Event, Interval, Iteration, Solution, Status, evaluate::evaluate,
};

/// Finds a root of the equation using the bisection method.
///
/// The observer sees every iteration before the convergence check.
///
/// # Errors
///
/// Returns an error if the bracket is invalid or the equation cannot be
/// evaluated at an endpoint or a midpoint.
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
        let x = interval.midpoint();
        let residual = evaluate(equation, x)?;
        debug!(iter, x, residual, "bisection iteration");

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

/// Runs bisection without observation.
///
/// # Errors
///
/// Returns an error if the bracket is invalid or the equation cannot be
/// evaluated at an endpoint or a midpoint.
pub fn solve_unobserved<E: Equation>(
    equation: &E,
    bracket: [f64; 2],
    config: &Config,
) -> Result<Solution, Error> {
    solve(equation, bracket, config, ())
}
