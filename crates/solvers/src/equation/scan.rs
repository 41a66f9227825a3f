//! Scans a fixed grid for the first interval where the residual changes sign.
//!
//! The scan walks the samples of [`Config`] left to right and returns the
//! first consecutive pair `(a, b)` with `f(a) * f(b) < 0`. Later sign changes
//! are never reported, and a sample where `f` is exactly zero never forms a
//! bracket with either neighbor.
//!
//! When `f` cannot be evaluated at a sample, [`EvalFailure`] decides whether
//! the scan aborts (the default) or skips the sample.

mod config;
mod error;


pub use config::{Config, ConfigError, EvalFailure};
pub use error::Error;

use rootscan_core::Equation;
use tracing::{debug, trace};

use super::{
    evaluate::evaluate,
    interval::{Bounds, Interval},
};

/// Returns the first sign-change interval on the configured grid.
///
/// # Errors
///
/// Returns [`Error::NoSignChange`] if no consecutive pair of samples brackets
/// a sign change, or [`Error::Evaluation`] if evaluation fails at a sample and
/// the policy is [`EvalFailure::Abort`].
pub fn scan<E: Equation>(equation: &E, config: &Config) -> Result<Interval, Error> {
    let mut previous: Option<(f64, f64)> = None;

    for x in config.samples() {
        let residual = match evaluate(equation, x) {
            Ok(residual) => residual,
            Err(error) => match config.eval_failure() {
                EvalFailure::Abort => return Err(error.into()),
                EvalFailure::Skip => {
                    debug!(x, %error, "skipping sample");
                    continue;
                }
            },
        };
        trace!(x, residual, "sampled");

        if let Some((left, left_residual)) = previous {
            let interval = Bounds::new([left, x])
                .and_then(|bounds| Interval::new(bounds, left_residual, residual));
            if let Ok(interval) = interval {
                debug!(left, right = x, "found sign change");
                return Ok(interval);
            }
        }

        previous = Some((x, residual));
    }

    Err(Error::NoSignChange {
        start: config.start(),
        end: config.end(),
        step: config.step(),
    })
}
