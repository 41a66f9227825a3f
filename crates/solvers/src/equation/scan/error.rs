use thiserror::Error;

use crate::equation::EvalError;

/// Errors that can occur while scanning for a sign change.
#[derive(Debug, Error)]
pub enum Error {
    #[error("no sign change found on [{start}, {end}) with step {step}")]
    NoSignChange { start: f64, end: f64, step: f64 },

    #[error(transparent)]
    Evaluation(#[from] EvalError),
}
