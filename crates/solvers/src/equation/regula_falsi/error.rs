use thiserror::Error;

use crate::equation::{BracketError, EvalError};

/// Errors that can occur during regula falsi solving.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid bracket: {0}")]
    InvalidBracket(#[from] BracketError),

    #[error(transparent)]
    Evaluation(#[from] EvalError),

    /// The endpoint residuals are equal, so the chord never crosses zero.
    ///
    /// A validated bracket keeps `f(a) * f(b) < 0` through every update, so
    /// this only guards the division and is not expected in practice.
    #[error("degenerate interpolation on [{left}, {right}]: f(a) = f(b) = {residual}")]
    Degenerate {
        left: f64,
        right: f64,
        residual: f64,
    },
}
