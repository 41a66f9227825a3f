use thiserror::Error;

use crate::equation::{BracketError, EvalError};

/// Errors that can occur during bisection solving.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid bracket: {0}")]
    InvalidBracket(#[from] BracketError),

    #[error(transparent)]
    Evaluation(#[from] EvalError),
}
