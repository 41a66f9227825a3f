use std::error::Error as StdError;

use thiserror::Error;

use rootscan_core::Equation;

/// Errors that can occur when evaluating an equation at a single point.
#[derive(Debug, Error)]
pub enum EvalError {
    /// The equation returned an error.
    #[error("f({x}) failed: {source}")]
    Failed {
        x: f64,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },

    /// The equation returned NaN or an infinite residual.
    #[error("f({x}) is not finite: {residual}")]
    NonFinite { x: f64, residual: f64 },
}

impl EvalError {
    /// Returns the `x` at which evaluation failed.
    #[must_use]
    pub fn x(&self) -> f64 {
        match self {
            Self::Failed { x, .. } | Self::NonFinite { x, .. } => *x,
        }
    }
}

/// Evaluates the residual at `x`, rejecting non-finite values.
pub(crate) fn evaluate<E: Equation>(equation: &E, x: f64) -> Result<f64, EvalError> {
    let residual = equation.residual(x).map_err(|error| EvalError::Failed {
        x,
        source: Box::new(error),
    })?;

    if !residual.is_finite() {
        return Err(EvalError::NonFinite { x, residual });
    }

    Ok(residual)
}
