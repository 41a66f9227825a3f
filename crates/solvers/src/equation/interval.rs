use thiserror::Error;

use rootscan_core::Equation;

use super::evaluate::{EvalError, evaluate};

/// Errors that can occur when validating a bracket.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum BracketError {
    /// One or both endpoints are non-finite.
    #[error("non-finite endpoint(s)")]
    NonFinite,

    /// Endpoints are equal, giving zero width.
    #[error("zero width")]
    ZeroWidth,

    /// Residuals at the endpoints do not have strictly opposite signs.
    #[error("no sign change: f({left})={left_residual}, f({right})={right_residual}")]
    NoSignChange {
        left: f64,
        right: f64,
        left_residual: f64,
        right_residual: f64,
    },
}

/// An interval `[left, right]` whose endpoint residuals have opposite signs.
///
/// The sign change is checked once, at construction. Refiners shrink the
/// interval in place and do not re-validate it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    left: f64,
    right: f64,
    left_residual: f64,
    right_residual: f64,
}

impl Interval {
    /// Creates an interval from ordered bounds and their residuals.
    ///
    /// # Errors
    ///
    /// Returns `BracketError::NoSignChange` unless
    /// `left_residual * right_residual < 0`. An exact zero at either endpoint
    /// does not count as a sign change.
    pub(crate) fn new(
        bounds: Bounds,
        left_residual: f64,
        right_residual: f64,
    ) -> Result<Self, BracketError> {
        let [left, right] = bounds.as_array();

        if left_residual * right_residual >= 0.0 {
            return Err(BracketError::NoSignChange {
                left,
                right,
                left_residual,
                right_residual,
            });
        }

        Ok(Self {
            left,
            right,
            left_residual,
            right_residual,
        })
    }

    /// Validates `bracket` and evaluates the equation at both endpoints.
    ///
    /// # Errors
    ///
    /// Returns an error if the bounds are invalid, an endpoint evaluation
    /// fails, or the endpoint residuals do not change sign.
    pub(crate) fn from_equation<E, Err>(equation: &E, bracket: [f64; 2]) -> Result<Self, Err>
    where
        E: Equation,
        Err: From<BracketError> + From<EvalError>,
    {
        let bounds = Bounds::new(bracket)?;
        let [left, right] = bounds.as_array();
        let left_residual = evaluate(equation, left)?;
        let right_residual = evaluate(equation, right)?;

        Ok(Self::new(bounds, left_residual, right_residual)?)
    }

    /// Returns the interval bounds as an array.
    #[must_use]
    pub fn as_array(&self) -> [f64; 2] {
        [self.left, self.right]
    }

    #[must_use]
    pub fn left(&self) -> f64 {
        self.left
    }

    #[must_use]
    pub fn right(&self) -> f64 {
        self.right
    }

    /// Returns the residual at the left endpoint.
    #[must_use]
    pub fn left_residual(&self) -> f64 {
        self.left_residual
    }

    /// Returns the residual at the right endpoint.
    #[must_use]
    pub fn right_residual(&self) -> f64 {
        self.right_residual
    }

    /// Returns the interval width.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    /// Returns the midpoint of the interval.
    #[must_use]
    pub fn midpoint(&self) -> f64 {
        0.5 * (self.left + self.right)
    }

    /// Returns where the chord through both endpoints crosses zero.
    ///
    /// Returns `None` if the endpoint residuals are equal.
    #[must_use]
    pub fn false_position(&self) -> Option<f64> {
        let (a, b) = (self.left, self.right);
        let (fa, fb) = (self.left_residual, self.right_residual);

        #[allow(clippy::float_cmp)]
        if fa == fb {
            return None;
        }

        Some((a * fb - b * fa) / (fb - fa))
    }

    /// Shrinks the interval using a new point and its residual.
    ///
    /// The right endpoint moves to `x` if the residual changes sign between
    /// `left` and `x`; otherwise the left endpoint moves.
    pub(crate) fn shrink(&mut self, x: f64, residual: f64) {
        if self.left_residual * residual < 0.0 {
            self.right = x;
            self.right_residual = residual;
        } else {
            self.left = x;
            self.left_residual = residual;
        }
    }
}

/// Ordered finite bounds for a bracket.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Bounds {
    left: f64,
    right: f64,
}

impl Bounds {
    /// Validates and orders the bracket endpoints.
    ///
    /// # Errors
    ///
    /// Returns `BracketError` if endpoints are non-finite or zero width.
    pub(crate) fn new(bracket: [f64; 2]) -> Result<Self, BracketError> {
        let [left, right] = bracket;

        if !left.is_finite() || !right.is_finite() {
            return Err(BracketError::NonFinite);
        }

        #[allow(clippy::float_cmp)]
        if left == right {
            return Err(BracketError::ZeroWidth);
        }

        if left < right {
            Ok(Self { left, right })
        } else {
            Ok(Self {
                left: right,
                right: left,
            })
        }
    }

    /// Returns the bounds as an array.
    pub(crate) fn as_array(&self) -> [f64; 2] {
        [self.left, self.right]
    }
}
