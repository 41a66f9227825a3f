use std::convert::Infallible;

/// A single-variable real function whose roots a solver searches for.
///
/// Implementations must be pure: evaluating the same `x` twice yields the
/// same residual. Evaluation may fail at specific points (division by zero,
/// domain errors), which solvers surface together with the offending `x`.
pub trait Equation {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Evaluates the residual `f(x)`.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if `f` is not defined at `x`.
    fn residual(&self, x: f64) -> Result<f64, Self::Error>;
}

impl<T: Equation + ?Sized> Equation for &T {
    type Error = T::Error;

    fn residual(&self, x: f64) -> Result<f64, Self::Error> {
        (**self).residual(x)
    }
}

/// An [`Equation`] backed by an infallible closure.
///
/// Created by [`from_fn`].
#[derive(Debug, Clone, Copy)]
pub struct FromFn<F>(F);

/// Wraps a closure `f64 -> f64` as an [`Equation`] that never fails.
pub fn from_fn<F>(f: F) -> FromFn<F>
where
    F: Fn(f64) -> f64,
{
    FromFn(f)
}

impl<F> Equation for FromFn<F>
where
    F: Fn(f64) -> f64,
{
    type Error = Infallible;

    fn residual(&self, x: f64) -> Result<f64, Self::Error> {
        Ok((self.0)(x))
    }
}
