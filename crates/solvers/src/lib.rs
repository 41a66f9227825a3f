//! Numerical solvers for rootscan.
//!
//! - [`equation::scan`]: finds the first sign-change interval on a fixed grid
//! - [`equation::bisection`]: refines a bracket by halving it
//! - [`equation::regula_falsi`]: refines a bracket by linear interpolation

pub mod equation;
