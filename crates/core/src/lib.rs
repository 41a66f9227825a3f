//! Core traits for rootscan.
//!
//! This crate defines the shared abstractions that the expression compiler,
//! solvers, and driver build on:
//!
//! - [`Equation`]: a scalar function whose roots are searched for
//! - [`Observer`]: receives solver events and optionally returns control actions

mod equation;
mod observer;

pub use equation::{Equation, FromFn, from_fn};
pub use observer::Observer;
