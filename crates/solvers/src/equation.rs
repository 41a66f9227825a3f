//! Solvers for equations `f(x) = 0` in one real variable.
//!
//! An [`Equation`] maps `x` to a residual. Solvers in this module first locate
//! an interval where the residual changes sign, then drive the residual toward
//! zero inside that interval.
//!
//! # Solvers
//!
//! - [`scan`]: earliest sign change on an evenly spaced grid
//! - [`bisection`]: halves the bracket each iteration
//! - [`regula_falsi`]: interpolates between the bracket endpoints
//!
//! Both refiners share [`Config`], [`Solution`], and the observer protocol
//! ([`Event`], [`Action`]). They stop as soon as `|f(c)| < residual_tol` or
//! after `max_iters` iterations, whichever comes first.
//!
//! [`Equation`]: rootscan_core::Equation

mod config;
mod evaluate;
mod event;
mod interval;
mod solution;

#[cfg(test)]
mod proptests;

pub use config::{Config, ConfigError};
pub use evaluate::EvalError;
pub use event::{Action, Event};
pub use interval::{BracketError, Interval};
pub use solution::{Iteration, Solution, Status};

pub mod bisection;
pub mod regula_falsi;
pub mod scan;
