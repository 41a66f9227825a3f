use std::{cell::Cell, convert::Infallible};

use approx::assert_relative_eq;

use rootscan_core::{Equation, from_fn};
use rootscan_expr::compile;

use crate::equation::{Action, BracketError, Config, EvalError, Event};

use super::{Error, Status, solve, solve_unobserved};

/// f(x) = x² - 2, with a root at √2.
struct SquareMinusTwo;

impl Equation for SquareMinusTwo {
    type Error = Infallible;

    fn residual(&self, x: f64) -> Result<f64, Self::Error> {
        Ok(x * x - 2.0)
    }
}

/// Counts how many times the wrapped equation is evaluated.
struct Counting<E> {
    inner: E,
    calls: Cell<usize>,
}

impl<E: Equation> Equation for Counting<E> {
    type Error = E::Error;

    fn residual(&self, x: f64) -> Result<f64, Self::Error> {
        self.calls.set(self.calls.get() + 1);
        self.inner.residual(x)
    }
}

#[test]
fn hits_iteration_cap_on_cubic() {
    let f = compile("x**3 - 5*x + 3").expect("should compile");

    let solution =
        solve_unobserved(&f, [-2.5, -2.0], &Config::default()).expect("should run");

    assert_eq!(solution.status, Status::MaxIters);
    assert_eq!(solution.iters, 10);
    assert_eq!(solution.trace.len(), 10);
    assert_relative_eq!(solution.x, -2.490_722_656_25);
    assert_relative_eq!(solution.residual, 0.001_918_756_752, epsilon = 1e-9);

    let midpoints: Vec<f64> = solution.trace.iter().take(3).map(|it| it.x).collect();
    assert_eq!(midpoints, vec![-2.25, -2.375, -2.4375]);
}

#[test]
fn converges_when_residual_is_small_enough() {
    let config = Config::new(10, 1e-2).unwrap();

    let solution = solve_unobserved(&SquareMinusTwo, [1.0, 2.0], &config).expect("should run");

    assert_eq!(solution.status, Status::Converged);
    assert!(solution.is_converged());
    assert_eq!(solution.iters, 7);
    assert_relative_eq!(solution.x, 1.414_062_5);
    assert!(solution.residual.abs() < 1e-2);
}

#[test]
fn finds_exact_root_at_first_midpoint() {
    let f = from_fn(|x| x - 1.5);

    let solution = solve_unobserved(&f, [1.0, 2.0], &Config::default()).expect("should run");

    assert_eq!(solution.status, Status::Converged);
    assert_eq!(solution.iters, 1);
    assert_relative_eq!(solution.x, 1.5);
}

#[test]
fn stays_within_the_halving_error_bound() {
    let root = 1.3;
    let f = from_fn(move |x| x - root);
    let config = Config::new(10, 1e-6).unwrap();

    let solution = solve_unobserved(&f, [1.0, 2.0], &config).expect("should run");

    assert_eq!(solution.status, Status::MaxIters);
    assert!((solution.x - root).abs() <= 1.0 / 2f64.powi(10));
}

#[test]
fn evaluates_once_per_iteration() {
    let f = Counting {
        inner: SquareMinusTwo,
        calls: Cell::new(0),
    };
    let config = Config::new(25, 1e-300).unwrap();

    let solution = solve_unobserved(&f, [1.0, 2.0], &config).expect("should run");

    assert_eq!(solution.iters, 25);
    assert_eq!(f.calls.get(), 25 + 2);
}

#[test]
fn observer_sees_each_iteration_and_can_stop() {
    let mut seen = Vec::new();
    let observer = |event: &Event| {
        seen.push(event.bracket);
        (event.iteration.iter >= 3).then_some(Action::StopEarly)
    };

    let solution =
        solve(&SquareMinusTwo, [1.0, 2.0], &Config::default(), observer).expect("should run");

    assert_eq!(solution.status, Status::StoppedByObserver);
    assert_eq!(solution.iters, 3);
    assert_relative_eq!(solution.x, 1.375);
    assert_eq!(seen, vec![[1.0, 2.0], [1.0, 1.5], [1.25, 1.5]]);
}

#[test]
fn normalizes_reversed_bracket() {
    let solution =
        solve_unobserved(&SquareMinusTwo, [2.0, 1.0], &Config::default()).expect("should run");

    assert_relative_eq!(solution.trace[0].x, 1.5);
    assert_relative_eq!(solution.x, 1.415_039_062_5);
}

#[test]
fn errors_on_invalid_brackets() {
    let config = Config::default();

    let result = solve_unobserved(&SquareMinusTwo, [5.0, 5.0], &config);
    assert!(matches!(
        result,
        Err(Error::InvalidBracket(BracketError::ZeroWidth))
    ));

    let result = solve_unobserved(&SquareMinusTwo, [f64::NAN, 1.0], &config);
    assert!(matches!(
        result,
        Err(Error::InvalidBracket(BracketError::NonFinite))
    ));

    let result = solve_unobserved(&SquareMinusTwo, [2.0, 3.0], &config);
    assert!(matches!(
        result,
        Err(Error::InvalidBracket(BracketError::NoSignChange { .. }))
    ));
}

#[test]
fn no_real_root_is_not_a_bracket() {
    let f = compile("x**2 + 1").expect("should compile");

    let result = solve_unobserved(&f, [-1.0, 1.0], &Config::default());

    assert!(matches!(
        result,
        Err(Error::InvalidBracket(BracketError::NoSignChange { .. }))
    ));
}

#[test]
fn propagates_evaluation_failures() {
    let f = compile("1/x").expect("should compile");

    let result = solve_unobserved(&f, [-1.0, 1.0], &Config::default());

    match result {
        Err(Error::Evaluation(err @ EvalError::Failed { .. })) => assert_eq!(err.x(), 0.0),
        other => panic!("expected evaluation failure, got {other:?}"),
    }
}
