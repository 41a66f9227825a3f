//! Property-based tests for scanning and refinement.

use std::{cell::Cell, convert::Infallible};

use proptest::prelude::*;

use rootscan_core::{Equation, from_fn};

use super::{Config, Status, bisection, regula_falsi, scan};

/// Counts how many times the wrapped equation is evaluated.
struct Counting<F> {
    f: F,
    calls: Cell<usize>,
}

impl<F: Fn(f64) -> f64> Equation for Counting<F> {
    type Error = Infallible;

    fn residual(&self, x: f64) -> Result<f64, Self::Error> {
        self.calls.set(self.calls.get() + 1);
        Ok((self.f)(x))
    }
}

fn root() -> impl Strategy<Value = f64> {
    -9.9f64..9.9
}

proptest! {
    #[test]
    fn scanned_interval_always_brackets_a_sign_change(
        r1 in root(),
        r2 in root(),
        r3 in root(),
        scale in prop_oneof![Just(-1.0), Just(1.0)],
    ) {
        let f = from_fn(move |x| scale * (x - r1) * (x - r2) * (x - r3));
        let config = scan::Config::default();

        match scan::scan(&f, &config) {
            Ok(interval) => {
                let [a, b] = interval.as_array();
                prop_assert!(f.residual(a).unwrap() * f.residual(b).unwrap() < 0.0);
                prop_assert!((b - a - config.step()).abs() < 1e-12);
                prop_assert!(a >= config.start() && b < config.end());
            }
            Err(scan::Error::NoSignChange { .. }) => {}
            Err(other) => prop_assert!(false, "unexpected error: {other}"),
        }
    }

    #[test]
    fn leftmost_root_is_bracketed_first(
        r1 in -9.4f64..-0.6,
        r2 in 0.6f64..9.4,
    ) {
        let f = from_fn(move |x| (x - r1) * (x - r2));

        let interval = scan::scan(&f, &scan::Config::default()).unwrap();

        let [a, b] = interval.as_array();
        prop_assert!(a < r1 && r1 < b, "[{a}, {b}] should contain {r1}");
    }

    #[test]
    fn refiners_respect_the_iteration_cap(
        r in -0.99f64..0.99,
        max_iters in 1usize..40,
    ) {
        let config = Config::new(max_iters, 1e-300).unwrap();

        let f = Counting { f: move |x: f64| x.powi(3) - r, calls: Cell::new(0) };
        let solution = bisection::solve_unobserved(&f, [-1.0, 1.0], &config).unwrap();
        prop_assert!(solution.iters <= max_iters);
        prop_assert_eq!(solution.trace.len(), solution.iters);
        prop_assert!(f.calls.get() <= max_iters + 2);

        let f = Counting { f: move |x: f64| x.powi(3) - r, calls: Cell::new(0) };
        let solution = regula_falsi::solve_unobserved(&f, [-1.0, 1.0], &config).unwrap();
        prop_assert!(solution.iters <= max_iters);
        prop_assert_eq!(solution.trace.len(), solution.iters);
        prop_assert!(f.calls.get() <= max_iters + 2);
    }

    #[test]
    fn bisection_meets_tolerance_or_error_bound(
        r in 0.001f64..0.999,
        max_iters in 1usize..30,
    ) {
        let f = from_fn(move |x| x - r);
        let config = Config::new(max_iters, 1e-9).unwrap();

        let solution = bisection::solve_unobserved(&f, [0.0, 1.0], &config).unwrap();

        match solution.status {
            Status::Converged => prop_assert!(solution.residual.abs() < 1e-9),
            Status::MaxIters => {
                #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
                let bound = 1.0 / 2f64.powi(max_iters as i32);
                prop_assert!((solution.x - r).abs() <= bound);
            }
            Status::StoppedByObserver => prop_assert!(false, "no observer was attached"),
        }
    }

    #[test]
    fn grid_samples_stay_below_end(
        start in -20i32..20,
        width in 1i32..40,
        step in 1i32..10,
    ) {
        let start = f64::from(start) / 10.0;
        let end = start + f64::from(width) / 10.0;
        let step = f64::from(step) / 10.0;
        let config = scan::Config::new(start, end, step).unwrap();

        let samples: Vec<f64> = config.samples().collect();
        prop_assert!(!samples.is_empty());
        prop_assert!(samples.iter().all(|&x| x < end), "{samples:?} reaches {end}");

        let next = start + f64::from(u32::try_from(samples.len()).unwrap()) * step;
        prop_assert!(next >= end);
    }
}
