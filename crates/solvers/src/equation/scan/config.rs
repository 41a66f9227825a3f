use thiserror::Error;

/// What the scan does when the equation cannot be evaluated at a sample.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EvalFailure {
    /// Stop scanning and return the evaluation error.
    #[default]
    Abort,

    /// Drop the sample; the next successful sample pairs with the last
    /// successful one.
    Skip,
}

/// Configuration for the interval scan.
///
/// Samples are `start + i * step` for `i = 0, 1, ...` while below `end`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    start: f64,
    end: f64,
    step: f64,
    eval_failure: EvalFailure,
}

/// Errors that can occur when validating a scan config.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ConfigError {
    #[error("start and end must be finite")]
    NonFinite,

    #[error("start must be less than end")]
    EmptyRange,

    #[error("step must be finite and positive")]
    Step,

    #[error("range would need {count} samples, more than the limit of {limit}")]
    TooManySamples { count: f64, limit: usize },
}

impl Default for Config {
    /// Scans `[-10, 10)` in steps of `0.5`, aborting on evaluation errors.
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(-10.0, 10.0, 0.5).unwrap()
    }
}

impl Config {
    /// Upper bound on the number of samples in one scan.
    pub const MAX_SAMPLES: usize = 10_000_000;

    /// Creates a new config for scanning `[start, end)` with the given step.
    ///
    /// # Errors
    ///
    /// Returns an error if the bounds are not finite and ordered, the step is
    /// not a finite positive number, or the range holds more than
    /// [`Config::MAX_SAMPLES`] samples.
    pub fn new(start: f64, end: f64, step: f64) -> Result<Self, ConfigError> {
        if !start.is_finite() || !end.is_finite() {
            return Err(ConfigError::NonFinite);
        }
        if start >= end {
            return Err(ConfigError::EmptyRange);
        }
        if !step.is_finite() || step <= 0.0 {
            return Err(ConfigError::Step);
        }

        let count = ((end - start) / step).ceil();
        #[allow(clippy::cast_precision_loss)]
        if count > Self::MAX_SAMPLES as f64 {
            return Err(ConfigError::TooManySamples {
                count,
                limit: Self::MAX_SAMPLES,
            });
        }

        Ok(Self {
            start,
            end,
            step,
            eval_failure: EvalFailure::default(),
        })
    }

    /// Returns a copy of this config with a different evaluation failure policy.
    #[must_use]
    pub fn with_eval_failure(self, eval_failure: EvalFailure) -> Self {
        Self {
            eval_failure,
            ..self
        }
    }

    #[must_use]
    pub fn start(&self) -> f64 {
        self.start
    }

    #[must_use]
    pub fn end(&self) -> f64 {
        self.end
    }

    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }

    #[must_use]
    pub fn eval_failure(&self) -> EvalFailure {
        self.eval_failure
    }

    /// Returns the number of grid samples strictly below `end`.
    ///
    /// Starts from `ceil((end - start) / step)` and corrects it against the
    /// samples themselves, since the division can round either way.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn sample_count(&self) -> usize {
        let mut count = ((self.end - self.start) / self.step).ceil() as usize;
        while count > 1 && self.sample(count - 1) >= self.end {
            count -= 1;
        }
        while self.sample(count) < self.end {
            count += 1;
        }
        count
    }

    /// Returns the grid samples in increasing order.
    ///
    /// Each sample is computed as `start + i * step` rather than by repeated
    /// addition, so rounding errors do not accumulate along the grid.
    pub fn samples(self) -> impl Iterator<Item = f64> {
        (0..self.sample_count()).map(move |i| self.sample(i))
    }

    #[allow(clippy::cast_precision_loss)]
    fn sample(&self, i: usize) -> f64 {
        self.start + i as f64 * self.step
    }
}
