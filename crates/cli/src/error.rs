use std::{io, process::ExitCode};

use thiserror::Error;

use rootscan_expr::ParseError;
use rootscan_solvers::equation::{self, BracketError, EvalError, bisection, regula_falsi, scan};

/// Everything that can end a run early.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    #[error("i/o failure: {0}")]
    Io(#[from] io::Error),

    #[error("invalid tolerance {text:?}: expected a positive number")]
    Tolerance { text: String },

    #[error("could not parse equation: {0}")]
    Parse(#[from] ParseError),

    #[error("could not evaluate equation: {0}")]
    Evaluation(#[from] EvalError),

    #[error("no interval found: {0}")]
    NoInterval(String),

    #[error("refinement broke down: {0}")]
    Degenerate(String),

    #[error("did not converge within {iters} iterations (tolerance {tolerance})")]
    NotConverged { iters: usize, tolerance: f64 },

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl CliError {
    /// Process exit code for this failure.
    pub(crate) fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.code())
    }

    pub(crate) fn code(&self) -> u8 {
        match self {
            Self::Io(_) => 1,
            Self::Tolerance { .. } => 2,
            Self::Parse(_) => 3,
            Self::Evaluation(_) => 4,
            Self::NoInterval(_) => 5,
            Self::Degenerate(_) => 6,
            Self::NotConverged { .. } => 7,
            Self::Config(_) => 8,
        }
    }
}

impl From<scan::Error> for CliError {
    fn from(error: scan::Error) -> Self {
        match error {
            scan::Error::Evaluation(source) => Self::Evaluation(source),
            error @ scan::Error::NoSignChange { .. } => Self::NoInterval(error.to_string()),
        }
    }
}

impl From<scan::ConfigError> for CliError {
    fn from(error: scan::ConfigError) -> Self {
        Self::Config(error.to_string())
    }
}

impl From<equation::ConfigError> for CliError {
    fn from(error: equation::ConfigError) -> Self {
        Self::Config(error.to_string())
    }
}

impl From<BracketError> for CliError {
    fn from(error: BracketError) -> Self {
        Self::NoInterval(error.to_string())
    }
}

impl From<bisection::Error> for CliError {
    fn from(error: bisection::Error) -> Self {
        match error {
            bisection::Error::InvalidBracket(source) => source.into(),
            bisection::Error::Evaluation(source) => Self::Evaluation(source),
        }
    }
}

impl From<regula_falsi::Error> for CliError {
    fn from(error: regula_falsi::Error) -> Self {
        match error {
            regula_falsi::Error::InvalidBracket(source) => source.into(),
            regula_falsi::Error::Evaluation(source) => Self::Evaluation(source),
            error @ regula_falsi::Error::Degenerate { .. } => Self::Degenerate(error.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        let errors = [
            CliError::Io(io::Error::other("closed")),
            CliError::Tolerance { text: "abc".into() },
            CliError::Parse(ParseError::Empty),
            CliError::Evaluation(EvalError::NonFinite {
                x: 0.0,
                residual: f64::NAN,
            }),
            CliError::NoInterval(String::new()),
            CliError::Degenerate(String::new()),
            CliError::NotConverged {
                iters: 10,
                tolerance: 1e-4,
            },
            CliError::Config(String::new()),
        ];

        let codes: Vec<u8> = errors.iter().map(CliError::code).collect();
        assert_eq!(codes, vec![1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn scan_failures_map_by_kind() {
        let error: CliError = scan::Error::NoSignChange {
            start: -10.0,
            end: 10.0,
            step: 0.5,
        }
        .into();
        assert_eq!(error.code(), 5);

        let error: CliError = scan::Error::Evaluation(EvalError::NonFinite {
            x: 1.0,
            residual: f64::INFINITY,
        })
        .into();
        assert_eq!(error.code(), 4);
    }

    #[test]
    fn degenerate_regula_falsi_maps_to_its_own_code() {
        let error: CliError = regula_falsi::Error::Degenerate {
            left: 0.0,
            right: 1.0,
            residual: 2.0,
        }
        .into();
        assert_eq!(error.code(), 6);
    }
}
