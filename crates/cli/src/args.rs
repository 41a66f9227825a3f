use clap::{ArgAction, Parser, ValueEnum};

use rootscan_expr::DEFAULT_VARIABLE;

/// Locate and refine a real root of a single-variable equation.
///
/// The equation is scanned on an evenly spaced grid for the earliest sign
/// change, and the resulting interval is refined with the chosen method.
#[derive(Parser, Debug, Clone)]
#[command(name = "rootscan", version)]
pub(crate) struct Args {
    /// Equation to solve, e.g. "x**3 - 5*x + 3" or "x**2 = 4"
    pub equation: Option<String>,

    /// Stop once |f(c)| is below this positive value
    #[arg(short, long, value_name = "TEXT")]
    pub tolerance: Option<String>,

    /// Refinement method
    #[arg(short, long, value_enum, default_value_t = Method::Bisection)]
    pub method: Method,

    /// Maximum number of refinement iterations
    #[arg(long, value_name = "N", default_value_t = 10)]
    pub max_iters: usize,

    /// First grid sample
    #[arg(long, value_name = "X", default_value_t = -10.0, allow_negative_numbers = true)]
    pub start: f64,

    /// End of the grid (exclusive)
    #[arg(long, value_name = "X", default_value_t = 10.0, allow_negative_numbers = true)]
    pub end: f64,

    /// Distance between grid samples
    #[arg(long, value_name = "X", default_value_t = 0.5)]
    pub step: f64,

    /// Name of the free variable
    #[arg(long, value_name = "NAME", default_value = DEFAULT_VARIABLE)]
    pub variable: String,

    /// Skip grid samples where the equation cannot be evaluated
    #[arg(long)]
    pub skip_eval_errors: bool,

    /// Exit with an error if the iteration cap is reached first
    #[arg(long)]
    pub require_convergence: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Method {
    /// Halve the interval each iteration
    Bisection,
    /// Interpolate between the interval endpoints
    RegulaFalsi,
}

impl Args {
    /// Log level implied by the number of `-v` flags.
    pub(crate) fn log_level(&self) -> tracing::Level {
        match self.verbose {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use clap::CommandFactory;

    #[test]
    fn command_is_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn defaults_match_the_library() {
        let args = Args::try_parse_from(["rootscan"]).unwrap();

        assert_eq!(args.equation, None);
        assert_eq!(args.tolerance, None);
        assert_eq!(args.method, Method::Bisection);
        assert_eq!(args.max_iters, 10);
        assert_eq!([args.start, args.end, args.step], [-10.0, 10.0, 0.5]);
        assert_eq!(args.variable, "x");
        assert!(!args.skip_eval_errors);
        assert!(!args.require_convergence);
        assert_eq!(args.log_level(), tracing::Level::WARN);
    }

    #[test]
    fn parses_all_options() {
        let args = Args::try_parse_from([
            "rootscan",
            "-t",
            "1e-6",
            "-m",
            "regula-falsi",
            "--max-iters",
            "50",
            "--start",
            "-3",
            "--end",
            "3",
            "--step",
            "0.25",
            "--variable",
            "t",
            "--skip-eval-errors",
            "--require-convergence",
            "-vv",
            "t**2 - 2",
        ])
        .unwrap();

        assert_eq!(args.equation.as_deref(), Some("t**2 - 2"));
        assert_eq!(args.tolerance.as_deref(), Some("1e-6"));
        assert_eq!(args.method, Method::RegulaFalsi);
        assert_eq!(args.max_iters, 50);
        assert_eq!([args.start, args.end, args.step], [-3.0, 3.0, 0.25]);
        assert_eq!(args.variable, "t");
        assert!(args.skip_eval_errors);
        assert!(args.require_convergence);
        assert_eq!(args.log_level(), tracing::Level::DEBUG);
    }

    #[test]
    fn rejects_unknown_method() {
        assert!(Args::try_parse_from(["rootscan", "-m", "newton"]).is_err());
    }
}
