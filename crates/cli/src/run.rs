use std::io::{self, BufRead, Write};

use tracing::{debug, info, warn};

use rootscan_expr::compile_in;
use rootscan_solvers::equation::{Config, Solution, bisection, regula_falsi, scan};

use crate::{
    args::{Args, Method},
    error::CliError,
};

const EQUATION_PROMPT: &str = "Enter equation (e.g., x**3 - 5*x + 3): ";
const TOLERANCE_PROMPT: &str = "Enter tolerance: ";

/// Scans for an interval, refines it, and reports the result to `out`.
///
/// The equation and tolerance fall back to prompts on `input` when they
/// were not given on the command line. The tolerance is validated before
/// the equation is compiled.
pub(crate) fn run(
    args: &Args,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<Solution, CliError> {
    let source = match &args.equation {
        Some(source) => source.clone(),
        None => prompt(input, out, EQUATION_PROMPT)?,
    };
    let tolerance = match &args.tolerance {
        Some(text) => text.clone(),
        None => prompt(input, out, TOLERANCE_PROMPT)?,
    };
    let tolerance = parse_tolerance(&tolerance)?;

    let config = Config::new(args.max_iters, tolerance)?;
    let eval_failure = if args.skip_eval_errors {
        scan::EvalFailure::Skip
    } else {
        scan::EvalFailure::Abort
    };
    let scan_config =
        scan::Config::new(args.start, args.end, args.step)?.with_eval_failure(eval_failure);

    let equation = compile_in(&source, &args.variable)?;
    debug!(%equation, "compiled");

    let interval = scan::scan(&equation, &scan_config)?;
    let [a, b] = interval.as_array();
    info!(a, b, "found interval");
    writeln!(out, "Found interval: a = {a:?}, b = {b:?}")?;

    let solution = match args.method {
        Method::Bisection => bisection::solve_unobserved(&equation, [a, b], &config)?,
        Method::RegulaFalsi => regula_falsi::solve_unobserved(&equation, [a, b], &config)?,
    };

    for iteration in &solution.trace {
        writeln!(out, "{iteration}")?;
    }
    writeln!(out)?;
    writeln!(
        out,
        "Approximate root after {} iterations: {:.6}",
        solution.iters, solution.x
    )?;
    writeln!(out, "f(root): {:.6}", solution.residual)?;

    let converged = solution.is_converged();
    if converged {
        info!(x = solution.x, iters = solution.iters, "converged");
    } else {
        warn!(status = ?solution.status, iters = solution.iters, "did not converge");
        writeln!(
            out,
            "Did not converge within {} iterations (tolerance {tolerance})",
            solution.iters
        )?;
    }
    out.flush()?;

    if !converged && args.require_convergence {
        return Err(CliError::NotConverged {
            iters: solution.iters,
            tolerance,
        });
    }

    Ok(solution)
}

/// Parses a strictly positive, finite tolerance.
fn parse_tolerance(text: &str) -> Result<f64, CliError> {
    match text.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value > 0.0 => Ok(value),
        _ => Err(CliError::Tolerance {
            text: text.trim().to_owned(),
        }),
    }
}

fn prompt(input: &mut impl BufRead, out: &mut impl Write, message: &str) -> io::Result<String> {
    write!(out, "{message}")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input ended before a value was entered",
        ));
    }
    Ok(line.trim().to_owned())
}
