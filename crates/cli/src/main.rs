//! Command-line driver: reads an equation and a tolerance, scans for the
//! earliest sign change, and refines it to an approximate root.

mod args;
mod error;
mod run;

use std::{io, process::ExitCode};

use clap::Parser;

use crate::args::Args;

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.log_level())
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    match run::run(&args, &mut stdin.lock(), &mut stdout) {
        Ok(_) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("error: {error}");
            error.exit_code()
        }
    }
}
