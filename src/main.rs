//! brandprep CLI entrypoint.
//!
//! Parses args, runs both asset pipelines and exits non-zero with the error
//! message on failure. For programmatic use, prefer the library API
//! (`brandprep::api`).

use std::process::ExitCode;

use clap::Parser;

mod cli;

fn main() -> ExitCode {
    let args = cli::CliArgs::parse();
    match cli::run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
