//! Command Line Interface (CLI) layer for brandprep.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`) that layers flags over an optional
//! JSON config and hands the result to `brandprep::generate_assets`.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
