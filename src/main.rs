//! CLI entry point for tolerance-bounded connected region search

use clap::Parser;
use gridreach::io::cli::{Cli, SearchRunner};
use gridreach::io::configuration::DEFAULT_LOG_FILTER;
use std::process::ExitCode;

// Allow print for user-facing error reporting
#[allow(clippy::print_stderr)]
fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(DEFAULT_LOG_FILTER))
        .init();

    let runner = SearchRunner::new(Cli::parse());
    match runner.run() {
        Ok(_) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("error: {error}");
            if let Some(hint) = error.hint() {
                eprintln!("hint: {hint}");
            }
            ExitCode::FAILURE
        }
    }
}
