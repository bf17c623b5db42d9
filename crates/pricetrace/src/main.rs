// File: crates/pricetrace/src/main.rs
// Summary: Binary entry point; parses arguments, installs logging, runs and maps failures to exit codes.

mod cli;
mod exit;
mod labels;
mod run;
mod telemetry;

use std::process::ExitCode;

use clap::Parser;

fn main() -> ExitCode {
    let cli = cli::Cli::parse();
    telemetry::init();
    match run::run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(exit::exit_code(&err))
        }
    }
}
