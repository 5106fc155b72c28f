//! CLI entry point for Tesseract font training

use clap::Parser;
use std::process::ExitCode;
use tesstrainer::io::cli::{Cli, TrainingSession, exit_status};
use tesstrainer::io::logging;

// Outcome messages are part of the command's interface
#[allow(clippy::print_stdout)]
fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let session = TrainingSession::new(cli);
    let result = session.process();
    match &result {
        Ok(report) => println!("Installed {}", report.installed.display()),
        Err(err) => println!("{err}"),
    }
    ExitCode::from(exit_status(&result))
}
