//! CLI entry point for the image interleaving tool

use clap::Parser;
use interweave::io::cli::{Cli, CommandProcessor, failure_message, init_logging};
use std::process::ExitCode;

// Allow print for reporting the failure reason to the user
#[allow(clippy::print_stderr)]
fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // An unwritable stderr leaves nowhere else to report the parse error
            let _ = err.print();
            return if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    init_logging(cli.verbose);

    let mut processor = CommandProcessor::new(cli);
    match processor.process() {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{}", failure_message(&error));
            ExitCode::FAILURE
        }
    }
}
