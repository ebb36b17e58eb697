//! chartcrop CLI entrypoint.
//!
//! Provides a thin wrapper over the `cli` module: parse args, crop the target
//! directory, and exit with appropriate status. For programmatic use, prefer
//! the library API (`chartcrop::api`).

use std::process::ExitCode;

use clap::Parser;

mod cli;

fn main() -> ExitCode {
    let args = cli::CliArgs::parse();
    match cli::run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            println!("ERROR: {e}");
            ExitCode::from(1)
        }
    }
}
