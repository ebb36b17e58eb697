//! Command Line Interface (CLI) layer for chartcrop.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`) that prints the per-file log
//! lines and the run summary on stdout. It wires the target directory to
//! the library functionality exposed via `chartcrop::api`.
//!
//! If you are embedding chartcrop into another application, prefer using
//! the high-level `chartcrop::api` module instead of calling the CLI code.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
