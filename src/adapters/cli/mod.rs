//! Command-line adapter. clap argument model and the one-shot command runner.

pub mod args;
pub mod runner;

pub use args::{Cli, Command, InputArgs};
pub use runner::CliInputPort;
