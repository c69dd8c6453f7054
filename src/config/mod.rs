//! Configuration and CLI argument types.

mod cli;

pub use cli::{parse_args, Cli, Command, InfoArgs, OutputFormat, TablesArgs, ValidateArgs};
