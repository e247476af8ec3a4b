//! CLI layer for incflat.
//!
//! Provides the command-line interface using clap, with commands for
//! flattening a file and for checking that its includes resolve.

pub mod commands;
pub mod output;
pub mod parser;

pub use commands::{execute, execute_with};
pub use output::OutputFormat;
pub use parser::{Cli, Commands, SearchArgs};
