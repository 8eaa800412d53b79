//! Command-line interface for the inheritance engine
//!
//! The `waris` binary reads a case as JSON, validates it, and prints the
//! distribution as a text report or as JSON.
//!
//! ```bash
//! waris calculate --input case.json
//! waris calculate --input - --law perdata --format json < case.json
//! waris validate --input case.json
//! waris relations --gender female --input case.json
//! ```

pub mod commands;
pub mod config;
pub mod input;
pub mod render;

pub use commands::{run, Cli, Command, Outcome};
pub use config::{CliConfig, OutputFormat};
