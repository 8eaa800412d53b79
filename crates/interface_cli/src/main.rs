//! Waris - inheritance distribution CLI
//!
//! # Environment Variables
//!
//! * `WARIS_LOG_LEVEL` - Log level: trace, debug, info, warn, error (default: warn)
//! * `WARIS_DEFAULT_LAW_SYSTEM` - `islam` or `perdata`, used when a case omits `lawSystem` (default: islam)
//! * `WARIS_OUTPUT_FORMAT` - `text` or `json` (default: text)
//! * `RUST_LOG` - Overrides the log level with a full filter directive

use std::io;
use std::process::ExitCode;

use clap::Parser;
use interface_cli::{run, Cli, CliConfig, Outcome};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> ExitCode {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let config = CliConfig::load();
    init_tracing(&config.log_level);

    let cli = Cli::parse();
    let stdout = io::stdout();
    match run(cli.command, &config, &mut stdout.lock()) {
        Ok(Outcome::Success) => ExitCode::SUCCESS,
        Ok(Outcome::InvalidCase) => ExitCode::from(1),
        Err(error) => {
            tracing::error!(error = %error, "Command failed");
            eprintln!("Error: {:#}", error);
            ExitCode::from(2)
        }
    }
}

/// Initializes the tracing subscriber, logging to stderr
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true).with_writer(io::stderr))
        .init();
}
