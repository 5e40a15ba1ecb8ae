//! # ShreeAura Admin Console
//!
//! Thin entry point: load `.env`, parse arguments, set up logging, run one
//! command and map its outcome to an exit code.
//!
//! | Exit code | Meaning                                   |
//! |-----------|-------------------------------------------|
//! | 0         | Success                                   |
//! | 1         | Any failure reported by the API or locally|
//! | 2         | Not logged in, or the session expired     |

use std::process::ExitCode;

use clap::Parser;

use admin_console::cli::{self, Cli};
use admin_console::config::ConsoleConfig;
use admin_console::debug;

#[tokio::main]
async fn main() -> ExitCode {
    // Load environment variables
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = match ConsoleConfig::from_env().and_then(|base| cli::resolve_config(&cli, base)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let _log_guard = debug::init_logger(&config, cli.verbose);

    match cli::run(cli.command, &config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.is_session_error() => {
            tracing::warn!(error = %e, "Command stopped at the session guard");
            eprintln!("Error: {}", e);
            eprintln!("Run `shreeaura-admin login --email <email>` to sign in.");
            ExitCode::from(2)
        }
        Err(e) => {
            tracing::error!(error = %e, "Command failed");
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
