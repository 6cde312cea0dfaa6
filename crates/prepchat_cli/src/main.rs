//! CLI entry point for prepchat.

mod cli;
mod commands;
mod driver;
mod output;
mod topics;

use clap::Parser;

use crate::cli::Cli;

/// Load configuration env files. Order: 1) ~/.prepchat/env  2) .env in the
/// current directory. Later files never override already-set variables.
fn load_env_files() {
    if let Some(home) = dirs::home_dir() {
        let config_path = home.join(".prepchat").join("env");
        if config_path.exists() {
            let _ = dotenvy::from_path(&config_path);
        }
    }
    let _ = dotenvy::dotenv();
}

#[tokio::main]
async fn main() {
    load_env_files();
    let cli = Cli::parse();
    output::init(cli.output);

    let log_level = if cli.verbose { "debug" } else { "warn" };
    if let Err(e) = prepchat_observability::init(
        prepchat_observability::ObservabilityConfig::new("prepchat").with_log_level(log_level),
    ) {
        output::warning(&format!("tracing setup failed: {e}"));
    }

    if let Err(e) = commands::handle(cli).await {
        output::error(&e.to_string());
        std::process::exit(1);
    }
}
