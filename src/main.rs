//! SafetyNet Alerts - Application entry point
//!
//! CLI-based entry point that dispatches to the record and alert commands.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use safetynet_alerts::{cli::Cli, commands, config::Config, services::Services};

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize tracing (verbose mode sets debug level)
    init_tracing(cli.verbose);

    // Load configuration, the --data flag wins over the environment
    let mut config = Config::from_env();
    if let Some(path) = cli.data {
        config = config.with_data_path(path);
    }
    tracing::debug!("Configuration loaded");

    let services = Services::from_config(&config);

    if let Err(e) = commands::execute(cli.command, &services).await {
        tracing::error!("Command failed [{}]: {}", e.code(), e.user_message());
        std::process::exit(1);
    }
}

/// Initialize tracing subscriber
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        "debug".to_string()
    } else {
        std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string())
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();
}
