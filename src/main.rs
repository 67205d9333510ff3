//! AutoNotes CLI entry point.

use anyhow::Result;
use autonotes::cli::{commands, Cli, Commands, Output};
use autonotes::config::Settings;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| format!("autonotes={}", log_level)),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    // Commands propagate failures; the banner below is the one place a
    // failure is shown.
    if let Err(e) = run(cli).await {
        Output::error_banner(&format!("{:#}", e));
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config_path = cli.config.as_ref().map(PathBuf::from);

    // Load configuration
    let mut settings = Settings::load_from(config_path.as_ref())?;

    // Precedence for the backend URL: --api-url flag, then the
    // AUTONOTES_API_URL environment variable (both arrive through clap),
    // then the configured value.
    if let Some(url) = &cli.api_url {
        settings.backend.base_url = url.clone();
    }

    // Execute command
    match &cli.command {
        Commands::Init => {
            commands::run_init(&settings, config_path.as_deref()).await?;
        }

        Commands::Doctor => {
            commands::run_doctor(&settings, config_path.as_deref()).await?;
        }

        Commands::Youtube { url, export } => {
            commands::run_youtube(url, export.clone(), settings).await?;
        }

        Commands::Upload { file, export } => {
            commands::run_upload(file, export.clone(), settings).await?;
        }

        Commands::Show { transcript } => {
            commands::run_show(*transcript, settings)?;
        }

        Commands::Export { format, output } => {
            commands::run_export(format, output.clone(), settings).await?;
        }

        Commands::Clear => {
            commands::run_clear(settings)?;
        }

        Commands::Theme { mode } => {
            commands::run_theme(mode.as_deref(), settings, config_path.as_deref())?;
        }

        Commands::Auth { action } => {
            commands::run_auth(action, settings)?;
        }

        Commands::Config { action } => {
            commands::run_config(action, settings, config_path.as_deref())?;
        }
    }

    Ok(())
}
