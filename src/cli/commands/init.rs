//! Init command - interactive first-run setup.

use crate::api::ApiClient;
use crate::cli::Output;
use crate::config::Settings;
use console::style;
use std::io::{self, Write};
use std::path::Path;

/// Run the init command for first-time setup.
pub async fn run_init(settings: &Settings, config_path: Option<&Path>) -> anyhow::Result<()> {
    Output::header("AutoNotes Setup");
    println!();
    println!("Welcome to AutoNotes! Turn hours of content into minutes of reading.\n");

    // Step 1: Explain the pipeline
    println!("{}", style("Step 1: How it works").bold().cyan());
    println!();

    let steps = [
        (
            "Paste URL or upload",
            "Point a command at a YouTube link or a local audio file.",
        ),
        (
            "AI analysis",
            "The backend transcribes the audio and analyzes the content structure.",
        ),
        (
            "Get smart notes",
            "Review organized notes and key takeaways, ready to export as PDF or TXT.",
        ),
    ];
    for (index, (title, description)) in steps.iter().enumerate() {
        println!(
            "  {} {} - {}",
            style(format!("{}.", index + 1)).cyan().bold(),
            style(title).bold(),
            description
        );
    }

    println!();

    // Step 2: Create directories
    println!("{}", style("Step 2: Setting up directories").bold().cyan());
    println!();

    let data_dir = settings.data_dir();
    if !data_dir.exists() {
        std::fs::create_dir_all(&data_dir)?;
        Output::success(&format!("Created data directory: {}", data_dir.display()));
    } else {
        Output::info(&format!("Data directory exists: {}", data_dir.display()));
    }

    println!();

    // Step 3: Create config file
    println!("{}", style("Step 3: Configuration file").bold().cyan());
    println!();

    let config_file = match config_path {
        Some(p) => p.to_path_buf(),
        None => Settings::default_config_path(),
    };
    if config_file.exists() {
        Output::info(&format!("Config file exists: {}", config_file.display()));
    } else if prompt_continue("Create default configuration file?")? {
        settings.save_to(&config_file)?;
        Output::success(&format!("Created config file: {}", config_file.display()));
        println!();
        println!(
            "  Edit your config with: {}",
            style("autonotes config edit").green()
        );
    } else {
        Output::info("Skipped config file creation. Using defaults.");
    }

    println!();

    // Step 4: Probe the backend
    println!("{}", style("Step 4: Checking the backend").bold().cyan());
    println!();

    match ApiClient::new(&settings.backend) {
        Ok(client) => match client.health().await {
            Ok(()) => {
                Output::success(&format!("Backend is reachable at {}", client.base_url()));
            }
            Err(e) => {
                Output::warning(&e.to_string());
                println!(
                    "    {} {}",
                    style("→").dim(),
                    style("Start the backend, then verify with 'autonotes doctor'").dim()
                );
            }
        },
        Err(e) => {
            Output::warning(&e.to_string());
        }
    }

    println!();

    // Summary
    println!("{}", style("Setup Complete!").bold().green());
    println!();
    println!("Next steps:");
    println!(
        "  {} Generate notes from a video",
        style("autonotes youtube <URL>").cyan()
    );
    println!(
        "  {} Generate notes from an audio file",
        style("autonotes upload <FILE>").cyan()
    );
    println!(
        "  {} Export the result",
        style("autonotes export pdf").cyan()
    );
    println!();
    println!("For more help: {}", style("autonotes --help").cyan());

    Ok(())
}

/// Prompt user for yes/no confirmation.
fn prompt_continue(message: &str) -> io::Result<bool> {
    print!("{} {} ", style("?").cyan(), message);
    print!("{} ", style("[y/N]").dim());
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    Ok(input.trim().to_lowercase() == "y" || input.trim().to_lowercase() == "yes")
}
