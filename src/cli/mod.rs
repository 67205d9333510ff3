//! CLI module for the AutoNotes client.

pub mod commands;
mod output;
pub mod preflight;

pub use output::{format_size, Output};

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// AutoNotes - Content to Smart Notes
///
/// Terminal client for the AutoNotes backend. Point it at a YouTube video or
/// a local audio/video file; the backend transcribes the content, generates
/// structured notes, and can render them as PDF or TXT.
#[derive(Parser, Debug)]
#[command(name = "autonotes")]
#[command(version, about)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Backend base URL (overrides the configured value)
    #[arg(long, env = "AUTONOTES_API_URL", global = true)]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// First-run walkthrough: create config, data directory, probe backend
    Init,

    /// Check backend connectivity and local configuration
    Doctor,

    /// Generate notes from a YouTube video
    Youtube {
        /// Video URL or bare video ID
        url: String,

        /// Also export the result after generating (pdf, txt)
        #[arg(long, value_name = "FORMAT")]
        export: Option<String>,
    },

    /// Generate notes from a local audio/video file
    Upload {
        /// Path to the file (mp3, mp4, wav, m4a, webm)
        file: PathBuf,

        /// Also export the result after generating (pdf, txt)
        #[arg(long, value_name = "FORMAT")]
        export: Option<String>,
    },

    /// Display the last generated notes
    Show {
        /// Show the transcript instead of the notes
        #[arg(short, long)]
        transcript: bool,
    },

    /// Export the last generated notes through the backend
    Export {
        /// Output format (pdf, txt)
        format: String,

        /// Output file (defaults to notes.<format> in the export directory)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Clear the stored notes and transcript
    Clear,

    /// Switch between dark and light output themes
    Theme {
        /// Theme to select (dark, light); toggles when omitted
        mode: Option<String>,
    },

    /// Simulated account commands (nothing leaves this machine)
    Auth {
        #[command(subcommand)]
        action: AuthAction,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum AuthAction {
    /// Simulate signing in
    Login {
        /// Email address (prompted when omitted)
        email: Option<String>,

        /// Simulate an OAuth provider sign-in instead (google, github)
        #[arg(long)]
        provider: Option<String>,
    },

    /// Simulate creating an account
    Signup {
        /// Email address (prompted when omitted)
        email: Option<String>,

        /// Full name (prompted when omitted)
        #[arg(long)]
        name: Option<String>,
    },

    /// Show the simulated sign-in state
    Status,

    /// Remove the simulated sign-in state
    Logout,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Configuration key (e.g., "ui.theme")
        key: String,
        /// Configuration value
        value: String,
    },

    /// Open configuration file in editor
    Edit,

    /// Show configuration file path
    Path,
}
