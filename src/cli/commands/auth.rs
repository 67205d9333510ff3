//! Auth commands - the simulated account flow.
//!
//! Sign-in never talks to a server: these commands prompt for the missing
//! fields, validate them locally, record a profile under the data
//! directory, and print the simulated confirmation.

use crate::auth::{validate_email, validate_name, validate_password, AuthStore, Profile};
use crate::cli::{AuthAction, Output};
use crate::config::Settings;
use crate::error::AutonotesError;
use anyhow::Result;
use console::style;
use std::io::{self, Write};

/// Run an auth subcommand.
pub fn run_auth(action: &AuthAction, settings: Settings) -> Result<()> {
    let store = AuthStore::new(&settings.data_dir());

    match action {
        AuthAction::Login { email, provider } => {
            if let Some(provider) = provider {
                // Provider sign-in is pure simulation: print the message,
                // store nothing.
                Output::success(&provider_message(provider)?);
                return Ok(());
            }

            let email = match email {
                Some(value) => validate_email(value)?,
                None => validate_email(&prompt_line("Email Address")?)?,
            };
            let password = prompt_line("Password")?;
            validate_password(&password)?;

            login(&store, email)?;
        }

        AuthAction::Signup { email, name } => {
            let name = match name {
                Some(value) => validate_name(value)?,
                None => validate_name(&prompt_line("Full Name")?)?,
            };
            let email = match email {
                Some(value) => validate_email(value)?,
                None => validate_email(&prompt_line("Email Address")?)?,
            };
            let password = prompt_line("Password")?;
            validate_password(&password)?;

            signup(&store, email, name)?;
        }

        AuthAction::Status => run_status(&store)?,

        AuthAction::Logout => {
            if store.clear()? {
                Output::success("Signed out of the simulated account.");
            } else {
                Output::info("Not signed in.");
            }
        }
    }

    Ok(())
}

/// Record a simulated sign-in and print the confirmation.
fn login(store: &AuthStore, email: String) -> Result<()> {
    let profile = Profile::new(email, None);
    store.save(&profile)?;
    Output::success(&format!("Simulated Login for: {}", profile.email));
    Output::info("Nothing was sent anywhere; the account lives in your data directory.");
    Ok(())
}

/// Record a simulated account and print the confirmation.
fn signup(store: &AuthStore, email: String, name: String) -> Result<()> {
    let profile = Profile::new(email, Some(name));
    store.save(&profile)?;
    Output::success(&format!("Simulated Signup for: {}", profile.email));
    Output::info("Nothing was sent anywhere; the account lives in your data directory.");
    Ok(())
}

/// Show the simulated sign-in state.
fn run_status(store: &AuthStore) -> Result<()> {
    match store.load()? {
        Some(profile) => {
            Output::header("Simulated Account");
            Output::kv("Email", &profile.email);
            if let Some(name) = &profile.name {
                Output::kv("Name", name);
            }
            Output::kv("Token", &profile.token.to_string());
            Output::kv(
                "Since",
                &profile.created_at.format("%Y-%m-%d %H:%M UTC").to_string(),
            );
            println!();
            Output::info("This account is local-only; the backend never sees it.");
        }
        None => {
            Output::info("Not signed in. Try 'autonotes auth login' or 'autonotes auth signup'.");
        }
    }
    Ok(())
}

/// The alert text for a simulated OAuth provider.
fn provider_message(provider: &str) -> crate::error::Result<String> {
    match provider.to_lowercase().as_str() {
        "google" => Ok("Google Login Simulated".to_string()),
        "github" => Ok("GitHub Login Simulated".to_string()),
        other => Err(AutonotesError::Auth(format!(
            "Unknown provider: {}. Use 'google' or 'github'.",
            other
        ))),
    }
}

/// Prompt for one line of input.
fn prompt_line(label: &str) -> io::Result<String> {
    print!("{} {}: ", style("?").cyan(), label);
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    Ok(input.trim().to_string())
}
