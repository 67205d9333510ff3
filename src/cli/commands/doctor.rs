//! Doctor command - verify backend connectivity and local configuration.

use crate::api::ApiClient;
use crate::auth::AuthStore;
use crate::cli::Output;
use crate::config::Settings;
use crate::session::SessionStore;
use console::style;
use std::path::Path;

/// Check result for a single item.
#[derive(Debug)]
pub struct CheckResult {
    pub name: String,
    pub status: CheckStatus,
    pub message: String,
    pub hint: Option<String>,
}

#[derive(Debug, PartialEq)]
pub enum CheckStatus {
    Ok,
    Warning,
    Error,
}

impl CheckResult {
    fn ok(name: &str, message: &str) -> Self {
        Self {
            name: name.to_string(),
            status: CheckStatus::Ok,
            message: message.to_string(),
            hint: None,
        }
    }

    fn warning(name: &str, message: &str, hint: &str) -> Self {
        Self {
            name: name.to_string(),
            status: CheckStatus::Warning,
            message: message.to_string(),
            hint: Some(hint.to_string()),
        }
    }

    fn error(name: &str, message: &str, hint: &str) -> Self {
        Self {
            name: name.to_string(),
            status: CheckStatus::Error,
            message: message.to_string(),
            hint: Some(hint.to_string()),
        }
    }

    fn print(&self) {
        let icon = match self.status {
            CheckStatus::Ok => style("✓").green(),
            CheckStatus::Warning => style("!").yellow(),
            CheckStatus::Error => style("✗").red(),
        };

        println!("  {} {} - {}", icon, style(&self.name).bold(), self.message);

        if let Some(hint) = &self.hint {
            println!("    {} {}", style("→").dim(), style(hint).dim());
        }
    }
}

/// Run all diagnostic checks.
pub async fn run_doctor(settings: &Settings, config_path: Option<&Path>) -> anyhow::Result<()> {
    Output::header("AutoNotes Doctor");
    println!();
    println!("Checking backend connectivity and local configuration...\n");

    let mut checks = Vec::new();

    println!("{}", style("Backend").bold());
    let backend_check = check_backend(settings).await;
    backend_check.print();
    checks.push(backend_check);

    println!();

    println!("{}", style("Configuration").bold());
    let config_check = check_config_file(config_path);
    config_check.print();
    let dir_check = check_data_dir(settings);
    dir_check.print();
    checks.push(config_check);
    checks.push(dir_check);

    println!();

    println!("{}", style("Local State").bold());
    for check in check_local_state(settings) {
        check.print();
        checks.push(check);
    }

    println!();

    let errors = checks.iter().filter(|c| c.status == CheckStatus::Error).count();
    let warnings = checks.iter().filter(|c| c.status == CheckStatus::Warning).count();

    if errors > 0 {
        Output::error(&format!(
            "{} error(s) found. Please fix them before using AutoNotes.",
            errors
        ));
        std::process::exit(1);
    } else if warnings > 0 {
        Output::warning(&format!("All checks passed with {} warning(s).", warnings));
    } else {
        Output::success("All checks passed! AutoNotes is ready to use.");
    }

    Ok(())
}

/// Probe the backend the way the generate commands do.
async fn check_backend(settings: &Settings) -> CheckResult {
    let client = match ApiClient::new(&settings.backend) {
        Ok(client) => client,
        Err(e) => {
            return CheckResult::error(
                "Backend URL",
                &e.to_string(),
                "Fix backend.base_url in the config, or pass a valid --api-url",
            )
        }
    };

    match client.health().await {
        Ok(()) => CheckResult::ok(
            "Backend",
            &format!("reachable at {}", client.base_url()),
        ),
        Err(_) => CheckResult::error(
            "Backend",
            &format!("not reachable at {}", client.base_url()),
            "Start the backend, or point --api-url / AUTONOTES_API_URL at it",
        ),
    }
}

/// Check if the config file exists.
fn check_config_file(config_path: Option<&Path>) -> CheckResult {
    let path = match config_path {
        Some(p) => p.to_path_buf(),
        None => Settings::default_config_path(),
    };
    if path.exists() {
        CheckResult::ok("Config file", &format!("{}", path.display()))
    } else {
        CheckResult::warning(
            "Config file",
            "using defaults",
            "Create with: autonotes init (or autonotes config edit)",
        )
    }
}

/// Check that the data directory exists and is writable.
fn check_data_dir(settings: &Settings) -> CheckResult {
    let data_dir = settings.data_dir();
    if !data_dir.exists() {
        return CheckResult::warning(
            "Data directory",
            &format!("{} (will be created)", data_dir.display()),
            "Directory is created on first use",
        );
    }

    let probe = data_dir.join(".doctor-probe");
    match std::fs::write(&probe, b"ok").and_then(|_| std::fs::remove_file(&probe)) {
        Ok(()) => CheckResult::ok(
            "Data directory",
            &format!("writable at {}", data_dir.display()),
        ),
        Err(e) => CheckResult::error(
            "Data directory",
            &format!("{} is not writable ({})", data_dir.display(), e),
            "Fix its permissions, or point general.data_dir somewhere writable",
        ),
    }
}

/// Report on the stored session and the simulated account.
fn check_local_state(settings: &Settings) -> Vec<CheckResult> {
    let mut results = Vec::new();

    let store = SessionStore::new(&settings.data_dir());
    match store.load() {
        Ok(Some(session)) => results.push(CheckResult::ok(
            "Stored notes",
            &format!(
                "{} ({}), generated {}",
                session.input,
                session.source,
                session.generated_at.format("%Y-%m-%d %H:%M UTC")
            ),
        )),
        Ok(None) => results.push(CheckResult::ok("Stored notes", "none")),
        Err(e) => results.push(CheckResult::error(
            "Stored notes",
            &e.to_string(),
            "Reset with: autonotes clear",
        )),
    }

    match AuthStore::new(&settings.data_dir()).load() {
        Ok(Some(profile)) => results.push(CheckResult::ok(
            "Simulated account",
            &format!("signed in as {}", profile.email),
        )),
        Ok(None) => results.push(CheckResult::ok("Simulated account", "not signed in")),
        Err(_) => results.push(CheckResult::warning(
            "Simulated account",
            "profile file is unreadable",
            "Reset with: autonotes auth logout",
        )),
    }

    results
}
