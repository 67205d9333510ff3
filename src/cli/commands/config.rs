//! Config command implementation.

use crate::cli::{ConfigAction, Output};
use crate::config::{Settings, Theme};
use crate::error::AutonotesError;
use anyhow::Result;
use std::path::Path;
use url::Url;

/// Run the config command.
pub fn run_config(
    action: &ConfigAction,
    mut settings: Settings,
    config_path: Option<&Path>,
) -> Result<()> {
    let path = match config_path {
        Some(p) => p.to_path_buf(),
        None => Settings::default_config_path(),
    };

    match action {
        ConfigAction::Show => {
            let toml_str = toml::to_string_pretty(&settings)
                .map_err(|e| anyhow::anyhow!("Failed to serialize config: {}", e))?;
            println!("{}", toml_str);
        }

        ConfigAction::Set { key, value } => {
            apply_setting(&mut settings, key, value)?;
            settings.save_to(&path)?;
            Output::success(&format!("Set {} = {}", key, value));
        }

        ConfigAction::Edit => {
            // Create default config if it doesn't exist
            if !path.exists() {
                settings.save_to(&path)?;
                Output::info(&format!("Created default config at {}", path.display()));
            }

            // Try to open in editor
            let editor = std::env::var("EDITOR").unwrap_or_else(|_| "vim".to_string());

            Output::info(&format!("Opening config in {}...", editor));

            let status = std::process::Command::new(&editor).arg(&path).status();

            match status {
                Ok(s) if s.success() => {
                    Output::success("Config saved.");
                }
                Ok(_) => {
                    Output::warning("Editor exited with non-zero status.");
                }
                Err(e) => {
                    Output::error(&format!("Failed to open editor: {}", e));
                    Output::info(&format!("Config file is at: {}", path.display()));
                }
            }
        }

        ConfigAction::Path => {
            println!("{}", path.display());
        }
    }

    Ok(())
}

const KNOWN_KEYS: &str = "general.data_dir, backend.base_url, backend.request_timeout_secs, \
                          backend.health_timeout_secs, export.dir, ui.theme";

/// Apply one `key = value` pair, validating the value for known keys.
fn apply_setting(settings: &mut Settings, key: &str, value: &str) -> crate::error::Result<()> {
    match key {
        "general.data_dir" => settings.general.data_dir = value.to_string(),
        "backend.base_url" => {
            Url::parse(value)
                .map_err(|e| AutonotesError::Config(format!("Invalid URL '{}': {}", value, e)))?;
            settings.backend.base_url = value.to_string();
        }
        "backend.request_timeout_secs" => {
            settings.backend.request_timeout_secs = parse_secs(key, value)?;
        }
        "backend.health_timeout_secs" => {
            settings.backend.health_timeout_secs = parse_secs(key, value)?;
        }
        "export.dir" => settings.export.dir = value.to_string(),
        "ui.theme" => {
            settings.ui.theme = value.parse::<Theme>().map_err(AutonotesError::Config)?;
        }
        other => {
            return Err(AutonotesError::Config(format!(
                "Unknown configuration key: {}. Known keys: {}",
                other, KNOWN_KEYS
            )))
        }
    }
    Ok(())
}

fn parse_secs(key: &str, value: &str) -> crate::error::Result<u64> {
    value.parse::<u64>().map_err(|_| {
        AutonotesError::Config(format!(
            "{} expects a whole number of seconds, got '{}'",
            key, value
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_validates_and_applies_known_keys() {
        let mut settings = Settings::default();

        apply_setting(&mut settings, "backend.base_url", "http://10.0.0.5:9000").unwrap();
        assert_eq!(settings.backend.base_url, "http://10.0.0.5:9000");

        apply_setting(&mut settings, "ui.theme", "light").unwrap();
        assert_eq!(settings.ui.theme, Theme::Light);

        apply_setting(&mut settings, "backend.request_timeout_secs", "120").unwrap();
        assert_eq!(settings.backend.request_timeout_secs, 120);

        apply_setting(&mut settings, "export.dir", "~/exports").unwrap();
        assert_eq!(settings.export.dir, "~/exports");
    }

    #[test]
    fn set_rejects_bad_values() {
        let mut settings = Settings::default();

        assert!(apply_setting(&mut settings, "backend.base_url", "not a url").is_err());
        assert!(apply_setting(&mut settings, "ui.theme", "sepia").is_err());
        assert!(apply_setting(&mut settings, "backend.health_timeout_secs", "soon").is_err());
        // nothing changed on the failed paths
        assert_eq!(settings.backend.base_url, "http://localhost:8000");
        assert_eq!(settings.ui.theme, Theme::Dark);
    }

    #[test]
    fn set_rejects_unknown_keys() {
        let mut settings = Settings::default();
        let err = apply_setting(&mut settings, "ui.animations", "on").unwrap_err();
        assert!(err.to_string().contains("Unknown configuration key"));
        assert!(err.to_string().contains("ui.theme"));
    }

    #[test]
    fn set_persists_to_the_given_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let action = ConfigAction::Set {
            key: "ui.theme".to_string(),
            value: "light".to_string(),
        };
        run_config(&action, Settings::default(), Some(&path)).unwrap();

        let reloaded = Settings::load_from(Some(&path)).unwrap();
        assert_eq!(reloaded.ui.theme, Theme::Light);
    }
}
