//! Theme command - switch the output palette and persist the choice.

use crate::cli::Output;
use crate::config::{Settings, Theme};
use anyhow::Result;
use std::path::Path;

/// Run the theme command. With no mode argument the theme toggles.
pub fn run_theme(
    mode: Option<&str>,
    mut settings: Settings,
    config_path: Option<&Path>,
) -> Result<()> {
    let next = match mode {
        Some(value) => value.parse::<Theme>().map_err(|e| anyhow::anyhow!(e))?,
        None => settings.ui.theme.toggled(),
    };

    settings.ui.theme = next;
    match config_path {
        Some(path) => settings.save_to(&path.to_path_buf())?,
        None => settings.save()?,
    }

    Output::success(&format!("Theme set to {}.", next));
    Ok(())
}
