//! Export command - render the stored notes through the backend.

use crate::api::models::ExportFormat;
use crate::api::ApiClient;
use crate::cli::preflight::{self, Operation};
use crate::cli::{format_size, Output};
use crate::config::Settings;
use crate::error::AutonotesError;
use crate::session::{Session, SessionStore};
use anyhow::Result;
use std::path::PathBuf;

/// Run the export command.
pub async fn run_export(
    format: &str,
    output: Option<PathBuf>,
    settings: Settings,
) -> Result<()> {
    let format: ExportFormat = format.parse().map_err(|e: String| anyhow::anyhow!(e))?;

    let store = SessionStore::new(&settings.data_dir());
    let session = match store.load()? {
        Some(session) => session,
        None => {
            Output::info("Generate notes first: 'autonotes youtube <URL>' or 'autonotes upload <FILE>'.");
            return Err(AutonotesError::Export(
                "No notes available to export".to_string(),
            )
            .into());
        }
    };

    let client = ApiClient::new(&settings.backend)?;
    preflight::check(Operation::Export, &client).await?;

    export_session(&client, &session, format, output, &settings).await?;
    Ok(())
}

/// Render the session through the backend and write the document. Used by
/// both the export command and the generate commands' --export flag.
pub(crate) async fn export_session(
    client: &ApiClient,
    session: &Session,
    format: ExportFormat,
    output: Option<PathBuf>,
    settings: &Settings,
) -> Result<PathBuf> {
    let spinner = Output::spinner(&format!("Exporting {}...", format));
    let result = client
        .export(format, &session.transcript, &session.notes)
        .await;
    spinner.finish_and_clear();
    let bytes = result?;

    let path = output.unwrap_or_else(|| {
        let dir = settings.export_dir();
        if dir.as_os_str() == "." {
            PathBuf::from(format.default_filename())
        } else {
            dir.join(format.default_filename())
        }
    });
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(&path, &bytes)?;

    Output::success(&format!(
        "Exported to {} ({})",
        path.display(),
        format_size(bytes.len() as u64)
    ));
    Ok(path)
}
