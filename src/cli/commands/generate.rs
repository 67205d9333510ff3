//! Generate commands - submit a source to the backend and show the result.

use crate::api::models::ExportFormat;
use crate::api::ApiClient;
use crate::cli::commands::export::export_session;
use crate::cli::preflight::{self, Operation};
use crate::cli::Output;
use crate::config::Settings;
use crate::render::{format_notes, Palette};
use crate::session::{Session, SessionStore};
use crate::source::NoteSource;
use anyhow::Result;
use std::path::Path;
use tracing::info;

/// Run the youtube command.
pub async fn run_youtube(url: &str, export: Option<String>, settings: Settings) -> Result<()> {
    let source = NoteSource::youtube(url)?;
    run_generate(source, export, settings).await
}

/// Run the upload command.
pub async fn run_upload(file: &Path, export: Option<String>, settings: Settings) -> Result<()> {
    let source = NoteSource::upload(file)?;
    run_generate(source, export, settings).await
}

/// Shared flow: probe the backend, submit the source, persist the result
/// on success, render the notes, and optionally export.
async fn run_generate(
    source: NoteSource,
    export: Option<String>,
    settings: Settings,
) -> Result<()> {
    // A bad format flag should fail before the long request, not after.
    let export_format = export
        .as_deref()
        .map(str::parse::<ExportFormat>)
        .transpose()
        .map_err(|e: String| anyhow::anyhow!(e))?;

    let client = ApiClient::new(&settings.backend)?;
    preflight::check(Operation::Generate, &client).await?;

    if let Some(megabytes) = source.oversized() {
        Output::warning(&format!(
            "{:.2} MB exceeds the 25 MB service limit; the backend may reject this upload",
            megabytes
        ));
    }

    Output::info(&format!("Processing: {}", source.describe()));
    info!("Submitting {} source to backend", source.kind());

    let spinner = Output::spinner("Analyzing content...");
    let result = match &source {
        NoteSource::Youtube { url } => client.generate_from_youtube(url).await,
        NoteSource::Upload { path } => client.generate_from_upload(path).await,
    };
    spinner.finish_and_clear();
    let response = result?;

    let store = SessionStore::new(&settings.data_dir());
    let session = Session::new(
        source.kind(),
        source.input(),
        response.transcript,
        response.notes,
    );
    store.save(&session)?;

    let palette = Palette::for_theme(settings.ui.theme);
    println!();
    print!("{}", format_notes(&session.notes, &palette));
    println!();
    Output::success("Notes generated.");
    Output::info(
        "Next: 'autonotes show --transcript', 'autonotes export pdf', or 'autonotes clear'.",
    );

    if let Some(format) = export_format {
        println!();
        export_session(&client, &session, format, None, &settings).await?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{spawn_stub, StubConfig};
    use std::sync::atomic::Ordering;

    fn settings_for(base_url: &str, data_dir: &Path) -> Settings {
        let mut settings = Settings::default();
        settings.backend.base_url = base_url.to_string();
        settings.general.data_dir = data_dir.display().to_string();
        settings
    }

    #[tokio::test]
    async fn youtube_flow_saves_session_on_success() {
        let stub = spawn_stub(StubConfig::default()).await;
        let data_dir = tempfile::tempdir().unwrap();
        let settings = settings_for(&stub.base_url, data_dir.path());

        run_youtube("https://www.youtube.com/watch?v=dQw4w9WgXcQ", None, settings.clone())
            .await
            .unwrap();

        // the endpoint was invoked exactly once
        assert_eq!(stub.counters.youtube.load(Ordering::SeqCst), 1);

        let session = SessionStore::new(&settings.data_dir())
            .load()
            .unwrap()
            .expect("session should be saved");
        assert!(session.transcript.contains("dQw4w9WgXcQ"));
        assert!(!session.notes.formatted.is_empty());
    }

    #[tokio::test]
    async fn failed_generate_leaves_no_session() {
        let stub = spawn_stub(StubConfig {
            youtube_status: 400,
            youtube_detail: Some("Could not retrieve a transcript".to_string()),
            ..Default::default()
        })
        .await;
        let data_dir = tempfile::tempdir().unwrap();
        let settings = settings_for(&stub.base_url, data_dir.path());

        let err = run_youtube("dQw4w9WgXcQ", None, settings.clone())
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Could not retrieve a transcript");
        assert_eq!(stub.counters.youtube.load(Ordering::SeqCst), 1);
        assert!(SessionStore::new(&settings.data_dir())
            .load()
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn invalid_url_never_reaches_the_backend() {
        let stub = spawn_stub(StubConfig::default()).await;
        let data_dir = tempfile::tempdir().unwrap();
        let settings = settings_for(&stub.base_url, data_dir.path());

        let err = run_youtube("not a video", None, settings).await.unwrap_err();
        assert!(err.to_string().contains("does not look like a YouTube"));
        assert_eq!(stub.counters.youtube.load(Ordering::SeqCst), 0);
        assert_eq!(stub.counters.health.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn upload_flow_round_trips_through_multipart() {
        let stub = spawn_stub(StubConfig::default()).await;
        let data_dir = tempfile::tempdir().unwrap();
        let settings = settings_for(&stub.base_url, data_dir.path());

        let media_dir = tempfile::tempdir().unwrap();
        let file = media_dir.path().join("lecture.m4a");
        std::fs::write(&file, b"audio").unwrap();

        run_upload(&file, None, settings.clone()).await.unwrap();

        assert_eq!(stub.counters.upload.load(Ordering::SeqCst), 1);
        let session = SessionStore::new(&settings.data_dir())
            .load()
            .unwrap()
            .unwrap();
        assert!(session.transcript.contains("lecture.m4a"));
        assert_eq!(session.input, file.display().to_string());
    }

    #[tokio::test]
    async fn rejected_extension_fails_before_upload() {
        let stub = spawn_stub(StubConfig::default()).await;
        let data_dir = tempfile::tempdir().unwrap();
        let settings = settings_for(&stub.base_url, data_dir.path());

        let media_dir = tempfile::tempdir().unwrap();
        let file = media_dir.path().join("slides.pdf");
        std::fs::write(&file, b"%PDF").unwrap();

        let err = run_upload(&file, None, settings).await.unwrap_err();
        assert!(err.to_string().contains("File type not supported"));
        assert_eq!(stub.counters.upload.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn bad_export_format_fails_before_generating() {
        let stub = spawn_stub(StubConfig::default()).await;
        let data_dir = tempfile::tempdir().unwrap();
        let settings = settings_for(&stub.base_url, data_dir.path());

        let err = run_youtube("dQw4w9WgXcQ", Some("docx".to_string()), settings)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("Unknown export format"));
        assert_eq!(stub.counters.youtube.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn generate_with_export_writes_the_document() {
        let stub = spawn_stub(StubConfig::default()).await;
        let data_dir = tempfile::tempdir().unwrap();
        let export_dir = tempfile::tempdir().unwrap();
        let mut settings = settings_for(&stub.base_url, data_dir.path());
        settings.export.dir = export_dir.path().display().to_string();

        run_youtube("dQw4w9WgXcQ", Some("txt".to_string()), settings)
            .await
            .unwrap();

        assert_eq!(stub.counters.youtube.load(Ordering::SeqCst), 1);
        assert_eq!(stub.counters.export.load(Ordering::SeqCst), 1);
        let exported = std::fs::read_to_string(export_dir.path().join("notes.txt")).unwrap();
        assert!(exported.starts_with("%txt-export%"));
    }
}
