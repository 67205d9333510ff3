//! Persistence of the last generated result.
//!
//! Every command runs in its own short-lived process, so the notes and
//! transcript from the last successful generate live in a JSON file under
//! the data directory: written only on success, read by `show` and
//! `export`, removed by `clear`. Nothing else is ever persisted from a
//! backend response.

use crate::api::models::Notes;
use crate::error::{AutonotesError, Result};
use crate::source::SourceKind;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

const SESSION_FILE: &str = "session.json";

/// A generated result: transcript, notes, and where they came from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub source: SourceKind,
    pub input: String,
    pub transcript: String,
    pub notes: Notes,
    pub generated_at: DateTime<Utc>,
}

impl Session {
    pub fn new(source: SourceKind, input: String, transcript: String, notes: Notes) -> Self {
        Self {
            source,
            input,
            transcript,
            notes,
            generated_at: Utc::now(),
        }
    }
}

/// File-backed store for the current session.
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join(SESSION_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the session, replacing any previous one.
    pub fn save(&self, session: &Session) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(session)?;
        std::fs::write(&self.path, content)?;
        debug!("Session saved to {}", self.path.display());
        Ok(())
    }

    /// Read the stored session, or None when nothing has been generated yet.
    pub fn load(&self) -> Result<Option<Session>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(&self.path)?;
        let session = serde_json::from_str(&content).map_err(|e| {
            AutonotesError::Session(format!(
                "Stored session at {} is unreadable ({}). Run 'autonotes clear' to reset it.",
                self.path.display(),
                e
            ))
        })?;
        Ok(Some(session))
    }

    /// Remove the stored session. Returns whether one existed.
    pub fn clear(&self) -> Result<bool> {
        if self.path.exists() {
            std::fs::remove_file(&self.path)?;
            debug!("Session removed from {}", self.path.display());
            Ok(true)
        } else {
            Ok(false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::models::StructuredNotes;

    fn sample_session() -> Session {
        Session::new(
            SourceKind::Youtube,
            "https://youtu.be/dQw4w9WgXcQ".to_string(),
            "a transcript".to_string(),
            Notes {
                formatted: "# Notes".to_string(),
                structured: StructuredNotes {
                    key_points: vec!["one".to_string()],
                    ..Default::default()
                },
            },
        )
    }

    #[test]
    fn save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::new(dir.path());

        assert!(store.load().unwrap().is_none());

        store.save(&sample_session()).unwrap();
        let loaded = store.load().unwrap().unwrap();
        assert_eq!(loaded.source, SourceKind::Youtube);
        assert_eq!(loaded.transcript, "a transcript");
        assert_eq!(loaded.notes.structured.key_points, vec!["one"]);
    }

    #[test]
    fn save_creates_missing_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("deep").join("data");
        let store = SessionStore::new(&nested);
        store.save(&sample_session()).unwrap();
        assert!(store.load().unwrap().is_some());
    }

    #[test]
    fn clear_removes_session() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::new(dir.path());

        assert!(!store.clear().unwrap());

        store.save(&sample_session()).unwrap();
        assert!(store.clear().unwrap());
        assert!(store.load().unwrap().is_none());
        assert!(!store.clear().unwrap());
    }

    #[test]
    fn corrupt_session_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::new(dir.path());
        std::fs::write(store.path(), "not json").unwrap();

        let err = store.load().unwrap_err();
        assert!(err.to_string().contains("unreadable"));
        assert!(err.to_string().contains("autonotes clear"));
    }
}
