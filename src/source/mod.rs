//! Input sources for note generation.
//!
//! Content enters the app one of two ways: a YouTube link or a local media
//! file. Both are validated here before anything is sent to the backend,
//! so typos fail fast instead of after a long upload.

use crate::error::{AutonotesError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// File extensions the backend accepts for uploads.
pub const ALLOWED_EXTENSIONS: &[&str] = &["mp3", "mp4", "wav", "m4a", "webm"];

/// Upload size the service advertises as its limit. Larger files trigger a
/// warning but are still sent; the backend has the final say.
pub const UPLOAD_WARN_BYTES: u64 = 25 * 1024 * 1024;

fn video_id_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        Regex::new(
            r"(?x)
            (?:
                # Full YouTube URLs
                (?:https?://)?
                (?:www\.)?
                (?:youtube\.com/watch\?v=|youtu\.be/|youtube\.com/embed/|youtube\.com/v/)
                ([a-zA-Z0-9_-]{11})
            )
            |
            # Bare video ID (11 characters)
            ^([a-zA-Z0-9_-]{11})$
        ",
        )
        .unwrap()
    })
}

/// Extract the video ID from a YouTube URL or bare ID.
pub fn extract_video_id(input: &str) -> Option<String> {
    let caps = video_id_regex().captures(input.trim())?;

    // Try group 1 (URL format) then group 2 (bare ID)
    caps.get(1)
        .or_else(|| caps.get(2))
        .map(|m| m.as_str().to_string())
}

/// Which kind of input produced a result. Stored with the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    Youtube,
    Upload,
}

impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceKind::Youtube => write!(f, "youtube"),
            SourceKind::Upload => write!(f, "upload"),
        }
    }
}

/// A validated input ready to be submitted for note generation.
#[derive(Debug, Clone, PartialEq)]
pub enum NoteSource {
    Youtube { url: String },
    Upload { path: PathBuf },
}

impl NoteSource {
    /// Validate a YouTube URL (or bare video ID).
    pub fn youtube(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(AutonotesError::InvalidInput(
                "YouTube URL must not be empty".to_string(),
            ));
        }
        if extract_video_id(trimmed).is_none() {
            return Err(AutonotesError::InvalidInput(format!(
                "'{}' does not look like a YouTube video URL or ID",
                trimmed
            )));
        }
        Ok(NoteSource::Youtube {
            url: trimmed.to_string(),
        })
    }

    /// Validate a local media file: it must exist and carry one of the
    /// extensions the backend accepts.
    pub fn upload(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(AutonotesError::InvalidInput(format!(
                "File not found: {}",
                path.display()
            )));
        }

        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase());
        match extension {
            Some(ext) if ALLOWED_EXTENSIONS.contains(&ext.as_str()) => {}
            _ => {
                return Err(AutonotesError::InvalidInput(format!(
                    "File type not supported. Allowed types: {}",
                    ALLOWED_EXTENSIONS.join(", ")
                )))
            }
        }

        Ok(NoteSource::Upload {
            path: path.to_path_buf(),
        })
    }

    pub fn kind(&self) -> SourceKind {
        match self {
            NoteSource::Youtube { .. } => SourceKind::Youtube,
            NoteSource::Upload { .. } => SourceKind::Upload,
        }
    }

    /// The raw input string, as recorded in the session.
    pub fn input(&self) -> String {
        match self {
            NoteSource::Youtube { url } => url.clone(),
            NoteSource::Upload { path } => path.display().to_string(),
        }
    }

    /// Human-readable description for status output.
    pub fn describe(&self) -> String {
        match self {
            NoteSource::Youtube { url } => url.clone(),
            NoteSource::Upload { path } => {
                let name = path
                    .file_name()
                    .and_then(|n| n.to_str())
                    .unwrap_or("upload");
                match std::fs::metadata(path) {
                    Ok(meta) => format!(
                        "{} ({:.2} MB)",
                        name,
                        meta.len() as f64 / (1024.0 * 1024.0)
                    ),
                    Err(_) => name.to_string(),
                }
            }
        }
    }

    /// Size in megabytes when an upload exceeds the advertised limit.
    pub fn oversized(&self) -> Option<f64> {
        match self {
            NoteSource::Youtube { .. } => None,
            NoteSource::Upload { path } => {
                let len = std::fs::metadata(path).ok()?.len();
                (len > UPLOAD_WARN_BYTES).then(|| len as f64 / (1024.0 * 1024.0))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_id_from_url_formats() {
        let id = Some("dQw4w9WgXcQ".to_string());
        assert_eq!(
            extract_video_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ"),
            id
        );
        assert_eq!(extract_video_id("https://youtu.be/dQw4w9WgXcQ"), id);
        assert_eq!(
            extract_video_id("youtube.com/embed/dQw4w9WgXcQ"),
            id
        );
        assert_eq!(
            extract_video_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=30s"),
            id
        );
        assert_eq!(extract_video_id("dQw4w9WgXcQ"), id);
    }

    #[test]
    fn rejects_non_youtube_input() {
        assert_eq!(extract_video_id("https://vimeo.com/12345"), None);
        assert_eq!(extract_video_id("not a url"), None);
        assert_eq!(extract_video_id(""), None);
    }

    #[test]
    fn youtube_source_validates() {
        let source = NoteSource::youtube(" https://youtu.be/dQw4w9WgXcQ ").unwrap();
        assert_eq!(source.kind(), SourceKind::Youtube);
        assert_eq!(source.input(), "https://youtu.be/dQw4w9WgXcQ");

        assert!(NoteSource::youtube("").is_err());
        assert!(NoteSource::youtube("   ").is_err());
        assert!(NoteSource::youtube("ftp://example.com/video").is_err());
    }

    #[test]
    fn upload_source_accepts_allowed_extensions() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["a.mp3", "b.MP4", "c.wav", "d.m4a", "e.webm"] {
            let path = dir.path().join(name);
            std::fs::write(&path, b"data").unwrap();
            let source = NoteSource::upload(&path).unwrap();
            assert_eq!(source.kind(), SourceKind::Upload);
        }
    }

    #[test]
    fn upload_source_rejects_bad_files() {
        let dir = tempfile::tempdir().unwrap();

        let missing = dir.path().join("missing.mp3");
        let err = NoteSource::upload(&missing).unwrap_err();
        assert!(err.to_string().contains("File not found"));

        let wrong_type = dir.path().join("notes.txt");
        std::fs::write(&wrong_type, b"text").unwrap();
        let err = NoteSource::upload(&wrong_type).unwrap_err();
        assert!(err.to_string().contains("File type not supported"));

        let no_ext = dir.path().join("audio");
        std::fs::write(&no_ext, b"data").unwrap();
        assert!(NoteSource::upload(&no_ext).is_err());
    }

    #[test]
    fn small_uploads_are_not_flagged() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tiny.mp3");
        std::fs::write(&path, b"data").unwrap();
        let source = NoteSource::upload(&path).unwrap();
        assert_eq!(source.oversized(), None);
    }
}
