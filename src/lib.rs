//! AutoNotes - Content to Smart Notes
//!
//! A terminal client for the AutoNotes backend: turn YouTube videos and
//! local audio files into structured, exportable notes.
//!
//! # Overview
//!
//! AutoNotes allows you to:
//! - Submit a YouTube video or a local audio/video file for note generation
//! - Review the generated notes and the full transcript in the terminal
//! - Export the result as PDF or TXT, rendered by the backend
//! - Keep a dark or light output theme across runs
//!
//! All transcription and summarization happens in the backend service; this
//! crate captures input, performs the HTTP calls, renders the result, and
//! persists the last response so follow-up commands can reuse it.
//!
//! # Architecture
//!
//! The library is organized into several modules:
//!
//! - `config` - Configuration management
//! - `source` - Input validation (YouTube URLs, local media files)
//! - `api` - HTTP client for the backend endpoints
//! - `session` - Persistence of the last generated result
//! - `render` - Terminal rendering of notes and transcript
//! - `auth` - The simulated, local-only account flow
//!
//! # Example
//!
//! ```rust,no_run
//! use autonotes::api::ApiClient;
//! use autonotes::config::Settings;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let settings = Settings::load()?;
//!     let client = ApiClient::new(&settings.backend)?;
//!
//!     // Generate notes from a YouTube video
//!     let response = client
//!         .generate_from_youtube("https://www.youtube.com/watch?v=dQw4w9WgXcQ")
//!         .await?;
//!     println!("{}", response.notes.formatted);
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod auth;
pub mod cli;
pub mod config;
pub mod error;
pub mod render;
pub mod session;
pub mod source;

#[cfg(test)]
pub mod test_support;

pub use error::{AutonotesError, Result};
