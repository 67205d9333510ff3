//! Configuration module for the AutoNotes client.
//!
//! Handles loading and managing application settings.

mod settings;

pub use settings::{
    BackendSettings, ExportSettings, GeneralSettings, Settings, Theme, UiSettings,
};
