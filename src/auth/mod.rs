//! Simulated authentication.
//!
//! Accounts are a local simulation: sign-in and sign-up validate their
//! input, confirm with a message, and never perform network I/O. A profile
//! file under the data directory records the simulated sign-in state so
//! `auth status` has something to report.

use crate::error::{AutonotesError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use uuid::Uuid;

const PROFILE_FILE: &str = "profile.json";

/// A simulated account profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Locally generated placeholder token. Never sent to the backend.
    pub token: Uuid,
    pub created_at: DateTime<Utc>,
}

impl Profile {
    pub fn new(email: String, name: Option<String>) -> Self {
        Self {
            email,
            name,
            token: Uuid::new_v4(),
            created_at: Utc::now(),
        }
    }
}

/// File-backed store for the simulated sign-in state.
pub struct AuthStore {
    path: PathBuf,
}

impl AuthStore {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join(PROFILE_FILE),
        }
    }

    pub fn save(&self, profile: &Profile) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(profile)?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }

    pub fn load(&self) -> Result<Option<Profile>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(&self.path)?;
        Ok(Some(serde_json::from_str(&content)?))
    }

    /// Remove the profile. Returns whether one existed.
    pub fn clear(&self) -> Result<bool> {
        if self.path.exists() {
            std::fs::remove_file(&self.path)?;
            Ok(true)
        } else {
            Ok(false)
        }
    }
}

/// Validate an email address the way the sign-in form does: a non-empty
/// local part and domain around a single `@`, no whitespace.
pub fn validate_email(email: &str) -> Result<String> {
    let email = email.trim();
    let valid = match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !email.contains(char::is_whitespace)
        }
        None => false,
    };
    if valid {
        Ok(email.to_string())
    } else {
        Err(AutonotesError::Auth(format!(
            "'{}' is not a valid email address",
            email
        )))
    }
}

pub fn validate_password(password: &str) -> Result<()> {
    if password.trim().is_empty() {
        return Err(AutonotesError::Auth(
            "Password must not be empty".to_string(),
        ));
    }
    Ok(())
}

pub fn validate_name(name: &str) -> Result<String> {
    let name = name.trim();
    if name.is_empty() {
        return Err(AutonotesError::Auth("Name must not be empty".to_string()));
    }
    Ok(name.to_string())
}
