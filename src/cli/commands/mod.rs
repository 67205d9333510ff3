//! CLI command implementations.

mod auth;
mod clear;
mod config;
mod doctor;
mod export;
mod generate;
mod init;
mod show;
mod theme;

pub use auth::run_auth;
pub use clear::run_clear;
pub use config::run_config;
pub use doctor::run_doctor;
pub use export::run_export;
pub use generate::{run_upload, run_youtube};
pub use init::run_init;
pub use show::run_show;
pub use theme::run_theme;
