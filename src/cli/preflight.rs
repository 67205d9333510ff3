//! Pre-flight checks before backend operations.
//!
//! Probes that the backend answers before starting operations that would
//! otherwise fail midway through a long transcription wait.

use crate::api::ApiClient;
use crate::cli::Output;
use crate::error::Result;
use tracing::debug;

/// Operations that talk to the backend.
#[derive(Debug, Clone, Copy)]
pub enum Operation {
    /// Note generation sends content and waits on transcription.
    Generate,
    /// Export renders the stored notes server-side.
    Export,
}

/// Run the pre-flight probe for the given operation.
///
/// Returns Ok(()) when the backend answers, or the connectivity error with
/// a pointer at the doctor command.
pub async fn check(operation: Operation, client: &ApiClient) -> Result<()> {
    if let Err(e) = client.health().await {
        debug!("Pre-flight probe for {:?} failed", operation);
        Output::info("Run 'autonotes doctor' to diagnose the connection.");
        return Err(e);
    }
    Ok(())
}
