//! Clear command - forget the stored notes and transcript.

use crate::cli::Output;
use crate::config::Settings;
use crate::session::SessionStore;
use anyhow::Result;

/// Run the clear command.
pub fn run_clear(settings: Settings) -> Result<()> {
    let store = SessionStore::new(&settings.data_dir());
    if store.clear()? {
        Output::success("Cleared stored notes and transcript.");
    } else {
        Output::info("Nothing to clear.");
    }
    Ok(())
}
