//! Show command - display the stored notes or transcript.

use crate::cli::Output;
use crate::config::Settings;
use crate::render::{format_notes, Palette};
use crate::session::SessionStore;
use anyhow::Result;

/// Run the show command.
pub fn run_show(transcript: bool, settings: Settings) -> Result<()> {
    let store = SessionStore::new(&settings.data_dir());
    let session = match store.load()? {
        Some(session) => session,
        None => {
            Output::info(
                "Nothing to show yet. Generate notes with 'autonotes youtube <URL>' or 'autonotes upload <FILE>'.",
            );
            return Ok(());
        }
    };

    Output::kv("Source", &format!("{} ({})", session.input, session.source));
    Output::kv(
        "Generated",
        &session.generated_at.format("%Y-%m-%d %H:%M UTC").to_string(),
    );

    let palette = Palette::for_theme(settings.ui.theme);
    if transcript {
        Output::header("Transcript");
        println!("{}", session.transcript);
    } else {
        println!();
        print!("{}", format_notes(&session.notes, &palette));
    }

    Ok(())
}
