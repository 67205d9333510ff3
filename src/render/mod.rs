//! Terminal rendering of generated notes.
//!
//! The backend's `formatted` field is markdown-ish text: `#` titles, `##`
//! section headings and `- ` bullets. Lines are classified the same way the
//! backend's own exporters classify them, then styled for the configured
//! theme. When `formatted` is empty the structured sections are composed
//! into an equivalent view.

use crate::api::models::{Notes, StructuredNotes};
use crate::config::Theme;
use console::Style;

/// Styles applied to note output, derived from the configured theme.
pub struct Palette {
    pub title: Style,
    pub heading: Style,
    pub bullet: Style,
    pub dim: Style,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self {
                title: Style::new().cyan().bold(),
                heading: Style::new().cyan(),
                bullet: Style::new().cyan(),
                dim: Style::new().dim(),
            },
            Theme::Light => Self {
                title: Style::new().blue().bold(),
                heading: Style::new().blue(),
                bullet: Style::new().blue(),
                dim: Style::new().black().dim(),
            },
        }
    }
}

/// One classified line of formatted notes.
#[derive(Debug, PartialEq)]
pub enum Line<'a> {
    Blank,
    Title(&'a str),
    Heading(&'a str),
    Bullet(&'a str),
    Text(&'a str),
}

/// Classify a line of the backend's formatted notes.
pub fn classify_line(line: &str) -> Line<'_> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Line::Blank;
    }
    if let Some(rest) = trimmed.strip_prefix("##") {
        return Line::Heading(rest.trim_start_matches('#').trim());
    }
    if let Some(rest) = trimmed.strip_prefix('#') {
        return Line::Title(rest.trim());
    }
    if let Some(rest) = trimmed
        .strip_prefix("- ")
        .or_else(|| trimmed.strip_prefix("* "))
    {
        return Line::Bullet(rest.trim());
    }
    Line::Text(trimmed)
}

/// Compose a formatted view from the structured sections, used when the
/// backend returned no preformatted text. Empty sections are skipped.
pub fn compose_structured(notes: &StructuredNotes) -> String {
    let mut sections = Vec::new();

    if !notes.introduction.is_empty() {
        sections.push(format!("## Introduction\n{}", notes.introduction));
    }
    if !notes.key_points.is_empty() {
        let points = notes
            .key_points
            .iter()
            .map(|p| format!("- {}", p))
            .collect::<Vec<_>>()
            .join("\n");
        sections.push(format!("## Key Points\n{}", points));
    }
    if !notes.examples.is_empty() {
        let examples = notes
            .examples
            .iter()
            .map(|e| format!("- {}", e))
            .collect::<Vec<_>>()
            .join("\n");
        sections.push(format!("## Examples\n{}", examples));
    }
    if !notes.conclusion.is_empty() {
        sections.push(format!("## Conclusion\n{}", notes.conclusion));
    }
    if !notes.summary.is_empty() {
        sections.push(format!("## Summary\n{}", notes.summary));
    }

    sections.join("\n\n")
}

/// Render notes to a styled string ready for printing.
pub fn format_notes(notes: &Notes, palette: &Palette) -> String {
    let text = if notes.formatted.trim().is_empty() {
        compose_structured(&notes.structured)
    } else {
        notes.formatted.clone()
    };

    if text.trim().is_empty() {
        return format!("{}\n", palette.dim.apply_to("(no notes)"));
    }

    let mut out = String::new();
    for line in text.lines() {
        match classify_line(line) {
            Line::Blank => out.push('\n'),
            Line::Title(title) => {
                out.push_str(&format!("{}\n", palette.title.apply_to(title)));
            }
            Line::Heading(heading) => {
                out.push_str(&format!("{}\n", palette.heading.apply_to(heading)));
            }
            Line::Bullet(item) => {
                out.push_str(&format!("  {} {}\n", palette.bullet.apply_to("•"), item));
            }
            Line::Text(text) => {
                out.push_str(text);
                out.push('\n');
            }
        }
    }
    out
}
