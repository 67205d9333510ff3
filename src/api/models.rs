//! Wire types for the AutoNotes backend API.

use serde::{Deserialize, Serialize};

/// Structured note sections produced by the backend summarizer.
///
/// Every field is optional on the wire; missing sections deserialize to
/// empty values so older backends stay compatible.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StructuredNotes {
    pub introduction: String,
    pub key_points: Vec<String>,
    pub examples: Vec<String>,
    pub conclusion: String,
    pub summary: String,
}

impl StructuredNotes {
    /// True when no section carries any content.
    pub fn is_empty(&self) -> bool {
        self.introduction.is_empty()
            && self.key_points.is_empty()
            && self.examples.is_empty()
            && self.conclusion.is_empty()
            && self.summary.is_empty()
    }
}

/// Notes payload returned by generate and sent back verbatim on export.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Notes {
    /// Markdown-ish text ready for display.
    pub formatted: String,
    /// The same content broken into named sections.
    pub structured: StructuredNotes,
}

/// Body of a successful generate-notes response.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateResponse {
    pub success: bool,
    #[serde(default)]
    pub transcript: String,
    #[serde(default)]
    pub notes: Notes,
}

/// Error body the backend attaches to non-2xx responses.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}

/// Request body for the export endpoint.
#[derive(Debug, Serialize)]
pub struct ExportRequest<'a> {
    pub transcript: &'a str,
    pub notes: &'a Notes,
}

/// Formats the backend can render an export in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Pdf,
    Txt,
}

impl ExportFormat {
    /// File extension for this format, without the dot.
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Pdf => "pdf",
            ExportFormat::Txt => "txt",
        }
    }

    /// Default output filename, `notes.<ext>`.
    pub fn default_filename(&self) -> String {
        format!("notes.{}", self.extension())
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pdf" => Ok(ExportFormat::Pdf),
            "txt" | "text" => Ok(ExportFormat::Txt),
            _ => Err(format!("Unknown export format: {}. Use 'pdf' or 'txt'.", s)),
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}
