//! JSON rendering of an extraction result.

use std::collections::BTreeMap;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

use crate::extract::Extraction;

/// How the JSON document is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Indented, one value per line.
    #[default]
    Pretty,
    /// Single line.
    Compact,
}

impl OutputFormat {
    pub const VARIANTS: &'static str = "pretty, compact";
}

/// An output format name that is neither `pretty` nor `compact`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown output format '{0}'")]
pub struct UnknownFormat(pub String);

impl FromStr for OutputFormat {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" => Ok(OutputFormat::Pretty),
            "compact" => Ok(OutputFormat::Compact),
            other => Err(UnknownFormat(other.to_string())),
        }
    }
}

/// Errors that can occur while rendering output.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Failed to serialize extraction: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Serialized shape: `{"extracted": {...}, "trailing": [...]}`.
#[derive(Debug, Serialize)]
struct Document<'a> {
    extracted: BTreeMap<&'a str, &'a [String]>,
    trailing: &'a [String],
}

impl<'a> From<&'a Extraction> for Document<'a> {
    fn from(extraction: &'a Extraction) -> Self {
        Self {
            extracted: extraction.extracted(),
            trailing: extraction.trailing(),
        }
    }
}

/// Render `extraction` as a JSON document.
pub fn render(extraction: &Extraction, format: OutputFormat) -> Result<String, OutputError> {
    let document = Document::from(extraction);
    let json = match format {
        OutputFormat::Pretty => serde_json::to_string_pretty(&document)?,
        OutputFormat::Compact => serde_json::to_string(&document)?,
    };
    Ok(json)
}
