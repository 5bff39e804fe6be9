//! Export and import formats
//!
//! - JSON: the budget document, pretty-printed (the default)
//! - YAML: the same document, human-readable
//! - CSV: the agenda of one month, for spreadsheets
//!
//! JSON and YAML exports can be imported again; CSV is export-only.

pub mod csv;
pub mod json;
pub mod yaml;

use std::path::Path;

pub use self::csv::export_agenda_csv;
pub use json::{export_budget_json, parse_json_document};
pub use yaml::{export_budget_yaml, parse_yaml_document};

/// Serialization of a whole budget document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Yaml,
}

impl DocumentFormat {
    /// YAML for `.yaml`/`.yml` files, JSON for everything else
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .as_deref()
        {
            Some("yaml") | Some("yml") => Self::Yaml,
            _ => Self::Json,
        }
    }

    /// Parse document text into an untyped value
    pub fn parse(&self, content: &str) -> crate::error::PlannerResult<serde_json::Value> {
        match self {
            Self::Json => parse_json_document(content),
            Self::Yaml => parse_yaml_document(content),
        }
    }
}
