//! Shared types passed between pipeline stages.
//!
//! [`PageDescriptor`] and [`HtmlEntry`] are serialized to JSON (`routes.json`,
//! `html-entries.json`) and read back by later commands, so field names here
//! are part of the on-disk format.

use serde::{Deserialize, Serialize};

/// Normalized front matter of one document.
///
/// Every field is a string. Missing keys are filled with defaults during
/// scanning (see [`crate::metadata::resolve_front_matter`]), so `title` is
/// never empty. Serialized verbatim as the `frontMatter` export of each page
/// artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrontMatter {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub doc_type: String,
    pub created_date: String,
    pub updated_date: String,
    /// Route path without the leading slash (e.g. `decisions/decision-0001`).
    pub path: String,
    pub category: String,
}

/// One entry of the route manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageDescriptor {
    /// Site route, always starting with `/`.
    pub route: String,
    /// Route without the leading slash; also the artifact path below the pages dir.
    pub path: String,
    pub title: String,
    #[serde(rename = "type")]
    pub doc_type: String,
    pub id: String,
    pub category: String,
    /// Generated page artifact, relative to the project root.
    pub file_path: String,
}

/// A bundler input: one static HTML shell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HtmlEntry {
    /// Logical entry name (`decisions/x` → `decisions_x`, home → `index`).
    pub name: String,
    /// Shell path relative to the HTML output directory.
    pub path: String,
}
