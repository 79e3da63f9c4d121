//! Document metadata resolution.
//!
//! Each [`FrontMatter`] field is resolved independently from the document's
//! front matter block, falling back to values derived from the file and its
//! source:
//!
//! - **id**: `id` → `""` (never parsed from the file name)
//! - **title**: `title` → file name with `doc-NNNN -` prefix and extension removed
//! - **type**: `type` → `category` → the source's category
//! - **created_date**: `created_date` → `date` → `""`
//! - **updated_date**: `updated_date` → `""`
//! - **path** and **category** always come from the scan, never from the document.
//!
//! The first non-empty value wins; whitespace-only values count as missing.

use crate::frontmatter::RawFrontMatter;
use crate::naming;
use crate::scan::DocumentRecord;
use crate::types::FrontMatter;

/// Resolve a metadata field from multiple sources.
///
/// Takes a list of optional values in priority order and returns the first
/// non-None, non-empty value.
///
/// ```text
/// title:        resolve(&[front_matter_title, filename_title])
/// created_date: resolve(&[created_date, date])
/// ```
pub fn resolve(sources: &[Option<&str>]) -> Option<String> {
    sources
        .iter()
        .filter_map(|opt| {
            opt.map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
        })
        .next()
}

/// Build the normalized front matter for a scanned document.
pub fn resolve_front_matter(raw: &RawFrontMatter<'_>, record: &DocumentRecord) -> FrontMatter {
    let fallback_title = naming::title_from_file_name(&record.file_name);

    FrontMatter {
        id: resolve(&[raw.get("id")]).unwrap_or_default(),
        title: resolve(&[raw.get("title"), Some(&fallback_title)]).unwrap_or(fallback_title),
        doc_type: resolve(&[raw.get("type"), raw.get("category"), Some(&record.category)])
            .unwrap_or_default(),
        created_date: resolve(&[raw.get("created_date"), raw.get("date")]).unwrap_or_default(),
        updated_date: resolve(&[raw.get("updated_date")]).unwrap_or_default(),
        path: record.relative_path.clone(),
        category: record.category.clone(),
    }
}
