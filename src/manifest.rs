//! Route manifest.
//!
//! Orders the page descriptors and writes them out twice:
//!
//! - `docPages.js`: imports every page module and exports `docPages`, the
//!   list the home page and the layout's sidebar iterate over
//! - `routes.json`: the same descriptors as plain JSON, read back by the
//!   `prerender` command
//!
//! Both are regenerated wholesale on every run.
//!
//! ## Ordering
//!
//! Pages are ordered by [`naming::id_sort_key`] with a stable sort, so pages
//! whose ids share a number (or have none) stay in discovery order.

use crate::naming;
use crate::render::{ModuleBuilder, RenderError, js_string};
use crate::types::PageDescriptor;
use std::path::Path;

pub const DOC_PAGES_FILE: &str = "docPages.js";
pub const ROUTES_FILE: &str = "routes.json";

/// Stable sort by the numeric part of each page id.
pub fn sort_pages(pages: &mut [PageDescriptor]) {
    pages.sort_by_key(|p| naming::id_sort_key(&p.id));
}

/// Render `docPages.js` for pages already in manifest order.
///
/// `lib_dir` and `pages_dir` are relative to the project root; page imports
/// are relative from the former to the latter.
pub fn render_doc_pages(pages: &[PageDescriptor], lib_dir: &str, pages_dir: &str) -> String {
    let to_pages = import_prefix(Path::new(lib_dir), Path::new(pages_dir));

    let mut module = ModuleBuilder::new();
    for (index, page) in pages.iter().enumerate() {
        module.import_default(&format!("Page{index}"), &format!("{to_pages}{}.jsx", page.path));
    }

    let entries: Vec<String> = pages
        .iter()
        .enumerate()
        .map(|(index, page)| {
            format!(
                "  {{
    route: {route},
    path: {path},
    title: {title},
    type: {doc_type},
    id: {id},
    category: {category},
    component: Page{index}
  }}",
                route = js_string(&page.route),
                path = js_string(&page.path),
                title = js_string(&page.title),
                doc_type = js_string(&page.doc_type),
                id = js_string(&page.id),
                category = js_string(&page.category),
            )
        })
        .collect();

    if entries.is_empty() {
        module.section("export const docPages = []");
    } else {
        module.section(format!(
            "export const docPages = [\n{}\n]",
            entries.join(",\n")
        ));
    }
    module.finish()
}

/// Render `routes.json`.
pub fn render_routes_json(pages: &[PageDescriptor]) -> Result<String, RenderError> {
    let json = serde_json::to_string_pretty(pages).map_err(|source| RenderError::Json {
        name: ROUTES_FILE.to_string(),
        source,
    })?;
    Ok(json + "\n")
}

/// Module specifier prefix leading from directory `from` into `to`
/// (`src/lib` → `src/pages` is `../pages/`).
pub fn import_prefix(from: &Path, to: &Path) -> String {
    let relative = naming::relative_between(from, to);
    if relative == "." {
        "./".to_string()
    } else if relative.starts_with("..") {
        format!("{relative}/")
    } else {
        format!("./{relative}/")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(path: &str, id: &str) -> PageDescriptor {
        PageDescriptor {
            route: naming::route_for(path),
            path: path.to_string(),
            title: path.to_string(),
            doc_type: "docs".to_string(),
            id: id.to_string(),
            category: "docs".to_string(),
            file_path: format!("src/pages/{path}.jsx"),
        }
    }

    fn paths(pages: &[PageDescriptor]) -> Vec<&str> {
        pages.iter().map(|p| p.path.as_str()).collect()
    }

    #[test]
    fn sorts_by_id_number() {
        let mut pages = vec![
            page("c", "doc-0010"),
            page("a", "doc-0002"),
            page("b", "decision-0001"),
        ];
        sort_pages(&mut pages);
        assert_eq!(paths(&pages), vec!["b", "a", "c"]);
    }

    #[test]
    fn missing_ids_sort_first_and_ties_keep_order() {
        let mut pages = vec![
            page("first", "doc-0001"),
            page("untagged-1", ""),
            page("doc-one", "decision-0001"),
            page("untagged-2", "intro"),
        ];
        sort_pages(&mut pages);
        assert_eq!(
            paths(&pages),
            vec!["untagged-1", "untagged-2", "first", "doc-one"]
        );
    }

    #[test]
    fn doc_pages_imports_and_entries() {
        let pages = vec![page("doc-0002-setup", "doc-0002"), page("decisions/x", "")];
        let out = render_doc_pages(&pages, "src/lib", "src/pages");

        assert!(out.contains(r#"import Page0 from "../pages/doc-0002-setup.jsx""#));
        assert!(out.contains(r#"import Page1 from "../pages/decisions/x.jsx""#));
        assert!(out.contains("export const docPages = ["));
        assert!(out.contains(r#"    route: "/doc-0002-setup","#));
        assert!(out.contains("    component: Page0\n"));
        assert!(out.contains("    component: Page1\n"));
    }

    #[test]
    fn doc_pages_quotes_titles() {
        let mut p = page("a", "");
        p.title = "It's \"quoted\"".to_string();
        let out = render_doc_pages(&[p], "src/lib", "src/pages");
        assert!(out.contains(r#"    title: "It's \"quoted\"","#));
    }

    #[test]
    fn empty_manifest_is_valid_module() {
        assert_eq!(
            render_doc_pages(&[], "src/lib", "src/pages"),
            "export const docPages = []\n"
        );
    }

    #[test]
    fn import_prefix_variants() {
        assert_eq!(import_prefix(Path::new("src/lib"), Path::new("src/pages")), "../pages/");
        assert_eq!(import_prefix(Path::new("src"), Path::new("src/pages")), "./pages/");
        assert_eq!(import_prefix(Path::new("src/pages"), Path::new("src/pages")), "./");
    }

    #[test]
    fn routes_json_round_trips_descriptors() {
        let pages = vec![page("a", "doc-1")];
        let json = render_routes_json(&pages).unwrap();
        let back: Vec<PageDescriptor> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, pages);
        assert!(json.contains("\"type\": \"docs\""));
    }
}
