//! Per-document page artifacts.
//!
//! Every document becomes `<pages_dir>/<path>.jsx`: a React module that
//! renders the document inside the docs layout, shows its metadata as badges
//! and mounts itself on load.
//!
//! Relative imports (layout, MDX wrapper) climb out of the artifact's own
//! directory, so their `../` prefix depends on how deep the document sits:
//!
//! ```text
//! src/pages/doc-0002-setup.jsx            → ../layouts/DocsLayout
//! src/pages/decisions/decision-0001.jsx   → ../../layouts/DocsLayout
//! ```
//!
//! The document itself is imported through its source's bundler alias
//! (`@docs/doc-0002-setup.md?mdx`), which is independent of depth.

use crate::config::PagesConfig;
use crate::naming;
use crate::render::{self, ModuleBuilder, RenderError, escape_jsx_text, js_string};
use crate::scan::ScannedDocument;
use crate::types::PageDescriptor;

const BADGE_CLASS: &str =
    "inline-flex items-center px-3 py-1 rounded-full text-sm bg-gray-100 text-gray-700";

const ICON_ID: &str = "M15 12a3 3 0 11-6 0 3 3 0 016 0z";
const ICON_ID_OUTLINE: &str = "M2.458 12C3.732 7.943 7.523 5 12 5c4.478 0 8.268 2.943 9.542 7-1.274 4.057-5.064 7-9.542 7-4.477 0-8.268-2.943-9.542-7z";
const ICON_TYPE: &str = "M9 12h6m-6 4h6m2 5H7a2 2 0 01-2-2V5a2 2 0 012-2h5.586a1 1 0 01.707.293l5.414 5.414a1 1 0 01.293.707V19a2 2 0 01-2 2z";
const ICON_DATE: &str = "M8 7V3m8 4V3m-9 8h10M5 21h14a2 2 0 002-2V7a2 2 0 00-2-2H5a2 2 0 00-2 2v12a2 2 0 002 2z";

/// Artifact path for a document, relative to the project root.
pub fn artifact_path(pages_dir: &str, relative_path: &str) -> String {
    let dir = naming::to_slash_path(std::path::Path::new(pages_dir));
    format!("{dir}/{relative_path}.jsx")
}

/// Manifest entry for a scanned document.
pub fn descriptor(doc: &ScannedDocument, pages_dir: &str) -> PageDescriptor {
    let fm = &doc.front_matter;
    PageDescriptor {
        route: doc.route(),
        path: fm.path.clone(),
        title: fm.title.clone(),
        doc_type: fm.doc_type.clone(),
        id: fm.id.clone(),
        category: fm.category.clone(),
        file_path: artifact_path(pages_dir, &fm.path),
    }
}

/// Render the page module for one document.
pub fn render_page(doc: &ScannedDocument, pages: &PagesConfig) -> Result<String, RenderError> {
    let fm = &doc.front_matter;
    let up = naming::depth_prefix(&fm.path);

    let mut badges = Vec::new();
    if !fm.id.is_empty() {
        badges.push(badge(&[ICON_ID, ICON_ID_OUTLINE], &format!("ID: {}", fm.id)));
    }
    badges.push(badge(&[ICON_TYPE], &fm.doc_type));
    if !fm.created_date.is_empty() {
        badges.push(badge(&[ICON_DATE], &format!("Created: {}", fm.created_date)));
    }
    if !fm.updated_date.is_empty() {
        badges.push(badge(&[ICON_DATE], &format!("Updated: {}", fm.updated_date)));
    }

    let component = format!(
        r#"function Page() {{
  return (
    <DocsLayout currentPath={{{route}}}>
      <div className="bg-white rounded-lg shadow-sm border border-gray-200 p-8">
        <header className="mb-6 pb-6 border-b border-gray-200">
          <h1 className="text-3xl font-bold text-gray-900 mb-4">{title}</h1>
          <div className="flex flex-wrap gap-3">
{badges}
          </div>
        </header>
        <article className="prose prose-lg prose-slate max-w-none">
          <MDXWrapper>
            <DocContent />
          </MDXWrapper>
        </article>
      </div>
    </DocsLayout>
  )
}}"#,
        route = js_string(&doc.route()),
        title = escape_jsx_text(&fm.title),
        badges = badges.join("\n"),
    );

    let mut module = ModuleBuilder::new();
    module
        .import_default("React", "react")
        .import_default("ReactDOM", "react-dom/client")
        .import_default("DocsLayout", &format!("{up}{}", pages.layout))
        .import_default("DocContent", &doc.import_path)
        .import_named(&["MDXWrapper"], &format!("{up}{}", pages.components))
        .section(component)
        .section(render::mount_snippet("Page", &pages.mount_id))
        .section("export default Page");
    module.export_const("frontMatter", fm)?;

    Ok(module.finish())
}

fn badge(icon_paths: &[&str], label: &str) -> String {
    let paths: String = icon_paths
        .iter()
        .map(|d| {
            format!(
                "\n                <path strokeLinecap=\"round\" strokeLinejoin=\"round\" strokeWidth={{2}} d=\"{d}\" />"
            )
        })
        .collect();
    format!(
        r#"            <span className="{BADGE_CLASS}">
              <svg className="w-4 h-4 mr-1.5" fill="none" stroke="currentColor" viewBox="0 0 24 24">{paths}
              </svg>
              {label}
            </span>"#,
        label = escape_jsx_text(label),
    )
}
