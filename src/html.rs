//! Static HTML entry shells.
//!
//! The bundler needs one HTML file per route. Each shell only links the icon
//! and stylesheet, provides the mount element and loads the route's page
//! module:
//!
//! ```text
//! index.html                         → src/pages/index.jsx
//! doc-0002-setup.html                → src/pages/doc-0002-setup.jsx
//! decisions/decision-0001.html       → src/pages/decisions/decision-0001.jsx
//! ```
//!
//! ## Asset references
//!
//! Served from the root, references are relative to the shell
//! (`decisions/x.html` uses `../tailwind.css`). Under a base path every
//! reference is absolute below it (`/docs-app/tailwind.css`) and no `../`
//! appears.
//!
//! The list of shells is also written as JSON (`html-entries.json`) for the
//! bundler's multi-page input. On the next run that list tells us which
//! shells we created before, so shells of deleted documents can be removed;
//! see [`stale_shell_paths`].

use crate::config::{BasePath, SiteConfig};
use crate::naming;
use crate::render::RenderError;
use crate::types::{HtmlEntry, PageDescriptor};
use maud::{DOCTYPE, Markup, html};
use std::path::{Component, Path};
use tracing::warn;

/// A rendered shell and its entry.
#[derive(Debug, Clone)]
pub struct HtmlShell {
    pub entry: HtmlEntry,
    pub contents: String,
}

/// Reference to `asset` (a project-root-relative path) from the shell at
/// `html_path`.
pub fn asset_ref(base: &BasePath, html_path: &str, asset: &str) -> String {
    let asset = asset.trim_start_matches('/');
    if base.is_root() {
        let depth = html_path.matches('/').count();
        format!("{}{asset}", "../".repeat(depth))
    } else {
        base.join(asset)
    }
}

/// Render the home shell followed by one shell per page, in manifest order.
pub fn render_shells(
    pages: &[PageDescriptor],
    config: &SiteConfig,
    base: &BasePath,
) -> Vec<HtmlShell> {
    let pages_dir = naming::to_slash_path(Path::new(&config.output.pages_dir));
    let mut shells = Vec::with_capacity(pages.len() + 1);

    shells.push(render_shell(
        "index.html",
        &config.site.title,
        &format!("{pages_dir}/index.jsx"),
        config,
        base,
    ));

    for page in pages.iter().filter(|p| p.route != "/") {
        let html_path = naming::html_path_for_route(&page.route);
        shells.push(render_shell(
            &html_path,
            &format!("{} - {}", page.title, config.site.title),
            &format!("{pages_dir}/{}.jsx", page.path),
            config,
            base,
        ));
    }

    shells
}

fn render_shell(
    html_path: &str,
    title: &str,
    script: &str,
    config: &SiteConfig,
    base: &BasePath,
) -> HtmlShell {
    let markup = shell(
        title,
        &asset_ref(base, html_path, &config.html.icon),
        &asset_ref(base, html_path, &config.html.stylesheet),
        &asset_ref(base, html_path, script),
        &config.pages.mount_id,
    );
    HtmlShell {
        entry: HtmlEntry {
            name: naming::entry_name(html_path),
            path: html_path.to_string(),
        },
        contents: markup.into_string() + "\n",
    }
}

fn shell(title: &str, icon: &str, stylesheet: &str, script: &str, mount_id: &str) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                link rel="icon" type="image/svg+xml" href=(icon);
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                link rel="stylesheet" href=(stylesheet);
                title { (title) }
            }
            body {
                div id=(mount_id) {}
                script type="module" src=(script) {}
            }
        }
    }
}

/// Render the entries file.
pub fn render_entries_json(entries: &[HtmlEntry]) -> Result<String, RenderError> {
    let json = serde_json::to_string_pretty(entries).map_err(|source| RenderError::Json {
        name: "html entries".to_string(),
        source,
    })?;
    Ok(json + "\n")
}

/// Shell paths listed in a previous entries file that are safe to delete.
///
/// Paths that are absolute or climb out of the HTML directory are skipped
/// with a warning. An unreadable list yields nothing: stale shells are left
/// behind rather than guessing.
pub fn stale_shell_paths(previous: &str) -> Vec<String> {
    let entries: Vec<HtmlEntry> = match serde_json::from_str(previous) {
        Ok(entries) => entries,
        Err(e) => {
            warn!("ignoring unreadable entries file: {e}");
            return Vec::new();
        }
    };

    entries
        .into_iter()
        .filter_map(|entry| {
            let path = Path::new(&entry.path);
            let contained = path.components().all(|c| matches!(c, Component::Normal(_)));
            let is_html = path.extension().is_some_and(|e| e == "html");
            if contained && is_html {
                Some(entry.path)
            } else {
                warn!(path = %entry.path, "not removing entry outside the HTML directory");
                None
            }
        })
        .collect()
}
