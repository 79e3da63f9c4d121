//! # docsite-gen
//!
//! Turns a tree of Markdown documents into the inputs of a bundled React
//! documentation site. The filesystem is the data source: every document
//! becomes a route, front matter supplies its metadata, and its id decides
//! its position.
//!
//! # Architecture: One Run, Five Artifacts
//!
//! ```text
//! docs/**/*.md  →  scan  →  pages     →  src/pages/<path>.jsx
//!                        →  manifest  →  src/lib/docPages.js, routes.json
//!                        →  home      →  src/pages/index.jsx
//!                        →  html      →  <route>.html, html-entries.json
//! dist/index.html + routes.json  →  prerender  →  dist/<route>.html
//! ```
//!
//! Everything is derived from the documents and `docsite.toml`; generated
//! directories are rebuilt wholesale, so the output never depends on what a
//! previous run left behind.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Walks the document sources and resolves each document's metadata |
//! | [`frontmatter`] | Splits YAML (`---`) or TOML (`+++`) front matter from a document |
//! | [`metadata`] | Field-by-field fallback rules for front matter |
//! | [`naming`] | Title fallback, routes, sort keys and relative paths |
//! | [`render`] | Escaping and the module builder used for every generated `.js`/`.jsx` |
//! | [`pages`] | Per-document page modules |
//! | [`manifest`] | Ordering and the `docPages.js` / `routes.json` manifest |
//! | [`home`] | The home page module |
//! | [`html`] | HTML entry shells using Maud, and the entries list |
//! | [`generate`] | Runs the whole generation and writes the files |
//! | [`prerender`] | Per-route HTML for an already built site |
//! | [`config`] | `docsite.toml` loading, validation, merging, and the base path |
//! | [`types`] | Types shared between stages and written as JSON |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Maud For HTML, A Builder For JavaScript
//!
//! HTML shells are [Maud](https://maud.lambda.xyz/) templates, so titles are
//! escaped by construction. Generated JavaScript goes through
//! [`render::ModuleBuilder`]: string literals are produced by `serde_json`
//! and JSX text by [`render::escape_jsx_text`], never by splicing raw
//! metadata into source.
//!
//! ## Fail The Whole Run
//!
//! A document that cannot be read or whose front matter does not parse
//! aborts the run before anything is written. Publishing it with made-up
//! metadata, or dropping it silently, would be worse than stopping.
//!
//! ## Base Path Is Resolved Once
//!
//! The URL prefix comes from `--base-path` or `BASE_PATH`, is normalized
//! into a [`config::BasePath`] at startup, and is passed to every function
//! that computes an asset reference. Nothing reads the environment later.

pub mod config;
pub mod frontmatter;
pub mod generate;
pub mod home;
pub mod html;
pub mod manifest;
pub mod metadata;
pub mod naming;
pub mod output;
pub mod pages;
pub mod prerender;
pub mod render;
pub mod scan;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
