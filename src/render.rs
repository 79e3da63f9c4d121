//! Text rendering for generated JavaScript modules.
//!
//! All untrusted text (titles, ids, dates, paths) reaches a generated module
//! through one of two doors:
//!
//! - [`escape_jsx_text`] for text placed between JSX tags
//! - [`js_string`] for string literals (import specifiers, attribute values)
//!
//! [`ModuleBuilder`] assembles a module from imports, code sections and
//! JSON-valued exports, so page, manifest and home templates never splice
//! strings into import lines by hand.
//!
//! HTML shells do not go through here; they are maud templates (see
//! [`crate::html`]) and get maud's escaping.

use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("cannot serialize `{name}` export")]
    Json {
        name: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Escape text for use as a JSX child.
///
/// Besides the HTML specials this escapes `{` and `}`, which would otherwise
/// open a JavaScript expression.
pub fn escape_jsx_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            '{' => out.push_str("&#123;"),
            '}' => out.push_str("&#125;"),
            _ => out.push(c),
        }
    }
    out
}

/// A double-quoted JavaScript string literal for `text`.
pub fn js_string(text: &str) -> String {
    serde_json::Value::String(text.to_string()).to_string()
}

/// Code that mounts `component` into the element with id `mount_id`.
pub fn mount_snippet(component: &str, mount_id: &str) -> String {
    format!(
        "// Auto-render on load
ReactDOM.createRoot(document.getElementById({id})).render(
  <React.StrictMode>
    <{component} />
  </React.StrictMode>
)",
        id = js_string(mount_id),
    )
}

/// Builds an ES module: an import block followed by code sections separated
/// by blank lines.
#[derive(Debug, Default)]
pub struct ModuleBuilder {
    imports: Vec<String>,
    sections: Vec<String>,
}

impl ModuleBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// `import <name> from "<from>"`
    pub fn import_default(&mut self, name: &str, from: &str) -> &mut Self {
        self.imports
            .push(format!("import {name} from {}", js_string(from)));
        self
    }

    /// `import { a, b } from "<from>"`
    pub fn import_named(&mut self, names: &[&str], from: &str) -> &mut Self {
        self.imports.push(format!(
            "import {{ {} }} from {}",
            names.join(", "),
            js_string(from)
        ));
        self
    }

    /// Append a block of code verbatim.
    pub fn section(&mut self, code: impl Into<String>) -> &mut Self {
        self.sections.push(code.into());
        self
    }

    /// `export const <name> = <value as pretty JSON>`
    pub fn export_const<T: Serialize>(
        &mut self,
        name: &str,
        value: &T,
    ) -> Result<&mut Self, RenderError> {
        let json = serde_json::to_string_pretty(value).map_err(|source| RenderError::Json {
            name: name.to_string(),
            source,
        })?;
        self.sections.push(format!("export const {name} = {json}"));
        Ok(self)
    }

    /// The finished module text, newline-terminated.
    pub fn finish(&self) -> String {
        let mut out = String::new();
        if !self.imports.is_empty() {
            out.push_str(&self.imports.join("\n"));
            out.push('\n');
        }
        for section in &self.sections {
            if !out.is_empty() {
                out.push('\n');
            }
            out.push_str(section.trim_end());
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jsx_text_escapes_markup_and_braces() {
        assert_eq!(
            escape_jsx_text("<b>Tom & Jerry's {fun}</b>"),
            "&lt;b&gt;Tom &amp; Jerry&#39;s &#123;fun&#125;&lt;/b&gt;"
        );
    }

    #[test]
    fn jsx_text_leaves_plain_text_alone() {
        assert_eq!(escape_jsx_text("Use Kubernetes"), "Use Kubernetes");
        assert_eq!(escape_jsx_text("Überblick – 日本"), "Überblick – 日本");
    }

    #[test]
    fn js_string_quotes_and_escapes() {
        assert_eq!(js_string("plain"), "\"plain\"");
        assert_eq!(js_string("it's \"x\""), r#""it's \"x\"""#);
        assert_eq!(js_string("a\\b\nc"), r#""a\\b\nc""#);
    }

    #[test]
    fn js_string_keeps_spaces_in_paths() {
        assert_eq!(
            js_string("@decisions/decision-0001 - Use Kubernetes.md?mdx"),
            "\"@decisions/decision-0001 - Use Kubernetes.md?mdx\""
        );
    }

    #[test]
    fn module_builder_layout() {
        let mut module = ModuleBuilder::new();
        module
            .import_default("React", "react")
            .import_named(&["MDXWrapper"], "../components/MDXComponents")
            .section("function Page() {}\n")
            .section("export default Page");

        assert_eq!(
            module.finish(),
            "import React from \"react\"\n\
             import { MDXWrapper } from \"../components/MDXComponents\"\n\
             \n\
             function Page() {}\n\
             \n\
             export default Page\n"
        );
    }

    #[test]
    fn export_const_is_pretty_json() {
        #[derive(Serialize)]
        struct Meta {
            id: &'static str,
        }
        let mut module = ModuleBuilder::new();
        module.export_const("frontMatter", &Meta { id: "doc-1" }).unwrap();
        assert_eq!(
            module.finish(),
            "export const frontMatter = {\n  \"id\": \"doc-1\"\n}\n"
        );
    }

    #[test]
    fn mount_snippet_quotes_mount_id() {
        let snippet = mount_snippet("Page", "root");
        assert!(snippet.contains("document.getElementById(\"root\")"));
        assert!(snippet.contains("<Page />"));
    }
}
