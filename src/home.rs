//! Home page artifact (`<pages_dir>/index.jsx`).
//!
//! Lists every page of the route manifest as a card. Links honour the
//! bundler's `BASE_URL`, so the same module works whether the site is served
//! from `/` or from a sub-path. With no pages it shows a hint instead.

use crate::config::SiteConfig;
use crate::manifest;
use crate::naming;
use crate::render::{self, ModuleBuilder, escape_jsx_text, js_string};
use std::path::Path;

pub const HOME_FILE: &str = "index.jsx";

/// Render the home page module.
pub fn render_home(config: &SiteConfig) -> String {
    let to_lib = manifest::import_prefix(
        Path::new(&config.output.pages_dir),
        Path::new(&config.output.lib_dir),
    );
    let doc_pages = format!(
        "{to_lib}{}",
        manifest::DOC_PAGES_FILE.trim_end_matches(".js")
    );
    let title = escape_jsx_text(&config.site.title);

    let component = format!(
        r#"function HomePage() {{
  const basePath = import.meta.env.BASE_URL || '/'

  const getHref = (route) => {{
    if (basePath === '/') return route
    return basePath + route.replace(/^\//, '')
  }}

  return (
    <DocsLayout currentPath={{{home}}}>
      <div className="max-w-4xl mx-auto px-6 py-12">
        <h1 className="text-4xl font-bold mb-6">{title}</h1>
        <p className="text-lg text-gray-600 mb-8">
          Welcome to the {title}. Navigate using the sidebar to explore
          different topics.
        </p>
        <div className="grid grid-cols-1 md:grid-cols-2 gap-4">
          {{docPages.length > 0 ? (
            docPages.map((page) => (
              <a
                key={{page.route}}
                href={{getHref(page.route)}}
                className="block p-4 border border-gray-200 rounded-lg hover:border-blue-500 hover:shadow-md transition"
              >
                <h2 className="text-xl font-semibold mb-2">{{page.title}}</h2>
                <p className="text-sm text-gray-500 capitalize">{{page.type}}</p>
              </a>
            ))
          ) : (
            <p className="text-gray-500">
              No pages found. Run{{" "}}
              <code className="bg-gray-100 px-2 py-1 rounded">
                docsite-gen generate
              </code>{{" "}}
              to generate pages.
            </p>
          )}}
        </div>
      </div>
    </DocsLayout>
  )
}}"#,
        home = js_string("/"),
    );

    let mut module = ModuleBuilder::new();
    module
        .import_default("React", "react")
        .import_default("ReactDOM", "react-dom/client")
        .import_default(
            "DocsLayout",
            &format!(
                "{}{}",
                naming::depth_prefix("index"),
                config.pages.layout
            ),
        )
        .import_named(&["docPages"], &doc_pages)
        .section(component)
        .section(render::mount_snippet("HomePage", &config.pages.mount_id))
        .section("export default HomePage");
    module.finish()
}
