//! `docsite-gen` command line: `generate`, `check`, `prerender` and
//! `gen-config` over a project root, logging to stderr.

use clap::{Parser, Subcommand};
use docsite_gen::config::{self, BasePath};
use docsite_gen::{generate, output, prerender, scan};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Shared flags for commands that emit asset references.
#[derive(clap::Args, Clone)]
struct BaseArgs {
    /// URL prefix the site is served under (e.g. /docs-app/)
    #[arg(long, env = "BASE_PATH")]
    base_path: Option<String>,
}

impl BaseArgs {
    fn resolve(&self) -> BasePath {
        BasePath::from_setting(self.base_path.as_deref())
    }
}

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "docsite-gen")]
#[command(about = "Route and entry generator for a Markdown documentation site")]
#[command(long_about = "\
Route and entry generator for a Markdown documentation site

Every Markdown document becomes a React page module, an entry in the route
manifest and a static HTML shell for the bundler.

Project structure (defaults):

  web-docs/
  ├── docsite.toml                 # Optional project config
  ├── docs/                        # Documents (front matter optional)
  │   ├── doc-0002-setup.md        # → /doc-0002-setup
  │   └── guides/deploy.md         # → /guides/deploy
  ├── src/pages/                   # Generated: one .jsx per document + index.jsx
  ├── src/lib/docPages.js          # Generated: route manifest
  ├── index.html, *.html           # Generated: HTML shells
  └── html-entries.json            # Generated: bundler inputs

Metadata resolution (first available wins):
  Title:   front matter `title` → file name (doc-0002-setup.md → \"setup\")
  Type:    `type` → `category` → the source's category
  Created: `created_date` → `date`

Pages are ordered by the number in their id (doc-0002 → 2).

Run 'docsite-gen gen-config' to generate a documented docsite.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Project root (where docsite.toml and the sources live)
    #[arg(long, default_value = ".", global = true)]
    root: PathBuf,

    /// Config file (defaults to <root>/docsite.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Show debug logging
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate page modules, the route manifest and HTML shells
    Generate(BaseArgs),
    /// Validate documents and list the pages without writing anything
    Check,
    /// Write one HTML file per route into the built site
    Prerender(BaseArgs),
    /// Print a stock docsite.toml with all options documented
    GenConfig,
}

fn init_logging(cli: &Cli) {
    let level = if cli.verbose {
        Level::DEBUG
    } else if cli.quiet {
        Level::ERROR
    } else {
        Level::WARN
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    // Only fails if a subscriber is already installed.
    tracing::subscriber::set_global_default(subscriber).ok();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(&cli);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            let mut source = e.source();
            while let Some(cause) = source {
                eprintln!("  caused by: {cause}");
                source = cause.source();
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    match &cli.command {
        Command::Generate(base_args) => {
            let config = config::load_config(&cli.root, cli.config.as_deref())?;
            let base = base_args.resolve();
            println!("==> Generating pages in {}", cli.root.display());
            let summary = generate::generate(&cli.root, &config, &base)?;
            output::print_generate_output(&summary);
        }
        Command::Check => {
            let config = config::load_config(&cli.root, cli.config.as_deref())?;
            println!("==> Checking {}", cli.root.display());
            let documents = scan::scan(&cli.root, &config)?;
            let pages = generate::plan(&documents, &config);
            output::print_check_output(&pages, &documents, &canonical_root(&cli.root));
            println!("==> Documents are valid");
        }
        Command::Prerender(base_args) => {
            let config = config::load_config(&cli.root, cli.config.as_deref())?;
            let base = base_args.resolve();
            let written = prerender::prerender(&cli.root, &config, &base)?;
            output::print_prerender_output(&written, Path::new(&config.output.dist_dir));
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

fn canonical_root(root: &Path) -> PathBuf {
    root.canonicalize().unwrap_or_else(|_| root.to_path_buf())
}
