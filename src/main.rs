use clap::{Parser, Subcommand};
use docsnav::manager::{DocsManager, PopulateOptions};
use docsnav::{output, settings};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

const CONFIG_FILE: &str = "docs.json";
const DEFAULT_SITE_NAME: &str = "Documentation";

#[derive(Parser)]
#[command(name = "docsnav")]
#[command(about = "Build and merge documentation site navigation")]
#[command(long_about = "\
Build and merge documentation site navigation

Pages come from docs.json, from the content directory, or both. Merging
never lists a page twice and never reorders what is already there.

Content structure:

  docs/
  ├── docs.json                    # Site configuration (navigation is rewritten)
  ├── docsnav.toml                 # Tool settings (optional)
  ├── index.mdx                    # → \"index\", always first
  ├── quickstart.mdx               # → \"quickstart\"
  ├── getting-started/             # → group \"Getting Started\"
  │   └── install.mdx              # → \"getting-started/install\"
  ├── guides/
  │   └── navigation.json          # Override: this group verbatim, nothing below is scanned
  ├── api-reference/               # Skipped unless scan.include_api_reference
  └── images/                      # Always skipped

Set RUST_LOG=info (or debug) for progress logging on stderr.

Run 'docsnav gen-config' to generate a documented docsnav.toml.")]
#[command(version)]
struct Cli {
    /// Content directory
    #[arg(long, default_value = "docs", global = true)]
    source: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Scan the content directory into docs.json
    Scan {
        /// Configuration to update [default: <source>/docs.json]
        #[arg(long)]
        config: Option<PathBuf>,
        /// Where to write the result [default: the configuration file]
        #[arg(long)]
        output: Option<PathBuf>,
        /// Replace pages and groups instead of merging into them
        #[arg(long)]
        replace: bool,
        /// Keep pages that are already in the navigation
        #[arg(long)]
        allow_duplicates: bool,
    },
    /// Merge one docs.json into another
    Merge {
        base: PathBuf,
        other: PathBuf,
        /// Also take name, theme, colors, etc. from the other file
        #[arg(long)]
        combine_base_fields: bool,
        /// Collapse all unnamed groups into one
        #[arg(long)]
        combine_empty_groups: bool,
        /// Write here instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Prefix every page path and relative link
    Prefix {
        file: PathBuf,
        prefix: String,
        /// Write here instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Load and validate a docs.json
    Check { file: PathBuf },
    /// Print a stock docsnav.toml with all options documented
    GenConfig,
}

fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Log to stderr, filtered by `RUST_LOG`, warnings only by default.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<ExitCode, Box<dyn std::error::Error>> {
    match cli.command {
        Command::Scan {
            config,
            output: out,
            replace,
            allow_duplicates,
        } => {
            let settings = settings::load_settings(&cli.source)?;
            let config = config.unwrap_or_else(|| cli.source.join(CONFIG_FILE));

            let mut docs = DocsManager::new();
            if config.exists() {
                docs.load_file(&config)?;
            } else {
                tracing::info!(path = %config.display(), "no configuration yet, starting fresh");
                docs.load_default(DEFAULT_SITE_NAME);
            }

            let mut options: PopulateOptions = settings.populate_options();
            options.preserve_existing &= !replace;
            options.merge.allow_duplicates |= allow_duplicates;
            docs.populate_navigation_from_path(&cli.source, &options)?;
            docs.apply_url_prefix(&settings.output.url_prefix)?;

            docs.save(out.as_deref().unwrap_or(config.as_path()))?;
            finish(&mut docs)
        }
        Command::Merge {
            base,
            other,
            combine_base_fields,
            combine_empty_groups,
            output: out,
        } => {
            let settings = settings::load_settings(&cli.source)?;
            let mut docs = DocsManager::new();
            docs.load_file(&base)?;

            let mut incoming = DocsManager::new();
            incoming.load_file(&other)?;
            output::print_diagnostics(&incoming.take_diagnostics());
            let other_config = incoming.config().cloned().unwrap_or_default();

            let mut options = settings.merge;
            options.combine_empty_groups |= combine_empty_groups;
            docs.merge(other_config, combine_base_fields, options)?;
            emit(&mut docs, out.as_deref())
        }
        Command::Prefix {
            file,
            prefix,
            output: out,
        } => {
            let mut docs = DocsManager::new();
            docs.load_file(&file)?;
            docs.apply_url_prefix(&prefix)?;
            emit(&mut docs, out.as_deref())
        }
        Command::Check { file } => {
            let mut docs = DocsManager::new();
            docs.load_file(&file)?;
            docs.validate()?;
            finish(&mut docs)
        }
        Command::GenConfig => {
            print!("{}", settings::stock_settings_toml());
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Save to `out`, or print the JSON to stdout, then report.
fn emit(docs: &mut DocsManager, out: Option<&Path>) -> Result<ExitCode, Box<dyn std::error::Error>> {
    match out {
        Some(path) => {
            docs.save(path)?;
            finish(docs)
        }
        None => {
            println!("{}", docs.to_json()?);
            report(docs)
        }
    }
}

/// Print the tree listing, then diagnostics.
fn finish(docs: &mut DocsManager) -> Result<ExitCode, Box<dyn std::error::Error>> {
    if let Some(navigation) = docs.navigation() {
        output::print_navigation(navigation);
    }
    report(docs)
}

/// Print diagnostics; failure exit status when any is an error.
fn report(docs: &mut DocsManager) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let diagnostics = docs.take_diagnostics();
    output::print_diagnostics(&diagnostics);
    if diagnostics.iter().any(|d| !d.is_warning) {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}
