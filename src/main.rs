#![forbid(unsafe_code)]

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan};

use artifact_index::config::{ConfigOverrides, resolve_index_config};
use artifact_index::{IndexResult, generate_cmd, resolve_build_timestamp};

#[derive(Parser, Debug)]
#[command(name = "artifact-index")]
#[command(about = "Generate an index page for a directory of artifacts", long_about = None)]
struct Cli {
    /// Build timestamp substituted into the template verbatim
    #[arg(conflicts_with = "now")]
    timestamp: Option<String>,

    /// Stamp the current UTC time (RFC 3339) instead of a given timestamp
    #[arg(long)]
    now: bool,

    /// TOML config file (artifacts_dir, template, out_dir, escape_html, manifest)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory whose sub-directories are listed (default: artifacts)
    #[arg(long)]
    artifacts_dir: Option<PathBuf>,

    /// Page template (default: index_template.html next to the executable,
    /// else templates/index_template.html)
    #[arg(long)]
    template: Option<PathBuf>,

    /// Output directory for index.html (default: dist)
    #[arg(long)]
    out_dir: Option<PathBuf>,

    /// HTML-escape artifact names and descriptions
    #[arg(long)]
    escape_html: bool,

    /// Also write index.json with the scanned artifacts
    #[arg(long)]
    manifest: bool,

    /// Enable verbose logging (or set ARTIFACT_INDEX_LOG)
    #[arg(long)]
    verbose: bool,
}

impl Cli {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            artifacts_dir: self.artifacts_dir.clone(),
            template_path: self.template.clone(),
            out_dir: self.out_dir.clone(),
            escape_html: self.escape_html,
            write_manifest: self.manifest,
        }
    }
}

fn init_tracing(verbose: bool) {
    let env = std::env::var("ARTIFACT_INDEX_LOG").unwrap_or_else(|_| {
        if verbose { "artifact_index=debug".to_string() } else { "artifact_index=info".to_string() }
    });
    let _ = tracing_subscriber::fmt()
        .with_span_events(FmtSpan::ACTIVE)
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_env_filter(EnvFilter::new(env))
        .try_init();
}

fn run(cli: &Cli) -> IndexResult<()> {
    let config = resolve_index_config(cli.config.as_deref(), &cli.overrides())?;
    let timestamp = resolve_build_timestamp(cli.timestamp.as_deref(), cli.now)?;
    generate_cmd::run(&config, timestamp.as_deref())?;
    Ok(())
}

fn main() {
    color_eyre::install().ok();
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("{:#}", e);
        std::process::exit(1);
    }
}
