//! url-extractor main entry point
//!
//! This is the command-line interface for the url-extractor link extractor.

use anyhow::Context;
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use url_extractor::config::{load_config, Config, FailurePolicy};
use url_extractor::crawler::run_extraction;
use url_extractor::output::{render, OutputFormat};

/// url-extractor: list the same-site links of web pages
///
/// Fetches each URL, extracts the links of its anchors and keeps the ones
/// pointing at the same site. Relative links are printed in absolute form.
#[derive(Parser, Debug)]
#[command(name = "url-extractor")]
#[command(version)]
#[command(about = "Extract same-site links from web pages", long_about = None)]
struct Cli {
    /// URL where links should be extracted (repeat for several URLs)
    #[arg(short, long = "url", value_name = "URL", required = true, value_parser = non_empty)]
    urls: Vec<String>,

    /// Expected output type
    #[arg(short, long, value_enum)]
    output: OutputFormat,

    /// Path to TOML configuration file
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Report the URLs that succeeded even if others fail
    #[arg(long)]
    keep_going: bool,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress everything but errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

fn non_empty(value: &str) -> Result<String, String> {
    if value.is_empty() {
        Err("URL cannot be empty".to_string())
    } else {
        Ok(value.to_string())
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let stdout = std::io::stdout();
    run(&cli, &mut stdout.lock()).await
}

/// Runs the extraction described by `cli` and renders it into `out`
///
/// In fail-fast mode a failing URL aborts before anything is written. In
/// partial mode the successful URLs are rendered first, then the failures
/// are logged and turned into an error.
async fn run(cli: &Cli, out: &mut dyn Write) -> anyhow::Result<()> {
    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            load_config(path)
                .with_context(|| format!("Failed to load configuration from {}", path.display()))?
        }
        None => Config::default(),
    };

    if cli.keep_going {
        config.batch.failure_policy = FailurePolicy::Partial;
    }

    let report = run_extraction(&config, &cli.urls).await?;

    render(cli.output, &report.links, out).context("Failed to write output")?;

    if !report.is_complete() {
        for failure in &report.failures {
            tracing::error!("{}", failure.error);
        }
        anyhow::bail!(
            "{} of {} URL(s) failed",
            report.failures.len(),
            cli.urls.len()
        );
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
///
/// Logs go to stderr; stdout only carries the rendered links.
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("url_extractor=warn,warn"),
            1 => EnvFilter::new("url_extractor=info,warn"),
            2 => EnvFilter::new("url_extractor=debug,info"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}
