use crate::config::ResolvedConfig;
use crate::downloader::HttpFetcher;
use crate::errors::AppResult;
use crate::models::{ManifestOutcome, RunReport};
use crate::pipeline::Pipeline;
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::path::PathBuf;
use tracing::{error, info, warn};

// CLI metadata constants
const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
const APP_ABOUT: &str = env!("CARGO_PKG_DESCRIPTION");

/// Builds the command-line definition.
///
/// Without arguments the built-in defaults are used; `--config` points at a TOML
/// file overriding any of them.
pub fn command() -> Command<'static> {
    Command::new("vex-mirror")
        .version(APP_VERSION)
        .about(APP_ABOUT)
        .after_help(
            "Downloads every .json file listed at the base URL, then writes index.txt and changes.csv.\nExample:\n  vex-mirror --config mirror.toml",
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help("Path to a TOML config file")
                .value_parser(clap::value_parser!(PathBuf))
                .action(ArgAction::Set),
        )
}

/// Parses command-line arguments and runs the mirror workflow.
///
/// # Returns
///
/// Returns `Ok(())` once the run is over, even if downloads or manifests failed or
/// the listing could not be fetched; those are logged. Returns an error only if the
/// configuration cannot be loaded or is invalid.
pub async fn cli() -> AppResult<()> {
    let matches = command().get_matches();
    let config = resolve_config(&matches)?;
    run_workflow(config).await
}

/// Resolves the configuration from parsed arguments.
pub fn resolve_config(matches: &ArgMatches) -> AppResult<ResolvedConfig> {
    match matches.get_one::<PathBuf>("config") {
        Some(path) => {
            info!(config = %path.display(), "Loading configuration");
            ResolvedConfig::from_toml_file(path)
        }
        None => Ok(ResolvedConfig::default()),
    }
}

async fn run_workflow(config: ResolvedConfig) -> AppResult<()> {
    let pipeline = Pipeline::new(config, HttpFetcher::new())?;
    info!(
        base_url = %pipeline.base_url(),
        download_dir = %pipeline.config().download_dir.display(),
        "Starting mirror"
    );

    match pipeline.run().await {
        Ok(report) => print_summary(&report),
        Err(e) => error!(error = %e, "Run aborted"),
    }

    Ok(())
}

fn print_summary(report: &RunReport) {
    for failure in report.downloads.failures() {
        warn!(link = failure.link.as_str(), status = ?failure.status, "Download failed");
    }
    for (name, outcome) in report.manifests() {
        match outcome {
            ManifestOutcome::Written { rows } => {
                info!(manifest = name, rows = *rows, "Manifest created successfully")
            }
            ManifestOutcome::Failed { reason } => {
                warn!(manifest = name, error = reason.as_str(), "Manifest not created")
            }
        }
    }
    info!(
        links_found = report.links_found,
        downloaded = report.downloads.succeeded(),
        failed = report.downloads.failed(),
        complete = report.is_complete(),
        "Summary"
    );
}
