// golfdata/src/commands/export.rs
//
// USE CASE: Run one export (banestatus or golfklubber) and report the outcome.

use std::path::Path;
use std::time::Duration;

use golfdata_core::application::{update_banestatus, update_golfklubber};
use golfdata_core::domain::configuration::{AppConfig, Pipeline, SourceConfig};
use golfdata_core::infrastructure::adapters::{FileFetcher, HttpFetcher};
use golfdata_core::infrastructure::config::{load_config, validate_config};
use golfdata_core::infrastructure::error::{FetchError, InfrastructureError};
use golfdata_core::ports::Fetcher;
use golfdata_core::{ErrorKind, GolfdataError};

use crate::cli::SourceArgs;

/// Returns `false` when the run failed; the diagnostic is already on stderr.
pub async fn execute(pipeline: Pipeline, config_path: Option<&Path>, args: SourceArgs) -> bool {
    let config = match resolve_config(config_path, pipeline, &args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            return false;
        }
    };

    run(pipeline, &config, args.input.as_deref()).await
}

/// Defaults < file < GOLFDATA_* < flags, then validated.
pub fn resolve_config(
    config_path: Option<&Path>,
    pipeline: Pipeline,
    args: &SourceArgs,
) -> Result<AppConfig, InfrastructureError> {
    let mut config = load_config(config_path, Path::new("."))?;

    let source = config.source_mut(pipeline);
    if let Some(url) = &args.url {
        source.url = url.clone();
    }
    if let Some(output) = &args.output {
        source.output = output.to_string_lossy().into_owned();
    }
    if let Some(secs) = args.timeout {
        config.timeout_secs = secs;
    }

    validate_config(&config)?;
    Ok(config)
}

pub async fn run(pipeline: Pipeline, config: &AppConfig, input: Option<&Path>) -> bool {
    let source = config.source(pipeline);
    let output = source.output_path();
    tracing::debug!(%pipeline, url = %source.url, output = ?output, "Starting export");

    let result = match build_fetcher(source, config.timeout(), input) {
        Ok(fetcher) => match pipeline {
            Pipeline::Banestatus => update_banestatus(fetcher.as_ref(), &output).await,
            Pipeline::Golfklubber => update_golfklubber(fetcher.as_ref(), &output).await,
        },
        Err(e) => Err(GolfdataError::from(e)),
    };

    match result {
        Ok(summary) => {
            println!(
                "Wrote {} with {} {}.",
                summary.output.display(),
                summary.count,
                unit(pipeline)
            );
            true
        }
        Err(e) => {
            tracing::debug!(%pipeline, error = ?e, "Export failed");
            eprintln!("{}", diagnostic(pipeline, &output, &e));
            false
        }
    }
}

fn build_fetcher(
    source: &SourceConfig,
    timeout: Duration,
    input: Option<&Path>,
) -> Result<Box<dyn Fetcher>, FetchError> {
    match input {
        Some(path) => Ok(Box::new(FileFetcher::new(path))),
        None => Ok(Box::new(HttpFetcher::new(source.url.clone(), timeout)?)),
    }
}

fn unit(pipeline: Pipeline) -> &'static str {
    match pipeline {
        Pipeline::Banestatus => "rows",
        Pipeline::Golfklubber => "entries",
    }
}

/// One stderr line per failure kind.
pub fn diagnostic(pipeline: Pipeline, output: &Path, err: &GolfdataError) -> String {
    match (err.kind(), pipeline) {
        (ErrorKind::Fetch, Pipeline::Banestatus) => format!("Failed to fetch banestatus: {err}"),
        (ErrorKind::Fetch, Pipeline::Golfklubber) => format!("Failed to fetch NGF list: {err}"),
        (ErrorKind::EmptyResult, _) => "No banestatus rows found.".to_string(),
        (ErrorKind::Shape, _) => "Unexpected NGF payload shape.".to_string(),
        (ErrorKind::Io, _) => format!("Failed to write {}: {err}", output.display()),
        (ErrorKind::Config, _) => format!("Configuration error: {err}"),
    }
}
