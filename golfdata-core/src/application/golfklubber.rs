// golfdata-core/src/application/golfklubber.rs
//
// USE CASE: Export the NGF club registry (JSON passthrough + provenance).

use serde_json::Value;
use std::path::Path;
use tracing::{info, instrument};

use crate::application::summary::RunSummary;
use crate::domain::provenance::Provenance;
use crate::domain::registry::ClubRegistrySnapshot;
use crate::error::GolfdataError;
use crate::infrastructure::error::FetchError;
use crate::infrastructure::fs::write_snapshot;
use crate::ports::fetcher::Fetcher;

/// Fetch the registry, check its top-level shape, stamp it and replace `output`.
///
/// A body that is not JSON counts as a failed fetch; a JSON document without
/// `data` is a shape error. Neither touches `output`.
#[instrument(skip(fetcher), fields(source = %fetcher.source()))]
pub async fn update_golfklubber(
    fetcher: &dyn Fetcher,
    output: &Path,
) -> Result<RunSummary, GolfdataError> {
    let body = fetcher.fetch().await?;
    let value: Value = serde_json::from_str(&body).map_err(|e| FetchError::Decode {
        url: fetcher.source().to_string(),
        reason: format!("invalid JSON: {e}"),
    })?;

    let snapshot =
        ClubRegistrySnapshot::from_value(value)?.stamp(Provenance::now(fetcher.source()));
    info!(entries = snapshot.entry_count(), "Registry validated");

    write_snapshot(output, &snapshot)?;

    Ok(RunSummary {
        output: output.to_path_buf(),
        count: snapshot.entry_count(),
    })
}
