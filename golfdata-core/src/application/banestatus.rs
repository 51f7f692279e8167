// golfdata-core/src/application/banestatus.rs
//
// USE CASE: Export golf course status (HTML table -> JSON snapshot).

use std::path::Path;
use tracing::{info, instrument};

use crate::application::summary::RunSummary;
use crate::domain::provenance::Provenance;
use crate::domain::status::{StatusRecord, StatusSnapshot, parse_rows};
use crate::error::GolfdataError;
use crate::infrastructure::fs::write_snapshot;
use crate::ports::fetcher::Fetcher;

/// Fetch the status page, extract its rows and replace `output`.
///
/// Fails before writing when the fetch fails or no row qualifies, so a bad
/// run never clobbers the previous snapshot.
#[instrument(skip(fetcher), fields(source = %fetcher.source()))]
pub async fn update_banestatus(
    fetcher: &dyn Fetcher,
    output: &Path,
) -> Result<RunSummary, GolfdataError> {
    let html = fetcher.fetch().await?;
    info!(bytes = html.len(), "Status page fetched");

    let items: Vec<StatusRecord> = parse_rows(&html).collect();
    info!(rows = items.len(), "Status rows extracted");

    let snapshot = StatusSnapshot::new(Provenance::now(fetcher.source()), items)?;
    write_snapshot(output, &snapshot)?;

    Ok(RunSummary {
        output: output.to_path_buf(),
        count: snapshot.len(),
    })
}
