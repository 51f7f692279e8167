// golfdata-core/src/application/summary.rs

use serde::Serialize;
use std::path::PathBuf;

/// What a successful run produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub output: PathBuf,
    /// Status rows, or club entries under `data`.
    pub count: usize,
}
