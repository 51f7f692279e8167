// golfdata-core/src/domain/provenance.rs

use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Local wall-clock time, second precision, no offset (`2024-05-01T07:30:00`).
const FETCHED_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Where a snapshot came from and when it was taken.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Provenance {
    pub source: String,
    pub fetched: String,
}

impl Provenance {
    pub fn now(source: impl Into<String>) -> Self {
        Self::at(source, Local::now().naive_local())
    }

    pub fn at(source: impl Into<String>, fetched: NaiveDateTime) -> Self {
        Self {
            source: source.into(),
            fetched: fetched.format(FETCHED_FORMAT).to_string(),
        }
    }
}
