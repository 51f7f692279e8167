// golfdata-core/src/domain/status/mod.rs

pub mod parser;

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;
use crate::domain::provenance::Provenance;

pub use parser::parse_rows;

/// One golf course as reported on the status page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusRecord {
    pub name: String,
    pub status: String,
    pub updated: String,
}

/// Full-replacement export of the status table.
///
/// Serialized as `{"source", "fetched", "items"}` in that order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusSnapshot {
    #[serde(flatten)]
    pub provenance: Provenance,
    pub items: Vec<StatusRecord>,
}

impl StatusSnapshot {
    /// Refuses to build a snapshot out of zero rows: an empty table means the
    /// page layout changed, and writing it would wipe the previous export.
    pub fn new(provenance: Provenance, items: Vec<StatusRecord>) -> Result<Self, DomainError> {
        if items.is_empty() {
            return Err(DomainError::EmptyResult("banestatus".to_string()));
        }
        Ok(Self { provenance, items })
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
