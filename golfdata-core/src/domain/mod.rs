pub mod configuration;
pub mod error;
pub mod provenance;
pub mod registry;
pub mod status;

// Re-exports pratiques pour simplifier les imports ailleurs
pub use configuration::{AppConfig, Pipeline, SourceConfig};
pub use error::DomainError;
pub use provenance::Provenance;
pub use registry::ClubRegistrySnapshot;
pub use status::{StatusRecord, StatusSnapshot};
