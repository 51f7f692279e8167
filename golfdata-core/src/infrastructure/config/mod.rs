pub mod loader;

pub use crate::domain::configuration::{AppConfig, Pipeline, SourceConfig};
pub use loader::{apply_env_overrides, load_config, validate_config};
