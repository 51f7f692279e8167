// golfdata-core/src/infrastructure/error.rs

use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum FetchError {
    #[error("Request failed: HTTP {status} from {url}")]
    #[diagnostic(
        code(golfdata::infra::fetch::status),
        help("Only 200 OK is accepted. Check that the source URL is still valid.")
    )]
    Status { url: String, status: u16 },

    #[error("Request to {url} timed out after {secs}s")]
    #[diagnostic(code(golfdata::infra::fetch::timeout))]
    Timeout { url: String, secs: u64 },

    #[error("Request to {url} failed: {source}")]
    #[diagnostic(
        code(golfdata::infra::fetch::transport),
        help("Check network connectivity and DNS.")
    )]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Response from {url} could not be decoded: {reason}")]
    #[diagnostic(code(golfdata::infra::fetch::decode))]
    Decode { url: String, reason: String },

    #[error("Could not read fixture {path:?}: {source}")]
    #[diagnostic(code(golfdata::infra::fetch::fixture))]
    Fixture {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Error, Debug, Diagnostic)]
pub enum InfrastructureError {
    // --- NETWORK ---
    #[error(transparent)]
    #[diagnostic(transparent)]
    Fetch(#[from] FetchError),

    // --- FILESYSTEM (IO) ---
    #[error("File System Error: {0}")]
    #[diagnostic(
        code(golfdata::infra::io),
        help("Check file permissions or path validity.")
    )]
    Io(#[from] std::io::Error),

    #[error("Could not write snapshot {path:?}: {source}")]
    #[diagnostic(
        code(golfdata::infra::write),
        help("Check that the output directory is writable.")
    )]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // --- SERIALIZATION ---
    #[error("JSON Serialization Error: {0}")]
    #[diagnostic(code(golfdata::infra::json))]
    Json(#[from] serde_json::Error),

    // --- CONFIG / YAML ---
    #[error("YAML Parsing Error: {0}")]
    #[diagnostic(
        code(golfdata::infra::yaml),
        help("Check your YAML syntax (indentation, types).")
    )]
    YamlError(#[from] serde_yaml::Error),

    #[error("Configuration Error: {0}")]
    #[diagnostic(code(golfdata::infra::config))]
    ConfigError(String),

    #[error("Configuration file not found at '{0}'")]
    #[diagnostic(code(golfdata::infra::config_missing))]
    ConfigNotFound(String),

    #[error("Invalid configuration: {0}")]
    #[diagnostic(
        code(golfdata::infra::config_invalid),
        help("URLs must be absolute, outputs non-empty, timeout between 1 and 600 seconds.")
    )]
    InvalidConfig(#[from] validator::ValidationErrors),
}
