// golfdata-core/src/domain/configuration.rs

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use validator::Validate;

pub const BANESTATUS_URL: &str = "https://mingolf.no/banestatus-er-golfbanen-apen/";
pub const BANESTATUS_OUTPUT: &str = "data/banestatus.json";
pub const GOLFKLUBBER_URL: &str = "https://www.golfforbundet.no/assets/golfklubber.json";
pub const GOLFKLUBBER_OUTPUT: &str = "data/golfklubber.json";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// The two independent exports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pipeline {
    Banestatus,
    Golfklubber,
}

impl Pipeline {
    pub const ALL: [Pipeline; 2] = [Pipeline::Banestatus, Pipeline::Golfklubber];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Banestatus => "banestatus",
            Self::Golfklubber => "golfklubber",
        }
    }
}

impl fmt::Display for Pipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Serialize, Deserialize, Validate, Clone, PartialEq)]
pub struct SourceConfig {
    #[validate(url(message = "Source URL must be absolute"))]
    pub url: String,

    #[validate(length(min = 1, message = "Output path cannot be empty"))]
    pub output: String,
}

impl SourceConfig {
    pub fn output_path(&self) -> PathBuf {
        PathBuf::from(&self.output)
    }
}

#[derive(Debug, Serialize, Deserialize, Validate, Clone, PartialEq)]
pub struct AppConfig {
    #[serde(rename = "timeout-secs")]
    #[validate(range(min = 1, max = 600))]
    pub timeout_secs: u64,

    #[validate(nested)]
    pub banestatus: SourceConfig,

    #[validate(nested)]
    pub golfklubber: SourceConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            banestatus: SourceConfig {
                url: BANESTATUS_URL.to_string(),
                output: BANESTATUS_OUTPUT.to_string(),
            },
            golfklubber: SourceConfig {
                url: GOLFKLUBBER_URL.to_string(),
                output: GOLFKLUBBER_OUTPUT.to_string(),
            },
        }
    }
}

impl AppConfig {
    pub fn source(&self, pipeline: Pipeline) -> &SourceConfig {
        match pipeline {
            Pipeline::Banestatus => &self.banestatus,
            Pipeline::Golfklubber => &self.golfklubber,
        }
    }

    pub fn source_mut(&mut self, pipeline: Pipeline) -> &mut SourceConfig {
        match pipeline {
            Pipeline::Banestatus => &mut self.banestatus,
            Pipeline::Golfklubber => &mut self.golfklubber,
        }
    }

    pub fn timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.timeout_secs)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.source(Pipeline::Golfklubber).output, "data/golfklubber.json");
        assert_eq!(config.timeout().as_secs(), 30);
    }

    #[test]
    fn test_relative_url_rejected() {
        let mut config = AppConfig::default();
        config.source_mut(Pipeline::Banestatus).url = "mingolf.no/banestatus".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_timeout_bounds() {
        let mut config = AppConfig::default();
        config.timeout_secs = 0;
        assert!(config.validate().is_err());
        config.timeout_secs = 601;
        assert!(config.validate().is_err());
        config.timeout_secs = 600;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_output_rejected() {
        let mut config = AppConfig::default();
        config.golfklubber.output.clear();
        assert!(config.validate().is_err());
    }
}
