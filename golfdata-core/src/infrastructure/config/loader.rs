// golfdata-core/src/infrastructure/config/loader.rs

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, instrument};
use validator::Validate;

use crate::domain::configuration::{AppConfig, Pipeline};
use crate::infrastructure::error::InfrastructureError;

pub const CONFIG_FILENAME: &str = "golfdata.yaml";
const ENV_PREFIX: &str = "GOLFDATA";

// --- FICHIER (toutes les clés optionnelles) ---

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(rename = "timeout-secs")]
    timeout_secs: Option<u64>,
    banestatus: Option<SourceOverride>,
    golfklubber: Option<SourceOverride>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct SourceOverride {
    url: Option<String>,
    output: Option<String>,
}

// --- LOADER ---

/// Defaults, then the YAML file, then `GOLFDATA_*` variables.
///
/// `explicit` must exist when given. Otherwise `golfdata.yaml` in `dir` is
/// used if present. CLI flags are layered on top by the caller, which then
/// runs [`validate_config`].
#[instrument]
pub fn load_config(explicit: Option<&Path>, dir: &Path) -> Result<AppConfig, InfrastructureError> {
    let mut config = AppConfig::default();

    if let Some(path) = find_config(explicit, dir)? {
        info!(path = ?path, "Loading configuration file");
        let content = fs::read_to_string(&path)?;
        let file: ConfigFile = serde_yaml::from_str(&content)?;
        merge_file(&mut config, file);
    }

    apply_env_overrides(&mut config, |key| std::env::var(key).ok())?;

    Ok(config)
}

fn find_config(explicit: Option<&Path>, dir: &Path) -> Result<Option<PathBuf>, InfrastructureError> {
    match explicit {
        Some(path) if path.is_file() => Ok(Some(path.to_path_buf())),
        Some(path) => Err(InfrastructureError::ConfigNotFound(
            path.display().to_string(),
        )),
        None => {
            let candidate = dir.join(CONFIG_FILENAME);
            Ok(candidate.is_file().then_some(candidate))
        }
    }
}

fn merge_file(config: &mut AppConfig, file: ConfigFile) {
    if let Some(secs) = file.timeout_secs {
        config.timeout_secs = secs;
    }
    for (pipeline, section) in [
        (Pipeline::Banestatus, file.banestatus),
        (Pipeline::Golfklubber, file.golfklubber),
    ] {
        let Some(section) = section else { continue };
        let target = config.source_mut(pipeline);
        if let Some(url) = section.url {
            target.url = url;
        }
        if let Some(output) = section.output {
            target.output = output;
        }
    }
}

/// Permet de faire: GOLFDATA_BANESTATUS_OUTPUT=/tmp/status.json golfdata banestatus
///
/// `lookup` is `std::env::var` in production; tests pass a map.
pub fn apply_env_overrides<F>(config: &mut AppConfig, lookup: F) -> Result<(), InfrastructureError>
where
    F: Fn(&str) -> Option<String>,
{
    let key = format!("{ENV_PREFIX}_TIMEOUT_SECS");
    if let Some(val) = lookup(&key) {
        let secs = val.trim().parse::<u64>().map_err(|e| {
            InfrastructureError::ConfigError(format!("{key}='{val}' is not a number of seconds: {e}"))
        })?;
        info!(old = config.timeout_secs, new = secs, "Overriding timeout via ENV");
        config.timeout_secs = secs;
    }

    for pipeline in Pipeline::ALL {
        let prefix = format!("{ENV_PREFIX}_{}", pipeline.as_str().to_uppercase());
        let target = config.source_mut(pipeline);

        if let Some(val) = lookup(&format!("{prefix}_URL")) {
            info!(%pipeline, old = %target.url, new = %val, "Overriding source URL via ENV");
            target.url = val;
        }
        if let Some(val) = lookup(&format!("{prefix}_OUTPUT")) {
            info!(%pipeline, old = %target.output, new = %val, "Overriding output via ENV");
            target.output = val;
        }
    }

    Ok(())
}

pub fn validate_config(config: &AppConfig) -> Result<(), InfrastructureError> {
    config.validate().map_err(InfrastructureError::from)
}
