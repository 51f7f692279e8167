// golfdata-core/src/infrastructure/adapters/file.rs
//
// Replays a saved page or JSON document from disk instead of the network.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::{debug, instrument};

use crate::infrastructure::error::FetchError;
use crate::ports::fetcher::Fetcher;

pub struct FileFetcher {
    path: PathBuf,
    label: String,
}

impl FileFetcher {
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let label = format!("file://{}", path.display());
        Self { path, label }
    }
}

#[async_trait]
impl Fetcher for FileFetcher {
    fn source(&self) -> &str {
        &self.label
    }

    #[instrument(skip(self), fields(path = ?self.path))]
    async fn fetch(&self) -> Result<String, FetchError> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|source| FetchError::Fixture {
                path: self.path.clone(),
                source,
            })?;

        let body = String::from_utf8(bytes).map_err(|e| FetchError::Decode {
            url: self.label.clone(),
            reason: e.to_string(),
        })?;

        debug!(bytes = body.len(), "fixture loaded");
        Ok(body)
    }
}
