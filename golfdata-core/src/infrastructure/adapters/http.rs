// golfdata-core/src/infrastructure/adapters/http.rs

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use tracing::{debug, instrument};

use crate::infrastructure::error::FetchError;
use crate::ports::fetcher::Fetcher;

const USER_AGENT: &str = concat!("golfdata/", env!("CARGO_PKG_VERSION"));

/// One GET against a fixed URL, bounded by `timeout` end to end
/// (connect, headers and body).
pub struct HttpFetcher {
    client: reqwest::Client,
    url: String,
    timeout: Duration,
}

impl HttpFetcher {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, FetchError> {
        let url = url.into();
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|source| FetchError::Transport {
                url: url.clone(),
                source,
            })?;

        Ok(Self {
            client,
            url,
            timeout,
        })
    }

    fn classify(&self, err: reqwest::Error) -> FetchError {
        if err.is_timeout() {
            FetchError::Timeout {
                url: self.url.clone(),
                secs: self.timeout.as_secs(),
            }
        } else {
            FetchError::Transport {
                url: self.url.clone(),
                source: err,
            }
        }
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    fn source(&self) -> &str {
        &self.url
    }

    #[instrument(skip(self), fields(url = %self.url))]
    async fn fetch(&self) -> Result<String, FetchError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(FetchError::Status {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }

        let bytes = response.bytes().await.map_err(|e| self.classify(e))?;
        let body = String::from_utf8(bytes.to_vec()).map_err(|e| FetchError::Decode {
            url: self.url.clone(),
            reason: e.to_string(),
        })?;

        debug!(bytes = body.len(), "response received");
        Ok(body)
    }
}
