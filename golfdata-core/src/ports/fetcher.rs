// golfdata-core/src/ports/fetcher.rs

// What a pipeline needs from the outside world: the raw body of its source.
// Whether it comes over HTTP or from a fixture on disk is the adapter's business.

use async_trait::async_trait;

use crate::infrastructure::error::FetchError;

#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Provenance label written into the snapshot.
    fn source(&self) -> &str;

    /// Single attempt. No retry.
    async fn fetch(&self) -> Result<String, FetchError>;
}
