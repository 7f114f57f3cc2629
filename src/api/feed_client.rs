use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::error::{FeedError, FeedResult};

#[cfg(test)]
use mockall::automock;

/// Outbound fetch seam, mockable in handler tests.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait FeedClientTrait: Send + Sync {
    async fn fetch_document(&self, url: &str) -> FeedResult<String>;
}

pub struct FeedClient {
    client: Client,
    timeout: Duration,
}

impl FeedClient {
    pub fn new(timeout: Duration) -> Self {
        Self {
            client: Client::new(),
            timeout,
        }
    }
}

#[async_trait]
impl FeedClientTrait for FeedClient {
    /// GET the feed document. Network errors, timeouts and non-2xx statuses
    /// all collapse into `FeedUnavailable`.
    async fn fetch_document(&self, url: &str) -> FeedResult<String> {
        let response = self
            .client
            .get(url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| FeedError::FeedUnavailable(format!("feed request failed: {e}")))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| FeedError::FeedUnavailable(format!("failed to read feed body: {e}")))?;

        if !status.is_success() {
            return Err(FeedError::FeedUnavailable(format!(
                "feed returned HTTP {status}"
            )));
        }

        Ok(body)
    }
}
