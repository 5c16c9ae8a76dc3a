//! src/fetcher.rs
use crate::error::FetchError;
use anyhow::Context;
use std::time::Duration;

/// Handle for retrieving the raw source text over HTTP.
#[derive(Debug, Clone)]
pub struct TextFetcher {
    client: reqwest::Client,
}

impl TextFetcher {
    pub fn new(timeout: Duration) -> Result<Self, anyhow::Error> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build the HTTP client")?;
        Ok(Self { client })
    }

    /// Single attempt, no retries. Any non-2xx status is a failure.
    #[tracing::instrument(name = "Fetch source text", skip(self))]
    pub async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| FetchError::Transport {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status,
            });
        }

        response
            .text()
            .await
            .map_err(|source| FetchError::Transport {
                url: url.to_string(),
                source,
            })
    }

    /// Logs the failure and surfaces it as absent content. Callers must stop
    /// the pipeline on `None` rather than feed absent text downstream.
    pub async fn fetch_or_none(&self, url: &str) -> Option<String> {
        match self.fetch(url).await {
            Ok(text) => Some(text),
            Err(error) => {
                tracing::error!(?error, url, "Failed to fetch the source text");
                None
            }
        }
    }
}
