use anyhow::{Context, Result};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::{Duration, Instant};
use tokio::time::sleep;

use crate::config::SourceSettings;

/// HTTP client that paces its requests to stay under the API rate limit
pub struct RateLimitedClient {
    client: Client,
    min_delay: Duration,
    last_request: Option<Instant>,
}

impl RateLimitedClient {
    pub fn new(settings: &SourceSettings) -> Result<Self> {
        let client = Self::build_client(settings)?;

        Ok(Self {
            client,
            min_delay: Duration::from_millis(settings.rate_limit_ms),
            last_request: None,
        })
    }

    /// Fetch a URL and decode the JSON body.
    pub async fn get_json<T: DeserializeOwned>(&mut self, url: &str) -> Result<T> {
        let response = self.get(url).await?;
        response
            .json()
            .await
            .with_context(|| format!("Failed to decode JSON from {}", url))
    }

    pub async fn get(&mut self, url: &str) -> Result<reqwest::Response> {
        self.pace().await;

        let response = self
            .client
            .get(url)
            .send()
            .await
            .with_context(|| format!("Failed to fetch {}", url))?;

        if !response.status().is_success() {
            anyhow::bail!("HTTP {} for {}", response.status(), url);
        }

        Ok(response)
    }

    fn build_client(settings: &SourceSettings) -> Result<Client> {
        Client::builder()
            .user_agent(settings.user_agent)
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()
            .context("Failed to build HTTP client")
    }

    /// Sleep off whatever remains of the minimum delay since the last request.
    async fn pace(&mut self) {
        if let Some(last) = self.last_request {
            let elapsed = last.elapsed();
            if elapsed < self.min_delay {
                sleep(self.min_delay - elapsed).await;
            }
        }
        self.last_request = Some(Instant::now());
    }
}
