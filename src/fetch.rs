//! Page fetching over HTTP.

use crate::config::Config;
use crate::errors::{Result, ScrapeError};
use crate::throttle::Throttle;
use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, info, instrument};

/// Source of raw HTML documents.
///
/// The scraper only ever needs "give me the body at this URL"; tests plug in
/// canned pages through this trait.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetch the document at `url` and return its body.
    async fn fetch(&self, url: &str) -> Result<String>;
}

/// Throttled HTTP fetcher backed by a shared `reqwest` client.
#[derive(Clone, Debug)]
pub struct HttpFetcher {
    client: Client,
    throttle: Throttle,
}

impl HttpFetcher {
    /// Build a fetcher from the application configuration
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self {
            client,
            throttle: Throttle::new(config.request_delay),
        })
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    #[instrument(skip(self))]
    async fn fetch(&self, url: &str) -> Result<String> {
        self.throttle.wait().await;
        info!("GET {}", url);

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ScrapeError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            }
            .into());
        }

        let body = response.text().await?;
        debug!(bytes = body.len(), "Fetched {}", url);
        Ok(body)
    }
}
