use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use kama_config::fetch::FetchConfig;
use kama_config::site::SiteConfig;

/// Where raw page HTML comes from. The extraction side only ever sees this
/// trait; swapping HTTP for a directory of saved pages is a constructor
/// choice at the CLI.
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Raw HTML of one page, by page number.
    async fn page(&self, number: u32) -> Result<String>;
}

pub struct HttpSource {
    client: reqwest::Client,
    site: SiteConfig,
    delay: Duration,
}

impl HttpSource {
    pub fn new(site: SiteConfig, fetch: &FetchConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(fetch.timeout_ms))
            .user_agent(concat!("kama/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("failed to build HTTP client")?;

        Ok(Self {
            client,
            site,
            delay: Duration::from_millis(fetch.delay_ms),
        })
    }
}

#[async_trait]
impl PageSource for HttpSource {
    async fn page(&self, number: u32) -> Result<String> {
        let url = self.site.page_url(number);

        // Politeness delay; documents are fetched once and never retried.
        tokio::time::sleep(self.delay).await;

        tracing::debug!(%url, "fetching page");
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("failed to fetch {url}"))?
            .error_for_status()
            .with_context(|| format!("server rejected {url}"))?;

        response
            .text()
            .await
            .with_context(|| format!("failed to read body of {url}"))
    }
}
