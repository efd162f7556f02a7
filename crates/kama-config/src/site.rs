use std::env;

use serde::{Deserialize, Serialize};

/// Where the character pages live.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Base URL; page URLs are `{base_url}/kanji/{n}`.
    pub base_url: String,
    /// First page number to visit.
    pub first_page: u32,
    /// Last page number to visit (inclusive).
    pub last_page: u32,
}

impl SiteConfig {
    pub fn new() -> Self {
        let base_url = env::var("KAMA_BASE_URL")
            .unwrap_or_else(|_| "https://www.kanjidamage.com".to_string());
        let first_page = env::var("KAMA_FIRST_PAGE")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(1);
        let last_page = env::var("KAMA_LAST_PAGE")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(1757);

        Self {
            base_url,
            first_page,
            last_page,
        }
    }

    pub fn page_url(&self, number: u32) -> String {
        format!("{}/kanji/{}", self.base_url.trim_end_matches('/'), number)
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::new()
    }
}
