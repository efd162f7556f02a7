use std::env;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchConfig {
    /// Directory for the on-disk page cache.
    pub cache_dir: String,
    /// Bounded worker pool size for the concurrent phase.
    pub workers: usize,
    /// Per-request timeout in milliseconds.
    pub timeout_ms: u64,
    /// Delay between HTTP requests in milliseconds (politeness; cache hits
    /// do not wait).
    pub delay_ms: u64,
}

impl FetchConfig {
    pub fn new() -> Self {
        let cache_dir = env::var("KAMA_CACHE_DIR").unwrap_or_else(|_| "pages".to_string());
        let workers = env::var("KAMA_WORKERS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(8);
        let timeout_ms = env::var("KAMA_TIMEOUT_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10_000);
        let delay_ms = env::var("KAMA_DELAY_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(250);

        Self {
            cache_dir,
            workers,
            timeout_ms,
            delay_ms,
        }
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self::new()
    }
}
