use serde::{Deserialize, Serialize};

use self::export::ExportConfig;
use self::fetch::FetchConfig;
use self::gate::GateConfig;
use self::site::SiteConfig;

pub mod export;
pub mod fetch;
pub mod gate;
pub mod site;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub site: SiteConfig,
    pub fetch: FetchConfig,
    pub gate: GateConfig,
    pub export: ExportConfig,
}

impl Config {
    /// Build from environment variables, falling back to defaults.
    pub fn new() -> Self {
        Config {
            site: SiteConfig::new(),
            fetch: FetchConfig::new(),
            gate: GateConfig::new(),
            export: ExportConfig::new(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
