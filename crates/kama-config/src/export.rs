use std::env;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Field separator for the tabular exports (`,` or `\t`).
    pub separator: char,
    /// Emit a header line in tabular exports.
    pub include_headers: bool,
    /// Records table output path.
    pub records_path: String,
    /// Glyph-dependency edge list output path.
    pub deps_path: String,
    /// JSON record store path (re-export source).
    pub store_path: String,
    /// Audit log output path.
    pub audit_path: String,
}

impl ExportConfig {
    pub fn new() -> Self {
        let separator = env::var("KAMA_SEPARATOR")
            .ok()
            .and_then(|v| v.chars().next())
            .unwrap_or(',');
        let include_headers = env::var("KAMA_HEADERS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(true);
        let records_path =
            env::var("KAMA_RECORDS_OUT").unwrap_or_else(|_| "out/records.csv".to_string());
        let deps_path =
            env::var("KAMA_DEPS_OUT").unwrap_or_else(|_| "out/dependencies.csv".to_string());
        let store_path =
            env::var("KAMA_STORE_OUT").unwrap_or_else(|_| "out/records.json".to_string());
        let audit_path =
            env::var("KAMA_AUDIT_OUT").unwrap_or_else(|_| "out/audit.log".to_string());

        Self {
            separator,
            include_headers,
            records_path,
            deps_path,
            store_path,
            audit_path,
        }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self::new()
    }
}
