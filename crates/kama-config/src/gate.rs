use std::env;

use serde::{Deserialize, Serialize};

fn default_on() -> bool {
    true
}

/// Heuristic gate toggles. Every check can be disabled independently; the
/// gate itself is a strict intersection of whatever is enabled.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GateConfig {
    /// Reject records with no content beyond the bare minimum.
    #[serde(default = "default_on")]
    pub reject_trivial: bool,
    /// Reject records whose headword is not exactly one character.
    #[serde(default = "default_on")]
    pub reject_multi_glyph: bool,
    /// Reject records with neither a pronunciation nor any usage entries.
    #[serde(default = "default_on")]
    pub reject_unused: bool,
}

impl GateConfig {
    pub fn new() -> Self {
        let flag = |name: &str| {
            env::var(name)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true)
        };

        Self {
            reject_trivial: flag("KAMA_GATE_TRIVIAL"),
            reject_multi_glyph: flag("KAMA_GATE_MULTI_GLYPH"),
            reject_unused: flag("KAMA_GATE_UNUSED"),
        }
    }
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            reject_trivial: true,
            reject_multi_glyph: true,
            reject_unused: true,
        }
    }
}
