//! Final acceptance filter: domain judgment about which structurally valid
//! records are worth keeping. Every rejection is audited; nothing is dropped
//! silently.

use kama_config::gate::GateConfig;
use kama_core::{AuditLog, Maybe};
use kama_types::PageRecord;

pub struct HeuristicGate {
    config: GateConfig,
}

impl HeuristicGate {
    pub fn new(config: GateConfig) -> Self {
        Self { config }
    }

    /// Run the record through the enabled checks, in order, stopping at the
    /// first rejection — a record rejected by one check is never evaluated
    /// (or logged) by the ones after it. All enabled checks must pass.
    pub fn apply(&self, record: PageRecord, audit: &mut AuditLog) -> Maybe<PageRecord> {
        if self.config.reject_trivial && is_trivial(&record) {
            audit.heuristic(format!(
                "{}: nothing beyond the bare minimum, dropping",
                record.describe()
            ));
            return Maybe::absent();
        }

        if self.config.reject_multi_glyph && record.character.chars().count() != 1 {
            audit.heuristic(format!(
                "{}: headword is not a single glyph, dropping",
                record.describe()
            ));
            return Maybe::absent();
        }

        if self.config.reject_unused && lacks_usage(&record) {
            audit.heuristic(format!(
                "{}: no pronunciation and no usage entries, treating as a radical",
                record.describe()
            ));
            return Maybe::absent();
        }

        Maybe::present(record)
    }
}

/// Pure noise: no components, no pronunciation, no mnemonics, no
/// description, no entries.
fn is_trivial(record: &PageRecord) -> bool {
    record.components.is_empty()
        && record.onyomi.is_absent()
        && record.translation_mnemonic.is_empty()
        && record.onyomi_mnemonic.is_empty()
        && record.description.is_empty()
        && record.kunyomi.is_empty()
        && record.jukugo.is_empty()
}

/// A record with a meaning but no reading and no usage is a radical in this
/// domain's judgment, not a full character.
fn lacks_usage(record: &PageRecord) -> bool {
    record.onyomi.is_absent() && record.kunyomi.is_empty() && record.jukugo.is_empty()
}
