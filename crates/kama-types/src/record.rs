use kama_core::Maybe;
use serde::{Deserialize, Serialize};

/// One glyph from a character's breakdown region.
///
/// A component is either a full kanji (its page is linked from the breakdown)
/// or a bare radical; exactly one of the two, never both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Component {
    Kanji { glyph: String },
    Radical { glyph: String },
}

impl Component {
    pub fn glyph(&self) -> &str {
        match self {
            Component::Kanji { glyph } | Component::Radical { glyph } => glyph,
        }
    }

    pub fn is_kanji(&self) -> bool {
        matches!(self, Component::Kanji { .. })
    }
}

/// Native-reading pronunciation entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KunyomiEntry {
    pub word: String,
    pub prefix: String,
    pub suffix: String,
    pub pronunciation: String,
    pub definition: String,
    pub stars: u32,
}

/// Compound-word entry. `kanjis` is the ordered set of glyphs the word is
/// built from (kana, ASCII and punctuation excluded) and feeds the
/// dependency export used for deck ordering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JukugoEntry {
    pub word: String,
    pub prefix: String,
    pub suffix: String,
    pub kanjis: Vec<String>,
    pub pronunciation: String,
    pub definition: String,
    pub stars: u32,
}

/// Fully extracted record for one character page.
///
/// Built field-by-field by the record builder; after validation it is never
/// mutated again. `components` is the freeform component-description text of
/// the page (the structured [`Component`] list is a separate extractor
/// product and not part of the record).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRecord {
    pub index: u32,
    pub character: String,
    pub translation: String,
    pub stars: u32,
    pub components: String,
    pub onyomi: Maybe<String>,
    pub translation_mnemonic: String,
    pub onyomi_mnemonic: String,
    pub description: String,
    pub kunyomi: Vec<KunyomiEntry>,
    pub jukugo: Vec<JukugoEntry>,
}

impl PageRecord {
    /// Short identification used in audit messages and error reports.
    pub fn describe(&self) -> String {
        format!("#{} {} ({})", self.index, self.character, self.translation)
    }
}
