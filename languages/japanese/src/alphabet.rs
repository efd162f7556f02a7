/// Code points that do not count as glyph dependencies of a compound word:
/// phonetic script, ASCII, and punctuation. Owned by the jukugo extractor's
/// caller rather than living as process-wide state, so tests and alternate
/// site dialects can swap it.
#[derive(Debug, Clone)]
pub struct GlyphAlphabet {
    excluded: Vec<(u32, u32)>,
}

impl GlyphAlphabet {
    pub fn new(excluded: Vec<(u32, u32)>) -> Self {
        Self { excluded }
    }

    pub fn is_excluded(&self, c: char) -> bool {
        let cp = c as u32;
        self.excluded.iter().any(|&(lo, hi)| (lo..=hi).contains(&cp))
    }

    /// Ordered, deduplicated glyphs of `word` outside the excluded alphabet.
    /// This is the dependency list deck ordering is built on.
    pub fn dependencies(&self, word: &str) -> Vec<String> {
        let mut seen = Vec::new();
        for c in word.chars() {
            if self.is_excluded(c) {
                continue;
            }
            let glyph = c.to_string();
            if !seen.contains(&glyph) {
                seen.push(glyph);
            }
        }
        seen
    }
}

impl Default for GlyphAlphabet {
    fn default() -> Self {
        Self::new(vec![
            // ASCII, including digits and punctuation.
            (0x0000, 0x007F),
            // General punctuation (dashes, ellipsis, quotes).
            (0x2000, 0x206F),
            // CJK symbols and punctuation: 、。〜 and friends.
            (0x3000, 0x303F),
            // Hiragana.
            (0x3040, 0x309F),
            // Katakana, middle dot and prolonged sound mark included.
            (0x30A0, 0x30FF),
            // Katakana phonetic extensions.
            (0x31F0, 0x31FF),
            // Halfwidth and fullwidth forms.
            (0xFF00, 0xFFEF),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kana_ascii_and_punctuation_are_excluded() {
        let alphabet = GlyphAlphabet::default();
        for c in ['あ', 'ッ', 'ー', '、', '~', 'a', '7', '（', '・'] {
            assert!(alphabet.is_excluded(c), "{c} should be excluded");
        }
        for c in ['水', '日', '本', '氵'] {
            assert!(!alphabet.is_excluded(c), "{c} should count as a glyph");
        }
    }

    #[test]
    fn dependencies_are_ordered_and_deduplicated() {
        let alphabet = GlyphAlphabet::default();
        assert_eq!(alphabet.dependencies("日本"), vec!["日", "本"]);
        assert_eq!(alphabet.dependencies("お茶"), vec!["茶"]);
        assert_eq!(alphabet.dependencies("人人"), vec!["人"]);
        assert!(alphabet.dependencies("アイス").is_empty());
    }
}
