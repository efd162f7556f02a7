//! Row extractors for the Kunyomi and Jukugo tables.
//!
//! A row's first cell mixes decoration spans (grammar particles around the
//! word), a reading, and the usefulness stars. Decomposition carves these
//! apart; rows with no first-column content are dropped, which is normal for
//! the spacer rows the site emits.

use kama_core::{DocumentQuery, Maybe};
use kama_types::{JukugoEntry, KunyomiEntry};

use crate::alphabet::GlyphAlphabet;
use crate::fields::{count_stars, table_under_heading};
use crate::preprocess::{clean, clean_tight};
use crate::selectors;

/// All pronunciation entries from the Kunyomi table. The already-extracted
/// headword is needed to reconstruct each entry's word from its okurigana.
pub fn kunyomi_entries<Q: DocumentQuery>(doc: Q, character: &str) -> Vec<KunyomiEntry> {
    rows_under(doc, selectors::KUNYOMI_HEADING)
        .into_iter()
        .filter_map(|row| kunyomi_row(doc, row, character))
        .collect()
}

/// All compound entries from the Jukugo table, with each word's glyph
/// dependency list resolved against `alphabet`.
pub fn jukugo_entries<Q: DocumentQuery>(doc: Q, alphabet: &GlyphAlphabet) -> Vec<JukugoEntry> {
    rows_under(doc, selectors::JUKUGO_HEADING)
        .into_iter()
        .filter_map(|row| jukugo_row(doc, row, alphabet))
        .collect()
}

fn rows_under<Q: DocumentQuery>(doc: Q, label: &str) -> Vec<Q::Node> {
    match table_under_heading(doc, label) {
        Maybe::Present(table) => doc.search_in(table, selectors::ROWS),
        Maybe::Absent => Vec::new(),
    }
}

fn kunyomi_row<Q: DocumentQuery>(doc: Q, row: Q::Node, character: &str) -> Option<KunyomiEntry> {
    let cells = doc.search_in(row, selectors::CELLS);
    let first = *cells.first()?;

    let (prefix, suffix) = decorations(doc, first);
    let token = doc
        .find_in(first, selectors::READING_SPAN)
        .and_then(|span| Maybe::from_text(clean(&doc.text(span))))
        .or_else(|| Maybe::from_text(core_text(doc, first)))
        .into_option()?;

    let (pronunciation, okurigana) = carve_reading(&token);

    Some(KunyomiEntry {
        word: format!("{character}{okurigana}"),
        prefix,
        suffix,
        pronunciation,
        definition: definition(doc, &cells),
        stars: count_stars(&doc.text(row)),
    })
}

fn jukugo_row<Q: DocumentQuery>(doc: Q, row: Q::Node, alphabet: &GlyphAlphabet) -> Option<JukugoEntry> {
    let cells = doc.search_in(row, selectors::CELLS);
    let first = *cells.first()?;

    let (prefix, suffix) = decorations(doc, first);
    let core = Maybe::from_text(core_text(doc, first)).into_option()?;
    let (word, pronunciation) = split_compound(&core);
    if word.is_empty() {
        return None;
    }

    Some(JukugoEntry {
        kanjis: alphabet.dependencies(&word),
        word,
        prefix,
        suffix,
        pronunciation,
        definition: definition(doc, &cells),
        stars: count_stars(&doc.text(row)),
    })
}

/// Prefix/suffix decoration texts: a particle span at the very start or the
/// very end of the first cell, whitespace stripped.
fn decorations<Q: DocumentQuery>(doc: Q, cell: Q::Node) -> (String, String) {
    let spans = doc.search_in(cell, selectors::SPANS);

    let prefix = match spans.first() {
        Some(&span) if is_particle(doc, span) => clean_tight(&doc.text(span)),
        _ => String::new(),
    };
    let suffix = match spans.last() {
        Some(&span) if spans.len() > 1 && is_particle(doc, span) => clean_tight(&doc.text(span)),
        _ => String::new(),
    };
    (prefix, suffix)
}

fn is_particle<Q: DocumentQuery>(doc: Q, span: Q::Node) -> bool {
    doc.attr(span, "class")
        .map(|classes| {
            classes
                .split_whitespace()
                .any(|c| c == selectors::PARTICLE_CLASS)
        })
        .get_or(false)
}

/// First-cell text without the decoration spans: the cell's direct text,
/// stars removed.
fn core_text<Q: DocumentQuery>(doc: Q, cell: Q::Node) -> String {
    let own = clean(&doc.own_text(cell));
    own.chars().filter(|c| *c != selectors::STAR).collect::<String>().trim().to_string()
}

fn definition<Q: DocumentQuery>(doc: Q, cells: &[Q::Node]) -> String {
    cells
        .get(1)
        .map(|cell| {
            clean(&doc.text(*cell))
                .chars()
                .filter(|c| *c != selectors::STAR)
                .collect::<String>()
                .trim()
                .to_string()
        })
        .unwrap_or_default()
}

/// Split a reading token into the pronunciation and the okurigana suffix
/// carved off at the asterisk marker. `み*る` reads みる and carries the
/// suffix る; a token without a marker carries none.
fn carve_reading(token: &str) -> (String, String) {
    let is_marker = |c: char| c == '*' || c == '＊';
    let pronunciation: String = token.chars().filter(|c| !is_marker(*c)).collect();
    let okurigana = match token.find(is_marker) {
        Some(at) => token[at..]
            .chars()
            .filter(|c| !is_marker(*c) && !c.is_whitespace())
            .collect(),
        None => String::new(),
    };
    (clean_tight(&pronunciation), okurigana)
}

/// Split compound-cell text `word(reading)` into its parts. Parentheses are
/// already folded to ASCII by normalization; a cell without a reading is the
/// word alone.
fn split_compound(core: &str) -> (String, String) {
    match core.find('(') {
        Some(open) => {
            let word = clean_tight(&core[..open]);
            let rest = &core[open + 1..];
            let reading = match rest.find(')') {
                Some(close) => &rest[..close],
                None => rest,
            };
            (word, clean_tight(reading))
        }
        None => (clean_tight(core), String::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn carve_reading_splits_okurigana() {
        assert_eq!(carve_reading("みず"), ("みず".to_string(), String::new()));
        assert_eq!(carve_reading("み*る"), ("みる".to_string(), "る".to_string()));
        assert_eq!(carve_reading("たの*しい"), ("たのしい".to_string(), "しい".to_string()));
        // Fullwidth markers behave like ASCII ones.
        assert_eq!(carve_reading("み＊る"), ("みる".to_string(), "る".to_string()));
    }

    #[test]
    fn split_compound_handles_reading_and_bare_word() {
        assert_eq!(
            split_compound("日本(にほん)"),
            ("日本".to_string(), "にほん".to_string())
        );
        assert_eq!(split_compound("水中"), ("水中".to_string(), String::new()));
        assert_eq!(
            split_compound("水 (みず"),
            ("水".to_string(), "みず".to_string())
        );
    }
}
