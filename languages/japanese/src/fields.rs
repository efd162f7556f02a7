//! Scalar field extractors. Each one is a small function from a document to
//! `Maybe<T>` (or a plain `T` where a sensible empty default exists); none of
//! them retries or touches anything outside the document it is given.

use kama_core::{DocumentQuery, Maybe};
use kama_types::Component;

use crate::preprocess::clean;
use crate::selectors;

/// Globally unique page index from the `Number <digits>` marker in the
/// navigation header. Absent when the header or the marker is missing.
pub fn index<Q: DocumentQuery>(doc: Q) -> Maybe<u32> {
    doc.find(selectors::NAVIGATION_HEADER)
        .map(|node| clean(&doc.text(node)))
        .and_then(|text| parse_number_marker(&text))
}

fn parse_number_marker(text: &str) -> Maybe<u32> {
    let Some(at) = text.find("Number") else {
        return Maybe::absent();
    };
    let digits: String = text[at + "Number".len()..]
        .trim_start()
        .chars()
        .take_while(char::is_ascii_digit)
        .collect();
    Maybe::from_option(digits.parse().ok())
}

/// The headword glyph from the title region.
pub fn character<Q: DocumentQuery>(doc: Q) -> Maybe<String> {
    doc.find(selectors::TITLE_CHARACTER)
        .and_then(|node| Maybe::from_text(clean(&doc.text(node))))
}

/// The translation is the title's direct text, which excludes the headword
/// span.
pub fn translation<Q: DocumentQuery>(doc: Q) -> Maybe<String> {
    doc.find(selectors::TITLE)
        .and_then(|node| Maybe::from_text(clean(&doc.own_text(node))))
}

/// Usefulness rating: the number of stars in the rating region. Absent when
/// the region itself is missing; a starless region is a rating of zero.
pub fn stars<Q: DocumentQuery>(doc: Q) -> Maybe<u32> {
    doc.find(selectors::RATING_REGION)
        .map(|node| count_stars(&doc.text(node)))
}

pub(crate) fn count_stars(text: &str) -> u32 {
    text.chars().filter(|c| *c == selectors::STAR).count() as u32
}

/// Freeform component-description text. The region repeats the page title as
/// a visual artifact; it is removed by verbatim prefix stripping (the prefix
/// is produced verbatim by the site, so no pattern matching is involved).
pub fn components_text<Q: DocumentQuery>(doc: Q, character: &str, translation: &str) -> String {
    let raw = doc
        .find(selectors::COMPONENTS_REGION)
        .map(|node| clean(&doc.text(node)))
        .get_or_with(String::new);

    let title = format!("{character} ({translation})");
    let rest = raw.strip_prefix(&title).unwrap_or(&raw).trim_start();
    rest.strip_prefix('=').unwrap_or(rest).trim().to_string()
}

/// Structured component list: anchors in the breakdown region. A link into
/// the kanji pages is a kanji component; any other glyph link is a radical.
pub fn component_glyphs<Q: DocumentQuery>(doc: Q) -> Vec<Component> {
    let Maybe::Present(region) = doc.find(selectors::COMPONENTS_REGION) else {
        return Vec::new();
    };
    doc.search_in(region, selectors::ANCHORS)
        .into_iter()
        .filter_map(|anchor| {
            let glyph = clean(&doc.text(anchor));
            if glyph.is_empty() {
                return None;
            }
            let is_kanji = doc
                .attr(anchor, "href")
                .map(|href| href.contains(selectors::KANJI_HREF))
                .get_or(false);
            Some(if is_kanji {
                Component::Kanji { glyph }
            } else {
                Component::Radical { glyph }
            })
        })
        .collect()
}

/// Generic description region text, empty when the region is missing.
pub fn description<Q: DocumentQuery>(doc: Q) -> String {
    doc.find(selectors::DESCRIPTION_REGION)
        .map(|node| clean(&doc.text(node)))
        .get_or_with(String::new)
}

/// Locate the table belonging to a heading label: the first heading (in
/// document order) whose text equals `label`, then exactly two raw sibling
/// steps forward. Absent unless that lands on a table element.
pub fn table_under_heading<Q: DocumentQuery>(doc: Q, label: &str) -> Maybe<Q::Node> {
    let heading = Maybe::from_option(
        doc.search(selectors::HEADINGS)
            .into_iter()
            .find(|h| clean(&doc.text(*h)) == label),
    );
    heading
        .and_then(|h| doc.next_sibling(h))
        .and_then(|n| doc.next_sibling(n))
        .and_then(|n| {
            match doc.node_name(n) {
                Maybe::Present(name) if name == "table" => Maybe::present(n),
                _ => Maybe::absent(),
            }
        })
}

/// Reading from the first cell of the Onyomi table.
pub fn onyomi<Q: DocumentQuery>(doc: Q) -> Maybe<String> {
    cell_text(doc, selectors::ONYOMI_HEADING, 0)
}

/// Mnemonic for the translation: second column of the mnemonic table,
/// falling back through alternate headings and finally to the description
/// region. Fallbacks are evaluated lazily; the first present value wins.
pub fn translation_mnemonic<Q: DocumentQuery>(doc: Q) -> String {
    mnemonic(doc, selectors::MNEMONIC_HEADINGS)
}

/// Mnemonic for the onyomi reading, same fallback scheme.
pub fn onyomi_mnemonic<Q: DocumentQuery>(doc: Q) -> String {
    mnemonic(doc, selectors::ONYOMI_MNEMONIC_HEADINGS)
}

fn mnemonic<Q: DocumentQuery>(doc: Q, headings: &[&str]) -> String {
    headings
        .iter()
        .fold(Maybe::absent(), |found, label| {
            found.or_else(|| cell_text(doc, label, 1))
        })
        .get_or_with(|| description(doc))
}

/// Text of column `column` in the first row of the table under `label`.
fn cell_text<Q: DocumentQuery>(doc: Q, label: &str, column: usize) -> Maybe<String> {
    table_under_heading(doc, label)
        .and_then(|table| doc.find_in(table, selectors::ROWS))
        .and_then(|row| {
            Maybe::from_option(doc.search_in(row, selectors::CELLS).into_iter().nth(column))
        })
        .and_then(|cell| Maybe::from_text(clean(&doc.text(cell))))
}
