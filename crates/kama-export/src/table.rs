//! Records table export: one row per accepted record, entry sequences
//! flattened to compact cell text.

use std::io::{self, Write};

use kama_config::export::ExportConfig;
use kama_core::Maybe;
use kama_types::{JukugoEntry, KunyomiEntry, PageRecord};

use crate::csv::write_row;

pub const HEADERS: &[&str] = &[
    "index",
    "character",
    "translation",
    "stars",
    "components",
    "onyomi",
    "translation mnemonic",
    "onyomi mnemonic",
    "description",
    "kunyomi",
    "jukugo",
];

/// Reimpose the output ordering: a stable sort on the extracted index, so
/// records tied on index keep their discovery order. The concurrent phase
/// itself guarantees nothing.
pub fn sort_records(records: &mut [PageRecord]) {
    records.sort_by_key(|r| r.index);
}

pub fn export_records<W: Write>(
    mut w: W,
    records: &[PageRecord],
    config: &ExportConfig,
) -> io::Result<()> {
    if config.include_headers {
        let headers: Vec<String> = HEADERS.iter().map(|h| h.to_string()).collect();
        write_row(&mut w, &headers, config.separator)?;
    }
    for record in records {
        write_row(&mut w, &record_row(record), config.separator)?;
    }
    Ok(())
}

pub fn record_row(record: &PageRecord) -> Vec<String> {
    vec![
        record.index.to_string(),
        record.character.clone(),
        record.translation.clone(),
        record.stars.to_string(),
        record.components.clone(),
        match &record.onyomi {
            Maybe::Present(reading) => reading.clone(),
            Maybe::Absent => String::new(),
        },
        record.translation_mnemonic.clone(),
        record.onyomi_mnemonic.clone(),
        record.description.clone(),
        join_kunyomi(&record.kunyomi),
        join_jukugo(&record.jukugo),
    ]
}

fn join_kunyomi(entries: &[KunyomiEntry]) -> String {
    entries
        .iter()
        .map(|e| {
            entry_text(
                &e.prefix,
                &e.word,
                &e.suffix,
                &e.pronunciation,
                &e.definition,
                e.stars,
            )
        })
        .collect::<Vec<_>>()
        .join("; ")
}

fn join_jukugo(entries: &[JukugoEntry]) -> String {
    entries
        .iter()
        .map(|e| {
            entry_text(
                &e.prefix,
                &e.word,
                &e.suffix,
                &e.pronunciation,
                &e.definition,
                e.stars,
            )
        })
        .collect::<Vec<_>>()
        .join("; ")
}

fn entry_text(
    prefix: &str,
    word: &str,
    suffix: &str,
    pronunciation: &str,
    definition: &str,
    stars: u32,
) -> String {
    let mut text = format!("{prefix}{word}{suffix}");
    if !pronunciation.is_empty() {
        text.push_str(&format!(" ({pronunciation})"));
    }
    if !definition.is_empty() {
        text.push_str(&format!(": {definition}"));
    }
    if stars > 0 {
        text.push(' ');
        text.extend(std::iter::repeat_n('★', stars as usize));
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(index: u32, character: &str) -> PageRecord {
        PageRecord {
            index,
            character: character.to_string(),
            translation: "x".to_string(),
            ..PageRecord::default()
        }
    }

    #[test]
    fn sort_is_stable_on_index_ties() {
        let mut records = vec![record(7, "c"), record(3, "a"), record(7, "b")];
        sort_records(&mut records);
        let order: Vec<&str> = records.iter().map(|r| r.character.as_str()).collect();
        assert_eq!(order, vec!["a", "c", "b"]);
    }

    #[test]
    fn entries_flatten_to_compact_cells() {
        let mut r = record(1, "水");
        r.kunyomi.push(KunyomiEntry {
            word: "水".to_string(),
            suffix: "を".to_string(),
            pronunciation: "みず".to_string(),
            definition: "water".to_string(),
            stars: 2,
            ..KunyomiEntry::default()
        });
        let row = record_row(&r);
        assert_eq!(row[9], "水を (みず): water ★★");
        assert_eq!(row[10], "");
    }

    #[test]
    fn export_honors_header_and_separator_settings() {
        let config = ExportConfig {
            separator: '\t',
            include_headers: false,
            ..ExportConfig::new()
        };
        let mut buf = Vec::new();
        export_records(&mut buf, &[record(5, "火")], &config).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with("5\t火\tx\t0\t"));
        assert_eq!(text.lines().count(), 1);
    }
}
