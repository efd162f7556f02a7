//! Glyph dependency edge list. Downstream deck ordering wants to know, for
//! every accepted character, which glyphs must be introduced first: its
//! components, and the glyphs its compounds are built from.

use std::io::{self, Write};

use kama_config::export::ExportConfig;
use kama_types::{Component, PageRecord};

use crate::csv::write_row;

pub const HEADERS: &[&str] = &["owner", "glyph", "source"];

/// Edges for one record: `character → component glyph` rows, then
/// `compound word → compound glyph` rows. Duplicate edges per owner are
/// collapsed; a compound's dependency on the page's own character is kept
/// (the deck builder resolves self-edges).
pub fn dependency_rows(record: &PageRecord, components: &[Component]) -> Vec<Vec<String>> {
    let mut rows = Vec::new();

    for component in components {
        let source = if component.is_kanji() { "kanji" } else { "radical" };
        push_unique(&mut rows, &record.character, component.glyph(), source);
    }
    for entry in &record.jukugo {
        for glyph in &entry.kanjis {
            push_unique(&mut rows, &entry.word, glyph, "jukugo");
        }
    }
    rows
}

fn push_unique(rows: &mut Vec<Vec<String>>, owner: &str, glyph: &str, source: &str) {
    if rows.iter().any(|r| r[0] == owner && r[1] == glyph) {
        return;
    }
    rows.push(vec![owner.to_string(), glyph.to_string(), source.to_string()]);
}

pub fn export_dependencies<W: Write>(
    mut w: W,
    rows: &[Vec<String>],
    config: &ExportConfig,
) -> io::Result<()> {
    if config.include_headers {
        let headers: Vec<String> = HEADERS.iter().map(|h| h.to_string()).collect();
        write_row(&mut w, &headers, config.separator)?;
    }
    for row in rows {
        write_row(&mut w, row, config.separator)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use kama_types::JukugoEntry;

    use super::*;

    #[test]
    fn edges_cover_components_and_compound_glyphs() {
        let record = PageRecord {
            index: 42,
            character: "水".to_string(),
            jukugo: vec![JukugoEntry {
                word: "日本".to_string(),
                kanjis: vec!["日".to_string(), "本".to_string()],
                ..JukugoEntry::default()
            }],
            ..PageRecord::default()
        };
        let components = vec![
            Component::Kanji {
                glyph: "氵".to_string(),
            },
            Component::Radical {
                glyph: "丶".to_string(),
            },
            // Site artifact: the same glyph linked twice.
            Component::Kanji {
                glyph: "氵".to_string(),
            },
        ];

        let rows = dependency_rows(&record, &components);
        assert_eq!(
            rows,
            vec![
                vec!["水".to_string(), "氵".to_string(), "kanji".to_string()],
                vec!["水".to_string(), "丶".to_string(), "radical".to_string()],
                vec!["日本".to_string(), "日".to_string(), "jukugo".to_string()],
                vec!["日本".to_string(), "本".to_string(), "jukugo".to_string()],
            ]
        );
    }
}
