//! JSON record store: the re-export source. Reading is a trust boundary —
//! every stored value is checked against the declared record shape before it
//! is deserialized, so a stale or hand-edited store cannot smuggle a
//! malformed record back into the pipeline.

use std::path::Path;

use kama_core::{Error, Result};
use kama_types::{PageRecord, validate};

pub fn write_store(path: &Path, records: &[PageRecord]) -> Result<()> {
    let json = serde_json::to_string_pretty(records).map_err(|e| Error::StoreFormat {
        path: path.display().to_string(),
        source: e,
    })?;
    std::fs::write(path, json)?;
    tracing::info!(count = records.len(), path = %path.display(), "record store written");
    Ok(())
}

pub fn read_store(path: &Path) -> Result<Vec<PageRecord>> {
    let text = std::fs::read_to_string(path)?;
    let values: Vec<serde_json::Value> =
        serde_json::from_str(&text).map_err(|e| Error::StoreFormat {
            path: path.display().to_string(),
            source: e,
        })?;

    let shape = PageRecord::shape();
    let mut records = Vec::with_capacity(values.len());
    for (i, value) in values.into_iter().enumerate() {
        let violations = validate(&value, &shape);
        if !violations.is_empty() {
            return Err(Error::Structural {
                page: format!("{}[{i}]", path.display()),
                violations,
            });
        }
        let record = serde_json::from_value(value).map_err(|e| Error::StoreFormat {
            path: path.display().to_string(),
            source: e,
        })?;
        records.push(record);
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use kama_core::Maybe;

    use super::*;

    fn scratch_file(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("kama-store-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir.join(name)
    }

    fn sample() -> PageRecord {
        PageRecord {
            index: 42,
            character: "水".to_string(),
            translation: "water".to_string(),
            onyomi: Maybe::present("スイ".to_string()),
            ..PageRecord::default()
        }
    }

    #[test]
    fn round_trip_preserves_records() {
        let path = scratch_file("round-trip.json");
        write_store(&path, &[sample()]).unwrap();
        let back = read_store(&path).unwrap();
        assert_eq!(back, vec![sample()]);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn tampered_store_is_rejected_with_the_field_named() {
        let path = scratch_file("tampered.json");
        let mut value = serde_json::to_value(vec![sample()]).unwrap();
        value[0]["stars"] = serde_json::json!("many");
        std::fs::write(&path, serde_json::to_string(&value).unwrap()).unwrap();

        let err = read_store(&path).unwrap_err();
        match err {
            Error::Structural { violations, .. } => {
                assert_eq!(violations, vec!["record.stars: expected integer, found string"]);
            }
            other => panic!("expected a structural error, got {other}"),
        }
        let _ = std::fs::remove_file(&path);
    }
}
