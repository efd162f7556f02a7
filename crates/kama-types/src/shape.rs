use kama_core::Error;
use serde_json::Value;

use crate::record::PageRecord;

/// Declared shape of a record field, checked recursively against the
/// serialized form of a record.
///
/// In-process the type system already carries these shapes; the runtime check
/// guards the two places where typing cannot: the construction boundary
/// (an extractor storing the wrong thing is a defect that must surface
/// immediately) and the JSON record store read path.
#[derive(Debug, Clone)]
pub enum Shape {
    Int,
    Str,
    Maybe(Box<Shape>),
    Seq(Box<Shape>),
    Record(Vec<(&'static str, Shape)>),
}

/// Compare `value` against `shape`. Returns human-readable violations with
/// the offending field path; empty means valid.
pub fn validate(value: &Value, shape: &Shape) -> Vec<String> {
    let mut violations = Vec::new();
    check(value, shape, "record", &mut violations);
    violations
}

fn check(value: &Value, shape: &Shape, path: &str, out: &mut Vec<String>) {
    match shape {
        Shape::Int => {
            if !value.is_u64() {
                out.push(format!("{path}: expected integer, found {}", kind_of(value)));
            }
        }
        Shape::Str => {
            if !value.is_string() {
                out.push(format!("{path}: expected string, found {}", kind_of(value)));
            }
        }
        Shape::Maybe(inner) => check_maybe(value, inner, path, out),
        Shape::Seq(inner) => match value.as_array() {
            Some(items) => {
                for (i, item) in items.iter().enumerate() {
                    check(item, inner, &format!("{path}[{i}]"), out);
                }
            }
            None => out.push(format!("{path}: expected sequence, found {}", kind_of(value))),
        },
        Shape::Record(fields) => check_fields(value, fields, path, out),
    }
}

fn check_maybe(value: &Value, inner: &Shape, path: &str, out: &mut Vec<String>) {
    let Some(obj) = value.as_object() else {
        out.push(format!(
            "{path}: expected optional wrapper, found {}",
            kind_of(value)
        ));
        return;
    };
    match obj.get("kind").and_then(Value::as_str) {
        Some("none") => {
            if obj.contains_key("value") {
                out.push(format!("{path}: absent wrapper carries a value"));
            }
        }
        Some("some") => match obj.get("value") {
            Some(v) => check(v, inner, &format!("{path}.value"), out),
            None => out.push(format!("{path}: present wrapper is missing its value")),
        },
        _ => out.push(format!("{path}: optional wrapper kind must be some/none")),
    }
}

fn check_fields(value: &Value, fields: &[(&'static str, Shape)], path: &str, out: &mut Vec<String>) {
    let Some(obj) = value.as_object() else {
        out.push(format!("{path}: expected record, found {}", kind_of(value)));
        return;
    };
    for (name, shape) in fields {
        match obj.get(*name) {
            Some(v) => check(v, shape, &format!("{path}.{name}"), out),
            None => out.push(format!("{path}.{name}: missing field")),
        }
    }
    for key in obj.keys() {
        if !fields.iter().any(|(name, _)| *name == key.as_str()) {
            out.push(format!("{path}.{key}: unexpected field"));
        }
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "sequence",
        Value::Object(_) => "record",
    }
}

impl PageRecord {
    /// Canonical shape of an accepted record. The record builder and this
    /// declaration must stay in sync; the round-trip test below holds them
    /// together.
    pub fn shape() -> Shape {
        let kunyomi = Shape::Record(vec![
            ("word", Shape::Str),
            ("prefix", Shape::Str),
            ("suffix", Shape::Str),
            ("pronunciation", Shape::Str),
            ("definition", Shape::Str),
            ("stars", Shape::Int),
        ]);
        let jukugo = Shape::Record(vec![
            ("word", Shape::Str),
            ("prefix", Shape::Str),
            ("suffix", Shape::Str),
            ("kanjis", Shape::Seq(Box::new(Shape::Str))),
            ("pronunciation", Shape::Str),
            ("definition", Shape::Str),
            ("stars", Shape::Int),
        ]);
        Shape::Record(vec![
            ("index", Shape::Int),
            ("character", Shape::Str),
            ("translation", Shape::Str),
            ("stars", Shape::Int),
            ("components", Shape::Str),
            ("onyomi", Shape::Maybe(Box::new(Shape::Str))),
            ("translation_mnemonic", Shape::Str),
            ("onyomi_mnemonic", Shape::Str),
            ("description", Shape::Str),
            ("kunyomi", Shape::Seq(Box::new(kunyomi))),
            ("jukugo", Shape::Seq(Box::new(jukugo))),
        ])
    }
}

/// Defensive internal-consistency check on a freshly built record.
///
/// A violation here is a defect in an extractor, not bad input, so the error
/// is meant to abort the run.
pub fn check_record(record: &PageRecord) -> kama_core::Result<()> {
    let value = serde_json::to_value(record).map_err(|e| Error::Structural {
        page: record.describe(),
        violations: vec![format!("record does not serialize: {e}")],
    })?;
    let violations = validate(&value, &PageRecord::shape());
    if violations.is_empty() {
        Ok(())
    } else {
        Err(Error::Structural {
            page: record.describe(),
            violations,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{JukugoEntry, KunyomiEntry};
    use kama_core::Maybe;
    use serde_json::json;

    fn sample() -> PageRecord {
        PageRecord {
            index: 42,
            character: "水".to_string(),
            translation: "water".to_string(),
            stars: 3,
            components: "氵 (water radical)".to_string(),
            onyomi: Maybe::present("スイ".to_string()),
            translation_mnemonic: "a drop splashes".to_string(),
            onyomi_mnemonic: "SUIng in the rain".to_string(),
            description: String::new(),
            kunyomi: vec![KunyomiEntry {
                word: "水".to_string(),
                pronunciation: "みず".to_string(),
                definition: "water (noun)".to_string(),
                ..KunyomiEntry::default()
            }],
            jukugo: vec![JukugoEntry {
                word: "水中".to_string(),
                kanjis: vec!["水".to_string(), "中".to_string()],
                pronunciation: "すいちゅう".to_string(),
                definition: "underwater".to_string(),
                stars: 2,
                ..JukugoEntry::default()
            }],
        }
    }

    #[test]
    fn well_formed_record_has_no_violations() {
        assert!(check_record(&sample()).is_ok());
    }

    #[test]
    fn wrong_field_type_is_named_with_its_path() {
        let mut value = serde_json::to_value(sample()).unwrap();
        value["index"] = json!("42");
        let violations = validate(&value, &PageRecord::shape());
        assert_eq!(
            violations,
            vec!["record.index: expected integer, found string"]
        );
    }

    #[test]
    fn nested_sequence_elements_are_checked() {
        let mut value = serde_json::to_value(sample()).unwrap();
        value["jukugo"][0]["kanjis"][1] = json!(7);
        let violations = validate(&value, &PageRecord::shape());
        assert_eq!(
            violations,
            vec!["record.jukugo[0].kanjis[1]: expected string, found number"]
        );
    }

    #[test]
    fn optional_wrapper_is_shape_checked() {
        let mut value = serde_json::to_value(sample()).unwrap();
        value["onyomi"] = json!({"kind": "maybe"});
        let violations = validate(&value, &PageRecord::shape());
        assert_eq!(
            violations,
            vec!["record.onyomi: optional wrapper kind must be some/none"]
        );

        value["onyomi"] = json!({"kind": "none"});
        assert!(validate(&value, &PageRecord::shape()).is_empty());
    }

    #[test]
    fn missing_and_unexpected_fields_are_reported() {
        let mut value = serde_json::to_value(sample()).unwrap();
        let obj = value.as_object_mut().unwrap();
        obj.remove("description");
        obj.insert("legacy_components".to_string(), json!([]));
        let mut violations = validate(&value, &PageRecord::shape());
        violations.sort();
        assert_eq!(
            violations,
            vec![
                "record.description: missing field",
                "record.legacy_components: unexpected field",
            ]
        );
    }
}
