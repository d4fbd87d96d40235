//! JSON dumper tests.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::{Dump, DumpError, DumpOptions, JsonDumper, JsonStyle};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
struct Pattern {
    name: String,
    rows: Vec<Vec<String>>,
}

fn scarf() -> Pattern {
    Pattern {
        name: "scarf".to_string(),
        rows: vec![
            vec!["knit".into(), "purl".into()],
            vec!["purl".into(), "knit".into()],
        ],
    }
}

#[test]
fn json_string_matches_spaced_layout() {
    let dumper = JsonDumper::new(|| Ok(json!({"a": 1, "b": [1, 2, 3]})));
    let text = dumper.string().unwrap();
    assert_eq!(text, r#"{"a": 1, "b": [1, 2, 3]}"#);

    let decoded: Value = serde_json::from_str(&text).unwrap();
    assert_eq!(decoded, json!({"a": 1, "b": [1, 2, 3]}));
}

#[test]
fn json_styles() {
    let value = json!({"a": 1, "b": [1, 2], "c": {}});

    let compact = JsonDumper::from_value(value.clone()).with_style(JsonStyle::Compact);
    assert_eq!(compact.style(), JsonStyle::Compact);
    assert_eq!(compact.string().unwrap(), r#"{"a":1,"b":[1,2],"c":{}}"#);

    let pretty = JsonDumper::from_value(value.clone()).pretty();
    assert_eq!(
        pretty.string().unwrap(),
        "{\n  \"a\": 1,\n  \"b\": [\n    1,\n    2\n  ],\n  \"c\": {}\n}"
    );

    let spaced = JsonDumper::from_value(value);
    assert_eq!(spaced.style(), JsonStyle::Spaced);
    assert_eq!(spaced.string().unwrap(), r#"{"a": 1, "b": [1, 2], "c": {}}"#);
}

#[test]
fn object_returns_the_raw_value() {
    let dumper = JsonDumper::new(|| Ok(scarf()));
    assert_eq!(dumper.object().unwrap(), scarf());
}

#[test]
fn struct_round_trips_through_every_destination() {
    let dumper = JsonDumper::new(|| Ok(scarf()));

    let from_string: Pattern = serde_json::from_str(&dumper.string().unwrap()).unwrap();
    assert_eq!(from_string, scarf());

    let buffer = dumper.file().unwrap().into_inner();
    assert_eq!(buffer, dumper.bytes().unwrap());

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scarf.json");
    dumper.path(&path).unwrap();
    let from_file: Pattern =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(from_file, scarf());

    let mut tmp = dumper.temporary_file(true).unwrap();
    let from_tmp: Pattern = serde_json::from_str(&tmp.contents_string().unwrap()).unwrap();
    assert_eq!(from_tmp, scarf());
}

#[test]
fn provider_called_once_per_materialization() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = calls.clone();
    let dumper = JsonDumper::new(move || Ok(counter.fetch_add(1, Ordering::SeqCst)));

    assert_eq!(dumper.string().unwrap(), "0");
    assert_eq!(dumper.string().unwrap(), "1");
    assert_eq!(dumper.object().unwrap(), 2);
    let path = dumper.temporary_path().unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "3");
    std::fs::remove_file(path).unwrap();
    assert_eq!(calls.load(Ordering::SeqCst), 4);
}

#[test]
fn provider_failure_propagates() {
    let dumper: JsonDumper<Value> = JsonDumper::new(|| Err(DumpError::provider("no pattern")));
    let err = dumper.string().unwrap_err();
    assert!(matches!(err, DumpError::Provider(_)));
    assert_eq!(err.to_string(), "no pattern");
    assert!(dumper.object().is_err());
}

#[test]
fn unserializable_object_is_a_json_error() {
    use std::collections::BTreeMap;

    // maps with non-string keys cannot be JSON objects
    let mut map = BTreeMap::new();
    map.insert(vec![1u8], "row");
    let dumper = JsonDumper::from_value(map);

    assert!(matches!(dumper.string(), Err(DumpError::Json(_))));
}

#[test]
fn options_survive_style_changes() {
    let dir = tempfile::tempdir().unwrap();
    let dumper = JsonDumper::from_value(json!([1, 2]))
        .with_options(
            DumpOptions::new()
                .with_temp_dir(dir.path())
                .with_temp_suffix(".json"),
        )
        .with_style(JsonStyle::Compact);

    let path = dumper.temporary_path().unwrap();
    assert_eq!(path.parent(), Some(dir.path()));
    assert!(path.to_string_lossy().ends_with(".json"));
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "[1,2]");
}

#[test]
fn json_dumper_composes_a_content_dumper() {
    let dumper = JsonDumper::from_value(json!({"k": "v"}));
    let plain = dumper.as_content_dumper().clone();
    assert_eq!(plain.string().unwrap(), dumper.string().unwrap());
}
