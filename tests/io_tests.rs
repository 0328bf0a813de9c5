use std::fs;
use std::path::PathBuf;

use jsonext::{read_document, read_value_or, write_document, write_document_str, JsonextError};
use serde_json::{json, Map, Value};

fn scratch_file(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("jsonext-{}-{}.json", std::process::id(), name))
}

fn as_map(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("expected an object, got {other}"),
    }
}

#[test]
fn test_write_then_read_round_trip() {
    let path = scratch_file("round-trip");
    let doc = as_map(json!({"b": 2, "a": {"x": true}}));

    write_document(&path, &doc).expect("Failed to write document");
    let reread = read_document(&path).expect("Failed to read document");
    fs::remove_file(&path).ok();

    assert_eq!(reread, doc);
}

#[test]
fn test_written_bytes_are_canonical() {
    let path = scratch_file("canonical-bytes");
    let doc = as_map(json!({"k": "v"}));

    write_document(&path, &doc).expect("Failed to write document");
    let bytes = fs::read_to_string(&path).expect("Failed to read back file");
    fs::remove_file(&path).ok();

    assert_eq!(bytes, "{\n  \"k\" :  \"v\"\n}");
}

#[test]
fn test_write_document_str_accepts_escaped_payload() {
    let path = scratch_file("escaped-payload");

    write_document_str(&path, r#"{\"k\":1}"#).expect("Failed to write document");
    let reread = read_document(&path).expect("Failed to read document");
    fs::remove_file(&path).ok();

    assert_eq!(Value::Object(reread), json!({"k": 1}));
}

#[test]
fn test_read_document_missing_file() {
    let err = read_document(scratch_file("does-not-exist")).unwrap_err();
    assert!(matches!(err, JsonextError::Io(_)));
}

#[test]
fn test_read_document_malformed_file() {
    let path = scratch_file("malformed");
    fs::write(&path, "not json").expect("Failed to seed file");

    let err = read_document(&path).unwrap_err();
    fs::remove_file(&path).ok();

    assert!(matches!(err, JsonextError::Decode(_)));
}

#[test]
fn test_read_value_or_scans_document_stream() {
    let path = scratch_file("stream");
    fs::write(&path, "{\"other\": 1}\n{\"wanted\": {\"key\": \"hit\"}}\n")
        .expect("Failed to seed file");

    let found = read_value_or(&path, "wanted/key", "fallback");
    let missing = read_value_or(&path, "wanted/absent", "fallback");
    fs::remove_file(&path).ok();

    assert_eq!(found, "hit");
    assert_eq!(missing, "fallback");
}

#[test]
fn test_read_value_or_missing_file_yields_default() {
    let value = read_value_or(scratch_file("no-such-stream"), "a/b", "fallback");
    assert_eq!(value, "fallback");
}
