use jsonext::{canonicalize_number, format_document, format_value, JsonextError};
use serde_json::{json, Map, Value};
use yare::parameterized;

fn as_map(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("expected an object, got {other}"),
    }
}

#[parameterized(
    whole = { 3.0, "3" },
    fractional = { 3.5, "3.500000" },
    negative_whole = { -2.0, "-2" },
    zero = { 0.0, "0" },
    negative_fraction = { -0.25, "-0.250000" },
    within_epsilon = { 3.000000001, "3" },
    outside_epsilon = { 3.0000001, "3.000000" },
)]
fn test_canonicalize_number(input: f64, expected: &str) {
    assert_eq!(canonicalize_number(input), expected);
}

// Truncation toward zero means a value just below an integer keeps its
// fixed-point rendering even though rounding would collapse it.
#[parameterized(
    just_below_positive = { 2.9999999999, "3.000000" },
    just_above_negative = { -1.9999999999, "-2.000000" },
)]
fn test_canonicalize_number_truncation_quirk(input: f64, expected: &str) {
    assert_eq!(canonicalize_number(input), expected);
}

#[test]
fn test_format_empty_document() {
    let text = format_document(&Map::new()).expect("Failed to format document");
    assert_eq!(text, "{\n}");
}

#[test]
fn test_format_flat_document() {
    let doc = as_map(json!({"b": 2, "a": "x", "c": true}));
    let text = format_document(&doc).expect("Failed to format document");
    assert_eq!(text, "{\n  \"a\" :  \"x\",\n  \"b\" :  2,\n  \"c\" : true\n}");
}

#[test]
fn test_format_nested_document() {
    let doc = as_map(json!({"outer": {"inner": 1.5}}));
    let text = format_document(&doc).expect("Failed to format document");
    assert_eq!(
        text,
        "{\n  \"outer\" : {\n    \"inner\" :  1.500000\n  }\n}"
    );
}

#[test]
fn test_format_array_member_inline() {
    let doc = as_map(json!({"a": [1, "x", false]}));
    let text = format_document(&doc).expect("Failed to format document");
    assert_eq!(text, "{\n  \"a\" : [ 1, \"x\",false]\n}");
}

#[test]
fn test_format_escapes_strings_and_keys() {
    let doc = as_map(json!({"ke\"y": "line\nbreak"}));
    let text = format_document(&doc).expect("Failed to format document");
    assert_eq!(text, "{\n  \"ke\\\"y\" :  \"line\\nbreak\"\n}");
}

// Key order in the source never leaks into the output.
#[test]
fn test_format_is_deterministic_across_insertion_orders() {
    let mut forward = Map::new();
    forward.insert("alpha".to_string(), json!(1));
    forward.insert("beta".to_string(), json!(2));

    let mut backward = Map::new();
    backward.insert("beta".to_string(), json!(2));
    backward.insert("alpha".to_string(), json!(1));

    let left = format_document(&forward).expect("Failed to format document");
    let right = format_document(&backward).expect("Failed to format document");
    assert_eq!(left, right);
}

#[parameterized(
    flat = { json!({"a": 1, "b": "x", "c": true}) },
    nested = { json!({"a": {"b": {"c": [1, 2, {"d": false}]}}}) },
    fractional = { json!({"pi": 3.5}) },
    empty_containers = { json!({"arr": [], "obj": {}}) },
)]
fn test_format_round_trips_through_decoder(doc: Value) {
    let text = format_document(&as_map(doc.clone())).expect("Failed to format document");
    let reparsed: Value = serde_json::from_str(&text).expect("Canonical output must be valid JSON");
    assert_eq!(reparsed, doc);
}

#[test]
fn test_format_rejects_null() {
    let doc = as_map(json!({"gone": null}));
    let err = format_document(&doc).unwrap_err();
    assert!(matches!(
        err,
        JsonextError::UnsupportedType { ref key, kind: "null" } if key == "gone"
    ));
}

#[test]
fn test_format_value_bare_array() {
    let arr = json!([1, 2.5]);
    let text = format_value(0, "", &arr).expect("Failed to format array");
    assert_eq!(text, "[ 1, 2.500000]");
}
