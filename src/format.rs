use serde_json::{Map, Value};

use crate::types::JsonextError;

/// Integral values closer to an integer than this render as plain integers.
const EPSILON: f64 = 1e-8;

/// Renders a float as either a plain integer literal or a fixed-point literal.
///
/// JSON numbers decode to floating point regardless of whether the source
/// literal was integral; this recovers an integer-looking rendering for
/// integral values while keeping six fractional digits otherwise. The value
/// is truncated toward zero (not rounded) before the epsilon comparison, so a
/// value just below an integer renders fixed-point: `2.9999999999` gives
/// `"3.000000"`, not `"3"`. Callers depend on this exact behaviour.
///
/// ## Example
///
/// ```rust
/// use jsonext::canonicalize_number;
///
/// assert_eq!(canonicalize_number(3.0), "3");
/// assert_eq!(canonicalize_number(3.5), "3.500000");
/// assert_eq!(canonicalize_number(-2.0), "-2");
/// ```
pub fn canonicalize_number(x: f64) -> String {
    let truncated = x.trunc();
    if (truncated - x).abs() < EPSILON {
        format!("{}", truncated as i64)
    } else {
        format!("{x:.6}")
    }
}

/// Renders a whole document in canonical form.
///
/// Canonical form is deterministic: object keys are sorted bytewise, nesting
/// is indented two spaces per level, and numbers are canonicalized via
/// [`canonicalize_number`]. The output is valid JSON and reparses to a tree
/// equal to the input for any document free of null values.
///
/// ## Example
///
/// ```rust
/// let doc = jsonext::parse_lenient(r#"{"b": 2, "a": {"x": true}}"#).unwrap();
/// let text = jsonext::format_document(&doc).unwrap();
/// assert_eq!(text, "{\n  \"a\" : {\n    \"x\" : true\n  },\n  \"b\" :  2\n}");
/// ```
pub fn format_document(root: &Map<String, Value>) -> Result<String, JsonextError> {
    format_object(0, "", root)
}

/// Renders an object as a block: one member per line, keys sorted, closing
/// brace at the parent indentation. A non-empty `key` emits a `"key" : `
/// prefix at `level` indentation.
pub fn format_object(
    level: usize,
    key: &str,
    map: &Map<String, Value>,
) -> Result<String, JsonextError> {
    format_members(level, level, key, map)
}

// Objects reached through format_value (array elements and bare sub-values)
// place their members one level deeper than block objects do.
fn format_map(level: usize, key: &str, map: &Map<String, Value>) -> Result<String, JsonextError> {
    format_members(level, level + 1, key, map)
}

fn format_members(
    level: usize,
    member_level: usize,
    key: &str,
    map: &Map<String, Value>,
) -> Result<String, JsonextError> {
    let mut out = String::new();
    if !key.is_empty() {
        out.push_str(&key_prefix(level, key));
    }
    out.push('{');

    let mut members: Vec<(&String, &Value)> = map.iter().collect();
    members.sort_by(|(left, _), (right, _)| left.cmp(right));

    for (i, (member_key, member)) in members.into_iter().enumerate() {
        out.push_str(if i == 0 { "\n" } else { ",\n" });
        out.push_str(&format_entry(member_level, member_key, member)?);
    }

    out.push('\n');
    out.push_str(&indent(level));
    out.push('}');
    Ok(out)
}

// One object member line: object values recurse as blocks, everything else
// gets a key prefix followed by its inline rendering.
fn format_entry(level: usize, key: &str, value: &Value) -> Result<String, JsonextError> {
    match value {
        Value::Object(map) => format_object(level + 1, key, map),
        _ => {
            let mut out = key_prefix(level + 1, key);
            out.push_str(&format_value(level, key, value)?);
            Ok(out)
        }
    }
}

/// Renders a single value at the given indentation level.
///
/// Scalars render inline; arrays render as `[v0,v1,...]` with elements
/// formatted one level deeper and no key labels; objects render in their
/// inline block form. `key` is only used for error reporting and for the
/// prefix of inline objects. Null cannot be rendered canonically and fails
/// with [`JsonextError::UnsupportedType`].
pub fn format_value(level: usize, key: &str, value: &Value) -> Result<String, JsonextError> {
    match value {
        Value::Number(number) => {
            let x = number.as_f64().ok_or_else(|| JsonextError::UnsupportedType {
                key: key.to_string(),
                kind: "number",
            })?;
            Ok(format!(" {}", canonicalize_number(x)))
        }
        Value::String(text) => Ok(format!(" {}", quote(text))),
        Value::Bool(true) => Ok("true".to_string()),
        Value::Bool(false) => Ok("false".to_string()),
        Value::Array(elements) => {
            let mut out = String::from("[");
            for (i, element) in elements.iter().enumerate() {
                if i != 0 {
                    out.push(',');
                }
                // elements carry no key label of their own
                out.push_str(&format_value(level + 1, "", element)?);
            }
            out.push(']');
            Ok(out)
        }
        Value::Object(map) => format_map(level, key, map),
        Value::Null => Err(JsonextError::UnsupportedType {
            key: key.to_string(),
            kind: "null",
        }),
    }
}

fn indent(level: usize) -> String {
    "  ".repeat(level)
}

fn key_prefix(level: usize, key: &str) -> String {
    format!("{}{} : ", indent(level), quote(key))
}

fn quote(text: &str) -> String {
    Value::String(text.to_string()).to_string()
}
