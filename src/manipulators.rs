use serde_json::{Map, Number, Value};

use crate::format::{format_document, format_value};
use crate::parse::{parse_lenient, parse_path};
use crate::types::{JsonextError, TypeTag};

/// Looks up a value by path and returns its string rendering.
///
/// An empty path (zero segments) renders the whole document canonically.
/// Every non-final segment must address an object: a missing key fails with
/// [`JsonextError::PathNotFound`], a non-object value mid-path fails with
/// [`JsonextError::PathTypeMismatch`].
///
/// Leaf rendering depends on the kind of the located value: integer numbers
/// render as plain integer text, floats as fixed-point text with six decimals,
/// objects and arrays in canonical form, strings as their raw unquoted text.
/// The document is never mutated.
///
/// ## Example
///
/// ```rust
/// use jsonext::get_value;
///
/// let doc = jsonext::parse_lenient(r#"{"a": {"b": {"c": "v"}}}"#).unwrap();
/// assert_eq!(get_value("a/b/c", &doc).unwrap(), "v");
/// ```
pub fn get_value(path: &str, root: &Map<String, Value>) -> Result<String, JsonextError> {
    let segments = parse_path(path);
    let Some((last, walk)) = segments.split_last() else {
        return format_document(root);
    };

    let mut current = root;
    for segment in walk {
        let value = current
            .get(segment)
            .ok_or_else(|| JsonextError::PathNotFound {
                segment: segment.clone(),
                path: path.to_string(),
            })?;
        current = value
            .as_object()
            .ok_or_else(|| JsonextError::PathTypeMismatch {
                segment: segment.clone(),
                path: path.to_string(),
            })?;
    }

    let value = current
        .get(last)
        .ok_or_else(|| JsonextError::PathNotFound {
            segment: last.clone(),
            path: path.to_string(),
        })?;
    render_leaf(value)
}

// Leaf rendering is a distinct path from the canonical formatter on purpose:
// floats always carry six decimals here, with no integer collapse.
fn render_leaf(value: &Value) -> Result<String, JsonextError> {
    match value {
        Value::Number(number) => {
            if number.is_f64() {
                Ok(format!("{:.6}", number.as_f64().unwrap_or_default()))
            } else {
                Ok(number.to_string())
            }
        }
        Value::Object(map) => format_document(map),
        Value::Array(_) => format_value(0, "", value),
        Value::String(text) => Ok(text.clone()),
        Value::Bool(flag) => Ok(flag.to_string()),
        Value::Null => Ok("null".to_string()),
    }
}

/// Assigns a typed value at a path, creating intermediate objects as needed.
///
/// The raw value is interpreted according to `tag` (see [`TypeTag`]). The
/// root is taken by value, mutated in place, and returned.
///
/// An empty path replaces the whole document: only [`TypeTag::Map`] is legal
/// there, and the raw value is parsed as a new document. Anything else fails
/// with [`JsonextError::InvalidRootAssignment`].
///
/// While walking the non-final segments, a missing key is filled with a fresh
/// empty object, and an existing non-object value is **overwritten** with a
/// fresh empty object. The overwrite is destructive and silent; callers that
/// rely on preserving the prior value must check for it first.
///
/// ## Example
///
/// ```rust
/// use jsonext::{get_value, set_value, TypeTag};
/// use serde_json::Map;
///
/// let root = set_value("a/b/c", TypeTag::String, "v", Map::new()).unwrap();
/// assert_eq!(get_value("a/b/c", &root).unwrap(), "v");
/// ```
pub fn set_value(
    path: &str,
    tag: TypeTag,
    raw: &str,
    mut root: Map<String, Value>,
) -> Result<Map<String, Value>, JsonextError> {
    let segments = parse_path(path);
    let Some((last, walk)) = segments.split_last() else {
        return match tag {
            TypeTag::Map => parse_lenient(raw),
            _ => Err(JsonextError::InvalidRootAssignment { tag }),
        };
    };

    let leaf = leaf_value(tag, raw)?;

    let mut current = &mut root;
    for segment in walk {
        let entry = current
            .entry(segment.clone())
            .or_insert_with(|| Value::Object(Map::new()));
        if !entry.is_object() {
            // create-or-clobber: whatever held this key is discarded
            *entry = Value::Object(Map::new());
        }
        current = entry.as_object_mut().unwrap();
    }
    current.insert(last.clone(), leaf);

    Ok(root)
}

fn leaf_value(tag: TypeTag, raw: &str) -> Result<Value, JsonextError> {
    match tag {
        TypeTag::String => Ok(Value::String(raw.to_string())),
        TypeTag::Number => {
            let parsed: f64 = raw
                .parse()
                .map_err(|_| JsonextError::InvalidNumberLiteral(raw.to_string()))?;
            let number = Number::from_f64(parsed)
                .ok_or_else(|| JsonextError::InvalidNumberLiteral(raw.to_string()))?;
            Ok(Value::Number(number))
        }
        TypeTag::Map => {
            let document =
                parse_lenient(raw).map_err(|err| JsonextError::InvalidDocument(err.to_string()))?;
            Ok(Value::Object(document))
        }
        TypeTag::Array => {
            let elements: Vec<Value> = serde_json::from_str(raw)
                .map_err(|err| JsonextError::InvalidDocument(err.to_string()))?;
            Ok(Value::Array(elements))
        }
    }
}

/// Removes the value at a path.
///
/// The root is taken by value, mutated in place, and returned. An empty path
/// clears the whole document.
///
/// Without `force`, a missing segment fails with
/// [`JsonextError::PathNotFound`] and a non-object value mid-path fails with
/// [`JsonextError::PathTypeMismatch`]. With `force`, a missing segment is
/// treated as already satisfied and returns the document unchanged, while a
/// non-object value mid-path is deleted outright, key and all, without
/// traversing further.
///
/// ## Example
///
/// ```rust
/// use jsonext::delete_value;
/// use serde_json::json;
///
/// let doc = jsonext::parse_lenient(r#"{"a": 1, "b": 2}"#).unwrap();
/// // "a" holds a scalar, so force deletion removes "a" itself.
/// let doc = delete_value("a/b", doc, true).unwrap();
/// assert_eq!(serde_json::Value::Object(doc), json!({"b": 2}));
/// ```
pub fn delete_value(
    path: &str,
    mut root: Map<String, Value>,
    force: bool,
) -> Result<Map<String, Value>, JsonextError> {
    let segments = parse_path(path);
    if segments.is_empty() {
        return Ok(Map::new());
    }

    delete_at(&mut root, &segments, path, force)?;
    Ok(root)
}

fn delete_at(
    map: &mut Map<String, Value>,
    segments: &[String],
    path: &str,
    force: bool,
) -> Result<(), JsonextError> {
    let Some((segment, rest)) = segments.split_first() else {
        return Ok(());
    };

    if !map.contains_key(segment) {
        if force {
            return Ok(());
        }
        return Err(JsonextError::PathNotFound {
            segment: segment.clone(),
            path: path.to_string(),
        });
    }

    if rest.is_empty() {
        map.remove(segment);
        return Ok(());
    }

    let descends = matches!(map.get(segment), Some(Value::Object(_)));
    if !descends {
        if force {
            // deletion short-circuits at the mismatched key
            map.remove(segment);
            return Ok(());
        }
        return Err(JsonextError::PathTypeMismatch {
            segment: segment.clone(),
            path: path.to_string(),
        });
    }

    if let Some(child) = map.get_mut(segment).and_then(Value::as_object_mut) {
        return delete_at(child, rest, path, force);
    }
    Ok(())
}
