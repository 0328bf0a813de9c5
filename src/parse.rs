use nom::{
    bytes::complete::take_while, character::complete::char, combinator::all_consuming,
    multi::separated_list0, IResult, Parser,
};
use serde_json::{Map, Value};

use crate::types::JsonextError;

/// Splits a path string into its non-empty segments.
///
/// Paths are `/`-delimited. Empty segments are dropped, so leading, trailing
/// and repeated separators are all tolerated: `"a//b/"` and `"a/b"` name the
/// same path. There is no escaping syntax; a literal `/` cannot appear inside
/// a segment. An empty result addresses the document root.
///
/// ## Example
///
/// ```rust
/// use jsonext::parse_path;
///
/// assert_eq!(parse_path("a/b/c"), vec!["a", "b", "c"]);
/// assert_eq!(parse_path("/a//b/"), vec!["a", "b"]);
/// assert!(parse_path("").is_empty());
/// ```
pub fn parse_path(raw: &str) -> Vec<String> {
    let parsed: IResult<&str, Vec<&str>> =
        all_consuming(separated_list0(char('/'), segment)).parse(raw);

    parsed
        .map(|(_, segments)| {
            segments
                .into_iter()
                .filter(|segment| !segment.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

// A segment is everything up to the next separator, possibly empty.
fn segment(input: &str) -> IResult<&str, &str> {
    take_while(|c: char| c != '/').parse(input)
}

/// Decodes a text blob into a document, tolerating one extra layer of string
/// quoting.
///
/// The text is first decoded directly. If that fails, one layer of string
/// escaping is stripped (payloads captured from logs are often JSON documents
/// that were themselves JSON-encoded as strings) and the decode is retried on
/// the recovered text. If unquoting itself fails, the retry runs on the
/// original text again. Only when both attempts fail does this return
/// [`JsonextError::MalformedDocument`].
///
/// ## Example
///
/// ```rust
/// use serde_json::json;
///
/// // One layer of quoting/escaping is recovered transparently.
/// let doc = jsonext::parse_lenient(r#"{\"k\":1}"#).unwrap();
/// assert_eq!(serde_json::Value::Object(doc), json!({"k": 1}));
/// ```
pub fn parse_lenient(text: &str) -> Result<Map<String, Value>, JsonextError> {
    if let Ok(document) = serde_json::from_str(text) {
        return Ok(document);
    }

    let recovered = unquote(text).unwrap_or_else(|| text.to_string());
    serde_json::from_str(&recovered).map_err(JsonextError::MalformedDocument)
}

/// Strips one layer of string quoting and escaping from `text`.
///
/// Escaped payloads arrive either bare (`{\"k\":1}`) or still carrying their
/// surrounding quotes (`"{\"k\":1}"`); both forms are handled.
fn unquote(text: &str) -> Option<String> {
    let quoted = format!("\"{text}\"");
    if let Ok(recovered) = serde_json::from_str::<String>(&quoted) {
        return Some(recovered);
    }
    serde_json::from_str::<String>(text).ok()
}

/// Decodes a text blob as a JSON array. Strict: no quoting recovery.
pub fn parse_array(text: &str) -> Result<Vec<Value>, JsonextError> {
    Ok(serde_json::from_str(text)?)
}
