use std::fs::{self, File};
use std::io::{BufReader, Write};
use std::path::Path;

use serde_json::{Map, Value};

use crate::format::format_document;
use crate::manipulators::get_value;
use crate::parse::parse_lenient;
use crate::types::JsonextError;

/// Reads the first JSON document from a file.
///
/// Open and decode errors propagate unmodified as [`JsonextError::Io`] and
/// [`JsonextError::Decode`].
pub fn read_document(path: impl AsRef<Path>) -> Result<Map<String, Value>, JsonextError> {
    let file = File::open(path)?;
    let document = serde_json::from_reader(BufReader::new(file))?;
    Ok(document)
}

/// Writes a document to a file in canonical form, creating or truncating it.
pub fn write_document(
    path: impl AsRef<Path>,
    root: &Map<String, Value>,
) -> Result<(), JsonextError> {
    let text = format_document(root)?;
    let mut file = File::create(path)?;
    file.write_all(text.as_bytes())?;
    Ok(())
}

/// Leniently parses a raw text blob and writes it in canonical form.
pub fn write_document_str(path: impl AsRef<Path>, raw: &str) -> Result<(), JsonextError> {
    let document = parse_lenient(raw)?;
    write_document(path, &document)
}

/// Reads a path value from a file of concatenated JSON documents, falling
/// back to a default.
///
/// Documents are decoded from the file in sequence; the first one in which
/// `json_path` resolves supplies the result. A missing file, a decode
/// failure, or exhausting the stream all yield `default`. This never errors.
pub fn read_value_or(file: impl AsRef<Path>, json_path: &str, default: &str) -> String {
    let Ok(contents) = fs::read_to_string(file) else {
        return default.to_string();
    };

    let stream = serde_json::Deserializer::from_str(&contents).into_iter::<Map<String, Value>>();
    for document in stream {
        let Ok(document) = document else {
            return default.to_string();
        };
        if let Ok(value) = get_value(json_path, &document) {
            return value;
        }
    }

    default.to_string()
}
