use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The typed interpretation of a raw value handed to [`set_value`](crate::set_value).
///
/// The raw value is always a string; the tag decides how it is parsed before
/// being stored in the document:
///
/// * `String` - stored verbatim.
/// * `Number` - parsed as a 64-bit float.
/// * `Map` - parsed as a nested JSON document (leniently, see
///   [`parse_lenient`](crate::parse_lenient)).
/// * `Array` - parsed as a JSON array literal.
///
/// ## Example
///
/// ```rust
/// use jsonext::{JsonextError, TypeTag};
///
/// let tag: TypeTag = "number".parse().unwrap();
/// assert_eq!(tag, TypeTag::Number);
///
/// let err = "boolean".parse::<TypeTag>().unwrap_err();
/// assert!(matches!(err, JsonextError::UnknownTypeTag(_)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeTag {
    String,
    Number,
    Map,
    Array,
}

impl TypeTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            TypeTag::String => "string",
            TypeTag::Number => "number",
            TypeTag::Map => "map",
            TypeTag::Array => "array",
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TypeTag {
    type Err = JsonextError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag {
            "string" => Ok(TypeTag::String),
            "number" => Ok(TypeTag::Number),
            "map" => Ok(TypeTag::Map),
            "array" => Ok(TypeTag::Array),
            other => Err(JsonextError::UnknownTypeTag(other.to_string())),
        }
    }
}

/// Errors returned by the document operations.
///
/// Every operation in this crate reports failure to the caller through this
/// enum; nothing aborts the process.
#[derive(Error, Debug)]
pub enum JsonextError {
    /// The decoder rejected the input text.
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Both lenient-parse attempts failed; carries the error from the second
    /// decode attempt.
    #[error("malformed document: {0}")]
    MalformedDocument(serde_json::Error),

    /// A path segment is absent from the document.
    #[error("cannot find \"{segment}\" in \"{path}\"")]
    PathNotFound { segment: String, path: String },

    /// A non-object value was encountered before the path was exhausted.
    #[error("\"{segment}\" in \"{path}\" does not hold an object")]
    PathTypeMismatch { segment: String, path: String },

    /// Only a whole document may be assigned at the root path.
    #[error("cannot assign a {tag} value at the document root")]
    InvalidRootAssignment { tag: TypeTag },

    /// The raw value for a `number` assignment did not parse as a finite
    /// 64-bit float.
    #[error("invalid number literal \"{0}\"")]
    InvalidNumberLiteral(String),

    /// The raw value for a `map` or `array` assignment did not parse.
    #[error("invalid document: {0}")]
    InvalidDocument(String),

    /// A type tag string outside `string`/`number`/`map`/`array`.
    #[error("unknown type tag \"{0}\"")]
    UnknownTypeTag(String),

    /// The formatter met a value kind it cannot render canonically.
    #[error("unsupported value kind \"{kind}\" under key \"{key}\"")]
    UnsupportedType { key: String, kind: &'static str },

    /// An error from the file read/write collaborators, passed through
    /// unmodified.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
