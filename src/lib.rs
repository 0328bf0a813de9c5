//! # jsonext
//!
//! Path-addressed access, mutation and canonical pretty-printing for
//! loosely-typed JSON documents, without a fixed schema or generated types.
//!
//! Values are located or changed through slash-delimited path strings
//! (e.g. `a/b/c`), independent of whether the intermediate objects already
//! exist. Documents render back to a deterministic canonical text form:
//! object keys sorted bytewise, two-space indentation, and near-integer
//! floats collapsed to integer literals.
//!
//! ## Features
//!
//! - **Path addressing:** `get`, `set` and `delete` share one path syntax.
//!   Segments are split on `/` and empty segments are ignored, so `a//b/`
//!   and `a/b` are the same path. An empty path addresses the whole document.
//! - **On-demand structure:** setting `a/b/c` on an empty document creates
//!   the intermediate objects. A non-object value in the way is overwritten.
//! - **Canonical formatting:** the same document always renders to the same
//!   bytes, regardless of the key order the source text used.
//! - **Lenient parsing:** a document that was itself JSON-encoded as a string
//!   (as often happens to log-captured payloads) is recovered transparently.
//!
//! ## Basic usage
//!
//! ```rust
//! use jsonext::{delete_value, get_value, set_value, TypeTag};
//! use serde_json::Map;
//!
//! let root = set_value("server/port", TypeTag::Number, "8080", Map::new()).unwrap();
//! let root = set_value("server/host", TypeTag::String, "localhost", root).unwrap();
//!
//! // The accessor renders float leaves with six decimals; the canonical
//! // formatter below collapses the same value to an integer literal.
//! assert_eq!(get_value("server/port", &root).unwrap(), "8080.000000");
//!
//! let rendered = jsonext::format_document(&root).unwrap();
//! assert_eq!(
//!     rendered,
//!     "{\n  \"server\" : {\n    \"host\" :  \"localhost\",\n    \"port\" :  8080\n  }\n}"
//! );
//!
//! let root = delete_value("server/host", root, false).unwrap();
//! assert!(get_value("server/host", &root).is_err());
//! ```
//!
//! ## Working with files
//!
//! [`read_document`] decodes the first JSON document from a file and
//! [`write_document`] writes a document back in canonical form.
//! [`read_value_or`] scans a file of concatenated documents for a path and
//! falls back to a default instead of erroring.
//!
//! ## License
//!
//! See the [LICENSE](LICENSE) file for details.

mod format;
mod io;
mod manipulators;
mod parse;
mod types;

pub use format::{canonicalize_number, format_document, format_object, format_value};
pub use io::{read_document, read_value_or, write_document, write_document_str};
pub use manipulators::{delete_value, get_value, set_value};
pub use parse::{parse_array, parse_lenient, parse_path};
pub use types::{JsonextError, TypeTag};
