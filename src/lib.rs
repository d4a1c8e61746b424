//! A dynamic, self-describing JSON value type together with a small recursive-descent parser and
//! a compact serializer.
//!
//! ```
//! use aeon_json::{parse, parse_bytes, serialize, Value};
//!
//! let mut doc = parse(r#"{"name": "aeon", "tags": ["json"]}"#).unwrap();
//! doc["tags"][1] = Value::from("value");
//! doc["version"] = 1.into();
//!
//! assert_eq!(doc["tags"].size(), 2);
//! assert!(doc["missing"].is_null());
//! assert_eq!(parse_bytes(&serialize(&doc)).unwrap(), doc);
//!
//! // strings are bytes, and pass through without any encoding checks
//! let raw = parse_bytes(b"\"caf\xe9\"").unwrap();
//! assert_eq!(raw.size(), 4);
//! assert_eq!(serialize(&raw), b"\"caf\xe9\"");
//! ```
//!
//! Accessors on [Value] never fail. Reads of the wrong kind fall back to defaults, writes of the
//! wrong kind reshape the value. Only parsing can fail, with a [ParserError] whose
//! [ParserErrorKind] is either end of input or invalid input.

pub mod coercions;
pub mod coords;
pub mod equality;
pub mod errors;
pub mod index;
pub mod parser;
mod scanner;
#[cfg(feature = "serde")]
mod serde_support;
pub mod serializer;
#[cfg(test)]
mod test_macros;
pub mod value;

pub use crate::coords::Coords;
pub use crate::errors::{ParserError, ParserErrorDetails, ParserErrorKind, ParserResult};
pub use crate::parser::{parse, parse_bytes, Parser};
pub use crate::serializer::{escape_string, serialize};
pub use crate::value::{Array, ByteString, Kind, Map, Value, ValueIndex};
