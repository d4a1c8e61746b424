//! Rendering of a [Value] tree as compact JSON text
//!
//! Serialization is total and byte oriented: string contents are written back exactly as they
//! are held, so non-ASCII (and non-UTF-8) bytes pass through unchanged. Map entries are written in
//! the map's own iteration order, which is not stable across runs.
use std::fmt::{Display, Formatter};

use crate::value::{ByteString, Value};

/// Default output buffer capacity
const DEFAULT_BUFFER_CAPACITY: usize = 128;

/// Render a value as JSON text
pub fn serialize(value: &Value) -> ByteString {
    let mut buffer = Vec::with_capacity(DEFAULT_BUFFER_CAPACITY);
    write_value(&mut buffer, value);
    buffer
}

/// Quote and escape a string the way the serializer does. Quotes, backslashes and the common
/// whitespace controls get their two character escapes, any other byte below 0x20 becomes
/// `\u00XX`, and everything else (including non-ASCII) is passed through untouched.
pub fn escape_string<T: AsRef<[u8]>>(s: T) -> ByteString {
    let mut buffer = Vec::with_capacity(s.as_ref().len() + 2);
    write_escaped(&mut buffer, s.as_ref());
    buffer
}

impl Value {
    /// Render this value as JSON text
    pub fn serialize_json(&self) -> ByteString {
        serialize(self)
    }
}

/// Formats the serialized form. Any bytes which aren't valid UTF-8 are shown as U+FFFD, so use
/// [serialize] when the exact bytes matter.
impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&String::from_utf8_lossy(&serialize(self)))
    }
}

fn write_value(out: &mut ByteString, value: &Value) {
    match value {
        Value::Null => out.extend_from_slice(b"null"),
        Value::Bool(true) => out.extend_from_slice(b"true"),
        Value::Bool(false) => out.extend_from_slice(b"false"),
        Value::Integer(i) => out.extend_from_slice(i.to_string().as_bytes()),
        // Debug output is the shortest text that round-trips, and always keeps a period or
        // exponent so the value reads back as a float
        Value::Float(v) => out.extend_from_slice(format!("{v:?}").as_bytes()),
        Value::String(s) => write_escaped(out, s),
        Value::Array(a) => {
            out.push(b'[');
            for (index, element) in a.iter().enumerate() {
                if index > 0 {
                    out.push(b',');
                }
                write_value(out, element);
            }
            out.push(b']');
        }
        Value::Map(m) => {
            out.push(b'{');
            for (index, (key, element)) in m.iter().enumerate() {
                if index > 0 {
                    out.push(b',');
                }
                write_escaped(out, key);
                out.push(b':');
                write_value(out, element);
            }
            out.push(b'}');
        }
    }
}

/// Write the quoted, escaped form of a string, flushing unescaped runs in one go
fn write_escaped(out: &mut ByteString, bytes: &[u8]) {
    out.push(b'"');
    let mut start = 0;
    for (index, byte) in bytes.iter().copied().enumerate() {
        let escape: Option<&[u8]> = match byte {
            b'"' => Some(b"\\\""),
            b'\\' => Some(b"\\\\"),
            0x08 => Some(b"\\b"),
            0x0c => Some(b"\\f"),
            b'\n' => Some(b"\\n"),
            b'\r' => Some(b"\\r"),
            b'\t' => Some(b"\\t"),
            0x00..=0x1f => None,
            _ => continue,
        };
        out.extend_from_slice(&bytes[start..index]);
        match escape {
            Some(escape) => out.extend_from_slice(escape),
            None => out.extend_from_slice(format!("\\u{byte:04x}").as_bytes()),
        }
        start = index + 1;
    }
    out.extend_from_slice(&bytes[start..]);
    out.push(b'"');
}
