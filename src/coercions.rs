//! Total, non-mutating conversions between the different kinds of [Value]
//!
//! Unlike the typed accessors, these convert where a sensible conversion exists. Strings are read
//! like C's `strtoll`/`strtod`: leading whitespace is skipped, the longest numeric prefix is used,
//! trailing garbage is ignored and a string with no numeric prefix yields zero.
use crate::value::{ByteString, Value};

impl Value {
    /// Null is false, numbers are true when non-zero, strings are true unless empty or exactly
    /// `"false"`, containers are true when non-empty.
    pub fn as_boolean(&self) -> bool {
        match self {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Integer(i) => *i != 0,
            Value::Float(f) => *f != 0.0,
            Value::String(s) => !s.is_empty() && s.as_slice() != b"false",
            Value::Array(a) => !a.is_empty(),
            Value::Map(m) => !m.is_empty(),
        }
    }

    /// Floats truncate toward zero, strings use their leading decimal integer, containers
    /// report their element count.
    pub fn as_integer(&self) -> i64 {
        match self {
            Value::Null => 0,
            Value::Bool(b) => i64::from(*b),
            Value::Integer(i) => *i,
            Value::Float(f) => *f as i64,
            Value::String(s) => leading_integer(s),
            Value::Array(a) => a.len() as i64,
            Value::Map(m) => m.len() as i64,
        }
    }

    pub fn as_floating(&self) -> f64 {
        match self {
            Value::Null => 0.0,
            Value::Bool(b) => f64::from(u8::from(*b)),
            Value::Integer(i) => *i as f64,
            Value::Float(f) => *f,
            Value::String(s) => leading_float(s),
            Value::Array(a) => a.len() as f64,
            Value::Map(m) => m.len() as f64,
        }
    }

    /// Textual form of scalars, as bytes. Strings are copied unchanged. Containers give the
    /// placeholders `[array]` and `[map]`; use [crate::serialize] for their JSON text.
    pub fn as_string(&self) -> ByteString {
        match self {
            Value::Null => b"null".to_vec(),
            Value::Bool(b) => b.to_string().into_bytes(),
            Value::Integer(i) => i.to_string().into_bytes(),
            Value::Float(f) => f.to_string().into_bytes(),
            Value::String(s) => s.clone(),
            Value::Array(_) => b"[array]".to_vec(),
            Value::Map(_) => b"[map]".to_vec(),
        }
    }
}

fn trim_leading_whitespace(bytes: &[u8]) -> &[u8] {
    let start = bytes
        .iter()
        .position(|b| !b.is_ascii_whitespace())
        .unwrap_or(bytes.len());
    &bytes[start..]
}

/// Parse the leading decimal integer of `bytes`, saturating on overflow.
pub(crate) fn leading_integer(bytes: &[u8]) -> i64 {
    let bytes = trim_leading_whitespace(bytes);
    let (negative, sign_len) = match bytes.first() {
        Some(b'-') => (true, 1),
        Some(b'+') => (false, 1),
        _ => (false, 0),
    };
    let digits = bytes[sign_len..]
        .iter()
        .take_while(|b| b.is_ascii_digit())
        .count();
    if digits == 0 {
        return 0;
    }
    // Keep a minus sign attached so that i64::MIN still parses
    let start = if negative { 0 } else { sign_len };
    match lexical::parse::<i64, _>(&bytes[start..sign_len + digits]) {
        Ok(value) => value,
        Err(_) if negative => i64::MIN,
        Err(_) => i64::MAX,
    }
}

/// Parse the leading floating point number of `bytes`, or zero if there isn't one.
pub(crate) fn leading_float(bytes: &[u8]) -> f64 {
    let bytes = trim_leading_whitespace(bytes);
    fast_float::parse_partial::<f64, _>(bytes)
        .map(|(value, _)| value)
        .unwrap_or(0.0)
}
