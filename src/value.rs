//! The dynamic [Value] type and its typed accessors
//!
//! Accessors come in pairs. The plain form (e.g. [Value::array]) never mutates and hands back a
//! shared, process-wide default whenever the active variant doesn't match. The `_mut` form (e.g.
//! [Value::array_mut]) *replaces* a mismatched variant with a default-constructed one of the
//! requested kind before returning it, discarding whatever was there. That is how an empty
//! container gets shaped and then filled:
//!
//! ```
//! use aeon_json::Value;
//!
//! let mut value = Value::from(12);
//! value.array_mut().push(Value::from("first"));
//! assert!(value.is_array());
//! assert_eq!(value.size(), 1);
//! ```
use std::collections::HashMap;
use std::fmt::{Display, Formatter};
use std::sync::OnceLock;

/// Owned string payload. Strings are raw bytes: no encoding is assumed or checked, and
/// non-ASCII bytes pass through the parser and serializer untouched.
pub type ByteString = Vec<u8>;

/// Ordered sequence of child values
pub type Array = Vec<Value>;

/// Unordered mapping from string keys to child values
pub type Map = HashMap<ByteString, Value>;

/// The single immutable null handed out by const lookups that miss
pub(crate) static NULL_VALUE: Value = Value::Null;

static EMPTY_STRING: ByteString = Vec::new();

static EMPTY_ARRAY: Array = Vec::new();

/// [HashMap::new] isn't const, so the empty map is built once on first use
fn empty_map() -> &'static Map {
    static EMPTY_MAP: OnceLock<Map> = OnceLock::new();
    EMPTY_MAP.get_or_init(Map::new)
}

/// Basic enumeration of the different JSON values. Exactly one variant is active at any time,
/// and a default-constructed value is [Value::Null].
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// Canonical null value
    #[default]
    Null,
    /// Canonical boolean value
    Bool(bool),
    /// Integer numeric value
    Integer(i64),
    /// Floating point numeric value
    Float(f64),
    /// Owned byte string value
    String(ByteString),
    /// Array of values
    Array(Array),
    /// Map of values
    Map(Map),
}

/// Fieldless tag naming the variant held by a [Value]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Kind {
    Null,
    Bool,
    Integer,
    Float,
    String,
    Array,
    Map,
}

impl Display for Kind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Kind::Null => "null",
            Kind::Bool => "bool",
            Kind::Integer => "integer",
            Kind::Float => "float",
            Kind::String => "string",
            Kind::Array => "array",
            Kind::Map => "map",
        };
        f.write_str(name)
    }
}

/// Generates the const/mutable accessor pair for a single variant.
macro_rules! typed_accessors {
    ($name:ident, $name_mut:ident, $variant:ident, $ty:ty, $fallback:expr, $doc:literal) => {
        #[doc = concat!("The live ", $doc, " payload, or a shared default if the value holds something else.")]
        pub fn $name(&self) -> &$ty {
            match self {
                Value::$variant(v) => v,
                _ => $fallback,
            }
        }

        #[doc = concat!("Mutable access to the ", $doc, " payload. Any other variant is discarded and replaced with a default ", $doc, " first.")]
        pub fn $name_mut(&mut self) -> &mut $ty {
            if !matches!(self, Value::$variant(_)) {
                *self = Value::$variant(<$ty>::default());
            }
            match self {
                Value::$variant(v) => v,
                _ => unreachable!("variant was assigned above"),
            }
        }
    };
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    pub fn is_integer(&self) -> bool {
        matches!(self, Value::Integer(_))
    }

    pub fn is_floating(&self) -> bool {
        matches!(self, Value::Float(_))
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    pub fn is_map(&self) -> bool {
        matches!(self, Value::Map(_))
    }

    /// The [Kind] of the active variant
    pub fn kind(&self) -> Kind {
        match self {
            Value::Null => Kind::Null,
            Value::Bool(_) => Kind::Bool,
            Value::Integer(_) => Kind::Integer,
            Value::Float(_) => Kind::Float,
            Value::String(_) => Kind::String,
            Value::Array(_) => Kind::Array,
            Value::Map(_) => Kind::Map,
        }
    }

    /// Byte length for strings, element count for arrays, key count for maps. Null and every
    /// scalar report zero.
    pub fn size(&self) -> usize {
        match self {
            Value::Null | Value::Bool(_) | Value::Integer(_) | Value::Float(_) => 0,
            Value::String(s) => s.len(),
            Value::Array(a) => a.len(),
            Value::Map(m) => m.len(),
        }
    }

    typed_accessors!(boolean, boolean_mut, Bool, bool, &false, "boolean");
    typed_accessors!(integer, integer_mut, Integer, i64, &0, "integer");
    typed_accessors!(floating, floating_mut, Float, f64, &0.0, "floating");
    typed_accessors!(string, string_mut, String, ByteString, &EMPTY_STRING, "string");
    typed_accessors!(array, array_mut, Array, Array, &EMPTY_ARRAY, "array");
    typed_accessors!(map, map_mut, Map, Map, empty_map(), "map");

    /// View a string payload as `str`. [None] if the value isn't a string or its bytes aren't
    /// valid UTF-8.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => std::str::from_utf8(s).ok(),
            _ => None,
        }
    }

    /// Move the contents out, leaving [Value::Null] behind
    pub fn take(&mut self) -> Value {
        std::mem::take(self)
    }

    /// Non-vivifying lookup by array index or map key. Returns [None] on a miss or when the
    /// value isn't the matching container.
    pub fn get<I: ValueIndex>(&self, index: I) -> Option<&Value> {
        index.index_into(self)
    }

    /// Mutable counterpart of [Value::get]. Never inserts and never changes the variant.
    pub fn get_mut<I: ValueIndex>(&mut self, index: I) -> Option<&mut Value> {
        index.index_into_mut(self)
    }
}

/// A type that can index into a [Value]: `usize` for arrays, string or byte slices for maps.
///
/// This trait is sealed and cannot be implemented outside of this crate.
pub trait ValueIndex: private::Sealed {
    #[doc(hidden)]
    fn index_into<'v>(&self, v: &'v Value) -> Option<&'v Value>;
    #[doc(hidden)]
    fn index_into_mut<'v>(&self, v: &'v mut Value) -> Option<&'v mut Value>;
    #[doc(hidden)]
    fn index_or_insert<'v>(&self, v: &'v mut Value) -> &'v mut Value;
}

impl ValueIndex for usize {
    fn index_into<'v>(&self, v: &'v Value) -> Option<&'v Value> {
        match v {
            Value::Array(a) => a.get(*self),
            _ => None,
        }
    }

    fn index_into_mut<'v>(&self, v: &'v mut Value) -> Option<&'v mut Value> {
        match v {
            Value::Array(a) => a.get_mut(*self),
            _ => None,
        }
    }

    fn index_or_insert<'v>(&self, v: &'v mut Value) -> &'v mut Value {
        let array = v.array_mut();
        if *self >= array.len() {
            array.resize_with(*self + 1, Value::default);
        }
        &mut array[*self]
    }
}

impl ValueIndex for [u8] {
    fn index_into<'v>(&self, v: &'v Value) -> Option<&'v Value> {
        match v {
            Value::Map(m) => m.get(self),
            _ => None,
        }
    }

    fn index_into_mut<'v>(&self, v: &'v mut Value) -> Option<&'v mut Value> {
        match v {
            Value::Map(m) => m.get_mut(self),
            _ => None,
        }
    }

    fn index_or_insert<'v>(&self, v: &'v mut Value) -> &'v mut Value {
        v.map_mut().entry(self.to_vec()).or_default()
    }
}

impl ValueIndex for str {
    fn index_into<'v>(&self, v: &'v Value) -> Option<&'v Value> {
        self.as_bytes().index_into(v)
    }

    fn index_into_mut<'v>(&self, v: &'v mut Value) -> Option<&'v mut Value> {
        self.as_bytes().index_into_mut(v)
    }

    fn index_or_insert<'v>(&self, v: &'v mut Value) -> &'v mut Value {
        self.as_bytes().index_or_insert(v)
    }
}

impl ValueIndex for String {
    fn index_into<'v>(&self, v: &'v Value) -> Option<&'v Value> {
        self.as_str().index_into(v)
    }

    fn index_into_mut<'v>(&self, v: &'v mut Value) -> Option<&'v mut Value> {
        self.as_str().index_into_mut(v)
    }

    fn index_or_insert<'v>(&self, v: &'v mut Value) -> &'v mut Value {
        self.as_str().index_or_insert(v)
    }
}

impl<T: ?Sized + ValueIndex> ValueIndex for &T {
    fn index_into<'v>(&self, v: &'v Value) -> Option<&'v Value> {
        (**self).index_into(v)
    }

    fn index_into_mut<'v>(&self, v: &'v mut Value) -> Option<&'v mut Value> {
        (**self).index_into_mut(v)
    }

    fn index_or_insert<'v>(&self, v: &'v mut Value) -> &'v mut Value {
        (**self).index_or_insert(v)
    }
}

mod private {
    pub trait Sealed {}
    impl Sealed for usize {}
    impl Sealed for [u8] {}
    impl Sealed for str {}
    impl Sealed for String {}
    impl<T: ?Sized + Sealed> Sealed for &T {}
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

macro_rules! from_integer {
    ($($ty:ident)*) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::Integer(value as i64)
                }
            }
        )*
    };
}

from_integer! {
    i8 i16 i32 i64 isize
    u8 u16 u32 u64 usize
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Float(f64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.as_bytes().to_vec())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value.into_bytes())
    }
}

impl From<&[u8]> for Value {
    fn from(value: &[u8]) -> Self {
        Value::String(value.to_vec())
    }
}

impl From<ByteString> for Value {
    fn from(value: ByteString) -> Self {
        Value::String(value)
    }
}

impl From<Array> for Value {
    fn from(value: Array) -> Self {
        Value::Array(value)
    }
}

impl From<Map> for Value {
    fn from(value: Map) -> Self {
        Value::Map(value)
    }
}

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::Null
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

impl FromIterator<Value> for Value {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Value::Array(iter.into_iter().collect())
    }
}

impl<K: Into<ByteString>> FromIterator<(K, Value)> for Value {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Value::Map(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

#[cfg(test)]
mod tests {
    use crate::value::{Kind, Map, Value};

    #[test]
    fn should_default_to_null() {
        let value = Value::default();
        assert!(value.is_null());
        assert_eq!(value.kind(), Kind::Null);
        assert_eq!(value.size(), 0);
    }

    #[test]
    fn should_report_exactly_one_predicate() {
        let values = [
            Value::Null,
            Value::from(true),
            Value::from(3),
            Value::from(1.5),
            Value::from("s"),
            Value::from(vec![Value::Null]),
            Value::from(Map::new()),
        ];
        for value in &values {
            let hits = [
                value.is_null(),
                value.is_bool(),
                value.is_integer(),
                value.is_floating(),
                value.is_string(),
                value.is_array(),
                value.is_map(),
            ]
            .iter()
            .filter(|b| **b)
            .count();
            assert_eq!(hits, 1, "{value:?}");
        }
    }

    #[test]
    fn should_report_zero_size_for_scalars() {
        assert_eq!(Value::from(5).size(), 0);
        assert_eq!(Value::from(true).size(), 0);
        assert_eq!(Value::from(2.5).size(), 0);
        assert_eq!(Value::from("héllo").size(), 6);
        assert_eq!(Value::from(vec![Value::Null, Value::Null]).size(), 2);
    }

    #[test]
    fn should_return_defaults_from_const_accessors_on_mismatch() {
        let value = Value::from("text");
        assert!(!*value.boolean());
        assert_eq!(*value.integer(), 0);
        assert_eq!(*value.floating(), 0.0);
        assert!(value.array().is_empty());
        assert!(value.map().is_empty());
        assert_eq!(value.string(), b"text");
        assert!(Value::from(9).string().is_empty());
        assert!(value.is_string());
    }

    #[test]
    fn should_replace_content_in_mutable_accessors() {
        let mut value = Value::from("discarded");
        value.array_mut().push(Value::from(1));
        assert!(value.is_array());
        assert_eq!(value.size(), 1);

        *value.integer_mut() = 42;
        assert_eq!(value, Value::Integer(42));

        *value.integer_mut() += 1;
        assert_eq!(value, Value::Integer(43));

        assert_eq!(*value.floating_mut(), 0.0);
        assert!(value.is_floating());

        value.string_mut().extend_from_slice(b"abc");
        assert_eq!(value.string(), b"abc");

        value.map_mut().insert("k".into(), Value::Null);
        assert!(value.is_map());
        assert!(!*value.boolean_mut());
        assert!(value.is_bool());
    }

    #[test]
    fn should_overwrite_array_through_accessor() {
        let mut value = Value::default();
        *value.array_mut() = vec![4.into(), 4.into(), 3.into()];
        assert_eq!(value.size(), 3);
        assert_eq!(value.array()[2], Value::Integer(3));
    }

    #[test]
    fn should_deep_copy_on_clone() {
        let mut original = Value::from(vec![Value::from(vec![Value::from(1)])]);
        let copy = original.clone();
        original.array_mut()[0].array_mut().push(Value::from(2));
        assert_eq!(copy.array()[0].size(), 1);
        assert_eq!(original.array()[0].size(), 2);
    }

    #[test]
    fn should_reset_source_on_take() {
        let mut source = Value::from("moved");
        let target = source.take();
        assert!(source.is_null());
        assert_eq!(target, Value::from("moved"));
    }

    #[test]
    fn should_lookup_without_vivifying() {
        let mut value: Value = vec![Value::from(1), Value::from(2)].into_iter().collect();
        assert_eq!(value.get(1), Some(&Value::from(2)));
        assert_eq!(value.get(2), None);
        assert_eq!(value.get("key"), None);
        if let Some(v) = value.get_mut(0) {
            *v = Value::from("changed");
        }
        assert_eq!(value.get(0), Some(&Value::from("changed")));
        assert_eq!(value.get_mut(7), None);
        assert_eq!(value.size(), 2);
    }

    #[test]
    fn should_build_from_native_types() {
        assert_eq!(Value::from(7u8), Value::Integer(7));
        assert_eq!(Value::from(-7i16), Value::Integer(-7));
        assert_eq!(Value::from(0.5f32), Value::Float(0.5));
        assert_eq!(Value::from(String::from("s")), Value::String(b"s".to_vec()));
        assert_eq!(Value::from(&b"raw\xff"[..]), Value::String(b"raw\xff".to_vec()));
        assert_eq!(Value::from(vec![0xc3u8, 0x28]).size(), 2);
        assert_eq!(Value::from(None::<i32>), Value::Null);
        assert_eq!(Value::from(Some(true)), Value::Bool(true));
        assert_eq!(Value::from(()), Value::Null);

        let map: Value = vec![("a", Value::from(1)), ("b", Value::from(2))]
            .into_iter()
            .collect();
        assert!(map.is_map());
        assert_eq!(map.size(), 2);
    }

    #[test]
    fn should_display_kinds() {
        assert_eq!(Value::from(1.0).kind().to_string(), "float");
        assert_eq!(Value::from(Map::new()).kind().to_string(), "map");
    }

    #[test]
    fn should_hold_arbitrary_bytes_in_strings() {
        let mut value = Value::from(&b"caf\xe9"[..]);
        assert_eq!(value.size(), 4);
        assert_eq!(value.as_str(), None);
        assert_eq!(Value::from("café").as_str(), Some("café"));
        assert_eq!(Value::from(1).as_str(), None);

        value.string_mut().push(0xff);
        assert_eq!(value.string(), b"caf\xe9\xff");

        let mut map = Value::default();
        map[&b"k\x80"[..]] = Value::from(1);
        map["plain"] = Value::from(2);
        assert_eq!(map.size(), 2);
        assert!(map[&b"k\x80"[..]] == 1);
        assert!(map[&b"plain"[..]] == 2);
        assert!(map.get(&b"absent"[..]).is_none());
    }
}
