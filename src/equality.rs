//! Equality between a [Value] and native scalars
//!
//! Structural equality between two values is the derived `PartialEq`, so `Integer(1)` and
//! `Float(1.0)` differ. Against native numbers, integers and floats are compared after widening to
//! float, but numbers never equal strings or booleans.
use crate::value::Value;

impl PartialEq<bool> for Value {
    fn eq(&self, other: &bool) -> bool {
        matches!(self, Value::Bool(b) if b == other)
    }
}

impl PartialEq<[u8]> for Value {
    fn eq(&self, other: &[u8]) -> bool {
        matches!(self, Value::String(s) if s.as_slice() == other)
    }
}

impl PartialEq<&[u8]> for Value {
    fn eq(&self, other: &&[u8]) -> bool {
        self == *other
    }
}

impl PartialEq<str> for Value {
    fn eq(&self, other: &str) -> bool {
        self == other.as_bytes()
    }
}

impl PartialEq<&str> for Value {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl PartialEq<String> for Value {
    fn eq(&self, other: &String) -> bool {
        self == other.as_str()
    }
}

impl PartialEq<Value> for &str {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}

impl PartialEq<Value> for String {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}

impl PartialEq<Value> for bool {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}

fn eq_integer(value: &Value, other: i64) -> bool {
    match value {
        Value::Integer(i) => *i == other,
        Value::Float(f) => *f == other as f64,
        _ => false,
    }
}

fn eq_floating(value: &Value, other: f64) -> bool {
    match value {
        Value::Float(f) => *f == other,
        Value::Integer(i) => *i as f64 == other,
        _ => false,
    }
}

macro_rules! partialeq_numeric {
    ($([$($ty:ty)*], $compare:ident, $base:ty)*) => {
        $($(
            impl PartialEq<$ty> for Value {
                fn eq(&self, other: &$ty) -> bool {
                    $compare(self, *other as $base)
                }
            }

            impl PartialEq<Value> for $ty {
                fn eq(&self, other: &Value) -> bool {
                    $compare(other, *self as $base)
                }
            }
        )*)*
    }
}

partialeq_numeric! {
    [i8 i16 i32 i64 isize u8 u16 u32 u64 usize], eq_integer, i64
    [f32 f64], eq_floating, f64
}
