//! Indexing operators for [Value]
//!
//! Writing through `value[i]` or `value["key"]` auto-vivifies: a non-container is replaced with an
//! empty one of the right shape, short arrays grow with nulls, absent keys are inserted as null.
//! Reading never mutates; any miss yields the one shared immutable null.
use std::ops;

use crate::value::{Value, ValueIndex, NULL_VALUE};

impl<I: ValueIndex> ops::Index<I> for Value {
    type Output = Value;

    fn index(&self, index: I) -> &Value {
        index.index_into(self).unwrap_or(&NULL_VALUE)
    }
}

impl<I: ValueIndex> ops::IndexMut<I> for Value {
    fn index_mut(&mut self, index: I) -> &mut Value {
        index.index_or_insert(self)
    }
}

#[cfg(test)]
mod tests {
    use crate::value::Value;

    #[test]
    fn should_grow_arrays_with_nulls() {
        let mut value = Value::default();
        value[5] = Value::from("x");
        assert_eq!(value.size(), 6);
        for i in 0..5usize {
            assert!(value[i].is_null());
        }
        assert_eq!(value[5], Value::from("x"));
    }

    #[test]
    fn should_fill_arrays_in_place() {
        let mut value = Value::default();
        value[0] = 5.into();
        value[1] = 2.3.into();
        value[2] = "test lawl".into();
        assert_eq!(value.size(), 3);
        value[5] = 99.into();
        assert_eq!(value.size(), 6);
        value[1] = Value::Null;
        assert_eq!(value.size(), 6);
    }

    #[test]
    fn should_insert_absent_keys() {
        let mut value = Value::default();
        value["k"] = Value::from(1);
        assert_eq!(value.size(), 1);
        value["1"] = 5.into();
        value["test"] = "lawl".into();
        value["k"] = "overwritten".into();
        assert_eq!(value.size(), 3);
        assert_eq!(value["k"], Value::from("overwritten"));

        let key = String::from("owned");
        value[&key] = true.into();
        assert_eq!(value[key], Value::from(true));
    }

    #[test]
    fn should_coerce_shape_on_write() {
        let mut value = Value::from(vec![Value::from(1), Value::from(2)]);
        value["now"] = "a map".into();
        assert!(value.is_map());
        assert_eq!(value.size(), 1);

        value[0] = Value::Null;
        assert!(value.is_array());
        assert_eq!(value.size(), 1);
    }

    #[test]
    fn should_vivify_nested_paths() {
        let mut value = Value::default();
        value["outer"][2]["inner"] = 7.into();
        assert_eq!(value["outer"].size(), 3);
        assert_eq!(value["outer"][2]["inner"], Value::from(7));
    }

    #[test]
    fn should_return_null_on_const_misses() {
        let mut value = Value::default();
        value[1] = 1.into();
        let view = &value;
        assert!(view[999].is_null());
        assert!(view["missing"].is_null());
        assert!(view[5][2][2][9].is_null());
        assert_eq!(value.size(), 2);

        let mut map = Value::default();
        map["present"] = Value::from(1);
        let view = &map;
        assert!(view["missing"].is_null());
        assert!(view[0].is_null());
        assert_eq!(map.size(), 1);
        assert!(map.is_map());
    }
}
