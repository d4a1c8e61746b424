//! Drives a sequence of accessor, index and coercion calls against a single value. None of them
//! may panic, whatever shape the value is in.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use aeon_json::Value;

#[derive(Debug, Arbitrary)]
enum Op {
    SetBool(bool),
    SetInteger(i64),
    SetFloat(f64),
    SetString(Vec<u8>),
    PushIndex(u8),
    Key(String),
    ReadIndex(u16),
    ReadKey(String),
    Coerce,
    Take,
}

fuzz_target!(|ops: Vec<Op>| {
    let mut root = Value::default();
    let mut path: Vec<Result<usize, String>> = Vec::new();

    for op in ops {
        let mut current = &mut root;
        for step in &path {
            current = match step {
                Ok(i) => &mut current[*i],
                Err(k) => &mut current[k.as_str()],
            };
        }
        match op {
            Op::SetBool(b) => *current.boolean_mut() = b,
            Op::SetInteger(i) => *current.integer_mut() = i,
            Op::SetFloat(f) => *current.floating_mut() = f,
            Op::SetString(s) => *current.string_mut() = s,
            Op::PushIndex(i) => path.push(Ok(i as usize)),
            Op::Key(k) => path.push(Err(k)),
            Op::ReadIndex(i) => {
                let view: &Value = current;
                let _ = view[i as usize].kind();
            }
            Op::ReadKey(k) => {
                let view: &Value = current;
                let _ = view[k.as_str()].size();
            }
            Op::Coerce => {
                let _ = current.as_boolean();
                let _ = current.as_integer();
                let _ = current.as_floating();
                let _ = current.as_string();
            }
            Op::Take => {
                let _ = current.take();
                path.clear();
            }
        }
        if path.len() > 16 {
            path.clear();
        }
    }
    let _ = aeon_json::serialize(&root);
});
