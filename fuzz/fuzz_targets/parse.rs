//! Arbitrary bytes must either parse or fail with one of the two error kinds. Anything that
//! parses into finite numbers must survive a trip through the serializer unchanged.

#![no_main]

use libfuzzer_sys::fuzz_target;

use aeon_json::{parse_bytes, serialize, ParserErrorKind, Value};

fn is_finite(value: &Value) -> bool {
    match value {
        Value::Float(f) => f.is_finite(),
        Value::Array(a) => a.iter().all(is_finite),
        Value::Map(m) => m.values().all(is_finite),
        _ => true,
    }
}

fuzz_target!(|data: &[u8]| {
    match parse_bytes(data) {
        Ok(value) if is_finite(&value) => {
            let text = serialize(&value);
            let reparsed = parse_bytes(&text).expect("serialized output must parse");
            assert_eq!(reparsed, value);
        }
        Ok(_) => (),
        Err(err) => assert!(matches!(
            err.kind(),
            ParserErrorKind::EndOfInput | ParserErrorKind::InvalidInput
        )),
    }
});
