//! The recursive-descent JSON parser
//!
//! Parsing is a single forward pass over the input bytes. Between values (and inside arrays and
//! maps) whitespace, commas and colons are all skipped as filler, so separators aren't checked
//! and input such as `[1,,2]` or `{"a" 1}` is accepted. Only the first value in the input is
//! consumed; anything after it is ignored.
//!
//! Failures come in two kinds (see [crate::errors::ParserErrorKind]): running out of input whilst
//! a value is still incomplete, or finding bytes that can't appear at the current position.
use std::str::FromStr;

use crate::coercions::{leading_float, leading_integer};
use crate::errors::{ParserError, ParserErrorDetails, ParserResult};
use crate::parser_error;
use crate::scanner::Scanner;
use crate::value::{Array, ByteString, Map, Value};

/// Default limit on how deeply arrays and maps may nest
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// Default string buffer capacity
const DEFAULT_BUFFER_CAPACITY: usize = 64;

/// Main JSON parser struct
#[derive(Debug, Copy, Clone)]
pub struct Parser {
    /// The maximum nesting depth of arrays and maps
    max_depth: usize,
}

impl Default for Parser {
    /// The default nesting limit is [DEFAULT_MAX_DEPTH]
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl Parser {
    /// Create a new instance of the parser with a specific nesting limit
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self { max_depth }
    }

    /// The maximum nesting depth this parser accepts
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Parse the first value found in a byte slice
    pub fn parse_bytes(&self, bytes: &[u8]) -> ParserResult<Value> {
        let mut scanner = Scanner::new(bytes);
        self.parse_value(&mut scanner, 0)
    }

    /// Parse the first value found in a string slice
    pub fn parse_str(&self, str: &str) -> ParserResult<Value> {
        self.parse_bytes(str.as_bytes())
    }

    /// Skip any filler and then dispatch on the first significant byte. `depth` is the number of
    /// enclosing arrays and maps.
    fn parse_value(&self, scanner: &mut Scanner, depth: usize) -> ParserResult<Value> {
        match scanner.skip_filler()? {
            b'n' => self.match_literal(scanner, b"null", Value::Null),
            b't' => self.match_literal(scanner, b"true", Value::Bool(true)),
            b'f' => self.match_literal(scanner, b"false", Value::Bool(false)),
            b'-' | b'0'..=b'9' => self.parse_number(scanner),
            b'"' => self.parse_string(scanner).map(Value::String),
            b'[' => self.parse_array(scanner, depth + 1),
            b'{' => self.parse_map(scanner, depth + 1),
            unknown => parser_error!(ParserErrorDetails::UnexpectedByte(unknown), scanner.coords()),
        }
    }

    /// Match (exactly) one of the fixed literals
    fn match_literal(
        &self,
        scanner: &mut Scanner,
        literal: &'static [u8],
        value: Value,
    ) -> ParserResult<Value> {
        if scanner.remaining() < literal.len() {
            return parser_error!(ParserErrorDetails::EndOfInput, scanner.coords());
        }
        if !scanner.rest().starts_with(literal) {
            return parser_error!(
                ParserErrorDetails::InvalidLiteral(literal_name(literal)),
                scanner.coords()
            );
        }
        scanner.discard(literal.len());
        Ok(value)
    }

    /// Scan a numeric literal. Digits are accepted along with at most one period and at most one
    /// exponent marker; a sign may only lead the literal or directly follow the exponent marker.
    /// The literal is a float if it has a period or an exponent, otherwise an integer.
    fn parse_number(&self, scanner: &mut Scanner) -> ParserResult<Value> {
        let rest = scanner.rest();
        let mut period = false;
        let mut exponent: Option<usize> = None;
        let mut length = 0;

        while let Some(&byte) = rest.get(length) {
            let valid = match byte {
                b'0'..=b'9' => true,
                b'.' if period => false,
                b'.' => {
                    period = true;
                    true
                }
                b'e' | b'E' if exponent.is_some() => false,
                b'e' | b'E' => {
                    exponent = Some(length);
                    true
                }
                b'+' | b'-' => length == 0 || exponent.is_some_and(|e| length == e + 1),
                _ => break,
            };
            if !valid {
                let text = String::from_utf8_lossy(&rest[..=length]).into_owned();
                scanner.discard(length);
                return parser_error!(
                    ParserErrorDetails::InvalidNumericRepresentation(text),
                    scanner.coords()
                );
            }
            length += 1;
        }

        if length == 0 {
            return parser_error!(ParserErrorDetails::EndOfInput, scanner.coords());
        }

        let text = &rest[..length];
        scanner.discard(length);
        if period || exponent.is_some() {
            Ok(Value::Float(leading_float(text)))
        } else {
            Ok(Value::Integer(leading_integer(text)))
        }
    }

    /// Parse a string literal, starting at its opening quote. `\b \f \n \r \t` decode to their
    /// control bytes and `\\` and `\"` yield the escaped byte; any other escaped byte, including
    /// `u`, is kept literally. All other bytes are copied verbatim, with no encoding checks.
    fn parse_string(&self, scanner: &mut Scanner) -> ParserResult<ByteString> {
        scanner.discard(1);
        let mut buffer: ByteString = Vec::with_capacity(DEFAULT_BUFFER_CAPACITY);

        loop {
            let byte = next_string_byte(scanner)?;
            match byte {
                b'"' => break,
                b'\\' => {
                    let escaped = next_string_byte(scanner)?;
                    buffer.push(match escaped {
                        b'b' => 0x08,
                        b'f' => 0x0c,
                        b'n' => b'\n',
                        b'r' => b'\r',
                        b't' => b'\t',
                        other => other,
                    });
                }
                other => buffer.push(other),
            }
        }
        Ok(buffer)
    }

    /// An array is just a list of filler separated values
    fn parse_array(&self, scanner: &mut Scanner, depth: usize) -> ParserResult<Value> {
        self.check_depth(scanner, depth)?;
        scanner.discard(1);
        let mut values: Array = vec![];
        loop {
            match scanner.skip_filler()? {
                b']' => {
                    scanner.discard(1);
                    return Ok(Value::Array(values));
                }
                _ => values.push(self.parse_value(scanner, depth)?),
            }
        }
    }

    /// A map is just a list of filler separated key/value pairs. Later duplicates of a key
    /// overwrite earlier ones.
    fn parse_map(&self, scanner: &mut Scanner, depth: usize) -> ParserResult<Value> {
        self.check_depth(scanner, depth)?;
        scanner.discard(1);
        let mut pairs = Map::new();
        loop {
            match scanner.skip_filler()? {
                b'}' => {
                    scanner.discard(1);
                    return Ok(Value::Map(pairs));
                }
                b'"' => {
                    let key = self.parse_string(scanner)?;
                    let value = self.parse_value(scanner, depth)?;
                    pairs.insert(key, value);
                }
                unknown => {
                    return parser_error!(ParserErrorDetails::InvalidKey(unknown), scanner.coords())
                }
            }
        }
    }

    fn check_depth(&self, scanner: &Scanner, depth: usize) -> ParserResult<()> {
        if depth > self.max_depth {
            return parser_error!(
                ParserErrorDetails::NestingTooDeep(self.max_depth),
                scanner.coords()
            );
        }
        Ok(())
    }
}

/// Consume a single byte from within a string literal. Raw control bytes are rejected.
fn next_string_byte(scanner: &mut Scanner) -> ParserResult<u8> {
    match scanner.peek() {
        Some(byte) if byte < 0x20 => parser_error!(
            ParserErrorDetails::ControlCharacterInString(byte),
            scanner.coords()
        ),
        _ => scanner.consume(),
    }
}

fn literal_name(literal: &'static [u8]) -> &'static str {
    match literal {
        b"null" => "null",
        b"true" => "true",
        _ => "false",
    }
}

/// Parse the first value in a string slice using the default [Parser]
pub fn parse(text: &str) -> ParserResult<Value> {
    Parser::default().parse_str(text)
}

/// Parse the first value in a byte slice using the default [Parser]
pub fn parse_bytes(bytes: &[u8]) -> ParserResult<Value> {
    Parser::default().parse_bytes(bytes)
}

impl Value {
    /// Parse a value from JSON text, given as a `str` or as raw bytes
    pub fn deserialize_json<T: AsRef<[u8]>>(text: T) -> ParserResult<Value> {
        parse_bytes(text.as_ref())
    }
}

impl FromStr for Value {
    type Err = ParserError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}
