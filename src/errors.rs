//! General error types for the parser
//!
//! Every failure raised while parsing carries a [ParserErrorDetails] describing what went wrong,
//! along with the [Coords] at which it was detected. Each detail belongs to exactly one
//! [ParserErrorKind]: either the input ran out whilst the grammar still needed more bytes, or the
//! bytes present were not acceptable at that position.

use std::fmt::{Display, Formatter};

use crate::coords::Coords;

/// Global result type used throughout the parser
pub type ParserResult<T> = Result<T, ParserError>;

/// The two broad classes of parser failure
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ParserErrorKind {
    /// The input was exhausted whilst the grammar still required more bytes
    EndOfInput,
    /// A byte sequence violated the grammar at the current position
    InvalidInput,
}

impl Display for ParserErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ParserErrorKind::EndOfInput => write!(f, "unexpected end of input"),
            ParserErrorKind::InvalidInput => write!(f, "invalid input"),
        }
    }
}

/// A global enumeration of error details
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParserErrorDetails {
    /// Ran out of input before a value was complete
    EndOfInput,
    /// A `null`, `true` or `false` literal didn't match
    InvalidLiteral(&'static str),
    /// A byte which can't begin (or continue) anything at this position
    UnexpectedByte(u8),
    /// A raw control byte found inside a string literal
    ControlCharacterInString(u8),
    /// A numeric literal with a misplaced sign, period or exponent marker
    InvalidNumericRepresentation(String),
    /// A map key that doesn't start with a double quote
    InvalidKey(u8),
    /// Arrays and maps nested deeper than the configured limit
    NestingTooDeep(usize),
}

impl ParserErrorDetails {
    /// Classify the detail as one of the two [ParserErrorKind]s
    pub fn kind(&self) -> ParserErrorKind {
        match self {
            ParserErrorDetails::EndOfInput => ParserErrorKind::EndOfInput,
            _ => ParserErrorKind::InvalidInput,
        }
    }
}

impl Display for ParserErrorDetails {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ParserErrorDetails::EndOfInput => write!(f, "unexpected end of input"),
            ParserErrorDetails::InvalidLiteral(expected) => {
                write!(f, "invalid literal, expected '{expected}'")
            }
            ParserErrorDetails::UnexpectedByte(b) => {
                write!(f, "unexpected byte {:?}", char::from(*b))
            }
            ParserErrorDetails::ControlCharacterInString(b) => {
                write!(f, "control character 0x{b:02x} found in string")
            }
            ParserErrorDetails::InvalidNumericRepresentation(text) => {
                write!(f, "invalid numeric representation '{text}'")
            }
            ParserErrorDetails::InvalidKey(b) => {
                write!(f, "expected a string key, found {:?}", char::from(*b))
            }
            ParserErrorDetails::NestingTooDeep(limit) => {
                write!(f, "nesting exceeds the limit of {limit}")
            }
        }
    }
}

/// The general error structure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserError {
    /// The error detail
    pub details: ParserErrorDetails,
    /// Optional parser coordinates
    pub coords: Option<Coords>,
}

impl ParserError {
    /// The [ParserErrorKind] this error belongs to
    pub fn kind(&self) -> ParserErrorKind {
        self.details.kind()
    }

    /// True if the parse failed because the input ran out
    pub fn is_end_of_input(&self) -> bool {
        self.kind() == ParserErrorKind::EndOfInput
    }

    /// True if the parse failed because of a grammar violation
    pub fn is_invalid_input(&self) -> bool {
        self.kind() == ParserErrorKind::InvalidInput
    }
}

impl Display for ParserError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.coords {
            Some(coords) => write!(f, "{} at {}", self.details, coords),
            None => write!(f, "{}", self.details),
        }
    }
}

impl std::error::Error for ParserError {}

/// Helper macro for cooking up parser errors
#[macro_export]
macro_rules! parser_error {
    ($details: expr, $coords: expr) => {
        Err($crate::errors::ParserError {
            details: $details,
            coords: Some($coords),
        })
    };
    ($details: expr) => {
        Err($crate::errors::ParserError {
            details: $details,
            coords: None,
        })
    };
}
