//! A forward-only cursor over the raw input bytes. The scanner is responsible for tracking the
//! current position and its [Coords], and for skipping the filler bytes which separate values.
//! The parser drives it one byte at a time and never backtracks.
//!
//! The current implementation of the scanner is *not* internally thread safe.

use crate::coords::Coords;
use crate::errors::{ParserErrorDetails, ParserResult};
use crate::parser_error;

/// Checks whether a byte is filler. Commas and colons are skipped along with whitespace, so the
/// scanner never checks how values are separated.
#[inline]
pub(crate) fn is_filler(byte: u8) -> bool {
    matches!(byte, b' ' | b'\r' | b'\n' | b'\t' | b',' | b':')
}

/// A byte scanner over an in-memory input. [Scanner::rest] gives unbounded lookahead.
pub(crate) struct Scanner<'a> {
    /// The complete input
    input: &'a [u8],
    /// Offset of the next unconsumed byte
    position: usize,
    /// Coordinates of the next unconsumed byte
    coords: Coords,
}

impl<'a> Scanner<'a> {
    /// Create a new scanner positioned at the start of the input
    pub fn new(input: &'a [u8]) -> Self {
        Scanner {
            input,
            position: 0,
            coords: Coords::default(),
        }
    }

    /// Get the coordinates of the next unconsumed byte
    pub fn coords(&self) -> Coords {
        self.coords
    }

    /// The number of bytes still to be consumed
    pub fn remaining(&self) -> usize {
        self.input.len().saturating_sub(self.position)
    }

    /// Peek at the next byte without consuming it
    pub fn peek(&self) -> Option<u8> {
        self.input.get(self.position).copied()
    }

    /// The unconsumed remainder of the input
    pub fn rest(&self) -> &'a [u8] {
        &self.input[self.position.min(self.input.len())..]
    }

    /// Consume the next byte. Produces an end of input error if there isn't one.
    pub fn consume(&mut self) -> ParserResult<u8> {
        match self.peek() {
            Some(byte) => {
                self.position += 1;
                self.coords.advance(byte);
                Ok(byte)
            }
            None => parser_error!(ParserErrorDetails::EndOfInput, self.coords),
        }
    }

    /// Discard the next `count` bytes, stopping early at the end of the input
    pub fn discard(&mut self, count: usize) {
        for _ in 0..count {
            if self.consume().is_err() {
                break;
            }
        }
    }

    /// Advance over any filler and return the first significant byte without consuming it.
    /// Running out of input whilst doing so is an end of input error.
    pub fn skip_filler(&mut self) -> ParserResult<u8> {
        while let Some(byte) = self.peek() {
            if !is_filler(byte) {
                return Ok(byte);
            }
            self.discard(1);
        }
        parser_error!(ParserErrorDetails::EndOfInput, self.coords)
    }
}

#[cfg(test)]
mod tests {
    use crate::errors::ParserErrorKind;
    use crate::scanner::Scanner;

    #[test]
    fn should_handle_empty_input() {
        let mut scanner = Scanner::new(b"");
        assert_eq!(scanner.remaining(), 0);
        assert_eq!(scanner.peek(), None);
        assert_eq!(
            scanner.consume().unwrap_err().kind(),
            ParserErrorKind::EndOfInput
        );
    }

    #[test]
    fn should_skip_filler() {
        let mut scanner = Scanner::new(b" ,\r\n\t: x ");
        assert_eq!(scanner.skip_filler().unwrap(), b'x');
        assert_eq!(scanner.coords().absolute, 7);
        assert_eq!(scanner.coords().line, 1);
        assert_eq!(scanner.coords().column, 3);
        scanner.discard(1);
        assert_eq!(
            scanner.skip_filler().unwrap_err().kind(),
            ParserErrorKind::EndOfInput
        );
    }

    #[test]
    fn should_look_at_the_rest_without_consuming() {
        let mut scanner = Scanner::new(b"null");
        assert_eq!(scanner.rest(), b"null");
        assert_eq!(scanner.remaining(), 4);
        assert_eq!(scanner.consume().unwrap(), b'n');
        assert_eq!(scanner.rest(), b"ull");
        assert_eq!(scanner.peek(), Some(b'u'));
        scanner.discard(10);
        assert_eq!(scanner.peek(), None);
        assert_eq!(scanner.remaining(), 0);
        assert!(scanner.rest().is_empty());
    }
}
