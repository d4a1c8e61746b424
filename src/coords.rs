//! Coordinate structure used to reference specific locations within parser input

use std::cmp::Ordering;
use std::fmt::{Display, Formatter};

/// A [Coords] represents a single byte location within the parser input
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct Coords {
    /// The absolute byte offset
    pub absolute: usize,
    /// The row position, starting at zero
    pub line: usize,
    /// The column position within the current row, starting at zero
    pub column: usize,
}

impl Coords {
    /// Move the coordinates past a single byte of input. A newline starts a new row.
    pub(crate) fn advance(&mut self, byte: u8) {
        self.absolute += 1;
        if byte == b'\n' {
            self.line += 1;
            self.column = 0;
        } else {
            self.column += 1;
        }
    }
}

impl Display for Coords {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[abs: {}, line: {}, column: {}]",
            self.absolute, self.line, self.column
        )
    }
}

impl PartialOrd<Self> for Coords {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Coords {
    fn cmp(&self, other: &Self) -> Ordering {
        self.absolute.cmp(&other.absolute)
    }
}

#[cfg(test)]
mod tests {
    use crate::coords::Coords;

    #[test]
    fn should_track_lines_and_columns() {
        let mut coords = Coords::default();
        for b in b"ab\ncd" {
            coords.advance(*b);
        }
        assert_eq!(coords.absolute, 5);
        assert_eq!(coords.line, 1);
        assert_eq!(coords.column, 2);
    }

    #[test]
    fn should_order_by_absolute_position() {
        let first = Coords {
            absolute: 3,
            line: 1,
            column: 0,
        };
        let second = Coords {
            absolute: 4,
            line: 0,
            column: 4,
        };
        assert!(first < second);
        assert_eq!(format!("{first}"), "[abs: 3, line: 1, column: 0]");
    }
}
