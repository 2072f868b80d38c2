//! Position tracking for source code locations
//!
//! The tree works with byte offsets; editors and humans talk in lines and columns. This
//! module converts between the two.
//!
//! - [`Position`] - A zero-based line:column position (columns are byte columns)
//! - [`SourceLocation`] - Utility for converting between byte offsets and positions
//!
//! Conversion is O(log n) in the number of lines (binary search over line starts).

use crate::yaml::error::PositionLookupError;
use std::fmt;

/// Represents a position in source code (line and column)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Provides fast conversion between byte offsets and line/column positions
pub struct SourceLocation {
    /// Byte offsets where each line starts
    line_starts: Vec<usize>,
    len: usize,
}

impl SourceLocation {
    /// Create a new SourceLocation from source code
    pub fn new(source: &str) -> Self {
        let mut line_starts = vec![0];

        for (byte_pos, ch) in source.char_indices() {
            if ch == '\n' {
                line_starts.push(byte_pos + 1);
            }
        }

        Self {
            line_starts,
            len: source.len(),
        }
    }

    /// Convert a byte offset to a line/column position. Offsets past the end are clamped.
    pub fn byte_to_position(&self, byte_offset: usize) -> Position {
        let byte_offset = byte_offset.min(self.len);
        let line = self
            .line_starts
            .binary_search(&byte_offset)
            .unwrap_or_else(|i| i - 1);

        let column = byte_offset - self.line_starts[line];

        Position::new(line, column)
    }

    /// Convert a position back to a byte offset.
    ///
    /// The column may point at the line terminator (one past the last character of the
    /// line) but not beyond it.
    pub fn position_to_byte(&self, position: Position) -> Option<usize> {
        let line_start = self.line_start(position.line)?;
        let line_limit = match self.line_start(position.line + 1) {
            Some(next) => next - 1,
            None => self.len,
        };
        let offset = line_start + position.column;
        (offset <= line_limit).then_some(offset)
    }

    /// Resolve a user-supplied location: either a byte offset (`42`) or a zero-based
    /// `line:column` pair (`3:4`).
    pub fn resolve(&self, input: &str) -> Result<usize, PositionLookupError> {
        let input = input.trim();
        let parse_number = |s: &str| {
            s.trim()
                .parse::<usize>()
                .map_err(|_| PositionLookupError::InvalidPositionFormat(input.to_string()))
        };

        match input.split_once(':') {
            Some((line, column)) => {
                let position = Position::new(parse_number(line)?, parse_number(column)?);
                self.position_to_byte(position)
                    .ok_or(PositionLookupError::OutOfRange {
                        line: position.line,
                        column: position.column,
                    })
            }
            None => {
                let offset = parse_number(input)?;
                if offset > self.len {
                    let position = self.byte_to_position(self.len);
                    return Err(PositionLookupError::OutOfRange {
                        line: position.line,
                        column: position.column + (offset - self.len),
                    });
                }
                Ok(offset)
            }
        }
    }

    /// Get the total number of lines in the source
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Get the byte offset for the start of a line
    pub fn line_start(&self, line: usize) -> Option<usize> {
        self.line_starts.get(line).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_byte_to_position_multiline() {
        let loc = SourceLocation::new("Hello\nworld\ntest");

        assert_eq!(loc.byte_to_position(0), Position::new(0, 0));
        assert_eq!(loc.byte_to_position(5), Position::new(0, 5));
        assert_eq!(loc.byte_to_position(6), Position::new(1, 0));
        assert_eq!(loc.byte_to_position(10), Position::new(1, 4));
        assert_eq!(loc.byte_to_position(12), Position::new(2, 0));
        assert_eq!(loc.byte_to_position(15), Position::new(2, 3));
    }

    #[test]
    fn test_byte_to_position_clamps() {
        let loc = SourceLocation::new("ab");
        assert_eq!(loc.byte_to_position(99), Position::new(0, 2));
    }

    #[test]
    fn test_position_to_byte() {
        let loc = SourceLocation::new("a:\n  b: 1\n");
        assert_eq!(loc.position_to_byte(Position::new(1, 2)), Some(5));
        // the newline position is addressable
        assert_eq!(loc.position_to_byte(Position::new(0, 2)), Some(2));
        assert_eq!(loc.position_to_byte(Position::new(0, 3)), None);
        assert_eq!(loc.position_to_byte(Position::new(2, 0)), Some(10));
        assert_eq!(loc.position_to_byte(Position::new(3, 0)), None);
    }

    #[test]
    fn test_resolve_offset_and_line_column() {
        let loc = SourceLocation::new("a:\n  b: 1\n");
        assert_eq!(loc.resolve("7"), Ok(7));
        assert_eq!(loc.resolve("1:4"), Ok(7));
        assert_eq!(
            loc.resolve("x:1"),
            Err(PositionLookupError::InvalidPositionFormat("x:1".to_string()))
        );
        assert_eq!(
            loc.resolve("9:0"),
            Err(PositionLookupError::OutOfRange { line: 9, column: 0 })
        );
        assert!(matches!(
            loc.resolve("11"),
            Err(PositionLookupError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_line_count_and_starts() {
        let loc = SourceLocation::new("Hello\nWorld\nTest");
        assert_eq!(loc.line_count(), 3);
        assert_eq!(loc.line_start(1), Some(6));
        assert_eq!(loc.line_start(3), None);
    }
}
