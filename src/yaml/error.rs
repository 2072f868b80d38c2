//! Error types
//!
//! Parsing and tree queries never fail; these errors only come from parsing user-supplied
//! strings (paths and positions) at the edges of the library.

use thiserror::Error;

/// Errors that can occur when resolving a position string to an offset
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PositionLookupError {
    /// Invalid position format string
    #[error("Invalid position format: {0}")]
    InvalidPositionFormat(String),
    /// Position does not exist in the document
    #[error("Position {line}:{column} is outside of the document")]
    OutOfRange { line: usize, column: usize },
}

/// Errors that can occur when parsing a dotted yaml path
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathParseError {
    #[error("Invalid path at column {column}: {message}")]
    Syntax { column: usize, message: String },
}
