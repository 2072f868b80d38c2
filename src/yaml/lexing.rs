//! Lexer
//!
//! Turns a text snapshot into classified lines for the structure parser.
//!
//! The pipeline is:
//! 1. Split the source into lines, keeping absolute byte offsets ([lines])
//! 2. Tokenize each line with a logos lexer ([tokens])
//! 3. Classify each line from its tokens ([line_classification])
//!
//! Indentation Handling
//!
//!     Indentation is the number of leading space or tab characters of a line. There is no
//!     tab expansion: a tab counts as one column, the same as a space. Unlike a full YAML
//!     lexer no indent/dedent tokens are produced; the structure parser compares raw indent
//!     levels against its stack of open keys instead.

pub mod line_classification;
pub mod lines;
pub mod tokens;

pub use line_classification::{classify_line, ClassifiedLine, KeyToken, LineType};
pub use lines::{split_lines, SourceLine};
pub use tokens::{tokenize_line, Token};
