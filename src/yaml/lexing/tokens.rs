//! Token definitions for a single line of YAML-like text
//!
//! The structure parser only needs to tell keys, comments and list markers apart, so the
//! token set is coarse. Quote characters are single-byte tokens: a quote only opens a
//! quoted scalar at the start of the line content, and line classification scans the
//! scalar from there. Inside a plain key (`o'brien:`) a quote is ordinary text.
use logos::Logos;

/// Tokens produced for the content of one line (line terminators are never tokenized)
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Token {
    // Spaces and tabs. Leading whitespace is the line's indentation.
    #[regex(r"[ \t]+")]
    Whitespace,

    #[token("#")]
    Hash,

    #[token(":")]
    Colon,

    #[token("-")]
    Dash,

    #[token("\"")]
    DoubleQuote,

    #[token("'")]
    SingleQuote,

    // Flow and node indicators: [ ] { } , ? & * ! | > % @ `
    #[regex(r"[\[\]{},?&*!|>%@`]")]
    Indicator,

    // Everything else (catch-all for non-special characters)
    #[regex(r#"[^ \t\r\n:#\-"'\[\]{},?&*!|>%@`]+"#)]
    Text,
}

impl Token {
    pub fn is_whitespace(&self) -> bool {
        matches!(self, Token::Whitespace)
    }

    /// The quote character of a quote token
    pub fn quote_char(&self) -> Option<char> {
        match self {
            Token::DoubleQuote => Some('"'),
            Token::SingleQuote => Some('\''),
            _ => None,
        }
    }
}

/// Tokenize the content of one line, keeping byte spans relative to the line start.
///
/// Characters logos cannot match (a stray `\r`, for instance) are reported as [`Token::Text`]
/// so that no byte of the line is lost.
pub fn tokenize_line(line: &str) -> Vec<(Token, logos::Span)> {
    let mut lexer = Token::lexer(line);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        tokens.push((result.unwrap_or(Token::Text), lexer.span()));
    }

    tokens
}
