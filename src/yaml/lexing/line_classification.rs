//! Line Classification
//!
//! Core classification logic for determining line types based on token patterns.
//!
//! Classification follows this order:
//! 1. Blank lines (only whitespace)
//! 2. Comment lines (first non-whitespace token is `#`)
//! 3. Key lines (`<indent><key>:` with the colon followed by whitespace or end of line)
//! 4. Default to raw line (list items, continuations, malformed lines)

use super::tokens::{tokenize_line, Token};
use logos::Span;
use std::ops::Range;

/// The type of a source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineType {
    KeyLine(KeyToken),
    RawLine,
    CommentLine,
    BlankLine,
}

/// The key of a key line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyToken {
    /// Unescaped key text
    pub key: String,
    /// Span of the key as written (quotes included), relative to the line start
    pub span: Range<usize>,
}

/// A line together with its indentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedLine {
    /// Number of leading space/tab columns (tabs count as one column)
    pub indent: usize,
    pub line_type: LineType,
}

/// Classify the content of one line (without its terminator).
pub fn classify_line(line: &str) -> ClassifiedLine {
    let tokens = tokenize_line(line);

    let (indent, content) = match tokens.split_first() {
        Some(((Token::Whitespace, span), rest)) => (span.end, rest),
        _ => (0, tokens.as_slice()),
    };

    let line_type = match content.first() {
        None => LineType::BlankLine,
        Some((Token::Hash, _)) => LineType::CommentLine,
        Some(_) => match key_token(line, content) {
            Some(key) => LineType::KeyLine(key),
            None => LineType::RawLine,
        },
    };

    ClassifiedLine { indent, line_type }
}

fn key_token(line: &str, content: &[(Token, Span)]) -> Option<KeyToken> {
    let (first, first_span) = content.first()?;
    if let Some(quote) = first.quote_char() {
        return quoted_key(line, content, quote, first_span.start);
    }
    match first {
        Token::Text => plain_key(line, content),
        // `-foo:` is a key, `- foo:` is a list item
        Token::Dash if matches!(content.get(1), Some((Token::Text, _))) => plain_key(line, content),
        _ => None,
    }
}

/// A quoted scalar at the start of the content followed by the key separator.
fn quoted_key(line: &str, content: &[(Token, Span)], quote: char, start: usize) -> Option<KeyToken> {
    let end = start + quoted_scalar_len(&line[start..], quote)?;
    let after = content
        .iter()
        .position(|(_, span)| span.start >= end)
        .map_or(&content[content.len()..], |i| &content[i..]);
    if !is_key_separator(skip_whitespace(after)) {
        return None;
    }
    Some(KeyToken {
        key: unquote(&line[start..end], quote),
        span: start..end,
    })
}

/// Byte length of the quoted scalar `text` starts with, closing quote included.
///
/// Single-quoted scalars escape a quote by doubling it; double-quoted scalars use
/// backslash escapes. Returns `None` when the scalar is not closed on this line.
fn quoted_scalar_len(text: &str, quote: char) -> Option<usize> {
    let mut chars = text.char_indices().skip(1).peekable();
    while let Some((i, c)) = chars.next() {
        match c {
            '\\' if quote == '"' => {
                chars.next();
            }
            c if c == quote => {
                if quote == '\'' && matches!(chars.peek(), Some((_, '\''))) {
                    chars.next();
                    continue;
                }
                return Some(i + c.len_utf8());
            }
            _ => {}
        }
    }
    None
}

/// Scan a plain key up to the first `:` that separates it from its value.
fn plain_key(line: &str, content: &[(Token, Span)]) -> Option<KeyToken> {
    let start = content.first()?.1.start;

    for (i, (token, span)) in content.iter().enumerate() {
        match token {
            Token::Colon if is_key_separator(&content[i..]) => {
                let key = line[start..span.start].trim_end();
                if key.is_empty() {
                    return None;
                }
                return Some(KeyToken {
                    key: key.to_string(),
                    span: start..start + key.len(),
                });
            }
            // `foo # bar: baz` - the colon is inside a trailing comment
            Token::Hash if i > 0 && content[i - 1].0.is_whitespace() => return None,
            _ => {}
        }
    }

    None
}

/// A colon followed by whitespace or the end of the line
fn is_key_separator(tokens: &[(Token, Span)]) -> bool {
    match tokens {
        [(Token::Colon, _)] => true,
        [(Token::Colon, _), (next, _), ..] => next.is_whitespace(),
        _ => false,
    }
}

fn skip_whitespace(tokens: &[(Token, Span)]) -> &[(Token, Span)] {
    let skip = tokens.iter().take_while(|(t, _)| t.is_whitespace()).count();
    &tokens[skip..]
}

/// Strip the quotes of a quoted scalar and resolve its escapes.
fn unquote(quoted: &str, quote: char) -> String {
    let inner = &quoted[1..quoted.len() - 1];
    match quote {
        '\'' => inner.replace("''", "'"),
        _ => {
            let mut result = String::with_capacity(inner.len());
            let mut chars = inner.chars();
            while let Some(c) = chars.next() {
                if c != '\\' {
                    result.push(c);
                    continue;
                }
                match chars.next() {
                    Some('n') => result.push('\n'),
                    Some('t') => result.push('\t'),
                    Some('0') => result.push('\0'),
                    Some(escaped @ ('"' | '\\' | '/')) => result.push(escaped),
                    Some(other) => {
                        result.push('\\');
                        result.push(other);
                    }
                    None => result.push('\\'),
                }
            }
            result
        }
    }
}
