//! Dotted path syntax
//!
//! Grammar:
//!
//! ```text
//! <path>    = "" | <segment> ("." <segment>)*
//! <segment> = <plain> | <quoted>
//! <plain>   = any characters except "." and "\"", at least one
//! <quoted>  = "\"" (<char> | "\\" ("\"" | "\\" | "n" | "t"))* "\""
//! ```
//!
//! The empty string is the empty path (the node traversal starts from).

use super::YamlPath;
use crate::yaml::error::PathParseError;
use chumsky::prelude::*;

fn path_parser() -> impl Parser<char, Vec<String>, Error = Simple<char>> {
    let escape = just('\\').ignore_then(choice((
        just('"'),
        just('\\'),
        just('n').to('\n'),
        just('t').to('\t'),
    )));

    let quoted = just('"')
        .ignore_then(
            filter(|c: &char| *c != '"' && *c != '\\')
                .or(escape)
                .repeated(),
        )
        .then_ignore(just('"'))
        .collect::<String>();

    let plain = filter(|c: &char| *c != '.' && *c != '"')
        .repeated()
        .at_least(1)
        .collect::<String>();

    quoted
        .or(plain)
        .separated_by(just('.'))
        .at_least(1)
        .then_ignore(end())
}

/// Parse a dotted path such as `server.port` or `logging.level."org.example"`.
pub fn parse_path(input: &str) -> Result<YamlPath, PathParseError> {
    if input.is_empty() {
        return Ok(YamlPath::default());
    }

    path_parser()
        .parse(input)
        .map(YamlPath::from_keys)
        .map_err(|errors| match errors.into_iter().next() {
            Some(error) => PathParseError::Syntax {
                column: error.span().start,
                message: error.to_string(),
            },
            None => PathParseError::Syntax {
                column: 0,
                message: "unrecognized path".to_string(),
            },
        })
}
