//! Output formats for structure trees
//!
//! - `dump`: the `KIND(indent): text` listing, one node per line, two spaces per level
//! - `treeviz`: box-drawing tree of keys and lines
//! - `json`: the serialized [`StructureSnapshot`](crate::yaml::structure::StructureSnapshot)

pub mod dump;
pub mod treeviz;

use crate::yaml::config::InspectConfig;
use crate::yaml::structure::YamlStructure;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub use dump::{to_dump_str, DumpOptions};
pub use treeviz::to_treeviz_str;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    Dump,
    Treeviz,
    Json,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 3] = [OutputFormat::Dump, OutputFormat::Treeviz, OutputFormat::Json];

    pub fn name(&self) -> &'static str {
        match self {
            OutputFormat::Dump => "dump",
            OutputFormat::Treeviz => "treeviz",
            OutputFormat::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OutputFormat {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OutputFormat::ALL
            .into_iter()
            .find(|format| format.name() == s)
            .ok_or_else(|| FormatError::UnknownFormat(s.to_string()))
    }
}

#[derive(Debug, Error)]
pub enum FormatError {
    #[error("Unknown output format '{0}' (expected one of: dump, treeviz, json)")]
    UnknownFormat(String),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Render `structure` in the format selected by `config`.
pub fn render(structure: &YamlStructure, config: &InspectConfig) -> Result<String, FormatError> {
    match config.format {
        OutputFormat::Dump => Ok(to_dump_str(
            structure.root(),
            &DumpOptions {
                show_offsets: config.show_offsets,
                truncate: config.truncate,
            },
        )),
        OutputFormat::Treeviz => Ok(to_treeviz_str(structure, config.truncate)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&structure.snapshot())? + "\n"),
    }
}

/// Shorten `s` to at most `max_chars` characters (0 disables truncation)
pub(crate) fn truncate(s: &str, max_chars: usize) -> String {
    if max_chars > 0 && s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        truncated
    } else {
        s.to_string()
    }
}
