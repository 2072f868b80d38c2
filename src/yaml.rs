//! YAML structure
//!
//! A lightweight, error-tolerant structure parser for YAML-like text, and a path layer on
//! top of it. The parser recovers the block skeleton of a document from indentation and
//! `key:` lines alone, so it works on every snapshot of a buffer an editor may hold, valid
//! YAML or not.
//!
//! Modules
//!
//!     - [lexing]: line splitting, logos tokens and line classification
//!     - [structure]: the structure tree, its parser and offset lookup
//!     - [path]: key paths over the tree and their dotted string syntax
//!     - [range]: byte offset to line/column conversion
//!     - [formats]: dump, treeviz and json renderings of a tree
//!     - [config]: layered TOML configuration for the tooling
//!     - [testing]: sample documents and assertions for tests

pub mod config;
pub mod error;
pub mod formats;
pub mod lexing;
pub mod path;
pub mod range;
pub mod structure;
pub mod testing;
