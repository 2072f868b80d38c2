//! # yaml-structure
//!
//! Error-tolerant structure parsing for YAML-like text, built for editor tooling: map a
//! cursor offset to the key it is under, resolve `a.b.c` style property paths, and get
//! the exact text range of any key's subtree.
//!
//! ```rust-example
//! use yaml_structure::{parse, YamlPath};
//!
//! let structure = parse("server:\n  port: 8080\n");
//! let port = "server.port".parse::<YamlPath>()?.traverse(structure.root());
//! ```
//!
//! ## Testing
//!
//! Shared sample documents and fluent tree assertions live in the
//! [testing module](yaml::testing).

pub mod yaml;

pub use yaml::path::{path_of, YamlPath, YamlPathSegment};
pub use yaml::structure::{parse, Node, NodeId, NodeKind, YamlStructure};
