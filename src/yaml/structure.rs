//! Structure tree for YAML-like text
//!
//!     The structure tree is the block skeleton of a document: which lines are keys, which
//!     lines are nested under which key, and how far each key's subtree extends. It is not a
//!     YAML data model. Anchors, tags, flow collections and multi-document streams are not
//!     recognized; anything that is not a `key:` line is kept as a raw leaf line.
//!
//!     Every line of the input becomes exactly one node, so the tree maps back to the exact
//!     text ranges an editor needs for hovers, completions and navigation, even for
//!     documents that are half-typed or not valid YAML at all.
//!
//! Node kinds
//!
//!     - Root: the unique entry point, spanning the whole document
//!     - Key: a `key:` line (optionally with an inline value) and its nested lines
//!     - Raw: a leaf line. Comment and blank lines are raw nodes with indent -1; they are
//!       "unreal" and skipped by structural navigation such as
//!       [`Node::first_real_child`].
//!
//! Offsets
//!
//!     All offsets are byte offsets. A node's `start` is the start of its line, indentation
//!     included, and its `tree_end` is the exclusive end of its subtree. See
//!     [`Node::find`] for how offsets are mapped back to nodes.

pub mod lookup;
pub mod node;
pub mod parser;
pub mod snapshot;

pub use lookup::{format_at_offset, nodes_at_offset};
pub use node::{Node, NodeId, NodeKind, YamlStructure, UNREAL_INDENT};
pub use parser::parse;
pub use snapshot::StructureSnapshot;
