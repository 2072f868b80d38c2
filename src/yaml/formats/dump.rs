//! Dump formatter
//!
//! The canonical textual form of a structure tree:
//!
//! ```text
//! ROOT(0): 
//!   KEY(0): hello:
//!     KEY(2): world:
//!       RAW(4): message
//!       RAW(-1): 
//! ```
//!
//! [`Node::dump`] renders exactly this; [`to_dump_str`] adds optional offsets and
//! truncation for inspecting large documents.

use super::truncate;
use crate::yaml::structure::Node;

#[derive(Debug, Clone, Default)]
pub struct DumpOptions {
    /// Append `[start..tree_end]` to every node
    pub show_offsets: bool,
    /// Maximum characters of line text to show (0 shows everything)
    pub truncate: usize,
}

pub fn to_dump_str(node: Node<'_>, options: &DumpOptions) -> String {
    let mut result = String::new();
    append_node(&mut result, node, 0, options);
    result
}

fn append_node(result: &mut String, node: Node<'_>, depth: usize, options: &DumpOptions) {
    result.push_str(&"  ".repeat(depth));
    result.push_str(&format!("{}({})", node.kind().name(), node.dump_indent()));
    if options.show_offsets {
        result.push_str(&format!("[{}..{}]", node.start(), node.tree_end()));
    }
    result.push_str(": ");
    result.push_str(&truncate(node.text(), options.truncate));
    result.push('\n');

    for child in node.children() {
        append_node(result, child, depth + 1, options);
    }
}
