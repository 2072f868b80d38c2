//! Structure snapshot
//!
//! An owned, serializable copy of a structure tree. Snapshots compare structurally, so two
//! parses of the same text produce equal snapshots even though their [`Node`] handles are
//! never equal across trees.

use super::node::{Node, YamlStructure};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructureSnapshot {
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    pub indent: i32,
    pub start: usize,
    pub node_end: usize,
    pub tree_end: usize,
    pub text: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<StructureSnapshot>,
}

impl StructureSnapshot {
    /// Snapshot the subtree rooted at `node`
    pub fn from_node(node: Node<'_>) -> Self {
        Self {
            kind: node.kind().name().to_string(),
            key: node.key().map(str::to_string),
            indent: node.indent(),
            start: node.start(),
            node_end: node.node_end(),
            tree_end: node.tree_end(),
            text: node.text().to_string(),
            children: node.children().map(Self::from_node).collect(),
        }
    }

    /// Total number of nodes in this snapshot
    pub fn node_count(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(StructureSnapshot::node_count)
            .sum::<usize>()
    }
}

impl YamlStructure {
    pub fn snapshot(&self) -> StructureSnapshot {
        StructureSnapshot::from_node(self.root())
    }
}
