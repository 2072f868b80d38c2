//! Offset-based node lookup
//!
//! Editor features ask "which node is the cursor in?" for every keystroke, so lookups descend
//! the tree with a binary search over each level's children instead of visiting every node.

use super::node::{Node, YamlStructure};

impl<'a> Node<'a> {
    /// Whether `offset` lies in this node's span `[start, tree_end)`.
    ///
    /// The end of the document is the one exception to the exclusive end: it belongs to the
    /// nodes whose span reaches it, so that a cursor placed after the last character still
    /// resolves to a node.
    pub fn contains(&self, offset: usize) -> bool {
        let doc_len = self.structure().len();
        self.start() <= offset
            && (offset < self.tree_end() || (offset == doc_len && self.tree_end() == doc_len))
    }

    /// The deepest node under (or equal to) this one whose span contains `offset`.
    ///
    /// A boundary shared by two siblings belongs to the later one. Offsets past the end of
    /// the document are clamped to its length. If `offset` is outside this node's span the
    /// node itself is returned.
    pub fn find(&self, offset: usize) -> Node<'a> {
        let tree = self.structure();
        let offset = offset.min(tree.len());
        let mut current = *self;

        loop {
            let children = current.child_ids();
            let after = children.partition_point(|&id| tree.get(id).start() <= offset);
            if after == 0 {
                return current;
            }
            let candidate = tree.get(children[after - 1]);
            if !candidate.contains(offset) {
                return current;
            }
            current = candidate;
        }
    }
}

/// The chain of nodes containing `offset`, deepest first, ending with the root.
pub fn nodes_at_offset(structure: &YamlStructure, offset: usize) -> Vec<Node<'_>> {
    let deepest = structure.find(offset);
    std::iter::once(deepest).chain(deepest.ancestors()).collect()
}

/// Format information about the nodes at a given offset
pub fn format_at_offset(structure: &YamlStructure, offset: usize) -> String {
    nodes_at_offset(structure, offset)
        .iter()
        .map(|node| {
            format!(
                "- {}({}) [{}..{}]: {}",
                node.kind().name(),
                node.dump_indent(),
                node.start(),
                node.tree_end(),
                node.text()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
