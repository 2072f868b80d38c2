//! Testing utilities for structure trees
//!
//! - [`samples`]: the shared sample documents used across unit and integration tests
//! - [`assert_structure`]: fluent assertions over a parsed tree
//! - [`node_at_path`]: reach a node by child indices (`&[0, 1]` is the second child of the
//!   first child of the start node)
//!
//! ```rust-example
//! use yaml_structure::yaml::testing::{assert_structure, samples};
//!
//! let structure = parse(samples::WORLD);
//! assert_structure(&structure)
//!     .child_count(2)
//!     .child(0, |world| {
//!         world.is_key("world").child(1, |canada| {
//!             canada.is_key("canada").tree_text("  canada:\n    montreal: poutine\n");
//!         });
//!     });
//! ```

pub mod samples;
mod structure_assertions;

pub use structure_assertions::{assert_structure, NodeAssertion};

use crate::yaml::structure::Node;

/// Follow child indices from `node`. Returns `None` if any index is out of bounds.
pub fn node_at_path<'a>(node: Node<'a>, child_indices: &[usize]) -> Option<Node<'a>> {
    child_indices
        .iter()
        .try_fold(node, |current, &index| current.child(index))
}

/// The child-index path from the root to `node`; the inverse of [`node_at_path`].
pub fn index_path_of(node: Node<'_>) -> Vec<usize> {
    let mut path = Vec::with_capacity(node.depth());
    let mut current = node;
    while let Some(parent) = current.parent() {
        if let Some(index) = parent.children().position(|child| child == current) {
            path.push(index);
        }
        current = parent;
    }
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::yaml::structure::parse;

    #[test]
    fn test_node_at_path() {
        let structure = parse(samples::WORLD);
        let beer = node_at_path(structure.root(), &[0, 0, 1, 0]).unwrap();
        assert_eq!(beer.text(), "beer");
        assert!(node_at_path(structure.root(), &[5]).is_none());
    }

    #[test]
    fn test_index_path_round_trip() {
        let structure = parse(samples::WORLD);
        for node in structure.nodes() {
            let path = index_path_of(node);
            assert_eq!(node_at_path(structure.root(), &path), Some(node));
        }
    }
}
