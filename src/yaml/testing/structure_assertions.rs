//! Fluent assertion API for structure trees

use crate::yaml::structure::{Node, YamlStructure};

/// Create an assertion builder for the root of a parsed tree
pub fn assert_structure(structure: &YamlStructure) -> NodeAssertion<'_> {
    NodeAssertion {
        node: structure.root(),
        context: "root".to_string(),
    }
}

pub struct NodeAssertion<'a> {
    node: Node<'a>,
    context: String,
}

impl<'a> NodeAssertion<'a> {
    /// Assert the node is a key node with the given key
    pub fn is_key(self, expected: &str) -> Self {
        assert_eq!(
            self.node.key(),
            Some(expected),
            "{}: Expected key node '{}', found {}",
            self.context,
            expected,
            self.node.dump().lines().next().unwrap_or_default()
        );
        self
    }

    /// Assert the node is a real raw node whose text is `expected`
    pub fn is_raw(self, expected: &str) -> Self {
        assert!(
            self.node.is_raw() && self.node.is_real(),
            "{}: Expected raw node, found {}",
            self.context,
            self.node.kind().name()
        );
        assert_eq!(self.node.text(), expected, "{}: raw text", self.context);
        self
    }

    /// Assert the node is a comment or blank line
    pub fn is_unreal(self) -> Self {
        assert!(
            !self.node.is_real(),
            "{}: Expected comment or blank line, found {:?}",
            self.context,
            self.node.text()
        );
        self
    }

    pub fn indent(self, expected: i32) -> Self {
        assert_eq!(
            self.node.indent(),
            expected,
            "{}: Expected indent {}, found {}",
            self.context,
            expected,
            self.node.indent()
        );
        self
    }

    pub fn child_count(self, expected: usize) -> Self {
        let actual = self.node.child_count();
        assert_eq!(
            actual,
            expected,
            "{}: Expected {} children, found {}:\n{}",
            self.context,
            expected,
            actual,
            self.node.dump()
        );
        self
    }

    /// Assert the text between the node's start and its tree end
    pub fn tree_text(self, expected: &str) -> Self {
        assert_eq!(
            self.node.tree_text(),
            expected,
            "{}: tree text",
            self.context
        );
        self
    }

    /// Assert on a specific child by index
    pub fn child<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(NodeAssertion<'a>),
    {
        let child = self.node.child(index).unwrap_or_else(|| {
            panic!(
                "{}: Child index {} out of bounds (node has {} children)",
                self.context,
                index,
                self.node.child_count()
            )
        });
        assertion(NodeAssertion {
            node: child,
            context: format!("{}:children[{}]", self.context, index),
        });
        self
    }

    /// Assert on the child with the given key
    pub fn child_with_key<F>(self, key: &str, assertion: F) -> Self
    where
        F: FnOnce(NodeAssertion<'a>),
    {
        let child = self.node.child_with_key(key).unwrap_or_else(|| {
            panic!("{}: No child with key '{}':\n{}", self.context, key, self.node.dump())
        });
        assertion(NodeAssertion {
            node: child,
            context: format!("{}[{}]", self.context, key),
        });
        self
    }
}
