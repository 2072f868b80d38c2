//! Structure parser
//!
//! Builds the structure tree in a single left-to-right pass over the classified lines.
//!
//! Algorithm
//!
//!     The builder keeps a stack of open child-bearing nodes, starting with the root at
//!     virtual indent -1. For each line:
//!
//!         - Comment and blank lines become unreal raw nodes (indent -1) under the node on top
//!           of the stack. They never open or close a scope.
//!         - A key line closes every open key indented at least as deep as itself, is added
//!           to the new top of the stack and is then pushed, ready to receive children.
//!         - A raw line closes every open key indented strictly deeper than itself and is
//!           added as a leaf. A raw line at the same indent as the open key therefore stays
//!           under that key. This tolerates list items written directly under their key
//!           (`key:\n- item`) and continuation lines that lost their indentation.
//!
//!     Closing a key sets its tree end to the start of the line that closed it. Keys still
//!     open at the end of the input are closed at the document end.
//!
//! The parser never fails: every line of any input ends up in the tree exactly once.

use super::node::{NodeData, NodeId, NodeKind, YamlStructure, UNREAL_INDENT};
use crate::yaml::lexing::{classify_line, split_lines, LineType, SourceLine};
use tracing::{debug, trace};

/// Parse a text snapshot into its structure tree.
pub fn parse(source: impl Into<String>) -> YamlStructure {
    let source = source.into();
    let mut builder = TreeBuilder::new(source.len());

    let lines = split_lines(&source);
    let line_count = lines.len();
    for line in &lines {
        builder.push_line(line);
    }
    let nodes = builder.finish();

    debug!(
        lines = line_count,
        nodes = nodes.len(),
        bytes = source.len(),
        "parsed yaml structure"
    );
    YamlStructure::from_parts(source, nodes)
}

struct TreeBuilder {
    nodes: Vec<NodeData>,
    open: Vec<NodeId>,
    doc_len: usize,
}

impl TreeBuilder {
    fn new(doc_len: usize) -> Self {
        let root = NodeData {
            kind: NodeKind::Root,
            start: 0,
            indent: UNREAL_INDENT,
            node_end: 0,
            tree_end: doc_len,
            parent: None,
            children: Vec::new(),
        };
        Self {
            nodes: vec![root],
            open: vec![NodeId::ROOT],
            doc_len,
        }
    }

    fn push_line(&mut self, line: &SourceLine<'_>) {
        let classified = classify_line(line.text);
        let indent = classified.indent as i32;

        match classified.line_type {
            LineType::BlankLine | LineType::CommentLine => {
                self.attach(NodeKind::Raw, line, UNREAL_INDENT, line.next);
            }
            LineType::KeyLine(token) => {
                self.close_while(line.start, |open_indent| open_indent >= indent);
                let kind = NodeKind::Key {
                    key: token.key,
                    key_len: token.span.len(),
                };
                let id = self.attach(kind, line, indent, self.doc_len);
                self.open.push(id);
            }
            LineType::RawLine => {
                self.close_while(line.start, |open_indent| open_indent > indent);
                self.attach(NodeKind::Raw, line, indent, line.next);
            }
        }
    }

    /// Pop open keys while `should_close` holds for their indent. The root is never closed.
    fn close_while(&mut self, line_start: usize, should_close: impl Fn(i32) -> bool) {
        while let Some(&top) = self.open.last() {
            if top == NodeId::ROOT {
                break;
            }
            let data = &mut self.nodes[top.0];
            if !should_close(data.indent) {
                break;
            }
            data.tree_end = line_start;
            trace!(
                node = top.0,
                indent = data.indent,
                tree_end = line_start,
                "closed key"
            );
            self.open.pop();
        }
    }

    fn attach(
        &mut self,
        kind: NodeKind,
        line: &SourceLine<'_>,
        indent: i32,
        tree_end: usize,
    ) -> NodeId {
        let parent = self.open.last().copied().unwrap_or(NodeId::ROOT);
        let id = NodeId(self.nodes.len());
        self.nodes.push(NodeData {
            kind,
            start: line.start,
            indent,
            node_end: line.end,
            tree_end,
            parent: Some(parent),
            children: Vec::new(),
        });
        self.nodes[parent.0].children.push(id);
        id
    }

    /// Keys still open reach the end of the document; their tree end was set to it when
    /// they were attached.
    fn finish(self) -> Vec<NodeData> {
        self.nodes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dump(source: &str) -> String {
        parse(source).root().dump()
    }

    #[test]
    fn test_empty_input_has_no_children() {
        let structure = parse("");
        assert_eq!(structure.root().child_count(), 0);
        assert_eq!(structure.root().tree_end(), 0);
    }

    #[test]
    fn test_single_key_without_newline() {
        assert_eq!(dump("a:"), "ROOT(0): \n  KEY(0): a:\n");
    }

    #[test]
    fn test_trailing_newline_adds_blank_child() {
        assert_eq!(dump("a:\n"), "ROOT(0): \n  KEY(0): a:\n    RAW(-1): \n");
    }

    #[test]
    fn test_equal_indent_keys_are_siblings() {
        let structure = parse("a:\nb:\n");
        let root = structure.root();
        assert_eq!(root.child_count(), 2);
        assert_eq!(root.child(0).unwrap().child_count(), 0);
        assert_eq!(root.child(0).unwrap().tree_end(), 3);
    }

    #[test]
    fn test_raw_line_at_key_indent_stays_under_key() {
        let structure = parse("list:\n- a\n- b\nnext:\n");
        let list = structure.root().child(0).unwrap();
        assert_eq!(list.child_count(), 2);
        assert_eq!(list.child(1).unwrap().text(), "- b");
        assert_eq!(structure.root().child(1).unwrap().key(), Some("next"));
    }

    #[test]
    fn test_raw_line_closes_deeper_keys_only() {
        let structure = parse("a:\n  b:\n    c:\n  x\n");
        let a = structure.root().child(0).unwrap();
        let b = a.child(0).unwrap();
        // `x` closes `c` (4 > 2) but not `b` (2 == 2); the trailing blank line follows it
        assert_eq!(b.child_count(), 3);
        assert_eq!(b.child(1).unwrap().text(), "x");
        assert_eq!(b.child(0).unwrap().tree_end(), 15);
    }

    #[test]
    fn test_comment_does_not_close_scope() {
        let structure = parse("a:\n# note\n  b: 1\n");
        let a = structure.root().child(0).unwrap();
        assert_eq!(a.child_count(), 2);
        assert!(!a.child(0).unwrap().is_real());
        assert_eq!(a.child(1).unwrap().key(), Some("b"));
    }

    #[test]
    fn test_raw_line_under_root() {
        assert_eq!(dump("  just text"), "ROOT(0): \n  RAW(2): just text\n");
    }

    #[test]
    fn test_parents_are_linked() {
        let structure = parse("a:\n  b:\n    c\n");
        for node in structure.nodes().skip(1) {
            let parent = node.parent().unwrap();
            assert!(parent.children().any(|child| child == node));
        }
        assert!(structure.root().parent().is_none());
    }
}
