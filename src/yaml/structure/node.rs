//! Structure tree nodes
//!
//!     The tree is stored as an arena: every node lives in one `Vec` owned by
//!     [`YamlStructure`] and refers to its parent and children by [`NodeId`]. Callers never
//!     hold node data directly; they navigate through [`Node`], a copyable handle that pairs
//!     the arena with an id. Two handles are equal when they point at the same node of the
//!     same tree, which gives editor code cheap identity comparison between queries.
//!
//!     Nodes are stored in source order, parents before their children, so iterating the
//!     arena is a pre-order walk of the tree.

use std::fmt;

/// Indent carried by the root and by comment/blank nodes.
pub const UNREAL_INDENT: i32 = -1;

/// Index of a node inside its [`YamlStructure`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub const ROOT: NodeId = NodeId(0);
}

/// The role of a node.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// The unique entry point, spanning the whole document
    Root,
    /// A `key:` line and everything nested under it
    Key {
        /// Unescaped key text
        key: String,
        /// Length of the key as written in the source
        key_len: usize,
    },
    /// A leaf line: list item, scalar continuation, malformed line, comment or blank
    Raw,
}

impl NodeKind {
    /// Tag used by the textual dumps
    pub fn name(&self) -> &'static str {
        match self {
            NodeKind::Root => "ROOT",
            NodeKind::Key { .. } => "KEY",
            NodeKind::Raw => "RAW",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct NodeData {
    pub(crate) kind: NodeKind,
    pub(crate) start: usize,
    pub(crate) indent: i32,
    pub(crate) node_end: usize,
    pub(crate) tree_end: usize,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
}

/// An immutable structure tree built from one text snapshot.
///
/// Produced by [`parse`](super::parse). The tree owns its source text so that node text
/// ranges can be resolved without keeping the editor buffer around.
#[derive(Debug, Clone)]
pub struct YamlStructure {
    source: String,
    nodes: Vec<NodeData>,
}

impl YamlStructure {
    pub(crate) fn from_parts(source: String, nodes: Vec<NodeData>) -> Self {
        debug_assert!(matches!(
            nodes.first().map(|n| &n.kind),
            Some(NodeKind::Root)
        ));
        Self { source, nodes }
    }

    pub fn root(&self) -> Node<'_> {
        Node {
            tree: self,
            id: NodeId::ROOT,
        }
    }

    /// All nodes in pre-order, the root first.
    pub fn nodes(&self) -> impl ExactSizeIterator<Item = Node<'_>> + '_ {
        (0..self.nodes.len()).map(move |i| Node {
            tree: self,
            id: NodeId(i),
        })
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// The text snapshot this tree was parsed from
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Document length in bytes
    pub fn len(&self) -> usize {
        self.source.len()
    }

    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }

    /// Deepest node containing `offset`. See [`Node::find`].
    pub fn find(&self, offset: usize) -> Node<'_> {
        self.root().find(offset)
    }

    /// Source text between two offsets, clamped to the document.
    pub fn text_between(&self, start: usize, end: usize) -> &str {
        let end = end.min(self.source.len());
        let start = start.min(end);
        self.source.get(start..end).unwrap_or("")
    }

    fn data(&self, id: NodeId) -> &NodeData {
        &self.nodes[id.0]
    }

    /// Handle for an id taken from this tree's own child lists
    pub(crate) fn get(&self, id: NodeId) -> Node<'_> {
        Node { tree: self, id }
    }
}

/// A handle to one node of a [`YamlStructure`].
#[derive(Clone, Copy)]
pub struct Node<'a> {
    tree: &'a YamlStructure,
    id: NodeId,
}

impl<'a> Node<'a> {
    fn data(&self) -> &'a NodeData {
        self.tree.data(self.id)
    }

    fn wrap(&self, id: NodeId) -> Node<'a> {
        Node {
            tree: self.tree,
            id,
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    /// The tree this node belongs to
    pub fn structure(&self) -> &'a YamlStructure {
        self.tree
    }

    pub fn kind(&self) -> &'a NodeKind {
        &self.data().kind
    }

    pub fn is_root(&self) -> bool {
        matches!(self.kind(), NodeKind::Root)
    }

    pub fn is_key(&self) -> bool {
        matches!(self.kind(), NodeKind::Key { .. })
    }

    pub fn is_raw(&self) -> bool {
        matches!(self.kind(), NodeKind::Raw)
    }

    /// Offset of the start of the node's line, indentation included (0 for the root)
    pub fn start(&self) -> usize {
        self.data().start
    }

    /// Indent of the node's line, or [`UNREAL_INDENT`] for the root and comment/blank nodes
    pub fn indent(&self) -> i32 {
        self.data().indent
    }

    /// Offset of the end of the node's own line, excluding the line terminator
    pub fn node_end(&self) -> usize {
        self.data().node_end
    }

    /// Exclusive end of the node's subtree
    pub fn tree_end(&self) -> usize {
        self.data().tree_end
    }

    /// Indent as printed in dumps: the root shows as 0, every other node as stored
    pub fn dump_indent(&self) -> i32 {
        if self.is_root() {
            0
        } else {
            self.indent()
        }
    }

    /// The key of a key node
    pub fn key(&self) -> Option<&'a str> {
        match self.kind() {
            NodeKind::Key { key, .. } => Some(key.as_str()),
            _ => None,
        }
    }

    /// Whether `offset` falls on the indentation or the key of this node's line.
    ///
    /// The covered range is `[start, start + indent + key length)`; the colon and anything
    /// after it are outside. Always false for non-key nodes.
    pub fn is_in_key(&self, offset: usize) -> bool {
        match self.kind() {
            NodeKind::Key { key_len, .. } => {
                let end = self.start() + self.indent().max(0) as usize + key_len;
                self.start() <= offset && offset < end
            }
            _ => false,
        }
    }

    /// Real nodes take part in the indentation structure; comments and blanks do not.
    pub fn is_real(&self) -> bool {
        self.indent() != UNREAL_INDENT
    }

    pub fn parent(&self) -> Option<Node<'a>> {
        self.data().parent.map(|id| self.wrap(id))
    }

    /// Ancestors from the parent up to the root
    pub fn ancestors(&self) -> impl Iterator<Item = Node<'a>> {
        std::iter::successors(self.parent(), |node| node.parent())
    }

    /// Number of ancestors (0 for the root)
    pub fn depth(&self) -> usize {
        self.ancestors().count()
    }

    pub fn children(&self) -> impl ExactSizeIterator<Item = Node<'a>> + DoubleEndedIterator + 'a {
        let tree = self.tree;
        self.data()
            .children
            .iter()
            .map(move |&id| Node { tree, id })
    }

    pub(crate) fn child_ids(&self) -> &'a [NodeId] {
        &self.data().children
    }

    pub fn child(&self, index: usize) -> Option<Node<'a>> {
        self.data().children.get(index).map(|&id| self.wrap(id))
    }

    pub fn child_count(&self) -> usize {
        self.data().children.len()
    }

    /// First child that is not a comment or blank line
    pub fn first_real_child(&self) -> Option<Node<'a>> {
        self.children().find(|child| child.is_real())
    }

    /// Direct child key node with the given key
    pub fn child_with_key(&self, key: &str) -> Option<Node<'a>> {
        self.children().find(|child| child.key() == Some(key))
    }

    /// Text of the node's own line as shown in dumps: after the indentation for real nodes,
    /// the whole line for comments and blanks, empty for the root.
    pub fn text(&self) -> &'a str {
        if self.is_root() {
            return "";
        }
        let content_start = self.start() + self.indent().max(0) as usize;
        self.tree.text_between(content_start, self.node_end())
    }

    /// Source text of the whole subtree, `[start, tree_end)`
    pub fn tree_text(&self) -> &'a str {
        self.tree.text_between(self.start(), self.tree_end())
    }

    /// Render this subtree in the `KIND(indent): text` format, one node per line.
    pub fn dump(&self) -> String {
        self.to_string()
    }

    fn write_tree(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        writeln!(
            f,
            "{}{}({}): {}",
            "  ".repeat(depth),
            self.kind().name(),
            self.dump_indent(),
            self.text()
        )?;
        for child in self.children() {
            child.write_tree(f, depth + 1)?;
        }
        Ok(())
    }
}

impl PartialEq for Node<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.tree, other.tree) && self.id == other.id
    }
}

impl Eq for Node<'_> {}

impl fmt::Display for Node<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_tree(f, 0)
    }
}

impl fmt::Debug for Node<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("id", &self.id.0)
            .field("kind", self.kind())
            .field("start", &self.start())
            .field("indent", &self.indent())
            .field("tree_end", &self.tree_end())
            .finish()
    }
}
