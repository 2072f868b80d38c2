//! Yaml paths
//!
//!     A [`YamlPath`] is an ordered list of segments leading from a node (usually the root)
//!     to one of its descendants. Traversal resolves one segment at a time against the
//!     current node's direct children; if any segment does not resolve, the whole traversal
//!     returns `None`. There is no partial match and no recursive search.
//!
//!     Paths print as dotted property strings (`world.europe.france`), the form used by
//!     Spring-style property keys, and parse back from the same syntax (see [parser]).

pub mod parser;

use crate::yaml::error::PathParseError;
use crate::yaml::structure::Node;
use std::fmt;
use std::str::FromStr;

/// One step of a path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum YamlPathSegment {
    /// The direct child key node with this key
    AtScalarKey(String),
}

impl YamlPathSegment {
    pub fn at_key(key: impl Into<String>) -> Self {
        YamlPathSegment::AtScalarKey(key.into())
    }

    /// Resolve this segment against the direct children of `node`.
    pub fn resolve<'a>(&self, node: Node<'a>) -> Option<Node<'a>> {
        match self {
            YamlPathSegment::AtScalarKey(key) => node.child_with_key(key),
        }
    }
}

impl fmt::Display for YamlPathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            YamlPathSegment::AtScalarKey(key) if needs_quotes(key) => {
                write!(f, "\"")?;
                for c in key.chars() {
                    match c {
                        '"' => write!(f, "\\\"")?,
                        '\\' => write!(f, "\\\\")?,
                        '\n' => write!(f, "\\n")?,
                        '\t' => write!(f, "\\t")?,
                        c => write!(f, "{}", c)?,
                    }
                }
                write!(f, "\"")
            }
            YamlPathSegment::AtScalarKey(key) => write!(f, "{}", key),
        }
    }
}

fn needs_quotes(key: &str) -> bool {
    key.is_empty()
        || key.trim() != key
        || key.contains(|c: char| matches!(c, '.' | '"' | '\\' | '\n' | '\t'))
}

/// A sequence of segments, resolved left to right.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct YamlPath {
    segments: Vec<YamlPathSegment>,
}

impl YamlPath {
    pub fn new(segments: Vec<YamlPathSegment>) -> Self {
        Self { segments }
    }

    /// A path made only of key segments
    pub fn from_keys<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(keys.into_iter().map(YamlPathSegment::at_key).collect())
    }

    /// The key path from the root to `node`.
    ///
    /// Collects the keys of `node` (if it is a key node) and of all its key ancestors. For a
    /// raw node this is the path of the key it is nested under; for the root it is empty.
    pub fn of(node: Node<'_>) -> Self {
        let mut keys: Vec<&str> = std::iter::once(node)
            .chain(node.ancestors())
            .filter_map(|n| n.key())
            .collect();
        keys.reverse();
        Self::from_keys(keys)
    }

    pub fn segments(&self) -> &[YamlPathSegment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// A new path with `segment` added at the end
    pub fn append(&self, segment: YamlPathSegment) -> Self {
        let mut segments = self.segments.clone();
        segments.push(segment);
        Self::new(segments)
    }

    /// The path without its last segment, or `None` for the empty path
    pub fn parent(&self) -> Option<Self> {
        let (_, init) = self.segments.split_last()?;
        Some(Self::new(init.to_vec()))
    }

    /// Resolve every segment in turn, starting at `start`.
    ///
    /// The empty path resolves to `start` itself.
    pub fn traverse<'a>(&self, start: Node<'a>) -> Option<Node<'a>> {
        self.segments
            .iter()
            .try_fold(start, |node, segment| segment.resolve(node))
    }
}

/// The key path of `node`, or `None` when neither `node` nor any of its ancestors is a key.
pub fn path_of(node: Node<'_>) -> Option<YamlPath> {
    let path = YamlPath::of(node);
    (!path.is_empty()).then_some(path)
}

impl fmt::Display for YamlPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                write!(f, ".")?;
            }
            write!(f, "{}", segment)?;
        }
        Ok(())
    }
}

impl FromStr for YamlPath {
    type Err = PathParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parser::parse_path(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::yaml::structure::parse;

    const SOURCE: &str = "world:\n  europe:\n    france:\n      cheese\n  canada:\n    montreal: poutine\n";

    #[test]
    fn test_traverse_keys() {
        let structure = parse(SOURCE);
        let france = YamlPath::from_keys(["world", "europe", "france"])
            .traverse(structure.root())
            .unwrap();
        assert_eq!(france.key(), Some("france"));
    }

    #[test]
    fn test_traverse_fails_on_any_missing_segment() {
        let structure = parse(SOURCE);
        let path = YamlPath::from_keys(["world", "bogus", "france"]);
        assert!(path.traverse(structure.root()).is_none());
    }

    #[test]
    fn test_traverse_only_looks_at_direct_children() {
        let structure = parse(SOURCE);
        assert!(YamlPath::from_keys(["france"])
            .traverse(structure.root())
            .is_none());
    }

    #[test]
    fn test_empty_path_is_start() {
        let structure = parse(SOURCE);
        assert_eq!(
            YamlPath::default().traverse(structure.root()),
            Some(structure.root())
        );
    }

    #[test]
    fn test_path_of_node() {
        let structure = parse(SOURCE);
        let cheese = structure.find(SOURCE.find("cheese").unwrap());
        assert_eq!(YamlPath::of(cheese).to_string(), "world.europe.france");
        let montreal = structure.find(SOURCE.find("montreal").unwrap());
        assert_eq!(YamlPath::of(montreal).to_string(), "world.canada.montreal");
        assert!(YamlPath::of(structure.root()).is_empty());
    }

    #[test]
    fn test_path_of_needs_a_key() {
        let structure = parse("# top
plain text
key:
  value
");
        assert_eq!(path_of(structure.root()), None);
        assert_eq!(path_of(structure.find(8)), None);
        let value = structure.find(24);
        assert_eq!(path_of(value), Some(YamlPath::from_keys(["key"])));
    }

    #[test]
    fn test_path_of_round_trips_through_traverse() {
        let structure = parse(SOURCE);
        for node in structure.nodes().filter(|n| n.is_key()) {
            assert_eq!(YamlPath::of(node).traverse(structure.root()), Some(node));
        }
    }

    #[test]
    fn test_display_quotes_special_keys() {
        let path = YamlPath::from_keys(["server", "a.b", "say \"hi\""]);
        assert_eq!(path.to_string(), r#"server."a.b"."say \"hi\"""#);
    }

    #[test]
    fn test_append_and_parent() {
        let path = YamlPath::from_keys(["a"]).append(YamlPathSegment::at_key("b"));
        assert_eq!(path.len(), 2);
        assert_eq!(path.parent(), Some(YamlPath::from_keys(["a"])));
        assert_eq!(YamlPath::default().parent(), None);
    }
}
