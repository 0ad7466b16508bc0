//! YAML node representation.
//!
//! This module provides the tree that every key path operation works on. A parsed
//! YAML document is a [`YamlNode::Document`] wrapping zero or one child, and below
//! it sit mappings, sequences and scalars. Mappings keep their entries as an
//! ordered list of pairs, so key order survives edits and duplicate keys are kept
//! as they were parsed (lookups take the first match).
//!
//! # Example
//!
//! ```
//! use yamlkeys::document::node::{YamlNode, YamlNumber, YamlScalar};
//!
//! let server = YamlNode::Mapping(vec![
//!     ("host".to_string(), YamlNode::string("server1.local")),
//!     ("port".to_string(), YamlNode::integer(9001)),
//! ]);
//! let root = YamlNode::document(server);
//!
//! // Position 0 of a document is its content, position 1 of the mapping is "port"
//! let port = root.node_at(&[0, 1]).unwrap();
//! assert_eq!(port, &YamlNode::Scalar(YamlScalar::Number(YamlNumber::Integer(9001))));
//! ```

use std::fmt;

/// Represents YAML numbers (integer or float)
///
/// `Unsigned` only holds values above `i64::MAX`; anything smaller is an
/// `Integer`.
#[derive(Debug, Clone)]
pub enum YamlNumber {
    Integer(i64),
    Unsigned(u64),
    Float(f64),
}

impl PartialEq for YamlNumber {
    /// Structural equality: a NaN float equals another NaN.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (YamlNumber::Integer(a), YamlNumber::Integer(b)) => a == b,
            (YamlNumber::Unsigned(a), YamlNumber::Unsigned(b)) => a == b,
            (YamlNumber::Float(a), YamlNumber::Float(b)) => a == b || (a.is_nan() && b.is_nan()),
            _ => false,
        }
    }
}

impl fmt::Display for YamlNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            YamlNumber::Integer(i) => write!(f, "{}", i),
            YamlNumber::Unsigned(u) => write!(f, "{}", u),
            YamlNumber::Float(fl) => write!(f, "{}", fl),
        }
    }
}

impl YamlNumber {
    /// Builds the canonical number for `value`.
    pub fn from_u64(value: u64) -> Self {
        match i64::try_from(value) {
            Ok(i) => YamlNumber::Integer(i),
            Err(_) => YamlNumber::Unsigned(value),
        }
    }

    pub fn as_f64(&self) -> f64 {
        match self {
            YamlNumber::Integer(i) => *i as f64,
            YamlNumber::Unsigned(u) => *u as f64,
            YamlNumber::Float(f) => *f,
        }
    }

    pub fn is_integer(&self) -> bool {
        matches!(self, YamlNumber::Integer(_) | YamlNumber::Unsigned(_))
    }

    pub fn is_float(&self) -> bool {
        matches!(self, YamlNumber::Float(_))
    }
}

/// A terminal YAML value.
#[derive(Debug, Clone, PartialEq)]
pub enum YamlScalar {
    Null,
    Boolean(bool),
    Number(YamlNumber),
    String(String),
}

impl fmt::Display for YamlScalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            YamlScalar::Null => write!(f, "null"),
            YamlScalar::Boolean(b) => write!(f, "{}", b),
            YamlScalar::Number(n) => write!(f, "{}", n),
            YamlScalar::String(s) => write!(f, "{}", s),
        }
    }
}

/// One node of a YAML document tree.
///
/// The four kinds form a closed set; every traversal matches on all of them.
#[derive(Debug, Clone, PartialEq)]
pub enum YamlNode {
    /// Document root holding zero (empty source) or one content node
    Document(Option<Box<YamlNode>>),
    /// Ordered key/value entries, duplicates allowed
    Mapping(Vec<(String, YamlNode)>),
    /// Ordered elements
    Sequence(Vec<YamlNode>),
    /// Leaf value, cannot be descended into
    Scalar(YamlScalar),
}

impl Default for YamlNode {
    /// An empty document.
    fn default() -> Self {
        YamlNode::Document(None)
    }
}

impl YamlNode {
    /// Wraps `content` in a document node.
    pub fn document(content: YamlNode) -> Self {
        YamlNode::Document(Some(Box::new(content)))
    }

    pub fn string(value: impl Into<String>) -> Self {
        YamlNode::Scalar(YamlScalar::String(value.into()))
    }

    pub fn integer(value: i64) -> Self {
        YamlNode::Scalar(YamlScalar::Number(YamlNumber::Integer(value)))
    }

    pub fn float(value: f64) -> Self {
        YamlNode::Scalar(YamlScalar::Number(YamlNumber::Float(value)))
    }

    pub fn boolean(value: bool) -> Self {
        YamlNode::Scalar(YamlScalar::Boolean(value))
    }

    pub fn null() -> Self {
        YamlNode::Scalar(YamlScalar::Null)
    }

    /// Short lowercase name of the node kind, used in messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            YamlNode::Document(_) => "document",
            YamlNode::Mapping(_) => "mapping",
            YamlNode::Sequence(_) => "sequence",
            YamlNode::Scalar(_) => "scalar",
        }
    }

    pub fn is_mapping(&self) -> bool {
        matches!(self, YamlNode::Mapping(_))
    }

    pub fn is_sequence(&self) -> bool {
        matches!(self, YamlNode::Sequence(_))
    }

    pub fn is_scalar(&self) -> bool {
        matches!(self, YamlNode::Scalar(_))
    }

    /// Returns true for mappings and sequences.
    ///
    /// # Example
    ///
    /// ```
    /// use yamlkeys::document::node::YamlNode;
    ///
    /// assert!(YamlNode::Mapping(vec![]).is_container());
    /// assert!(YamlNode::Sequence(vec![]).is_container());
    /// assert!(!YamlNode::integer(42).is_container());
    /// assert!(!YamlNode::default().is_container());
    /// ```
    pub fn is_container(&self) -> bool {
        matches!(self, YamlNode::Mapping(_) | YamlNode::Sequence(_))
    }

    /// Returns true for a mapping or sequence with no content.
    ///
    /// An empty document is not an empty container.
    pub fn is_empty_container(&self) -> bool {
        match self {
            YamlNode::Mapping(entries) => entries.is_empty(),
            YamlNode::Sequence(items) => items.is_empty(),
            YamlNode::Document(_) | YamlNode::Scalar(_) => false,
        }
    }

    /// Number of direct children.
    pub fn child_count(&self) -> usize {
        match self {
            YamlNode::Document(content) => usize::from(content.is_some()),
            YamlNode::Mapping(entries) => entries.len(),
            YamlNode::Sequence(items) => items.len(),
            YamlNode::Scalar(_) => 0,
        }
    }

    /// Returns the direct child at `position`.
    ///
    /// For a document position 0 is its content, for a mapping the position
    /// selects the nth entry's value and for a sequence the nth element.
    pub fn child(&self, position: usize) -> Option<&YamlNode> {
        match self {
            YamlNode::Document(content) if position == 0 => content.as_deref(),
            YamlNode::Document(_) | YamlNode::Scalar(_) => None,
            YamlNode::Mapping(entries) => entries.get(position).map(|(_, value)| value),
            YamlNode::Sequence(items) => items.get(position),
        }
    }

    /// Mutable variant of [`YamlNode::child`].
    pub fn child_mut(&mut self, position: usize) -> Option<&mut YamlNode> {
        match self {
            YamlNode::Document(content) if position == 0 => content.as_deref_mut(),
            YamlNode::Document(_) | YamlNode::Scalar(_) => None,
            YamlNode::Mapping(entries) => entries.get_mut(position).map(|(_, value)| value),
            YamlNode::Sequence(items) => items.get_mut(position),
        }
    }

    /// Gets the node at a position path below this node.
    ///
    /// Returns `None` if any position is out of bounds or a scalar is reached
    /// before the path ends. An empty path returns `self`.
    ///
    /// # Example
    ///
    /// ```
    /// use yamlkeys::document::node::YamlNode;
    ///
    /// let root = YamlNode::Sequence(vec![
    ///     YamlNode::integer(1),
    ///     YamlNode::Sequence(vec![YamlNode::integer(2)]),
    /// ]);
    ///
    /// assert_eq!(root.node_at(&[1, 0]), Some(&YamlNode::integer(2)));
    /// assert!(root.node_at(&[0, 0]).is_none());
    /// assert!(root.node_at(&[5]).is_none());
    /// ```
    pub fn node_at(&self, path: &[usize]) -> Option<&YamlNode> {
        let mut current = self;
        for &position in path {
            current = current.child(position)?;
        }
        Some(current)
    }

    /// Mutable variant of [`YamlNode::node_at`].
    pub fn node_at_mut(&mut self, path: &[usize]) -> Option<&mut YamlNode> {
        let mut current = self;
        for &position in path {
            current = current.child_mut(position)?;
        }
        Some(current)
    }

    /// Removes the direct child at `position` and returns it.
    ///
    /// Removing from a mapping drops the whole key/value entry and keeps the
    /// order of the remaining entries.
    pub fn remove_child(&mut self, position: usize) -> Option<YamlNode> {
        match self {
            YamlNode::Document(content) if position == 0 => content.take().map(|boxed| *boxed),
            YamlNode::Document(_) | YamlNode::Scalar(_) => None,
            YamlNode::Mapping(entries) => {
                if position < entries.len() {
                    Some(entries.remove(position).1)
                } else {
                    None
                }
            }
            YamlNode::Sequence(items) => {
                if position < items.len() {
                    Some(items.remove(position))
                } else {
                    None
                }
            }
        }
    }

    /// Returns the value of the first mapping entry whose key equals `key`.
    pub fn get(&self, key: &str) -> Option<&YamlNode> {
        match self {
            YamlNode::Mapping(entries) => entries
                .iter()
                .find(|(entry_key, _)| entry_key == key)
                .map(|(_, value)| value),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> YamlNode {
        YamlNode::document(YamlNode::Mapping(vec![
            (
                "ints".to_string(),
                YamlNode::Sequence(vec![
                    YamlNode::integer(10),
                    YamlNode::integer(20),
                    YamlNode::integer(30),
                ]),
            ),
            ("name".to_string(), YamlNode::string("sample")),
        ]))
    }

    #[test]
    fn test_yaml_number_display() {
        let int = YamlNumber::Integer(42);
        assert_eq!(format!("{}", int), "42");

        let float = YamlNumber::Float(42.5);
        assert_eq!(format!("{}", float), "42.5");
    }

    #[test]
    fn test_yaml_number_type_checks() {
        let int = YamlNumber::Integer(42);
        assert!(int.is_integer());
        assert!(!int.is_float());

        let float = YamlNumber::Float(42.0);
        assert!(float.is_float());
        assert!(!float.is_integer());
        assert_eq!(float.as_f64(), 42.0);

        let big = YamlNumber::from_u64(u64::MAX);
        assert_eq!(big, YamlNumber::Unsigned(u64::MAX));
        assert!(big.is_integer());
        assert_eq!(big.to_string(), "18446744073709551615");
        assert_eq!(YamlNumber::from_u64(7), YamlNumber::Integer(7));
    }

    #[test]
    fn test_nan_equals_nan() {
        assert_eq!(YamlNode::float(f64::NAN), YamlNode::float(f64::NAN));
        assert_ne!(YamlNode::float(1.0), YamlNode::integer(1));
    }

    #[test]
    fn test_default_is_empty_document() {
        let node = YamlNode::default();
        assert_eq!(node, YamlNode::Document(None));
        assert_eq!(node.child_count(), 0);
        assert!(!node.is_empty_container());
    }

    #[test]
    fn test_child_positions() {
        let root = sample();
        assert!(root.child(0).unwrap().is_mapping());
        assert!(root.child(1).is_none());

        let mapping = root.child(0).unwrap();
        assert!(mapping.child(0).unwrap().is_sequence());
        assert_eq!(mapping.child(1), Some(&YamlNode::string("sample")));
        assert!(mapping.child(2).is_none());
    }

    #[test]
    fn test_node_at_mut_edits_in_place() {
        let mut root = sample();
        *root.node_at_mut(&[0, 0, 2]).unwrap() = YamlNode::integer(99);
        assert_eq!(root.node_at(&[0, 0, 2]), Some(&YamlNode::integer(99)));
    }

    #[test]
    fn test_remove_child_keeps_order() {
        let mut root = sample();
        let ints = root.node_at_mut(&[0, 0]).unwrap();
        assert_eq!(ints.remove_child(1), Some(YamlNode::integer(20)));
        assert_eq!(
            ints,
            &YamlNode::Sequence(vec![YamlNode::integer(10), YamlNode::integer(30)])
        );
        assert!(ints.remove_child(5).is_none());

        let mapping = root.node_at_mut(&[0]).unwrap();
        assert!(mapping.remove_child(0).unwrap().is_sequence());
        assert_eq!(mapping.child_count(), 1);
        assert_eq!(mapping.get("name"), Some(&YamlNode::string("sample")));
    }

    #[test]
    fn test_remove_document_content() {
        let mut root = sample();
        assert!(root.remove_child(0).is_some());
        assert_eq!(root, YamlNode::Document(None));
    }

    #[test]
    fn test_get_returns_first_duplicate() {
        let mapping = YamlNode::Mapping(vec![
            ("key".to_string(), YamlNode::integer(1)),
            ("key".to_string(), YamlNode::integer(2)),
        ]);
        assert_eq!(mapping.get("key"), Some(&YamlNode::integer(1)));
        assert!(mapping.get("missing").is_none());
    }

    #[test]
    fn test_empty_container_checks() {
        assert!(YamlNode::Mapping(vec![]).is_empty_container());
        assert!(YamlNode::Sequence(vec![]).is_empty_container());
        assert!(!YamlNode::Sequence(vec![YamlNode::null()]).is_empty_container());
        assert!(!YamlNode::null().is_empty_container());
    }
}
