//! Owned YAML document with an optional root.
//!
//! `YamlTree` is what the loader hands back and what the saver writes. A tree
//! without a root is valid to hold but every key path operation on it fails
//! with [`Error::RootNotSet`].
//!
//! # Example
//!
//! ```
//! use yamlkeys::document::tree::YamlTree;
//! use yamlkeys::document::node::YamlNode;
//! use yamlkeys::keypath::Error;
//!
//! let mut tree = YamlTree::new(YamlNode::default());
//! tree.set_value(&vec!["a", "b"], &["owners", "[]"]).unwrap();
//!
//! let owners: Vec<Vec<String>> = tree.get_value(&["owners"]).unwrap();
//! assert_eq!(owners, vec![vec!["a".to_string(), "b".to_string()]]);
//!
//! let unset = YamlTree::default();
//! assert!(matches!(unset.get_value::<i64, _>(&["x"]), Err(Error::RootNotSet)));
//! ```

use super::node::YamlNode;
use crate::keypath::{self, Error, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// A YAML document tree.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct YamlTree {
    root: Option<YamlNode>,
    /// The original YAML text, if the tree was loaded from one
    original_source: Option<String>,
}

impl YamlTree {
    /// Creates a tree owning `root`.
    pub fn new(root: YamlNode) -> Self {
        Self {
            root: Some(root),
            original_source: None,
        }
    }

    /// Creates a tree that remembers the text it was parsed from.
    pub fn with_source(root: YamlNode, original_source: Option<String>) -> Self {
        Self {
            root: Some(root),
            original_source,
        }
    }

    pub fn original_source(&self) -> Option<&str> {
        self.original_source.as_deref()
    }

    pub fn root(&self) -> Option<&YamlNode> {
        self.root.as_ref()
    }

    /// Replaces the root, returning the previous one.
    pub fn set_root(&mut self, root: YamlNode) -> Option<YamlNode> {
        self.root.replace(root)
    }

    pub fn take_root(&mut self) -> Option<YamlNode> {
        self.root.take()
    }

    /// See [`keypath::get_value`].
    pub fn get_value<T, S>(&self, keys: &[S]) -> Result<T>
    where
        T: DeserializeOwned,
        S: AsRef<str>,
    {
        let root = self.root.as_ref().ok_or(Error::RootNotSet)?;
        keypath::get_value(root, keys)
    }

    /// See [`keypath::set_value`].
    ///
    /// An empty key list is rejected before the root is checked.
    pub fn set_value<T, S>(&mut self, data: &T, keys: &[S]) -> Result<()>
    where
        T: Serialize + ?Sized,
        S: AsRef<str>,
    {
        if keys.is_empty() {
            return Err(Error::empty_keys());
        }
        let root = self.root.as_mut().ok_or(Error::RootNotSet)?;
        keypath::set_value(root, data, keys)
    }

    /// See [`keypath::delete_value`].
    pub fn delete_value<S: AsRef<str>>(&mut self, keys: &[S]) -> Result<()> {
        if keys.is_empty() {
            return Err(Error::empty_keys());
        }
        let root = self.root.as_mut().ok_or(Error::RootNotSet)?;
        keypath::delete_value(root, keys)
    }
}
