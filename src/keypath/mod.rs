//! Key path access to YAML node trees.
//!
//! A key path is a list of string tokens walked from a root node:
//!
//! - `name` - mapping entry with that key (first match wins)
//! - `[n]` - sequence element `n`, must be inside the sequence
//! - `[]` - new trailing sequence element, only when writing
//!
//! Document nodes are passed through transparently.
//!
//! # Examples
//!
//! ```
//! use yamlkeys::document::parser::parse_yaml;
//! use yamlkeys::keypath::{delete_value, get_value, set_value, Error};
//!
//! let mut root = parse_yaml("ints:\n  - 10\n  - 20\n  - 30\n").unwrap();
//!
//! delete_value(&mut root, &["ints", "[1]"]).unwrap();
//! assert_eq!(get_value::<i64, _>(&root, &["ints", "[1]"]).unwrap(), 30);
//!
//! set_value(&mut root, &40, &["ints", "[]"]).unwrap();
//! assert_eq!(get_value::<Vec<i64>, _>(&root, &["ints"]).unwrap(), vec![10, 30, 40]);
//!
//! let err = get_value::<i64, _>(&root, &["ints", "[*]"]).unwrap_err();
//! assert!(matches!(err, Error::InvalidIndexFormat(_)));
//! ```

pub mod error;
pub mod mutator;
pub mod resolver;
pub mod token;
pub mod typed;

pub use error::{Error, Result};
pub use resolver::resolve;
pub use token::{parse_index, PathToken, APPEND_TOKEN};
pub use typed::{decode, encode};

use crate::document::node::YamlNode;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Returns the value at `keys` decoded as `T`.
///
/// An empty key list decodes `root` itself. Sequence types decoded from an
/// absent value (empty document or null) come back empty.
///
/// `get_value::<i64, _>(&root, &["persons", "[10]", "age"])` reads the age of
/// the eleventh person.
pub fn get_value<T, S>(root: &YamlNode, keys: &[S]) -> Result<T>
where
    T: DeserializeOwned,
    S: AsRef<str>,
{
    log::debug!("get_value: {}", display_keys(keys));
    let node = resolve(root, keys)?;
    decode(node)
}

/// Writes `data` at `keys`, creating missing parts of the path.
///
/// - `set_value(&mut root, &ceo, &["company", "ceo"])` - set a struct at a key
/// - `set_value(&mut root, &35, &["some_list", "[]"])` - append to a sequence
/// - `set_value(&mut root, &12, &["some_list", "[8]"])` - replace element 8
///
/// Missing mapping keys are added and `[]` appends; an index must already
/// exist. An empty key list is rejected with `InvalidKeysList`.
pub fn set_value<T, S>(root: &mut YamlNode, data: &T, keys: &[S]) -> Result<()>
where
    T: Serialize + ?Sized,
    S: AsRef<str>,
{
    if keys.is_empty() {
        return Err(Error::empty_keys());
    }
    log::debug!("set_value: {}", display_keys(keys));
    let value = encode(data)?;
    mutator::set(root, value, keys)
}

/// Removes the value at `keys`.
///
/// Mappings and sequences emptied by the removal are removed from their
/// parents as well.
pub fn delete_value<S: AsRef<str>>(root: &mut YamlNode, keys: &[S]) -> Result<()> {
    log::debug!("delete_value: {}", display_keys(keys));
    mutator::delete(root, keys)
}

fn display_keys<S: AsRef<str>>(keys: &[S]) -> String {
    let keys: Vec<&str> = keys.iter().map(|key| key.as_ref()).collect();
    format!("{:?}", keys)
}
