//! YAML text output for `YamlNode` trees.
//!
//! Nodes are converted to `serde_yaml` values and written with its serializer,
//! which quotes any string that would otherwise read back as a number, bool or
//! null (`'0o17'`, `'true'`) and writes multi-line strings as literal blocks.
//! An empty document emits nothing.

use super::node::YamlNode;
use crate::keypath::typed::to_plain_value;
use anyhow::{Context, Result};

/// Serializes `node` to YAML text.
///
/// # Example
///
/// ```
/// use yamlkeys::document::emitter::to_yaml_string;
/// use yamlkeys::document::node::YamlNode;
///
/// let node = YamlNode::document(YamlNode::Mapping(vec![
///     ("port".to_string(), YamlNode::integer(9001)),
///     ("mode".to_string(), YamlNode::string("0o17")),
/// ]));
/// assert_eq!(to_yaml_string(&node).unwrap(), "port: 9001\nmode: '0o17'\n");
/// ```
pub fn to_yaml_string(node: &YamlNode) -> Result<String> {
    if let YamlNode::Document(None) = node {
        return Ok(String::new());
    }

    let mut text = serde_yaml::to_string(&to_plain_value(node)).context("Failed to emit YAML")?;
    if !text.ends_with('\n') {
        text.push('\n');
    }
    Ok(text)
}
