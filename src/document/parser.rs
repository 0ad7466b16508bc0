//! YAML parsing into `YamlNode` trees.
//!
//! This module uses `yaml-rust2` to load YAML text, then converts the loaded
//! values into our node representation. Each document in the stream becomes a
//! [`YamlNode::Document`]; empty input produces an empty document.
//!
//! # Example
//!
//! ```
//! use yamlkeys::document::parser::parse_yaml;
//! use yamlkeys::document::node::YamlNode;
//!
//! let root = parse_yaml("name: Alice\nage: 30\n").unwrap();
//! let content = root.child(0).unwrap();
//! assert_eq!(content.get("name"), Some(&YamlNode::string("Alice")));
//! assert_eq!(content.get("age"), Some(&YamlNode::integer(30)));
//!
//! assert_eq!(parse_yaml("").unwrap(), YamlNode::Document(None));
//! ```

use super::node::{YamlNode, YamlNumber, YamlScalar};
use anyhow::{anyhow, bail, Context, Result};
use yaml_rust2::{Yaml, YamlLoader};

/// Parses a YAML string holding at most one document.
///
/// Returns `Document(None)` for empty input and `Document(Some(..))` otherwise.
///
/// # Errors
///
/// Fails if the text is not valid YAML or holds more than one document; use
/// [`parse_yaml_stream`] for multi-document input.
pub fn parse_yaml(source: &str) -> Result<YamlNode> {
    let mut documents = parse_yaml_stream(source)?;
    match documents.len() {
        0 => Ok(YamlNode::Document(None)),
        1 => Ok(documents.remove(0)),
        count => bail!(
            "Expected a single YAML document, found {} (use parse_yaml_stream)",
            count
        ),
    }
}

/// Parses every document of a YAML stream.
///
/// Aliases are resolved to copies of their anchored nodes.
pub fn parse_yaml_stream(source: &str) -> Result<Vec<YamlNode>> {
    let documents = YamlLoader::load_from_str(source).context("Failed to parse YAML")?;
    documents
        .iter()
        .map(|document| convert(document).map(YamlNode::document))
        .collect()
}

/// Converts a loaded `yaml-rust2` value into a node.
fn convert(yaml: &Yaml) -> Result<YamlNode> {
    Ok(match yaml {
        Yaml::Null => YamlNode::null(),
        Yaml::Boolean(b) => YamlNode::boolean(*b),
        Yaml::Integer(i) => YamlNode::integer(*i),
        // Integers above i64::MAX are loaded as reals
        Yaml::Real(text) => match (text.parse::<u64>(), yaml.as_f64()) {
            (Ok(u), _) => YamlNode::Scalar(YamlScalar::Number(YamlNumber::from_u64(u))),
            (Err(_), Some(f)) => YamlNode::float(f),
            (Err(_), None) => YamlNode::string(text.clone()),
        },
        Yaml::String(s) => YamlNode::string(s.clone()),
        Yaml::Array(items) => YamlNode::Sequence(
            items
                .iter()
                .map(convert)
                .collect::<Result<Vec<_>>>()?,
        ),
        Yaml::Hash(hash) => {
            let mut entries = Vec::with_capacity(hash.len());
            for (key, value) in hash {
                entries.push((key_text(key)?, convert(value)?));
            }
            YamlNode::Mapping(entries)
        }
        Yaml::Alias(id) => bail!("Unresolved YAML alias (anchor id {})", id),
        Yaml::BadValue => bail!("Invalid YAML value"),
    })
}

/// Renders a mapping key as the string used for key path lookups.
fn key_text(key: &Yaml) -> Result<String> {
    match key {
        Yaml::String(s) => Ok(s.clone()),
        Yaml::Integer(i) => Ok(i.to_string()),
        Yaml::Real(text) => Ok(text.clone()),
        Yaml::Boolean(b) => Ok(b.to_string()),
        Yaml::Null => Ok("null".to_string()),
        other => Err(anyhow!("Unsupported mapping key: {:?}", other)),
    }
}
