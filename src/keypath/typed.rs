//! Conversion between `YamlNode` trees and statically typed values.
//!
//! Both directions go through `serde_yaml::Value`, so any type implementing
//! `Deserialize`/`Serialize` (primitives, collections, derived structs and
//! enums) can be read from or written into a tree.

use super::error::{Error, Result};
use crate::document::node::{YamlNode, YamlNumber, YamlScalar};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_yaml::value::{Tag, TaggedValue};
use serde_yaml::{Mapping, Number, Value};

/// Decodes `node` into a `T`.
///
/// A node that decodes as null (an empty document or a null scalar) is retried
/// as an empty sequence, so collection types come back empty rather than
/// failing. Types that cannot be built from either report the original error.
///
/// # Example
///
/// ```
/// use yamlkeys::document::node::YamlNode;
/// use yamlkeys::keypath::decode;
///
/// let ints: Vec<i32> = decode(&YamlNode::default()).unwrap();
/// assert!(ints.is_empty());
///
/// let missing: Option<i32> = decode(&YamlNode::default()).unwrap();
/// assert_eq!(missing, None);
///
/// assert!(decode::<i32>(&YamlNode::default()).is_err());
/// ```
pub fn decode<T: DeserializeOwned>(node: &YamlNode) -> Result<T> {
    let value = to_value(node);
    let absent = value.is_null();

    match serde_yaml::from_value(value) {
        Ok(decoded) => Ok(decoded),
        Err(err) if absent => serde_yaml::from_value(Value::Sequence(Vec::new()))
            .map_err(|_| Error::Decode(err)),
        Err(err) => Err(Error::Decode(err)),
    }
}

/// Encodes `data` into a detached node.
pub fn encode<T: Serialize + ?Sized>(data: &T) -> Result<YamlNode> {
    let value = serde_yaml::to_value(data).map_err(Error::Encode)?;
    from_value(value)
}

/// Converts a node into a `serde_yaml::Value`.
///
/// Duplicate mapping keys keep the first entry, the same one a lookup finds.
/// A mapping with a single `!Tag` key becomes a tagged value again, which is
/// how enum variants carrying data survive a trip through the tree.
pub fn to_value(node: &YamlNode) -> Value {
    convert(node, TagMode::Restore)
}

/// Like [`to_value`] but leaves `!Tag` mappings as plain mappings.
///
/// This is the form written to YAML text, where the tag key is quoted and
/// reads back as the same mapping.
pub fn to_plain_value(node: &YamlNode) -> Value {
    convert(node, TagMode::Keep)
}

#[derive(Clone, Copy, PartialEq)]
enum TagMode {
    Restore,
    Keep,
}

fn convert(node: &YamlNode, mode: TagMode) -> Value {
    match node {
        YamlNode::Document(None) => Value::Null,
        YamlNode::Document(Some(content)) => convert(content, mode),
        YamlNode::Mapping(entries) => {
            if mode == TagMode::Restore {
                if let Some(tagged) = tagged_entry(entries) {
                    return tagged;
                }
            }
            let mut mapping = Mapping::with_capacity(entries.len());
            for (key, value) in entries {
                let key = Value::String(key.clone());
                if !mapping.contains_key(&key) {
                    mapping.insert(key, convert(value, mode));
                }
            }
            Value::Mapping(mapping)
        }
        YamlNode::Sequence(items) => {
            Value::Sequence(items.iter().map(|item| convert(item, mode)).collect())
        }
        YamlNode::Scalar(scalar) => scalar_to_value(scalar),
    }
}

/// Rebuilds `!Tag value` from a mapping whose only key is a tag.
fn tagged_entry(entries: &[(String, YamlNode)]) -> Option<Value> {
    let [(key, value)] = entries else {
        return None;
    };
    let tag = key.strip_prefix('!').filter(|tag| !tag.is_empty())?;
    Some(Value::Tagged(Box::new(TaggedValue {
        tag: Tag::new(tag),
        value: convert(value, TagMode::Restore),
    })))
}

fn scalar_to_value(scalar: &YamlScalar) -> Value {
    match scalar {
        YamlScalar::Null => Value::Null,
        YamlScalar::Boolean(b) => Value::Bool(*b),
        YamlScalar::Number(YamlNumber::Integer(i)) => Value::Number(Number::from(*i)),
        YamlScalar::Number(YamlNumber::Unsigned(u)) => Value::Number(Number::from(*u)),
        YamlScalar::Number(YamlNumber::Float(f)) => Value::Number(Number::from(*f)),
        YamlScalar::String(s) => Value::String(s.clone()),
    }
}

/// Converts a `serde_yaml::Value` into a node.
///
/// A tagged value becomes a single entry mapping keyed by its tag (`!Tag`).
/// Non-string mapping keys are rendered as YAML text.
pub fn from_value(value: Value) -> Result<YamlNode> {
    Ok(match value {
        Value::Null => YamlNode::null(),
        Value::Bool(b) => YamlNode::boolean(b),
        Value::Number(n) => YamlNode::Scalar(YamlScalar::Number(number_from(&n))),
        Value::String(s) => YamlNode::string(s),
        Value::Sequence(items) => YamlNode::Sequence(
            items
                .into_iter()
                .map(from_value)
                .collect::<Result<Vec<_>>>()?,
        ),
        Value::Mapping(mapping) => {
            let mut entries = Vec::with_capacity(mapping.len());
            for (key, value) in mapping {
                entries.push((key_text(key)?, from_value(value)?));
            }
            YamlNode::Mapping(entries)
        }
        Value::Tagged(tagged) => {
            let TaggedValue { tag, value } = *tagged;
            log::trace!("storing tag {} as a mapping key", tag);
            YamlNode::Mapping(vec![(tag.to_string(), from_value(value)?)])
        }
    })
}

fn number_from(n: &Number) -> YamlNumber {
    if let Some(i) = n.as_i64() {
        YamlNumber::Integer(i)
    } else if let Some(u) = n.as_u64() {
        YamlNumber::from_u64(u)
    } else {
        YamlNumber::Float(n.as_f64().unwrap_or(f64::NAN))
    }
}

fn key_text(key: Value) -> Result<String> {
    match key {
        Value::String(s) => Ok(s),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Null => Ok("null".to_string()),
        other => serde_yaml::to_string(&other)
            .map(|text| text.trim_end().to_string())
            .map_err(Error::Encode),
    }
}
