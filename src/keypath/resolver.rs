use super::error::{Error, Result};
use super::token::PathToken;
use crate::document::node::YamlNode;

/// One move from a node to one of its children.
pub(crate) struct Step<'a> {
    /// Child position as understood by [`YamlNode::child`]
    pub position: usize,
    pub child: &'a YamlNode,
    /// Whether the move used up the token (documents pass it through)
    pub consumes_token: bool,
}

/// Matches `token` against the kind of `node` and selects the child it names.
pub(crate) fn step<'a>(node: &'a YamlNode, token: &str) -> Result<Step<'a>> {
    match node {
        YamlNode::Document(None) => Err(Error::EmptyDocument),
        YamlNode::Document(Some(content)) => Ok(Step {
            position: 0,
            child: content,
            consumes_token: false,
        }),
        YamlNode::Sequence(items) => {
            let index = PathToken::classify(token).index_within(token, items.len())?;
            Ok(Step {
                position: index,
                child: &items[index],
                consumes_token: true,
            })
        }
        YamlNode::Mapping(entries) => entries
            .iter()
            .enumerate()
            .find(|(_, (key, _))| key == token)
            .map(|(position, (_, value))| Step {
                position,
                child: value,
                consumes_token: true,
            })
            .ok_or_else(|| Error::KeyNotFound(token.to_string())),
        YamlNode::Scalar(_) => Err(Error::UnexpectedNodeKind(token.to_string())),
    }
}

/// Returns the node at `keys` below `root`.
///
/// An empty key list returns `root` itself, whatever its kind.
pub fn resolve<'a, S: AsRef<str>>(root: &'a YamlNode, keys: &[S]) -> Result<&'a YamlNode> {
    let mut current = root;
    let mut rest = keys;

    while let Some(token) = rest.first() {
        let step = step(current, token.as_ref())?;
        if step.consumes_token {
            rest = &rest[1..];
        }
        current = step.child;
    }

    Ok(current)
}

/// Resolves `keys` for a delete and returns the child positions leading to the
/// target.
///
/// Reaching a scalar with tokens left is reported as `InvalidKeysList` with the
/// unconsumed tokens. The returned path always ends in a mapping or sequence
/// position.
pub(crate) fn locate<S: AsRef<str>>(root: &YamlNode, keys: &[S]) -> Result<Vec<usize>> {
    let mut positions = Vec::with_capacity(keys.len() + 1);
    let mut current = root;
    let mut rest = keys;

    while let Some(token) = rest.first() {
        if current.is_scalar() {
            return Err(Error::unresolved(rest));
        }
        let step = step(current, token.as_ref())?;
        positions.push(step.position);
        if step.consumes_token {
            rest = &rest[1..];
        }
        current = step.child;
    }

    Ok(positions)
}
