use super::error::{Error, Result};
use super::resolver::locate;
use super::token::PathToken;
use crate::document::node::YamlNode;

/// Writes `value` at `keys`, creating whatever part of the path is missing.
///
/// Existing nodes on the path are descended into; the node at the end of the
/// path is replaced in place. Where the path leaves the existing structure the
/// remaining tokens become an envelope around `value` (see [`envelope`]):
///
/// - empty document: the envelope for the whole path becomes its content
/// - mapping without the key: `(key, envelope(rest))` is appended
/// - sequence with `[]`: `envelope(rest)` is appended
///
/// Every check happens before the single structural change, so an error leaves
/// the tree untouched.
pub fn set<S: AsRef<str>>(root: &mut YamlNode, value: YamlNode, keys: &[S]) -> Result<()> {
    if keys.is_empty() {
        return Err(Error::empty_keys());
    }

    let mut current = root;
    let mut rest = keys;

    loop {
        let Some((token, tail)) = rest.split_first() else {
            *current = value;
            return Ok(());
        };
        let raw = token.as_ref();
        let token = PathToken::classify(raw);

        match current {
            YamlNode::Scalar(_) => return Err(Error::ScalarSetAttempt(raw.to_string())),
            YamlNode::Document(content) => match content {
                Some(inner) => current = &mut **inner,
                None => {
                    *content = Some(Box::new(envelope(value, rest)));
                    return Ok(());
                }
            },
            YamlNode::Mapping(entries) => {
                match entries.iter().position(|(key, _)| key == raw) {
                    Some(position) => {
                        current = &mut entries[position].1;
                        rest = tail;
                    }
                    None if token == PathToken::Append => {
                        return Err(Error::UnexpectedNodeKind(raw.to_string()));
                    }
                    None => {
                        entries.push((raw.to_string(), envelope(value, tail)));
                        return Ok(());
                    }
                }
            }
            YamlNode::Sequence(items) => {
                if token == PathToken::Append {
                    items.push(envelope(value, tail));
                    return Ok(());
                }
                let index = token.index_within(raw, items.len())?;
                current = &mut items[index];
                rest = tail;
            }
        }
    }
}

/// Wraps `value` in one container per token, outermost first.
///
/// `[]` wraps in a one element sequence, any other token in a single entry
/// mapping keyed by the token.
pub(crate) fn envelope<S: AsRef<str>>(value: YamlNode, keys: &[S]) -> YamlNode {
    if !keys.is_empty() {
        log::trace!("building envelope for {} missing path token(s)", keys.len());
    }
    keys.iter().rev().fold(value, |inner, key| {
        let key = key.as_ref();
        match PathToken::classify(key) {
            PathToken::Append => YamlNode::Sequence(vec![inner]),
            PathToken::Key(_) | PathToken::Index(_) => {
                YamlNode::Mapping(vec![(key.to_string(), inner)])
            }
        }
    })
}

/// Removes the value at `keys`.
///
/// The target is located first without touching the tree; only then is it
/// removed. Containers left empty by the removal are pruned from their parents,
/// walking upwards until a non-empty node, a document or the root is reached.
pub fn delete<S: AsRef<str>>(root: &mut YamlNode, keys: &[S]) -> Result<()> {
    if keys.is_empty() {
        return Err(Error::empty_keys());
    }

    let positions = locate(root, keys)?;
    let Some((&target, parent_path)) = positions.split_last() else {
        return Err(Error::unresolved(keys));
    };

    root.node_at_mut(parent_path)
        .and_then(|parent| parent.remove_child(target))
        .ok_or_else(|| Error::unresolved(keys))?;

    prune_empty(root, parent_path);
    Ok(())
}

/// Removes the node at `path` if it is an empty container, then repeats for its
/// parent.
fn prune_empty(root: &mut YamlNode, path: &[usize]) {
    let mut depth = path.len();

    while let Some((&position, parent_path)) = path[..depth].split_last() {
        let emptied = root
            .node_at(&path[..depth])
            .is_some_and(YamlNode::is_empty_container);
        if !emptied {
            break;
        }

        match root.node_at_mut(parent_path) {
            Some(parent) if parent.is_container() => {
                parent.remove_child(position);
                log::trace!("pruned empty container at depth {}", depth);
            }
            _ => break,
        }
        depth -= 1;
    }
}
