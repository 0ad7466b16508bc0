//! Path token grammar.
//!
//! A token is one of:
//!
//! - `[]` - append a new element to a sequence (writes only)
//! - `[<integer>]` - zero based sequence index, e.g. `[0]` or `[-1]`
//! - anything else - a mapping key
//!
//! There is no escaping: a mapping key literally named `[0]` cannot be told
//! apart from an index token when the current node is a sequence.

use super::error::{Error, Result};

/// Marker token that appends to a sequence.
pub const APPEND_TOKEN: &str = "[]";

/// Classified form of a path token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathToken<'a> {
    Key(&'a str),
    Index(i64),
    Append,
}

impl<'a> PathToken<'a> {
    /// Classifies a raw token.
    ///
    /// Bracketed text that is not a well formed index stays a key here; only
    /// sequences insist on index syntax (see [`parse_index`]).
    ///
    /// # Example
    ///
    /// ```
    /// use yamlkeys::keypath::PathToken;
    ///
    /// assert_eq!(PathToken::classify("[]"), PathToken::Append);
    /// assert_eq!(PathToken::classify("[3]"), PathToken::Index(3));
    /// assert_eq!(PathToken::classify("[*]"), PathToken::Key("[*]"));
    /// assert_eq!(PathToken::classify("name"), PathToken::Key("name"));
    /// ```
    pub fn classify(token: &'a str) -> Self {
        if token == APPEND_TOKEN {
            return PathToken::Append;
        }
        match parse_index_literal(token) {
            Some(index) => PathToken::Index(index),
            None => PathToken::Key(token),
        }
    }
}

/// Parses the integer inside `[...]`, or `None` if the token is not an index.
fn parse_index_literal(token: &str) -> Option<i64> {
    if token.len() < 3 {
        return None;
    }
    let body = token.strip_prefix('[')?.strip_suffix(']')?;
    body.parse::<i64>().ok()
}

/// Parses `token` as an index into a sequence of `len` elements.
///
/// A token without the `[<integer>]` shape fails with `InvalidIndexFormat`;
/// a well formed index outside `0..len` fails with `IndexOutOfBound`.
pub fn parse_index(token: &str, len: usize) -> Result<usize> {
    PathToken::classify(token).index_within(token, len)
}

impl PathToken<'_> {
    /// Checks this token against a sequence of `len` elements.
    ///
    /// `raw` is the unclassified token, used in error messages.
    pub(crate) fn index_within(self, raw: &str, len: usize) -> Result<usize> {
        let PathToken::Index(index) = self else {
            return Err(Error::InvalidIndexFormat(raw.to_string()));
        };
        usize::try_from(index)
            .ok()
            .filter(|&index| index < len)
            .ok_or_else(|| Error::IndexOutOfBound(raw.to_string()))
    }
}
