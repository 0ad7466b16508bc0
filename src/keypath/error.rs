//! Error types for key path access.
//!
//! Every fallible key path operation returns `Result<T, Error>`. Variants that
//! stem from a particular path token carry that token so callers can report
//! where a path stopped resolving.

use thiserror::Error;

/// Errors that can occur while reading, writing or deleting by key path.
#[derive(Debug, Error)]
pub enum Error {
    /// The tree has no root node.
    #[error("root node not set")]
    RootNotSet,

    /// The key list was empty, or tokens were left over after reaching a scalar
    /// during a delete.
    #[error("invalid keys list{}", unresolved_suffix(.unresolved))]
    InvalidKeysList { unresolved: String },

    /// A document without content was traversed.
    #[error("empty document node provided")]
    EmptyDocument,

    /// The current node kind cannot be traversed by the token.
    #[error("unexpected node kind for key: {0}")]
    UnexpectedNodeKind(String),

    /// The token is not `[<integer>]`.
    #[error("invalid index format: {0}")]
    InvalidIndexFormat(String),

    /// The index is outside the sequence.
    #[error("provided index out of bound: {0}")]
    IndexOutOfBound(String),

    /// No mapping entry has the key.
    #[error("key not found: {0}")]
    KeyNotFound(String),

    /// A write tried to descend through a scalar.
    #[error("cannot iterate over scalar node: {0}")]
    ScalarSetAttempt(String),

    /// The node could not be converted into the requested type.
    #[error("cannot decode yaml node value")]
    Decode(#[source] serde_yaml::Error),

    /// The value could not be converted into a yaml node.
    #[error("cannot encode value to yaml node")]
    Encode(#[source] serde_yaml::Error),
}

fn unresolved_suffix(unresolved: &str) -> String {
    if unresolved.is_empty() {
        String::new()
    } else {
        format!(": unresolved path: {}", unresolved)
    }
}

impl Error {
    /// `InvalidKeysList` for a key list that has no tokens at all.
    pub fn empty_keys() -> Self {
        Error::InvalidKeysList {
            unresolved: String::new(),
        }
    }

    /// `InvalidKeysList` for tokens that could not be consumed.
    pub(crate) fn unresolved<S: AsRef<str>>(keys: &[S]) -> Self {
        let unresolved = keys
            .iter()
            .map(|key| key.as_ref())
            .collect::<Vec<_>>()
            .join(".");
        Error::InvalidKeysList { unresolved }
    }

    /// The path token this error was raised for, if any.
    pub fn token(&self) -> Option<&str> {
        match self {
            Error::UnexpectedNodeKind(token)
            | Error::InvalidIndexFormat(token)
            | Error::IndexOutOfBound(token)
            | Error::KeyNotFound(token)
            | Error::ScalarSetAttempt(token) => Some(token.as_str()),
            Error::RootNotSet
            | Error::InvalidKeysList { .. }
            | Error::EmptyDocument
            | Error::Decode(_)
            | Error::Encode(_) => None,
        }
    }
}

/// Result type alias for key path operations
pub type Result<T> = std::result::Result<T, Error>;
