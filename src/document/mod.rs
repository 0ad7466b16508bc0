//! YAML document model.
//!
//! - [`node`] - the `YamlNode` tree
//! - [`tree`] - `YamlTree`, an owned document with an optional root
//! - [`parser`] / [`emitter`] - conversion from and to YAML text

pub mod emitter;
pub mod node;
pub mod parser;
pub mod tree;
