//! yamlkeys - key path access for YAML documents.
//!
//! A YAML document is parsed into a [`YamlNode`](document::node::YamlNode) tree
//! and then read, written or pruned by a list of path tokens:
//!
//! - `"name"` selects a mapping entry by key
//! - `"[2]"` selects a sequence element by position
//! - `"[]"` appends a new sequence element (writes only)
//!
//! # Example
//!
//! ```
//! use yamlkeys::document::parser::parse_yaml;
//! use yamlkeys::keypath::{delete_value, get_value, set_value};
//!
//! let mut root = parse_yaml("servers:\n  web:\n    port: 80\n").unwrap();
//!
//! let port: u16 = get_value(&root, &["servers", "web", "port"]).unwrap();
//! assert_eq!(port, 80);
//!
//! set_value(&mut root, &8080, &["servers", "web", "port"]).unwrap();
//! set_value(&mut root, &"db.local", &["servers", "db", "host"]).unwrap();
//! delete_value(&mut root, &["servers", "web"]).unwrap();
//!
//! let host: String = get_value(&root, &["servers", "db", "host"]).unwrap();
//! assert_eq!(host, "db.local");
//! ```

pub mod config;
pub mod document;
pub mod file;
pub mod keypath;
