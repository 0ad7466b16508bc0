//! YAML file loading functionality.
//!
//! This module provides functions to load YAML documents from files or stdin,
//! parsing them into `YamlTree` structures that key path operations can work on.
//! Gzip-compressed input is decompressed transparently.

use crate::document::parser::parse_yaml;
use crate::document::tree::YamlTree;
use anyhow::{Context, Result};
use flate2::read::GzDecoder;
use std::fs;
use std::io::Read;
use std::path::Path;

/// Loads and parses a YAML file from the filesystem.
///
/// Files ending in `.gz` are decompressed before parsing. An empty file loads
/// as an empty document.
///
/// # Examples
///
/// ```no_run
/// use yamlkeys::file::loader::load_yaml_file;
///
/// let tree = load_yaml_file("config.yaml").unwrap();
/// let host: String = tree.get_value(&["server", "host"]).unwrap();
/// ```
///
/// # Errors
///
/// This function will return an error if:
/// - The file path does not exist or cannot be read
/// - A `.gz` file is not valid gzip data
/// - The file contents are not valid YAML
pub fn load_yaml_file<P: AsRef<Path>>(path: P) -> Result<YamlTree> {
    let path_ref = path.as_ref();

    let content = if path_ref.extension().is_some_and(|ext| ext == "gz") {
        let file = fs::File::open(path_ref)
            .with_context(|| format!("Failed to open {}", path_ref.display()))?;
        gunzip(file).with_context(|| format!("Failed to decompress {}", path_ref.display()))?
    } else {
        fs::read_to_string(path_ref)
            .with_context(|| format!("Failed to read file {}", path_ref.display()))?
    };

    parse_yaml_content(content)
        .with_context(|| format!("Failed to load {}", path_ref.display()))
}

/// Parses YAML text into a tree that remembers its source.
pub fn parse_yaml_content(content: String) -> Result<YamlTree> {
    let root = parse_yaml(&content)?;
    Ok(YamlTree::with_source(root, Some(content)))
}

/// Loads and parses YAML from standard input.
///
/// Gzip input is detected by its magic bytes.
///
/// ```no_run
/// use yamlkeys::file::loader::load_yaml_from_stdin;
///
/// // Usage: cat config.yaml | yamlkeys get - server host
/// let tree = load_yaml_from_stdin().unwrap();
/// ```
pub fn load_yaml_from_stdin() -> Result<YamlTree> {
    let mut buffer = Vec::new();
    std::io::stdin()
        .read_to_end(&mut buffer)
        .context("Failed to read from stdin")?;

    let content = decode_bytes(buffer)?;
    parse_yaml_content(content).context("Failed to parse YAML from stdin")
}

/// Turns raw input into text, gunzipping it if it starts with the gzip magic.
fn decode_bytes(buffer: Vec<u8>) -> Result<String> {
    const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

    if buffer.starts_with(&GZIP_MAGIC) {
        gunzip(buffer.as_slice()).context("Failed to decompress gzipped input")
    } else {
        String::from_utf8(buffer).context("Invalid UTF-8 in input")
    }
}

/// Decompresses a gzip stream into UTF-8 text.
fn gunzip<R: Read>(compressed: R) -> Result<String> {
    let mut content = String::new();
    GzDecoder::new(compressed)
        .read_to_string(&mut content)
        .context("gzip data is corrupted or not UTF-8")?;
    Ok(content)
}
