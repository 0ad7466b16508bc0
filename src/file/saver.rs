//! YAML file saving functionality.
//!
//! This module writes `YamlTree` structures back to disk with atomic write
//! operations, optional backup creation and gzip compression for `.gz` targets.

use crate::config::Config;
use crate::document::emitter::to_yaml_string;
use crate::document::node::YamlNode;
use crate::document::parser::parse_yaml;
use crate::document::tree::YamlTree;
use crate::keypath::typed::{from_value, to_plain_value};
use anyhow::{bail, Context, Result};
use flate2::write::GzEncoder;
use flate2::Compression;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Saves a YAML tree to a file.
///
/// The tree is serialized, checked by parsing the output again, then written
/// atomically (temp file + rename). If `config.create_backup` is set and the
/// target exists, it is first copied to `<name>.bak`. Targets ending in `.gz`
/// are gzip-compressed.
///
/// # Examples
///
/// ```no_run
/// use yamlkeys::config::Config;
/// use yamlkeys::document::node::YamlNode;
/// use yamlkeys::document::tree::YamlTree;
/// use yamlkeys::file::saver::save_yaml_file;
///
/// let mut tree = YamlTree::new(YamlNode::default());
/// tree.set_value(&"localhost", &["server", "host"]).unwrap();
/// save_yaml_file("output.yaml", &tree, &Config::default()).unwrap();
/// ```
///
/// # Errors
///
/// This function will return an error if:
/// - The tree has no root
/// - The emitted text does not read back as the same tree
/// - Backup creation fails (if requested)
/// - Writing or renaming the temp file fails
pub fn save_yaml_file<P: AsRef<Path>>(path: P, tree: &YamlTree, config: &Config) -> Result<()> {
    let path = path.as_ref();
    let compress = path.extension().is_some_and(|ext| ext == "gz");

    let yaml_str = serialize_tree(tree)?;

    if config.create_backup && path.exists() {
        create_backup(path)?;
    }

    write_file_atomic(path, yaml_str.as_bytes(), compress)?;
    log::debug!("saved {} ({} bytes)", path.display(), yaml_str.len());

    Ok(())
}

/// Serializes a tree to YAML text.
///
/// The text is parsed again and compared with the tree, so a value that would
/// change type on the next load is reported instead of written.
pub fn serialize_tree(tree: &YamlTree) -> Result<String> {
    let root = tree
        .root()
        .ok_or_else(|| anyhow::anyhow!("Cannot save a tree without a root node"))?;
    let yaml_str = to_yaml_string(root)?;
    check_round_trip(root, &yaml_str)?;
    Ok(yaml_str)
}

fn check_round_trip(root: &YamlNode, yaml_str: &str) -> Result<()> {
    let reparsed = parse_yaml(yaml_str)
        .context("Generated invalid YAML - this is a bug in yamlkeys' serialization")?;

    // Compare what was meant to be written: duplicates dropped, no document wrapper
    let expected = from_value(to_plain_value(root))?;
    let actual = match reparsed {
        YamlNode::Document(Some(content)) => *content,
        _ => YamlNode::null(),
    };

    if actual != expected {
        bail!(
            "Generated YAML does not read back as the saved tree - \
             this is a bug in yamlkeys' serialization"
        );
    }
    Ok(())
}

/// Copies `path` to `<name>.bak` next to it.
fn create_backup(path: &Path) -> Result<PathBuf> {
    let name = path
        .file_name()
        .ok_or_else(|| anyhow::anyhow!("Cannot back up {}: no file name", path.display()))?;
    let mut backup_name = name.to_os_string();
    backup_name.push(".bak");
    let backup = path.with_file_name(backup_name);

    fs::copy(path, &backup)
        .with_context(|| format!("Failed to create backup {}", backup.display()))?;
    log::debug!("backed up {} to {}", path.display(), backup.display());
    Ok(backup)
}

/// Writes `data` to a temp file in the target's directory, then renames it
/// over `path`. The temp file is removed if anything fails before the rename.
fn write_file_atomic(path: &Path, data: &[u8], compress: bool) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut temp = NamedTempFile::new_in(dir)
        .with_context(|| format!("Failed to create temp file in {}", dir.display()))?;

    if compress {
        let mut encoder = GzEncoder::new(temp.as_file_mut(), Compression::default());
        encoder.write_all(data).context("Failed to write compressed data")?;
        encoder.finish().context("Failed to finish compression")?;
    } else {
        temp.write_all(data).context("Failed to write temp file")?;
    }

    temp.persist(path)
        .with_context(|| format!("Failed to replace {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_tree_without_root() {
        let result = serialize_tree(&YamlTree::default());
        assert!(result.unwrap_err().to_string().contains("without a root"));
    }

    #[test]
    fn test_serialize_empty_document() {
        let tree = YamlTree::new(YamlNode::default());
        assert_eq!(serialize_tree(&tree).unwrap(), "");
    }

    #[test]
    fn test_serialize_keeps_numeric_looking_strings() {
        let tree = YamlTree::new(YamlNode::document(YamlNode::Mapping(vec![
            ("mode".to_string(), YamlNode::string("0o17")),
            ("id".to_string(), YamlNode::string("0x1F")),
        ])));
        let text = serialize_tree(&tree).unwrap();
        assert_eq!(parse_yaml(&text).unwrap(), *tree.root().unwrap());
    }

    #[test]
    fn test_round_trip_check_rejects_changed_type() {
        let root = YamlNode::Mapping(vec![("mode".to_string(), YamlNode::string("0o17"))]);
        let err = check_round_trip(&root, "mode: 0o17\n").unwrap_err();
        assert!(err.to_string().contains("does not read back"));
        assert!(check_round_trip(&root, "mode: '0o17'\n").is_ok());
    }

    #[test]
    fn test_round_trip_check_ignores_duplicate_keys() {
        let root = YamlNode::Mapping(vec![
            ("a".to_string(), YamlNode::integer(1)),
            ("a".to_string(), YamlNode::integer(2)),
        ]);
        assert!(check_round_trip(&root, "a: 1\n").is_ok());
    }

    #[test]
    fn test_create_backup_copies_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("data.yaml");
        fs::write(&path, "a: 1\n").unwrap();

        let backup = create_backup(&path).unwrap();

        assert_eq!(backup, dir.path().join("data.yaml.bak"));
        assert_eq!(fs::read_to_string(backup).unwrap(), "a: 1\n");
    }

    #[test]
    fn test_atomic_write_leaves_no_temp_files() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("data.yaml");

        write_file_atomic(&path, b"a: 1\n", false).unwrap();
        write_file_atomic(&path, b"a: 2\n", false).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "a: 2\n");
        let names: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name())
            .collect();
        assert_eq!(names, vec![std::ffi::OsString::from("data.yaml")]);
    }

    #[test]
    fn test_failed_write_leaves_no_temp_files() {
        let dir = tempfile::TempDir::new().unwrap();
        // Renaming onto an existing directory fails
        let target = dir.path().join("occupied");
        fs::create_dir_all(target.join("inner")).unwrap();

        assert!(write_file_atomic(&target, b"a: 1\n", false).is_err());
        let names: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name())
            .collect();
        assert_eq!(names, vec![std::ffi::OsString::from("occupied")]);
    }
}
