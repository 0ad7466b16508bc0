// tests/get_value_tests.rs
use serde::Deserialize;
use yamlkeys::document::node::YamlNode;
use yamlkeys::document::parser::parse_yaml;
use yamlkeys::keypath::{get_value, resolve, Error};

const TEST_YAML: &str = r#"
clients:
  - name: first_client
    surname: first_surname
  - name: second_client
    surname: second_surname
servers:
  server1:
    host: server1.local
    port: 9001
  server2:
    host: server2.local
    port: 9002
ints:
  - 10
  - 20
  - 30
empty_list: []
"#;

const LIST_YAML: &str = r#"
- 10
- 20
"#;

fn root() -> YamlNode {
    parse_yaml(TEST_YAML).expect("Failed to parse YAML")
}

fn root_list() -> YamlNode {
    parse_yaml(LIST_YAML).expect("Failed to parse YAML")
}

// ============================================================================
// Mapping and sequence lookups
// ============================================================================

#[test]
fn test_get_nested_mapping_value() {
    let host: String = get_value(&root(), &["servers", "server1", "host"]).unwrap();
    assert_eq!(host, "server1.local");

    let port: u16 = get_value(&root(), &["servers", "server2", "port"]).unwrap();
    assert_eq!(port, 9002);
}

#[test]
fn test_get_through_sequence_index() {
    let surname: String = get_value(&root(), &["clients", "[1]", "surname"]).unwrap();
    assert_eq!(surname, "second_surname");

    let name: String = get_value(&root(), &["clients", "[0]", "name"]).unwrap();
    assert_eq!(name, "first_client");
}

#[test]
fn test_get_whole_sequence() {
    let ints: Vec<i32> = get_value(&root(), &["ints"]).unwrap();
    assert_eq!(ints, vec![10, 20, 30]);
}

#[test]
fn test_get_struct() {
    #[derive(Debug, Deserialize, PartialEq)]
    struct Server {
        host: String,
        port: u16,
    }

    let server: Server = get_value(&root(), &["servers", "server1"]).unwrap();
    assert_eq!(
        server,
        Server {
            host: "server1.local".to_string(),
            port: 9001
        }
    );
}

#[test]
fn test_get_missing_key() {
    let result = get_value::<Vec<i32>, _>(&root(), &["non_existent_ints"]);
    assert!(matches!(result, Err(Error::KeyNotFound(ref key)) if key == "non_existent_ints"));
}

#[test]
fn test_get_through_scalar() {
    let result = get_value::<String, _>(&root(), &["servers", "server1", "host", "name"]);
    assert!(matches!(result, Err(Error::UnexpectedNodeKind(ref key)) if key == "name"));
}

#[test]
fn test_get_type_mismatch_is_decode_error() {
    let result = get_value::<i32, _>(&root(), &["servers"]);
    assert!(matches!(result, Err(Error::Decode(_))));
}

// ============================================================================
// Root sequence and index grammar
// ============================================================================

#[test]
fn test_get_root_list() {
    let keys: [&str; 0] = [];
    let ints: Vec<i32> = get_value(&root_list(), &keys).unwrap();
    assert_eq!(ints, vec![10, 20]);

    assert_eq!(get_value::<i32, _>(&root_list(), &["[0]"]).unwrap(), 10);
    assert_eq!(get_value::<i32, _>(&root_list(), &["[1]"]).unwrap(), 20);
}

#[test]
fn test_get_wildcard_is_invalid_index() {
    let result = get_value::<Vec<i32>, _>(&root_list(), &["[*]"]);
    assert!(matches!(result, Err(Error::InvalidIndexFormat(ref token)) if token == "[*]"));
}

#[test]
fn test_get_index_out_of_bound() {
    for token in ["[-1]", "[2]", "[3]", "[25]"] {
        let result = get_value::<i32, _>(&root_list(), &[token]);
        assert!(
            matches!(result, Err(Error::IndexOutOfBound(_))),
            "{} should be out of bound",
            token
        );
    }
}

#[test]
fn test_get_index_succeeds_only_in_range() {
    let list = root_list();
    for i in -3i64..5 {
        let token = format!("[{}]", i);
        let result = get_value::<i32, _>(&list, &[token.as_str()]);
        if (0..2).contains(&i) {
            assert!(result.is_ok(), "{} should resolve", token);
        } else {
            assert!(matches!(result, Err(Error::IndexOutOfBound(_))), "{}", token);
        }
    }
}

#[test]
fn test_get_malformed_index_regardless_of_range() {
    for token in ["0", "[0", "0]", "[ 0]", "[a]", "[]", "[1.0]"] {
        let result = get_value::<i32, _>(&root_list(), &[token]);
        assert!(
            matches!(result, Err(Error::InvalidIndexFormat(_))),
            "{:?} should be malformed",
            token
        );
    }
}

#[test]
fn test_index_token_is_a_plain_key_on_mappings() {
    let root = parse_yaml("\"[0]\": literal\n").unwrap();
    let value: String = get_value(&root, &["[0]"]).unwrap();
    assert_eq!(value, "literal");
}

// ============================================================================
// Empty versus absent collections
// ============================================================================

#[test]
fn test_empty_document_decodes_to_empty_list() {
    let empty = parse_yaml("").unwrap();
    let keys: [&str; 0] = [];
    let ints: Vec<i32> = get_value(&empty, &keys).unwrap();
    assert_eq!(ints, Vec::<i32>::new());
}

#[test]
fn test_empty_sequence_decodes_to_empty_list() {
    let ints: Vec<i32> = get_value(&root(), &["empty_list"]).unwrap();
    assert!(ints.is_empty());
}

#[test]
fn test_empty_document_with_keys() {
    let empty = parse_yaml("").unwrap();
    let result = get_value::<i32, _>(&empty, &["anything"]);
    assert!(matches!(result, Err(Error::EmptyDocument)));
}

#[test]
fn test_resolve_returns_node_reference() {
    let root = root();
    let node = resolve(&root, &["ints"]).unwrap();
    assert_eq!(node.child_count(), 3);
    assert_eq!(node.child(2), Some(&YamlNode::integer(30)));
}

#[test]
fn test_duplicate_keys_first_match_wins() {
    let root = YamlNode::Mapping(vec![
        ("key".to_string(), YamlNode::string("first")),
        ("key".to_string(), YamlNode::string("second")),
    ]);
    let value: String = get_value(&root, &["key"]).unwrap();
    assert_eq!(value, "first");
}
