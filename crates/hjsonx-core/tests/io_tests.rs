/// File adapter tests: absence for missing files, BOM detection, directory
/// creation on save, and reading saved config text back.
use hjsonx_core::io::decode_text;
use hjsonx_core::{load, parse, render, save, HjsonxError};
use serde_json::json;
use std::fs;

// ============================================================================
// load
// ============================================================================

#[test]
fn load_missing_file_is_none() {
    let dir = tempfile::tempdir().unwrap();
    let loaded = load(dir.path().join("absent.json")).unwrap();
    assert!(loaded.is_none());
}

#[test]
fn load_plain_utf8() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("plain.json");
    fs::write(&path, r#"{"name":"Alice","age":30}"#).unwrap();

    let value = load(&path).unwrap().unwrap();
    assert_eq!(value, json!({"name": "Alice", "age": 30}));
}

#[test]
fn load_utf8_with_bom() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bom.json");
    let mut bytes = vec![0xEF, 0xBB, 0xBF];
    bytes.extend_from_slice(r#"{"city":"Zürich"}"#.as_bytes());
    fs::write(&path, bytes).unwrap();

    let value = load(&path).unwrap().unwrap();
    assert_eq!(value, json!({"city": "Zürich"}));
}

#[test]
fn load_utf16_le_with_bom() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("le.json");
    let mut bytes = vec![0xFF, 0xFE];
    for unit in r#"{"k":"日本"}"#.encode_utf16() {
        bytes.extend_from_slice(&unit.to_le_bytes());
    }
    fs::write(&path, bytes).unwrap();

    let value = load(&path).unwrap().unwrap();
    assert_eq!(value, json!({"k": "日本"}));
}

#[test]
fn load_utf16_be_with_bom() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("be.json");
    let mut bytes = vec![0xFE, 0xFF];
    for unit in r#"[1,2]"#.encode_utf16() {
        bytes.extend_from_slice(&unit.to_be_bytes());
    }
    fs::write(&path, bytes).unwrap();

    let value = load(&path).unwrap().unwrap();
    assert_eq!(value, json!([1, 2]));
}

#[test]
fn load_invalid_text_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.json");
    fs::write(&path, r#"{"a": [1, 2"#).unwrap();

    assert!(matches!(load(&path), Err(HjsonxError::HjsonParse(_))));
}

#[test]
fn load_config_text() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("plain.hjson");
    fs::write(&path, "{\n\ta: 1,\n\ts: '''\n\tx\n\ty''',\n}").unwrap();

    let value = load(&path).unwrap().unwrap();
    assert_eq!(value, json!({"a": 1, "s": "x\ny"}));
}

#[test]
fn load_directory_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(matches!(load(dir.path()), Err(HjsonxError::Io { .. })));
}

// ============================================================================
// decode_text
// ============================================================================

#[test]
fn decode_text_invalid_utf8_is_error() {
    let err = decode_text(&[0x7B, 0xFF, 0x7D]).unwrap_err();
    assert!(matches!(err, HjsonxError::Encoding(_)));
}

#[test]
fn decode_text_odd_utf16_length_is_error() {
    let err = decode_text(&[0xFF, 0xFE, 0x41]).unwrap_err();
    assert!(matches!(err, HjsonxError::Encoding(_)));
}

#[test]
fn decode_text_unpaired_surrogate_is_error() {
    let err = decode_text(&[0xFF, 0xFE, 0x00, 0xD8]).unwrap_err();
    assert!(matches!(err, HjsonxError::Encoding(_)));
}

#[test]
fn decode_text_without_bom_is_utf8() {
    assert_eq!(decode_text(b"abc").unwrap(), "abc");
}

// ============================================================================
// save
// ============================================================================

#[test]
fn save_writes_rendered_text() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.hjson");
    let value = json!({"a": 1, "b": {"c": true}});

    save(&value, &path).unwrap();

    let written = fs::read_to_string(&path).unwrap();
    assert_eq!(written, render(&value));
    assert_eq!(written, "{\n\ta: 1,\n\tb: {\n\t\tc: true,\n\t},\n}");
}

#[test]
fn save_creates_missing_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("deeper").join("out.hjson");

    save(&json!({"x": []}), &path).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "{\n\tx: [],\n}");
}

#[test]
fn save_overwrites_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.hjson");
    fs::write(&path, "old contents that are longer than the new ones").unwrap();

    save(&json!(1), &path).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "1");
}

#[test]
fn save_into_path_under_a_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("blocker");
    fs::write(&blocker, "").unwrap();

    let err = save(&json!({}), blocker.join("out.hjson")).unwrap_err();
    assert!(matches!(err, HjsonxError::Io { .. }));
}

#[test]
fn save_then_load_scalar() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scalar.hjson");
    save(&json!("hello"), &path).unwrap();

    assert_eq!(load(&path).unwrap(), Some(json!("hello")));
}

#[test]
fn save_then_load_nested_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.hjson");
    let value = json!({
        "name": "demo",
        "window": {
            "title": "Main Window",
            "size": {"width": 800, "height": 600},
            "opacity": 0.9,
            "resizable": true
        },
        "plugins": ["git", "lint"],
        "motd": "Welcome!\nHave a nice day.",
        "cache": {}
    });

    save(&value, &path).unwrap();
    let loaded = load(&path).unwrap().unwrap();

    assert_eq!(loaded, value);
    let keys: Vec<&String> = loaded.as_object().unwrap().keys().collect();
    assert_eq!(keys, ["name", "window", "plugins", "motd", "cache"]);
}

// ============================================================================
// parse
// ============================================================================

#[test]
fn parse_plain_json() {
    let value = parse(r#"{"b": [1, 2.5], "a": null}"#).unwrap();
    assert_eq!(value, json!({"b": [1, 2.5], "a": null}));
}

#[test]
fn parse_rendered_text_reproduces_tree() {
    let value = json!({"a": 1, "s": "x\ny", "empty": {}, "list": []});
    assert_eq!(parse(&render(&value)).unwrap(), value);
}

#[test]
fn parse_keeps_number_forms() {
    let value = parse("{\n\tcount: 3,\n\tratio: 3.0,\n}").unwrap();
    assert!(value["count"].is_i64());
    assert!(value["ratio"].is_f64());
}
