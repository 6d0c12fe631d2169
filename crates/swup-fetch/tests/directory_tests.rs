use std::fs;

use serde_json::json;
use swup_core::{DeclarationResolver, Resolution, SourceOrigin, convert_value};
use swup_fetch::{DirectorySource, FetchError};

fn write(dir: &std::path::Path, name: &str, value: serde_json::Value) {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, serde_json::to_string_pretty(&value).unwrap()).unwrap();
}

#[test]
fn test_convert_from_directory() {
    let tmp = tempfile::tempdir().unwrap();
    write(
        tmp.path(),
        "api-docs.json",
        json!({
            "info": {"title": "Local"},
            "apis": [
                {"path": "/pet-controller", "description": "Pets"},
                {"path": "/missing-controller", "description": "Gone"}
            ]
        }),
    );
    write(
        tmp.path(),
        "pet-controller.json",
        json!({"apis": [{"path": "/pet", "operations": [{"method": "PUT"}]}]}),
    );

    let source = DirectorySource::new(tmp.path());
    let origin = SourceOrigin::parse("https://example.com/api-docs").unwrap();
    let root = source.fetch_listing().unwrap();
    let conversion = convert_value(root, &origin, &source).unwrap();

    let doc = conversion.document;
    assert_eq!(doc.base_path, "/");
    assert_eq!(doc.tags.len(), 2);
    assert!(doc.operation("/pet", "put").is_some());
    assert_eq!(conversion.skipped.len(), 1);
    assert_eq!(conversion.skipped[0].path, "/missing-controller");
}

#[test]
fn test_missing_listing_is_error() {
    let tmp = tempfile::tempdir().unwrap();
    let source = DirectorySource::new(tmp.path());
    assert!(matches!(
        source.fetch_listing(),
        Err(FetchError::Io { .. })
    ));
}

#[test]
fn test_malformed_declaration_is_unavailable() {
    let tmp = tempfile::tempdir().unwrap();
    fs::write(tmp.path().join("bad.json"), "[1, 2").unwrap();

    let source = DirectorySource::new(tmp.path());
    match source.resolve("/bad") {
        Resolution::Unavailable { reason } => assert!(reason.contains("bad.json")),
        other => panic!("expected unavailable, got {other:?}"),
    }
}

#[test]
fn test_parent_dir_reference_is_unavailable() {
    let tmp = tempfile::tempdir().unwrap();
    let docs = tmp.path().join("docs");
    fs::create_dir_all(&docs).unwrap();
    write(tmp.path(), "secret.json", json!({"apis": []}));

    let source = DirectorySource::new(&docs);
    match source.resolve("/../secret") {
        Resolution::Unavailable { reason } => assert!(reason.contains("outside")),
        other => panic!("expected unavailable, got {other:?}"),
    }
}
