use docmeta_core::metadata::{DocumentMetadata, MetadataError};
use serde_json::Value;

#[test]
fn golden_full_record_serialization() {
    let record = DocumentMetadata::new("2024-01-01T00:00:00+00:00")
        .with_updated_at("2024-01-02T00:00:00+00:00")
        .with_source("a.pdf")
        .with_type("application/pdf");

    let json_str = serde_json::to_string(&record).unwrap();

    assert_eq!(
        json_str,
        r#"{"created_at":"2024-01-01T00:00:00+00:00","updated_at":"2024-01-02T00:00:00+00:00","source":"a.pdf","type":"application/pdf"}"#
    );
}

#[test]
fn golden_absent_fields_are_omitted_not_null() {
    let record = DocumentMetadata::new("2024-01-01T00:00:00+00:00").with_type("text/html");

    let json_str = serde_json::to_string(&record).unwrap();
    assert_eq!(
        json_str,
        r#"{"created_at":"2024-01-01T00:00:00+00:00","type":"text/html"}"#
    );
    assert!(!json_str.contains("null"));

    let map = record.to_map();
    assert!(!map.contains_key("updated_at"));
    assert!(!map.contains_key("source"));
}

#[test]
fn to_map_preserves_declaration_order() {
    let record = DocumentMetadata::new("2024-01-01T00:00:00+00:00")
        .with_type("application/pdf")
        .with_source("a.pdf");

    let keys: Vec<String> = record.to_map().keys().cloned().collect();
    assert_eq!(keys, ["created_at", "source", "type"]);

    let json_str = Value::Object(record.to_map()).to_string();
    let src_pos = json_str.find("\"source\":").unwrap();
    let type_pos = json_str.find("\"type\":").unwrap();
    assert!(src_pos < type_pos);
}

#[test]
fn deserializes_with_missing_optionals() {
    let record = DocumentMetadata::from_json(r#"{"created_at":"2024-01-01T00:00:00Z","type":"image/png"}"#).unwrap();

    assert_eq!(record.created_at, "2024-01-01T00:00:00Z");
    assert_eq!(record.content_type.as_deref(), Some("image/png"));
    assert_eq!(record.source, None);
    assert_eq!(record.updated_at, None);
}

#[test]
fn deserialization_requires_created_at() {
    let result = DocumentMetadata::from_json(r#"{"source":"a.pdf"}"#);
    assert!(matches!(result, Err(MetadataError::InvalidJson(_))));
}

#[test]
fn construction_does_not_validate_timestamps() {
    let record = DocumentMetadata::new("yesterday");

    assert_eq!(record.to_map()["created_at"], Value::String("yesterday".into()));
    assert!(matches!(
        record.created_at_instant(),
        Err(MetadataError::InvalidTimestamp { .. })
    ));
}
