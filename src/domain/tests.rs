//! Tests for terminology component types

use super::*;
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn test_concept_new() {
    let concept = Concept::new("100001");
    assert_eq!(concept.concept_id, "100001");
    assert!(concept.internal_id.is_none());
    assert!(concept.active.is_none());
}

#[test]
fn test_document_id_roundtrip() {
    let mut concept = Concept::new("100001");
    assert_eq!(concept.document_id(), None);

    concept.set_document_id("doc-1");
    assert_eq!(concept.document_id(), Some("doc-1"));
}

#[test]
fn test_entity_default_is_noop() {
    struct Aggregate;
    impl SearchEntity for Aggregate {}

    let mut value = Aggregate;
    assert_eq!(value.document_id(), None);
    value.set_document_id("ignored");
    assert_eq!(value.document_id(), None);
}

#[test]
fn test_concept_source_deserialization() {
    let source = json!({
        "conceptId": "100001",
        "active": true,
        "moduleId": "900000000000207008"
    });

    let concept: Concept = serde_json::from_value(source).unwrap();
    assert_eq!(concept.concept_id, "100001");
    assert_eq!(concept.active, Some(true));
    assert_eq!(concept.module_id, Some("900000000000207008".to_string()));
    assert!(concept.internal_id.is_none());
}

#[test]
fn test_query_concept_wide_id_serde() {
    let source = json!({
        "conceptIdL": 900_000_000_000_012_004_i64,
        "stated": false,
        "attrMap": {"116680003": ["138875005"]}
    });

    let query_concept: QueryConcept = serde_json::from_value(source).unwrap();
    assert_eq!(query_concept.concept_id, 900_000_000_000_012_004);
    assert_eq!(query_concept.stated, Some(false));
    assert_eq!(query_concept.attr_map, Some(json!({"116680003": ["138875005"]})));
}

#[test]
fn test_member_optional_attributes_default() {
    let source = json!({"referencedComponentId": "50"});
    let member: ReferenceSetMember = serde_json::from_value(source).unwrap();
    assert_eq!(member.referenced_component_id, "50");
    assert!(member.concept_id.is_none());
    assert!(member.refset_id.is_none());
}

#[test]
fn test_unset_attributes_skipped_on_serialize() {
    let relationship = Relationship {
        source_id: "404684003".to_string(),
        ..Default::default()
    };

    let value = serde_json::to_value(&relationship).unwrap();
    assert_eq!(value, json!({"sourceId": "404684003"}));
}
