//! End-to-end mapping tests from raw engine JSON

use pretty_assertions::assert_eq;
use serde_json::json;
use termstore_search::decode::{FastResultMapper, SourceMapper, StandardMapper};
use termstore_search::domain::{Concept, QueryConcept, ReferenceSetMember};
use termstore_search::search::{PageRequest, SearchResponse};

fn mapper() -> FastResultMapper<SourceMapper> {
    FastResultMapper::new(SourceMapper::new())
}

#[test]
fn projected_concept_response_takes_fast_path() {
    let body = r#"{
        "took": 2,
        "hits": {
            "total": {"value": 1042, "relation": "eq"},
            "hits": [
                {"_id": "404684003", "fields": {"conceptId": ["404684003"]}},
                {"_id": "138875005", "fields": {"conceptId": ["138875005"]}},
                {"_id": "71388002",  "fields": {"conceptId": ["71388002"]}}
            ]
        }
    }"#;

    let response = SearchResponse::from_json(body).unwrap();
    let page = mapper()
        .map_results::<Concept>(&response, &PageRequest::of(0, 3))
        .unwrap();

    assert_eq!(page.total, 1042);
    let concept_ids: Vec<&str> = page.items.iter().map(|c| c.concept_id.as_str()).collect();
    assert_eq!(concept_ids, vec!["404684003", "138875005", "71388002"]);
    for concept in &page.items {
        assert_eq!(concept.internal_id.as_deref(), Some(concept.concept_id.as_str()));
        assert!(concept.active.is_none());
    }
}

#[test]
fn full_document_response_takes_standard_path() {
    let body = r#"{
        "hits": {
            "total": {"value": 1},
            "hits": [
                {
                    "_id": "doc-1",
                    "_source": {
                        "conceptId": "404684003",
                        "active": true,
                        "moduleId": "900000000000207008"
                    }
                }
            ]
        }
    }"#;

    let response = SearchResponse::from_json(body).unwrap();
    let page_request = PageRequest::of(0, 10);

    let dispatched = mapper()
        .map_results::<Concept>(&response, &page_request)
        .unwrap();
    let direct = SourceMapper::new()
        .map_results::<Concept>(&response, &page_request)
        .unwrap();
    assert_eq!(dispatched, direct);

    let concept = &dispatched.items[0];
    assert_eq!(concept.concept_id, "404684003");
    assert_eq!(concept.active, Some(true));
    assert_eq!(concept.module_id.as_deref(), Some("900000000000207008"));
    assert_eq!(concept.internal_id.as_deref(), Some("doc-1"));
}

#[test]
fn projected_member_response_with_partial_optional_fields() {
    let body = r#"{
        "hits": {
            "total": {"value": 2},
            "hits": [
                {
                    "_id": "m-1",
                    "fields": {
                        "referencedComponentId": ["50"],
                        "conceptId": ["100001"]
                    }
                },
                {
                    "_id": "m-2",
                    "fields": {"referencedComponentId": ["51"]}
                }
            ]
        }
    }"#;

    let response = SearchResponse::from_json(body).unwrap();
    let page = mapper()
        .map_results::<ReferenceSetMember>(&response, &PageRequest::of(0, 10))
        .unwrap();

    assert_eq!(page.items[0].referenced_component_id, "50");
    assert_eq!(page.items[0].concept_id.as_deref(), Some("100001"));
    assert_eq!(page.items[1].referenced_component_id, "51");
    assert_eq!(page.items[1].concept_id, None);
}

#[test]
fn projected_query_concept_response_with_aggregations() {
    let body = r#"{
        "hits": {
            "total": {"value": 1},
            "hits": [
                {
                    "_id": "qc-1",
                    "fields": {
                        "conceptIdL": [900000000000012004],
                        "attrMap": [{"116680003": ["138875005"]}]
                    }
                }
            ]
        },
        "aggregations": {"stated": {"doc_count": 1}}
    }"#;

    let response = SearchResponse::from_json(body).unwrap();
    let page = mapper()
        .map_results::<QueryConcept>(&response, &PageRequest::of(0, 10))
        .unwrap();

    assert_eq!(page.items[0].concept_id, 900_000_000_000_012_004);
    assert_eq!(
        page.items[0].attr_map,
        Some(json!({"116680003": ["138875005"]}))
    );
    assert_eq!(page.aggregations, Some(json!({"stated": {"doc_count": 1}})));
}

#[test]
fn empty_response_yields_empty_page() {
    let body = r#"{"hits": {"total": {"value": 0}, "hits": []}}"#;
    let response = SearchResponse::from_json(body).unwrap();

    let page = mapper()
        .map_results::<Concept>(&response, &PageRequest::of(0, 10))
        .unwrap();

    assert!(page.is_empty());
    assert_eq!(page.total, 0);
    assert_eq!(page.aggregations, None);
}
