//! Search response and hit types
//!
//! In-memory form of an engine response, plus parsing of the engine's
//! JSON wire shape.

use crate::error::{Error, Result};
use crate::types::{FieldMap, FieldValues, JsonValue};
use serde::Deserialize;

// ============================================================================
// Search Hit
// ============================================================================

/// One matched document as returned by the engine, before typed decoding.
///
/// Carries the engine's stable identity string, the full stored document
/// when the query did not restrict fields, and the projected field mapping
/// when it did. Either `source` or `fields` may be absent/empty depending
/// on how the query was built.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchHit {
    /// Stable per-document identity string
    pub id: String,
    /// Full stored document, when returned
    pub source: Option<JsonValue>,
    /// Projected field mapping, when the query selected fields
    pub fields: FieldMap,
}

impl SearchHit {
    /// Create a hit with the given identity
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    /// Attach a full stored document
    #[must_use]
    pub fn with_source(mut self, source: JsonValue) -> Self {
        self.source = Some(source);
        self
    }

    /// Attach a single-valued projected field
    #[must_use]
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<JsonValue>) -> Self {
        self.fields.insert(name.into(), vec![value.into()]);
        self
    }

    /// Attach a multi-valued projected field
    #[must_use]
    pub fn with_field_values(mut self, name: impl Into<String>, values: FieldValues) -> Self {
        self.fields.insert(name.into(), values);
        self
    }

    /// First projected value of a field, if present
    pub fn field(&self, name: &str) -> Option<&JsonValue> {
        self.fields.get(name).and_then(|values| values.first())
    }

    /// First projected value of a field as a string
    pub fn field_str(&self, name: &str) -> Option<&str> {
        self.field(name).and_then(JsonValue::as_str)
    }

    /// First projected value of a field as an i64.
    ///
    /// Engines serialize long identifiers either as JSON numbers or as
    /// strings depending on mapping settings; both forms are accepted.
    pub fn field_i64(&self, name: &str) -> Option<i64> {
        let value = self.field(name)?;
        value
            .as_i64()
            .or_else(|| value.as_str().and_then(|s| s.parse().ok()))
    }
}

// ============================================================================
// Search Response
// ============================================================================

/// An engine response: ordered hits, total-match count, and any aggregate
/// computations, passed through unmodified by the decoding layer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchResponse {
    /// Matched hits in engine order
    pub hits: Vec<SearchHit>,
    /// Total number of matching documents (may exceed `hits.len()`)
    pub total_hits: u64,
    /// Opaque aggregation results, if the query requested any
    pub aggregations: Option<JsonValue>,
}

impl SearchResponse {
    /// Create a response from hits and a total-match count
    pub fn new(hits: Vec<SearchHit>, total_hits: u64) -> Self {
        Self {
            hits,
            total_hits,
            aggregations: None,
        }
    }

    /// Attach aggregation results
    #[must_use]
    pub fn with_aggregations(mut self, aggregations: JsonValue) -> Self {
        self.aggregations = Some(aggregations);
        self
    }

    /// Parse a response from the engine's JSON wire shape.
    ///
    /// Accepts the usual envelope: `hits.hits[]` with `_id`, optional
    /// `_source`, optional `fields`; `hits.total` as either a bare number
    /// (older engines) or a `{value, relation}` object; and a top-level
    /// `aggregations` object.
    pub fn from_json(body: &str) -> Result<Self> {
        let raw: RawResponse =
            serde_json::from_str(body).map_err(|e| Error::malformed_response(e.to_string()))?;

        let hits: Vec<SearchHit> = raw
            .hits
            .hits
            .into_iter()
            .map(|hit| SearchHit {
                id: hit.id,
                source: hit.source,
                fields: hit.fields,
            })
            .collect();

        let total_hits = match raw.hits.total {
            Some(RawTotal::Count(n)) => n,
            Some(RawTotal::Object { value }) => value,
            None => hits.len() as u64,
        };

        Ok(Self {
            hits,
            total_hits,
            aggregations: raw.aggregations,
        })
    }
}

// ============================================================================
// Wire shape
// ============================================================================

#[derive(Debug, Deserialize)]
struct RawResponse {
    #[serde(default)]
    hits: RawHits,
    #[serde(default)]
    aggregations: Option<JsonValue>,
}

#[derive(Debug, Default, Deserialize)]
struct RawHits {
    #[serde(default)]
    total: Option<RawTotal>,
    #[serde(default)]
    hits: Vec<RawHit>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawTotal {
    Count(u64),
    Object { value: u64 },
}

#[derive(Debug, Deserialize)]
struct RawHit {
    #[serde(rename = "_id")]
    id: String,
    #[serde(rename = "_source", default)]
    source: Option<JsonValue>,
    #[serde(default)]
    fields: FieldMap,
}
