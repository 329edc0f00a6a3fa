//! Terminology component types
//!
//! Each type carries the engine-internal document identity plus the
//! stored attributes this layer reads. Everything is
//! `Default`-constructible so sparse decoders can populate only the
//! projected attributes and leave the rest unset.

use super::entity::SearchEntity;
use crate::types::JsonValue;
use serde::{Deserialize, Serialize};

// ============================================================================
// Concept
// ============================================================================

/// A terminology concept
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Concept {
    /// Engine document identity
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub internal_id: Option<String>,
    /// Concept identifier
    pub concept_id: String,
    /// Whether the concept is active
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    /// Module the concept belongs to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub module_id: Option<String>,
}

impl Concept {
    /// Stored field name for the concept identifier
    pub const CONCEPT_ID_FIELD: &'static str = "conceptId";

    /// Create a concept with only its identifier populated
    pub fn new(concept_id: impl Into<String>) -> Self {
        Self {
            concept_id: concept_id.into(),
            ..Default::default()
        }
    }
}

impl SearchEntity for Concept {
    fn document_id(&self) -> Option<&str> {
        self.internal_id.as_deref()
    }

    fn set_document_id(&mut self, id: &str) {
        self.internal_id = Some(id.to_string());
    }
}

// ============================================================================
// Description
// ============================================================================

/// A concept description (term)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Description {
    /// Engine document identity
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub internal_id: Option<String>,
    /// Description identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description_id: Option<String>,
    /// Identifier of the concept this description belongs to
    pub concept_id: String,
    /// The term text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub term: Option<String>,
    /// Language code of the term
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language_code: Option<String>,
    /// Whether the description is active
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

impl Description {
    /// Stored field name for the owning concept identifier
    pub const CONCEPT_ID_FIELD: &'static str = "conceptId";
}

impl SearchEntity for Description {
    fn document_id(&self) -> Option<&str> {
        self.internal_id.as_deref()
    }

    fn set_document_id(&mut self, id: &str) {
        self.internal_id = Some(id.to_string());
    }
}

// ============================================================================
// Relationship
// ============================================================================

/// A relationship between two concepts
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Relationship {
    /// Engine document identity
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub internal_id: Option<String>,
    /// Source concept identifier
    pub source_id: String,
    /// Destination concept identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination_id: Option<String>,
    /// Relationship type concept identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_id: Option<String>,
    /// Whether the relationship is active
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

impl Relationship {
    /// Stored field name for the source concept identifier
    pub const SOURCE_ID_FIELD: &'static str = "sourceId";
}

impl SearchEntity for Relationship {
    fn document_id(&self) -> Option<&str> {
        self.internal_id.as_deref()
    }

    fn set_document_id(&mut self, id: &str) {
        self.internal_id = Some(id.to_string());
    }
}

// ============================================================================
// Reference Set Member
// ============================================================================

/// A reference set member
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceSetMember {
    /// Engine document identity
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub internal_id: Option<String>,
    /// Member UUID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member_id: Option<String>,
    /// Identifier of the reference set this member belongs to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refset_id: Option<String>,
    /// Identifier of the referenced component
    pub referenced_component_id: String,
    /// Owning concept identifier, when the referenced component is or
    /// belongs to a concept
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub concept_id: Option<String>,
    /// Whether the member is active
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

impl ReferenceSetMember {
    /// Stored field name for the referenced component identifier
    pub const REFERENCED_COMPONENT_ID_FIELD: &'static str = "referencedComponentId";
    /// Stored field name for the owning concept identifier
    pub const CONCEPT_ID_FIELD: &'static str = "conceptId";
}

impl SearchEntity for ReferenceSetMember {
    fn document_id(&self) -> Option<&str> {
        self.internal_id.as_deref()
    }

    fn set_document_id(&mut self, id: &str) {
        self.internal_id = Some(id.to_string());
    }
}

// ============================================================================
// Query Concept
// ============================================================================

/// A semantic-index entry used to answer subsumption queries
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryConcept {
    /// Engine document identity
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub internal_id: Option<String>,
    /// Concept identifier in its wide numeric form
    #[serde(rename = "conceptIdL")]
    pub concept_id: i64,
    /// Whether this entry indexes the stated form
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stated: Option<bool>,
    /// Serialized attribute map blob, passed through untouched
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attr_map: Option<JsonValue>,
}

impl QueryConcept {
    /// Stored field name for the wide numeric concept identifier
    pub const CONCEPT_ID_FIELD: &'static str = "conceptIdL";
    /// Stored field name for the attribute map blob
    pub const ATTR_MAP_FIELD: &'static str = "attrMap";
}

impl SearchEntity for QueryConcept {
    fn document_id(&self) -> Option<&str> {
        self.internal_id.as_deref()
    }

    fn set_document_id(&mut self, id: &str) {
        self.internal_id = Some(id.to_string());
    }
}
