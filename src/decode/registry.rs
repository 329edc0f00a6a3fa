//! Sparse decoder registry
//!
//! Associates result types with functions that build a partially
//! populated component from a hit's projected field mapping. Each
//! decoder reads only the fields a projected query for that type
//! requests; a missing optional field leaves the attribute unset, while
//! a missing required field is an error (the caller's query did not
//! honor the projection contract).

use crate::domain::{Concept, Description, QueryConcept, ReferenceSetMember, Relationship};
use crate::error::{Error, Result};
use crate::search::SearchHit;
use once_cell::sync::Lazy;
use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// A sparse decoder function for one result type
pub type SparseDecodeFn<T> = Arc<dyn Fn(&SearchHit) -> Result<T> + Send + Sync>;

static SHARED: Lazy<Arc<DecoderRegistry>> = Lazy::new(|| Arc::new(DecoderRegistry::with_defaults()));

/// Per-type table of sparse decoder functions.
///
/// Built once at startup and read-only afterwards; lookups are pure and
/// safe to perform concurrently. Registering a decoder for a type that
/// already has one replaces it.
#[derive(Default)]
pub struct DecoderRegistry {
    decoders: HashMap<TypeId, Box<dyn Any + Send + Sync>>,
}

impl DecoderRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with the built-in decoders registered
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.register(|hit: &SearchHit| {
            let concept_id = hit
                .field_str(Concept::CONCEPT_ID_FIELD)
                .ok_or_else(|| Error::missing_field(&hit.id, Concept::CONCEPT_ID_FIELD))?;
            Ok(Concept::new(concept_id))
        });

        registry.register(|hit: &SearchHit| {
            let concept_id = hit
                .field_str(Description::CONCEPT_ID_FIELD)
                .ok_or_else(|| Error::missing_field(&hit.id, Description::CONCEPT_ID_FIELD))?;
            Ok(Description {
                concept_id: concept_id.to_string(),
                ..Default::default()
            })
        });

        registry.register(|hit: &SearchHit| {
            let source_id = hit
                .field_str(Relationship::SOURCE_ID_FIELD)
                .ok_or_else(|| Error::missing_field(&hit.id, Relationship::SOURCE_ID_FIELD))?;
            Ok(Relationship {
                source_id: source_id.to_string(),
                ..Default::default()
            })
        });

        registry.register(|hit: &SearchHit| {
            let referenced_component_id = hit
                .field_str(ReferenceSetMember::REFERENCED_COMPONENT_ID_FIELD)
                .ok_or_else(|| {
                    Error::missing_field(&hit.id, ReferenceSetMember::REFERENCED_COMPONENT_ID_FIELD)
                })?;
            let mut member = ReferenceSetMember {
                referenced_component_id: referenced_component_id.to_string(),
                ..Default::default()
            };
            // conceptId is only projected for concept-linked members
            if let Some(concept_id) = hit.field_str(ReferenceSetMember::CONCEPT_ID_FIELD) {
                member.concept_id = Some(concept_id.to_string());
            }
            Ok(member)
        });

        registry.register(|hit: &SearchHit| {
            let raw_id = hit
                .field(QueryConcept::CONCEPT_ID_FIELD)
                .ok_or_else(|| Error::missing_field(&hit.id, QueryConcept::CONCEPT_ID_FIELD))?
                .clone();
            let concept_id = hit.field_i64(QueryConcept::CONCEPT_ID_FIELD).ok_or_else(|| {
                Error::decode(format!(
                    "field '{}' of hit '{}' is not a numeric identifier: {raw_id}",
                    QueryConcept::CONCEPT_ID_FIELD,
                    hit.id
                ))
            })?;
            let mut query_concept = QueryConcept {
                concept_id,
                ..Default::default()
            };
            if let Some(attr_map) = hit.field(QueryConcept::ATTR_MAP_FIELD) {
                query_concept.attr_map = Some(attr_map.clone());
            }
            Ok(query_concept)
        });

        registry
    }

    /// The process-wide registry holding the built-in decoders
    pub fn shared() -> Arc<Self> {
        Arc::clone(&SHARED)
    }

    /// Register a sparse decoder for `T`, replacing any existing one
    pub fn register<T, F>(&mut self, decoder: F)
    where
        T: 'static,
        F: Fn(&SearchHit) -> Result<T> + Send + Sync + 'static,
    {
        let decoder: SparseDecodeFn<T> = Arc::new(decoder);
        self.decoders.insert(TypeId::of::<T>(), Box::new(decoder));
    }

    /// Look up the sparse decoder for `T`
    pub fn lookup<T: 'static>(&self) -> Option<SparseDecodeFn<T>> {
        self.decoders
            .get(&TypeId::of::<T>())
            .and_then(|decoder| decoder.downcast_ref::<SparseDecodeFn<T>>())
            .cloned()
    }

    /// Whether a sparse decoder is registered for `T`
    pub fn contains<T: 'static>(&self) -> bool {
        self.decoders.contains_key(&TypeId::of::<T>())
    }

    /// Number of registered decoders
    pub fn len(&self) -> usize {
        self.decoders.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.decoders.is_empty()
    }
}

impl fmt::Debug for DecoderRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DecoderRegistry")
            .field("decoders", &self.decoders.len())
            .finish()
    }
}
