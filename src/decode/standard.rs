//! Standard (full) result decoding
//!
//! The fallback used whenever a response is not eligible for sparse
//! decoding. Kept behind a trait so embedders can substitute their own
//! full decoder; the dispatching mapper delegates to it unchanged.

use crate::domain::SearchEntity;
use crate::error::{Error, Result};
use crate::search::{Page, PageRequest, SearchResponse};
use serde::de::DeserializeOwned;

/// Full decoding of a search response into a page of typed results
pub trait StandardMapper: Send + Sync {
    /// Decode every hit's full stored document into a `T`
    fn map_results<T>(&self, response: &SearchResponse, page_request: &PageRequest) -> Result<Page<T>>
    where
        T: SearchEntity + DeserializeOwned;
}

/// Default standard mapper: deserializes each hit's stored document with
/// serde and assigns the engine document identity from the hit.
#[derive(Debug, Clone, Copy, Default)]
pub struct SourceMapper;

impl SourceMapper {
    /// Create a source mapper
    pub fn new() -> Self {
        Self
    }
}

impl StandardMapper for SourceMapper {
    fn map_results<T>(&self, response: &SearchResponse, page_request: &PageRequest) -> Result<Page<T>>
    where
        T: SearchEntity + DeserializeOwned,
    {
        let mut items = Vec::with_capacity(response.hits.len());
        for hit in &response.hits {
            let source = hit
                .source
                .as_ref()
                .ok_or_else(|| Error::missing_source(&hit.id))?;
            let mut item: T = serde_json::from_value(source.clone())?;
            if item.document_id().is_none() {
                item.set_document_id(&hit.id);
            }
            items.push(item);
        }

        Ok(Page::new(items, response.total_hits, *page_request)
            .with_aggregations(response.aggregations.clone()))
    }
}
