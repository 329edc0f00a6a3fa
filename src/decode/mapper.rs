//! Dispatching result mapper
//!
//! Inspects each response and routes decoding through the sparse decoder
//! registry when the response was field-projected, or through the
//! standard mapper otherwise.

use super::registry::{DecoderRegistry, SparseDecodeFn};
use super::standard::StandardMapper;
use crate::domain::SearchEntity;
use crate::error::Result;
use crate::search::{Page, PageRequest, SearchResponse};
use serde::de::DeserializeOwned;
use std::any::type_name;
use std::sync::Arc;
use tracing::debug;

/// Result mapper that decodes projected responses through per-type
/// sparse decoders and delegates everything else to a standard mapper.
///
/// Holds the standard mapper as an explicit collaborator rather than
/// extending it, so the fallback path stays visible and swappable.
#[derive(Debug)]
pub struct FastResultMapper<S> {
    registry: Arc<DecoderRegistry>,
    standard: S,
}

impl<S: StandardMapper> FastResultMapper<S> {
    /// Create a mapper over the shared registry of built-in decoders
    pub fn new(standard: S) -> Self {
        Self {
            registry: DecoderRegistry::shared(),
            standard,
        }
    }

    /// Create a mapper over a custom registry
    pub fn with_registry(registry: DecoderRegistry, standard: S) -> Self {
        Self {
            registry: Arc::new(registry),
            standard,
        }
    }

    /// Decode a response into a page of `T`.
    ///
    /// The fast path is taken when the response has at least one hit, a
    /// sparse decoder is registered for `T`, and the first hit carries a
    /// non-empty field mapping. A non-empty field mapping on hit zero is
    /// taken as the signal that the whole response was field-projected,
    /// since the query controls field selection uniformly across hits;
    /// responses with heterogeneous per-hit projection are not supported.
    ///
    /// On the fast path every hit is decoded in response order and its
    /// engine document identity backfilled from the hit when the decoder
    /// left it unset. Ineligible responses are delegated unchanged to the
    /// standard mapper. A decoder returning an error is a defect in that
    /// decoder and propagates to the caller.
    pub fn map_results<T>(
        &self,
        response: &SearchResponse,
        page_request: &PageRequest,
    ) -> Result<Page<T>>
    where
        T: SearchEntity + DeserializeOwned + 'static,
    {
        let Some(decoder) = self.sparse_decoder::<T>(response) else {
            debug!(
                hits = response.hits.len(),
                result_type = type_name::<T>(),
                "standard result mapping"
            );
            return self.standard.map_results(response, page_request);
        };

        debug!(
            hits = response.hits.len(),
            result_type = type_name::<T>(),
            "fast result mapping"
        );

        let mut items = Vec::with_capacity(response.hits.len());
        for hit in &response.hits {
            let mut item = decoder(hit)?;
            backfill_document_id(&mut item, &hit.id);
            items.push(item);
        }

        Ok(Page::new(items, response.total_hits, *page_request)
            .with_aggregations(response.aggregations.clone()))
    }

    /// The registered decoder for `T`, if this response is eligible for
    /// the fast path.
    fn sparse_decoder<T: 'static>(&self, response: &SearchResponse) -> Option<SparseDecodeFn<T>> {
        let first = response.hits.first()?;
        if first.fields.is_empty() {
            return None;
        }
        self.registry.lookup::<T>()
    }
}

/// Assign the engine document identity when the decoder left it unset.
///
/// Never overwrites an identity a decoder already populated. For types
/// without a string identity attribute the trait's default no-op methods
/// make this do nothing.
fn backfill_document_id<T: SearchEntity>(item: &mut T, hit_id: &str) {
    if item.document_id().is_none() {
        item.set_document_id(hit_id);
    }
}
