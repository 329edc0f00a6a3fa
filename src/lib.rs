//! # Termstore Search
//!
//! Selective result decoding for terminology component search responses.
//!
//! When a search query requests only a narrow set of stored fields per
//! document (a sparse projection), the engine's hits carry those fields
//! instead of full stored documents. This crate reconstructs lightweight
//! typed components directly from the projected fields, skipping full
//! document deserialization, and falls back transparently to standard
//! decoding when a response was not projected or the target type has no
//! sparse decoder.
//!
//! ## Quick Start
//!
//! ```rust
//! use termstore_search::decode::{FastResultMapper, SourceMapper};
//! use termstore_search::domain::Concept;
//! use termstore_search::search::{PageRequest, SearchHit, SearchResponse};
//!
//! let response = SearchResponse::new(
//!     vec![SearchHit::new("100001").with_field(Concept::CONCEPT_ID_FIELD, "100001")],
//!     1,
//! );
//!
//! let mapper = FastResultMapper::new(SourceMapper::new());
//! let page = mapper
//!     .map_results::<Concept>(&response, &PageRequest::of(0, 10))
//!     .unwrap();
//! assert_eq!(page.items[0].concept_id, "100001");
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │                    FastResultMapper                       │
//! │  map_results(response, page) → Page<T>                    │
//! │  eligible? ── yes ──► registry decoder + id backfill      │
//! │           └── no ───► StandardMapper (full _source)       │
//! └───────────────────────────────────────────────────────────┘
//!            │                              │
//! ┌──────────┴──────────┐       ┌───────────┴───────────┐
//! │  DecoderRegistry    │       │  SourceMapper         │
//! │  Concept            │       │  serde _source decode │
//! │  Description        │       │  id from hit          │
//! │  Relationship       │       └───────────────────────┘
//! │  ReferenceSetMember │
//! │  QueryConcept       │
//! └─────────────────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the crate
pub mod error;

/// Common types and type aliases
pub mod types;

/// Search response, hit, and page types
pub mod search;

/// Terminology component types and the identity capability trait
pub mod domain;

/// Fast/standard result decoding dispatch and the sparse decoder registry
pub mod decode;

// ============================================================================
// Re-exports
// ============================================================================

pub use decode::{DecoderRegistry, FastResultMapper, SourceMapper, StandardMapper};
pub use error::{Error, Result};
pub use search::{Page, PageRequest, SearchHit, SearchResponse};
pub use types::*;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
