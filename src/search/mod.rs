//! Search response module
//!
//! Models the surface consumed from the search engine client: the
//! response with its ordered hit sequence, per-hit identity and projected
//! field mapping, total-match count, opaque aggregations, and the
//! page request / result page pair handed back to callers.

mod page;
mod types;

pub use page::{Page, PageRequest};
pub use types::{SearchHit, SearchResponse};
