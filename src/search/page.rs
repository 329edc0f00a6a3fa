//! Page request and result page types

use crate::types::JsonValue;

/// A requested page of results
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// Zero-based page number
    pub page: u32,
    /// Number of results per page
    pub size: u32,
}

impl PageRequest {
    /// Create a page request
    pub fn of(page: u32, size: u32) -> Self {
        Self { page, size }
    }

    /// Offset of the first result on this page
    pub fn offset(&self) -> u64 {
        u64::from(self.page) * u64::from(self.size)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self { page: 0, size: 50 }
    }
}

/// One decoded page of typed results
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    /// Decoded results, preserving engine hit order
    pub items: Vec<T>,
    /// Total number of matching documents across all pages
    pub total: u64,
    /// The request that produced this page
    pub page: PageRequest,
    /// Aggregation results passed through from the response
    pub aggregations: Option<JsonValue>,
}

impl<T> Page<T> {
    /// Create a page from items and a total count
    pub fn new(items: Vec<T>, total: u64, page: PageRequest) -> Self {
        Self {
            items,
            total,
            page,
            aggregations: None,
        }
    }

    /// Attach aggregation results
    #[must_use]
    pub fn with_aggregations(mut self, aggregations: Option<JsonValue>) -> Self {
        self.aggregations = aggregations;
        self
    }

    /// Number of items on this page
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether this page is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
