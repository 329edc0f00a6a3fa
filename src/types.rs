//! Common types used throughout termstore-search
//!
//! This module contains shared type definitions and type aliases
//! used across multiple modules.

use std::collections::HashMap;

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// JSON object type
pub type JsonObject = serde_json::Map<String, JsonValue>;

/// Projected values of a single stored field. Engines return projected
/// fields as lists even when the stored attribute is single-valued.
pub type FieldValues = Vec<JsonValue>;

/// Per-hit mapping from stored field name to projected values
pub type FieldMap = HashMap<String, FieldValues>;
