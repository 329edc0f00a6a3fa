//! Terminology component types
//!
//! The typed results produced by decoding: concepts, descriptions,
//! relationships, reference set members, and the semantic-index query
//! concept, plus the [`SearchEntity`] capability trait connecting each
//! type to its engine document identity.

mod components;
mod entity;

pub use components::{Concept, Description, QueryConcept, ReferenceSetMember, Relationship};
pub use entity::SearchEntity;

#[cfg(test)]
mod tests;
