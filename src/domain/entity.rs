//! The search entity capability trait

/// Capability trait connecting a result type to its engine document
/// identity.
///
/// Types stored in the engine with a string identity attribute implement
/// both methods over that attribute. The defaults are deliberate no-ops:
/// a type without a string identity attribute keeps them, which makes
/// post-decode identity backfill degrade to "identity not set" instead of
/// failing. This mirrors how the standard decoder assigns identity, so
/// the fast and standard paths are externally indistinguishable in this
/// respect.
pub trait SearchEntity {
    /// The engine document identity, if this type declares one and it has
    /// been set.
    fn document_id(&self) -> Option<&str> {
        None
    }

    /// Assign the engine document identity. No-op for types without a
    /// string identity attribute.
    fn set_document_id(&mut self, _id: &str) {}
}
