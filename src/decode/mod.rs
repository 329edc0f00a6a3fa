//! Result decoding module
//!
//! # Overview
//!
//! Decides per response whether typed results can be decoded straight
//! from the projected field mapping (fast path) or must go through full
//! stored-document decoding (standard path), and carries out the chosen
//! path uniformly for every hit.
//!
//! The fast path is driven by the [`DecoderRegistry`], a per-type table
//! of sparse decoder functions. The standard path is a visible,
//! swappable collaborator behind the [`StandardMapper`] trait, with
//! [`SourceMapper`] as the default implementation.

mod mapper;
mod registry;
mod standard;

pub use mapper::FastResultMapper;
pub use registry::{DecoderRegistry, SparseDecodeFn};
pub use standard::{SourceMapper, StandardMapper};
