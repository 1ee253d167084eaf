//! `catalog-core`: shared building blocks for the catalog admin toolkit.
//!
//! This crate contains **pure domain** primitives (no HTTP, no IO).

pub mod error;
pub mod id;

pub use error::{DomainError, DomainResult};
pub use id::{BrandId, ProductCode, TypeId};
