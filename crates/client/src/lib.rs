//! `catalog-client`
//!
//! **Responsibility:** talk to the Catalog Service over HTTP.
//!
//! This crate provides:
//! - `CatalogClient`: product type, brand and product-edit endpoints
//! - `SubmitGate` / `submit_form`: the single-flight save path for the
//!   variant edit form
//!
//! The Catalog Service stays the authority; nothing here persists state.

pub mod client;
pub mod config;
pub mod error;
pub mod submit;

pub use client::{CatalogClient, ProductSink, Updated};
pub use config::ClientConfig;
pub use error::ClientError;
pub use submit::{Notice, SubmitGate, SubmitOutcome, SubmitPermit, submit_form};
