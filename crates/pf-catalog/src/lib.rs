//! Pricing catalog for the PrintForge estimation service
//!
//! The catalog is a process-wide constant: material rates, quality tier
//! multipliers, and post-processing options. It is embedded in the binary
//! and never mutated at runtime; shells list it via the API and reference
//! entries by id.
//!
//! Ids are closed enums rather than raw strings. Lookup by typed id is
//! total; the fallible surface is the string boundary (`MaterialId::parse`
//! and siblings), which fails with [`pf_types::AppError::UnknownCatalogEntry`].

pub mod data;
pub mod types;

pub use data::CATALOG;
pub use types::{
    MaterialEntry, MaterialId, PostProcessEntry, PostProcessId, PricingCatalog, QualityEntry,
    QualityId,
};
