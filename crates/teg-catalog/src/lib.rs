//! # teg-catalog — Requirement Catalog
//!
//! Stores one requirement set per asset class: nine require-X flags
//! mirroring the holder attribute schema, plus an optional jurisdiction
//! allow-list. The compliance evaluator reads this catalog; asset
//! administration tooling writes it.
//!
//! ## Ownership
//!
//! [`RequirementCatalog`] exclusively owns all requirement sets. The
//! catalog performs no existence check on asset identifiers, so
//! requirements may be configured before or after the external asset
//! registry creates the asset.

pub mod catalog;
pub mod requirements;

pub use catalog::{CatalogError, RequirementCatalog};
pub use requirements::RequirementSet;
