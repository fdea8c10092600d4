//! # teg-core — Foundational Types for the Transfer Eligibility Gate
//!
//! This crate is the bedrock of the TEG Stack. It defines the type-system
//! primitives shared by the attribute registry, the requirement catalog,
//! and the compliance evaluator. Every other crate in the workspace depends
//! on `teg-core`; it depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrappers for domain primitives.** [`IdentityId`],
//!    [`AssetId`], [`JurisdictionCode`] — no bare strings or integers for
//!    identifiers, so a holder can never be passed where an asset is
//!    expected.
//!
//! 2. **Single `Attribute` enum.** One definition, nine variants, exhaustive
//!    `match` everywhere. Adding an attribute forces the registry, the
//!    catalog, and the evaluator to handle it at compile time; there is no
//!    dynamically-extensible attribute map to drift out of sync.
//!
//! 3. **One authorization predicate.** The owner-or-listed-member check is
//!    implemented once in [`auth`] and reused by every restricted
//!    operation, so the call sites cannot diverge.
//!
//! 4. **UTC-only timestamps.** [`Timestamp`] enforces UTC with Z suffix at
//!    seconds precision; non-UTC inputs are rejected at construction.
//!
//! 5. **Key-only audit events.** [`audit::AuditEvent`] names the affected
//!    identity or asset, never the written payload, bounding log size.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `teg-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public data types derive `Debug`, `Clone`, and implement
//!   `Serialize`/`Deserialize`.

pub mod attributes;
pub mod audit;
pub mod auth;
pub mod error;
pub mod identity;
pub mod jurisdiction;
pub mod temporal;

// Re-export primary types for ergonomic imports.
pub use attributes::{Attribute, AttributeSet, ATTRIBUTE_COUNT, ATTRIBUTE_SCHEMA_VERSION};
pub use audit::{AuditEvent, AuditRecord, AuditTrail};
pub use auth::{ensure_authorized, Role};
pub use error::{Unauthorized, ValidationError};
pub use identity::{AssetId, IdentityId};
pub use jurisdiction::JurisdictionCode;
pub use temporal::Timestamp;
