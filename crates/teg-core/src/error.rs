//! # Error Types — Structured Error Hierarchy
//!
//! Core error types shared across the TEG Stack. All errors use
//! `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! ## Design
//!
//! - Every error is raised synchronously at the point of the offending
//!   call, before any state is touched. There is no partial-apply-then-
//!   error path anywhere in the stack.
//! - Authorization failures carry the caller and the role that was
//!   required, so an audit reader can tell who attempted what.
//! - There is no retry logic: the same inputs fail the same way every
//!   time, and callers must change the input (obtain authorization, fix
//!   the identifier) before retrying.

use thiserror::Error;

use crate::auth::Role;
use crate::identity::IdentityId;

/// Validation failure for a core domain primitive.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// An empty jurisdiction code was supplied.
    #[error("invalid jurisdiction code: must be non-empty")]
    InvalidJurisdictionCode,

    /// A timestamp string could not be parsed or was not UTC.
    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(String),

    /// An attribute identifier string did not name any schema attribute.
    #[error("unknown attribute: {0:?}")]
    UnknownAttribute(String),

    /// A stored record carries an attribute-schema version this build
    /// does not understand.
    #[error("unsupported attribute schema version {found} (this build supports {supported})")]
    UnsupportedSchemaVersion {
        /// Version found on the record.
        found: u16,
        /// Version this build reads and writes.
        supported: u16,
    },
}

/// The caller lacks the role required by a restricted operation.
///
/// Produced only by [`crate::auth::ensure_authorized`], so every
/// restricted call site reports authorization failures identically.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("caller {caller} lacks {role} rights")]
pub struct Unauthorized {
    /// The identity that attempted the operation.
    pub caller: IdentityId,
    /// The role the operation requires.
    pub role: Role,
}
