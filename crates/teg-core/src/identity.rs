//! # Identity Newtypes
//!
//! Domain-primitive newtypes for identifiers throughout the TEG Stack.
//! Each identifier is a distinct type: you cannot pass an [`AssetId`]
//! where an [`IdentityId`] is expected.
//!
//! ## The zero identity
//!
//! [`IdentityId`] wraps a UUID; the nil UUID is the "zero identity" that
//! restricted operations reject. It is representable on purpose, because
//! callers at the system boundary can supply it, and the registry must
//! answer with a structured error rather than a panic.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A holder, verifier, or administrator identity.
///
/// All principals share one identifier namespace: the same identity may
/// hold units of an asset, be listed as a verifier, and own a registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IdentityId(Uuid);

impl IdentityId {
    /// Create a new random identity.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create an identity from an existing UUID.
    pub fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// Whether this is the nil (zero) identity.
    ///
    /// The zero identity is never a valid holder, verifier, or owner.
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl Default for IdentityId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for IdentityId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for IdentityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for IdentityId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::from_str(s).map(Self)
    }
}

/// An asset-class identifier.
///
/// Assigned sequentially starting at 1 by the external asset registry and
/// never reused. The requirement catalog performs no existence check on
/// asset identifiers, so any value is acceptable as a key; identifier 0 is
/// simply never assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AssetId(u64);

impl AssetId {
    /// Wrap a raw asset identifier.
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// The raw identifier value.
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl From<u64> for AssetId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for AssetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "asset:{}", self.0)
    }
}
