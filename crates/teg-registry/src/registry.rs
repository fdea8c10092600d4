//! # Attribute Registry
//!
//! The aggregate owning all verification profiles and the verifier set.
//! Mutations are guarded by the shared authorization predicate and
//! validate fully before touching state: an `Err` return means nothing
//! changed.
//!
//! ## Access Rules
//!
//! - Verifier management is owner-exclusive.
//! - Profile writes require the owner or a listed verifier.
//! - All reads are unrestricted, infallible, and return the zero value
//!   for holders that were never written.

use std::collections::{HashMap, HashSet};

use thiserror::Error;

use teg_core::{
    ensure_authorized, AuditEvent, AuditTrail, IdentityId, JurisdictionCode, Unauthorized,
    ValidationError,
};

use crate::profile::VerificationProfile;

/// Errors raised by restricted registry operations.
#[derive(Error, Debug)]
pub enum RegistryError {
    /// The caller lacks the required role.
    #[error(transparent)]
    Unauthorized(#[from] Unauthorized),

    /// The zero identity was supplied where a verifier or owner identity
    /// is required.
    #[error("invalid identity: the zero identity is not a valid principal")]
    InvalidIdentity,

    /// The zero identity was supplied as a profile holder.
    #[error("invalid holder: the zero identity cannot carry a verification profile")]
    InvalidHolder,

    /// Attempted to revoke rights from an identity that was never listed.
    #[error("identity {0} is not a listed verifier")]
    NotAVerifier(IdentityId),

    /// The supplied profile carries an unsupported schema version.
    #[error(transparent)]
    Schema(#[from] ValidationError),
}

/// Stores one verification profile per holder and the identities
/// authorized to write them.
#[derive(Debug, Clone)]
pub struct AttributeRegistry {
    owner: IdentityId,
    verifiers: HashSet<IdentityId>,
    profiles: HashMap<IdentityId, VerificationProfile>,
    audit: AuditTrail,
}

impl AttributeRegistry {
    /// Create an empty registry owned by `owner`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::InvalidIdentity`] if `owner` is the zero
    /// identity.
    pub fn new(owner: IdentityId) -> Result<Self, RegistryError> {
        if owner.is_nil() {
            return Err(RegistryError::InvalidIdentity);
        }
        Ok(Self {
            owner,
            verifiers: HashSet::new(),
            profiles: HashMap::new(),
            audit: AuditTrail::new(),
        })
    }

    /// The distinguished owning identity.
    pub fn owner(&self) -> &IdentityId {
        &self.owner
    }

    /// Grant verifier rights to `identity`. Owner-exclusive.
    ///
    /// Re-granting rights to an already-listed identity is a no-op and
    /// records no audit event.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::Unauthorized`] if `caller` is not the owner.
    /// - [`RegistryError::InvalidIdentity`] if `identity` is the zero
    ///   identity.
    pub fn set_verifier(
        &mut self,
        caller: &IdentityId,
        identity: IdentityId,
    ) -> Result<(), RegistryError> {
        ensure_authorized(caller, &self.owner, None)?;
        if identity.is_nil() {
            return Err(RegistryError::InvalidIdentity);
        }
        if self.verifiers.insert(identity) {
            self.audit.record(AuditEvent::VerifierAdded { identity });
        }
        Ok(())
    }

    /// Revoke verifier rights from `identity`. Owner-exclusive.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::Unauthorized`] if `caller` is not the owner.
    /// - [`RegistryError::InvalidIdentity`] if `identity` is the zero
    ///   identity.
    /// - [`RegistryError::NotAVerifier`] if `identity` is not listed.
    pub fn remove_verifier(
        &mut self,
        caller: &IdentityId,
        identity: &IdentityId,
    ) -> Result<(), RegistryError> {
        ensure_authorized(caller, &self.owner, None)?;
        if identity.is_nil() {
            return Err(RegistryError::InvalidIdentity);
        }
        if !self.verifiers.remove(identity) {
            return Err(RegistryError::NotAVerifier(*identity));
        }
        self.audit
            .record(AuditEvent::VerifierRemoved { identity: *identity });
        Ok(())
    }

    /// Whether `identity` may write profiles.
    ///
    /// The owner is implicitly a verifier whether or not it is listed.
    pub fn is_verifier(&self, identity: &IdentityId) -> bool {
        identity == &self.owner || self.verifiers.contains(identity)
    }

    /// The explicitly listed verifiers (the owner is implicit and not
    /// included).
    pub fn verifiers(&self) -> &HashSet<IdentityId> {
        &self.verifiers
    }

    /// Overwrite `holder`'s entire profile. Restricted to the owner or a
    /// listed verifier.
    ///
    /// The previous profile, if any, is fully replaced; there is no
    /// partial merge.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::Unauthorized`] if `caller` is neither the owner
    ///   nor a listed verifier.
    /// - [`RegistryError::InvalidHolder`] if `holder` is the zero
    ///   identity.
    /// - [`RegistryError::Schema`] if the profile carries an unsupported
    ///   schema version.
    pub fn update_profile(
        &mut self,
        caller: &IdentityId,
        holder: IdentityId,
        profile: VerificationProfile,
    ) -> Result<(), RegistryError> {
        ensure_authorized(caller, &self.owner, Some(&self.verifiers))?;
        if holder.is_nil() {
            return Err(RegistryError::InvalidHolder);
        }
        let profile = profile.migrate()?;
        self.profiles.insert(holder, profile);
        self.audit.record(AuditEvent::ProfileUpdated { holder });
        Ok(())
    }

    /// The holder's profile, or the unverified zero value if none was
    /// ever written. Unrestricted read.
    pub fn profile(&self, holder: &IdentityId) -> VerificationProfile {
        self.profiles.get(holder).cloned().unwrap_or_default()
    }

    /// Whether the holder's recorded jurisdiction exactly matches one
    /// entry of `allowed`. Unrestricted read.
    ///
    /// Returns `false` (not an error) when the holder has no profile or
    /// no recorded jurisdiction. Matching is exact and case-sensitive.
    pub fn is_in_allowed_jurisdictions(
        &self,
        holder: &IdentityId,
        allowed: &[JurisdictionCode],
    ) -> bool {
        match self.profiles.get(holder).and_then(|p| p.jurisdiction.as_ref()) {
            Some(code) => allowed.contains(code),
            None => false,
        }
    }

    /// The registry's audit trail, oldest record first.
    pub fn audit(&self) -> &AuditTrail {
        &self.audit
    }
}
