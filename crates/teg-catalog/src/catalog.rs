//! # Requirement Catalog
//!
//! The aggregate owning all per-asset requirement sets. Every mutation is
//! owner-exclusive and validates fully before touching state; reads are
//! unrestricted and infallible.
//!
//! ## Allow-List Mutation
//!
//! `set_requirements` replaces an asset's whole record, allow-list
//! included. `add_allowed_jurisdiction` and `remove_allowed_jurisdiction`
//! mutate the list incrementally: add is a presence-checked append,
//! remove swaps the matched entry with the last one and shrinks the list.
//! The swap makes removal O(1) at the cost of entry order, which is not
//! part of the contract.

use std::collections::HashMap;

use thiserror::Error;

use teg_core::{
    ensure_authorized, AssetId, AuditEvent, AuditTrail, IdentityId, JurisdictionCode,
    Unauthorized, ValidationError,
};

use crate::requirements::RequirementSet;

/// Errors raised by restricted catalog operations.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The caller is not the catalog owner.
    #[error(transparent)]
    Unauthorized(#[from] Unauthorized),

    /// The zero identity was supplied as the catalog owner.
    #[error("invalid identity: the zero identity cannot own a catalog")]
    InvalidIdentity,

    /// The supplied requirement set carries an unsupported schema version.
    #[error(transparent)]
    Schema(#[from] ValidationError),
}

/// Stores one requirement set per asset class.
#[derive(Debug, Clone)]
pub struct RequirementCatalog {
    owner: IdentityId,
    requirements: HashMap<AssetId, RequirementSet>,
    audit: AuditTrail,
}

impl RequirementCatalog {
    /// Create an empty catalog owned by `owner`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidIdentity`] if `owner` is the zero
    /// identity.
    pub fn new(owner: IdentityId) -> Result<Self, CatalogError> {
        if owner.is_nil() {
            return Err(CatalogError::InvalidIdentity);
        }
        Ok(Self {
            owner,
            requirements: HashMap::new(),
            audit: AuditTrail::new(),
        })
    }

    /// The distinguished owning identity.
    pub fn owner(&self) -> &IdentityId {
        &self.owner
    }

    /// Replace the asset's entire requirement set, allow-list included.
    /// Owner-exclusive.
    ///
    /// No existence check is performed on `asset`: requirements may be
    /// configured before the external asset registry creates the asset.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::Unauthorized`] if `caller` is not the owner.
    /// - [`CatalogError::Schema`] if the set carries an unsupported
    ///   schema version.
    pub fn set_requirements(
        &mut self,
        caller: &IdentityId,
        asset: AssetId,
        requirements: RequirementSet,
    ) -> Result<(), CatalogError> {
        ensure_authorized(caller, &self.owner, None)?;
        let requirements = requirements.migrate()?;
        self.requirements.insert(asset, requirements);
        self.audit.record(AuditEvent::RequirementsReplaced { asset });
        Ok(())
    }

    /// Append `code` to the asset's allow-list if not already present.
    /// Owner-exclusive.
    ///
    /// Re-adding a listed code is a no-op, not an error, and records no
    /// audit event. For an asset with no stored requirement set, the
    /// zero-value set is created implicitly.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Unauthorized`] if `caller` is not the
    /// owner.
    pub fn add_allowed_jurisdiction(
        &mut self,
        caller: &IdentityId,
        asset: AssetId,
        code: JurisdictionCode,
    ) -> Result<(), CatalogError> {
        ensure_authorized(caller, &self.owner, None)?;
        let set = self.requirements.entry(asset).or_default();
        if set.allowed_jurisdictions.contains(&code) {
            return Ok(());
        }
        set.allowed_jurisdictions.push(code.clone());
        self.audit
            .record(AuditEvent::JurisdictionAllowed { asset, code });
        Ok(())
    }

    /// Remove `code` from the asset's allow-list if present.
    /// Owner-exclusive.
    ///
    /// The matched entry is swapped with the last entry and the list is
    /// shrunk, so the order of remaining entries changes. Removing an
    /// absent code, or from an asset with no stored set, is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Unauthorized`] if `caller` is not the
    /// owner.
    pub fn remove_allowed_jurisdiction(
        &mut self,
        caller: &IdentityId,
        asset: AssetId,
        code: &JurisdictionCode,
    ) -> Result<(), CatalogError> {
        ensure_authorized(caller, &self.owner, None)?;
        let Some(set) = self.requirements.get_mut(&asset) else {
            return Ok(());
        };
        let Some(index) = set.allowed_jurisdictions.iter().position(|c| c == code) else {
            return Ok(());
        };
        let code = set.allowed_jurisdictions.swap_remove(index);
        self.audit
            .record(AuditEvent::JurisdictionDisallowed { asset, code });
        Ok(())
    }

    /// The asset's requirement set, or the zero value (nothing required,
    /// no jurisdiction restriction) if none was ever written.
    /// Unrestricted read.
    pub fn requirements(&self, asset: AssetId) -> RequirementSet {
        self.requirements.get(&asset).cloned().unwrap_or_default()
    }

    /// The catalog's audit trail, oldest record first.
    pub fn audit(&self) -> &AuditTrail {
        &self.audit
    }
}
