//! # Transfer Gate Boundary
//!
//! The read-only decision surface the unit-bookkeeping layer calls before
//! mutating any balance. The gate owns nothing and caches nothing: every
//! transfer attempt is re-evaluated against the registry and catalog as
//! they are at that instant.
//!
//! ## Recipient-Only Asymmetry
//!
//! Only the recipient of a transfer is evaluated. The sender's
//! eligibility is never checked, so a holder whose profile has lapsed can
//! still move already-held units out (redemption and burn flows keep
//! working), while no newly-ineligible recipient can receive units. The
//! bookkeeping layer must treat a deny verdict as a hard stop and leave
//! all balances unchanged.

use teg_catalog::RequirementCatalog;
use teg_core::{AssetId, IdentityId};
use teg_registry::AttributeRegistry;

use crate::evaluator::{self, Verdict};

/// The compliance decision surface for one registry/catalog pair.
///
/// Borrows both collaborators read-only; construction is free and the
/// gate may be rebuilt for every call.
#[derive(Debug, Clone, Copy)]
pub struct TransferGate<'a> {
    registry: &'a AttributeRegistry,
    catalog: &'a RequirementCatalog,
}

impl<'a> TransferGate<'a> {
    /// Build a gate over the given registry and catalog.
    pub fn new(registry: &'a AttributeRegistry, catalog: &'a RequirementCatalog) -> Self {
        Self { registry, catalog }
    }

    /// Evaluate the recipient of a proposed transfer.
    ///
    /// Denials are traced with the recipient and asset keys so transfer
    /// rejections can be correlated with registry and catalog mutations.
    pub fn authorize(&self, recipient: &IdentityId, asset: AssetId) -> Verdict {
        let verdict = evaluator::evaluate(self.registry, self.catalog, recipient, asset);
        if let Verdict::Deny(reason) = &verdict {
            tracing::info!(%recipient, %asset, ?reason, "transfer denied");
        }
        verdict
    }

    /// Boolean form of [`authorize`](Self::authorize).
    pub fn is_compliant(&self, recipient: &IdentityId, asset: AssetId) -> bool {
        self.authorize(recipient, asset).is_admitted()
    }
}
