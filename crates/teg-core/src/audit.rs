//! # Audit Events
//!
//! Typed audit events for every restricted mutation in the stack, plus
//! [`AuditTrail`], the append-only in-memory log each mutating component
//! owns. Recording an event also emits a `tracing` event at info level,
//! so observability tooling sees the same stream without polling the
//! trail.
//!
//! ## Payload Invariant
//!
//! Events carry the affected key (identity or asset, plus the single
//! jurisdiction code for allow-list mutations) and never the written
//! payload. A profile update names the holder, not the nine flags that
//! were written; this bounds log size no matter how records grow.

use serde::{Deserialize, Serialize};

use crate::identity::{AssetId, IdentityId};
use crate::jurisdiction::JurisdictionCode;
use crate::temporal::Timestamp;

/// An audited mutation, identified by its affected key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum AuditEvent {
    /// An identity was granted verifier rights.
    VerifierAdded {
        /// The identity that was granted rights.
        identity: IdentityId,
    },
    /// An identity's verifier rights were revoked.
    VerifierRemoved {
        /// The identity whose rights were revoked.
        identity: IdentityId,
    },
    /// A holder's verification profile was overwritten.
    ProfileUpdated {
        /// The holder whose profile was written.
        holder: IdentityId,
    },
    /// An asset's requirement set was replaced wholesale.
    RequirementsReplaced {
        /// The asset whose requirements were replaced.
        asset: AssetId,
    },
    /// A jurisdiction code was appended to an asset's allow-list.
    JurisdictionAllowed {
        /// The asset whose allow-list grew.
        asset: AssetId,
        /// The code that was appended.
        code: JurisdictionCode,
    },
    /// A jurisdiction code was removed from an asset's allow-list.
    JurisdictionDisallowed {
        /// The asset whose allow-list shrank.
        asset: AssetId,
        /// The code that was removed.
        code: JurisdictionCode,
    },
}

impl AuditEvent {
    /// Short event name, stable across releases.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::VerifierAdded { .. } => "verifier_added",
            Self::VerifierRemoved { .. } => "verifier_removed",
            Self::ProfileUpdated { .. } => "profile_updated",
            Self::RequirementsReplaced { .. } => "requirements_replaced",
            Self::JurisdictionAllowed { .. } => "jurisdiction_allowed",
            Self::JurisdictionDisallowed { .. } => "jurisdiction_disallowed",
        }
    }

    /// The affected key, rendered for log correlation.
    pub fn key(&self) -> String {
        match self {
            Self::VerifierAdded { identity } | Self::VerifierRemoved { identity } => {
                identity.to_string()
            }
            Self::ProfileUpdated { holder } => holder.to_string(),
            Self::RequirementsReplaced { asset } => asset.to_string(),
            Self::JurisdictionAllowed { asset, code }
            | Self::JurisdictionDisallowed { asset, code } => format!("{asset}/{code}"),
        }
    }
}

/// One audited mutation with the instant it was recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditRecord {
    /// What happened.
    pub event: AuditEvent,
    /// When it was recorded.
    pub at: Timestamp,
}

/// Append-only audit log owned by a mutating component.
///
/// Components record an event only when state actually changed; an
/// idempotent no-op (re-adding a listed jurisdiction, removing an absent
/// one) leaves the trail untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuditTrail {
    records: Vec<AuditRecord>,
}

impl AuditTrail {
    /// Create an empty trail.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event, stamping it with the current time, and emit the
    /// matching `tracing` event.
    pub fn record(&mut self, event: AuditEvent) {
        tracing::info!(kind = event.kind(), key = %event.key(), "audit");
        self.records.push(AuditRecord {
            event,
            at: Timestamp::now(),
        });
    }

    /// All records, oldest first.
    pub fn records(&self) -> &[AuditRecord] {
        &self.records
    }

    /// Number of recorded events.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
