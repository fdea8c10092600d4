//! # Verification Profiles
//!
//! The per-holder record of verified attributes: nine independent boolean
//! facts, one jurisdiction code, and the instant the evidence was last
//! written.
//!
//! ## Record Semantics
//!
//! A profile is replaced wholesale on every write; there is no partial
//! merge. The zero value ([`VerificationProfile::default`]) is the
//! "unverified" state returned for holders that were never written, so a
//! missing record and an all-false record are indistinguishable on read.

use serde::{Deserialize, Serialize};

use teg_core::{
    AttributeSet, JurisdictionCode, Timestamp, ValidationError, ATTRIBUTE_SCHEMA_VERSION,
};

fn current_schema_version() -> u16 {
    ATTRIBUTE_SCHEMA_VERSION
}

/// One holder's verified attributes.
///
/// Carries the attribute-schema version it was written under. Records
/// constructed in-process always carry the current version; records
/// deserialized from elsewhere pass through [`migrate`](Self::migrate)
/// before the registry stores them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationProfile {
    /// Attribute-schema version this record was written under.
    #[serde(default = "current_schema_version")]
    pub schema_version: u16,
    /// The nine verified-attribute flags.
    #[serde(default)]
    pub attributes: AttributeSet,
    /// The holder's recorded jurisdiction, if verified.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jurisdiction: Option<JurisdictionCode>,
    /// When the profile was last written by a verifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verified_at: Option<Timestamp>,
}

impl Default for VerificationProfile {
    /// The "unverified" zero value: all flags false, no jurisdiction, no
    /// timestamp.
    fn default() -> Self {
        Self {
            schema_version: ATTRIBUTE_SCHEMA_VERSION,
            attributes: AttributeSet::default(),
            jurisdiction: None,
            verified_at: None,
        }
    }
}

impl VerificationProfile {
    /// Build a profile under the current schema version.
    pub fn new(
        attributes: AttributeSet,
        jurisdiction: Option<JurisdictionCode>,
        verified_at: Option<Timestamp>,
    ) -> Self {
        Self {
            schema_version: ATTRIBUTE_SCHEMA_VERSION,
            attributes,
            jurisdiction,
            verified_at,
        }
    }

    /// Normalize this record to the current schema version.
    ///
    /// Version 1 is the only schema that has ever existed, so migration is
    /// currently the identity on current-version records and a rejection
    /// of everything else. When version 2 lands, the upgrade path for v1
    /// records is added here and nowhere else.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::UnsupportedSchemaVersion`] for records
    /// written under an unknown schema.
    pub fn migrate(self) -> Result<Self, ValidationError> {
        match self.schema_version {
            ATTRIBUTE_SCHEMA_VERSION => Ok(self),
            found => Err(ValidationError::UnsupportedSchemaVersion {
                found,
                supported: ATTRIBUTE_SCHEMA_VERSION,
            }),
        }
    }
}
