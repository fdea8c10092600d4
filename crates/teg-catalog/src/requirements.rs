//! # Requirement Sets
//!
//! The per-asset specification of which attributes and jurisdictions are
//! mandatory for eligibility. The required flags reuse the same
//! fixed-width [`AttributeSet`] record the registry stores for holders,
//! so the two sides of the evaluation cannot drift apart.
//!
//! ## Allow-List Semantics
//!
//! An empty `allowed_jurisdictions` list means "no jurisdiction
//! restriction". A non-empty list admits exactly the holders whose
//! recorded code string-matches one entry. The stored list never contains
//! duplicates.

use serde::{Deserialize, Serialize};

use teg_core::{Attribute, AttributeSet, JurisdictionCode, ValidationError, ATTRIBUTE_SCHEMA_VERSION};

fn current_schema_version() -> u16 {
    ATTRIBUTE_SCHEMA_VERSION
}

/// One asset class's eligibility requirements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequirementSet {
    /// Attribute-schema version this record was written under.
    #[serde(default = "current_schema_version")]
    pub schema_version: u16,
    /// The nine require-X flags.
    #[serde(default)]
    pub required: AttributeSet,
    /// Allowed jurisdiction codes; empty means unrestricted.
    ///
    /// Order is not meaningful: removal swaps with the last entry, so
    /// consumers needing a deterministic order must sort.
    #[serde(default)]
    pub allowed_jurisdictions: Vec<JurisdictionCode>,
}

impl Default for RequirementSet {
    /// The zero value: nothing required, no jurisdiction restriction.
    fn default() -> Self {
        Self {
            schema_version: ATTRIBUTE_SCHEMA_VERSION,
            required: AttributeSet::default(),
            allowed_jurisdictions: Vec::new(),
        }
    }
}

impl RequirementSet {
    /// Build a requirement set under the current schema version.
    ///
    /// Duplicate codes in `allowed_jurisdictions` are dropped, keeping
    /// the first occurrence, so the stored list upholds the no-duplicates
    /// invariant whatever the caller supplies.
    pub fn new(required: AttributeSet, allowed_jurisdictions: Vec<JurisdictionCode>) -> Self {
        Self {
            schema_version: ATTRIBUTE_SCHEMA_VERSION,
            required,
            allowed_jurisdictions: dedup_first_occurrence(allowed_jurisdictions),
        }
    }

    /// Whether the given attribute is required.
    pub fn requires(&self, attribute: Attribute) -> bool {
        self.required.get(attribute)
    }

    /// Whether this set restricts jurisdictions at all.
    pub fn restricts_jurisdiction(&self) -> bool {
        !self.allowed_jurisdictions.is_empty()
    }

    /// Normalize this record to the current schema version.
    ///
    /// Mirrors the profile-side migration: identity on current-version
    /// records, rejection of unknown versions. The stored allow-list is
    /// re-deduplicated because records deserialized from elsewhere may
    /// not uphold the invariant.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::UnsupportedSchemaVersion`] for records
    /// written under an unknown schema.
    pub fn migrate(mut self) -> Result<Self, ValidationError> {
        match self.schema_version {
            ATTRIBUTE_SCHEMA_VERSION => {
                self.allowed_jurisdictions = dedup_first_occurrence(self.allowed_jurisdictions);
                Ok(self)
            }
            found => Err(ValidationError::UnsupportedSchemaVersion {
                found,
                supported: ATTRIBUTE_SCHEMA_VERSION,
            }),
        }
    }
}

/// Drop duplicate codes, keeping the first occurrence of each.
fn dedup_first_occurrence(codes: Vec<JurisdictionCode>) -> Vec<JurisdictionCode> {
    let mut seen = std::collections::HashSet::new();
    codes
        .into_iter()
        .filter(|code| seen.insert(code.clone()))
        .collect()
}
