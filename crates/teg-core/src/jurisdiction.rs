//! # Jurisdiction Codes
//!
//! Newtype for the free-form jurisdiction code recorded in verification
//! profiles and listed in per-asset allow-lists.
//!
//! ## Matching Invariant
//!
//! Jurisdiction membership is decided by exact, case-sensitive string
//! equality. No normalization of any kind is applied at construction or
//! comparison time: `"US"` and `"us"` are distinct codes, and a code is
//! stored byte-for-byte as supplied. The only rejected value is the empty
//! string, which cannot name a jurisdiction.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

// -- Validating Deserialize for JurisdictionCode ------------------------------

impl<'de> Deserialize<'de> for JurisdictionCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::new(raw).map_err(serde::de::Error::custom)
    }
}

/// A jurisdiction code, typically an ISO 3166-1 country code but free-form
/// by design (issuers may use subdivision codes such as `"US-DE"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct JurisdictionCode(String);

impl JurisdictionCode {
    /// Create a jurisdiction code from a string, rejecting the empty string.
    ///
    /// The value is stored exactly as supplied. Case, whitespace, and
    /// formatting are significant because membership checks compare
    /// byte-for-byte.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidJurisdictionCode`] if the string
    /// is empty.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let code = value.into();
        if code.is_empty() {
            return Err(ValidationError::InvalidJurisdictionCode);
        }
        Ok(Self(code))
    }

    /// Access the code string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for JurisdictionCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
