//! # Verified-Attribute Schema — Single Source of Truth
//!
//! Defines the [`Attribute`] enum with all nine verifiable holder
//! attributes, and [`AttributeSet`], the fixed-width boolean record used
//! both as a holder's verified attributes and as an asset's required
//! flags. This is the ONE attribute vocabulary used across the entire
//! stack; every `match` on `Attribute` must be exhaustive.
//!
//! ## Schema Invariant
//!
//! The attribute record is a fixed-width tagged schema, not an open map.
//! Adding a tenth attribute means bumping [`ATTRIBUTE_SCHEMA_VERSION`],
//! adding the enum variant, and adding the `AttributeSet` field — at which
//! point every accessor `match` below, and every consumer in the registry,
//! catalog, and evaluator, fails to compile until updated. Silent schema
//! drift between the profile side and the requirement side is impossible.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ValidationError;

/// Version of the nine-attribute record schema. Stored in every
/// verification profile and requirement set so that records written under
/// a future schema can be detected and migrated explicitly rather than
/// reinterpreted silently.
pub const ATTRIBUTE_SCHEMA_VERSION: u16 = 1;

/// Total number of verifiable attributes. Used for exhaustiveness
/// assertions in tests.
pub const ATTRIBUTE_COUNT: usize = 9;

/// All verifiable holder attributes.
///
/// Each attribute is an independent boolean fact about a holder, written
/// by an authorized verifier and consumed by per-asset requirement flags.
///
/// | # | Attribute | Description |
/// |---|-----------|-------------|
/// | 1 | AgeOver18 | Holder is at least 18 years old |
/// | 2 | AgeOver21 | Holder is at least 21 years old |
/// | 3 | AgeOver55 | Holder is at least 55 years old |
/// | 4 | GovIdVerified | Government identity document verified |
/// | 5 | AddressVerified | Residential address verified |
/// | 6 | AccreditedInvestor | Accredited-investor status confirmed |
/// | 7 | TaxResidencyVerified | Tax residency verified |
/// | 8 | AmlCleared | Anti-money-laundering screening passed |
/// | 9 | KycCleared | Know-your-customer checks passed |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Attribute {
    /// Holder is at least 18 years old.
    #[serde(rename = "age_over_18")]
    AgeOver18,
    /// Holder is at least 21 years old.
    #[serde(rename = "age_over_21")]
    AgeOver21,
    /// Holder is at least 55 years old.
    #[serde(rename = "age_over_55")]
    AgeOver55,
    /// Government identity document verified.
    GovIdVerified,
    /// Residential address verified.
    AddressVerified,
    /// Accredited-investor status confirmed.
    AccreditedInvestor,
    /// Tax residency verified.
    TaxResidencyVerified,
    /// Anti-money-laundering screening passed.
    AmlCleared,
    /// Know-your-customer checks passed.
    KycCleared,
}

impl Attribute {
    /// Returns all nine attributes in canonical order.
    ///
    /// The compliance evaluator iterates this slice, so the canonical
    /// order is also the short-circuit evaluation order.
    pub fn all() -> &'static [Attribute] {
        &[
            Self::AgeOver18,
            Self::AgeOver21,
            Self::AgeOver55,
            Self::GovIdVerified,
            Self::AddressVerified,
            Self::AccreditedInvestor,
            Self::TaxResidencyVerified,
            Self::AmlCleared,
            Self::KycCleared,
        ]
    }

    /// Returns the snake_case string identifier for this attribute.
    ///
    /// Matches the serde serialization format.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AgeOver18 => "age_over_18",
            Self::AgeOver21 => "age_over_21",
            Self::AgeOver55 => "age_over_55",
            Self::GovIdVerified => "gov_id_verified",
            Self::AddressVerified => "address_verified",
            Self::AccreditedInvestor => "accredited_investor",
            Self::TaxResidencyVerified => "tax_residency_verified",
            Self::AmlCleared => "aml_cleared",
            Self::KycCleared => "kyc_cleared",
        }
    }
}

impl std::fmt::Display for Attribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Attribute {
    type Err = ValidationError;

    /// Parse an attribute from its snake_case string identifier.
    ///
    /// Accepts the same identifiers produced by [`Attribute::as_str()`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "age_over_18" => Ok(Self::AgeOver18),
            "age_over_21" => Ok(Self::AgeOver21),
            "age_over_55" => Ok(Self::AgeOver55),
            "gov_id_verified" => Ok(Self::GovIdVerified),
            "address_verified" => Ok(Self::AddressVerified),
            "accredited_investor" => Ok(Self::AccreditedInvestor),
            "tax_residency_verified" => Ok(Self::TaxResidencyVerified),
            "aml_cleared" => Ok(Self::AmlCleared),
            "kyc_cleared" => Ok(Self::KycCleared),
            other => Err(ValidationError::UnknownAttribute(other.to_string())),
        }
    }
}

/// A fixed-width record of the nine attribute booleans.
///
/// Plays two roles: a holder's verified attributes (in a verification
/// profile) and an asset's required flags (in a requirement set). The two
/// sides mirror each other by construction because they share this type.
///
/// The zero value (`Default`) has every flag false: for a profile it means
/// "unverified", for a requirement set it means "no attribute required".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AttributeSet {
    /// Holder is at least 18 years old.
    pub age_over_18: bool,
    /// Holder is at least 21 years old.
    pub age_over_21: bool,
    /// Holder is at least 55 years old.
    pub age_over_55: bool,
    /// Government identity document verified.
    pub gov_id_verified: bool,
    /// Residential address verified.
    pub address_verified: bool,
    /// Accredited-investor status confirmed.
    pub accredited_investor: bool,
    /// Tax residency verified.
    pub tax_residency_verified: bool,
    /// Anti-money-laundering screening passed.
    pub aml_cleared: bool,
    /// Know-your-customer checks passed.
    pub kyc_cleared: bool,
}

impl AttributeSet {
    /// The flag for the given attribute.
    pub fn get(&self, attribute: Attribute) -> bool {
        match attribute {
            Attribute::AgeOver18 => self.age_over_18,
            Attribute::AgeOver21 => self.age_over_21,
            Attribute::AgeOver55 => self.age_over_55,
            Attribute::GovIdVerified => self.gov_id_verified,
            Attribute::AddressVerified => self.address_verified,
            Attribute::AccreditedInvestor => self.accredited_investor,
            Attribute::TaxResidencyVerified => self.tax_residency_verified,
            Attribute::AmlCleared => self.aml_cleared,
            Attribute::KycCleared => self.kyc_cleared,
        }
    }

    /// Set the flag for the given attribute.
    pub fn set(&mut self, attribute: Attribute, value: bool) {
        match attribute {
            Attribute::AgeOver18 => self.age_over_18 = value,
            Attribute::AgeOver21 => self.age_over_21 = value,
            Attribute::AgeOver55 => self.age_over_55 = value,
            Attribute::GovIdVerified => self.gov_id_verified = value,
            Attribute::AddressVerified => self.address_verified = value,
            Attribute::AccreditedInvestor => self.accredited_investor = value,
            Attribute::TaxResidencyVerified => self.tax_residency_verified = value,
            Attribute::AmlCleared => self.aml_cleared = value,
            Attribute::KycCleared => self.kyc_cleared = value,
        }
    }

    /// Builder-style variant of [`set`](Self::set) that enables a flag.
    pub fn with(mut self, attribute: Attribute) -> Self {
        self.set(attribute, true);
        self
    }

    /// Whether at least one flag is set.
    pub fn any(&self) -> bool {
        Attribute::all().iter().any(|a| self.get(*a))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_attributes_count() {
        assert_eq!(Attribute::all().len(), ATTRIBUTE_COUNT);
        assert_eq!(Attribute::all().len(), 9);
    }

    #[test]
    fn all_attributes_unique() {
        let mut seen = std::collections::HashSet::new();
        for a in Attribute::all() {
            assert!(seen.insert(a), "duplicate attribute: {a}");
        }
    }

    #[test]
    fn as_str_roundtrip() {
        for attribute in Attribute::all() {
            let s = attribute.as_str();
            let parsed: Attribute = s
                .parse()
                .unwrap_or_else(|e| panic!("failed to parse {s:?}: {e}"));
            assert_eq!(*attribute, parsed);
        }
    }

    #[test]
    fn from_str_invalid() {
        assert!("nonexistent".parse::<Attribute>().is_err());
        assert!("AGE_OVER_18".parse::<Attribute>().is_err()); // case-sensitive
        assert!("".parse::<Attribute>().is_err());
    }

    #[test]
    fn serde_format_matches_as_str() {
        for attribute in Attribute::all() {
            let json = serde_json::to_string(attribute).unwrap();
            let expected = format!("\"{}\"", attribute.as_str());
            assert_eq!(json, expected);
        }
    }

    #[test]
    fn display_matches_as_str() {
        for attribute in Attribute::all() {
            assert_eq!(attribute.to_string(), attribute.as_str());
        }
    }

    #[test]
    fn default_set_has_no_flags() {
        let set = AttributeSet::default();
        for attribute in Attribute::all() {
            assert!(!set.get(*attribute));
        }
        assert!(!set.any());
    }

    #[test]
    fn set_and_get_every_flag() {
        for attribute in Attribute::all() {
            let mut set = AttributeSet::default();
            set.set(*attribute, true);
            assert!(set.get(*attribute));
            assert!(set.any());
            // Flipping one flag never touches the other eight.
            for other in Attribute::all().iter().filter(|a| *a != attribute) {
                assert!(!set.get(*other), "{attribute} leaked into {other}");
            }
            set.set(*attribute, false);
            assert!(!set.get(*attribute));
        }
    }

    #[test]
    fn with_builder_accumulates() {
        let set = AttributeSet::default()
            .with(Attribute::KycCleared)
            .with(Attribute::AmlCleared);
        assert!(set.kyc_cleared);
        assert!(set.aml_cleared);
        assert!(!set.age_over_18);
    }

    #[test]
    fn serde_roundtrip() {
        let set = AttributeSet::default()
            .with(Attribute::AgeOver21)
            .with(Attribute::AccreditedInvestor);
        let json = serde_json::to_string(&set).unwrap();
        let parsed: AttributeSet = serde_json::from_str(&json).unwrap();
        assert_eq!(set, parsed);
    }

    #[test]
    fn serde_missing_fields_default_false() {
        // Partial records from older writers decode with absent flags false.
        let parsed: AttributeSet = serde_json::from_str(r#"{"kyc_cleared":true}"#).unwrap();
        assert!(parsed.kyc_cleared);
        assert!(!parsed.aml_cleared);
        assert!(!parsed.age_over_55);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        fn arb_set() -> impl Strategy<Value = AttributeSet> {
            proptest::collection::vec(
                prop::sample::select(Attribute::all().to_vec()),
                0..=9,
            )
            .prop_map(|attrs| {
                let mut set = AttributeSet::default();
                for a in attrs {
                    set.set(a, true);
                }
                set
            })
        }

        proptest! {
            /// `get` reflects exactly the flags that were set.
            #[test]
            fn get_reflects_set(set in arb_set()) {
                let mut rebuilt = AttributeSet::default();
                for a in Attribute::all() {
                    rebuilt.set(*a, set.get(*a));
                }
                prop_assert_eq!(rebuilt, set);
            }

            /// Any flag combination survives a serde roundtrip.
            #[test]
            fn serde_roundtrip_any_set(set in arb_set()) {
                let json = serde_json::to_string(&set).unwrap();
                let parsed: AttributeSet = serde_json::from_str(&json).unwrap();
                prop_assert_eq!(parsed, set);
            }
        }
    }

    #[test]
    fn exhaustive_match_compiles() {
        // Adding a tenth attribute variant is a compile error here, forcing
        // every accessor match in this module to be updated with it.
        fn describe(a: Attribute) -> &'static str {
            match a {
                Attribute::AgeOver18 => "age bracket",
                Attribute::AgeOver21 => "age bracket",
                Attribute::AgeOver55 => "age bracket",
                Attribute::GovIdVerified => "identity",
                Attribute::AddressVerified => "identity",
                Attribute::AccreditedInvestor => "investor status",
                Attribute::TaxResidencyVerified => "tax",
                Attribute::AmlCleared => "screening",
                Attribute::KycCleared => "screening",
            }
        }
        for a in Attribute::all() {
            assert!(!describe(*a).is_empty());
        }
    }
}
