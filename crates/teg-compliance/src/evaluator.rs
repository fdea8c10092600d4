//! # Compliance Evaluation
//!
//! The pure verdict function. Reads the registry and the catalog, owns no
//! state, and has no side effects; given the same registry and catalog
//! state it always returns the same verdict.
//!
//! ## Evaluation Order
//!
//! Required attributes are checked in the canonical [`Attribute::all()`]
//! order with short-circuit AND, so the denial reason names the first
//! missing attribute in that order. The jurisdiction allow-list is
//! checked only after every required flag passes.

use serde::{Deserialize, Serialize};

use teg_catalog::RequirementCatalog;
use teg_core::{AssetId, Attribute, IdentityId};
use teg_registry::AttributeRegistry;

/// Why a holder was denied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum DenialReason {
    /// A required attribute is not verified on the holder's profile.
    MissingAttribute {
        /// The first required attribute, in canonical order, that the
        /// holder lacks.
        attribute: Attribute,
    },
    /// The holder's recorded jurisdiction is not on the asset's
    /// allow-list (or the holder has no recorded jurisdiction).
    JurisdictionNotAllowed,
}

/// The outcome of evaluating one (holder, asset) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// Every required attribute is verified and the jurisdiction
    /// restriction (if any) is satisfied.
    Admit,
    /// At least one requirement is unmet.
    Deny(DenialReason),
}

impl Verdict {
    /// Whether the transfer may proceed.
    pub fn is_admitted(&self) -> bool {
        matches!(self, Self::Admit)
    }
}

/// Evaluate whether `holder` satisfies `asset`'s requirements.
///
/// 1. Every required attribute flag must be verified on the holder's
///    profile; the first missing one (in canonical order) denies.
/// 2. If the asset restricts jurisdictions, the holder's recorded code
///    must exactly match one allow-list entry.
///
/// Missing records are zero-value defaults, never errors: an unwritten
/// holder fails any required flag, an unwritten asset requires nothing.
pub fn evaluate(
    registry: &AttributeRegistry,
    catalog: &RequirementCatalog,
    holder: &IdentityId,
    asset: AssetId,
) -> Verdict {
    let requirements = catalog.requirements(asset);
    let profile = registry.profile(holder);

    for &attribute in Attribute::all() {
        if requirements.requires(attribute) && !profile.attributes.get(attribute) {
            return Verdict::Deny(DenialReason::MissingAttribute { attribute });
        }
    }

    if requirements.restricts_jurisdiction()
        && !registry.is_in_allowed_jurisdictions(holder, &requirements.allowed_jurisdictions)
    {
        return Verdict::Deny(DenialReason::JurisdictionNotAllowed);
    }

    Verdict::Admit
}

/// The boolean surface of [`evaluate`]: `true` iff the verdict is
/// [`Verdict::Admit`].
pub fn is_compliant(
    registry: &AttributeRegistry,
    catalog: &RequirementCatalog,
    holder: &IdentityId,
    asset: AssetId,
) -> bool {
    evaluate(registry, catalog, holder, asset).is_admitted()
}

#[cfg(test)]
mod tests {
    use super::*;
    use teg_catalog::RequirementSet;
    use teg_core::{AttributeSet, JurisdictionCode, Timestamp};
    use teg_registry::VerificationProfile;

    fn code(s: &str) -> JurisdictionCode {
        JurisdictionCode::new(s).unwrap()
    }

    fn fixture() -> (IdentityId, AttributeRegistry, RequirementCatalog) {
        let owner = IdentityId::new();
        (
            owner,
            AttributeRegistry::new(owner).unwrap(),
            RequirementCatalog::new(owner).unwrap(),
        )
    }

    fn write_profile(
        registry: &mut AttributeRegistry,
        owner: &IdentityId,
        holder: IdentityId,
        attributes: AttributeSet,
        jurisdiction: Option<&str>,
    ) {
        registry
            .update_profile(
                owner,
                holder,
                VerificationProfile::new(
                    attributes,
                    jurisdiction.map(|j| code(j)),
                    Some(Timestamp::parse("2026-01-15T12:00:00Z").unwrap()),
                ),
            )
            .unwrap();
    }

    // ── Zero-value defaults ──────────────────────────────────────────

    #[test]
    fn unwritten_holder_fails_any_required_flag() {
        let (owner, registry, mut catalog) = fixture();
        let asset = AssetId::new(1);

        // Each attribute alone, required of a holder with no profile.
        for &attribute in Attribute::all() {
            catalog
                .set_requirements(
                    &owner,
                    asset,
                    RequirementSet::new(AttributeSet::default().with(attribute), vec![]),
                )
                .unwrap();
            let verdict = evaluate(&registry, &catalog, &IdentityId::new(), asset);
            assert_eq!(
                verdict,
                Verdict::Deny(DenialReason::MissingAttribute { attribute }),
                "unwritten holder should fail required {attribute}"
            );
        }
    }

    #[test]
    fn unwritten_asset_admits_any_holder() {
        let (_, registry, catalog) = fixture();
        assert_eq!(
            evaluate(&registry, &catalog, &IdentityId::new(), AssetId::new(77)),
            Verdict::Admit
        );
    }

    // ── Attribute AND ────────────────────────────────────────────────

    #[test]
    fn all_required_flags_must_pass() {
        let (owner, mut registry, mut catalog) = fixture();
        let holder = IdentityId::new();
        let asset = AssetId::new(1);

        catalog
            .set_requirements(
                &owner,
                asset,
                RequirementSet::new(
                    AttributeSet::default()
                        .with(Attribute::KycCleared)
                        .with(Attribute::AmlCleared),
                    vec![],
                ),
            )
            .unwrap();

        // Only KYC verified: AML is the missing one.
        write_profile(
            &mut registry,
            &owner,
            holder,
            AttributeSet::default().with(Attribute::KycCleared),
            None,
        );
        assert_eq!(
            evaluate(&registry, &catalog, &holder, asset),
            Verdict::Deny(DenialReason::MissingAttribute {
                attribute: Attribute::AmlCleared
            })
        );

        // Both verified: admitted.
        write_profile(
            &mut registry,
            &owner,
            holder,
            AttributeSet::default()
                .with(Attribute::KycCleared)
                .with(Attribute::AmlCleared),
            None,
        );
        assert!(is_compliant(&registry, &catalog, &holder, asset));
    }

    #[test]
    fn extra_profile_attributes_are_ignored() {
        let (owner, mut registry, mut catalog) = fixture();
        let holder = IdentityId::new();
        let asset = AssetId::new(1);

        catalog
            .set_requirements(
                &owner,
                asset,
                RequirementSet::new(AttributeSet::default().with(Attribute::AgeOver18), vec![]),
            )
            .unwrap();

        // Holder has far more than required.
        let mut attributes = AttributeSet::default();
        for &a in Attribute::all() {
            attributes.set(a, true);
        }
        write_profile(&mut registry, &owner, holder, attributes, None);
        assert!(is_compliant(&registry, &catalog, &holder, asset));
    }

    #[test]
    fn denial_names_first_missing_attribute_in_canonical_order() {
        let (owner, mut registry, mut catalog) = fixture();
        let holder = IdentityId::new();
        let asset = AssetId::new(1);

        // Require two attributes; the holder lacks both. The verdict
        // names AgeOver21 because it precedes KycCleared canonically.
        catalog
            .set_requirements(
                &owner,
                asset,
                RequirementSet::new(
                    AttributeSet::default()
                        .with(Attribute::AgeOver21)
                        .with(Attribute::KycCleared),
                    vec![],
                ),
            )
            .unwrap();
        write_profile(&mut registry, &owner, holder, AttributeSet::default(), None);

        assert_eq!(
            evaluate(&registry, &catalog, &holder, asset),
            Verdict::Deny(DenialReason::MissingAttribute {
                attribute: Attribute::AgeOver21
            })
        );
    }

    // ── Jurisdiction restriction ─────────────────────────────────────

    #[test]
    fn jurisdiction_checked_after_attributes() {
        let (owner, mut registry, mut catalog) = fixture();
        let holder = IdentityId::new();
        let asset = AssetId::new(1);

        catalog
            .set_requirements(
                &owner,
                asset,
                RequirementSet::new(
                    AttributeSet::default().with(Attribute::KycCleared),
                    vec![code("US")],
                ),
            )
            .unwrap();

        // Missing attribute wins over jurisdiction mismatch.
        write_profile(&mut registry, &owner, holder, AttributeSet::default(), Some("CA"));
        assert_eq!(
            evaluate(&registry, &catalog, &holder, asset),
            Verdict::Deny(DenialReason::MissingAttribute {
                attribute: Attribute::KycCleared
            })
        );

        // Attributes pass, jurisdiction fails.
        write_profile(
            &mut registry,
            &owner,
            holder,
            AttributeSet::default().with(Attribute::KycCleared),
            Some("CA"),
        );
        assert_eq!(
            evaluate(&registry, &catalog, &holder, asset),
            Verdict::Deny(DenialReason::JurisdictionNotAllowed)
        );

        // Both pass.
        write_profile(
            &mut registry,
            &owner,
            holder,
            AttributeSet::default().with(Attribute::KycCleared),
            Some("US"),
        );
        assert_eq!(evaluate(&registry, &catalog, &holder, asset), Verdict::Admit);
    }

    #[test]
    fn empty_allow_list_is_unrestricted() {
        let (owner, mut registry, mut catalog) = fixture();
        let holder = IdentityId::new();
        let asset = AssetId::new(1);

        catalog
            .set_requirements(&owner, asset, RequirementSet::default())
            .unwrap();
        // Holder with no jurisdiction at all is still admitted.
        write_profile(&mut registry, &owner, holder, AttributeSet::default(), None);
        assert!(is_compliant(&registry, &catalog, &holder, asset));
    }

    #[test]
    fn restricted_asset_denies_holder_without_jurisdiction() {
        let (owner, mut registry, mut catalog) = fixture();
        let holder = IdentityId::new();
        let asset = AssetId::new(1);

        catalog
            .set_requirements(
                &owner,
                asset,
                RequirementSet::new(AttributeSet::default(), vec![code("US")]),
            )
            .unwrap();
        write_profile(&mut registry, &owner, holder, AttributeSet::default(), None);
        assert_eq!(
            evaluate(&registry, &catalog, &holder, asset),
            Verdict::Deny(DenialReason::JurisdictionNotAllowed)
        );
    }

    // ── Determinism & monotonicity ───────────────────────────────────

    #[test]
    fn same_state_same_verdict() {
        let (owner, mut registry, mut catalog) = fixture();
        let holder = IdentityId::new();
        let asset = AssetId::new(1);
        catalog
            .set_requirements(
                &owner,
                asset,
                RequirementSet::new(AttributeSet::default().with(Attribute::KycCleared), vec![]),
            )
            .unwrap();
        write_profile(
            &mut registry,
            &owner,
            holder,
            AttributeSet::default().with(Attribute::KycCleared),
            None,
        );

        let first = evaluate(&registry, &catalog, &holder, asset);
        let second = evaluate(&registry, &catalog, &holder, asset);
        assert_eq!(first, second);
        assert_eq!(first, Verdict::Admit);
    }

    #[test]
    fn tightening_profile_flips_verdict() {
        // A previously-true attribute flipped false denies the next check
        // with no other state changed.
        let (owner, mut registry, mut catalog) = fixture();
        let holder = IdentityId::new();
        let asset = AssetId::new(1);
        catalog
            .set_requirements(
                &owner,
                asset,
                RequirementSet::new(AttributeSet::default().with(Attribute::AmlCleared), vec![]),
            )
            .unwrap();

        write_profile(
            &mut registry,
            &owner,
            holder,
            AttributeSet::default().with(Attribute::AmlCleared),
            None,
        );
        assert!(is_compliant(&registry, &catalog, &holder, asset));

        write_profile(&mut registry, &owner, holder, AttributeSet::default(), None);
        assert!(!is_compliant(&registry, &catalog, &holder, asset));
    }

    // ── Verdict surface ──────────────────────────────────────────────

    #[test]
    fn verdict_serde_roundtrip() {
        for verdict in [
            Verdict::Admit,
            Verdict::Deny(DenialReason::JurisdictionNotAllowed),
            Verdict::Deny(DenialReason::MissingAttribute {
                attribute: Attribute::KycCleared,
            }),
        ] {
            let json = serde_json::to_string(&verdict).unwrap();
            let parsed: Verdict = serde_json::from_str(&json).unwrap();
            assert_eq!(verdict, parsed);
        }
    }

    #[test]
    fn is_admitted_classification() {
        assert!(Verdict::Admit.is_admitted());
        assert!(!Verdict::Deny(DenialReason::JurisdictionNotAllowed).is_admitted());
    }
}
