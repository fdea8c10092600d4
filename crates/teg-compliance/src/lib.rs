//! # teg-compliance — Compliance Evaluator
//!
//! The decision core of the TEG Stack: a pure, deterministic, total
//! function combining a holder's verification profile (from the attribute
//! registry) against an asset's requirement set (from the requirement
//! catalog) to produce an admit/deny verdict.
//!
//! ## Evaluation Model
//!
//! All required attribute flags are AND'd with short-circuit on the first
//! missing attribute; a non-empty jurisdiction allow-list is then checked
//! by exact string match. Absence is the most restrictive default: a
//! holder with no profile fails every required flag, while an asset with
//! no requirement set admits every holder.
//!
//! ## No Caching
//!
//! Verdicts are never cached. Profiles and requirement sets change
//! between calls, so the transfer gate re-evaluates on every transfer
//! attempt.

pub mod evaluator;
pub mod gate;

pub use evaluator::{evaluate, is_compliant, DenialReason, Verdict};
pub use gate::TransferGate;
