//! # Authorization Predicate
//!
//! The single owner-or-listed-member check used by every restricted
//! operation in the stack. The attribute registry (owner or listed
//! verifier may write profiles) and the requirement catalog (owner only)
//! both call [`ensure_authorized`]; neither reimplements the check, so
//! the two call sites cannot drift apart.
//!
//! ## Authorization Invariant
//!
//! The distinguished owner is always authorized, whether or not it
//! appears in the membership set. Membership grants the member role only;
//! it never grants owner-exclusive rights.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::Unauthorized;
use crate::identity::IdentityId;

/// The role a restricted operation requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Only the distinguished owning identity qualifies.
    Owner,
    /// The owning identity or any listed verifier qualifies.
    Verifier,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Owner => f.write_str("owner"),
            Self::Verifier => f.write_str("verifier"),
        }
    }
}

/// Check that `caller` holds the required role.
///
/// With `members = None` the operation is owner-exclusive. With
/// `members = Some(set)` the caller passes if it is the owner or a listed
/// member. The error names the role that was required.
///
/// # Errors
///
/// Returns [`Unauthorized`] if the caller is neither the owner nor (when
/// a membership set is given) a listed member.
pub fn ensure_authorized(
    caller: &IdentityId,
    owner: &IdentityId,
    members: Option<&HashSet<IdentityId>>,
) -> Result<(), Unauthorized> {
    if caller == owner {
        return Ok(());
    }
    if let Some(set) = members {
        if set.contains(caller) {
            return Ok(());
        }
        return Err(Unauthorized {
            caller: *caller,
            role: Role::Verifier,
        });
    }
    Err(Unauthorized {
        caller: *caller,
        role: Role::Owner,
    })
}
