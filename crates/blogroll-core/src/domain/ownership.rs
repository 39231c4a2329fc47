//! Ownership checks for user-owned resources.
//!
//! A resource implements [`Owned`] to expose the id of the user that created
//! it. Mutations go through [`authorize_delete`] (and [`authorize_update`]
//! when updates are owner-only), which fail with [`AuthError::Forbidden`] when
//! a valid identity belongs to someone else.

use std::str::FromStr;

use uuid::Uuid;

use super::Identity;
use crate::ports::AuthError;

/// Resource with a single owning user.
pub trait Owned {
    fn owner_id(&self) -> Uuid;

    /// Compares on the canonical hyphenated text form of both ids.
    fn is_owned_by(&self, identity: &Identity) -> bool {
        canonical_id(&self.owner_id()) == canonical_id(&identity.user_id)
    }
}

fn canonical_id(id: &Uuid) -> String {
    id.hyphenated().to_string()
}

/// Owner id recorded on a freshly created resource.
pub fn attach_owner(identity: &Identity) -> Uuid {
    identity.user_id
}

/// Allow a delete only when `identity` owns `resource`.
pub fn authorize_delete<R: Owned>(identity: &Identity, resource: &R) -> Result<(), AuthError> {
    if resource.is_owned_by(identity) {
        Ok(())
    } else {
        tracing::warn!(
            owner_id = %resource.owner_id(),
            requested_by = %identity.user_id,
            "Rejected mutation by non-owner"
        );
        Err(AuthError::Forbidden)
    }
}

/// Who may update a post.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UpdatePolicy {
    /// Anyone may update, authenticated or not.
    #[default]
    Open,
    /// Updates follow the same rule as deletes.
    OwnerOnly,
}

impl FromStr for UpdatePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "open" => Ok(Self::Open),
            "owner" | "owner-only" | "owner_only" => Ok(Self::OwnerOnly),
            other => Err(format!("unknown update policy: {other}")),
        }
    }
}

/// Allow an update under `policy`.
///
/// `identity` is whatever the caller managed to authenticate: `Ok(None)` for
/// no credential at all, `Err` for a credential that failed verification.
pub fn authorize_update<R: Owned>(
    policy: UpdatePolicy,
    identity: Result<Option<&Identity>, AuthError>,
    resource: &R,
) -> Result<(), AuthError> {
    match policy {
        UpdatePolicy::Open => Ok(()),
        UpdatePolicy::OwnerOnly => {
            let identity = identity?.ok_or(AuthError::MissingToken)?;
            authorize_delete(identity, resource)
        }
    }
}
