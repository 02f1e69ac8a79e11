//! Role → permission policy table.
//!
//! The original console scattered this mapping as literals next to the login
//! provider; here it is an explicit immutable structure built once at startup
//! and passed down to whoever evaluates permission checks.

use std::collections::{BTreeSet, HashMap};

use stayops_core::{DomainError, DomainResult};

use crate::permissions::{Permission, PermissionSet};
use crate::principal::Role;

/// Immutable mapping from [`Role`] to its granted [`PermissionSet`].
///
/// A role absent from the table has an empty grant set: every permission
/// check for it answers `false`. That is defined behavior, not a lookup
/// failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleGrants {
    grants: HashMap<Role, PermissionSet>,
    empty: PermissionSet,
}

impl RoleGrants {
    /// Build a grants table from explicit (role, tags) pairs.
    ///
    /// Later pairs for the same role replace earlier ones.
    pub fn from_pairs<I, T, P>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (Role, T)>,
        T: IntoIterator<Item = P>,
        P: Into<Permission>,
    {
        let grants = pairs
            .into_iter()
            .map(|(role, tags)| (role, PermissionSet::from_tags(tags)))
            .collect();
        Self {
            grants,
            empty: PermissionSet::new(),
        }
    }

    /// The stock hotel policy shipped with the console.
    ///
    /// Admins hold the wildcard; housekeeping sees the dashboard, rooms and
    /// their task queue; receptionists additionally handle bookings and
    /// guests; managers get everything but settings.
    pub fn standard() -> Self {
        Self::from_pairs([
            (Role::Admin, vec![Permission::WILDCARD]),
            (
                Role::Manager,
                vec!["dashboard", "rooms", "bookings", "guests", "staff", "reports"],
            ),
            (
                Role::Receptionist,
                vec!["dashboard", "rooms", "bookings", "guests"],
            ),
            (Role::Housekeeping, vec!["dashboard", "rooms", "tasks"]),
        ])
    }

    /// Grant set for a role; empty if the role is not in the table.
    pub fn permissions_for(&self, role: Role) -> &PermissionSet {
        self.grants.get(&role).unwrap_or(&self.empty)
    }

    pub fn contains_role(&self, role: Role) -> bool {
        self.grants.contains_key(&role)
    }

    /// Roles present in the table, in declaration-independent sorted order.
    pub fn roles(&self) -> Vec<Role> {
        let mut roles: Vec<Role> = self.grants.keys().copied().collect();
        roles.sort_by_key(Role::as_str);
        roles
    }

    /// Check every granted non-wildcard tag against a set of known section
    /// tags.
    ///
    /// The grants table and the view router are configured independently; this
    /// catches a policy tag that no longer names a real section (a typo or a
    /// removed panel) at startup instead of silently granting nothing.
    pub fn validate_tags<'a, I>(&self, known: I) -> DomainResult<()>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let known: BTreeSet<&str> = known.into_iter().collect();
        for (role, set) in &self.grants {
            for permission in set.iter() {
                if permission.is_wildcard() {
                    continue;
                }
                if !known.contains(permission.as_str()) {
                    return Err(DomainError::validation(format!(
                        "role '{role}' grants unknown section tag '{permission}'"
                    )));
                }
            }
        }
        Ok(())
    }
}

impl Default for RoleGrants {
    fn default() -> Self {
        Self::standard()
    }
}
