//! The authorization gate: a pure yes/no capability check evaluated on every
//! navigation render, plus an explanation variant for audit/debug display.

use serde::Serialize;

use crate::grants::RoleGrants;
use crate::permissions::Permission;
use crate::principal::Role;
use crate::session::Session;

/// Answer whether the current session may access a gated section.
///
/// - No IO
/// - No panics
/// - Never errors: every unrecognized input degrades to `false`
///
/// An anonymous session is denied everything, including the wildcard tag
/// itself when asked for as a permission. An authenticated session is allowed
/// the tag iff its role's grant set holds the wildcard or the exact tag; a
/// role absent from the table has an empty grant set.
pub fn has_permission(session: &Session, grants: &RoleGrants, permission: &Permission) -> bool {
    match session.principal() {
        None => false,
        Some(principal) => grants.permissions_for(principal.role).allows(permission),
    }
}

/// Detailed explanation of an access decision.
///
/// Answers "why was this section shown/hidden?" for the signed-in staff
/// member; serializable so it can be dumped straight into a debug panel.
#[derive(Debug, Clone, Serialize)]
pub struct AccessExplanation {
    /// The section tag that was checked.
    pub requested: String,

    /// Whether access was granted.
    pub granted: bool,

    /// Human-readable reason for the decision.
    pub reason: String,

    /// Role of the principal, if anyone is signed in.
    pub role: Option<Role>,

    /// The role's granted tags, sorted.
    pub effective_permissions: Vec<String>,

    pub has_wildcard: bool,

    /// Present iff access was denied.
    pub denial: Option<DenialReason>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DenialReason {
    pub kind: DenialKind,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DenialKind {
    /// Nobody is signed in.
    Anonymous,
    /// The role's grant set does not contain the tag.
    MissingPermission,
}

/// Explain an access decision. Agrees with [`has_permission`] on the
/// `granted` flag for every input.
pub fn explain_access(
    session: &Session,
    grants: &RoleGrants,
    permission: &Permission,
) -> AccessExplanation {
    let requested = permission.as_str().to_string();

    let Some(principal) = session.principal() else {
        return AccessExplanation {
            requested,
            granted: false,
            reason: "no staff member is signed in".to_string(),
            role: None,
            effective_permissions: Vec::new(),
            has_wildcard: false,
            denial: Some(DenialReason {
                kind: DenialKind::Anonymous,
                message: "permission checks on an anonymous session always deny".to_string(),
            }),
        };
    };

    let set = grants.permissions_for(principal.role);
    let has_wildcard = set.contains_wildcard();
    let granted = set.allows(permission);

    let reason = if has_wildcard {
        format!("role '{}' holds the wildcard grant", principal.role)
    } else if granted {
        format!("role '{}' grants '{}' explicitly", principal.role, permission)
    } else if set.is_empty() {
        format!("role '{}' has no grants in the policy table", principal.role)
    } else {
        format!("role '{}' does not grant '{}'", principal.role, permission)
    };

    AccessExplanation {
        requested: requested.clone(),
        granted,
        reason,
        role: Some(principal.role),
        effective_permissions: set.sorted_tags(),
        has_wildcard,
        denial: (!granted).then(|| DenialReason {
            kind: DenialKind::MissingPermission,
            message: format!("missing section tag '{requested}'"),
        }),
    }
}
