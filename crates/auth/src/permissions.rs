use std::borrow::Cow;
use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Permission identifier.
///
/// Permissions are modeled as opaque strings naming a gated console section
/// (e.g. "rooms", "bookings"). A special wildcard permission `"*"` is used by
/// the policy layer to indicate "allow all" without enumerating every section.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Permission(Cow<'static, str>);

impl Permission {
    /// The wildcard tag granting every permission.
    pub const WILDCARD: &'static str = "*";

    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    /// The wildcard permission value.
    pub fn wildcard() -> Self {
        Self(Cow::Borrowed(Self::WILDCARD))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_wildcard(&self) -> bool {
        self.as_str() == Self::WILDCARD
    }
}

impl core::fmt::Display for Permission {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&'static str> for Permission {
    fn from(value: &'static str) -> Self {
        Self::new(value)
    }
}

/// An immutable set of permission tags granted to a role.
///
/// Membership checks are exact string matches, except that a set holding the
/// wildcard tag allows everything.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PermissionSet(HashSet<Permission>);

impl PermissionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_tags<I, P>(tags: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<Permission>,
    {
        Self(tags.into_iter().map(Into::into).collect())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn contains_wildcard(&self) -> bool {
        self.0.iter().any(Permission::is_wildcard)
    }

    /// Whether this grant set allows the requested permission.
    ///
    /// Wildcard-aware: a set holding `"*"` allows every tag, including tags
    /// that appear in no explicit grant list anywhere.
    pub fn allows(&self, permission: &Permission) -> bool {
        self.contains_wildcard() || self.0.contains(permission)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Permission> {
        self.0.iter()
    }

    /// Granted tags, sorted, for display and audit output.
    pub fn sorted_tags(&self) -> Vec<String> {
        let mut tags: Vec<String> = self.0.iter().map(|p| p.as_str().to_string()).collect();
        tags.sort();
        tags
    }
}

impl<P: Into<Permission>> FromIterator<P> for PermissionSet {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        Self::from_tags(iter)
    }
}
