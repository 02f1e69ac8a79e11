use core::str::FromStr;

use serde::{Deserialize, Serialize};

use stayops_core::{DomainError, StaffId};

/// Staff role determining default console access.
///
/// This is a closed enumeration: the console ships with exactly these four
/// roles. The grants table may still omit a role, in which case that role
/// carries an empty grant set (see [`crate::RoleGrants`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Manager,
    Receptionist,
    Housekeeping,
}

impl Role {
    pub const ALL: [Role; 4] = [
        Role::Admin,
        Role::Manager,
        Role::Receptionist,
        Role::Housekeeping,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Manager => "manager",
            Role::Receptionist => "receptionist",
            Role::Housekeeping => "housekeeping",
        }
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Role::Admin),
            "manager" => Ok(Role::Manager),
            "receptionist" => Ok(Role::Receptionist),
            "housekeeping" => Ok(Role::Housekeeping),
            other => Err(DomainError::validation(format!("unknown role: {other}"))),
        }
    }
}

/// The authenticated identity making requests.
///
/// A principal is resolved from the staff directory at login and carried by
/// the session for the rest of the process lifetime. It is a plain record:
/// authorization decisions live in [`crate::authorize`], not here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    pub id: StaffId,
    pub email: String,
    pub display_name: String,
    pub role: Role,
    pub active: bool,
}

impl Principal {
    pub fn new(
        id: StaffId,
        email: impl Into<String>,
        display_name: impl Into<String>,
        role: Role,
    ) -> Self {
        Self {
            id,
            email: email.into(),
            display_name: display_name.into(),
            role,
            active: true,
        }
    }
}
