//! Fixed staff directory backing the demo login.
//!
//! The console ships with a small set of sample accounts, one per role.
//! There is no user administration: the directory is immutable after
//! construction.

use stayops_core::StaffId;

use crate::principal::{Principal, Role};

/// In-memory email → staff lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaffDirectory {
    staff: Vec<Principal>,
}

impl StaffDirectory {
    pub fn new(staff: Vec<Principal>) -> Self {
        Self { staff }
    }

    /// The stock sample accounts. All of them accept the shared demo
    /// password.
    pub fn sample() -> Self {
        Self::new(vec![
            Principal::new(StaffId::new(), "admin@hotel.com", "John Admin", Role::Admin),
            Principal::new(
                StaffId::new(),
                "manager@hotel.com",
                "Jane Manager",
                Role::Manager,
            ),
            Principal::new(
                StaffId::new(),
                "receptionist@hotel.com",
                "Mike Reception",
                Role::Receptionist,
            ),
            Principal::new(
                StaffId::new(),
                "housekeeping@hotel.com",
                "Ana Flores",
                Role::Housekeeping,
            ),
        ])
    }

    /// Exact email match, as the original console did.
    pub fn find_by_email(&self, email: &str) -> Option<&Principal> {
        self.staff.iter().find(|p| p.email == email)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Principal> {
        self.staff.iter()
    }

    pub fn len(&self) -> usize {
        self.staff.len()
    }

    pub fn is_empty(&self) -> bool {
        self.staff.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grants::RoleGrants;
    use crate::session::{AuthError, DEMO_PASSWORD, SessionManager, SessionStore};
    use crate::session::{PersistedSession, SessionStoreError};

    struct NullStore;

    impl SessionStore for NullStore {
        fn load(&self) -> Result<Option<PersistedSession>, SessionStoreError> {
            Ok(None)
        }
        fn save(&self, _session: &PersistedSession) -> Result<(), SessionStoreError> {
            Ok(())
        }
        fn clear(&self) -> Result<(), SessionStoreError> {
            Ok(())
        }
    }

    #[test]
    fn sample_directory_has_one_account_per_role() {
        let directory = StaffDirectory::sample();
        assert_eq!(directory.len(), Role::ALL.len());
        for role in Role::ALL {
            assert!(directory.iter().any(|p| p.role == role));
        }
    }

    #[test]
    fn lookup_is_exact_match() {
        let directory = StaffDirectory::sample();
        assert!(directory.find_by_email("admin@hotel.com").is_some());
        assert!(directory.find_by_email("Admin@hotel.com").is_none());
    }

    #[test]
    fn inactive_account_cannot_log_in() {
        let mut suspended = Principal::new(
            StaffId::new(),
            "oncall@hotel.com",
            "Off Boarded",
            Role::Receptionist,
        );
        suspended.active = false;

        let mut mgr = SessionManager::new(
            StaffDirectory::new(vec![suspended]),
            RoleGrants::standard(),
            NullStore,
        );
        assert_eq!(
            mgr.login("oncall@hotel.com", DEMO_PASSWORD),
            Err(AuthError::InvalidCredentials)
        );
    }
}
