//! Session lifecycle: login, logout, restore-at-startup.
//!
//! The session is either fully authenticated (principal + token) or fully
//! anonymous; the enum makes any in-between state unrepresentable.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};
use uuid::Uuid;

use crate::authorize;
use crate::directory::StaffDirectory;
use crate::grants::RoleGrants;
use crate::permissions::Permission;
use crate::principal::Principal;

/// Shared demo password accepted for every directory account.
///
/// Placeholder credential logic carried over from the sample console. A real
/// deployment replaces this wholesale with hashed secrets or an external
/// identity provider.
pub const DEMO_PASSWORD: &str = "password";

/// Opaque credential token minted at login.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionToken(String);

impl SessionToken {
    /// Mint a fresh token. Opaque to every consumer; only ever compared and
    /// persisted, never decoded.
    pub fn generate() -> Self {
        Self(format!("st-{}", Uuid::now_v7()))
    }

    pub fn from_string(raw: String) -> Self {
        Self(raw)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for SessionToken {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// The live authentication state of the console.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Session {
    /// No one is signed in.
    #[default]
    Anonymous,
    /// A staff member is signed in.
    Authenticated {
        principal: Principal,
        token: SessionToken,
    },
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Session::Authenticated { .. })
    }

    pub fn principal(&self) -> Option<&Principal> {
        match self {
            Session::Anonymous => None,
            Session::Authenticated { principal, .. } => Some(principal),
        }
    }

    pub fn token(&self) -> Option<&SessionToken> {
        match self {
            Session::Anonymous => None,
            Session::Authenticated { token, .. } => Some(token),
        }
    }
}

/// Login failure.
///
/// Deliberately a single variant: unknown email, wrong password and inactive
/// account all collapse into the same answer so the login form leaks nothing
/// about which part failed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("invalid credentials")]
    InvalidCredentials,
}

/// The two logical entries written to on-device storage at login: the token
/// and the serialized staff record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedSession {
    pub token: SessionToken,
    pub staff: Principal,
}

/// Errors from a session persistence backend.
#[derive(Debug, Error)]
pub enum SessionStoreError {
    #[error("session store io: {0}")]
    Io(#[from] std::io::Error),

    #[error("session store serialization: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("session store lock poisoned")]
    Poisoned,
}

/// Session persistence boundary.
///
/// Implementations live in the infra crate; this crate only defines the
/// contract so the lifecycle stays storage-agnostic.
pub trait SessionStore {
    /// Read the persisted session, if any.
    fn load(&self) -> Result<Option<PersistedSession>, SessionStoreError>;

    /// Persist the session, replacing any previous one.
    fn save(&self, session: &PersistedSession) -> Result<(), SessionStoreError>;

    /// Remove the persisted session. Removing an absent session is fine.
    fn clear(&self) -> Result<(), SessionStoreError>;
}

/// Owns the current [`Session`] and drives its lifecycle against an injected
/// directory, policy table and persistence backend.
///
/// There is deliberately no process-wide session global: whoever needs the
/// session holds (a reference to) the manager.
pub struct SessionManager<S: SessionStore> {
    directory: StaffDirectory,
    grants: RoleGrants,
    store: S,
    session: Session,
}

impl<S: SessionStore> SessionManager<S> {
    pub fn new(directory: StaffDirectory, grants: RoleGrants, store: S) -> Self {
        Self {
            directory,
            grants,
            store,
            session: Session::Anonymous,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn grants(&self) -> &RoleGrants {
        &self.grants
    }

    pub fn directory(&self) -> &StaffDirectory {
        &self.directory
    }

    /// Capability check for the current session. Pure and total; see
    /// [`authorize::has_permission`].
    pub fn has_permission(&self, permission: &Permission) -> bool {
        authorize::has_permission(&self.session, &self.grants, permission)
    }

    /// Demo credential check: the email must exist in the directory, the
    /// account must be active, and the password must equal the shared demo
    /// literal. Completes synchronously; the original's deferred completion
    /// performed no IO either.
    pub fn login(&mut self, email: &str, password: &str) -> Result<&Session, AuthError> {
        let principal = self
            .directory
            .find_by_email(email)
            .ok_or(AuthError::InvalidCredentials)?;

        if !principal.active || password != DEMO_PASSWORD {
            return Err(AuthError::InvalidCredentials);
        }

        let token = SessionToken::generate();
        let persisted = PersistedSession {
            token: token.clone(),
            staff: principal.clone(),
        };
        if let Err(err) = self.store.save(&persisted) {
            // Login still succeeds; only restore-at-startup is degraded.
            warn!(error = %err, "failed to persist session");
        }

        info!(email = %principal.email, role = %principal.role, "login succeeded");
        self.session = Session::Authenticated { principal: principal.clone(), token };
        Ok(&self.session)
    }

    /// Clear the session unconditionally, in memory and on disk.
    pub fn logout(&mut self) {
        if let Err(err) = self.store.clear() {
            warn!(error = %err, "failed to clear persisted session");
        }
        if let Some(principal) = self.session.principal() {
            info!(email = %principal.email, "logout");
        }
        self.session = Session::Anonymous;
    }

    /// Rehydrate a session persisted by an earlier run. Called once at
    /// startup; missing or unreadable state degrades to anonymous.
    pub fn restore(&mut self) -> &Session {
        match self.store.load() {
            Ok(Some(persisted)) => {
                info!(email = %persisted.staff.email, "session restored");
                self.session = Session::Authenticated {
                    principal: persisted.staff,
                    token: persisted.token,
                };
            }
            Ok(None) => {}
            Err(err) => {
                warn!(error = %err, "could not restore persisted session");
            }
        }
        &self.session
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::StaffDirectory;

    use std::sync::RwLock;

    /// Minimal in-crate store double; the real backends live in infra.
    #[derive(Default)]
    struct SlotStore {
        slot: RwLock<Option<PersistedSession>>,
        fail_saves: bool,
    }

    impl SessionStore for SlotStore {
        fn load(&self) -> Result<Option<PersistedSession>, SessionStoreError> {
            Ok(self.slot.read().map_err(|_| SessionStoreError::Poisoned)?.clone())
        }

        fn save(&self, session: &PersistedSession) -> Result<(), SessionStoreError> {
            if self.fail_saves {
                return Err(SessionStoreError::Poisoned);
            }
            *self.slot.write().map_err(|_| SessionStoreError::Poisoned)? =
                Some(session.clone());
            Ok(())
        }

        fn clear(&self) -> Result<(), SessionStoreError> {
            *self.slot.write().map_err(|_| SessionStoreError::Poisoned)? = None;
            Ok(())
        }
    }

    fn manager() -> SessionManager<SlotStore> {
        SessionManager::new(
            StaffDirectory::sample(),
            RoleGrants::standard(),
            SlotStore::default(),
        )
    }

    #[test]
    fn login_with_demo_password_succeeds() {
        let mut mgr = manager();
        let session = mgr.login("manager@hotel.com", DEMO_PASSWORD).unwrap();
        assert_eq!(
            session.principal().unwrap().role,
            crate::principal::Role::Manager
        );
        assert!(session.token().is_some());
    }

    #[test]
    fn login_with_wrong_password_fails() {
        let mut mgr = manager();
        assert_eq!(
            mgr.login("manager@hotel.com", "wrong"),
            Err(AuthError::InvalidCredentials)
        );
        assert!(!mgr.session().is_authenticated());
    }

    #[test]
    fn login_with_unknown_email_fails() {
        let mut mgr = manager();
        assert_eq!(
            mgr.login("stranger@hotel.com", DEMO_PASSWORD),
            Err(AuthError::InvalidCredentials)
        );
    }

    #[test]
    fn login_persists_session_to_store() {
        let mut mgr = manager();
        mgr.login("admin@hotel.com", DEMO_PASSWORD).unwrap();
        let persisted = mgr.store.load().unwrap().unwrap();
        assert_eq!(persisted.staff.email, "admin@hotel.com");
        assert_eq!(Some(&persisted.token), mgr.session().token());
    }

    #[test]
    fn login_survives_store_failure() {
        let mut mgr = SessionManager::new(
            StaffDirectory::sample(),
            RoleGrants::standard(),
            SlotStore {
                fail_saves: true,
                ..SlotStore::default()
            },
        );
        assert!(mgr.login("admin@hotel.com", DEMO_PASSWORD).is_ok());
    }

    #[test]
    fn logout_clears_memory_and_store() {
        let mut mgr = manager();
        mgr.login("receptionist@hotel.com", DEMO_PASSWORD).unwrap();
        mgr.logout();
        assert!(!mgr.session().is_authenticated());
        assert!(mgr.store.load().unwrap().is_none());
        assert!(!mgr.has_permission(&Permission::new("dashboard")));
    }

    #[test]
    fn logout_when_anonymous_is_a_no_op() {
        let mut mgr = manager();
        mgr.logout();
        assert!(!mgr.session().is_authenticated());
    }

    #[test]
    fn restore_rehydrates_persisted_session() {
        let store = SlotStore::default();
        let principal = StaffDirectory::sample()
            .find_by_email("manager@hotel.com")
            .unwrap()
            .clone();
        store
            .save(&PersistedSession {
                token: SessionToken::generate(),
                staff: principal,
            })
            .unwrap();

        let mut mgr =
            SessionManager::new(StaffDirectory::sample(), RoleGrants::standard(), store);
        assert!(mgr.restore().is_authenticated());
        assert!(mgr.has_permission(&Permission::new("rooms")));
    }

    #[test]
    fn restore_with_empty_store_stays_anonymous() {
        let mut mgr = manager();
        assert!(!mgr.restore().is_authenticated());
    }
}
