use std::sync::RwLock;

use stayops_auth::{PersistedSession, SessionStore, SessionStoreError};

/// In-memory session slot.
///
/// Intended for tests/dev. State is lost when the process exits, so restore
/// always comes back empty across runs.
#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    slot: RwLock<Option<PersistedSession>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for InMemorySessionStore {
    fn load(&self) -> Result<Option<PersistedSession>, SessionStoreError> {
        Ok(self
            .slot
            .read()
            .map_err(|_| SessionStoreError::Poisoned)?
            .clone())
    }

    fn save(&self, session: &PersistedSession) -> Result<(), SessionStoreError> {
        *self
            .slot
            .write()
            .map_err(|_| SessionStoreError::Poisoned)? = Some(session.clone());
        Ok(())
    }

    fn clear(&self) -> Result<(), SessionStoreError> {
        *self
            .slot
            .write()
            .map_err(|_| SessionStoreError::Poisoned)? = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stayops_auth::{Principal, Role, SessionToken};
    use stayops_core::StaffId;

    fn persisted() -> PersistedSession {
        PersistedSession {
            token: SessionToken::generate(),
            staff: Principal::new(
                StaffId::new(),
                "manager@hotel.com",
                "Jane Manager",
                Role::Manager,
            ),
        }
    }

    #[test]
    fn save_then_load_returns_the_session() {
        let store = InMemorySessionStore::new();
        let session = persisted();
        store.save(&session).unwrap();
        assert_eq!(store.load().unwrap(), Some(session));
    }

    #[test]
    fn save_replaces_previous_session() {
        let store = InMemorySessionStore::new();
        store.save(&persisted()).unwrap();
        let second = persisted();
        store.save(&second).unwrap();
        assert_eq!(store.load().unwrap(), Some(second));
    }

    #[test]
    fn clear_is_idempotent() {
        let store = InMemorySessionStore::new();
        store.save(&persisted()).unwrap();
        store.clear().unwrap();
        store.clear().unwrap();
        assert_eq!(store.load().unwrap(), None);
    }
}
