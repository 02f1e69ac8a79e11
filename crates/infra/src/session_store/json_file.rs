use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use tracing::debug;

use stayops_auth::{PersistedSession, SessionStore, SessionStoreError};

/// File-backed session store.
///
/// Holds the two logical entries (token, serialized staff record) in a single
/// JSON document on local disk, mirroring the pair of local-storage keys the
/// original console used. The file is removed on logout.
#[derive(Debug, Clone)]
pub struct JsonFileSessionStore {
    path: PathBuf,
}

impl JsonFileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl SessionStore for JsonFileSessionStore {
    fn load(&self) -> Result<Option<PersistedSession>, SessionStoreError> {
        let raw = match fs::read(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        let session = serde_json::from_slice(&raw)?;
        Ok(Some(session))
    }

    fn save(&self, session: &PersistedSession) -> Result<(), SessionStoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let doc = serde_json::to_vec_pretty(session)?;
        fs::write(&self.path, doc)?;
        debug!(path = %self.path.display(), "session saved");
        Ok(())
    }

    fn clear(&self) -> Result<(), SessionStoreError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stayops_auth::{Principal, Role, SessionToken};
    use stayops_core::StaffId;

    fn scratch_store() -> JsonFileSessionStore {
        let path = std::env::temp_dir()
            .join("stayops-tests")
            .join(format!("session-{}.json", uuid::Uuid::now_v7()));
        JsonFileSessionStore::new(path)
    }

    fn persisted() -> PersistedSession {
        PersistedSession {
            token: SessionToken::generate(),
            staff: Principal::new(
                StaffId::new(),
                "receptionist@hotel.com",
                "Mike Reception",
                Role::Receptionist,
            ),
        }
    }

    #[test]
    fn roundtrips_session_through_disk() {
        let store = scratch_store();
        let session = persisted();
        store.save(&session).unwrap();
        assert_eq!(store.load().unwrap(), Some(session));
        store.clear().unwrap();
    }

    #[test]
    fn missing_file_loads_as_no_session() {
        let store = scratch_store();
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn clear_tolerates_missing_file() {
        let store = scratch_store();
        store.clear().unwrap();
    }

    #[test]
    fn corrupt_file_is_a_serialization_error() {
        let store = scratch_store();
        fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        fs::write(store.path(), b"not json").unwrap();
        assert!(matches!(
            store.load(),
            Err(SessionStoreError::Serialization(_))
        ));
        store.clear().unwrap();
    }
}
