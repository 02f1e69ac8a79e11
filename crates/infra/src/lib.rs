//! `stayops-infra` — storage backends for the console.
//!
//! The only persisted state in this system is the current session (an opaque
//! token plus the serialized staff record); everything else lives in memory
//! for the life of the process.

pub mod session_store;

pub use session_store::{InMemorySessionStore, JsonFileSessionStore};
