//! `stayops-auth` — authentication/authorization boundary for the console.
//!
//! This crate is intentionally decoupled from rendering and storage: the
//! session persistence backend is injected through the [`SessionStore`] trait
//! and the role policy is an explicit immutable table built once at startup.
//!
//! The credential check here is demo-grade by design (a fixed shared
//! password). Any non-demo deployment must replace [`SessionManager::login`]
//! with real credential verification before this crate guards anything.

pub mod authorize;
pub mod directory;
pub mod grants;
pub mod permissions;
pub mod principal;
pub mod session;

pub use authorize::{AccessExplanation, DenialKind, DenialReason, explain_access, has_permission};
pub use directory::StaffDirectory;
pub use grants::RoleGrants;
pub use permissions::{Permission, PermissionSet};
pub use principal::{Principal, Role};
pub use session::{
    AuthError, DEMO_PASSWORD, PersistedSession, Session, SessionManager, SessionStore,
    SessionStoreError, SessionToken,
};
