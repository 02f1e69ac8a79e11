//! Session persistence backends implementing [`stayops_auth::SessionStore`].

mod in_memory;
mod json_file;

pub use in_memory::InMemorySessionStore;
pub use json_file::JsonFileSessionStore;
