//! Guests domain module.

pub mod guest;

pub use guest::{Guest, search};
