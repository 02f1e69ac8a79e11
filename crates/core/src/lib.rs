//! `stayops-core` — shared domain foundation for the hotel console.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod error;
pub mod id;

pub use error::{DomainError, DomainResult};
pub use id::{BookingId, GuestId, RoomId, StaffId, TaskId};
