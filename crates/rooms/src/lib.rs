//! Rooms domain module.
//!
//! Pure data and predicates over the room inventory: no IO, no rendering.

pub mod room;

pub use room::{Room, RoomStatus, RoomType, count_by_status, filter_by_status};
