//! Bookings domain module.

pub mod booking;

pub use booking::{Booking, BookingStatus, filter_by_status, most_recent_first};
