//! Dashboard figures derived from the room inventory and booking ledger.

pub mod dashboard;

pub use dashboard::{DashboardSnapshot, RecentBookingRow, recent_bookings, snapshot};
