use chrono::NaiveDate;
use serde::Serialize;

use stayops_bookings::{Booking, BookingStatus, most_recent_first};
use stayops_guests::Guest;
use stayops_rooms::{Room, RoomStatus, count_by_status};

/// The stat cards at the top of the dashboard, computed rather than
/// hard-coded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardSnapshot {
    pub total_rooms: usize,
    /// Occupied rooms as a whole percentage of the inventory; 0 for an empty
    /// inventory.
    pub occupancy_percent: u8,
    pub room_counts: Vec<(RoomStatus, usize)>,
    /// Confirmed or checked-in bookings.
    pub active_bookings: usize,
    /// Sum of paid amounts across non-cancelled bookings, in cents.
    pub collected_revenue_cents: i64,
}

/// Compute the dashboard stat cards from current data.
pub fn snapshot(rooms: &[Room], bookings: &[Booking]) -> DashboardSnapshot {
    let room_counts = count_by_status(rooms);
    let occupied = room_counts
        .iter()
        .find(|(status, _)| *status == RoomStatus::Occupied)
        .map_or(0, |(_, n)| *n);

    let occupancy_percent = if rooms.is_empty() {
        0
    } else {
        u8::try_from(occupied * 100 / rooms.len()).unwrap_or(100)
    };

    let active_bookings = bookings.iter().filter(|b| b.status.is_active()).count();

    let collected_revenue_cents = bookings
        .iter()
        .filter(|b| b.status != BookingStatus::Cancelled)
        .map(|b| b.paid_cents)
        .sum();

    DashboardSnapshot {
        total_rooms: rooms.len(),
        occupancy_percent,
        room_counts: room_counts.to_vec(),
        active_bookings,
        collected_revenue_cents,
    }
}

/// A row of the "Recent Bookings" dashboard digest, with guest and room
/// joined in for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecentBookingRow {
    pub guest_name: String,
    pub room_label: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub status: BookingStatus,
    pub total_cents: i64,
}

/// Newest bookings first, joined against the guest register and room
/// inventory. Dangling identifiers degrade to placeholder labels, as the
/// original digest did.
pub fn recent_bookings(
    bookings: &[Booking],
    guests: &[Guest],
    rooms: &[Room],
    limit: usize,
) -> Vec<RecentBookingRow> {
    most_recent_first(bookings)
        .into_iter()
        .take(limit)
        .map(|booking| {
            let guest_name = guests
                .iter()
                .find(|g| g.id == booking.guest_id)
                .map_or_else(|| "Unknown Guest".to_string(), Guest::full_name);
            let room_label = rooms
                .iter()
                .find(|r| r.id == booking.room_id)
                .map_or_else(
                    || "Unknown Room".to_string(),
                    |room| format!("{} {}", room.room_type, room.number),
                );
            RecentBookingRow {
                guest_name,
                room_label,
                check_in: booking.check_in,
                check_out: booking.check_out,
                status: booking.status,
                total_cents: booking.total_cents,
            }
        })
        .collect()
}
