use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use stayops_core::{BookingId, GuestId, RoomId};

/// Lifecycle of a booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    Confirmed,
    CheckedIn,
    CheckedOut,
    Cancelled,
}

impl BookingStatus {
    pub const ALL: [BookingStatus; 4] = [
        BookingStatus::Confirmed,
        BookingStatus::CheckedIn,
        BookingStatus::CheckedOut,
        BookingStatus::Cancelled,
    ];

    /// A booking still occupying or about to occupy a room.
    pub fn is_active(&self) -> bool {
        matches!(self, BookingStatus::Confirmed | BookingStatus::CheckedIn)
    }
}

impl core::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let s = match self {
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::CheckedIn => "checked_in",
            BookingStatus::CheckedOut => "checked_out",
            BookingStatus::Cancelled => "cancelled",
        };
        f.write_str(s)
    }
}

/// A booking record as shown in the bookings panel.
///
/// Amounts are in cents. `created_by` is the staff email that took the
/// booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub id: BookingId,
    pub guest_id: GuestId,
    pub room_id: RoomId,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub status: BookingStatus,
    pub total_cents: i64,
    pub paid_cents: i64,
    pub party_size: u8,
    pub special_requests: Option<String>,
    pub created_at: DateTime<Utc>,
    pub created_by: String,
}

impl Booking {
    /// Nights between check-in and check-out; zero if the dates are inverted.
    pub fn nights(&self) -> u32 {
        u32::try_from((self.check_out - self.check_in).num_days()).unwrap_or(0)
    }

    /// Outstanding amount; never negative even when overpaid.
    pub fn balance_due_cents(&self) -> i64 {
        (self.total_cents - self.paid_cents).max(0)
    }

    pub fn is_fully_paid(&self) -> bool {
        self.paid_cents >= self.total_cents
    }

    /// Sample ledger seeded into the bookings panel, linked to whatever
    /// guest/room identifiers the caller provides. Indices past the end of
    /// either slice fall back to fresh identifiers, which render as unknown
    /// in joined views.
    pub fn samples_for(guests: &[GuestId], rooms: &[RoomId]) -> Vec<Booking> {
        let guest = |i: usize| guests.get(i).copied().unwrap_or_default();
        let room = |i: usize| rooms.get(i).copied().unwrap_or_default();
        let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default();
        let at = |y, m, d, h, min| {
            Utc.with_ymd_and_hms(y, m, d, h, min, 0)
                .single()
                .unwrap_or_default()
        };

        vec![
            Booking {
                id: BookingId::new(),
                guest_id: guest(0),
                room_id: room(0),
                check_in: date(2024, 1, 15),
                check_out: date(2024, 1, 18),
                status: BookingStatus::Confirmed,
                total_cents: 45_000,
                paid_cents: 45_000,
                party_size: 2,
                special_requests: None,
                created_at: at(2024, 1, 10, 10, 0),
                created_by: "admin@hotel.com".to_string(),
            },
            Booking {
                id: BookingId::new(),
                guest_id: guest(1),
                room_id: room(2),
                check_in: date(2024, 1, 16),
                check_out: date(2024, 1, 20),
                status: BookingStatus::CheckedIn,
                total_cents: 72_000,
                paid_cents: 36_000,
                party_size: 1,
                special_requests: Some("Late arrival".to_string()),
                created_at: at(2024, 1, 12, 14, 30),
                created_by: "receptionist@hotel.com".to_string(),
            },
            Booking {
                id: BookingId::new(),
                guest_id: guest(2),
                room_id: room(1),
                check_in: date(2024, 1, 17),
                check_out: date(2024, 1, 19),
                status: BookingStatus::Confirmed,
                total_cents: 28_000,
                paid_cents: 0,
                party_size: 2,
                special_requests: None,
                created_at: at(2024, 1, 14, 9, 5),
                created_by: "receptionist@hotel.com".to_string(),
            },
        ]
    }
}

/// The bookings-panel status dropdown: `None` means "All Bookings".
pub fn filter_by_status(bookings: &[Booking], status: Option<BookingStatus>) -> Vec<&Booking> {
    bookings
        .iter()
        .filter(|booking| status.is_none_or(|s| booking.status == s))
        .collect()
}

/// Bookings ordered newest-created first, for the dashboard digest.
pub fn most_recent_first(bookings: &[Booking]) -> Vec<&Booking> {
    let mut ordered: Vec<&Booking> = bookings.iter().collect();
    ordered.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    ordered
}

#[cfg(test)]
mod tests {
    use super::*;

    use proptest::prelude::*;

    fn samples() -> Vec<Booking> {
        let guests = [GuestId::new(), GuestId::new(), GuestId::new()];
        let rooms = [RoomId::new(), RoomId::new(), RoomId::new()];
        Booking::samples_for(&guests, &rooms)
    }

    #[test]
    fn nights_span_the_stay() {
        let bookings = samples();
        assert_eq!(bookings[0].nights(), 3);
        assert_eq!(bookings[1].nights(), 4);
    }

    #[test]
    fn balance_due_tracks_partial_payment() {
        let bookings = samples();
        assert!(bookings[0].is_fully_paid());
        assert_eq!(bookings[1].balance_due_cents(), 36_000);
        assert_eq!(bookings[2].balance_due_cents(), 28_000);
    }

    #[test]
    fn status_filter_matches_only_that_status() {
        let bookings = samples();
        let confirmed = filter_by_status(&bookings, Some(BookingStatus::Confirmed));
        assert_eq!(confirmed.len(), 2);
        assert!(filter_by_status(&bookings, Some(BookingStatus::Cancelled)).is_empty());
        assert_eq!(filter_by_status(&bookings, None).len(), bookings.len());
    }

    #[test]
    fn recent_ordering_is_newest_created_first() {
        let bookings = samples();
        let ordered = most_recent_first(&bookings);
        for pair in ordered.windows(2) {
            assert!(pair[0].created_at >= pair[1].created_at);
        }
    }

    #[test]
    fn short_id_slices_still_yield_full_sample_set() {
        let bookings = Booking::samples_for(&[], &[]);
        assert_eq!(bookings.len(), 3);
    }

    proptest! {
        /// Balance due is never negative, whatever the paid amount.
        #[test]
        fn balance_due_is_never_negative(total in 0i64..1_000_000, paid in 0i64..2_000_000) {
            let mut booking = samples().remove(0);
            booking.total_cents = total;
            booking.paid_cents = paid;
            prop_assert!(booking.balance_due_cents() >= 0);
        }
    }
}
