use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use stayops_core::RoomId;

/// Room category, from cheapest to most expensive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomType {
    Standard,
    Deluxe,
    Suite,
    Presidential,
}

impl core::fmt::Display for RoomType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let s = match self {
            RoomType::Standard => "standard",
            RoomType::Deluxe => "deluxe",
            RoomType::Suite => "suite",
            RoomType::Presidential => "presidential",
        };
        f.write_str(s)
    }
}

/// Operational status of a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomStatus {
    Available,
    Occupied,
    Cleaning,
    Maintenance,
}

impl RoomStatus {
    pub const ALL: [RoomStatus; 4] = [
        RoomStatus::Available,
        RoomStatus::Occupied,
        RoomStatus::Cleaning,
        RoomStatus::Maintenance,
    ];
}

impl core::fmt::Display for RoomStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let s = match self {
            RoomStatus::Available => "available",
            RoomStatus::Occupied => "occupied",
            RoomStatus::Cleaning => "cleaning",
            RoomStatus::Maintenance => "maintenance",
        };
        f.write_str(s)
    }
}

/// A room record as shown in the rooms panel.
///
/// Nightly rate is in cents to keep arithmetic exact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub id: RoomId,
    pub number: String,
    pub room_type: RoomType,
    pub status: RoomStatus,
    pub rate_cents: i64,
    pub floor: u8,
    pub amenities: Vec<String>,
    pub last_cleaned: Option<DateTime<Utc>>,
    pub next_maintenance: Option<DateTime<Utc>>,
}

impl Room {
    pub fn is_bookable(&self) -> bool {
        self.status == RoomStatus::Available
    }

    /// Sample inventory seeded into the rooms panel.
    pub fn samples() -> Vec<Room> {
        let amenities =
            |list: &[&str]| list.iter().map(|a| (*a).to_string()).collect::<Vec<_>>();
        let cleaned = |y, m, d, h, min| Utc.with_ymd_and_hms(y, m, d, h, min, 0).single();

        vec![
            Room {
                id: RoomId::new(),
                number: "101".to_string(),
                room_type: RoomType::Standard,
                status: RoomStatus::Available,
                rate_cents: 12_000,
                floor: 1,
                amenities: amenities(&["WiFi", "TV", "AC"]),
                last_cleaned: cleaned(2024, 1, 15, 10, 0),
                next_maintenance: None,
            },
            Room {
                id: RoomId::new(),
                number: "102".to_string(),
                room_type: RoomType::Standard,
                status: RoomStatus::Occupied,
                rate_cents: 12_000,
                floor: 1,
                amenities: amenities(&["WiFi", "TV", "AC"]),
                last_cleaned: cleaned(2024, 1, 14, 9, 30),
                next_maintenance: None,
            },
            Room {
                id: RoomId::new(),
                number: "201".to_string(),
                room_type: RoomType::Deluxe,
                status: RoomStatus::Occupied,
                rate_cents: 18_000,
                floor: 2,
                amenities: amenities(&["WiFi", "TV", "AC", "Minibar"]),
                last_cleaned: cleaned(2024, 1, 14, 14, 30),
                next_maintenance: None,
            },
            Room {
                id: RoomId::new(),
                number: "205".to_string(),
                room_type: RoomType::Deluxe,
                status: RoomStatus::Cleaning,
                rate_cents: 18_000,
                floor: 2,
                amenities: amenities(&["WiFi", "TV", "AC", "Minibar"]),
                last_cleaned: cleaned(2024, 1, 13, 11, 0),
                next_maintenance: None,
            },
            Room {
                id: RoomId::new(),
                number: "301".to_string(),
                room_type: RoomType::Suite,
                status: RoomStatus::Maintenance,
                rate_cents: 35_000,
                floor: 3,
                amenities: amenities(&[
                    "WiFi",
                    "TV",
                    "AC",
                    "Minibar",
                    "Balcony",
                    "Kitchenette",
                ]),
                last_cleaned: cleaned(2024, 1, 13, 9, 15),
                next_maintenance: cleaned(2024, 1, 20, 8, 0),
            },
            Room {
                id: RoomId::new(),
                number: "302".to_string(),
                room_type: RoomType::Suite,
                status: RoomStatus::Available,
                rate_cents: 35_000,
                floor: 3,
                amenities: amenities(&["WiFi", "TV", "AC", "Minibar", "Balcony"]),
                last_cleaned: cleaned(2024, 1, 15, 12, 0),
                next_maintenance: None,
            },
            Room {
                id: RoomId::new(),
                number: "401".to_string(),
                room_type: RoomType::Presidential,
                status: RoomStatus::Occupied,
                rate_cents: 80_000,
                floor: 4,
                amenities: amenities(&[
                    "WiFi",
                    "TV",
                    "AC",
                    "Minibar",
                    "Balcony",
                    "Kitchenette",
                    "Jacuzzi",
                ]),
                last_cleaned: cleaned(2024, 1, 12, 16, 45),
                next_maintenance: None,
            },
        ]
    }
}

/// The rooms-panel status dropdown: `None` means "All Rooms".
pub fn filter_by_status(rooms: &[Room], status: Option<RoomStatus>) -> Vec<&Room> {
    rooms
        .iter()
        .filter(|room| status.is_none_or(|s| room.status == s))
        .collect()
}

/// Per-status counts for the room-status dashboard card.
pub fn count_by_status(rooms: &[Room]) -> [(RoomStatus, usize); 4] {
    RoomStatus::ALL.map(|status| {
        let count = rooms.iter().filter(|room| room.status == status).count();
        (status, count)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use proptest::prelude::*;

    #[test]
    fn no_filter_returns_every_room() {
        let rooms = Room::samples();
        assert_eq!(filter_by_status(&rooms, None).len(), rooms.len());
    }

    #[test]
    fn status_filter_matches_only_that_status() {
        let rooms = Room::samples();
        let occupied = filter_by_status(&rooms, Some(RoomStatus::Occupied));
        assert!(!occupied.is_empty());
        assert!(occupied.iter().all(|r| r.status == RoomStatus::Occupied));
    }

    #[test]
    fn counts_cover_the_whole_inventory() {
        let rooms = Room::samples();
        let total: usize = count_by_status(&rooms).iter().map(|(_, n)| n).sum();
        assert_eq!(total, rooms.len());
    }

    #[test]
    fn only_available_rooms_are_bookable() {
        for room in Room::samples() {
            assert_eq!(room.is_bookable(), room.status == RoomStatus::Available);
        }
    }

    proptest! {
        /// Filtering by each status in turn partitions the inventory.
        #[test]
        fn filters_partition_the_inventory(seed in 0usize..4) {
            let rooms = Room::samples();
            let status = RoomStatus::ALL[seed];
            let matching = filter_by_status(&rooms, Some(status)).len();
            let rest: usize = RoomStatus::ALL
                .iter()
                .filter(|s| **s != status)
                .map(|s| filter_by_status(&rooms, Some(*s)).len())
                .sum();
            prop_assert_eq!(matching + rest, rooms.len());
        }
    }
}
