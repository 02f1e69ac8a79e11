use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use stayops_core::GuestId;

/// A guest record as shown in the guests panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guest {
    pub id: GuestId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub id_number: String,
    pub date_of_birth: NaiveDate,
    pub nationality: String,
    pub vip: bool,
    pub total_bookings: u32,
    pub created_at: DateTime<Utc>,
}

impl Guest {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Sample register seeded into the guests panel.
    pub fn samples() -> Vec<Guest> {
        let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default();
        let at = |y, m, d| {
            Utc.with_ymd_and_hms(y, m, d, 0, 0, 0)
                .single()
                .unwrap_or_default()
        };

        vec![
            Guest {
                id: GuestId::new(),
                first_name: "John".to_string(),
                last_name: "Smith".to_string(),
                email: "john.smith@email.com".to_string(),
                phone: "+1-555-0123".to_string(),
                address: "123 Main St, New York, NY".to_string(),
                id_number: "ID123456789".to_string(),
                date_of_birth: date(1985, 3, 15),
                nationality: "USA".to_string(),
                vip: false,
                total_bookings: 3,
                created_at: at(2024, 1, 1),
            },
            Guest {
                id: GuestId::new(),
                first_name: "Sarah".to_string(),
                last_name: "Johnson".to_string(),
                email: "sarah.johnson@email.com".to_string(),
                phone: "+1-555-0124".to_string(),
                address: "456 Oak Ave, Los Angeles, CA".to_string(),
                id_number: "ID987654321".to_string(),
                date_of_birth: date(1990, 7, 22),
                nationality: "USA".to_string(),
                vip: true,
                total_bookings: 8,
                created_at: at(2023, 12, 15),
            },
            Guest {
                id: GuestId::new(),
                first_name: "Michael".to_string(),
                last_name: "Brown".to_string(),
                email: "michael.brown@email.com".to_string(),
                phone: "+1-555-0125".to_string(),
                address: "789 Pine Rd, Chicago, IL".to_string(),
                id_number: "ID456789123".to_string(),
                date_of_birth: date(1982, 11, 8),
                nationality: "Canada".to_string(),
                vip: false,
                total_bookings: 1,
                created_at: at(2024, 1, 10),
            },
        ]
    }
}

/// The guests-panel search box: case-insensitive substring match over the
/// full name and email, plus a literal match on the phone number. An empty
/// term matches everyone.
pub fn search<'a>(guests: &'a [Guest], term: &str) -> Vec<&'a Guest> {
    let needle = term.to_lowercase();
    guests
        .iter()
        .filter(|guest| {
            guest.full_name().to_lowercase().contains(&needle)
                || guest.email.to_lowercase().contains(&needle)
                || guest.phone.contains(term)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_term_matches_everyone() {
        let guests = Guest::samples();
        assert_eq!(search(&guests, "").len(), guests.len());
    }

    #[test]
    fn search_by_name_is_case_insensitive() {
        let guests = Guest::samples();
        let hits = search(&guests, "sarah john");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].full_name(), "Sarah Johnson");
    }

    #[test]
    fn search_by_email_fragment() {
        let guests = Guest::samples();
        let hits = search(&guests, "michael.brown@");
        assert_eq!(hits.len(), 1);
        assert!(!hits[0].vip);
    }

    #[test]
    fn search_by_phone_is_literal() {
        let guests = Guest::samples();
        assert_eq!(search(&guests, "0124").len(), 1);
        assert!(search(&guests, "9999").is_empty());
    }
}
