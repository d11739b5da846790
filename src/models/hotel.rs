use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use super::stay::Stay;

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct Hotel {
    pub name: String,
    pub total_rooms: u32,
    /// Rooms taken per night. Nights without an entry have none taken.
    reservations: BTreeMap<NaiveDate, u32>,
}

impl Hotel {
    pub fn new(name: impl Into<String>, total_rooms: u32) -> Self {
        Self {
            name: name.into(),
            total_rooms,
            reservations: BTreeMap::new(),
        }
    }

    /// Takes one room for every night of `stay`.
    pub fn reserve(&mut self, stay: &Stay) {
        for night in stay.nights() {
            *self.reservations.entry(night).or_insert(0) += 1;
        }
    }

    pub fn reserved_on(&self, night: NaiveDate) -> u32 {
        self.reservations.get(&night).copied().unwrap_or(0)
    }

    pub fn reservations(&self) -> &BTreeMap<NaiveDate, u32> {
        &self.reservations
    }

    /// True when at least one room is free on every night of `stay`.
    pub fn is_available(&self, stay: &Stay) -> bool {
        stay.nights().all(|night| self.reserved_on(night) < self.total_rooms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::parse_date;

    fn stay(checkin: &str, checkout: &str) -> Stay {
        Stay::booked(
            parse_date(checkin).expect("checkin"),
            parse_date(checkout).expect("checkout"),
        )
    }

    #[test]
    fn reserve_counts_every_night_but_checkout() {
        let mut hotel = Hotel::new("Grand", 3);
        hotel.reserve(&stay("2024-01-01", "2024-01-03"));
        hotel.reserve(&stay("2024-01-02", "2024-01-04"));

        let day = |raw| parse_date(raw).expect("date");
        assert_eq!(hotel.reserved_on(day("2024-01-01")), 1);
        assert_eq!(hotel.reserved_on(day("2024-01-02")), 2);
        assert_eq!(hotel.reserved_on(day("2024-01-03")), 1);
        assert_eq!(hotel.reserved_on(day("2024-01-04")), 0);
        assert_eq!(hotel.reservations().len(), 3);
    }

    #[test]
    fn available_only_below_capacity() {
        let mut hotel = Hotel::new("A", 2);
        hotel.reserve(&stay("2024-01-01", "2024-01-03"));
        hotel.reserve(&stay("2024-01-01", "2024-01-02"));

        assert!(!hotel.is_available(&stay("2024-01-01", "2024-01-03")));
        assert!(hotel.is_available(&stay("2024-01-02", "2024-01-03")));
        assert!(hotel.is_available(&stay("2024-01-03", "2024-01-10")));
    }

    #[test]
    fn zero_capacity_is_never_available() {
        let hotel = Hotel::new("Closed", 0);
        assert!(!hotel.is_available(&stay("2024-06-01", "2024-06-02")));
    }
}
