use serde::Serialize;

use super::stay::Stay;

/// One row of a booking listing. Consumed once while aggregating.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct Booking {
    pub hotel_name: String,
    pub stay: Stay,
}

impl Booking {
    pub fn new(hotel_name: impl Into<String>, stay: Stay) -> Self {
        Self {
            hotel_name: hotel_name.into(),
            stay,
        }
    }
}
