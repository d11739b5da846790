use chrono::NaiveDate;
use serde::Serialize;

use crate::models::Stay;

use super::hotels::HotelRegistry;

/// Result of one availability query, in the shape printed by `--format json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AvailabilityReport {
    pub checkin: NaiveDate,
    pub checkout: NaiveDate,
    pub available: Vec<String>,
}

/// Names of the hotels with a free room on every night of `stay`, sorted.
pub fn available_hotels(registry: &HotelRegistry, stay: &Stay) -> Vec<String> {
    registry
        .iter()
        .filter(|hotel| hotel.is_available(stay))
        .map(|hotel| hotel.name.clone())
        .collect()
}

pub fn check_availability(registry: &HotelRegistry, stay: &Stay) -> AvailabilityReport {
    let available = available_hotels(registry, stay);
    log::info!(
        "{} of {} hotels available from {} to {}",
        available.len(),
        registry.len(),
        stay.checkin,
        stay.checkout
    );
    AvailabilityReport {
        checkin: stay.checkin,
        checkout: stay.checkout,
        available,
    }
}
