use std::io::BufRead;
use std::path::Path;

use crate::error::{RecordError, Result};
use crate::models::{parse_date, Booking, Stay};

use super::hotels::HotelRegistry;
use super::{for_each_record, open};

/// What a pass over a booking listing did to the registry.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BookingSummary {
    pub applied: usize,
    /// Bookings naming a hotel that is not in the registry.
    pub ignored: usize,
    pub nights_reserved: u64,
}

/// `fields` must hold exactly three entries; `for_each_record` checks the count.
fn parse_booking(fields: &[&str]) -> std::result::Result<Booking, RecordError> {
    let checkin = parse_date(fields[1])?;
    let checkout = parse_date(fields[2])?;
    Ok(Booking::new(fields[0], Stay::booked(checkin, checkout)))
}

/// Adds every booking of a `hotel,checkin,checkout` listing to `registry`.
pub fn apply_bookings(registry: &mut HotelRegistry, path: &Path) -> Result<BookingSummary> {
    let summary = read_bookings(registry, open(path)?, path)?;
    log::info!(
        "applied {} bookings ({} nights) from {}, ignored {} for unknown hotels",
        summary.applied,
        summary.nights_reserved,
        path.display(),
        summary.ignored
    );
    Ok(summary)
}

pub fn read_bookings<R: BufRead>(
    registry: &mut HotelRegistry,
    reader: R,
    source: &Path,
) -> Result<BookingSummary> {
    let mut summary = BookingSummary::default();
    for_each_record(reader, source, 3, |fields| {
        let booking = parse_booking(fields)?;
        let Some(hotel) = registry.get_mut(&booking.hotel_name) else {
            log::debug!("ignoring booking for unknown hotel {:?}", booking.hotel_name);
            summary.ignored += 1;
            return Ok(());
        };
        if booking.stay.is_empty() {
            log::warn!(
                "booking for {:?} from {} to {} covers no nights",
                booking.hotel_name,
                booking.stay.checkin,
                booking.stay.checkout
            );
        }
        hotel.reserve(&booking.stay);
        summary.applied += 1;
        summary.nights_reserved += booking.stay.len();
        Ok(())
    })?;
    Ok(summary)
}
