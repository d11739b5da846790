use chrono::NaiveDate;
use serde::Serialize;

use crate::error::{AvailabilityError, RecordError, Result};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a strict `YYYY-MM-DD` date. Unpadded fields, trailing text and
/// impossible days such as `2021-02-30` are all rejected.
pub fn parse_date(raw: &str) -> std::result::Result<NaiveDate, RecordError> {
    let bytes = raw.as_bytes();
    let well_formed = bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());
    if !well_formed {
        return Err(RecordError::Date(raw.to_string()));
    }
    NaiveDate::parse_from_str(raw, DATE_FORMAT).map_err(|_| RecordError::Date(raw.to_string()))
}

/// Half-open range of nights: `checkin` is reserved, `checkout` is not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Stay {
    pub checkin: NaiveDate,
    pub checkout: NaiveDate,
}

impl Stay {
    /// A stay read from a booking listing. Empty or inverted ranges are kept
    /// as-is and simply cover no nights.
    pub fn booked(checkin: NaiveDate, checkout: NaiveDate) -> Self {
        Self { checkin, checkout }
    }

    /// A stay requested by the operator. It must cover at least one night.
    pub fn query(checkin: NaiveDate, checkout: NaiveDate) -> Result<Self> {
        if checkin >= checkout {
            return Err(AvailabilityError::InvalidQuery(format!(
                "checkout {checkout} must be later than checkin {checkin}"
            )));
        }
        Ok(Self { checkin, checkout })
    }

    pub fn nights(&self) -> impl Iterator<Item = NaiveDate> {
        let checkout = self.checkout;
        self.checkin.iter_days().take_while(move |day| *day < checkout)
    }

    pub fn len(&self) -> u64 {
        (self.checkout - self.checkin).num_days().max(0) as u64
    }

    pub fn is_empty(&self) -> bool {
        self.checkin >= self.checkout
    }
}
