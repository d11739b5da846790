//! Hotel room availability over a half-open range of nights.
//!
//! A run loads a hotel listing into a [`HotelRegistry`], folds a booking
//! listing into per-night reservation counts, then reports the hotels with a
//! free room on every night of the requested [`Stay`].

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;

pub use config::{Cli, Config, OutputFormat};
pub use error::{AvailabilityError, RecordError, Result};
pub use handlers::availability::{available_hotels, check_availability, AvailabilityReport};
pub use handlers::bookings::{apply_bookings, read_bookings, BookingSummary};
pub use handlers::hotels::{load_hotels, read_hotels, HotelRegistry};
pub use models::{parse_date, Booking, Hotel, Stay};

/// Loads both listings named by `config` and answers its query.
pub fn run(config: &Config) -> Result<AvailabilityReport> {
    let stay = config.stay()?;
    let mut registry = load_hotels(&config.hotels)?;
    apply_bookings(&mut registry, &config.bookings)?;
    Ok(check_availability(&registry, &stay))
}

/// Formats `report` for stdout in the requested `format`.
pub fn render(report: &AvailabilityReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(report
            .available
            .iter()
            .map(|name| format!("{name}\n"))
            .collect()),
        OutputFormat::Json => {
            let mut out = serde_json::to_string_pretty(report)?;
            out.push('\n');
            Ok(out)
        }
    }
}
