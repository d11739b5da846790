use std::borrow::Cow;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use clap::{Parser, ValueEnum};
use validator::{Validate, ValidationError, ValidationErrors};

use crate::error::{AvailabilityError, Result};
use crate::models::{parse_date, Stay};

/// Report hotels that have a free room on every night of a stay.
#[derive(Debug, Parser)]
#[command(name = "hotel-availability", version)]
pub struct Cli {
    /// Hotel listing, one `name,capacity` per line
    #[arg(long, value_name = "PATH", env = "HOTELS_FILE")]
    pub hotels: PathBuf,

    /// Booking listing, one `hotel,checkin,checkout` per line
    #[arg(long, value_name = "PATH", env = "BOOKINGS_FILE")]
    pub bookings: PathBuf,

    /// First night of the stay
    #[arg(long, value_name = "YYYY-MM-DD", value_parser = parse_date)]
    pub checkin: NaiveDate,

    /// Day of departure; this night is not part of the stay
    #[arg(long, value_name = "YYYY-MM-DD", value_parser = parse_date)]
    pub checkout: NaiveDate,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One hotel name per line
    Text,
    /// A JSON object with the query and the available hotels
    Json,
}

/// Everything a run needs, checked once and then only read.
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
#[validate(schema(function = "ordered_stay", skip_on_field_errors = false))]
pub struct Config {
    #[validate(custom = "existing_file")]
    pub hotels: PathBuf,
    #[validate(custom = "existing_file")]
    pub bookings: PathBuf,
    pub checkin: NaiveDate,
    pub checkout: NaiveDate,
    pub format: OutputFormat,
}

impl Config {
    pub fn stay(&self) -> Result<Stay> {
        Stay::query(self.checkin, self.checkout)
    }
}

impl TryFrom<Cli> for Config {
    type Error = AvailabilityError;

    fn try_from(cli: Cli) -> Result<Self> {
        let config = Config {
            hotels: cli.hotels,
            bookings: cli.bookings,
            checkin: cli.checkin,
            checkout: cli.checkout,
            format: cli.format,
        };
        config
            .validate()
            .map_err(|errors| AvailabilityError::Config(describe(&errors)))?;
        Ok(config)
    }
}

#[allow(clippy::ptr_arg)]
fn existing_file(path: &PathBuf) -> std::result::Result<(), ValidationError> {
    if Path::new(path).is_file() {
        return Ok(());
    }
    Err(ValidationError::new("missing_file"))
}

fn ordered_stay(config: &Config) -> std::result::Result<(), ValidationError> {
    if config.checkin < config.checkout {
        return Ok(());
    }
    let mut error = ValidationError::new("unordered_stay");
    error.message = Some(Cow::Borrowed(
        "Checkout date should be later than Checkin date",
    ));
    Err(error)
}

/// One line per failed check, in a stable order.
fn describe(errors: &ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by_key(|(field, _)| *field);
    let mut lines = Vec::new();
    for (field, failures) in fields {
        for failure in failures.iter() {
            let line = match (&failure.message, failure.code.as_ref()) {
                (Some(message), _) => message.to_string(),
                (None, "missing_file") => {
                    format!("File provided for --{field} does not exist")
                }
                (None, code) => format!("--{field} failed check {code}"),
            };
            lines.push(line);
        }
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn cli(hotels: &Path, bookings: &Path, checkin: &str, checkout: &str) -> Cli {
        Cli::try_parse_from([
            "hotel-availability",
            "--hotels",
            hotels.to_str().expect("utf8"),
            "--bookings",
            bookings.to_str().expect("utf8"),
            "--checkin",
            checkin,
            "--checkout",
            checkout,
        ])
        .expect("parse")
    }

    fn fixtures() -> (tempfile::TempDir, PathBuf, PathBuf) {
        let dir = tempfile::tempdir().expect("tmp");
        let hotels = dir.path().join("hotels.csv");
        let bookings = dir.path().join("bookings.csv");
        fs::write(&hotels, "A,1\n").expect("write hotels");
        fs::write(&bookings, "").expect("write bookings");
        (dir, hotels, bookings)
    }

    #[test]
    fn flags_are_order_independent() {
        let cli = Cli::try_parse_from([
            "hotel-availability",
            "--checkout",
            "2024-01-03",
            "--bookings",
            "b.csv",
            "--checkin",
            "2024-01-01",
            "--hotels",
            "h.csv",
        ])
        .expect("parse");
        assert_eq!(cli.hotels, PathBuf::from("h.csv"));
        assert_eq!(cli.bookings, PathBuf::from("b.csv"));
        assert_eq!(cli.format, OutputFormat::Text);
    }

    #[test]
    fn repeated_flag_is_rejected() {
        let err = Cli::try_parse_from([
            "hotel-availability",
            "--hotels",
            "h.csv",
            "--hotels",
            "h.csv",
            "--bookings",
            "b.csv",
            "--checkin",
            "2024-01-01",
            "--checkout",
            "2024-01-03",
        ])
        .expect_err("duplicate");
        assert!(err.to_string().contains("--hotels"));
    }

    #[test]
    fn impossible_date_is_rejected() {
        let err = Cli::try_parse_from([
            "hotel-availability",
            "--hotels",
            "h.csv",
            "--bookings",
            "b.csv",
            "--checkin",
            "2021-02-30",
            "--checkout",
            "2021-03-03",
        ])
        .expect_err("bad date");
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }

    #[test]
    fn unknown_flag_is_rejected() {
        assert!(Cli::try_parse_from(["hotel-availability", "--rooms", "3"]).is_err());
    }

    #[test]
    fn valid_config_builds_its_stay() {
        let (_dir, hotels, bookings) = fixtures();
        let config = Config::try_from(cli(&hotels, &bookings, "2024-01-01", "2024-01-03"))
            .expect("config");
        let stay = config.stay().expect("stay");
        assert_eq!(stay.len(), 2);
    }

    #[test]
    fn missing_file_is_named() {
        let (dir, hotels, _) = fixtures();
        let missing = dir.path().join("nope.csv");
        let err = Config::try_from(cli(&hotels, &missing, "2024-01-01", "2024-01-03"))
            .expect_err("missing bookings");
        assert_eq!(
            err.to_string(),
            "File provided for --bookings does not exist"
        );
    }

    #[test]
    fn empty_stay_is_rejected() {
        let (_dir, hotels, bookings) = fixtures();
        let err = Config::try_from(cli(&hotels, &bookings, "2024-01-01", "2024-01-01"))
            .expect_err("empty stay");
        assert_eq!(
            err.to_string(),
            "Checkout date should be later than Checkin date"
        );
    }
}
