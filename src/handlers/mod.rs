pub mod availability;
pub mod bookings;
pub mod hotels;

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{AvailabilityError, RecordError, Result};

pub(crate) fn open(path: &Path) -> Result<BufReader<File>> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|e| AvailabilityError::io(path, e))
}

/// Feeds every data line of a listing to `handle` as trimmed fields.
///
/// Lines starting with `#` are comments and blank lines are skipped. Each
/// remaining line must split into exactly `expected` comma-separated fields.
/// The first failing line stops the walk and is reported with its 1-based
/// line number.
pub(crate) fn for_each_record<R, F>(
    reader: R,
    source: &Path,
    expected: usize,
    mut handle: F,
) -> Result<()>
where
    R: BufRead,
    F: FnMut(&[&str]) -> std::result::Result<(), RecordError>,
{
    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| AvailabilityError::io(source, e))?;
        if line.starts_with('#') || line.trim().is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        if fields.len() != expected {
            return Err(AvailabilityError::parse(
                source,
                index + 1,
                RecordError::FieldCount {
                    expected,
                    found: fields.len(),
                },
            ));
        }
        handle(&fields).map_err(|kind| AvailabilityError::parse(source, index + 1, kind))?;
    }
    Ok(())
}
