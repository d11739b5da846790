use std::collections::btree_map::{self, BTreeMap, Entry};
use std::io::BufRead;
use std::path::Path;

use crate::error::{RecordError, Result};
use crate::models::Hotel;

use super::{for_each_record, open};

/// Every hotel known to a run, keyed by name.
#[derive(Debug, Default, Clone)]
pub struct HotelRegistry {
    hotels: BTreeMap<String, Hotel>,
}

impl HotelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `hotel` unless its name is already taken. Returns whether it was added.
    pub fn insert(&mut self, hotel: Hotel) -> bool {
        match self.hotels.entry(hotel.name.clone()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(hotel);
                true
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&Hotel> {
        self.hotels.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Hotel> {
        self.hotels.get_mut(name)
    }

    /// Hotels in name order.
    pub fn iter(&self) -> btree_map::Values<'_, String, Hotel> {
        self.hotels.values()
    }

    pub fn len(&self) -> usize {
        self.hotels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hotels.is_empty()
    }
}

/// Loads a `name,capacity` listing from disk.
pub fn load_hotels(path: &Path) -> Result<HotelRegistry> {
    let registry = read_hotels(open(path)?, path)?;
    log::info!("loaded {} hotels from {}", registry.len(), path.display());
    Ok(registry)
}

pub fn read_hotels<R: BufRead>(reader: R, source: &Path) -> Result<HotelRegistry> {
    let mut registry = HotelRegistry::new();
    for_each_record(reader, source, 2, |fields| {
        let name = fields[0];
        if name.is_empty() {
            return Err(RecordError::EmptyName);
        }
        let total_rooms: u32 = fields[1]
            .parse()
            .map_err(|_| RecordError::Capacity(fields[1].to_string()))?;
        if !registry.insert(Hotel::new(name, total_rooms)) {
            log::debug!("ignoring duplicate hotel {name:?}");
        }
        Ok(())
    })?;
    Ok(registry)
}
