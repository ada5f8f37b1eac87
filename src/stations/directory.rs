//! In-memory station directory.

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Serialize;
use tracing::{debug, warn};

use super::error::DirectoryError;

// == Station ==
/// A fixed transit stop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Station {
    /// Identifier in the upstream transport API's id space
    pub id: String,
    /// Display name
    pub name: String,
}

impl Station {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

// == Page ==
/// One page of the directory listing.
#[derive(Debug, Clone, Copy)]
pub struct Page<'a> {
    /// Stations on this page, in load order
    pub stations: &'a [Station],
    /// Size of the whole directory
    pub total_count: usize,
}

// == Station Directory ==
/// Ordered, immutable collection of stations with an id index.
#[derive(Debug, Default)]
pub struct StationDirectory {
    stations: Vec<Station>,
    /// id -> position in `stations`
    index: HashMap<String, usize>,
}

impl StationDirectory {
    // == Constructor ==
    /// Builds a directory from stations in their listing order.
    ///
    /// When an id appears twice, lookups resolve to the first occurrence.
    pub fn new(stations: Vec<Station>) -> Self {
        let mut index = HashMap::with_capacity(stations.len());
        for (pos, station) in stations.iter().enumerate() {
            index.entry(station.id.clone()).or_insert(pos);
        }

        Self { stations, index }
    }

    // == Load ==
    /// Loads stations from a CSV file whose first row is a header.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DirectoryError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| DirectoryError::Io {
            path: path.display().to_string(),
            source,
        })?;

        Self::from_reader(file)
    }

    /// Parses `(id, name)` rows from CSV, skipping the header row.
    ///
    /// Extra columns are ignored. Rows without a name column or with an empty
    /// id are skipped.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DirectoryError> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut stations = Vec::new();
        for (line, result) in rdr.records().enumerate() {
            let record = result?;
            match (record.get(0), record.get(1)) {
                (Some(id), Some(name)) if !id.is_empty() => {
                    stations.push(Station::new(id, name));
                }
                _ => {
                    // +2: one for the header, one for 1-based line numbers
                    warn!("Skipping malformed station row at line {}", line + 2);
                }
            }
        }

        debug!("Parsed {} station rows", stations.len());
        Ok(Self::new(stations))
    }

    // == Find By Id ==
    /// Exact-match lookup by station id.
    pub fn find_by_id(&self, id: &str) -> Option<&Station> {
        self.index.get(id).map(|&pos| &self.stations[pos])
    }

    // == List ==
    /// Returns the 1-based `page` of `page_size` stations.
    ///
    /// A page past the end is empty, not an error. Page 0 is treated as empty.
    pub fn list(&self, page: usize, page_size: usize) -> Page<'_> {
        let total_count = self.stations.len();
        let start = page.saturating_sub(1).saturating_mul(page_size);
        let end = page.saturating_mul(page_size).min(total_count);

        let stations: &[Station] = if page == 0 || start >= end {
            &[]
        } else {
            &self.stations[start..end]
        };

        Page {
            stations,
            total_count,
        }
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }
}
