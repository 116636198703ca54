//! Airport lookup by location and by IATA code

use crate::error::{Result, Warning};
use crate::reader::{AirportReader, ReaderOptions};
use crate::{Airport, GeoPoint};
use std::io::Read;
use std::path::Path;

/// Read-only set of airports in dataset order
///
/// Built once and never mutated afterwards, so it can be shared between
/// threads without locking. Both queries are linear scans; the data set is
/// a few thousand rows at most.
#[derive(Debug, Clone, Default)]
pub struct AirportIndex {
    airports: Vec<Airport>,
}

impl AirportIndex {
    /// Create an index over `airports`, keeping their order
    pub fn new(airports: Vec<Airport>) -> Self {
        Self { airports }
    }

    /// Build an index from an airport dataset file
    ///
    /// Skipped rows are reported through `warnings`.
    pub fn from_path<P: AsRef<Path>>(
        path: P,
        options: ReaderOptions,
        warnings: &mut Vec<Warning>,
    ) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "Loading airport dataset");

        let reader = AirportReader::from_path(path)?.with_options(options);
        Self::from_airport_reader(reader, warnings)
    }

    /// Build an index from any dataset byte source
    pub fn from_reader<R: Read>(
        reader: R,
        options: ReaderOptions,
        warnings: &mut Vec<Warning>,
    ) -> Result<Self> {
        Self::from_airport_reader(AirportReader::new(reader).with_options(options), warnings)
    }

    fn from_airport_reader<R: Read>(
        mut reader: AirportReader<R>,
        warnings: &mut Vec<Warning>,
    ) -> Result<Self> {
        let previous_warnings = warnings.len();
        let airports = reader
            .read_airports(warnings)
            .collect::<Result<Vec<_>>>()?;

        tracing::info!(
            count = airports.len(),
            skipped = warnings.len() - previous_warnings,
            "Built airport index"
        );

        Ok(Self::new(airports))
    }

    /// Airport closest to `target` by [`GeoPoint::pseudo_distance`]
    ///
    /// Ties go to the airport that comes first. Returns `None` only when
    /// the index is empty.
    pub fn nearest(&self, target: GeoPoint) -> Option<&Airport> {
        let mut airports = self.airports.iter();
        let mut nearest = airports.next()?;
        let mut min_distance = target.pseudo_distance(&nearest.geo);

        for airport in airports {
            let distance = target.pseudo_distance(&airport.geo);
            if distance < min_distance {
                min_distance = distance;
                nearest = airport;
            }
        }

        tracing::debug!(?target, iata = %nearest.iata_code, "Nearest airport");
        Some(nearest)
    }

    /// First airport whose IATA code equals `code` exactly (case-sensitive)
    pub fn by_code(&self, code: &str) -> Option<&Airport> {
        self.airports.iter().find(|airport| airport.iata_code == code)
    }

    /// Returns the number of airports in the index.
    pub fn len(&self) -> usize {
        self.airports.len()
    }

    /// Returns true if the index is empty.
    pub fn is_empty(&self) -> bool {
        self.airports.is_empty()
    }

    /// Returns an iterator over all airports in dataset order.
    pub fn iter(&self) -> std::slice::Iter<'_, Airport> {
        self.airports.iter()
    }
}

impl FromIterator<Airport> for AirportIndex {
    fn from_iter<I: IntoIterator<Item = Airport>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
