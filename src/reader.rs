//! Airport dataset reader with iterator-based API

use crate::error::{Result, Warning};
use crate::utils::decode::decode_field;
use crate::{Airport, GeoPoint};
use csv::ByteRecord;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Airport category kept by default
pub const DEFAULT_AIRPORT_KIND: &str = "large_airport";

/// Column layout of the airport-codes dataset
///
/// `ident,type,name,elevation_ft,continent,iso_country,iso_region,
/// municipality,gps_code,iata_code,local_code,coordinates`, where
/// `coordinates` is a quoted `"lon, lat"` pair.
const KIND_FIELD: usize = 1;
const NAME_FIELD: usize = 2;
const IATA_FIELD: usize = 9;
const COORDINATES_FIELD: usize = 11;
const MIN_FIELDS: usize = 12;

/// Reader settings
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
#[serde(default)]
pub struct ReaderOptions {
    /// Value of the `type` column to keep (e.g. "large_airport")
    pub airport_kind: String,
}

impl Default for ReaderOptions {
    fn default() -> Self {
        Self {
            airport_kind: DEFAULT_AIRPORT_KIND.to_string(),
        }
    }
}

/// Airport dataset reader
///
/// Parses the airport-codes CSV record by record, keeping rows of one
/// airport category. Fields are decoded as UTF-8 with a Windows-1252
/// fallback.
///
/// # Example
///
/// ```no_run
/// use airglobe::AirportReader;
///
/// let mut reader = AirportReader::from_path("data/airport-codes.csv")?;
/// let mut warnings = Vec::new();
/// for result in reader.read_airports(&mut warnings) {
///     let airport = result?;
///     println!("{airport}");
/// }
/// # Ok::<(), airglobe::Error>(())
/// ```
#[derive(Debug)]
pub struct AirportReader<R> {
    reader: csv::Reader<R>,
    options: ReaderOptions,
}

impl AirportReader<File> {
    /// Open a dataset from a file path
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Ok(Self::new(file))
    }
}

impl<R: Read> AirportReader<R> {
    /// Create a reader from any byte source
    ///
    /// The header row is read like any other row; its `type` column never
    /// matches an airport category, so it is skipped.
    pub fn new(reader: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);

        Self {
            reader,
            options: ReaderOptions::default(),
        }
    }

    /// Replace the reader settings
    pub fn with_options(mut self, options: ReaderOptions) -> Self {
        self.options = options;
        self
    }

    /// Create iterator over the airports in the dataset
    ///
    /// Yields airports in file order. Rows of other categories (including
    /// the header row) are skipped silently; malformed rows of the selected
    /// category are skipped and reported through `warnings`. Only read
    /// failures surface as errors.
    pub fn read_airports<'a>(
        &'a mut self,
        warnings: &'a mut Vec<Warning>,
    ) -> AirportIterator<'a, R> {
        AirportIterator {
            reader: &mut self.reader,
            options: &self.options,
            warnings,
            record: ByteRecord::new(),
        }
    }
}

/// Iterator over airports in a dataset
///
/// Created by calling [`AirportReader::read_airports`].
pub struct AirportIterator<'a, R> {
    reader: &'a mut csv::Reader<R>,
    options: &'a ReaderOptions,
    warnings: &'a mut Vec<Warning>,
    record: ByteRecord,
}

impl<R> AirportIterator<'_, R> {
    fn warn(&mut self, warning: Warning) {
        tracing::warn!(?warning, "Skipping airport row");
        self.warnings.push(warning);
    }
}

impl<R: Read> Iterator for AirportIterator<'_, R> {
    type Item = Result<Airport>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.reader.read_byte_record(&mut self.record) {
                Ok(true) => {}
                Ok(false) => return None,
                Err(err) => return Some(Err(err.into())),
            }

            if self.record.get(KIND_FIELD) != Some(self.options.airport_kind.as_bytes()) {
                continue;
            }

            let line = self.record.position().map_or(0, |position| position.line());
            match parse_row(&self.record, line as usize) {
                Ok(airport) => return Some(Ok(airport)),
                Err(warning) => self.warn(warning),
            }
        }
    }
}

/// Build an airport from one record
fn parse_row(record: &ByteRecord, line: usize) -> std::result::Result<Airport, Warning> {
    if record.len() < MIN_FIELDS {
        return Err(Warning::TruncatedRow {
            line,
            fields: record.len(),
        });
    }

    let iata_code = decode_field(&record[IATA_FIELD]);
    let iata_code = iata_code.trim();
    if iata_code.is_empty() {
        return Err(Warning::MissingIataCode { line });
    }

    let coordinates = decode_field(&record[COORDINATES_FIELD]);
    let coordinates = coordinates.trim();
    let Some((longitude, latitude)) = parse_coordinates(coordinates) else {
        return Err(Warning::InvalidCoordinates {
            line,
            value: coordinates.to_string(),
        });
    };

    if latitude == 0.0 || longitude == 0.0 {
        return Err(Warning::MissingCoordinates { line });
    }

    Ok(Airport::new(
        decode_field(&record[NAME_FIELD]).trim(),
        iata_code,
        GeoPoint::new(latitude, longitude),
    ))
}

/// Split a `"lon, lat"` pair
fn parse_coordinates(value: &str) -> Option<(f64, f64)> {
    let (longitude, latitude) = value.split_once(',')?;
    Some((longitude.trim().parse().ok()?, latitude.trim().parse().ok()?))
}
