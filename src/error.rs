use std::io;

/// Unrecoverable loading and decoding errors
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Invalid flight data: {0}")]
    InvalidFlightData(#[from] serde_json::Error),
}

/// Expected, recoverable outcomes of resolving a pick
///
/// None of these are fatal. A host typically ignores the click.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PickError {
    /// The pick ray misses the sphere
    #[error("Pick ray does not intersect the sphere")]
    NoIntersection,

    /// A zero-length vector or a non-finite geographic coordinate
    #[error("Degenerate pick geometry: {0}")]
    DegenerateGeometry(&'static str),

    /// No airports are loaded
    #[error("No airports loaded")]
    EmptyIndex,
}

/// Non-fatal issues encountered while reading an airport dataset
///
/// Each warning means the row was skipped. Line numbers are 1-based.
#[derive(Debug, Clone, PartialEq)]
pub enum Warning {
    /// Fewer fields than the dataset layout requires
    TruncatedRow { line: usize, fields: usize },

    /// Airport row without an IATA code
    MissingIataCode { line: usize },

    /// Coordinates field that is not a `lon, lat` pair of numbers
    InvalidCoordinates { line: usize, value: String },

    /// Zero latitude or longitude, used by the dataset for unknown positions
    MissingCoordinates { line: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
