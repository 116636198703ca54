use crate::GeoPoint;

/// An airport with its IATA code and location
///
/// Immutable once constructed. IATA codes are expected to be unique among
/// airports that have one, but nothing enforces it.
#[derive(Debug, Clone, PartialEq)]
pub struct Airport {
    pub name: String,
    /// Three-letter IATA code (e.g. "CDG")
    pub iata_code: String,
    pub geo: GeoPoint,
}

impl Airport {
    /// Create an airport from a name, IATA code and location
    pub fn new(name: impl Into<String>, iata_code: impl Into<String>, geo: GeoPoint) -> Self {
        Self {
            name: name.into(),
            iata_code: iata_code.into(),
            geo,
        }
    }

    pub fn latitude(&self) -> f64 {
        self.geo.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.geo.longitude
    }
}

impl std::fmt::Display for Airport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({}) at {:.4}, {:.4}",
            self.name, self.iata_code, self.geo.latitude, self.geo.longitude
        )
    }
}
