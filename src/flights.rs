//! Decoding of flight-data API responses
//!
//! Only the decode half lives here: turning a response body into
//! [`Flight`]s resolved against an [`AirportIndex`]. Performing the request
//! is left to the host; [`FlightQuery`] only builds its URL.

use crate::error::Result;
use crate::{Airport, AirportIndex};
use serde::Deserialize;

/// Flight-data endpoint queried for arrivals
pub const FLIGHTS_ENDPOINT: &str = "http://api.aviationstack.com/v1/flights";

/// A flight between two known airports
#[derive(Debug, Clone, PartialEq)]
pub struct Flight {
    pub departure: Option<Airport>,
    pub arrival: Option<Airport>,
}

impl std::fmt::Display for Flight {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let code = |airport: &Option<Airport>| {
            airport
                .as_ref()
                .map_or("?", |airport| airport.iata_code.as_str())
                .to_string()
        };
        write!(f, "{} -> {}", code(&self.departure), code(&self.arrival))
    }
}

/// Request for the flights arriving at one airport
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlightQuery {
    pub access_key: String,
    pub arrival_iata: String,
}

impl FlightQuery {
    pub fn arrivals(access_key: impl Into<String>, airport: &Airport) -> Self {
        Self {
            access_key: access_key.into(),
            arrival_iata: airport.iata_code.clone(),
        }
    }

    /// Full request URL
    pub fn url(&self) -> String {
        format!(
            "{FLIGHTS_ENDPOINT}?access_key={}&arr_iata={}",
            self.access_key, self.arrival_iata
        )
    }
}

#[derive(Debug, Deserialize)]
struct Response {
    data: Vec<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct Entry {
    flight: Option<Legs>,
}

#[derive(Debug, Deserialize)]
struct Legs {
    departure: Option<Endpoint>,
    arrival: Option<Endpoint>,
}

#[derive(Debug, Deserialize)]
struct Endpoint {
    #[serde(default)]
    iata: Option<String>,
}

impl Legs {
    fn codes(&self) -> Option<(&str, &str)> {
        let departure = self.departure.as_ref()?.iata.as_deref()?;
        let arrival = self.arrival.as_ref()?.iata.as_deref()?;
        (!departure.is_empty() && !arrival.is_empty()).then_some((departure, arrival))
    }
}

/// Decode a flights response body
///
/// Reads `{"data": [{"flight": {"departure": {"iata": ..}, "arrival":
/// {"iata": ..}}}, ..]}`. Each entry is decoded on its own: entries of
/// another shape, with a missing leg or code, or whose codes are not in
/// `index` are dropped without affecting the others. Order is kept.
///
/// # Errors
///
/// [`Error::InvalidFlightData`](crate::Error::InvalidFlightData) if the body
/// is not JSON or has no `data` array.
pub fn decode_flights(json: &str, index: &AirportIndex) -> Result<Vec<Flight>> {
    let response: Response = serde_json::from_str(json)?;
    let total = response.data.len();

    let entries: Vec<Entry> = response
        .data
        .into_iter()
        .filter_map(|entry| match serde_json::from_value(entry) {
            Ok(entry) => Some(entry),
            Err(err) => {
                tracing::debug!(%err, "Skipping malformed flight entry");
                None
            }
        })
        .collect();

    let flights: Vec<_> = entries
        .iter()
        .filter_map(|entry| entry.flight.as_ref()?.codes())
        .filter_map(|(departure, arrival)| {
            let departure = index.by_code(departure)?;
            let arrival = index.by_code(arrival)?;
            Some(Flight {
                departure: Some(departure.clone()),
                arrival: Some(arrival.clone()),
            })
        })
        .collect();

    tracing::debug!(
        entries = total,
        flights = flights.len(),
        "Decoded flights"
    );

    Ok(flights)
}
