#![doc = include_str!("../README.md")]

pub use crate::config::GlobeConfig;
pub use crate::error::{Error, PickError, Result, Warning};
pub use crate::flights::{FLIGHTS_ENDPOINT, Flight, FlightQuery, decode_flights};
pub use crate::globe::{Globe, Pick, ScreenClick};
pub use crate::index::AirportIndex;
pub use crate::pick::{PickInput, PickResolver, Ray};
pub use crate::projector::{DEFAULT_RADIUS, MARKER_LATITUDE_STRETCH, SphereProjector};
pub use crate::reader::{AirportIterator, AirportReader, DEFAULT_AIRPORT_KIND, ReaderOptions};
pub use crate::spin::{DEFAULT_SPIN_PERIOD, Spin, SpinAngle};
pub use crate::types::*;

mod config;
mod error;
mod flights;
mod globe;
mod index;
mod pick;
mod projector;
mod reader;
mod spin;
mod types;
pub mod utils;
