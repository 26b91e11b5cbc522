//! Geographic coordinates and the rounding contract.
//!
//! Every comparison the engine makes between coordinates goes through the
//! 6-decimal rounding defined here; raw tap input may carry more precision
//! but it never survives into snapshots or persistence.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::{COORD_SCALE, LATITUDE_RANGE, LONGITUDE_RANGE};
use crate::error::GeometryError;

/// Rounds a single coordinate component to the engine's precision floor.
pub fn round_component(value: f64) -> f64 {
    (value * COORD_SCALE).round() / COORD_SCALE
}

/// A latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    /// Creates a validated coordinate.
    ///
    /// Both components must be finite; latitude must lie in [-90, 90] and
    /// longitude in [-180, 180].
    pub fn new(lat: f64, lon: f64) -> Result<Self, GeometryError> {
        if !lat.is_finite() || !lon.is_finite() {
            return Err(GeometryError::NonFiniteCoordinate);
        }
        if !(LATITUDE_RANGE.0..=LATITUDE_RANGE.1).contains(&lat) {
            return Err(GeometryError::LatitudeOutOfRange { lat });
        }
        if !(LONGITUDE_RANGE.0..=LONGITUDE_RANGE.1).contains(&lon) {
            return Err(GeometryError::LongitudeOutOfRange { lon });
        }
        Ok(Self { lat, lon })
    }

    /// Returns this coordinate with both components rounded to 6 decimals.
    pub fn rounded(&self) -> Self {
        Self {
            lat: round_component(self.lat),
            lon: round_component(self.lon),
        }
    }

    /// Equality at the precision floor: true if both components round to the
    /// same 6-decimal value.
    pub fn approx_eq(&self, other: &Coordinate) -> bool {
        self.rounded() == other.rounded()
    }

    /// Wire form used by the storage collaborator: `[lat, lon]`.
    pub fn to_pair(&self) -> [f64; 2] {
        [self.lat, self.lon]
    }

    /// Parses the `[lat, lon]` wire form.
    pub fn from_pair(pair: [f64; 2]) -> Result<Self, GeometryError> {
        Self::new(pair[0], pair[1])
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}
