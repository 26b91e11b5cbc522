//! Wire records exchanged with the storage collaborator.
//!
//! The store speaks in flat `(id, label, [lat, lon] pairs)` records; the
//! conversions to and from [`DeliveryArea`] live here so the editor never
//! handles raw pairs.

use serde::{Deserialize, Serialize};

use zonekit_core::{Coordinate, DeliveryArea, GeometryError, Polygon, ZoneId};

/// Canonical form of a persisted zone, as returned by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneRecord {
    pub id: String,
    pub label: String,
    /// Ring vertices as `[lat, lon]` pairs, rounded to 6 decimals by the
    /// store on write.
    pub coordinates: Vec<[f64; 2]>,
}

impl ZoneRecord {
    /// Converts the record into a `Saved` delivery area, validating the ring.
    pub fn into_area(self) -> Result<DeliveryArea, GeometryError> {
        let vertices = self
            .coordinates
            .into_iter()
            .map(Coordinate::from_pair)
            .collect::<Result<Vec<_>, _>>()?;
        let polygon = Polygon::new(vertices)?;
        Ok(DeliveryArea::saved(ZoneId(self.id), self.label, polygon))
    }
}

/// Upsert form of a zone, as submitted on save.
///
/// `id` is present for zones the store already knows and omitted for zones
/// committed locally since the last save; the store assigns identifiers on
/// insert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneSubmission {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub label: String,
    pub coordinates: Vec<[f64; 2]>,
}

impl ZoneSubmission {
    /// Builds the submission for one local area, keeping the identifier only
    /// when the area has been persisted before.
    pub fn from_area(area: &DeliveryArea) -> Self {
        Self {
            id: area.id().map(|id| id.0.clone()),
            label: area.label().to_string(),
            coordinates: area.vertices().iter().map(Coordinate::to_pair).collect(),
        }
    }
}
