//! The per-shop zone collection and its change-detection snapshot.

use serde::Serialize;

use zonekit_core::{
    polygons_overlap, Coordinate, DeliveryArea, EditorError, Error, Polygon, ShopId,
};
use zonekit_storage::{ZoneRecord, ZoneSubmission};

use crate::matcher::{find_containing_zones, BoundaryPolicy};

/// Normalized, order- and precision-stable serialization of a collection,
/// used purely to detect unsaved changes. Two snapshots are equal iff their
/// serialized forms are byte-equal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot(String);

/// Serialized shape of one area inside a snapshot: label plus rounded
/// vertices, identifiers deliberately excluded (they are server-assigned
/// and must not affect change detection).
#[derive(Serialize)]
struct NormalizedArea<'a> {
    label: &'a str,
    vertices: Vec<[f64; 2]>,
}

/// The ordered set of delivery areas belonging to one shop, plus the
/// snapshot of the last known-persisted state.
///
/// Owned by a single editing session; replaced wholesale with the server's
/// canonical set after every successful save.
#[derive(Debug, Clone)]
pub struct ZoneCollection {
    shop: ShopId,
    areas: Vec<DeliveryArea>,
    persisted: Snapshot,
}

impl ZoneCollection {
    /// Creates an empty collection whose persisted baseline is "no zones".
    pub fn new(shop: ShopId) -> Self {
        let mut collection = Self {
            shop,
            areas: Vec::new(),
            persisted: Snapshot(String::new()),
        };
        collection.persisted = collection.normalize();
        collection
    }

    /// Seeds a collection from the store's load response and takes it as the
    /// persisted baseline.
    pub fn from_records(shop: ShopId, records: Vec<ZoneRecord>) -> Result<Self, Error> {
        let areas = records
            .into_iter()
            .map(|record| record.into_area().map_err(Error::from))
            .collect::<Result<Vec<_>, _>>()?;
        let mut collection = Self {
            shop,
            areas,
            persisted: Snapshot(String::new()),
        };
        collection.persisted = collection.normalize();
        Ok(collection)
    }

    pub fn shop(&self) -> &ShopId {
        &self.shop
    }

    pub fn areas(&self) -> &[DeliveryArea] {
        &self.areas
    }

    pub fn len(&self) -> usize {
        self.areas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }

    /// Produces the order-preserving, coordinate-rounded serialization of
    /// all areas' labels and vertex sequences.
    pub fn normalize(&self) -> Snapshot {
        let entries: Vec<NormalizedArea<'_>> = self
            .areas
            .iter()
            .map(|area| NormalizedArea {
                label: area.label(),
                vertices: area
                    .vertices()
                    .iter()
                    .map(|c| c.rounded().to_pair())
                    .collect(),
            })
            .collect();
        // Labels and finite floats cannot fail JSON serialization.
        let serialized =
            serde_json::to_string(&entries).expect("snapshot serialization cannot fail");
        Snapshot(serialized)
    }

    /// True if the current state differs from the last persisted snapshot.
    pub fn has_pending_changes(&self) -> bool {
        self.normalize() != self.persisted
    }

    /// Appends a committed area. Overlap against existing zones has already
    /// been enforced by the editor at commit time.
    pub fn push(&mut self, area: DeliveryArea) {
        debug_assert!(
            !self
                .areas
                .iter()
                .any(|existing| polygons_overlap(existing.polygon(), area.polygon())),
            "pushed area overlaps an existing zone"
        );
        self.areas.push(area);
    }

    /// Removes an area locally. The removal only becomes durable on the next
    /// successful save; until then it is reversible only by discarding the
    /// editing session.
    pub fn remove(&mut self, index: usize) -> Option<DeliveryArea> {
        if index >= self.areas.len() {
            return None;
        }
        let removed = self.areas.remove(index);
        tracing::debug!(shop = %self.shop, label = removed.label(), "removed zone locally");
        Some(removed)
    }

    /// Replaces an area's label.
    pub fn rename(&mut self, index: usize, label: impl Into<String>) -> Result<(), EditorError> {
        let area = self
            .areas
            .get_mut(index)
            .ok_or(EditorError::NoSuchZone { index })?;
        area.set_label(label);
        Ok(())
    }

    /// Replaces an area's ring wholesale, re-checking overlap against every
    /// other zone in the collection. Edits redraw the full shape; there is
    /// no per-vertex mutation.
    pub fn replace_polygon(&mut self, index: usize, polygon: Polygon) -> Result<(), EditorError> {
        if index >= self.areas.len() {
            return Err(EditorError::NoSuchZone { index });
        }
        for (i, other) in self.areas.iter().enumerate() {
            if i != index && polygons_overlap(other.polygon(), &polygon) {
                return Err(EditorError::ZoneOverlap {
                    conflicting_label: other.label().to_string(),
                });
            }
        }
        self.areas[index].set_polygon(polygon);
        Ok(())
    }

    /// The full submission list for an upsert-and-prune save: ids only for
    /// zones the store already knows.
    pub fn submissions(&self) -> Vec<ZoneSubmission> {
        self.areas.iter().map(ZoneSubmission::from_area).collect()
    }

    /// Replaces the collection with the server's canonical set and adopts it
    /// as the new persisted baseline.
    pub fn apply_canonical(&mut self, records: Vec<ZoneRecord>) -> Result<(), Error> {
        let areas = records
            .into_iter()
            .map(|record| record.into_area().map_err(Error::from))
            .collect::<Result<Vec<_>, _>>()?;
        self.areas = areas;
        self.persisted = self.normalize();
        Ok(())
    }

    /// All zones containing the point, boundary included.
    pub fn find_containing(&self, point: Coordinate) -> Vec<&DeliveryArea> {
        find_containing_zones(self, point, BoundaryPolicy::Include)
    }
}
