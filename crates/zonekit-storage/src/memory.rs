//! In-memory reference implementation of [`ZoneStore`].
//!
//! Used by tests and local tooling. Behaves like the hosted backend at the
//! interface boundary: upsert-and-prune semantics, atomic saves (everything
//! is validated before any mutation), uuid identifiers, 6-decimal rounding
//! on write.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use uuid::Uuid;

use zonekit_core::{round_component, Coordinate, Polygon, ShopId, StorageError};

use crate::records::{ZoneRecord, ZoneSubmission};
use crate::store::ZoneStore;

#[derive(Debug, Clone)]
struct StoredZone {
    id: String,
    label: String,
    coordinates: Vec<[f64; 2]>,
    updated_at: DateTime<Utc>,
}

impl StoredZone {
    fn to_record(&self) -> ZoneRecord {
        ZoneRecord {
            id: self.id.clone(),
            label: self.label.clone(),
            coordinates: self.coordinates.clone(),
        }
    }
}

/// Thread-safe in-memory zone store, keyed by shop.
#[derive(Default)]
pub struct MemoryZoneStore {
    shops: RwLock<HashMap<String, Vec<StoredZone>>>,
    fail_next_save: AtomicBool,
}

impl MemoryZoneStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes the next `save_zones` call fail with a transport error, so
    /// callers can exercise their retry path. Loads are unaffected.
    pub fn fail_next_save(&self) {
        self.fail_next_save.store(true, Ordering::SeqCst);
    }

    /// Number of zones currently persisted for the shop.
    pub fn zone_count(&self, shop: &ShopId) -> usize {
        self.shops
            .read()
            .get(&shop.0)
            .map(Vec::len)
            .unwrap_or(0)
    }

    fn validate(submission: &ZoneSubmission) -> Result<Vec<[f64; 2]>, StorageError> {
        let vertices = submission
            .coordinates
            .iter()
            .map(|&pair| Coordinate::from_pair(pair))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| StorageError::Rejected {
                reason: e.to_string(),
            })?;
        let polygon = Polygon::new(vertices).map_err(|e| StorageError::Rejected {
            reason: e.to_string(),
        })?;
        Ok(polygon
            .vertices()
            .iter()
            .map(|c| [round_component(c.lat), round_component(c.lon)])
            .collect())
    }
}

#[async_trait]
impl ZoneStore for MemoryZoneStore {
    async fn load_zones(&self, shop: &ShopId) -> Result<Vec<ZoneRecord>, StorageError> {
        let shops = self.shops.read();
        let records = shops
            .get(&shop.0)
            .map(|zones| zones.iter().map(StoredZone::to_record).collect())
            .unwrap_or_default();
        Ok(records)
    }

    async fn save_zones(
        &self,
        shop: &ShopId,
        zones: Vec<ZoneSubmission>,
    ) -> Result<Vec<ZoneRecord>, StorageError> {
        if self.fail_next_save.swap(false, Ordering::SeqCst) {
            return Err(StorageError::Transport {
                reason: "injected save failure".to_string(),
            });
        }

        let mut shops = self.shops.write();
        let existing = shops.entry(shop.0.clone()).or_default();

        // Validate the whole submission before touching anything, so a bad
        // zone cannot leave a half-applied set behind.
        let mut validated = Vec::with_capacity(zones.len());
        for submission in &zones {
            if let Some(id) = &submission.id {
                if !existing.iter().any(|z| &z.id == id) {
                    return Err(StorageError::UnknownZone {
                        zone_id: id.clone(),
                    });
                }
            }
            validated.push(Self::validate(submission)?);
        }

        let now = Utc::now();
        let replacement: Vec<StoredZone> = zones
            .into_iter()
            .zip(validated)
            .map(|(submission, coordinates)| StoredZone {
                id: submission
                    .id
                    .unwrap_or_else(|| Uuid::new_v4().to_string()),
                label: submission.label,
                coordinates,
                updated_at: now,
            })
            .collect();

        tracing::debug!(
            shop = %shop,
            zones = replacement.len(),
            pruned = existing.len().saturating_sub(replacement.len()),
            "replaced zone set"
        );

        *existing = replacement;
        Ok(existing.iter().map(StoredZone::to_record).collect())
    }
}
