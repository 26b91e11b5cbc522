//! The storage collaborator contract.

use async_trait::async_trait;

use zonekit_core::{ShopId, StorageError};

use crate::records::{ZoneRecord, ZoneSubmission};

/// Backend that persists delivery zones per shop.
///
/// `save_zones` is an upsert-and-prune: the submitted list becomes the
/// shop's canonical set. Zones carrying a known id are updated, zones
/// without an id are created, and previously persisted zones absent from
/// the submission are deleted. The call must be atomic from the caller's
/// perspective: either the full replacement set is visible afterward, or
/// the call failed and nothing changed.
#[async_trait]
pub trait ZoneStore: Send + Sync {
    /// Loads the shop's persisted zones. A shop with no zones yields an
    /// empty list, not an error.
    async fn load_zones(&self, shop: &ShopId) -> Result<Vec<ZoneRecord>, StorageError>;

    /// Replaces the shop's zone set and returns the canonical result, with
    /// server-assigned ids and server-rounded coordinates.
    async fn save_zones(
        &self,
        shop: &ShopId,
        zones: Vec<ZoneSubmission>,
    ) -> Result<Vec<ZoneRecord>, StorageError>;
}
