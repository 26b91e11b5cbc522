//! The per-shop editing session.
//!
//! Owns one shop's [`ZoneCollection`] and [`ZoneEditor`], and mediates the
//! only boundary crossing in the engine: loading and saving through a
//! [`ZoneStore`]. Saves are serialized by a busy flag; a second save while
//! one is outstanding fails with [`EditorError::SaveInFlight`] instead of
//! racing the first.

use std::sync::Arc;

use zonekit_core::{Coordinate, DeliveryArea, EditorError, Error, Result, ShopId};
use zonekit_storage::ZoneStore;

use crate::collection::ZoneCollection;
use crate::editor::ZoneEditor;

/// A single-owner editing session for one shop's delivery zones.
pub struct EditSession<S: ZoneStore> {
    store: Arc<S>,
    collection: ZoneCollection,
    editor: ZoneEditor,
    save_in_flight: bool,
}

impl<S: ZoneStore> EditSession<S> {
    /// Opens a session by loading the shop's persisted zones; the loaded set
    /// becomes the change-detection baseline.
    pub async fn load(store: Arc<S>, shop: ShopId) -> Result<Self> {
        let records = store.load_zones(&shop).await.map_err(Error::from)?;
        tracing::info!(shop = %shop, zones = records.len(), "editing session opened");
        let collection = ZoneCollection::from_records(shop, records)?;
        Ok(Self {
            store,
            collection,
            editor: ZoneEditor::new(),
            save_in_flight: false,
        })
    }

    pub fn collection(&self) -> &ZoneCollection {
        &self.collection
    }

    pub fn collection_mut(&mut self) -> &mut ZoneCollection {
        &mut self.collection
    }

    pub fn editor(&self) -> &ZoneEditor {
        &self.editor
    }

    /// Starts drawing a new polygon.
    pub fn begin_polygon(&mut self) -> std::result::Result<(), EditorError> {
        self.editor.begin()
    }

    /// Appends a tapped coordinate to the drawing.
    pub fn add_vertex(&mut self, coordinate: Coordinate) -> std::result::Result<usize, EditorError> {
        self.editor.add_vertex(coordinate)
    }

    /// Removes the most recent vertex from the drawing.
    pub fn undo_vertex(&mut self) -> Option<Coordinate> {
        self.editor.undo_vertex()
    }

    /// Abandons the current drawing.
    pub fn cancel_drawing(&mut self) -> Vec<Coordinate> {
        self.editor.cancel()
    }

    /// Completes the current drawing, appending the new zone on success.
    pub fn complete_polygon(&mut self) -> std::result::Result<DeliveryArea, EditorError> {
        self.editor.commit(&mut self.collection)
    }

    /// Removes a zone locally; durable only after the next successful save.
    pub fn remove_area(&mut self, index: usize) -> Option<DeliveryArea> {
        self.collection.remove(index)
    }

    pub fn has_pending_changes(&self) -> bool {
        self.collection.has_pending_changes()
    }

    /// Pushes the current zone set to the store (upsert-and-prune) and
    /// adopts the returned canonical set.
    ///
    /// A clean session saves nothing and returns Ok. On store failure the
    /// local collection and snapshot are left untouched, so the save can be
    /// retried as-is.
    pub async fn save(&mut self) -> Result<()> {
        if self.save_in_flight {
            return Err(EditorError::SaveInFlight.into());
        }
        if !self.has_pending_changes() {
            tracing::debug!(shop = %self.collection.shop(), "save skipped: no pending changes");
            return Ok(());
        }

        self.save_in_flight = true;
        let result = self
            .store
            .save_zones(self.collection.shop(), self.collection.submissions())
            .await;
        self.save_in_flight = false;

        match result {
            Ok(records) => {
                tracing::info!(
                    shop = %self.collection.shop(),
                    zones = records.len(),
                    "zone set saved"
                );
                self.collection.apply_canonical(records)
            }
            Err(e) => {
                tracing::warn!(shop = %self.collection.shop(), error = %e, "save failed");
                Err(e.into())
            }
        }
    }

    /// Throws away all local edits (including any in-progress drawing) and
    /// reloads the shop's zones from the store. Also clears a busy flag left
    /// behind by a save future that was dropped mid-flight.
    pub async fn discard(&mut self) -> Result<()> {
        let records = self
            .store
            .load_zones(self.collection.shop())
            .await
            .map_err(Error::from)?;
        self.collection = ZoneCollection::from_records(self.collection.shop().clone(), records)?;
        self.editor.cancel();
        self.save_in_flight = false;
        tracing::info!(shop = %self.collection.shop(), "session discarded and reloaded");
        Ok(())
    }

    /// All zones containing the point, boundary treated as inside.
    pub fn find_containing_zones(&self, point: Coordinate) -> Vec<&DeliveryArea> {
        self.collection.find_containing(point)
    }
}
