//! Integration tests for the editing session against the in-memory store:
//! the full draw → commit → save → match round-trip, pruning on removal,
//! and the retry path after a failed save.

use std::sync::Arc;

use zonekit_core::{Coordinate, Error, ShopId, StorageError};
use zonekit_editor::EditSession;
use zonekit_storage::MemoryZoneStore;

fn coord(lat: f64, lon: f64) -> Coordinate {
    Coordinate::new(lat, lon).unwrap()
}

async fn session_with_store() -> (Arc<MemoryZoneStore>, EditSession<MemoryZoneStore>) {
    let store = Arc::new(MemoryZoneStore::new());
    let session = EditSession::load(Arc::clone(&store), ShopId::from("shop-1"))
        .await
        .unwrap();
    (store, session)
}

fn draw_square<S: zonekit_storage::ZoneStore>(session: &mut EditSession<S>, origin: f64, size: f64) {
    session.begin_polygon().unwrap();
    session.add_vertex(coord(origin, origin)).unwrap();
    session.add_vertex(coord(origin, origin + size)).unwrap();
    session
        .add_vertex(coord(origin + size, origin + size))
        .unwrap();
    session.add_vertex(coord(origin + size, origin)).unwrap();
}

#[tokio::test]
async fn test_draw_commit_save_round_trip() {
    let (_store, mut session) = session_with_store().await;
    assert!(!session.has_pending_changes());

    draw_square(&mut session, 0.0, 10.0);
    let area = session.complete_polygon().unwrap();
    assert_eq!(area.label(), "Zone 1");
    assert!(area.is_unsaved());
    assert!(session.has_pending_changes());

    session.save().await.unwrap();
    assert!(!session.has_pending_changes());

    // The canonical set replaced the local one: the zone now carries a
    // server-assigned id.
    let areas = session.collection().areas();
    assert_eq!(areas.len(), 1);
    assert!(areas[0].id().is_some());

    // And the matcher finds it.
    let matches = session.find_containing_zones(coord(5.0, 5.0));
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].label(), "Zone 1");
    assert!(session.find_containing_zones(coord(50.0, 50.0)).is_empty());
}

#[tokio::test]
async fn test_removal_is_durable_only_after_save() {
    let (store, mut session) = session_with_store().await;
    draw_square(&mut session, 0.0, 10.0);
    session.complete_polygon().unwrap();
    draw_square(&mut session, 20.0, 10.0);
    session.complete_polygon().unwrap();
    session.save().await.unwrap();
    assert_eq!(store.zone_count(&ShopId::from("shop-1")), 2);

    let removed = session.remove_area(1).unwrap();
    assert_eq!(removed.label(), "Zone 2");
    assert!(session.has_pending_changes());
    // Still persisted until the save lands.
    assert_eq!(store.zone_count(&ShopId::from("shop-1")), 2);

    session.save().await.unwrap();
    assert!(!session.has_pending_changes());
    assert_eq!(store.zone_count(&ShopId::from("shop-1")), 1);
}

#[tokio::test]
async fn test_failed_save_preserves_local_state_and_retries() {
    let (store, mut session) = session_with_store().await;
    draw_square(&mut session, 0.0, 10.0);
    session.complete_polygon().unwrap();

    store.fail_next_save();
    let result = session.save().await;
    assert!(matches!(
        result,
        Err(Error::Storage(StorageError::Transport { .. }))
    ));

    // Nothing was lost: the edit is still pending and the retry succeeds.
    assert!(session.has_pending_changes());
    assert_eq!(session.collection().len(), 1);
    session.save().await.unwrap();
    assert!(!session.has_pending_changes());
    assert_eq!(store.zone_count(&ShopId::from("shop-1")), 1);
}

#[tokio::test]
async fn test_save_without_changes_is_a_no_op() {
    let (store, mut session) = session_with_store().await;
    // A failure injection proves the store is never called.
    store.fail_next_save();
    session.save().await.unwrap();
}

#[tokio::test]
async fn test_overlapping_commit_is_rejected_against_saved_zones() {
    let (_store, mut session) = session_with_store().await;
    draw_square(&mut session, 0.0, 10.0);
    session.complete_polygon().unwrap();
    session.save().await.unwrap();

    // A square inside the saved zone must be rejected at commit.
    draw_square(&mut session, 4.0, 2.0);
    let result = session.complete_polygon();
    assert!(result.is_err());
    assert!(session.editor().is_drawing());
    assert_eq!(session.collection().len(), 1);
}

#[tokio::test]
async fn test_discard_reloads_persisted_state() {
    let (_store, mut session) = session_with_store().await;
    draw_square(&mut session, 0.0, 10.0);
    session.complete_polygon().unwrap();
    session.save().await.unwrap();

    // Local-only edits: one extra zone, one in-progress drawing.
    draw_square(&mut session, 20.0, 10.0);
    session.complete_polygon().unwrap();
    session.begin_polygon().unwrap();
    session.add_vertex(coord(50.0, 50.0)).unwrap();
    assert!(session.has_pending_changes());

    session.discard().await.unwrap();
    assert!(!session.has_pending_changes());
    assert!(!session.editor().is_drawing());
    assert_eq!(session.collection().len(), 1);
}

/// A store whose save never completes, for exercising the busy flag.
struct StalledStore;

#[async_trait::async_trait]
impl zonekit_storage::ZoneStore for StalledStore {
    async fn load_zones(
        &self,
        _shop: &ShopId,
    ) -> Result<Vec<zonekit_storage::ZoneRecord>, StorageError> {
        Ok(Vec::new())
    }

    async fn save_zones(
        &self,
        _shop: &ShopId,
        _zones: Vec<zonekit_storage::ZoneSubmission>,
    ) -> Result<Vec<zonekit_storage::ZoneRecord>, StorageError> {
        std::future::pending().await
    }
}

#[tokio::test]
async fn test_second_save_rejected_while_one_is_in_flight() {
    let mut session = EditSession::load(Arc::new(StalledStore), ShopId::from("shop-1"))
        .await
        .unwrap();
    draw_square(&mut session, 0.0, 10.0);
    session.complete_polygon().unwrap();

    // Drive the first save up to its await point, then abandon it.
    {
        let mut first = Box::pin(session.save());
        let poll = tokio::time::timeout(std::time::Duration::from_millis(10), &mut first).await;
        assert!(poll.is_err(), "stalled save should not complete");
    }

    let second = session.save().await;
    assert!(matches!(
        second,
        Err(Error::Editor(zonekit_core::EditorError::SaveInFlight))
    ));

    // Discarding the session clears the stuck flag.
    session.discard().await.unwrap();
    assert!(!session.has_pending_changes());
    session.save().await.unwrap();
}

#[tokio::test]
async fn test_reload_session_sees_saved_zones() {
    let (store, mut session) = session_with_store().await;
    draw_square(&mut session, 0.0, 10.0);
    session.complete_polygon().unwrap();
    session.save().await.unwrap();
    drop(session);

    let reopened = EditSession::load(store, ShopId::from("shop-1"))
        .await
        .unwrap();
    assert_eq!(reopened.collection().len(), 1);
    assert!(!reopened.has_pending_changes());
    assert_eq!(
        reopened.find_containing_zones(coord(5.0, 5.0)).len(),
        1
    );
}
