//! The zone drawing state machine.
//!
//! Tracks the vertex sequence of one polygon under construction and enforces
//! the commit preconditions: enough vertices, a simple ring, and no overlap
//! with any zone already in the collection. Failed commits keep the machine
//! in `Drawing` with its vertices intact so the merchant can adjust.

use zonekit_core::{polygons_overlap, Coordinate, DeliveryArea, EditorError, Polygon};

use crate::collection::ZoneCollection;

/// State of the drawing machine. At most one ring is under construction per
/// editing session; persisted zones are unaffected and serve as the overlap
/// baseline at commit time.
#[derive(Debug, Clone, PartialEq)]
pub enum EditorState {
    /// No active polygon.
    Idle,
    /// Accumulating vertices for a new ring.
    Drawing { vertices: Vec<Coordinate> },
}

/// The zone editor state machine.
#[derive(Debug, Clone, Default)]
pub struct ZoneEditor {
    state: EditorState,
}

impl Default for EditorState {
    fn default() -> Self {
        Self::Idle
    }
}

impl ZoneEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn is_drawing(&self) -> bool {
        matches!(self.state, EditorState::Drawing { .. })
    }

    /// The in-progress vertices, for rendering. Empty while idle.
    pub fn vertices(&self) -> &[Coordinate] {
        match &self.state {
            EditorState::Idle => &[],
            EditorState::Drawing { vertices } => vertices,
        }
    }

    /// Starts a new polygon. Fails if one is already being drawn.
    pub fn begin(&mut self) -> Result<(), EditorError> {
        match self.state {
            EditorState::Idle => {
                self.state = EditorState::Drawing {
                    vertices: Vec::new(),
                };
                Ok(())
            }
            EditorState::Drawing { .. } => Err(EditorError::AlreadyDrawing),
        }
    }

    /// Appends a tapped coordinate and returns the new vertex count.
    ///
    /// Duplicate consecutive taps are accepted as-is here; they are collapsed
    /// when the ring is built at commit time.
    pub fn add_vertex(&mut self, coordinate: Coordinate) -> Result<usize, EditorError> {
        match &mut self.state {
            EditorState::Idle => Err(EditorError::NotDrawing),
            EditorState::Drawing { vertices } => {
                vertices.push(coordinate);
                Ok(vertices.len())
            }
        }
    }

    /// Pops the last vertex without leaving `Drawing`. Returns `None` while
    /// idle or when nothing is left to undo.
    pub fn undo_vertex(&mut self) -> Option<Coordinate> {
        match &mut self.state {
            EditorState::Idle => None,
            EditorState::Drawing { vertices } => vertices.pop(),
        }
    }

    /// Abandons the drawing and returns to idle, handing back the discarded
    /// vertices. A no-op (empty result) while idle.
    pub fn cancel(&mut self) -> Vec<Coordinate> {
        match std::mem::take(&mut self.state) {
            EditorState::Idle => Vec::new(),
            EditorState::Drawing { vertices } => {
                tracing::debug!(discarded = vertices.len(), "drawing cancelled");
                vertices
            }
        }
    }

    /// Completes the polygon: validates the ring, checks it against every
    /// zone in the collection, and on success appends a new unsaved area
    /// with an auto-generated sequential label, returning to idle.
    ///
    /// On failure the machine stays in `Drawing` and the collection is
    /// untouched.
    pub fn commit(
        &mut self,
        collection: &mut ZoneCollection,
    ) -> Result<DeliveryArea, EditorError> {
        let vertices = match &self.state {
            EditorState::Idle => return Err(EditorError::NotDrawing),
            EditorState::Drawing { vertices } => vertices,
        };

        if vertices.len() < 3 {
            return Err(EditorError::InsufficientVertices {
                count: vertices.len(),
            });
        }

        let polygon = Polygon::from_taps(vertices)?;
        if !polygon.is_simple() {
            return Err(EditorError::SelfIntersecting);
        }
        for existing in collection.areas() {
            if polygons_overlap(existing.polygon(), &polygon) {
                tracing::debug!(
                    conflicting = existing.label(),
                    "commit rejected: candidate overlaps existing zone"
                );
                return Err(EditorError::ZoneOverlap {
                    conflicting_label: existing.label().to_string(),
                });
            }
        }

        let label = format!("Zone {}", collection.len() + 1);
        let area = DeliveryArea::unsaved(label, polygon);
        collection.push(area.clone());
        self.state = EditorState::Idle;
        tracing::debug!(label = area.label(), "zone committed");
        Ok(area)
    }
}
