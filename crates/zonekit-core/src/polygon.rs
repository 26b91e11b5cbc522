//! Closed polygon rings.

use serde::{Deserialize, Serialize};

use crate::constants::MIN_POLYGON_VERTICES;
use crate::coordinate::Coordinate;
use crate::error::GeometryError;
use crate::kernel::segments_intersect;

/// An ordered ring of vertices, closed implicitly (the last vertex connects
/// back to the first).
///
/// Construction enforces the ring invariants: at least 3 vertices, and no
/// two consecutive vertices (including the closing pair) equal at the
/// 6-decimal precision floor. Simplicity (no self-crossing edges) is a
/// separate check, run by the editor at commit time via [`Polygon::is_simple`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    vertices: Vec<Coordinate>,
}

impl Polygon {
    /// Creates a validated ring from an ordered vertex sequence.
    pub fn new(vertices: Vec<Coordinate>) -> Result<Self, GeometryError> {
        if vertices.len() < MIN_POLYGON_VERTICES {
            return Err(GeometryError::TooFewVertices {
                count: vertices.len(),
            });
        }
        for i in 0..vertices.len() {
            let next = (i + 1) % vertices.len();
            if vertices[i].approx_eq(&vertices[next]) {
                return Err(GeometryError::DuplicateConsecutiveVertex { index: next });
            }
        }
        Ok(Self { vertices })
    }

    /// Builds a ring from raw tap input, collapsing consecutive duplicate
    /// taps (at the precision floor) instead of rejecting them.
    ///
    /// Double-taps on a map are routine, so the editor forgives them here
    /// rather than surfacing a validation error mid-drawing.
    pub fn from_taps(taps: &[Coordinate]) -> Result<Self, GeometryError> {
        let mut vertices: Vec<Coordinate> = Vec::with_capacity(taps.len());
        for &tap in taps {
            if vertices.last().is_some_and(|last| last.approx_eq(&tap)) {
                continue;
            }
            vertices.push(tap);
        }
        // The closing edge can also degenerate if the merchant re-tapped the
        // starting point to finish the shape.
        while vertices.len() > 1
            && vertices[0].approx_eq(&vertices[vertices.len() - 1])
        {
            vertices.pop();
        }
        Self::new(vertices)
    }

    /// The ring's vertices in drawing order.
    pub fn vertices(&self) -> &[Coordinate] {
        &self.vertices
    }

    /// Number of vertices in the ring.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Iterates the ring's edges in order, including the implicit closing
    /// edge from the last vertex back to the first.
    pub fn edges(&self) -> impl Iterator<Item = (Coordinate, Coordinate)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| (self.vertices[i], self.vertices[(i + 1) % n]))
    }

    /// Returns this ring with every vertex rounded to the precision floor.
    pub fn rounded(&self) -> Polygon {
        Polygon {
            vertices: self.vertices.iter().map(Coordinate::rounded).collect(),
        }
    }

    /// True if no two non-adjacent edges of the ring intersect.
    ///
    /// Adjacent edges always share an endpoint, so only edge pairs that are
    /// neither neighbors nor the first/last wrap pair are tested.
    pub fn is_simple(&self) -> bool {
        let edges: Vec<(Coordinate, Coordinate)> = self.edges().collect();
        let n = edges.len();
        for i in 0..n {
            for j in (i + 1)..n {
                if j == i + 1 || (i == 0 && j == n - 1) {
                    continue;
                }
                let (a1, a2) = edges[i];
                let (b1, b2) = edges[j];
                if segments_intersect(a1, a2, b1, b2) {
                    return false;
                }
            }
        }
        true
    }
}
