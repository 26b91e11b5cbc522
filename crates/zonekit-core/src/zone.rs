//! Delivery-zone identity and metadata.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::coordinate::Coordinate;
use crate::polygon::Polygon;

/// Server-assigned identifier of a persisted zone. Opaque to the client.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ZoneId(pub String);

impl fmt::Display for ZoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ZoneId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Identifier of the shop that owns a set of zones.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShopId(pub String);

impl fmt::Display for ShopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ShopId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// A merchant-drawn delivery zone, tagged by persistence state.
///
/// A zone starts life `Unsaved` when the merchant completes a drawing and
/// becomes `Saved` once the backend returns it with an identifier. Modeling
/// the identifier as a variant rather than an `Option` field lets save and
/// diff logic branch exhaustively while geometry consumers go through the
/// uniform accessors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DeliveryArea {
    /// Committed locally, never persisted; has no identifier yet.
    Unsaved { label: String, polygon: Polygon },
    /// Known to the backend under `id`.
    Saved {
        id: ZoneId,
        label: String,
        polygon: Polygon,
    },
}

impl DeliveryArea {
    /// Creates a zone that has not been persisted yet.
    pub fn unsaved(label: impl Into<String>, polygon: Polygon) -> Self {
        Self::Unsaved {
            label: label.into(),
            polygon,
        }
    }

    /// Creates a zone backed by a server-assigned identifier.
    pub fn saved(id: ZoneId, label: impl Into<String>, polygon: Polygon) -> Self {
        Self::Saved {
            id,
            label: label.into(),
            polygon,
        }
    }

    /// The server identifier, if this zone has been persisted.
    pub fn id(&self) -> Option<&ZoneId> {
        match self {
            Self::Unsaved { .. } => None,
            Self::Saved { id, .. } => Some(id),
        }
    }

    /// The human-readable label.
    pub fn label(&self) -> &str {
        match self {
            Self::Unsaved { label, .. } | Self::Saved { label, .. } => label,
        }
    }

    /// The zone's ring.
    pub fn polygon(&self) -> &Polygon {
        match self {
            Self::Unsaved { polygon, .. } | Self::Saved { polygon, .. } => polygon,
        }
    }

    /// True if the backend has never seen this zone.
    pub fn is_unsaved(&self) -> bool {
        matches!(self, Self::Unsaved { .. })
    }

    /// Replaces the label, keeping identity and geometry.
    pub fn set_label(&mut self, new_label: impl Into<String>) {
        match self {
            Self::Unsaved { label, .. } | Self::Saved { label, .. } => *label = new_label.into(),
        }
    }

    /// Replaces the ring wholesale. Edits redraw the full shape; there is no
    /// per-vertex mutation after creation.
    pub fn set_polygon(&mut self, new_polygon: Polygon) {
        match self {
            Self::Unsaved { polygon, .. } | Self::Saved { polygon, .. } => {
                *polygon = new_polygon
            }
        }
    }

    /// The ring's vertices, for rendering and serialization.
    pub fn vertices(&self) -> &[Coordinate] {
        self.polygon().vertices()
    }
}
