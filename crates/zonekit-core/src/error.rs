//! Error handling for ZoneKit
//!
//! Provides error types for all layers of the engine:
//! - Geometry errors (coordinate/polygon validation)
//! - Editor errors (drawing state machine, commit preconditions)
//! - Storage errors (save/load round-trips)
//!
//! All error types use `thiserror`. Every error is locally recoverable: a
//! rejected commit leaves the drawing in place and a failed save leaves the
//! local collection and snapshot untouched.

use thiserror::Error;

/// Geometry validation error type
///
/// Represents violations of the coordinate and polygon invariants. These are
/// raised at construction time so that a [`crate::Polygon`] in hand is always
/// a valid closed ring.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// A coordinate component was NaN or infinite
    #[error("Coordinate component is not finite")]
    NonFiniteCoordinate,

    /// Latitude outside [-90, 90]
    #[error("Latitude {lat} out of range [-90, 90]")]
    LatitudeOutOfRange {
        /// The offending latitude, degrees.
        lat: f64,
    },

    /// Longitude outside [-180, 180]
    #[error("Longitude {lon} out of range [-180, 180]")]
    LongitudeOutOfRange {
        /// The offending longitude, degrees.
        lon: f64,
    },

    /// Fewer vertices than a closed ring requires
    #[error("Polygon needs at least 3 vertices, got {count}")]
    TooFewVertices {
        /// The number of vertices supplied.
        count: usize,
    },

    /// Two consecutive vertices (including the closing edge) coincide
    #[error("Duplicate consecutive vertex at index {index}")]
    DuplicateConsecutiveVertex {
        /// Index of the vertex that repeats its predecessor.
        index: usize,
    },
}

/// Editor error type
///
/// Represents failures of the zone editor state machine and of the commit
/// preconditions. None of these lose the in-progress drawing; the machine
/// stays in `Drawing` so the merchant can adjust.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EditorError {
    /// An operation that needs an active drawing was called while idle
    #[error("No polygon is being drawn")]
    NotDrawing,

    /// A new drawing was started while one is already active
    #[error("A polygon is already being drawn")]
    AlreadyDrawing,

    /// Commit attempted with fewer than 3 vertices
    #[error("Cannot close polygon with {count} vertices (need at least 3)")]
    InsufficientVertices {
        /// The number of vertices at commit time.
        count: usize,
    },

    /// The candidate polygon crosses itself
    #[error("Polygon edges cross themselves")]
    SelfIntersecting,

    /// The candidate polygon overlaps an existing zone
    #[error("Polygon overlaps existing zone '{conflicting_label}'")]
    ZoneOverlap {
        /// Label of the first zone the candidate conflicts with, for UI
        /// highlighting.
        conflicting_label: String,
    },

    /// An area index did not resolve to a zone in the collection
    #[error("No zone at index {index}")]
    NoSuchZone {
        /// The out-of-range index.
        index: usize,
    },

    /// A save was requested while one is already outstanding
    #[error("A save is already in flight")]
    SaveInFlight,

    /// The drawn ring failed polygon validation
    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

/// Storage error type
///
/// Represents failures of the storage collaborator. A failed save is always
/// safe to retry: the caller's local state is left unchanged.
#[derive(Error, Debug)]
pub enum StorageError {
    /// The shop identifier is unknown to the store
    #[error("Shop not found: {shop_id}")]
    ShopNotFound {
        /// The shop identifier that was not found.
        shop_id: String,
    },

    /// A submission referenced a zone id the store does not know
    #[error("Unknown zone id: {zone_id}")]
    UnknownZone {
        /// The unknown zone identifier.
        zone_id: String,
    },

    /// The store rejected the submitted zones
    #[error("Submission rejected: {reason}")]
    Rejected {
        /// The reason the submission was rejected.
        reason: String,
    },

    /// The call failed to reach the store
    #[error("Transport error: {reason}")]
    Transport {
        /// The reason the call failed.
        reason: String,
    },

    /// Wire (de)serialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Main error type for ZoneKit
///
/// A unified error type that can represent any error from all layers.
/// This is the primary error type used in public APIs.
#[derive(Error, Debug)]
pub enum Error {
    /// Geometry validation error
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    /// Editor error
    #[error(transparent)]
    Editor(#[from] EditorError),

    /// Storage error
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a storage error (user should retry the save)
    pub fn is_storage_error(&self) -> bool {
        matches!(self, Error::Storage(_))
    }

    /// Check if this is an overlap rejection
    pub fn is_overlap(&self) -> bool {
        matches!(self, Error::Editor(EditorError::ZoneOverlap { .. }))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
