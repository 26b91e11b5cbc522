//! # ZoneKit Core
//!
//! Geometry kernel and data model for delivery-zone management.
//! Provides coordinate/polygon types with their validation invariants, the
//! pure intersection/membership/overlap tests, and the error taxonomy shared
//! by the editor and storage layers.

pub mod constants;
pub mod coordinate;
pub mod error;
pub mod kernel;
pub mod polygon;
pub mod zone;

pub use coordinate::{round_component, Coordinate};
pub use error::{EditorError, Error, GeometryError, Result, StorageError};
pub use kernel::{
    orientation, point_in_polygon, polygons_overlap, segments_intersect, Orientation,
    PointLocation,
};
pub use polygon::Polygon;
pub use zone::{DeliveryArea, ShopId, ZoneId};
