//! Zone matching: which zones contain a given coordinate.

use zonekit_core::{point_in_polygon, Coordinate, DeliveryArea, PointLocation};

use crate::collection::ZoneCollection;

/// How a point sitting exactly on a zone edge is treated.
///
/// The default is `Include`: a customer pin on a drawn edge should not be
/// rejected as out of area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoundaryPolicy {
    #[default]
    Include,
    Exclude,
}

/// Returns every zone in the collection that contains the point.
///
/// Saved collections are guaranteed non-overlapping, so in steady state this
/// yields at most one zone; the matcher still returns the full set because
/// never-yet-saved or externally authored data may violate that invariant.
pub fn find_containing_zones(
    collection: &ZoneCollection,
    point: Coordinate,
    policy: BoundaryPolicy,
) -> Vec<&DeliveryArea> {
    collection
        .areas()
        .iter()
        .filter(|area| match point_in_polygon(point, area.polygon()) {
            PointLocation::Inside => true,
            PointLocation::OnBoundary => policy == BoundaryPolicy::Include,
            PointLocation::Outside => false,
        })
        .collect()
}
