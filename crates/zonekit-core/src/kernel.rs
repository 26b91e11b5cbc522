//! Pure geometry kernel: segment intersection, point-in-polygon membership
//! and polygon overlap.
//!
//! Every function here is stateless and reentrant; nothing allocates beyond
//! its return value and nothing touches I/O. Vertex counts are small (drawn
//! zones have a handful of points), so all tests are straight O(n) or O(n*m)
//! scans over the edges.

use crate::constants::ORIENTATION_EPSILON;
use crate::coordinate::Coordinate;
use crate::polygon::Polygon;

/// Relative orientation of an ordered point triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Clockwise,
    CounterClockwise,
    Collinear,
}

/// Where a point sits relative to a polygon.
///
/// `OnBoundary` is reported explicitly rather than folded into either side,
/// so that matching consumers can choose their own boundary policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointLocation {
    Inside,
    OnBoundary,
    Outside,
}

/// Classifies the turn made by a → b → c via the cross product sign.
pub fn orientation(a: Coordinate, b: Coordinate, c: Coordinate) -> Orientation {
    let cross = (b.lon - a.lon) * (c.lat - a.lat) - (b.lat - a.lat) * (c.lon - a.lon);
    if cross.abs() <= ORIENTATION_EPSILON {
        Orientation::Collinear
    } else if cross > 0.0 {
        Orientation::CounterClockwise
    } else {
        Orientation::Clockwise
    }
}

/// True if `p` lies on the closed segment a–b, assuming the three points are
/// already known to be collinear.
fn on_segment(a: Coordinate, b: Coordinate, p: Coordinate) -> bool {
    p.lon >= a.lon.min(b.lon)
        && p.lon <= a.lon.max(b.lon)
        && p.lat >= a.lat.min(b.lat)
        && p.lat <= a.lat.max(b.lat)
}

/// Returns true if the closed segments a1–a2 and b1–b2 share any point,
/// including touching at endpoints or overlapping collinearly.
///
/// The general case uses orientation tests; the collinear fallback handles
/// the degenerate overlap that a pure orientation test misses.
pub fn segments_intersect(
    a1: Coordinate,
    a2: Coordinate,
    b1: Coordinate,
    b2: Coordinate,
) -> bool {
    let o1 = orientation(a1, a2, b1);
    let o2 = orientation(a1, a2, b2);
    let o3 = orientation(b1, b2, a1);
    let o4 = orientation(b1, b2, a2);

    if o1 != o2 && o3 != o4 {
        return true;
    }

    // Collinear cases: one endpoint sits on the other segment.
    (o1 == Orientation::Collinear && on_segment(a1, a2, b1))
        || (o2 == Orientation::Collinear && on_segment(a1, a2, b2))
        || (o3 == Orientation::Collinear && on_segment(b1, b2, a1))
        || (o4 == Orientation::Collinear && on_segment(b1, b2, a2))
}

/// Ray-casting membership test over the polygon's edges, including the
/// implicit closing edge.
///
/// A point exactly on an edge is reported as [`PointLocation::OnBoundary`].
pub fn point_in_polygon(point: Coordinate, polygon: &Polygon) -> PointLocation {
    // Boundary pass first, so the crossing count never has to disambiguate
    // a point that sits exactly on an edge.
    for (a, b) in polygon.edges() {
        if orientation(a, b, point) == Orientation::Collinear && on_segment(a, b, point) {
            return PointLocation::OnBoundary;
        }
    }

    let mut inside = false;
    for (a, b) in polygon.edges() {
        let crosses = (a.lat > point.lat) != (b.lat > point.lat);
        if crosses {
            let x = (b.lon - a.lon) * (point.lat - a.lat) / (b.lat - a.lat) + a.lon;
            if point.lon < x {
                inside = !inside;
            }
        }
    }

    if inside {
        PointLocation::Inside
    } else {
        PointLocation::Outside
    }
}

/// Returns true if the two polygons share any area, treating rings that
/// merely touch at a point or along an edge as overlapping.
///
/// Checks run cheapest-first and short-circuit:
/// 1. any edge of `p` intersects any edge of `q`;
/// 2. any vertex of one ring lies strictly inside the other (full
///    containment, where edges never cross).
pub fn polygons_overlap(p: &Polygon, q: &Polygon) -> bool {
    for (a1, a2) in p.edges() {
        for (b1, b2) in q.edges() {
            if segments_intersect(a1, a2, b1, b2) {
                return true;
            }
        }
    }

    if p.vertices()
        .iter()
        .any(|&v| point_in_polygon(v, q) == PointLocation::Inside)
    {
        return true;
    }
    q.vertices()
        .iter()
        .any(|&v| point_in_polygon(v, p) == PointLocation::Inside)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coord(lat: f64, lon: f64) -> Coordinate {
        Coordinate::new(lat, lon).unwrap()
    }

    fn square(origin_lat: f64, origin_lon: f64, size: f64) -> Polygon {
        Polygon::new(vec![
            coord(origin_lat, origin_lon),
            coord(origin_lat, origin_lon + size),
            coord(origin_lat + size, origin_lon + size),
            coord(origin_lat + size, origin_lon),
        ])
        .unwrap()
    }

    #[test]
    fn test_segments_crossing() {
        assert!(segments_intersect(
            coord(0.0, 0.0),
            coord(10.0, 10.0),
            coord(0.0, 10.0),
            coord(10.0, 0.0),
        ));
    }

    #[test]
    fn test_segments_disjoint() {
        assert!(!segments_intersect(
            coord(0.0, 0.0),
            coord(0.0, 5.0),
            coord(1.0, 0.0),
            coord(1.0, 5.0),
        ));
    }

    #[test]
    fn test_segments_touch_at_endpoint() {
        assert!(segments_intersect(
            coord(0.0, 0.0),
            coord(5.0, 5.0),
            coord(5.0, 5.0),
            coord(10.0, 0.0),
        ));
    }

    #[test]
    fn test_segments_collinear_overlap() {
        // Orientation tests alone report no crossing here.
        assert!(segments_intersect(
            coord(0.0, 0.0),
            coord(0.0, 10.0),
            coord(0.0, 5.0),
            coord(0.0, 15.0),
        ));
    }

    #[test]
    fn test_segments_collinear_disjoint() {
        assert!(!segments_intersect(
            coord(0.0, 0.0),
            coord(0.0, 4.0),
            coord(0.0, 5.0),
            coord(0.0, 9.0),
        ));
    }

    #[test]
    fn test_point_in_square() {
        let sq = square(0.0, 0.0, 10.0);
        assert_eq!(
            point_in_polygon(coord(5.0, 5.0), &sq),
            PointLocation::Inside
        );
        assert_eq!(
            point_in_polygon(coord(15.0, 5.0), &sq),
            PointLocation::Outside
        );
        assert_eq!(
            point_in_polygon(coord(0.0, 5.0), &sq),
            PointLocation::OnBoundary
        );
    }

    #[test]
    fn test_point_on_vertex() {
        let sq = square(0.0, 0.0, 10.0);
        assert_eq!(
            point_in_polygon(coord(10.0, 10.0), &sq),
            PointLocation::OnBoundary
        );
    }

    #[test]
    fn test_point_in_concave_polygon() {
        // L-shape: the notch at the top right is outside.
        let l_shape = Polygon::new(vec![
            coord(0.0, 0.0),
            coord(0.0, 10.0),
            coord(5.0, 10.0),
            coord(5.0, 5.0),
            coord(10.0, 5.0),
            coord(10.0, 0.0),
        ])
        .unwrap();
        assert_eq!(
            point_in_polygon(coord(2.0, 2.0), &l_shape),
            PointLocation::Inside
        );
        assert_eq!(
            point_in_polygon(coord(8.0, 8.0), &l_shape),
            PointLocation::Outside
        );
    }

    #[test]
    fn test_disjoint_squares_do_not_overlap() {
        let a = square(0.0, 0.0, 10.0);
        let b = square(20.0, 20.0, 10.0);
        assert!(!polygons_overlap(&a, &b));
        assert!(!polygons_overlap(&b, &a));
    }

    #[test]
    fn test_crossing_squares_overlap() {
        let a = square(0.0, 0.0, 10.0);
        let b = square(5.0, 5.0, 10.0);
        assert!(polygons_overlap(&a, &b));
        assert!(polygons_overlap(&b, &a));
    }

    #[test]
    fn test_containment_counts_as_overlap() {
        let outer = square(0.0, 0.0, 10.0);
        let inner = square(4.0, 4.0, 2.0);
        assert!(polygons_overlap(&outer, &inner));
        assert!(polygons_overlap(&inner, &outer));
    }

    #[test]
    fn test_touching_squares_count_as_overlap() {
        // Share the edge lon=10 only; conservative predicate says overlap.
        let a = square(0.0, 0.0, 10.0);
        let b = square(0.0, 10.0, 10.0);
        assert!(polygons_overlap(&a, &b));
    }
}
