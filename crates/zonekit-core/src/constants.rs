//! Shared constants for the geometry kernel and data model.

/// Number of decimal places kept when rounding coordinate components.
///
/// Six decimals is roughly 0.11 m of resolution at the equator, which is the
/// precision floor for all coordinate comparison and persistence.
pub const COORD_DECIMALS: u32 = 6;

/// Multiplier corresponding to [`COORD_DECIMALS`].
pub const COORD_SCALE: f64 = 1e6;

/// Minimum number of vertices for a closed delivery-zone ring.
pub const MIN_POLYGON_VERTICES: usize = 3;

/// Valid latitude range, degrees.
pub const LATITUDE_RANGE: (f64, f64) = (-90.0, 90.0);

/// Valid longitude range, degrees.
pub const LONGITUDE_RANGE: (f64, f64) = (-180.0, 180.0);

/// Tolerance used when classifying an orientation cross product as zero.
pub const ORIENTATION_EPSILON: f64 = 1e-12;
