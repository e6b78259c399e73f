use crate::coord::{Coordinate, clip_latitude, normalize_longitude};
use crate::index::constants::{
    GRID_LAT_PRECISION_INVERSE, GRID_LAT_SCALE, GRID_LON_PRECISION_INVERSE, GRID_LON_SCALE,
};

/// A location in full-grid-precision integer units, shifted to be non-negative.
///
/// `0 <= lat < 2 * GRID_LAT_SCALE` and `0 <= lon < 2 * GRID_LON_SCALE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct LatLonIntegers {
    pub lat: i64,
    pub lon: i64,
}

/// Projects degrees onto the integer grid used for digit packing.
///
/// Degrees are floored at the finest grid precision, so a point always lands in
/// the cell whose south-west corner is at or below it. Latitude is clamped to
/// the valid range and longitude wraps around the antimeridian.
pub(crate) fn location_to_integers(coord: &impl Coordinate) -> LatLonIntegers {
    let lat = clip_latitude(coord.lat());
    let lat = (lat * GRID_LAT_PRECISION_INVERSE as f64).floor() as i64 + GRID_LAT_SCALE;
    let lat = lat.clamp(0, 2 * GRID_LAT_SCALE - 1);

    let lon = normalize_longitude(coord.lon());
    let lon = (lon * GRID_LON_PRECISION_INVERSE as f64).floor() as i64 + GRID_LON_SCALE;
    let lon = lon.rem_euclid(2 * GRID_LON_SCALE);

    LatLonIntegers { lat, lon }
}
