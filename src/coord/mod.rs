mod geodesic;

pub use geodesic::{GeodesicInverse, calculate_destination, calculate_inverse};

use geo_types::{Coord, Point};

/// Maximum absolute latitude in degrees.
pub const LATITUDE_MAX: f64 = 90.0;
/// Maximum absolute longitude in degrees.
pub const LONGITUDE_MAX: f64 = 180.0;

/// Trait for types that can provide WGS-84 degrees.
///
/// Implemented for `(f64, f64)` tuples in `(lon, lat)` order, `geo_types::Point<f64>`
/// and `geo_types::Coord<f64>`. This follows the `geo` convention of x = longitude,
/// y = latitude, so functions accept any of these types.
pub trait Coordinate {
    /// Returns the x-coordinate (longitude).
    fn x(&self) -> f64;
    /// Returns the y-coordinate (latitude).
    fn y(&self) -> f64;

    /// Longitude in degrees.
    fn lon(&self) -> f64 {
        self.x()
    }

    /// Latitude in degrees.
    fn lat(&self) -> f64 {
        self.y()
    }
}

impl Coordinate for (f64, f64) {
    fn x(&self) -> f64 {
        self.0
    }
    fn y(&self) -> f64 {
        self.1
    }
}

impl Coordinate for Point<f64> {
    fn x(&self) -> f64 {
        Point::x(*self)
    }
    fn y(&self) -> f64 {
        Point::y(*self)
    }
}

impl Coordinate for Coord<f64> {
    fn x(&self) -> f64 {
        self.x
    }
    fn y(&self) -> f64 {
        self.y
    }
}

/// Clamps a latitude into `[-90, 90]`.
pub fn clip_latitude(lat: f64) -> f64 {
    lat.clamp(-LATITUDE_MAX, LATITUDE_MAX)
}

/// Wraps a longitude into `[-180, 180)`.
pub fn normalize_longitude(lon: f64) -> f64 {
    if (-LONGITUDE_MAX..LONGITUDE_MAX).contains(&lon) {
        return lon;
    }
    let wrapped = (lon + LONGITUDE_MAX).rem_euclid(2.0 * LONGITUDE_MAX) - LONGITUDE_MAX;
    // rem_euclid can round up to the modulus for tiny negative inputs
    if wrapped >= LONGITUDE_MAX {
        wrapped - 2.0 * LONGITUDE_MAX
    } else {
        wrapped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_trait_tuple() {
        let tuple = (2.775, 20.375);
        assert_eq!(tuple.lon(), 2.775);
        assert_eq!(tuple.lat(), 20.375);
    }

    #[test]
    fn test_coordinate_trait_point() {
        let point = Point::new(2.775, 20.375);
        assert_eq!(Coordinate::lon(&point), 2.775);
        assert_eq!(Coordinate::lat(&point), 20.375);
    }

    #[test]
    fn test_coordinate_trait_coord() {
        let coord = Coord { x: -0.1, y: 51.5 };
        assert_eq!(coord.lon(), -0.1);
        assert_eq!(coord.lat(), 51.5);
    }

    #[test]
    fn test_clip_latitude() {
        assert_eq!(clip_latitude(95.0), 90.0);
        assert_eq!(clip_latitude(-120.0), -90.0);
        assert_eq!(clip_latitude(45.5), 45.5);
    }

    #[test]
    fn test_normalize_longitude() {
        assert_eq!(normalize_longitude(0.0), 0.0);
        assert_eq!(normalize_longitude(180.0), -180.0);
        assert_eq!(normalize_longitude(-180.0), -180.0);
        assert_eq!(normalize_longitude(190.0), -170.0);
        assert_eq!(normalize_longitude(-190.0), 170.0);
        assert_eq!(normalize_longitude(540.0), -180.0);
        assert_eq!(normalize_longitude(-370.0), -10.0);
    }
}
