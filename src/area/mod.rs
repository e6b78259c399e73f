mod measure;
mod neighbor;
mod precision;

pub use measure::{height_meters, offset, size_meters, width_meters};
pub use neighbor::{NeighborDirection, get_neighbor, get_neighbors};
pub use precision::{Precision, optimal_code_length, optimal_code_length_for};

use crate::coord::{LATITUDE_MAX, LONGITUDE_MAX};
use crate::error::OlcError;
use crate::index::decode;
use geo_types::{Point, Polygon, Rect, coord};
use serde::{Deserialize, Serialize};

/// The rectangle covered by a decoded Plus Code.
///
/// Corners are in WGS-84 degrees with x = longitude and y = latitude.
///
/// # Example
///
/// ```
/// use olc_rs::CodeArea;
///
/// # fn main() -> Result<(), olc_rs::OlcError> {
/// let area = CodeArea::from_code("7FG49Q00+")?;
/// assert_eq!(area.code_length, 6);
///
/// let center = area.center();
/// assert!((center.y() - 20.375).abs() < 1e-12);
/// assert!((center.x() - 2.775).abs() < 1e-12);
///
/// // Convert the cell to a polygon for GIS operations
/// let polygon = area.to_polygon();
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CodeArea {
    /// South-west corner
    pub lo: Point<f64>,
    /// North-east corner
    pub hi: Point<f64>,
    /// Number of significant digits in the code (2-15)
    pub code_length: usize,
}

impl CodeArea {
    pub(crate) fn new(lo: Point<f64>, hi: Point<f64>, code_length: usize) -> Self {
        Self {
            lo,
            hi,
            code_length,
        }
    }

    /// Decodes a full Plus Code. Same as [`crate::decode`].
    pub fn from_code(code: &str) -> Result<Self, OlcError> {
        decode(code)
    }

    /// Southern edge latitude.
    pub fn south(&self) -> f64 {
        self.lo.y()
    }

    /// Western edge longitude.
    pub fn west(&self) -> f64 {
        self.lo.x()
    }

    /// Northern edge latitude.
    pub fn north(&self) -> f64 {
        self.hi.y()
    }

    /// Eastern edge longitude.
    pub fn east(&self) -> f64 {
        self.hi.x()
    }

    /// Height of the area in degrees of latitude.
    pub fn height_degrees(&self) -> f64 {
        self.north() - self.south()
    }

    /// Width of the area in degrees of longitude.
    pub fn width_degrees(&self) -> f64 {
        self.east() - self.west()
    }

    /// Center of the area, kept inside the valid latitude and longitude ranges.
    pub fn center(&self) -> Point<f64> {
        let lat = ((self.south() + self.north()) / 2.0).min(LATITUDE_MAX);
        let lon = ((self.west() + self.east()) / 2.0).min(LONGITUDE_MAX);
        Point::new(lon, lat)
    }

    /// Returns `true` if the point lies inside the area (south/west edges inclusive).
    pub fn contains(&self, point: &Point<f64>) -> bool {
        (self.south()..self.north()).contains(&point.y())
            && (self.west()..self.east()).contains(&point.x())
    }

    /// Converts this area to a `geo_types::Rect`.
    pub fn to_rect(&self) -> Rect<f64> {
        Rect::new(
            coord! { x: self.west(), y: self.south() },
            coord! { x: self.east(), y: self.north() },
        )
    }

    /// Converts this area to a rectangular polygon, suitable for spatial
    /// operations or GeoJSON export.
    pub fn to_polygon(&self) -> Polygon<f64> {
        self.to_rect().to_polygon()
    }
}
