use crate::coord::{
    Coordinate, LATITUDE_MAX, calculate_inverse, clip_latitude, normalize_longitude,
};
use crate::index::{
    MAX_DIGIT_COUNT, compute_latitude_precision, compute_longitude_precision,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Lengths a code can take, shortest first.
const CANDIDATE_LENGTHS: [usize; 10] = [2, 4, 6, 8, 10, 11, 12, 13, 14, 15];

/// Meters per degree used when the geodesic solver gives up.
const METERS_PER_DEGREE: f64 = 111_320.0;

/// Named physical precision tiers.
///
/// Each tier maps to the largest cell edge, in meters, that satisfies it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Precision {
    HundredsOfMeters,
    TensOfMeters,
    Meters,
    Decimeters,
    Centimeters,
    Millimeters,
}

impl Precision {
    /// Target cell size in meters.
    pub fn target_meters(self) -> f64 {
        match self {
            Precision::HundredsOfMeters => 500.0,
            Precision::TensOfMeters => 50.0,
            Precision::Meters => 5.0,
            Precision::Decimeters => 0.5,
            Precision::Centimeters => 0.05,
            Precision::Millimeters => 0.005,
        }
    }
}

/// Shortest code length whose cell at `coord` has no edge longer than
/// `target_meters`.
///
/// Edges are measured on the ellipsoid. Returns the maximum length (15) when even
/// the finest cell is too large.
///
/// # Example
/// ```
/// use olc_rs::optimal_code_length;
///
/// // a 10 digit cell on the equator is about 13.9 m across
/// assert_eq!(optimal_code_length(&(0.0, 0.0), 14.0), 10);
/// assert_eq!(optimal_code_length(&(0.0, 0.0), 13.0), 11);
/// ```
pub fn optimal_code_length(coord: &impl Coordinate, target_meters: f64) -> usize {
    let lat = clip_latitude(coord.lat());
    let lon = normalize_longitude(coord.lon());

    CANDIDATE_LENGTHS
        .into_iter()
        .find(|&code_length| {
            let (width, height) = cell_edges_meters(lon, lat, code_length);
            width.max(height) <= target_meters
        })
        .unwrap_or(MAX_DIGIT_COUNT)
}

/// [`optimal_code_length`] for a named precision tier.
///
/// # Example
/// ```
/// use olc_rs::{Precision, optimal_code_length_for};
///
/// assert_eq!(optimal_code_length_for(&(0.0, 0.0), Precision::Meters), 11);
/// ```
pub fn optimal_code_length_for(coord: &impl Coordinate, precision: Precision) -> usize {
    optimal_code_length(coord, precision.target_meters())
}

/// North and east edge lengths of the cell of `code_length` starting at the point.
fn cell_edges_meters(lon: f64, lat: f64, code_length: usize) -> (f64, f64) {
    let height = compute_latitude_precision(code_length);
    let width = compute_longitude_precision(code_length);

    let south = lat.min(LATITUDE_MAX - height);
    let north = south + height;
    let east = lon + width;

    let north_edge = calculate_inverse(&(lon, north), &(east, north));
    let east_edge = calculate_inverse(&(east, south), &(east, north));
    match (north_edge, east_edge) {
        (Ok(north_edge), Ok(east_edge)) => (north_edge.distance, east_edge.distance),
        _ => {
            debug!(lon, lat, code_length, "falling back to flat-earth cell size");
            flat_earth_edges(lat, code_length)
        }
    }
}

fn flat_earth_edges(lat: f64, code_length: usize) -> (f64, f64) {
    let width = compute_longitude_precision(code_length) * METERS_PER_DEGREE * lat.to_radians().cos();
    let height = compute_latitude_precision(code_length) * METERS_PER_DEGREE;
    (width, height)
}
