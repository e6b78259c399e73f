mod parse;

pub use parse::{parse_geojson, parse_geometry, parse_wkt};

use crate::coord::{clip_latitude, normalize_longitude};
use crate::index::{compute_latitude_precision, encode, normalize_code_length};
use geo::Centroid;
use geo_types::{Coord, Geometry, LineString};
use std::collections::HashSet;
use tracing::debug;

/// Collects the distinct codes a geometry maps to, in first-seen order.
struct CodeCollector {
    code_length: usize,
    seen: HashSet<String>,
    codes: Vec<String>,
}

impl CodeCollector {
    fn new(code_length: usize) -> Self {
        Self {
            code_length: normalize_code_length(code_length),
            seen: HashSet::new(),
            codes: Vec::new(),
        }
    }

    fn push(&mut self, coord: Coord<f64>) {
        let code = encode(&coord, self.code_length);
        if self.seen.insert(code.clone()) {
            self.codes.push(code);
        }
    }

    /// Walks each segment in steps of half a cell height so no crossed cell is skipped.
    ///
    /// Endpoints are clipped and wrapped first, and each segment takes the short
    /// way across the antimeridian.
    fn push_line(&mut self, line: &LineString<f64>) {
        let step = compute_latitude_precision(self.code_length) * 0.5;

        if let [only] = line.0.as_slice() {
            self.push(*only);
            return;
        }
        for window in line.0.windows(2) {
            let start = wrap(window[0]);
            let end = wrap(window[1]);
            let dx = normalize_longitude(end.x - start.x);
            let dy = end.y - start.y;
            let steps = segment_steps((dx * dx + dy * dy).sqrt(), step);

            for i in 0..=steps {
                let t = if steps == 0 {
                    0.0
                } else {
                    i as f64 / steps as f64
                };
                self.push(Coord {
                    x: start.x + t * dx,
                    y: start.y + t * dy,
                });
            }
        }
    }

    fn push_geometry(&mut self, geometry: &Geometry<f64>) {
        match geometry {
            Geometry::Point(point) => self.push(point.0),
            Geometry::MultiPoint(points) => points.iter().for_each(|point| self.push(point.0)),
            Geometry::Line(line) => self.push_line(&LineString::from(*line)),
            Geometry::LineString(line) => self.push_line(line),
            Geometry::MultiLineString(lines) => lines.iter().for_each(|line| self.push_line(line)),
            Geometry::Polygon(polygon) => {
                if let Some(center) = polygon.centroid() {
                    self.push(center.0);
                }
            }
            Geometry::MultiPolygon(polygons) => {
                for polygon in polygons {
                    if let Some(center) = polygon.centroid() {
                        self.push(center.0);
                    }
                }
            }
            Geometry::Rect(rect) => self.push(rect.center()),
            Geometry::Triangle(triangle) => self.push(triangle.centroid().0),
            Geometry::GeometryCollection(collection) => {
                collection.iter().for_each(|inner| self.push_geometry(inner))
            }
        }
    }
}

/// Upper bound on samples taken along one segment.
const MAX_SEGMENT_STEPS: usize = 1 << 20;

fn wrap(coord: Coord<f64>) -> Coord<f64> {
    Coord {
        x: normalize_longitude(coord.x),
        y: clip_latitude(coord.y),
    }
}

fn segment_steps(length: f64, step: f64) -> usize {
    let steps = (length / step).ceil();
    if !steps.is_finite() || steps <= 0.0 {
        return 0;
    }
    if steps > MAX_SEGMENT_STEPS as f64 {
        debug!(steps, "segment sampling capped at {}", MAX_SEGMENT_STEPS);
        return MAX_SEGMENT_STEPS;
    }
    steps as usize
}

/// Plus Codes covering a geometry at the given length.
///
/// - points and multipoints encode each point
/// - polygons encode their centroid
/// - lines are sampled every half cell height, so every crossed cell appears,
///   up to a bounded number of samples per segment
/// - collections are walked recursively
///
/// Duplicates are dropped and the first-seen order is kept.
///
/// # Example
/// ```
/// use olc_rs::{parse_geometry, plus_codes_for_geometry};
///
/// # fn main() -> Result<(), olc_rs::OlcError> {
/// let geometry = parse_geometry("POINT(2.775 20.375)")?;
/// assert_eq!(plus_codes_for_geometry(&geometry, 6), vec!["7FG49Q00+"]);
/// # Ok(())
/// # }
/// ```
pub fn plus_codes_for_geometry(geometry: &Geometry<f64>, code_length: usize) -> Vec<String> {
    let mut collector = CodeCollector::new(code_length);
    collector.push_geometry(geometry);
    collector.codes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::OlcError;
    use crate::index::decode;
    use geo_types::{GeometryCollection, MultiPoint, Point, line_string, point, polygon};

    #[test]
    fn test_point() {
        let geometry = Geometry::Point(point! { x: 2.775, y: 20.375 });
        assert_eq!(plus_codes_for_geometry(&geometry, 6), vec!["7FG49Q00+"]);
    }

    #[test]
    fn test_multipoint_deduplicates() {
        let points = MultiPoint::from(vec![
            Point::new(2.775, 20.375),
            Point::new(2.76, 20.36),
            Point::new(-1.2178, 51.3701),
        ]);
        let codes = plus_codes_for_geometry(&Geometry::MultiPoint(points), 6);

        assert_eq!(codes.len(), 2);
        assert_eq!(codes[0], "7FG49Q00+");
        assert_eq!(codes[1], "9C3W9Q00+");
    }

    #[test]
    fn test_polygon_uses_centroid() {
        // corners fall in other cells, the centroid lands in 7FG49Q
        let square = polygon![
            (x: 2.70, y: 20.30),
            (x: 2.85, y: 20.30),
            (x: 2.85, y: 20.45),
            (x: 2.70, y: 20.45),
            (x: 2.70, y: 20.30),
        ];
        let codes = plus_codes_for_geometry(&Geometry::Polygon(square), 6);

        assert_eq!(codes, vec!["7FG49Q00+"]);
    }

    #[test]
    fn test_line_covers_every_crossed_cell() -> Result<(), OlcError> {
        // one degree due east along a parallel crosses twenty 6 digit cells
        let line = line_string![(x: 0.025, y: 20.375), (x: 1.025, y: 20.375)];
        let codes = plus_codes_for_geometry(&Geometry::LineString(line), 6);

        assert_eq!(codes.len(), 21);
        for pair in codes.windows(2) {
            let west = decode(&pair[0])?;
            let east = decode(&pair[1])?;
            assert!((west.east() - east.west()).abs() < 1e-9);
        }
        Ok(())
    }

    #[test]
    fn test_line_crosses_antimeridian_the_short_way() -> Result<(), OlcError> {
        let line = line_string![(x: 179.91, y: 20.375), (x: -179.91, y: 20.375)];
        let codes = plus_codes_for_geometry(&Geometry::LineString(line), 6);

        assert_eq!(codes.len(), 4);
        for code in &codes {
            let area = decode(code)?;
            assert!(area.west() >= 179.85 || area.east() <= -179.85, "{code}");
        }
        Ok(())
    }

    #[test]
    fn test_line_with_huge_coordinates_terminates() {
        let along = line_string![(x: 0.0, y: 0.0), (x: 1e300, y: 0.0)];
        let codes = plus_codes_for_geometry(&Geometry::LineString(along), 6);
        assert!(!codes.is_empty());
        assert!(codes.len() <= 3601);

        let up = line_string![(x: 0.0, y: 0.0), (x: 0.0, y: 1e300)];
        let codes = plus_codes_for_geometry(&Geometry::LineString(up), 6);
        assert!(!codes.is_empty());
        assert!(codes.len() <= 1801);
    }

    #[test]
    fn test_segment_steps_are_bounded() {
        assert_eq!(segment_steps(1.0, 0.25), 4);
        assert_eq!(segment_steps(0.0, 0.25), 0);
        assert_eq!(segment_steps(f64::NAN, 0.25), 0);
        assert_eq!(segment_steps(f64::INFINITY, 0.25), 0);
        assert_eq!(segment_steps(255.0, 2e-8), MAX_SEGMENT_STEPS);
    }

    #[test]
    fn test_degenerate_lines() {
        let single = LineString::from(vec![(2.775, 20.375)]);
        assert_eq!(
            plus_codes_for_geometry(&Geometry::LineString(single), 6),
            vec!["7FG49Q00+"]
        );

        let empty = LineString::<f64>::new(vec![]);
        assert!(plus_codes_for_geometry(&Geometry::LineString(empty), 6).is_empty());
    }

    #[test]
    fn test_collection_recurses() {
        let collection = GeometryCollection::from(vec![
            Geometry::Point(point! { x: 2.775, y: 20.375 }),
            Geometry::GeometryCollection(GeometryCollection::from(vec![Geometry::Point(
                point! { x: -1.2178, y: 51.3701 },
            )])),
        ]);
        let codes = plus_codes_for_geometry(&Geometry::GeometryCollection(collection), 6);

        assert_eq!(codes, vec!["7FG49Q00+", "9C3W9Q00+"]);
    }

    #[test]
    fn test_code_length_is_normalized() {
        let geometry = Geometry::Point(point! { x: 2.775, y: 20.375 });
        assert_eq!(
            plus_codes_for_geometry(&geometry, 5),
            plus_codes_for_geometry(&geometry, 6)
        );
    }
}
