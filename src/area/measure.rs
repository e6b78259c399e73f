use crate::area::CodeArea;
use crate::coord::{Coordinate, calculate_destination, calculate_inverse};
use crate::error::OlcError;
use geo_types::Point;

/// East-west extent of the area in meters, measured along its center parallel.
///
/// # Example
/// ```
/// use olc_rs::{CodeArea, width_meters};
///
/// # fn main() -> Result<(), olc_rs::OlcError> {
/// let area = CodeArea::from_code("6FG22222+22")?;
/// let width = width_meters(&area)?;
/// assert!((width - 13.9).abs() < 0.1);
/// # Ok(())
/// # }
/// ```
pub fn width_meters(area: &CodeArea) -> Result<f64, OlcError> {
    let lat = area.center().y();
    Ok(calculate_inverse(&(area.west(), lat), &(area.east(), lat))?.distance)
}

/// North-south extent of the area in meters, measured along its center meridian.
pub fn height_meters(area: &CodeArea) -> Result<f64, OlcError> {
    let lon = area.center().x();
    Ok(calculate_inverse(&(lon, area.south()), &(lon, area.north()))?.distance)
}

/// `(width, height)` of the area in meters.
pub fn size_meters(area: &CodeArea) -> Result<(f64, f64), OlcError> {
    Ok((width_meters(area)?, height_meters(area)?))
}

/// Moves a point by a number of meters north and east.
///
/// The north leg is travelled first, then the east leg from where it ends.
/// Negative values move south and west.
///
/// # Example
/// ```
/// use olc_rs::{calculate_inverse, offset};
///
/// # fn main() -> Result<(), olc_rs::OlcError> {
/// let start = (-1.2178, 51.3701);
/// let moved = offset(&start, 100.0, 0.0)?;
/// let leg = calculate_inverse(&start, &moved)?;
/// assert!((leg.distance - 100.0).abs() < 1e-6);
/// # Ok(())
/// # }
/// ```
pub fn offset(
    coord: &impl Coordinate,
    north_meters: f64,
    east_meters: f64,
) -> Result<Point<f64>, OlcError> {
    let north_azimuth = if north_meters < 0.0 { 180.0 } else { 0.0 };
    let east_azimuth = if east_meters < 0.0 { 270.0 } else { 90.0 };

    let after_north = calculate_destination(coord, north_azimuth, north_meters.abs())?;
    calculate_destination(&after_north, east_azimuth, east_meters.abs())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use geo::{Distance, Geodesic};

    #[test]
    fn test_width_and_height_on_equator() -> Result<(), OlcError> {
        // 10 digit cell whose south-west corner is the origin
        let area = CodeArea::from_code("6FG22222+22")?;

        assert_abs_diff_eq!(width_meters(&area)?, 13.9149, epsilon = 1e-3);
        assert_abs_diff_eq!(height_meters(&area)?, 13.8218, epsilon = 1e-3);
        Ok(())
    }

    #[test]
    fn test_size_matches_karney() -> Result<(), OlcError> {
        let area = CodeArea::from_code("9C3W9QCJ+2VX")?;
        let (width, height) = size_meters(&area)?;

        let center = area.center();
        let expected_width = Geodesic.distance(
            Point::new(area.west(), center.y()),
            Point::new(area.east(), center.y()),
        );
        let expected_height = Geodesic.distance(
            Point::new(center.x(), area.south()),
            Point::new(center.x(), area.north()),
        );

        assert_abs_diff_eq!(width, expected_width, epsilon = 1e-4);
        assert_abs_diff_eq!(height, expected_height, epsilon = 1e-4);
        Ok(())
    }

    #[test]
    fn test_width_shrinks_towards_pole() -> Result<(), OlcError> {
        let equator = CodeArea::from_code("6FG22222+")?;
        let north = CodeArea::from_code("CFG22222+")?;

        assert!(width_meters(&north)? < width_meters(&equator)?);
        assert_abs_diff_eq!(
            height_meters(&north)?,
            height_meters(&equator)?,
            epsilon = 5.0
        );
        Ok(())
    }

    #[test]
    fn test_offset_north_and_east() -> Result<(), OlcError> {
        let start = (-1.2178, 51.3701);

        let north = offset(&start, 100.0, 0.0)?;
        let leg = calculate_inverse(&start, &north)?;
        assert_abs_diff_eq!(leg.distance, 100.0, epsilon = 1e-6);
        assert_abs_diff_eq!(leg.initial_azimuth, 0.0, epsilon = 1e-6);

        let west = offset(&start, 0.0, -100.0)?;
        let leg = calculate_inverse(&start, &west)?;
        assert_abs_diff_eq!(leg.distance, 100.0, epsilon = 1e-6);
        assert_abs_diff_eq!(leg.initial_azimuth, 270.0, epsilon = 1e-3);
        Ok(())
    }

    #[test]
    fn test_offset_there_and_back() -> Result<(), OlcError> {
        let start = Point::new(2.775, 20.375);
        let moved = offset(&start, 250.0, -75.0)?;

        assert!(moved.y() > start.y());
        assert!(moved.x() < start.x());

        let back = offset(&moved, -250.0, 75.0)?;
        // west and east legs both drift slightly toward the equator
        assert_abs_diff_eq!(back.x(), start.x(), epsilon = 1e-7);
        assert_abs_diff_eq!(back.y(), start.y(), epsilon = 1e-7);
        Ok(())
    }

    #[test]
    fn test_zero_offset_is_identity() -> Result<(), OlcError> {
        let start = (2.775, 20.375);
        let moved = offset(&start, 0.0, 0.0)?;

        assert_abs_diff_eq!(moved.x(), start.0, epsilon = 1e-12);
        assert_abs_diff_eq!(moved.y(), start.1, epsilon = 1e-12);
        Ok(())
    }
}
