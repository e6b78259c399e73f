use crate::coord::{LATITUDE_MAX, normalize_longitude};
use crate::error::OlcError;
use crate::index::{decode, encode};
use serde::{Deserialize, Serialize};

/// One of the eight cells surrounding a code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NeighborDirection {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl NeighborDirection {
    /// All directions, clockwise from north.
    pub const ALL: [NeighborDirection; 8] = [
        NeighborDirection::North,
        NeighborDirection::NorthEast,
        NeighborDirection::East,
        NeighborDirection::SouthEast,
        NeighborDirection::South,
        NeighborDirection::SouthWest,
        NeighborDirection::West,
        NeighborDirection::NorthWest,
    ];

    /// Unit `(dlat, dlon)` step in cells.
    pub fn offsets(self) -> (f64, f64) {
        match self {
            NeighborDirection::North => (1.0, 0.0),
            NeighborDirection::NorthEast => (1.0, 1.0),
            NeighborDirection::East => (0.0, 1.0),
            NeighborDirection::SouthEast => (-1.0, 1.0),
            NeighborDirection::South => (-1.0, 0.0),
            NeighborDirection::SouthWest => (-1.0, -1.0),
            NeighborDirection::West => (0.0, -1.0),
            NeighborDirection::NorthWest => (1.0, -1.0),
        }
    }
}

/// Returns the code of the adjacent cell in `direction`, at the same length.
///
/// Longitude wraps across the antimeridian; latitude does not wrap over the poles.
///
/// # Example
/// ```
/// use olc_rs::{NeighborDirection, get_neighbor};
///
/// # fn main() -> Result<(), olc_rs::OlcError> {
/// assert_eq!(get_neighbor("8VXX0000+", NeighborDirection::East)?, "82X20000+");
/// assert_eq!(get_neighbor("8FWC2345+G6", NeighborDirection::North)?, "8FWC2345+H6");
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// - [`OlcError::InvalidCode`] / [`OlcError::NotFullCode`] - the code cannot be decoded
/// - [`OlcError::BeyondPole`] - the neighbor would lie on or past a pole
pub fn get_neighbor(code: &str, direction: NeighborDirection) -> Result<String, OlcError> {
    let area = decode(code)?;
    let center = area.center();
    let (dlat, dlon) = direction.offsets();

    let lat = center.y() + dlat * area.height_degrees();
    if lat >= LATITUDE_MAX || lat <= -LATITUDE_MAX {
        return Err(OlcError::BeyondPole);
    }
    let lon = normalize_longitude(center.x() + dlon * area.width_degrees());

    Ok(encode(&(lon, lat), area.code_length))
}

/// Looks up several neighbors at once.
///
/// Directions blocked by a pole are left out of the result rather than failing
/// the whole batch.
///
/// # Example
/// ```
/// use olc_rs::{NeighborDirection, get_neighbors};
///
/// # fn main() -> Result<(), olc_rs::OlcError> {
/// let ring = get_neighbors("8FWC2345+G6", &NeighborDirection::ALL)?;
/// assert_eq!(ring.len(), 8);
/// # Ok(())
/// # }
/// ```
pub fn get_neighbors(
    code: &str,
    directions: &[NeighborDirection],
) -> Result<Vec<(NeighborDirection, String)>, OlcError> {
    let mut neighbors = Vec::with_capacity(directions.len());
    for &direction in directions {
        match get_neighbor(code, direction) {
            Ok(neighbor) => neighbors.push((direction, neighbor)),
            Err(OlcError::BeyondPole) => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(neighbors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_cardinal_neighbors() -> Result<(), OlcError> {
        assert_eq!(get_neighbor("8FWC2345+G6", NeighborDirection::North)?, "8FWC2345+H6");
        assert_eq!(get_neighbor("8FWC2345+G6", NeighborDirection::South)?, "8FWC2345+F6");
        assert_eq!(get_neighbor("8FWC2345+G6", NeighborDirection::East)?, "8FWC2345+G7");
        assert_eq!(get_neighbor("8FWC2345+G6", NeighborDirection::West)?, "8FWC2345+G5");
        Ok(())
    }

    #[test]
    fn test_neighbor_carries_into_next_pair() -> Result<(), OlcError> {
        assert_eq!(get_neighbor("CFX30000+", NeighborDirection::South)?, "CFW30000+");
        assert_eq!(get_neighbor("8FWC0000+", NeighborDirection::NorthEast)?, "8FXF0000+");
        Ok(())
    }

    #[test]
    fn test_neighbor_wraps_antimeridian() -> Result<(), OlcError> {
        assert_eq!(get_neighbor("8VXX0000+", NeighborDirection::East)?, "82X20000+");
        assert_eq!(get_neighbor("82X20000+", NeighborDirection::West)?, "8VXX0000+");
        Ok(())
    }

    #[test]
    fn test_neighbor_beyond_pole() {
        assert_eq!(
            get_neighbor("CFX30000+", NeighborDirection::North),
            Err(OlcError::BeyondPole)
        );
        assert_eq!(
            get_neighbor("22220000+", NeighborDirection::SouthWest),
            Err(OlcError::BeyondPole)
        );
    }

    #[test]
    fn test_neighbor_requires_full_code() {
        assert!(matches!(
            get_neighbor("2345+G6", NeighborDirection::North),
            Err(OlcError::NotFullCode(_))
        ));
    }

    #[test]
    fn test_neighbor_keeps_length() -> Result<(), OlcError> {
        for code in [
            "7FG49Q00+",
            "7FG49QCJ+2VX",
            "8FVC9G8F+6XQQ435",
            "3CWWJQHJ+XV83435",
        ] {
            for direction in NeighborDirection::ALL {
                let neighbor = get_neighbor(code, direction)?;
                assert_eq!(
                    crate::index::code_length(&neighbor),
                    crate::index::code_length(code)
                );
                assert_ne!(neighbor, code);
            }
        }
        Ok(())
    }

    #[test]
    fn test_fifteen_digit_neighbors_step_one_cell() -> Result<(), OlcError> {
        let points = [
            (-58.3815591, -34.6036844),
            (151.2092955, -33.8688197),
            (-2.2479699, 53.4808274),
            (139.6917064, 35.6894875),
        ];
        for point in points {
            let code = encode(&point, 15);
            let area = decode(&code)?;
            for direction in NeighborDirection::ALL {
                let (dlat, dlon) = direction.offsets();
                let neighbor = decode(&get_neighbor(&code, direction)?)?;

                assert_eq!(neighbor.code_length, 15);
                let south_step = (neighbor.south() - area.south()) / area.height_degrees();
                let west_step = (neighbor.west() - area.west()) / area.width_degrees();
                assert!((south_step - dlat).abs() < 1e-3, "{code} {direction:?}");
                assert!((west_step - dlon).abs() < 1e-3, "{code} {direction:?}");
            }
        }
        Ok(())
    }

    #[test]
    fn test_southern_western_neighbor_moves() -> Result<(), OlcError> {
        let code = "3CWWJQHJ+XV83435";
        let south_west = get_neighbor(code, NeighborDirection::SouthWest)?;
        assert_ne!(south_west, code);
        assert_eq!(
            get_neighbor(&south_west, NeighborDirection::NorthEast)?,
            code
        );
        assert_eq!(
            get_neighbor(&get_neighbor(code, NeighborDirection::North)?, NeighborDirection::South)?,
            code
        );
        Ok(())
    }

    #[test]
    fn test_get_neighbors_ring_is_distinct() -> Result<(), OlcError> {
        let ring = get_neighbors("7FG49QCJ+2V", &NeighborDirection::ALL)?;
        let unique: HashSet<&String> = ring.iter().map(|(_, code)| code).collect();

        assert_eq!(ring.len(), 8);
        assert_eq!(unique.len(), 8);
        assert_eq!(ring[0].0, NeighborDirection::North);
        Ok(())
    }

    #[test]
    fn test_get_neighbors_skips_pole() -> Result<(), OlcError> {
        let ring = get_neighbors("CFX30000+", &NeighborDirection::ALL)?;

        assert_eq!(ring.len(), 5);
        assert!(ring.iter().all(|(direction, _)| direction.offsets().0 <= 0.0));
        Ok(())
    }

    #[test]
    fn test_get_neighbors_propagates_invalid_code() {
        assert!(matches!(
            get_neighbors("nope", &NeighborDirection::ALL),
            Err(OlcError::InvalidCode(_))
        ));
    }
}
