//! # olc-rs
//!
//! Open Location Code (Plus Codes) with a Vincenty geodesic solver on WGS-84.
//! Coordinates are `(lon, lat)` degrees everywhere, following the `geo` convention
//! of x = longitude and y = latitude.
//!
//! ### 1. Encoding and decoding
//!
//! ```
//! use olc_rs::{decode, encode};
//!
//! # fn main() -> Result<(), olc_rs::OlcError> {
//! let code = encode(&(2.782234375, 20.3701125), 11);
//! assert_eq!(code, "7FG49QCJ+2VX");
//!
//! let area = decode(&code)?;
//! println!("{} digits, center {:?}", area.code_length, area.center());
//! let polygon = area.to_polygon();
//! # Ok(())
//! # }
//! ```
//!
//! ### 2. Short codes
//!
//! ```
//! use olc_rs::{recover_nearest, shorten};
//!
//! # fn main() -> Result<(), olc_rs::OlcError> {
//! let reference = (-1.21, 51.36);
//! let short = shorten("9C3W9QCJ+2VX", &reference)?;
//! assert_eq!(short, "CJ+2VX");
//! assert_eq!(recover_nearest(&short, &reference)?, "9C3W9QCJ+2VX");
//! # Ok(())
//! # }
//! ```
//!
//! ### 3. Sizes in meters
//!
//! ```
//! use olc_rs::{CodeArea, NeighborDirection, Precision, get_neighbor, optimal_code_length_for, size_meters};
//!
//! # fn main() -> Result<(), olc_rs::OlcError> {
//! let length = optimal_code_length_for(&(-1.2178, 51.3701), Precision::Meters);
//! let area = CodeArea::from_code("9C3W9QCJ+2VX")?;
//! let (width, height) = size_meters(&area)?;
//! let north = get_neighbor("9C3W9QCJ+2VX", NeighborDirection::North)?;
//! # Ok(())
//! # }
//! ```
//!
//! ### 4. `CsvToPlusCode` - CSV File Conversion
//!
//! Convert CSV files with geometry columns (WKT or GeoJSON) to Plus Code CSVs:
//!
//! ```no_run
//! use olc_rs::{CsvToPlusCode, CsvPlusCodeConfig, GeometryFormat};
//!
//! let config = CsvPlusCodeConfig::new("geometry", 10)
//!     .exclude(vec!["Geo Point".into()])
//!     .with_area_geometry(GeometryFormat::Wkt);
//!
//! // Using trait method
//! "input.csv".to_plus_code_csv("output.csv", &config).unwrap();
//! ```
//!
//! Or use separate longitude/latitude columns:
//!
//! ```no_run
//! use olc_rs::{CsvPlusCodeConfig, csv_to_plus_code_csv};
//!
//! let config = CsvPlusCodeConfig::from_coords("Longitude", "Latitude", 11);
//!
//! csv_to_plus_code_csv("bus_stops.csv", "output.csv", &config).unwrap();
//! ```
//!

pub mod area;
pub mod coord;
pub mod error;
pub mod geom;
pub mod index;
pub mod io;

pub use area::{
    CodeArea, NeighborDirection, Precision, get_neighbor, get_neighbors, height_meters, offset,
    optimal_code_length, optimal_code_length_for, size_meters, width_meters,
};
pub use coord::{
    Coordinate, GeodesicInverse, LATITUDE_MAX, LONGITUDE_MAX, calculate_destination,
    calculate_inverse, clip_latitude, normalize_longitude,
};
pub use error::OlcError;
pub use geom::{parse_geojson, parse_geometry, parse_wkt, plus_codes_for_geometry};
pub use index::{
    CODE_ALPHABET, DEFAULT_CODE_LENGTH, GRID_CODE_LENGTH, MAX_DIGIT_COUNT, MIN_DIGIT_COUNT,
    PADDING_CHARACTER, PAIR_CODE_LENGTH, SEPARATOR, SEPARATOR_POSITION, code_length,
    compute_latitude_precision, compute_longitude_precision, decode, encode, encode_default,
    is_full, is_short, is_valid, recover_nearest, shorten,
};
pub use io::{
    CoordinateSource, CsvPlusCodeConfig, CsvToPlusCode, DecodePlusCodes, EncodePlusCodes,
    GeometryFormat, csv_to_plus_code_csv,
};

pub use geo_types;
