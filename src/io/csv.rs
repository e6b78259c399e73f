use crate::area::CodeArea;
use crate::error::OlcError;
use crate::geom::{parse_geometry, plus_codes_for_geometry};
use crate::index::{DEFAULT_CODE_LENGTH, decode, encode};
use std::collections::HashSet;
use std::fs::File;
use std::path::Path;
use tracing::{debug, info};

enum SourceIndices {
    Geometry(usize),
    Coordinates { lon_idx: usize, lat_idx: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryFormat {
    /// Well-Known Text format (e.g., "POLYGON((...))")
    Wkt,
    /// GeoJSON format
    GeoJson,
}

#[derive(Debug, Clone)]
pub enum CoordinateSource {
    /// A single column containing WKT or GeoJSON geometry
    GeometryColumn(String),
    /// Separate longitude and latitude columns in WGS-84 degrees
    CoordinateColumns {
        lon_column: String,
        lat_column: String,
    },
}

#[derive(Debug, Clone)]
pub struct CsvPlusCodeConfig {
    pub source: CoordinateSource,
    pub exclude_columns: Vec<String>,
    pub code_length: usize,
    pub include_area_geometry: Option<GeometryFormat>,
}

impl CsvPlusCodeConfig {
    /// Create config for a CSV with a geometry column (WKT or GeoJSON).
    ///
    /// # Example
    /// ```
    /// use olc_rs::CsvPlusCodeConfig;
    ///
    /// let config = CsvPlusCodeConfig::new("geometry", 10);
    /// ```
    pub fn new(geometry_column: impl Into<String>, code_length: usize) -> Self {
        Self {
            source: CoordinateSource::GeometryColumn(geometry_column.into()),
            exclude_columns: Vec::new(),
            code_length,
            include_area_geometry: None,
        }
    }

    /// Create config for a CSV with separate longitude/latitude columns.
    ///
    /// # Example
    /// ```
    /// use olc_rs::CsvPlusCodeConfig;
    ///
    /// let config = CsvPlusCodeConfig::from_coords("Longitude", "Latitude", 11);
    /// ```
    pub fn from_coords(
        lon_column: impl Into<String>,
        lat_column: impl Into<String>,
        code_length: usize,
    ) -> Self {
        Self {
            source: CoordinateSource::CoordinateColumns {
                lon_column: lon_column.into(),
                lat_column: lat_column.into(),
            },
            exclude_columns: Vec::new(),
            code_length,
            include_area_geometry: None,
        }
    }

    pub fn exclude(mut self, columns: Vec<String>) -> Self {
        self.exclude_columns = columns;
        self
    }

    /// Include the code's rectangle in the output.
    pub fn with_area_geometry(mut self, format: GeometryFormat) -> Self {
        self.include_area_geometry = Some(format);
        self
    }
}

impl Default for CsvPlusCodeConfig {
    fn default() -> Self {
        Self::new("geometry", DEFAULT_CODE_LENGTH)
    }
}

pub trait CsvToPlusCode {
    fn to_plus_code_csv(
        &self,
        output_path: impl AsRef<Path>,
        config: &CsvPlusCodeConfig,
    ) -> Result<(), OlcError>;
}

impl<P: AsRef<Path>> CsvToPlusCode for P {
    fn to_plus_code_csv(
        &self,
        output_path: impl AsRef<Path>,
        config: &CsvPlusCodeConfig,
    ) -> Result<(), OlcError> {
        csv_to_plus_code_csv(self, output_path, config)
    }
}

fn area_geometry(area: &CodeArea, format: GeometryFormat) -> String {
    let polygon = area.to_polygon();
    match format {
        GeometryFormat::Wkt => {
            use wkt::ToWkt;
            polygon.wkt_string()
        }
        GeometryFormat::GeoJson => geojson::Geometry::from(&polygon).to_string(),
    }
}

fn column_index(headers: &csv::StringRecord, name: &str, role: &str) -> Result<usize, OlcError> {
    if name.is_empty() {
        return Err(OlcError::CsvError(format!(
            "{} column name cannot be empty",
            role
        )));
    }
    headers
        .iter()
        .position(|h| h == name)
        .ok_or_else(|| OlcError::CsvError(format!("{} column '{}' not found", role, name)))
}

fn parse_degrees(record: &csv::StringRecord, idx: usize, role: &str) -> Result<f64, OlcError> {
    let value = record
        .get(idx)
        .ok_or_else(|| OlcError::CsvError(format!("Missing {} column at index {}", role, idx)))?
        .trim();
    value
        .parse()
        .map_err(|_| OlcError::CsvError(format!("Invalid {}: '{}'", role, value)))
}

/// Converts a CSV file with geometry or coordinate columns to a CSV file with Plus Codes.
///
/// Rows are streamed, so memory use does not grow with the input. A geometry that
/// maps to several codes (a line, a multipoint) produces one output row per code.
///
/// # Example with geometry column (WKT or GeoJSON)
///
/// ```no_run
/// use olc_rs::{csv_to_plus_code_csv, CsvPlusCodeConfig, GeometryFormat};
///
/// let config = CsvPlusCodeConfig::new("Geo Shape", 10)
///     .exclude(vec!["Geo Point".into()])
///     .with_area_geometry(GeometryFormat::Wkt);
///
/// csv_to_plus_code_csv("input.csv", "output.csv", &config).unwrap();
/// ```
///
/// # Example with coordinate columns
///
/// ```no_run
/// use olc_rs::{csv_to_plus_code_csv, CsvPlusCodeConfig};
///
/// let config = CsvPlusCodeConfig::from_coords("Longitude", "Latitude", 11);
///
/// csv_to_plus_code_csv("bus_stops.csv", "output.csv", &config).unwrap();
/// ```
pub fn csv_to_plus_code_csv(
    csv_path: impl AsRef<Path>,
    output_path: impl AsRef<Path>,
    config: &CsvPlusCodeConfig,
) -> Result<(), OlcError> {
    let csv_path = csv_path.as_ref();
    let output_path = output_path.as_ref();
    info!(input = %csv_path.display(), output = %output_path.display(), "converting csv to plus codes");

    let file = File::open(csv_path).map_err(|e| OlcError::CsvError(e.to_string()))?;
    let mut reader = csv::Reader::from_reader(file);

    let headers = reader
        .headers()
        .map_err(|e| OlcError::CsvError(e.to_string()))?
        .clone();

    // Source columns never reach the output.
    let (source_indices, mut exclude_indices) = match &config.source {
        CoordinateSource::GeometryColumn(col) => {
            let idx = column_index(&headers, col, "Geometry")?;
            (SourceIndices::Geometry(idx), HashSet::from([idx]))
        }
        CoordinateSource::CoordinateColumns {
            lon_column,
            lat_column,
        } => {
            let lon_idx = column_index(&headers, lon_column, "Longitude")?;
            let lat_idx = column_index(&headers, lat_column, "Latitude")?;
            (
                SourceIndices::Coordinates { lon_idx, lat_idx },
                HashSet::from([lon_idx, lat_idx]),
            )
        }
    };

    for col_name in &config.exclude_columns {
        if let Some(idx) = headers.iter().position(|h| h == col_name) {
            exclude_indices.insert(idx);
        }
    }

    let out_file = File::create(output_path).map_err(|e| OlcError::IoError(e.to_string()))?;
    let mut writer = csv::Writer::from_writer(out_file);

    let mut header_row: Vec<&str> = vec!["plus_code"];
    if config.include_area_geometry.is_some() {
        header_row.push("plus_code_geometry");
    }
    for (i, h) in headers.iter().enumerate() {
        if !exclude_indices.contains(&i) {
            header_row.push(h);
        }
    }
    writer
        .write_record(&header_row)
        .map_err(|e| OlcError::CsvError(e.to_string()))?;

    let mut rows_read = 0usize;
    let mut rows_written = 0usize;
    for result in reader.records() {
        let record = result.map_err(|e| OlcError::CsvError(e.to_string()))?;
        rows_read += 1;

        let codes = match &source_indices {
            SourceIndices::Geometry(idx) => {
                let geom_str = record.get(*idx).ok_or_else(|| {
                    OlcError::CsvError(format!("Missing geometry column at index {}", idx))
                })?;
                let geom = parse_geometry(geom_str)?;
                plus_codes_for_geometry(&geom, config.code_length)
            }
            SourceIndices::Coordinates { lon_idx, lat_idx } => {
                let lon = parse_degrees(&record, *lon_idx, "longitude")?;
                let lat = parse_degrees(&record, *lat_idx, "latitude")?;
                vec![encode(&(lon, lat), config.code_length)]
            }
        };
        if codes.is_empty() {
            debug!(row = rows_read, "geometry produced no plus codes");
        }

        for code in codes {
            let mut row: Vec<String> = Vec::with_capacity(record.len() + 2);

            if let Some(format) = config.include_area_geometry {
                let area = decode(&code)?;
                row.push(code);
                row.push(area_geometry(&area, format));
            } else {
                row.push(code);
            }

            for (i, field) in record.iter().enumerate() {
                if !exclude_indices.contains(&i) {
                    row.push(field.to_string());
                }
            }
            writer
                .write_record(&row)
                .map_err(|e| OlcError::CsvError(e.to_string()))?;
            rows_written += 1;
        }
    }

    writer
        .flush()
        .map_err(|e| OlcError::CsvError(e.to_string()))?;

    info!(rows_read, rows_written, "csv conversion finished");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    fn io_err(e: std::io::Error) -> OlcError {
        OlcError::IoError(e.to_string())
    }

    fn read_rows(path: &Path) -> Result<Vec<Vec<String>>, OlcError> {
        let mut reader = csv::Reader::from_path(path).map_err(|e| OlcError::CsvError(e.to_string()))?;
        let headers = reader
            .headers()
            .map_err(|e| OlcError::CsvError(e.to_string()))?
            .iter()
            .map(String::from)
            .collect();
        let mut rows = vec![headers];
        for record in reader.records() {
            let record = record.map_err(|e| OlcError::CsvError(e.to_string()))?;
            rows.push(record.iter().map(String::from).collect());
        }
        Ok(rows)
    }

    #[test]
    fn test_csv_from_coords() -> Result<(), OlcError> {
        let dir = tempdir().map_err(io_err)?;
        let csv_path = dir.path().join("stops.csv");
        let output_path = dir.path().join("output.csv");

        let mut file = File::create(&csv_path).map_err(io_err)?;
        writeln!(file, "ID,Longitude,Latitude,Description").map_err(io_err)?;
        writeln!(file, "1,2.775,20.375,Desert").map_err(io_err)?;
        writeln!(file, "2, -1.2178 , 51.3701 ,Field").map_err(io_err)?;

        let config = CsvPlusCodeConfig::from_coords("Longitude", "Latitude", 6);
        csv_to_plus_code_csv(&csv_path, &output_path, &config)?;

        let rows = read_rows(&output_path)?;
        assert_eq!(rows[0], vec!["plus_code", "ID", "Description"]);
        assert_eq!(rows[1], vec!["7FG49Q00+", "1", "Desert"]);
        assert_eq!(rows[2], vec!["9C3W9Q00+", "2", "Field"]);
        Ok(())
    }

    #[test]
    fn test_csv_geometry_column_with_area() -> Result<(), OlcError> {
        let dir = tempdir().map_err(io_err)?;
        let csv_path = dir.path().join("assets.csv");
        let output_path = dir.path().join("output.csv");

        let mut file = File::create(&csv_path).map_err(io_err)?;
        writeln!(file, "ASSET_ID,TYPE,geometry,Geo Point").map_err(io_err)?;
        writeln!(
            file,
            "CDT123,Well,\"{{\"\"type\"\":\"\"Point\"\",\"\"coordinates\"\":[2.775,20.375]}}\",x"
        )
        .map_err(io_err)?;

        let config = CsvPlusCodeConfig::new("geometry", 6)
            .exclude(vec!["Geo Point".into()])
            .with_area_geometry(GeometryFormat::Wkt);
        csv_path.to_plus_code_csv(&output_path, &config)?;

        let rows = read_rows(&output_path)?;
        assert_eq!(
            rows[0],
            vec!["plus_code", "plus_code_geometry", "ASSET_ID", "TYPE"]
        );
        assert_eq!(rows[1][0], "7FG49Q00+");
        assert!(rows[1][1].starts_with("POLYGON"));
        assert_eq!(&rows[1][2..], ["CDT123", "Well"]);
        Ok(())
    }

    #[test]
    fn test_csv_line_expands_rows() -> Result<(), OlcError> {
        let dir = tempdir().map_err(io_err)?;
        let csv_path = dir.path().join("pipes.csv");
        let output_path = dir.path().join("output.csv");

        let mut file = File::create(&csv_path).map_err(io_err)?;
        writeln!(file, "ID,geometry").map_err(io_err)?;
        writeln!(file, "P1,\"LINESTRING(0.025 20.375, 0.125 20.375)\"").map_err(io_err)?;

        let config =
            CsvPlusCodeConfig::new("geometry", 6).with_area_geometry(GeometryFormat::GeoJson);
        csv_to_plus_code_csv(&csv_path, &output_path, &config)?;

        let rows = read_rows(&output_path)?;
        assert_eq!(rows.len(), 1 + 3);
        assert!(rows[1..].iter().all(|row| row[2] == "P1"));
        assert!(rows[1][1].contains("\"Polygon\""));
        Ok(())
    }

    #[test]
    fn test_csv_missing_column() -> Result<(), OlcError> {
        let dir = tempdir().map_err(io_err)?;
        let csv_path = dir.path().join("test.csv");
        let output_path = dir.path().join("output.csv");

        let mut file = File::create(&csv_path).map_err(io_err)?;
        writeln!(file, "ID,lon,lat").map_err(io_err)?;

        let config = CsvPlusCodeConfig::from_coords("Longitude", "lat", 10);
        let result = csv_to_plus_code_csv(&csv_path, &output_path, &config);
        assert!(matches!(result, Err(OlcError::CsvError(msg)) if msg.contains("Longitude")));

        let config = CsvPlusCodeConfig::new("", 10);
        assert!(matches!(
            csv_to_plus_code_csv(&csv_path, &output_path, &config),
            Err(OlcError::CsvError(_))
        ));
        Ok(())
    }

    #[test]
    fn test_csv_invalid_coordinate() -> Result<(), OlcError> {
        let dir = tempdir().map_err(io_err)?;
        let csv_path = dir.path().join("test.csv");
        let output_path = dir.path().join("output.csv");

        let mut file = File::create(&csv_path).map_err(io_err)?;
        writeln!(file, "lon,lat").map_err(io_err)?;
        writeln!(file, "east,51.5").map_err(io_err)?;

        let config = CsvPlusCodeConfig::from_coords("lon", "lat", 10);
        assert!(matches!(
            csv_to_plus_code_csv(&csv_path, &output_path, &config),
            Err(OlcError::CsvError(msg)) if msg.contains("east")
        ));
        Ok(())
    }

    #[test]
    fn test_default_config() {
        let config = CsvPlusCodeConfig::default();
        assert_eq!(config.code_length, DEFAULT_CODE_LENGTH);
        assert!(matches!(config.source, CoordinateSource::GeometryColumn(ref c) if c == "geometry"));
        assert!(config.include_area_geometry.is_none());
    }
}
