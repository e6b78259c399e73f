pub mod batch;
pub mod csv;

pub use batch::{DecodePlusCodes, EncodePlusCodes};
pub use csv::{
    CoordinateSource, CsvPlusCodeConfig, CsvToPlusCode, GeometryFormat, csv_to_plus_code_csv,
};
