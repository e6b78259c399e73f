/// Error type for olc-rs operations.
#[derive(Debug, PartialEq)]
pub enum OlcError {
    /// The text is not a valid Plus Code.
    InvalidCode(String),
    /// The operation needs a full code (e.g. decode, shorten, neighbors).
    NotFullCode(String),
    /// The operation needs a short code.
    NotShortCode(String),
    /// Padded codes cannot be shortened.
    PaddedCode(String),
    /// Vincenty iteration did not converge within the iteration cap.
    NoConvergence,
    /// A neighbor would lie on or beyond a pole.
    BeyondPole,
    /// File I/O or serialization error.
    IoError(String),
    /// CSV parsing or reading error.
    CsvError(String),
    /// Failed to parse geometry from string (GeoJSON or WKT).
    GeometryParseError(String),
}

impl std::fmt::Display for OlcError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OlcError::InvalidCode(code) => write!(f, "Invalid code: {}", code),
            OlcError::NotFullCode(code) => write!(f, "Not a full code: {}", code),
            OlcError::NotShortCode(code) => write!(f, "Not a short code: {}", code),
            OlcError::PaddedCode(code) => write!(f, "Cannot shorten padded code: {}", code),
            OlcError::NoConvergence => write!(f, "Geodesic solution did not converge"),
            OlcError::BeyondPole => write!(f, "Neighbor lies beyond a pole"),
            OlcError::IoError(msg) => write!(f, "IO error: {}", msg),
            OlcError::CsvError(msg) => write!(f, "CSV error: {}", msg),
            OlcError::GeometryParseError(msg) => write!(f, "Geometry parse error: {}", msg),
        }
    }
}

impl std::error::Error for OlcError {}
