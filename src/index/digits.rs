use crate::area::CodeArea;
use crate::coord::Coordinate;
use crate::error::OlcError;
use crate::index::constants::{
    CODE_ALPHABET, DEFAULT_CODE_LENGTH, DIGIT_VALUES, ENCODING_BASE, GRID_CODE_LENGTH,
    GRID_COLUMNS, GRID_LAT_PRECISION_INVERSE, GRID_LAT_SCALE, GRID_LON_PRECISION_INVERSE,
    GRID_LON_SCALE, GRID_ROWS, INVERSE_POWERS_OF_20, MAX_DIGIT_COUNT, MIN_DIGIT_COUNT,
    PADDING_CHARACTER, PAIR_CODE_LENGTH, POWERS_OF_20, SEPARATOR, SEPARATOR_POSITION,
};
use crate::index::projection::{LatLonIntegers, location_to_integers};
use crate::index::syntax::{is_full, is_valid, trim_spaces};
use geo_types::Point;

/// Value of an alphabet symbol (case-insensitive), `None` for anything else.
pub(crate) fn digit_value(symbol: u8) -> Option<i64> {
    let value = *DIGIT_VALUES.get(symbol as usize)?;
    (value >= 0).then_some(value as i64)
}

/// Clamps a requested length to `[2, 15]`, rounding odd pair-section lengths up.
pub(crate) fn normalize_code_length(code_length: usize) -> usize {
    let length = code_length.clamp(MIN_DIGIT_COUNT, MAX_DIGIT_COUNT);
    if length < PAIR_CODE_LENGTH && length % 2 == 1 {
        length + 1
    } else {
        length
    }
}

/// Height in degrees of a cell with `code_length` significant digits.
///
/// Pair-section lengths come straight from the power tables, so the result
/// carries no accumulated rounding error.
pub fn compute_latitude_precision(code_length: usize) -> f64 {
    if code_length <= PAIR_CODE_LENGTH {
        return pair_precision(code_length);
    }
    INVERSE_POWERS_OF_20[3] / (GRID_ROWS as f64).powi((code_length - PAIR_CODE_LENGTH) as i32)
}

/// Width in degrees of a cell with `code_length` significant digits.
pub fn compute_longitude_precision(code_length: usize) -> f64 {
    if code_length <= PAIR_CODE_LENGTH {
        return pair_precision(code_length);
    }
    INVERSE_POWERS_OF_20[3] / (GRID_COLUMNS as f64).powi((code_length - PAIR_CODE_LENGTH) as i32)
}

fn pair_precision(code_length: usize) -> f64 {
    let exponent = 2 - (code_length / 2) as i32;
    if exponent >= 0 {
        POWERS_OF_20[exponent as usize]
    } else {
        INVERSE_POWERS_OF_20[(-exponent) as usize]
    }
}

/// Packs projected integers into a code of the requested length.
pub(crate) fn encode_integers(integers: LatLonIntegers, code_length: usize) -> String {
    let code_length = normalize_code_length(code_length);
    let LatLonIntegers { mut lat, mut lon } = integers;
    let mut digits = [0u8; MAX_DIGIT_COUNT];

    if code_length > PAIR_CODE_LENGTH {
        for slot in digits[PAIR_CODE_LENGTH..].iter_mut().rev() {
            let row = lat % GRID_ROWS;
            let col = lon % GRID_COLUMNS;
            *slot = CODE_ALPHABET[(row * GRID_COLUMNS + col) as usize];
            lat /= GRID_ROWS;
            lon /= GRID_COLUMNS;
        }
    } else {
        lat /= GRID_ROWS.pow(GRID_CODE_LENGTH as u32);
        lon /= GRID_COLUMNS.pow(GRID_CODE_LENGTH as u32);
    }

    for pair in digits[..PAIR_CODE_LENGTH].chunks_exact_mut(2).rev() {
        pair[0] = CODE_ALPHABET[(lat % ENCODING_BASE) as usize];
        pair[1] = CODE_ALPHABET[(lon % ENCODING_BASE) as usize];
        lat /= ENCODING_BASE;
        lon /= ENCODING_BASE;
    }

    let significant = &digits[..code_length];
    let mut code = String::with_capacity(MAX_DIGIT_COUNT + 1);
    if code_length >= SEPARATOR_POSITION {
        code.extend(significant[..SEPARATOR_POSITION].iter().map(|&d| d as char));
        code.push(SEPARATOR);
        code.extend(significant[SEPARATOR_POSITION..].iter().map(|&d| d as char));
    } else {
        code.extend(significant.iter().map(|&d| d as char));
        code.extend(std::iter::repeat_n(
            PADDING_CHARACTER,
            SEPARATOR_POSITION - code_length,
        ));
        code.push(SEPARATOR);
    }
    code
}

/// Encodes a location into a Plus Code.
///
/// The length is clamped to `[2, 15]` and odd lengths below 10 are rounded up.
/// Latitude is clamped to `[-90, 90]` and longitude wraps.
///
/// # Example
/// ```
/// use olc_rs::encode;
///
/// // (lon, lat)
/// assert_eq!(encode(&(2.775, 20.375), 6), "7FG49Q00+");
/// assert_eq!(encode(&(2.782234375, 20.3701125), 11), "7FG49QCJ+2VX");
/// ```
pub fn encode(coord: &impl Coordinate, code_length: usize) -> String {
    encode_integers(location_to_integers(coord), code_length)
}

/// Encodes a location with the default 10-digit length (about 14 x 14 meters).
pub fn encode_default(coord: &impl Coordinate) -> String {
    encode(coord, DEFAULT_CODE_LENGTH)
}

/// Decodes a full Plus Code into the area it covers.
///
/// # Example
/// ```
/// use olc_rs::decode;
///
/// # fn main() -> Result<(), olc_rs::OlcError> {
/// let area = decode("7FG49QCJ+2V")?;
/// assert_eq!(area.south(), 20.37);
/// assert_eq!(area.west(), 2.782125);
/// assert_eq!(area.north(), 20.370125);
/// assert_eq!(area.east(), 2.78225);
/// assert_eq!(area.code_length, 10);
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// - [`OlcError::InvalidCode`] - `code` is not a Plus Code at all
/// - [`OlcError::NotFullCode`] - `code` is valid but short, or its first pair is out of range
pub fn decode(code: &str) -> Result<CodeArea, OlcError> {
    if !is_valid(code) {
        return Err(OlcError::InvalidCode(code.to_string()));
    }
    if !is_full(code) {
        return Err(OlcError::NotFullCode(code.to_string()));
    }

    let digits: Vec<i64> = trim_spaces(code)
        .bytes()
        .filter_map(digit_value)
        .take(MAX_DIGIT_COUNT)
        .collect();

    // Place values are kept in full-grid units so every corner comes from one division.
    let mut lat_place = ENCODING_BASE * ENCODING_BASE * GRID_LAT_PRECISION_INVERSE;
    let mut lon_place = ENCODING_BASE * ENCODING_BASE * GRID_LON_PRECISION_INVERSE;
    let mut lat = 0;
    let mut lon = 0;

    let pair_digits = digits.len().min(PAIR_CODE_LENGTH);
    for pair in digits[..pair_digits].chunks_exact(2) {
        lat_place /= ENCODING_BASE;
        lon_place /= ENCODING_BASE;
        lat += pair[0] * lat_place;
        lon += pair[1] * lon_place;
    }

    for &digit in digits.iter().skip(PAIR_CODE_LENGTH) {
        lat_place /= GRID_ROWS;
        lon_place /= GRID_COLUMNS;
        lat += (digit / GRID_COLUMNS) * lat_place;
        lon += (digit % GRID_COLUMNS) * lon_place;
    }

    let to_lat = |units: i64| (units - GRID_LAT_SCALE) as f64 / GRID_LAT_PRECISION_INVERSE as f64;
    let to_lon = |units: i64| (units - GRID_LON_SCALE) as f64 / GRID_LON_PRECISION_INVERSE as f64;

    Ok(CodeArea::new(
        Point::new(to_lon(lon), to_lat(lat)),
        Point::new(to_lon(lon + lon_place), to_lat(lat + lat_place)),
        digits.len(),
    ))
}
