use crate::coord::{Coordinate, LATITUDE_MAX, clip_latitude, normalize_longitude};
use crate::error::OlcError;
use crate::index::constants::{
    PADDING_CHARACTER, SEPARATOR, SEPARATOR_POSITION, SHORTEN_REMOVAL_LENGTHS,
    SHORTEN_SAFETY_FACTOR,
};
use crate::index::digits::{compute_latitude_precision, decode, encode, encode_default};
use crate::index::syntax::{is_full, is_short, is_valid, trim_spaces};

/// Removes as many leading digits from a full code as the reference location allows.
///
/// The reference must be within `0.3` of a cell at the shortened precision from the
/// code's center, so that [`recover_nearest`] with the same reference restores the
/// original code. If no prefix can be removed the (uppercased) code is returned.
///
/// # Example
/// ```
/// use olc_rs::shorten;
///
/// # fn main() -> Result<(), olc_rs::OlcError> {
/// // reference is (lon, lat)
/// assert_eq!(shorten("8FJFW222+", &(9.012, 42.899))?, "22+");
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// - [`OlcError::InvalidCode`] - the code is not a Plus Code
/// - [`OlcError::NotFullCode`] - the code is not a full code
/// - [`OlcError::PaddedCode`] - padded codes cannot be shortened
pub fn shorten(code: &str, reference: &impl Coordinate) -> Result<String, OlcError> {
    if !is_valid(code) {
        return Err(OlcError::InvalidCode(code.to_string()));
    }
    if !is_full(code) {
        return Err(OlcError::NotFullCode(code.to_string()));
    }
    if code.contains(PADDING_CHARACTER) {
        return Err(OlcError::PaddedCode(code.to_string()));
    }

    let code = trim_spaces(code).to_ascii_uppercase();
    let center = decode(&code)?.center();
    let lat = clip_latitude(reference.lat());
    let lon = normalize_longitude(reference.lon());

    let range = (center.y() - lat).abs().max((center.x() - lon).abs());
    let removal = SHORTEN_REMOVAL_LENGTHS
        .into_iter()
        .find(|&removal| range < compute_latitude_precision(removal) * SHORTEN_SAFETY_FACTOR);

    Ok(match removal {
        Some(removal) => code[removal..].to_string(),
        None => code,
    })
}

/// Recovers the full code nearest to a reference location from a short code.
///
/// Full codes are returned uppercased. The missing prefix is taken from the
/// reference location, then the result is moved by one cell when that lands
/// closer to the reference.
///
/// # Example
/// ```
/// use olc_rs::recover_nearest;
///
/// # fn main() -> Result<(), olc_rs::OlcError> {
/// assert_eq!(recover_nearest("2222+22", &(0.0, 89.6))?, "CFX22222+22");
/// assert_eq!(recover_nearest("9c3w9qcj+2vx", &(0.0, 0.0))?, "9C3W9QCJ+2VX");
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// - [`OlcError::InvalidCode`] - the code is not a Plus Code
/// - [`OlcError::NotShortCode`] - a valid code that is neither full nor short
pub fn recover_nearest(code: &str, reference: &impl Coordinate) -> Result<String, OlcError> {
    if is_full(code) {
        return Ok(trim_spaces(code).to_ascii_uppercase());
    }
    if !is_valid(code) {
        return Err(OlcError::InvalidCode(code.to_string()));
    }
    if !is_short(code) {
        return Err(OlcError::NotShortCode(code.to_string()));
    }

    let code = trim_spaces(code).to_ascii_uppercase();
    let separator = code
        .find(SEPARATOR)
        .ok_or_else(|| OlcError::NotShortCode(code.clone()))?;
    let lat = clip_latitude(reference.lat());
    let lon = normalize_longitude(reference.lon());

    let missing = SEPARATOR_POSITION - separator;
    let resolution = compute_latitude_precision(missing);
    let half_resolution = resolution / 2.0;

    let prefix = encode_default(&(lon, lat));
    let area = decode(&format!("{}{}", &prefix[..missing], code))?;
    let center = area.center();
    let mut center_lat = center.y();
    let mut center_lon = center.x();

    if lat + half_resolution < center_lat && center_lat - resolution >= -LATITUDE_MAX {
        center_lat -= resolution;
    } else if lat - half_resolution > center_lat && center_lat + resolution <= LATITUDE_MAX {
        center_lat += resolution;
    }

    if lon + half_resolution < center_lon {
        center_lon -= resolution;
    } else if lon - half_resolution > center_lon {
        center_lon += resolution;
    }

    Ok(encode(&(center_lon, center_lat), area.code_length))
}
