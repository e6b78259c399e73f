use crate::coord::{LATITUDE_MAX, LONGITUDE_MAX};
use crate::index::constants::{
    ENCODING_BASE, MIN_DIGIT_COUNT, PADDING_CHARACTER, SEPARATOR, SEPARATOR_POSITION,
};
use crate::index::digits::digit_value;

const SEPARATOR_BYTE: u8 = SEPARATOR as u8;
const PADDING_BYTE: u8 = PADDING_CHARACTER as u8;

/// Positions of the structural characters in a syntactically valid code.
struct Layout {
    separator: usize,
    padding: Option<(usize, usize)>,
}

/// Strips leading and trailing ASCII spaces; other whitespace is not part of a code.
pub(crate) fn trim_spaces(code: &str) -> &str {
    code.trim_matches(' ')
}

/// Scans a trimmed code, returning its layout if the grammar allows it.
fn layout(code: &str) -> Option<Layout> {
    let bytes = code.as_bytes();
    if bytes.len() < MIN_DIGIT_COUNT {
        return None;
    }

    let mut separator = None;
    let mut padding: Option<(usize, usize)> = None;
    for (i, &byte) in bytes.iter().enumerate() {
        match byte {
            SEPARATOR_BYTE => {
                if separator.replace(i).is_some() {
                    return None;
                }
            }
            PADDING_BYTE => {
                padding = match padding {
                    None => Some((i, i + 1)),
                    Some((start, end)) if end == i => Some((start, i + 1)),
                    // a second run of padding
                    Some(_) => return None,
                };
            }
            _ if digit_value(byte).is_some() => {}
            _ => return None,
        }
    }

    let separator = separator?;
    if separator > SEPARATOR_POSITION || separator % 2 != 0 {
        return None;
    }

    // Grid digits never appear alone after the separator.
    let trailing = bytes.len() - separator - 1;
    if trailing == 1 {
        return None;
    }

    if let Some((start, end)) = padding {
        let legal = separator == SEPARATOR_POSITION
            && start > 0
            && start % 2 == 0
            && end == separator
            && trailing == 0;
        if !legal {
            return None;
        }
    }

    Some(Layout { separator, padding })
}

/// Determines if a string is a valid Plus Code, full or short.
///
/// Surrounding whitespace is ignored and letters are case-insensitive.
///
/// # Example
/// ```
/// use olc_rs::is_valid;
///
/// assert!(is_valid("8fwc2345+G6"));
/// assert!(is_valid("WC2345+G6g"));
/// assert!(!is_valid("WC2345+G"));
/// assert!(!is_valid("8FWC2_45+G6"));
/// ```
pub fn is_valid(code: &str) -> bool {
    layout(trim_spaces(code)).is_some()
}

/// Determines if a code is a valid short code (missing leading digits).
pub fn is_short(code: &str) -> bool {
    layout(trim_spaces(code)).is_some_and(|layout| layout.separator < SEPARATOR_POSITION)
}

/// Determines if a code is a valid full code.
///
/// Full codes carry their leading digits and the first pair must decode inside
/// the latitude and longitude ranges.
pub fn is_full(code: &str) -> bool {
    let code = trim_spaces(code);
    let Some(layout) = layout(code) else {
        return false;
    };
    if layout.separator < SEPARATOR_POSITION {
        return false;
    }

    let bytes = code.as_bytes();
    let (Some(first_lat), Some(first_lon)) = (digit_value(bytes[0]), digit_value(bytes[1])) else {
        return false;
    };
    (first_lat * ENCODING_BASE) < 2 * LATITUDE_MAX as i64
        && (first_lon * ENCODING_BASE) < 2 * LONGITUDE_MAX as i64
}

/// Number of significant digits in a code, or 0 if the code is invalid.
///
/// # Example
/// ```
/// use olc_rs::code_length;
///
/// assert_eq!(code_length("8FWC2345+G6"), 10);
/// assert_eq!(code_length("7FG49Q00+"), 6);
/// assert_eq!(code_length("2345+G6"), 6);
/// assert_eq!(code_length("not a code"), 0);
/// ```
pub fn code_length(code: &str) -> usize {
    let code = trim_spaces(code);
    let Some(layout) = layout(code) else {
        return 0;
    };
    let before = layout.padding.map_or(layout.separator, |(start, _)| start);
    before + code.len() - layout.separator - 1
}
