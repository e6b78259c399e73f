/// The 20 symbols used by Plus Codes, in digit-value order.
pub const CODE_ALPHABET: &[u8; 20] = b"23456789CFGHJMPQRVWX";

/// Separator between the 8th and 9th digits of a full code.
pub const SEPARATOR: char = '+';

/// Number of digits before the separator in a full code.
pub const SEPARATOR_POSITION: usize = 8;

/// Fills unused positions before the separator in codes shorter than 8 digits.
pub const PADDING_CHARACTER: char = '0';

/// Code length used when none is requested.
pub const DEFAULT_CODE_LENGTH: usize = 10;

/// Minimum number of significant digits.
pub const MIN_DIGIT_COUNT: usize = 2;

/// Maximum number of significant digits (10 pair digits + 5 grid digits).
pub const MAX_DIGIT_COUNT: usize = 15;

/// Number of digits in the pair section.
pub const PAIR_CODE_LENGTH: usize = 10;

/// Number of digits in the grid section.
pub const GRID_CODE_LENGTH: usize = 5;

pub(crate) const ENCODING_BASE: i64 = 20;
pub(crate) const GRID_COLUMNS: i64 = 4;
pub(crate) const GRID_ROWS: i64 = 5;

/// Inverse of the pair-section precision (1/8000 degree).
pub(crate) const PAIR_PRECISION_INVERSE: i64 = 8000;
/// Latitude units per degree at full grid precision.
pub(crate) const GRID_LAT_PRECISION_INVERSE: i64 =
    PAIR_PRECISION_INVERSE * GRID_ROWS.pow(GRID_CODE_LENGTH as u32);
/// Longitude units per degree at full grid precision.
pub(crate) const GRID_LON_PRECISION_INVERSE: i64 =
    PAIR_PRECISION_INVERSE * GRID_COLUMNS.pow(GRID_CODE_LENGTH as u32);
/// Offset shifting latitude units to be non-negative.
pub(crate) const GRID_LAT_SCALE: i64 = 90 * GRID_LAT_PRECISION_INVERSE;
/// Offset shifting longitude units to be non-negative.
pub(crate) const GRID_LON_SCALE: i64 = 180 * GRID_LON_PRECISION_INVERSE;

/// 20^0, 20^1, 20^2
pub(crate) const POWERS_OF_20: [f64; 3] = [1.0, 20.0, 400.0];
/// 20^0, 20^-1, 20^-2, 20^-3
pub(crate) const INVERSE_POWERS_OF_20: [f64; 4] = [1.0, 0.05, 0.0025, 0.000125];

/// Removal lengths tried by shortening, longest first.
pub(crate) const SHORTEN_REMOVAL_LENGTHS: [usize; 3] = [8, 6, 4];
/// Fraction of a cell the reference may be off-center and still allow shortening.
pub(crate) const SHORTEN_SAFETY_FACTOR: f64 = 0.3;

const fn build_digit_values() -> [i8; 128] {
    let mut values = [-1i8; 128];
    let mut i = 0;
    while i < CODE_ALPHABET.len() {
        let symbol = CODE_ALPHABET[i];
        values[symbol as usize] = i as i8;
        values[symbol.to_ascii_lowercase() as usize] = i as i8;
        i += 1;
    }
    values
}

/// ASCII → digit value, -1 for characters outside the alphabet.
pub(crate) const DIGIT_VALUES: [i8; 128] = build_digit_values();
