pub mod constants;
mod digits;
mod projection;
mod shorten;
mod syntax;

pub use constants::{
    CODE_ALPHABET, DEFAULT_CODE_LENGTH, GRID_CODE_LENGTH, MAX_DIGIT_COUNT, MIN_DIGIT_COUNT,
    PADDING_CHARACTER, PAIR_CODE_LENGTH, SEPARATOR, SEPARATOR_POSITION,
};
pub use digits::{
    compute_latitude_precision, compute_longitude_precision, decode, encode, encode_default,
};
pub(crate) use digits::normalize_code_length;
pub use shorten::{recover_nearest, shorten};
pub use syntax::{code_length, is_full, is_short, is_valid};
