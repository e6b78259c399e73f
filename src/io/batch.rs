use crate::area::CodeArea;
use crate::coord::Coordinate;
use crate::error::OlcError;
use crate::index::{decode, encode};
use rayon::prelude::*;

/// Trait for encoding collections of coordinates in parallel.
///
/// Implemented for `[C]` where `C` is any [`Coordinate`], so it also works on `Vec<C>`.
///
/// # Example
/// ```
/// use olc_rs::EncodePlusCodes;
///
/// let stops = vec![(2.775, 20.375), (-1.2178, 51.3701)];
/// assert_eq!(stops.encode_plus_codes(6), vec!["7FG49Q00+", "9C3W9Q00+"]);
/// ```
pub trait EncodePlusCodes {
    /// Encodes every coordinate at `code_length`, keeping input order.
    fn encode_plus_codes(&self, code_length: usize) -> Vec<String>;
}

impl<C: Coordinate + Sync> EncodePlusCodes for [C] {
    fn encode_plus_codes(&self, code_length: usize) -> Vec<String> {
        self.par_iter()
            .map(|coord| encode(coord, code_length))
            .collect()
    }
}

/// Trait for decoding collections of codes in parallel.
///
/// Implemented for `[S]` where `S: AsRef<str>`, e.g. `Vec<String>` or `[&str]`.
pub trait DecodePlusCodes {
    /// Decodes every code, keeping input order. Fails on the first invalid code.
    fn decode_plus_codes(&self) -> Result<Vec<CodeArea>, OlcError>;
}

impl<S: AsRef<str> + Sync> DecodePlusCodes for [S] {
    fn decode_plus_codes(&self) -> Result<Vec<CodeArea>, OlcError> {
        self.par_iter().map(|code| decode(code.as_ref())).collect()
    }
}
