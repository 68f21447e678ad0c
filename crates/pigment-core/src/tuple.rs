//! Color tuple representation and boundary validation.
//!
//! A color is a flat sequence of `f64` channel values with a trailing
//! alpha in [0, 1]. RGB, HSV and HSL tuples have four elements, CMYK
//! five. Alpha may be omitted at API boundaries, in which case it
//! defaults to fully opaque.

use crate::colorspace::ColorSpace;
use crate::error::{Error, Result};

/// Ordered channel values for one color, alpha last.
pub type ColorTuple = Vec<f64>;

/// Alpha appended when a tuple omits it.
pub const DEFAULT_ALPHA: f64 = 1.0;

/// Validates `tuple` against `space` and returns it with alpha in place.
///
/// A tuple that is exactly one element short gets [`DEFAULT_ALPHA`]
/// appended; a full-length tuple is returned unchanged. Channel values
/// themselves are not inspected.
///
/// # Errors
///
/// [`Error::InvalidTuple`] for any other length.
///
/// # Example
///
/// ```
/// use pigment_core::{with_default_alpha, ColorSpace};
///
/// let padded = with_default_alpha(ColorSpace::Rgb, &[255.0, 0.0, 0.0]).unwrap();
/// assert_eq!(padded, vec![255.0, 0.0, 0.0, 1.0]);
///
/// assert!(with_default_alpha(ColorSpace::Rgb, &[255.0, 0.0]).is_err());
/// ```
pub fn with_default_alpha(space: ColorSpace, tuple: &[f64]) -> Result<ColorTuple> {
    let full = space.tuple_len();
    if tuple.len() == full {
        Ok(tuple.to_vec())
    } else if tuple.len() + 1 == full {
        let mut padded = Vec::with_capacity(full);
        padded.extend_from_slice(tuple);
        padded.push(DEFAULT_ALPHA);
        Ok(padded)
    } else {
        Err(Error::invalid_tuple(space, tuple.len()))
    }
}
