//! Channel normalization helpers.
//!
//! Raw channel values truncate toward zero and wrap by an integer
//! modulus before scaling to the unit interval. The remainder keeps the
//! dividend's sign, so negative inputs stay negative. The `f64 as i64`
//! casts saturate and map NaN to 0, which keeps every helper total for
//! any input.

/// Byte channel (0-255) to unit scale, wrapping at 256.
#[inline]
pub(crate) fn unit_from_byte(v: f64) -> f64 {
    (v as i64 % 256) as f64 / 255.0
}

/// CMYK percent channel to unit scale, wrapping at 100.
#[inline]
pub(crate) fn unit_from_cmyk_percent(v: f64) -> f64 {
    (v as i64 % 100) as f64 / 100.0
}

/// HSV/HSL percent channel to unit scale, wrapping at 101 so that 100
/// keeps meaning full scale.
#[inline]
pub(crate) fn unit_from_percent(v: f64) -> f64 {
    (v as i64 % 101) as f64 / 100.0
}

/// Hue in degrees to unit scale, wrapping at 360.
#[inline]
pub(crate) fn unit_from_degrees(v: f64) -> f64 {
    (v as i64 % 360) as f64 / 360.0
}
