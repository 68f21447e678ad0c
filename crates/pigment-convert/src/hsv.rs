//! Conversions out of HSV.
//!
//! Hue wraps at 360 degrees, saturation and value wrap at 101 on the
//! percent scale. HSL and CMYK targets hop through RGB.

use pigment_core::ColorTuple;

use crate::norm::{unit_from_degrees, unit_from_percent};

/// Converts HSV to RGB.
///
/// The hue circle splits into six sectors; the fractional position
/// inside a sector drives the ramped channel while the other two sit at
/// the sector's plateau levels. Channels come out on the 0-255 scale
/// without rounding, so mid-sector hues produce fractional bytes.
///
/// # Example
///
/// ```
/// use pigment_convert::hsv;
///
/// assert_eq!(hsv::to_rgb([120.0, 100.0, 100.0, 1.0]), [0.0, 255.0, 0.0, 1.0]);
/// ```
#[inline]
pub fn to_rgb(hsv: [f64; 4]) -> [f64; 4] {
    let h = unit_from_degrees(hsv[0]);
    let s = unit_from_percent(hsv[1]);
    let v = unit_from_percent(hsv[2]);

    let i = (h * 6.0).floor();
    let f = h * 6.0 - i;
    let p = v * (1.0 - s);
    let q = v * (1.0 - f * s);
    let t = v * (1.0 - (1.0 - f) * s);

    // Truncating remainder: a negative hue survives normalization as a
    // negative sector index and falls through to the last arm.
    let (r, g, b) = match (i as i64) % 6 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };

    [r * 255.0, g * 255.0, b * 255.0, hsv[3]]
}

/// Converts HSV to HSL by way of RGB.
#[inline]
pub fn to_hsl(hsv: [f64; 4]) -> [f64; 4] {
    crate::rgb::to_hsl(to_rgb(hsv))
}

/// Converts HSV to CMYK by way of RGB.
///
/// Inherits the pure-black short-circuit of [`crate::rgb::to_cmyk`].
#[inline]
pub fn to_cmyk(hsv: [f64; 4]) -> ColorTuple {
    crate::rgb::to_cmyk(to_rgb(hsv))
}
