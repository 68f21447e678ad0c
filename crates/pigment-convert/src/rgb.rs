//! Conversions out of RGB.
//!
//! Input channels are bytes (0-255) with a trailing alpha; each channel
//! wraps at 256 before normalization, so out-of-range values alias
//! instead of clamping.
//!
//! # Ranges
//!
//! - Input: `[r, g, b, alpha]`, channels 0-255
//! - Output: hue 0-360, saturation/value/lightness 0-100, CMYK 0-100

use pigment_core::ColorTuple;

use crate::norm::unit_from_byte;

/// Shared hue sector for HSV and HSL, in [0, 1).
///
/// Ties between channels resolve in R, G, B order; achromatic inputs
/// (zero spread) pin the hue to 0.
fn hue(r: f64, g: f64, b: f64, max: f64, d: f64) -> f64 {
    if d == 0.0 {
        return 0.0;
    }
    let h = if r == max {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if g == max {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };
    h / 6.0
}

/// Converts RGB to HSV.
///
/// Hue lands in degrees, saturation and value in percent; alpha passes
/// through unchanged.
///
/// # Example
///
/// ```
/// use pigment_convert::rgb;
///
/// assert_eq!(rgb::to_hsv([255.0, 0.0, 0.0, 1.0]), [0.0, 100.0, 100.0, 1.0]);
/// ```
#[inline]
pub fn to_hsv(rgb: [f64; 4]) -> [f64; 4] {
    let r = unit_from_byte(rgb[0]);
    let g = unit_from_byte(rgb[1]);
    let b = unit_from_byte(rgb[2]);

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let d = max - min;

    let v = max;
    let s = if max == 0.0 { 0.0 } else { d / max };
    let h = hue(r, g, b, max, d);

    [h * 360.0, s * 100.0, v * 100.0, rgb[3]]
}

/// Converts RGB to HSL.
///
/// Hue lands in degrees, saturation and lightness in percent; alpha
/// passes through unchanged. The hue computation is shared with
/// [`to_hsv`], including its R, G, B tie-break order.
///
/// # Example
///
/// ```
/// use pigment_convert::rgb;
///
/// assert_eq!(rgb::to_hsl([0.0, 0.0, 0.0, 1.0]), [0.0, 0.0, 0.0, 1.0]);
/// ```
#[inline]
pub fn to_hsl(rgb: [f64; 4]) -> [f64; 4] {
    let r = unit_from_byte(rgb[0]);
    let g = unit_from_byte(rgb[1]);
    let b = unit_from_byte(rgb[2]);

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let d = max - min;

    let l = (max + min) / 2.0;
    let s = if d == 0.0 {
        0.0
    } else if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };
    let h = hue(r, g, b, max, d);

    [h * 360.0, s * 100.0, l * 100.0, rgb[3]]
}

/// Converts RGB to CMYK.
///
/// Ink channels land in percent with alpha passed through, five
/// elements in total.
///
/// # Note
///
/// Pure black short-circuits to the four-element tuple `[0, 0, 0, 1]`:
/// full key on the unit scale, with the input alpha dropped rather than
/// appended. Callers therefore see two different output lengths from
/// this routine.
#[inline]
pub fn to_cmyk(rgb: [f64; 4]) -> ColorTuple {
    let r = unit_from_byte(rgb[0]);
    let g = unit_from_byte(rgb[1]);
    let b = unit_from_byte(rgb[2]);

    if r == 0.0 && g == 0.0 && b == 0.0 {
        return vec![0.0, 0.0, 0.0, 1.0];
    }

    let k = (1.0 - r).min(1.0 - g).min(1.0 - b);
    let c = (1.0 - r - k) / (1.0 - k);
    let m = (1.0 - g - k) / (1.0 - k);
    let y = (1.0 - b - k) / (1.0 - k);

    vec![c * 100.0, m * 100.0, y * 100.0, k * 100.0, rgb[3]]
}
