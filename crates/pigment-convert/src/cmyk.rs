//! Conversions out of CMYK.
//!
//! All four ink channels wrap at 100 on the percent scale. HSV and HSL
//! targets hop through RGB.

use crate::norm::unit_from_cmyk_percent;

/// Converts CMYK to RGB.
///
/// Each channel combines its ink coverage with the key, capped at full
/// coverage, then inverts to light.
///
/// # Note
///
/// Channels truncate to whole units before scaling to 255, so a channel
/// is either 0 or 255: any ink or key at all blacks it out, and only
/// zero total coverage leaves it lit. The same quantization appears in
/// [`crate::hsl::to_rgb`].
#[inline]
pub fn to_rgb(cmyk: [f64; 5]) -> [f64; 4] {
    let c = unit_from_cmyk_percent(cmyk[0]);
    let m = unit_from_cmyk_percent(cmyk[1]);
    let y = unit_from_cmyk_percent(cmyk[2]);
    let k = unit_from_cmyk_percent(cmyk[3]);

    let r = (1.0 - (c * (1.0 - k) + k).min(1.0)).trunc() * 255.0;
    let g = (1.0 - (m * (1.0 - k) + k).min(1.0)).trunc() * 255.0;
    let b = (1.0 - (y * (1.0 - k) + k).min(1.0)).trunc() * 255.0;

    [r, g, b, cmyk[4]]
}

/// Converts CMYK to HSV by way of RGB.
#[inline]
pub fn to_hsv(cmyk: [f64; 5]) -> [f64; 4] {
    crate::rgb::to_hsv(to_rgb(cmyk))
}

/// Converts CMYK to HSL by way of RGB.
#[inline]
pub fn to_hsl(cmyk: [f64; 5]) -> [f64; 4] {
    crate::rgb::to_hsl(to_rgb(cmyk))
}
