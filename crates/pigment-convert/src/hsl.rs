//! Conversions out of HSL.
//!
//! Hue wraps at 360 degrees, saturation and lightness wrap at 101 on
//! the percent scale. HSV and CMYK targets hop through RGB.

use pigment_core::ColorTuple;

use crate::norm::{unit_from_degrees, unit_from_percent};

/// Piecewise hue ramp shared by the three RGB channels.
///
/// `t` is the channel's hue offset; it wraps once into [0, 1] before
/// the breakpoints at 1/6, 1/2 and 2/3 select the ramp segment.
fn hue_to_channel(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

/// Converts HSL to RGB.
///
/// Achromatic inputs (zero saturation) map lightness straight onto the
/// byte scale and keep fractional values.
///
/// # Note
///
/// Chromatic channels truncate to whole units before scaling to 255,
/// the same quantization as [`crate::cmyk::to_rgb`]. A channel only
/// survives it when the hue ramp lands exactly on 1.0, so most
/// chromatic inputs collapse to a handful of byte levels.
#[inline]
pub fn to_rgb(hsl: [f64; 4]) -> [f64; 4] {
    let h = unit_from_degrees(hsl[0]);
    let s = unit_from_percent(hsl[1]);
    let l = unit_from_percent(hsl[2]);

    if s == 0.0 {
        let gray = l * 255.0;
        return [gray, gray, gray, hsl[3]];
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;

    let r = hue_to_channel(p, q, h + 1.0 / 3.0).trunc() * 255.0;
    let g = hue_to_channel(p, q, h).trunc() * 255.0;
    let b = hue_to_channel(p, q, h - 1.0 / 3.0).trunc() * 255.0;

    [r, g, b, hsl[3]]
}

/// Converts HSL to HSV by way of RGB.
#[inline]
pub fn to_hsv(hsl: [f64; 4]) -> [f64; 4] {
    crate::rgb::to_hsv(to_rgb(hsl))
}

/// Converts HSL to CMYK by way of RGB.
///
/// Inherits the pure-black short-circuit of [`crate::rgb::to_cmyk`],
/// which the channel truncation in [`to_rgb`] triggers for most
/// chromatic inputs.
#[inline]
pub fn to_cmyk(hsl: [f64; 4]) -> ColorTuple {
    crate::rgb::to_cmyk(to_rgb(hsl))
}
