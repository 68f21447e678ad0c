//! Dynamic routing over the conversion routines.
//!
//! A constant table maps every ordered pair of color spaces to its
//! routine; [`convert`] is the runtime entry point for callers that
//! pick spaces from data instead of calling the typed modules directly.

use pigment_core::{with_default_alpha, ColorSpace, ColorTuple, Error, Result};

/// A routed conversion over an alpha-padded tuple.
type RouteFn = fn(&[f64]) -> ColorTuple;

// Slice lengths are guaranteed by the dispatcher, which pads and
// validates before routing.
fn quad(tuple: &[f64]) -> [f64; 4] {
    [tuple[0], tuple[1], tuple[2], tuple[3]]
}

fn quint(tuple: &[f64]) -> [f64; 5] {
    [tuple[0], tuple[1], tuple[2], tuple[3], tuple[4]]
}

fn rgb_to_hsv(tuple: &[f64]) -> ColorTuple {
    crate::rgb::to_hsv(quad(tuple)).to_vec()
}

fn rgb_to_hsl(tuple: &[f64]) -> ColorTuple {
    crate::rgb::to_hsl(quad(tuple)).to_vec()
}

fn rgb_to_cmyk(tuple: &[f64]) -> ColorTuple {
    crate::rgb::to_cmyk(quad(tuple))
}

fn hsv_to_rgb(tuple: &[f64]) -> ColorTuple {
    crate::hsv::to_rgb(quad(tuple)).to_vec()
}

fn hsv_to_hsl(tuple: &[f64]) -> ColorTuple {
    crate::hsv::to_hsl(quad(tuple)).to_vec()
}

fn hsv_to_cmyk(tuple: &[f64]) -> ColorTuple {
    crate::hsv::to_cmyk(quad(tuple))
}

fn hsl_to_rgb(tuple: &[f64]) -> ColorTuple {
    crate::hsl::to_rgb(quad(tuple)).to_vec()
}

fn hsl_to_hsv(tuple: &[f64]) -> ColorTuple {
    crate::hsl::to_hsv(quad(tuple)).to_vec()
}

fn hsl_to_cmyk(tuple: &[f64]) -> ColorTuple {
    crate::hsl::to_cmyk(quad(tuple))
}

fn cmyk_to_rgb(tuple: &[f64]) -> ColorTuple {
    crate::cmyk::to_rgb(quint(tuple)).to_vec()
}

fn cmyk_to_hsv(tuple: &[f64]) -> ColorTuple {
    crate::cmyk::to_hsv(quint(tuple)).to_vec()
}

fn cmyk_to_hsl(tuple: &[f64]) -> ColorTuple {
    crate::cmyk::to_hsl(quint(tuple)).to_vec()
}

/// Routing table indexed by `[from][to]` ordinals. The diagonal stays
/// empty: same-space requests are not conversions.
const ROUTES: [[Option<RouteFn>; ColorSpace::COUNT]; ColorSpace::COUNT] = [
    // from RGB
    [None, Some(rgb_to_hsv), Some(rgb_to_hsl), Some(rgb_to_cmyk)],
    // from HSV
    [Some(hsv_to_rgb), None, Some(hsv_to_hsl), Some(hsv_to_cmyk)],
    // from HSL
    [Some(hsl_to_rgb), Some(hsl_to_hsv), None, Some(hsl_to_cmyk)],
    // from CMYK
    [Some(cmyk_to_rgb), Some(cmyk_to_hsv), Some(cmyk_to_hsl), None],
];

/// Converts `tuple` from one color space to another.
///
/// The tuple may carry its alpha or omit it; a missing alpha defaults
/// to opaque before routing. Route lookup happens first, so a
/// same-space request fails with [`Error::UnsupportedConversion`] even
/// when the tuple length is wrong.
///
/// # Example
///
/// ```
/// use pigment_convert::convert;
/// use pigment_core::ColorSpace;
///
/// let hsl = convert(ColorSpace::Rgb, ColorSpace::Hsl, &[255.0, 0.0, 0.0])?;
/// assert_eq!(hsl, vec![0.0, 100.0, 50.0, 1.0]);
/// # Ok::<(), pigment_core::Error>(())
/// ```
///
/// # Errors
///
/// [`Error::UnsupportedConversion`] when `from == to`, and
/// [`Error::InvalidTuple`] when the tuple length fits `from` neither
/// with nor without alpha.
pub fn convert(from: ColorSpace, to: ColorSpace, tuple: &[f64]) -> Result<ColorTuple> {
    let route = ROUTES[from.index()][to.index()]
        .ok_or_else(|| Error::unsupported_conversion(from, to))?;
    let padded = with_default_alpha(from, tuple)?;
    Ok(route(&padded))
}
