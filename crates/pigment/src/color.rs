//! The [`Color`] value object.

use std::sync::OnceLock;

use pigment_convert::convert;
use pigment_core::{with_default_alpha, ColorSpace, ColorTuple, Result};

/// An immutable color with lazily cached representations.
///
/// A `Color` remembers the tuple and space it was constructed from.
/// Each accessor converts on first use and caches the result, so
/// repeated access to the same space returns the same stored tuple
/// without reconverting.
///
/// ```
/// use pigment::{Color, ColorSpace};
///
/// let tomato = Color::new(&[255.0, 99.0, 71.0], ColorSpace::Rgb).unwrap();
/// let hsl = tomato.hsl();
/// assert_eq!(hsl.len(), 4);
/// assert_eq!(tomato.alpha(), 1.0);
/// ```
///
/// # Thread Safety
///
/// The cache slots are [`OnceLock`]s, so a `Color` can be shared across
/// threads behind an `Arc`; each representation is computed at most
/// once no matter how many threads race on the accessor.
#[derive(Debug, Clone)]
pub struct Color {
    origin: ColorSpace,
    origin_tuple: ColorTuple,
    slots: [OnceLock<ColorTuple>; ColorSpace::COUNT],
}

impl Color {
    /// Creates a color from a tuple in the given space.
    ///
    /// The tuple may include its alpha or omit it; a missing alpha
    /// defaults to opaque.
    ///
    /// # Errors
    ///
    /// [`pigment_core::Error::InvalidTuple`] when the tuple length fits
    /// `space` neither with nor without alpha.
    pub fn new(tuple: &[f64], space: ColorSpace) -> Result<Self> {
        let origin_tuple = with_default_alpha(space, tuple)?;
        let slots: [OnceLock<ColorTuple>; ColorSpace::COUNT] = Default::default();
        slots[space.index()].get_or_init(|| origin_tuple.clone());
        Ok(Self {
            origin: space,
            origin_tuple,
            slots,
        })
    }

    /// Returns this color in `space`, converting and caching on first
    /// use.
    pub fn get(&self, space: ColorSpace) -> &[f64] {
        // The origin slot is seeded at construction, so the closure
        // only ever runs for a different space and the routing table
        // always has an entry. The fallback keeps the accessor total.
        self.slots[space.index()].get_or_init(|| {
            convert(self.origin, space, &self.origin_tuple)
                .unwrap_or_else(|_| self.origin_tuple.clone())
        })
    }

    /// Returns the RGB representation, `[r, g, b, alpha]` on 0-255.
    #[inline]
    pub fn rgb(&self) -> &[f64] {
        self.get(ColorSpace::Rgb)
    }

    /// Returns the HSV representation, `[h, s, v, alpha]`.
    #[inline]
    pub fn hsv(&self) -> &[f64] {
        self.get(ColorSpace::Hsv)
    }

    /// Returns the HSL representation, `[h, s, l, alpha]`.
    #[inline]
    pub fn hsl(&self) -> &[f64] {
        self.get(ColorSpace::Hsl)
    }

    /// Returns the CMYK representation, `[c, m, y, k, alpha]`.
    #[inline]
    pub fn cmyk(&self) -> &[f64] {
        self.get(ColorSpace::Cmyk)
    }

    /// The space this color was constructed in.
    #[inline]
    pub fn origin_space(&self) -> ColorSpace {
        self.origin
    }

    /// The construction tuple, alpha included.
    #[inline]
    pub fn origin_tuple(&self) -> &[f64] {
        &self.origin_tuple
    }

    /// The alpha channel of the construction tuple.
    #[inline]
    pub fn alpha(&self) -> f64 {
        self.origin_tuple[self.origin_tuple.len() - 1]
    }
}
