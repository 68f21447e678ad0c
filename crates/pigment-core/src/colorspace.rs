//! Color space identifiers and their static metadata.
//!
//! [`ColorSpace`] names the four supported color models and carries the
//! small amount of per-space data the rest of the workspace needs:
//! channel counts, full tuple lengths and a stable ordinal for indexing
//! fixed-size tables.
//!
//! # Example
//!
//! ```
//! use pigment_core::ColorSpace;
//!
//! let space: ColorSpace = "cmyk".parse().unwrap();
//! assert_eq!(space, ColorSpace::Cmyk);
//! assert_eq!(space.name(), "CMYK");
//! assert_eq!(space.tuple_len(), 5);
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Supported color spaces.
///
/// The ordinal returned by [`index`](ColorSpace::index) is stable and
/// indexes per-space tables: the conversion routing table in
/// `pigment-convert` and the cache slots of the `Color` value object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum ColorSpace {
    /// Red/green/blue, channels in 0-255.
    Rgb,
    /// Hue/saturation/value: hue in degrees 0-360, the rest in percent 0-100.
    Hsv,
    /// Hue/saturation/lightness, same ranges as HSV.
    Hsl,
    /// Cyan/magenta/yellow/key, channels in percent 0-100.
    Cmyk,
}

impl ColorSpace {
    /// Number of supported spaces.
    pub const COUNT: usize = 4;

    /// All spaces in ordinal order.
    pub const ALL: [ColorSpace; Self::COUNT] = [Self::Rgb, Self::Hsv, Self::Hsl, Self::Cmyk];

    /// Stable ordinal for table indexing.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Canonical uppercase name.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Rgb => "RGB",
            Self::Hsv => "HSV",
            Self::Hsl => "HSL",
            Self::Cmyk => "CMYK",
        }
    }

    /// Number of color channels, alpha not counted.
    #[inline]
    pub const fn channels(self) -> usize {
        match self {
            Self::Cmyk => 4,
            _ => 3,
        }
    }

    /// Full tuple length including the trailing alpha.
    #[inline]
    pub const fn tuple_len(self) -> usize {
        self.channels() + 1
    }
}

impl fmt::Display for ColorSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorSpace {
    type Err = Error;

    /// Parses a space name, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "rgb" => Ok(Self::Rgb),
            "hsv" => Ok(Self::Hsv),
            "hsl" => Ok(Self::Hsl),
            "cmyk" => Ok(Self::Cmyk),
            _ => Err(Error::invalid_space(s)),
        }
    }
}
