//! # pigment
//!
//! Color conversions between RGB, HSV, HSL and CMYK, with a value
//! object that caches every representation it computes.
//!
//! The quickest way in is [`Color`]:
//!
//! ```
//! use pigment::{Color, ColorSpace};
//!
//! let tomato = Color::new(&[255.0, 99.0, 71.0], ColorSpace::Rgb).unwrap();
//!
//! let hsl = tomato.hsl(); // converted now
//! let again = tomato.hsl(); // served from the cache
//! assert_eq!(hsl, again);
//! ```
//!
//! One-off conversions skip the value object and use [`convert`] or the
//! typed routines directly:
//!
//! ```
//! use pigment::{convert, ColorSpace};
//!
//! let hsv = convert(ColorSpace::Rgb, ColorSpace::Hsv, &[255.0, 0.0, 0.0])?;
//! assert_eq!(hsv, vec![0.0, 100.0, 100.0, 1.0]);
//! # Ok::<(), pigment::Error>(())
//! ```
//!
//! # Architecture
//!
//! ```text
//! +----------------------------------+
//! |             pigment              |  Color value object, cache
//! +----------------------------------+
//! |          pigment-convert         |  pairwise routines, routing
//! +----------------------------------+
//! |           pigment-core           |  spaces, tuples, errors
//! +----------------------------------+
//! ```
//!
//! # Conventions
//!
//! - RGB channels are 0-255; hue is 0-360 degrees; saturation, value,
//!   lightness and the CMYK inks are 0-100.
//! - Every tuple carries a trailing alpha in 0-1, defaulted to opaque
//!   when omitted.
//! - Out-of-range inputs wrap instead of clamping; an RGB channel of
//!   300 reads as 44.
//! - Two routines quantize channels before scaling, and pure black
//!   short-circuits its CMYK form; see [`pigment_convert::cmyk::to_rgb`],
//!   [`pigment_convert::hsl::to_rgb`] and [`pigment_convert::rgb::to_cmyk`].
//!
//! # Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` for [`ColorSpace`].

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod color;

pub use color::Color;
pub use pigment_core::{with_default_alpha, ColorSpace, ColorTuple, Error, Result, DEFAULT_ALPHA};
pub use pigment_convert::convert;
pub use pigment_convert::{cmyk, hsl, hsv, rgb};

/// Commonly used types, importable in one line.
pub mod prelude {
    pub use crate::{convert, Color, ColorSpace, ColorTuple, Error, Result};
}
