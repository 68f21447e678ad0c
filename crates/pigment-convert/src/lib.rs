//! # pigment-convert
//!
//! Pairwise color space conversions for RGB, HSV, HSL and CMYK.
//!
//! Twelve routines cover every ordered pair of distinct spaces. Six are
//! direct formulas; the other six hop through RGB, so the cylindrical
//! and subtractive spaces never talk to each other directly:
//!
//! ```text
//! HSV <---> RGB <---> CMYK
//!            ^
//!            |
//!           HSL
//! ```
//!
//! Use the typed per-space modules when the source space is known at
//! compile time, or [`convert`] to route dynamically:
//!
//! ```
//! use pigment_convert::{convert, rgb};
//! use pigment_core::ColorSpace;
//!
//! // Typed: fixed-size tuples in and out.
//! let hsl = rgb::to_hsl([255.0, 0.0, 0.0, 1.0]);
//! assert_eq!(hsl, [0.0, 100.0, 50.0, 1.0]);
//!
//! // Routed: slices in, alpha defaulted when omitted.
//! let hsl = convert(ColorSpace::Rgb, ColorSpace::Hsl, &[255.0, 0.0, 0.0]).unwrap();
//! assert_eq!(hsl, vec![0.0, 100.0, 50.0, 1.0]);
//! ```
//!
//! # Conventions
//!
//! Channel values wrap by integer modulus instead of clamping: a byte
//! channel of 300 reads as 44. Two routines quantize channels to whole
//! units before scaling; see [`cmyk::to_rgb`] and [`hsl::to_rgb`].

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod cmyk;
pub mod hsl;
pub mod hsv;
mod norm;
pub mod rgb;
mod route;

pub use route::convert;
