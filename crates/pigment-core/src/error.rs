//! Error types for pigment operations.
//!
//! # Overview
//!
//! The [`Error`] enum covers every failure mode in the pigment crates:
//!
//! - Parsing an unrecognized color space name
//! - Requesting a conversion with no registered routine
//! - Supplying a tuple whose length does not fit its color space
//!
//! # Usage
//!
//! ```rust
//! use pigment_core::{ColorSpace, Result};
//!
//! fn parse_space(name: &str) -> Result<ColorSpace> {
//!     name.parse()
//! }
//!
//! assert!(parse_space("hsl").is_ok());
//! assert!(parse_space("xyz").is_err());
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - For derive macro error implementation

use thiserror::Error;

use crate::colorspace::ColorSpace;

/// Result type alias using [`Error`] as the error type.
///
/// Convenience alias for `std::result::Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while parsing spaces, validating tuples, or
/// routing conversions.
///
/// This enum uses [`thiserror`] for automatic [`std::error::Error`] and
/// [`std::fmt::Display`] implementations.
#[derive(Debug, Error)]
pub enum Error {
    /// Color space name is not recognized.
    ///
    /// Returned when parsing a [`ColorSpace`] from a string. The enum
    /// makes invalid spaces unrepresentable everywhere else.
    #[error("invalid color space: {0}")]
    InvalidSpace(String),

    /// No conversion routine is registered for the requested pair.
    ///
    /// Every ordered pair of distinct spaces has a routine, so this
    /// signals a same-space request rather than a gap in the table.
    #[error("unsupported conversion: {from} -> {to}")]
    UnsupportedConversion {
        /// Source color space.
        from: ColorSpace,
        /// Target color space.
        to: ColorSpace,
    },

    /// Tuple length does not fit the color space.
    ///
    /// A tuple may omit the trailing alpha (one element short); any
    /// other length mismatch is rejected.
    #[error("invalid {space} tuple: expected {expected} elements (alpha optional), got {got}")]
    InvalidTuple {
        /// Color space the tuple was interpreted in.
        space: ColorSpace,
        /// Full tuple length for the space, alpha included.
        expected: usize,
        /// Number of elements actually supplied.
        got: usize,
    },
}

impl Error {
    /// Creates an [`Error::InvalidSpace`] error.
    #[inline]
    pub fn invalid_space(name: impl Into<String>) -> Self {
        Self::InvalidSpace(name.into())
    }

    /// Creates an [`Error::UnsupportedConversion`] error.
    #[inline]
    pub fn unsupported_conversion(from: ColorSpace, to: ColorSpace) -> Self {
        Self::UnsupportedConversion { from, to }
    }

    /// Creates an [`Error::InvalidTuple`] error for `space`.
    #[inline]
    pub fn invalid_tuple(space: ColorSpace, got: usize) -> Self {
        Self::InvalidTuple {
            space,
            expected: space.tuple_len(),
            got,
        }
    }

    /// Returns `true` if this is a conversion routing error.
    #[inline]
    pub fn is_unsupported_conversion(&self) -> bool {
        matches!(self, Self::UnsupportedConversion { .. })
    }

    /// Returns `true` if this is a tuple validation error.
    #[inline]
    pub fn is_invalid_tuple(&self) -> bool {
        matches!(self, Self::InvalidTuple { .. })
    }
}
