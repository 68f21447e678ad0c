//! # pigment-core
//!
//! Core vocabulary for the pigment color conversion crates.
//!
//! This crate provides the foundational types shared by the rest of the
//! workspace:
//!
//! - [`ColorSpace`] - The four supported color models and their static metadata
//! - [`ColorTuple`] - Flat `f64` channel sequences with a trailing alpha
//! - [`Error`], [`Result`] - Unified error handling
//!
//! ## Crate Structure
//!
//! This crate is the foundation of the workspace and has no internal
//! dependencies. The other pigment crates build on it:
//!
//! ```text
//! pigment-core (this crate)
//!    ^
//!    |
//!    +-- pigment-convert (pairwise conversion routines)
//!    +-- pigment (Color value object, unified API)
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` - Enable serialization for [`ColorSpace`]

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod colorspace;
pub mod error;
pub mod tuple;

// Re-exports for convenience
pub use colorspace::ColorSpace;
pub use error::{Error, Result};
pub use tuple::{with_default_alpha, ColorTuple, DEFAULT_ALPHA};

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```
/// use pigment_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::colorspace::ColorSpace;
    pub use crate::error::{Error, Result};
    pub use crate::tuple::{with_default_alpha, ColorTuple, DEFAULT_ALPHA};
}
