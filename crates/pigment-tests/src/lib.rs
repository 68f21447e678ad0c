//! Integration tests across the pigment workspace.
//!
//! Everything here drives the public API the way a downstream user
//! would: dynamic routing, the cached value object, error surfaces and
//! cross-space round trips. Per-routine unit tests live next to the
//! routines in `pigment-convert`.

#[cfg(test)]
mod golden;
