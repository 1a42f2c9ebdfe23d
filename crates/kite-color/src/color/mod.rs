//! Color types and conversion utilities
//!
//! - [`Oklch`]: the aggregator's output, hue in degrees
//! - [`Oklab`]: Cartesian form used for conversion
//! - [`LinearRgb`]: linear-light sRGB, unclamped
//! - [`Srgb8`]: gamma-encoded 8-bit output
//!
//! The [`gamut`] module finds the sRGB cusp of a hue.

pub mod gamut;
mod oklab;
mod srgb;

pub use gamut::{find_cusp, GamutCusp, Region};
pub use oklab::{LinearRgb, Oklab, Oklch};
pub use srgb::{gamma_encode, Srgb8};
