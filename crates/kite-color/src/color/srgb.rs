//! 8-bit sRGB output
//!
//! Gamma-encodes linear light with the IEC 61966-2-1 transfer function.
//! Out-of-gamut channels are clamped, never reported.

use std::fmt;

use super::oklab::{LinearRgb, Oklab, Oklch};

/// IEC 61966-2-1: linear to sRGB, input clamped to `[0, 1]`.
#[inline]
pub fn gamma_encode(linear: f64) -> f64 {
    let linear = linear.clamp(0.0, 1.0);
    if linear >= 0.0031308 {
        1.055 * linear.powf(1.0 / 2.4) - 0.055
    } else {
        12.92 * linear
    }
}

#[inline]
fn to_channel(linear: f64) -> u8 {
    // NaN saturates to 0 in the float-to-int cast
    (255.0 * gamma_encode(linear)).round().clamp(0.0, 255.0) as u8
}

/// A display-ready sRGB color with 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Srgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Srgb8 {
    #[inline]
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channels as `[R, G, B]`.
    #[inline]
    pub fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Lowercase `#rrggbb`.
    ///
    /// # Example
    ///
    /// ```
    /// use kite_color::Srgb8;
    ///
    /// assert_eq!(Srgb8::new(232, 186, 135).to_hex(), "#e8ba87");
    /// ```
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Srgb8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl From<LinearRgb> for Srgb8 {
    fn from(linear: LinearRgb) -> Self {
        Self {
            r: to_channel(linear.r),
            g: to_channel(linear.g),
            b: to_channel(linear.b),
        }
    }
}

impl From<Oklab> for Srgb8 {
    fn from(lab: Oklab) -> Self {
        Self::from(LinearRgb::from(lab))
    }
}

impl From<Oklch> for Srgb8 {
    /// Oklch → Oklab → linear sRGB → gamma-encoded 8-bit sRGB.
    fn from(lch: Oklch) -> Self {
        Self::from(Oklab::from(lch))
    }
}
