//! Tuning constants for the color pipeline.
//!
//! All heuristic constants live in one immutable [`Tuning`] value that is
//! passed down explicitly, so alternate settings can be compared side by side.

use crate::error::ColorError;
use crate::tuning::{comma_from_fifths, ratio_for_fifths};

/// Immutable pipeline configuration.
///
/// # Example
///
/// ```
/// use kite_color::Tuning;
///
/// let tuning = Tuning {
///     desaturate_factor: 0.6,
///     ..Tuning::default()
/// };
/// assert!(tuning.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tuning {
    /// Hue (degrees) of an interval that leans neither sharp nor flat
    pub neutral_hue: f64,
    /// Offset (degrees) of the starting hue on either side of neutral
    pub hue_swing: f64,
    /// The comma correction is `comma * cents(9/8) / hue_correction_divisor`
    pub hue_correction_divisor: f64,
    /// Chroma multiplier applied once per distinguishing prime beyond the first
    pub desaturate_factor: f64,
    /// Ratio whose size in cents bounds the comma of a fifths approximation
    pub quarter_tone: f64,
    /// Fifths count at which a wolf is folded out
    pub wolf_threshold: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            neutral_hue: 150.0,
            hue_swing: 72.0,
            hue_correction_divisor: 144.0,
            desaturate_factor: 0.4,
            quarter_tone: 65.0 / 63.0,
            wolf_threshold: 12,
        }
    }
}

impl Tuning {
    /// Check the constants describe a terminating, well-defined pipeline.
    pub fn validate(&self) -> Result<(), ColorError> {
        let finite = [
            ("neutral_hue", self.neutral_hue),
            ("hue_swing", self.hue_swing),
            ("hue_correction_divisor", self.hue_correction_divisor),
            ("desaturate_factor", self.desaturate_factor),
            ("quarter_tone", self.quarter_tone),
        ];
        for (name, value) in finite {
            if !value.is_finite() {
                return Err(ColorError::invalid(format!("{name} must be finite, got {value}")));
            }
        }
        if self.quarter_tone <= 1.0 {
            return Err(ColorError::invalid(format!(
                "quarter_tone must be a ratio above 1, got {}",
                self.quarter_tone
            )));
        }
        if self.hue_correction_divisor == 0.0 {
            return Err(ColorError::invalid("hue_correction_divisor must not be zero"));
        }
        if !(self.desaturate_factor > 0.0 && self.desaturate_factor <= 1.0) {
            return Err(ColorError::invalid(format!(
                "desaturate_factor must be in (0, 1], got {}",
                self.desaturate_factor
            )));
        }
        if self.wolf_threshold == 0 {
            return Err(ColorError::invalid("wolf_threshold must be at least 1"));
        }
        Ok(())
    }

    /// Comma (cents) carried by one wolf: the octave-reduced residual of
    /// `wolf_threshold` stacked fifths. For 12 this is the Pythagorean comma
    /// `cents(3^12 / 2^19)`.
    pub fn wolf_comma(&self) -> Result<f64, ColorError> {
        let stacked = ratio_for_fifths(self.wolf_threshold as i64);
        comma_from_fifths(0, stacked)
    }
}
