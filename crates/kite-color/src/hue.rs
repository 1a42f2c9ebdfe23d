//! Hue mapper
//!
//! Places an interval on the color wheel from its fifths/comma decomposition.
//! Flat-leaning intervals start one swing above the neutral hue, sharp-leaning
//! ones one swing below, and the comma pushes the hue further out. The result
//! never crosses the neutral hue and never leaves the half wheel on its side.
//!
//! With the default tuning this gives hues in `[-30, 330]` degrees.

use crate::config::Tuning;
use crate::error::ColorError;
use crate::tuning::{approximate_ratio, FifthsAndComma};

/// Cents in a 9/8 whole tone, the unit of the comma correction.
fn whole_tone_cents() -> f64 {
    1200.0 * (9.0f64 / 8.0).log2()
}

/// Sign test with both zeros counted as non-negative.
#[inline]
fn is_negative(value: f64) -> bool {
    value < 0.0
}

/// Hue (degrees) for a fifths count and a comma in cents.
///
/// Near the center of the chain of fifths (`|fifths| < 2`) the comma decides
/// the side of the wheel; further out the fifths count does. The unison
/// (no fifths, no comma) sits on the neutral hue.
///
/// # Example
///
/// ```
/// use kite_color::{hue::hue_from_fifths_and_comma, Tuning};
///
/// let tuning = Tuning::default();
/// assert_eq!(hue_from_fifths_and_comma(0, 0.0, &tuning), 150.0);
/// // Pure fifth: sharp side, no comma correction
/// assert_eq!(hue_from_fifths_and_comma(1, 0.0, &tuning), 78.0);
/// ```
pub fn hue_from_fifths_and_comma(fifths: i64, comma: f64, tuning: &Tuning) -> f64 {
    let neutral = tuning.neutral_hue;
    if fifths == 0 && comma == 0.0 {
        return neutral;
    }

    let selector = if fifths.abs() < 2 { comma } else { fifths as f64 };
    let starting_hue = if is_negative(selector) {
        neutral + tuning.hue_swing
    } else {
        neutral - tuning.hue_swing
    };
    let result_hue = starting_hue - comma * whole_tone_cents() / tuning.hue_correction_divisor;

    if starting_hue > neutral {
        result_hue.clamp(neutral, neutral + 180.0)
    } else {
        result_hue.clamp(neutral - 180.0, neutral)
    }
}

/// Hue of a single prime harmonic, or of its undertone `1/prime`.
pub fn hue_from_prime(prime: u64, undertone: bool, tuning: &Tuning) -> Result<f64, ColorError> {
    if prime < 2 {
        return Err(ColorError::invalid(format!("not a prime: {prime}")));
    }
    let ratio = if undertone {
        1.0 / prime as f64
    } else {
        prime as f64
    };
    let fc = FifthsAndComma::of_ratio(ratio, tuning)?;
    Ok(hue_from_fifths_and_comma(fc.fifths, fc.comma, tuning))
}

/// Hue of an interval given by its size in cents.
pub fn hue_from_cents(cents: f64, tuning: &Tuning) -> Result<f64, ColorError> {
    let ratio = approximate_ratio(cents);
    let fc = FifthsAndComma::of_ratio(ratio, tuning)?;
    Ok(hue_from_fifths_and_comma(fc.fifths, fc.comma, tuning))
}
