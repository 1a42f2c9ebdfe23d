//! Tuning model: cents, octave reduction and the fifths/comma decomposition.
//!
//! Any ratio is approximated by a stack of pure fifths (3/2) folded into one
//! octave. The number of fifths picks the letter of the note; the residual,
//! the "comma", says how far the interval sits from that Pythagorean note.

use std::f64::consts::{FRAC_1_SQRT_2, SQRT_2};

use crate::config::Tuning;
use crate::error::ColorError;

/// Ratio of one pure fifth.
pub const FIFTH: f64 = 1.5;

fn check_ratio(ratio: f64) -> Result<f64, ColorError> {
    if ratio.is_finite() && ratio > 0.0 {
        Ok(ratio)
    } else {
        Err(ColorError::NumericDegenerate {
            what: "ratio",
            value: ratio,
        })
    }
}

/// Size of a frequency ratio in cents (1200 per octave).
///
/// # Example
///
/// ```
/// use kite_color::tuning::cents;
///
/// assert!((cents(2.0).unwrap() - 1200.0).abs() < 1e-9);
/// assert!(cents(0.0).is_err());
/// ```
pub fn cents(ratio: f64) -> Result<f64, ColorError> {
    Ok(1200.0 * check_ratio(ratio)?.log2())
}

/// Inverse of [`cents`]: `2^(cents / 1200)`.
#[inline]
pub fn approximate_ratio(cents: f64) -> f64 {
    (cents / 1200.0).exp2()
}

/// Octave-reduce a ratio into `[sqrt(2)/2, sqrt(2))`, i.e. within a
/// tritone of unison.
pub fn reduce(ratio: f64) -> Result<f64, ColorError> {
    let mut ratio = check_ratio(ratio)?;
    while ratio >= SQRT_2 {
        ratio /= 2.0;
    }
    while ratio < FRAC_1_SQRT_2 {
        ratio *= 2.0;
    }
    Ok(ratio)
}

/// `1.5^fifths`; negative counts stack fifths downward.
#[inline]
pub fn ratio_for_fifths(fifths: i64) -> f64 {
    FIFTH.powf(fifths as f64)
}

/// Signed comma in cents left after removing `fifths` fifths from `ratio`
/// and octave-reducing.
pub fn comma_from_fifths(fifths: i64, ratio: f64) -> Result<f64, ColorError> {
    let ratio = check_ratio(ratio)?;
    cents(reduce(ratio / ratio_for_fifths(fifths))?)
}

/// Smallest fifths count whose comma is within the quarter-tone tolerance.
///
/// Candidates are tried as `0, +1, -1, +2, -2, ...`, so when two counts both
/// qualify at the same magnitude the upward one wins.
///
/// Terminates for any positive ratio: the residuals of stacked fifths are
/// dense in the octave. If the stack ever overflows `f64` the reduction
/// reports [`ColorError::NumericDegenerate`] instead of looping.
pub fn closest_fifths(ratio: f64, tuning: &Tuning) -> Result<i64, ColorError> {
    let ratio = check_ratio(ratio)?;
    let tolerance = cents(tuning.quarter_tone)?;
    if tolerance <= 0.0 {
        return Err(ColorError::invalid("quarter_tone tolerance must be positive"));
    }

    if comma_from_fifths(0, ratio)?.abs() < tolerance {
        return Ok(0);
    }
    let mut magnitude: i64 = 1;
    loop {
        for fifths in [magnitude, -magnitude] {
            if comma_from_fifths(fifths, ratio)?.abs() < tolerance {
                return Ok(fifths);
            }
        }
        magnitude += 1;
    }
}

/// A ratio expressed as a count of fifths plus a residual comma in cents.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FifthsAndComma {
    /// Number of stacked fifths (negative = downward)
    pub fifths: i64,
    /// Residual in cents, signed
    pub comma: f64,
}

impl FifthsAndComma {
    /// Decompose a ratio with [`closest_fifths`] and [`comma_from_fifths`].
    ///
    /// # Example
    ///
    /// ```
    /// use kite_color::{tuning::FifthsAndComma, Tuning};
    ///
    /// // 5/4 is four fifths down by a syntonic comma
    /// let major_third = FifthsAndComma::of_ratio(5.0, &Tuning::default()).unwrap();
    /// assert_eq!(major_third.fifths, 4);
    /// assert!((major_third.comma + 21.506).abs() < 1e-3);
    /// ```
    pub fn of_ratio(ratio: f64, tuning: &Tuning) -> Result<Self, ColorError> {
        let fifths = closest_fifths(ratio, tuning)?;
        let comma = comma_from_fifths(fifths, ratio)?;
        Ok(Self { fifths, comma })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_cents_and_inverse() {
        assert!((cents(1.5).unwrap() - 701.955000865).abs() < 1e-6);
        assert!((cents(1.0).unwrap()).abs() < EPS);
        for c in [-1900.0, -600.0, 0.0, 386.3137, 1200.0, 4800.0] {
            let back = cents(approximate_ratio(c)).unwrap();
            assert!((back - c).abs() < 1e-9, "{c} -> {back}");
        }
    }

    #[test]
    fn test_cents_rejects_degenerate_ratios() {
        for bad in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(
                matches!(cents(bad), Err(ColorError::NumericDegenerate { .. })),
                "ratio {bad} accepted"
            );
        }
    }

    #[test]
    fn test_reduce_range_and_octave_equivalence() {
        for ratio in [1e-9, 0.1, 0.7, FRAC_1_SQRT_2, 1.0, 1.4, SQRT_2, 3.0, 7.0, 1e12] {
            let reduced = reduce(ratio).unwrap();
            assert!(
                (FRAC_1_SQRT_2..SQRT_2).contains(&reduced),
                "reduce({ratio}) = {reduced}"
            );
            let shift = cents(ratio).unwrap() - cents(reduced).unwrap();
            let octaves = shift / 1200.0;
            assert!(
                (octaves - octaves.round()).abs() < 1e-9,
                "reduce({ratio}) moved by {shift} cents"
            );
        }
    }

    #[test]
    fn test_reduce_cents_within_tritone() {
        for ratio in [0.5, 0.75, 1.0, 1.25, 2.0, 11.0, 13.0] {
            let c = cents(reduce(ratio).unwrap()).unwrap();
            assert!((-600.0..600.0).contains(&c), "cents {c}");
        }
    }

    #[test]
    fn test_comma_of_exact_fifth_stack_is_zero() {
        for fifths in -20..=20 {
            let comma = comma_from_fifths(fifths, ratio_for_fifths(fifths)).unwrap();
            assert!(comma.abs() < 1e-9, "{fifths} fifths left comma {comma}");
        }
    }

    #[test]
    fn test_closest_fifths_of_small_primes() {
        let tuning = Tuning::default();
        let cases = [(2.0, 0), (3.0, 1), (5.0, 4), (7.0, -2), (11.0, -1), (13.0, -4)];
        for (ratio, expected) in cases {
            assert_eq!(
                closest_fifths(ratio, &tuning).unwrap(),
                expected,
                "ratio {ratio}"
            );
        }
    }

    #[test]
    fn test_closest_fifths_of_undertones_mirror() {
        let tuning = Tuning::default();
        for prime in [5.0, 7.0, 11.0, 13.0, 17.0, 19.0] {
            let over = FifthsAndComma::of_ratio(prime, &tuning).unwrap();
            let under = FifthsAndComma::of_ratio(1.0 / prime, &tuning).unwrap();
            assert_eq!(under.fifths, -over.fifths, "prime {prime}");
            assert!((under.comma + over.comma).abs() < 1e-9);
        }
    }

    #[test]
    fn test_closest_fifths_comma_within_tolerance() {
        let tuning = Tuning::default();
        let tolerance = cents(tuning.quarter_tone).unwrap();
        let mut ratio = 0.37;
        while ratio < 40.0 {
            let fc = FifthsAndComma::of_ratio(ratio, &tuning).unwrap();
            assert!(fc.comma.abs() < tolerance, "ratio {ratio}: {fc:?}");
            ratio *= 1.0137;
        }
    }

    #[test]
    fn test_closest_fifths_prefers_upward_on_tie() {
        // Loose tolerance so that both +1 and -1 qualify
        let tuning = Tuning {
            quarter_tone: approximate_ratio(500.0),
            ..Tuning::default()
        };
        // 1/1 reduced to unison: 0 qualifies first
        assert_eq!(closest_fifths(1.0, &tuning).unwrap(), 0);
        // Exactly a tritone (600 cents): +1 leaves -102, -1 leaves +102
        // (both under 500), so the upward fifth is returned.
        assert_eq!(closest_fifths(SQRT_2, &tuning).unwrap(), 1);
    }

    #[test]
    fn test_syntonic_comma_of_major_third() {
        let fc = FifthsAndComma::of_ratio(5.0 / 4.0, &Tuning::default()).unwrap();
        assert_eq!(fc.fifths, 4);
        assert!((fc.comma - -21.506289596715).abs() < 1e-6);
    }
}
