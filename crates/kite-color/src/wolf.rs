//! Wolf corrector
//!
//! Twelve stacked fifths overshoot seven octaves by the Pythagorean comma.
//! Totals of `wolf_threshold` fifths or more are folded back toward zero,
//! one wolf per threshold, and every wolf adds its comma to the running
//! comma so the interval itself is unchanged.

use crate::config::Tuning;
use crate::error::ColorError;

/// Result of folding wolves out of a fifths total.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WolfFold {
    /// Folded fifths, `|fifths| < wolf_threshold`
    pub fifths: i64,
    /// Signed number of wolves removed (same sign as the raw fifths)
    pub wolves: i64,
    /// Raw comma plus `wolves * wolf_comma`
    pub comma: f64,
}

/// Fold `fifths` into `(-threshold, threshold)` and correct `comma`.
///
/// Equivalent to repeatedly stepping `threshold` fifths toward zero while
/// `|fifths| >= threshold`, computed in one division.
///
/// # Example
///
/// ```
/// use kite_color::{wolf::fold_wolves, Tuning};
///
/// let fold = fold_wolves(14, 0.0, &Tuning::default()).unwrap();
/// assert_eq!(fold.fifths, 2);
/// assert_eq!(fold.wolves, 1);
/// assert!((fold.comma - 23.46).abs() < 0.01);
/// ```
pub fn fold_wolves(fifths: i64, comma: f64, tuning: &Tuning) -> Result<WolfFold, ColorError> {
    if tuning.wolf_threshold == 0 {
        return Err(ColorError::invalid("wolf_threshold must be at least 1"));
    }
    let threshold = i64::from(tuning.wolf_threshold);
    // Truncating division and remainder keep the sign of `fifths`
    let wolves = fifths / threshold;
    let folded = fifths % threshold;
    let correction = if wolves == 0 {
        0.0
    } else {
        wolves as f64 * tuning.wolf_comma()?
    };
    Ok(WolfFold {
        fifths: folded,
        wolves,
        comma: comma + correction,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pythagorean() -> f64 {
        Tuning::default().wolf_comma().unwrap()
    }

    #[test]
    fn test_small_totals_untouched() {
        let tuning = Tuning::default();
        for fifths in -11..=11 {
            let fold = fold_wolves(fifths, -3.5, &tuning).unwrap();
            assert_eq!(fold.fifths, fifths);
            assert_eq!(fold.wolves, 0);
            assert_eq!(fold.comma, -3.5);
        }
    }

    #[test]
    fn test_folds_positive_and_negative() {
        let tuning = Tuning::default();

        let fold = fold_wolves(12, 0.0, &tuning).unwrap();
        assert_eq!((fold.fifths, fold.wolves), (0, 1));

        let fold = fold_wolves(-12, 0.0, &tuning).unwrap();
        assert_eq!((fold.fifths, fold.wolves), (0, -1));

        let fold = fold_wolves(-27, 10.0, &tuning).unwrap();
        assert_eq!((fold.fifths, fold.wolves), (-3, -2));
        assert!((fold.comma - (10.0 - 2.0 * pythagorean())).abs() < 1e-9);
    }

    #[test]
    fn test_fold_matches_step_loop() {
        let tuning = Tuning::default();
        for raw in -100..=100i64 {
            let mut fifths = raw;
            let mut wolves = 0;
            while fifths.abs() >= 12 {
                fifths -= 12 * fifths.signum();
                wolves += raw.signum();
            }
            let fold = fold_wolves(raw, 1.25, &tuning).unwrap();
            assert_eq!((fold.fifths, fold.wolves), (fifths, wolves), "raw {raw}");
            assert!(fold.fifths.abs() < 12);
            let expected = 1.25 + wolves as f64 * pythagorean();
            assert!((fold.comma - expected).abs() < 1e-9);
        }
    }

    #[test]
    fn test_custom_threshold_uses_its_own_comma() {
        // Seven fifths reduce to the apotome 2187/2048
        let tuning = Tuning {
            wolf_threshold: 7,
            ..Tuning::default()
        };
        let fold = fold_wolves(15, 0.0, &tuning).unwrap();
        assert_eq!((fold.fifths, fold.wolves), (1, 2));
        let seven = crate::tuning::comma_from_fifths(0, crate::tuning::ratio_for_fifths(7)).unwrap();
        assert!((fold.comma - 2.0 * seven).abs() < 1e-9);
    }
}
