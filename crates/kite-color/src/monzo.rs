//! Monzo aggregator
//!
//! A monzo lists prime exponents: slot 0 is the power of 2, slot 1 of 3,
//! slot 2 of 5 and so on. The whole interval decides the hue through its
//! combined fifths and comma. Only primes from 5 upward decide chroma and
//! lightness; 2 and 3 alone give white.

use std::fmt;

use crate::color::gamut::find_cusp;
use crate::color::{Oklch, Srgb8};
use crate::config::Tuning;
use crate::error::ColorError;
use crate::hue::{hue_from_fifths_and_comma, hue_from_prime};
use crate::observer::{NoopObserver, Observer, PrimeContribution};
use crate::primes::PrimeCache;
use crate::tuning::{cents, FifthsAndComma};
use crate::wolf::{fold_wolves, WolfFold};

/// First monzo slot that contributes chroma (the prime 5).
const FIRST_CHROMATIC_SLOT: usize = 2;

/// Exponent vector over consecutive primes.
///
/// # Example
///
/// ```
/// use kite_color::Monzo;
///
/// let monzo = Monzo::from(vec![1, 0, 1, -1]); // 2·5/7 = 10/7
/// assert_eq!(monzo.to_string(), "[1 0 1 -1>");
/// assert!((monzo.ratio().unwrap() - 10.0 / 7.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Monzo {
    exponents: Vec<i32>,
}

impl Monzo {
    pub fn new(exponents: Vec<i32>) -> Self {
        Self { exponents }
    }

    #[inline]
    pub fn as_slice(&self) -> &[i32] {
        &self.exponents
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.exponents.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.exponents.is_empty()
    }

    /// Drop trailing zero exponents.
    pub fn trimmed(mut self) -> Self {
        while self.exponents.last() == Some(&0) {
            self.exponents.pop();
        }
        self
    }

    /// The frequency ratio `∏ prime_i ^ exponent_i`.
    pub fn ratio(&self) -> Result<f64, ColorError> {
        let mut primes = PrimeCache::new();
        let mut ratio = 1.0f64;
        for (slot, &exponent) in self.exponents.iter().enumerate() {
            if exponent != 0 {
                ratio *= (primes.get(slot + 1)? as f64).powi(exponent);
            }
        }
        Ok(ratio)
    }

    /// Interval size in cents, summed per prime so huge exponents do not
    /// overflow the ratio.
    pub fn cents(&self) -> Result<f64, ColorError> {
        let mut primes = PrimeCache::new();
        let mut total = 0.0;
        for (slot, &exponent) in self.exponents.iter().enumerate() {
            if exponent != 0 {
                total += f64::from(exponent) * cents(primes.get(slot + 1)? as f64)?;
            }
        }
        Ok(total)
    }
}

impl From<Vec<i32>> for Monzo {
    fn from(exponents: Vec<i32>) -> Self {
        Self::new(exponents)
    }
}

impl From<&[i32]> for Monzo {
    fn from(exponents: &[i32]) -> Self {
        Self::new(exponents.to_vec())
    }
}

impl AsRef<[i32]> for Monzo {
    fn as_ref(&self) -> &[i32] {
        &self.exponents
    }
}

impl fmt::Display for Monzo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, exponent) in self.exponents.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{exponent}")?;
        }
        write!(f, ">")
    }
}

/// Everything the aggregator derived from one monzo.
#[derive(Debug, Clone, PartialEq)]
pub struct MonzoAnalysis {
    /// Fifths total before folding
    pub raw_fifths: i64,
    /// Comma total before folding, in cents
    pub raw_comma: f64,
    /// Totals after wolf folding
    pub fold: WolfFold,
    /// Hue from the hue mapper, in `[-30, 330]` for the default tuning
    pub hue: f64,
    /// Per-prime contributions (primes from 5 with nonzero exponent)
    pub contributions: Vec<PrimeContribution>,
    /// Final color; hue wrapped into `[0, 360)`
    pub color: Oklch,
}

impl MonzoAnalysis {
    /// Display color for the analysed interval.
    #[inline]
    pub fn srgb(&self) -> Srgb8 {
        Srgb8::from(self.color)
    }
}

/// Lightness and chroma one prime contributes at its own hue.
///
/// The cusp lightness is clamped into `[(2/prime)^(1/3), upper]`, where
/// `upper` is 1 for the prime 5 and `(2/previous_prime)^(1/3)` beyond it.
/// Below the cusp chroma follows the gamut's lower edge; above it, it falls
/// linearly to zero at white.
fn prime_contribution(
    prime: u64,
    previous_prime: Option<u64>,
    exponent: i32,
    tuning: &Tuning,
) -> Result<PrimeContribution, ColorError> {
    let hue = hue_from_prime(prime, exponent < 0, tuning)?;
    let cusp = find_cusp(hue);

    let lower = (2.0 / prime as f64).cbrt();
    let upper = previous_prime.map_or(1.0, |previous| (2.0 / previous as f64).cbrt());
    let lightness = cusp.lightness.max(lower).min(upper);

    let chroma = if lightness <= cusp.lightness {
        cusp.saturation * lightness
    } else {
        cusp.saturation * cusp.lightness * (1.0 - lightness) / (1.0 - cusp.lightness)
    };

    Ok(PrimeContribution {
        prime,
        exponent,
        hue,
        cusp,
        lightness,
        chroma,
    })
}

/// Run the full aggregation, reporting intermediate values to `observer`.
pub fn analyze(
    monzo: &[i32],
    tuning: &Tuning,
    observer: &dyn Observer,
) -> Result<MonzoAnalysis, ColorError> {
    tuning.validate()?;
    let mut primes = PrimeCache::new();

    let mut raw_fifths: i64 = 0;
    let mut raw_comma = 0.0;
    for (slot, &exponent) in monzo.iter().enumerate() {
        let prime = primes.get(slot + 1)?;
        let decomposition = FifthsAndComma::of_ratio(prime as f64, tuning)?;
        observer.prime_decomposed(prime, exponent, decomposition);

        raw_fifths = i64::from(exponent)
            .checked_mul(decomposition.fifths)
            .and_then(|fifths| raw_fifths.checked_add(fifths))
            .ok_or_else(|| {
                ColorError::invalid(format!("fifths total overflows at prime {prime}"))
            })?;
        raw_comma += f64::from(exponent) * decomposition.comma;
    }
    observer.totals_accumulated(raw_fifths, raw_comma);

    let fold = fold_wolves(raw_fifths, raw_comma, tuning)?;
    observer.wolves_folded(fold);

    let hue = hue_from_fifths_and_comma(fold.fifths, fold.comma, tuning);
    observer.hue_resolved(hue);

    let mut contributions = Vec::new();
    for (slot, &exponent) in monzo.iter().enumerate().skip(FIRST_CHROMATIC_SLOT) {
        if exponent == 0 {
            continue;
        }
        let prime = primes.get(slot + 1)?;
        let previous_prime = if slot == FIRST_CHROMATIC_SLOT {
            None
        } else {
            Some(primes.get(slot)?)
        };
        let contribution = prime_contribution(prime, previous_prime, exponent, tuning)?;
        observer.prime_contributed(contribution);
        contributions.push(contribution);
    }

    // Fewer than three slots or no nonzero exponent from 5 up: achromatic
    let color = if contributions.is_empty() {
        let white = Oklch::white(hue);
        observer.color_blended(white, 0, 0.0);
        white
    } else {
        let count = contributions.len();
        let lightness = contributions.iter().map(|c| c.lightness).sum::<f64>() / count as f64;
        let chroma = contributions.iter().map(|c| c.chroma).sum::<f64>() / count as f64;
        let desaturation = tuning.desaturate_factor.powi(count as i32 - 1);
        let blended = Oklch::new(lightness, chroma * desaturation, hue);
        observer.color_blended(blended, count, chroma);
        blended
    };

    Ok(MonzoAnalysis {
        raw_fifths,
        raw_comma,
        fold,
        hue,
        contributions,
        color,
    })
}

/// Oklch color of a monzo under `tuning`.
pub fn lch_from_monzo(monzo: &[i32], tuning: &Tuning) -> Result<Oklch, ColorError> {
    Ok(analyze(monzo, tuning, &NoopObserver)?.color)
}

/// Display color of a monzo with the default tuning.
///
/// # Example
///
/// ```
/// use kite_color::{color_from_monzo, Srgb8};
///
/// assert_eq!(color_from_monzo(&[1, 0, 1, -1]).unwrap(), Srgb8::new(232, 186, 135));
/// assert_eq!(color_from_monzo(&[]).unwrap(), Srgb8::new(255, 255, 255));
/// ```
pub fn color_from_monzo(monzo: &[i32]) -> Result<Srgb8, ColorError> {
    Ok(Srgb8::from(lch_from_monzo(monzo, &Tuning::default())?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Recorder {
        events: RefCell<Vec<String>>,
    }

    impl Observer for Recorder {
        fn prime_decomposed(&self, prime: u64, exponent: i32, d: FifthsAndComma) {
            self.events
                .borrow_mut()
                .push(format!("prime {prime}^{exponent} = {} fifths", d.fifths));
        }

        fn wolves_folded(&self, fold: WolfFold) {
            self.events.borrow_mut().push(format!("wolves {}", fold.wolves));
        }

        fn prime_contributed(&self, c: PrimeContribution) {
            self.events.borrow_mut().push(format!("contrib {}", c.prime));
        }

        fn color_blended(&self, _color: Oklch, contributors: usize, _chroma: f64) {
            self.events.borrow_mut().push(format!("blend {contributors}"));
        }
    }

    #[test]
    fn test_monzo_display_and_trim() {
        let monzo = Monzo::from(vec![-2, 0, 1, 0, 0]);
        assert_eq!(monzo.to_string(), "[-2 0 1 0 0>");
        assert_eq!(monzo.trimmed().as_slice(), &[-2, 0, 1]);
        assert_eq!(Monzo::default().to_string(), "[>");
    }

    #[test]
    fn test_monzo_cents() {
        let third = Monzo::from(vec![-2, 0, 1]);
        assert!((third.cents().unwrap() - 386.3137138648).abs() < 1e-6);
    }

    #[test]
    fn test_short_monzo_is_white_with_hue() {
        let analysis = analyze(&[-1, 1], &Tuning::default(), &NoopObserver).unwrap();
        assert_eq!(analysis.fold.fifths, 1);
        assert_eq!(analysis.hue, 78.0);
        assert_eq!(analysis.color, Oklch::new(1.0, 0.0, 78.0));
        assert!(analysis.contributions.is_empty());
    }

    #[test]
    fn test_zero_contributors_fall_back_to_white() {
        let analysis = analyze(&[3, -2, 0, 0], &Tuning::default(), &NoopObserver).unwrap();
        assert_eq!(analysis.color.l, 1.0);
        assert_eq!(analysis.color.c, 0.0);
        assert!(analysis.contributions.is_empty());
    }

    #[test]
    fn test_lightness_band_per_prime() {
        let tuning = Tuning::default();
        // 7/4: cusp lightness 0.566 is below the 7-band [0.6586, 0.7368]
        let c = prime_contribution(7, Some(5), 1, &tuning).unwrap();
        assert!((c.lightness - (2.0f64 / 7.0).cbrt()).abs() < 1e-12);
        assert!(c.lightness > c.cusp.lightness);
        // Above the cusp chroma drops along the line to white
        let expected = c.cusp.saturation * c.cusp.lightness * (1.0 - c.lightness)
            / (1.0 - c.cusp.lightness);
        assert!((c.chroma - expected).abs() < 1e-12);

        // 5/4: cusp 0.9589 inside [0.7368, 1], so the cusp is kept
        let c = prime_contribution(5, None, 1, &tuning).unwrap();
        assert!((c.lightness - c.cusp.lightness).abs() < 1e-12);
        assert!((c.chroma - c.cusp.chroma()).abs() < 1e-12);
    }

    #[test]
    fn test_desaturation_per_extra_prime() {
        let tuning = Tuning::default();
        let analysis = analyze(&[0, 0, 1, 1], &tuning, &NoopObserver).unwrap();
        assert_eq!(analysis.contributions.len(), 2);
        let mean_chroma: f64 = analysis.contributions.iter().map(|c| c.chroma).sum::<f64>() / 2.0;
        assert!((analysis.color.c - mean_chroma * 0.4).abs() < 1e-12);
    }

    #[test]
    fn test_observer_sees_every_stage() {
        let recorder = Recorder::default();
        analyze(&[1, 0, 1, -1], &Tuning::default(), &recorder).unwrap();
        assert_eq!(
            recorder.events.into_inner(),
            vec![
                "prime 2^1 = 0 fifths",
                "prime 3^0 = 1 fifths",
                "prime 5^1 = 4 fifths",
                "prime 7^-1 = -2 fifths",
                "wolves 0",
                "contrib 5",
                "contrib 7",
                "blend 2",
            ]
        );
    }

    #[test]
    fn test_observer_does_not_change_result() {
        let tuning = Tuning::default();
        let quiet = analyze(&[0, 0, 1, -1, 1], &tuning, &NoopObserver).unwrap();
        let traced = analyze(&[0, 0, 1, -1, 1], &tuning, &Recorder::default()).unwrap();
        assert_eq!(quiet, traced);
    }

    #[test]
    fn test_huge_exponent_folds_in_one_step() {
        let analysis = analyze(&[0, i32::MAX], &Tuning::default(), &NoopObserver).unwrap();
        assert_eq!(analysis.raw_fifths, i64::from(i32::MAX));
        assert_eq!(analysis.fold.fifths, 7);
        assert_eq!(analysis.fold.wolves, 178_956_970);
    }

    #[test]
    fn test_invalid_tuning_is_rejected() {
        let tuning = Tuning {
            quarter_tone: 0.5,
            ..Tuning::default()
        };
        assert!(matches!(
            lch_from_monzo(&[0, 0, 1], &tuning),
            Err(ColorError::InvalidInput(_))
        ));
    }
}
