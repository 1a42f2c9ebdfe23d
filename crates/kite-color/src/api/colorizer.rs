//! KiteColorizer builder -- the primary ergonomic entry point for the crate.
//!
//! [`KiteColorizer`] bundles a [`Tuning`] with an optional [`Observer`] so
//! callers configure once and color many intervals.

use std::fmt;
use std::sync::Arc;

use crate::color::{Oklch, Srgb8};
use crate::config::Tuning;
use crate::error::ColorError;
use crate::hue::{hue_from_cents, hue_from_prime};
use crate::monzo::{analyze, MonzoAnalysis};
use crate::observer::{NoopObserver, Observer};

/// Reusable monzo colorizer.
///
/// - Configuration methods consume and return `self`
/// - Evaluation methods take `&self`, so one colorizer serves any number
///   of monzos, from any number of threads
///
/// # Example
///
/// ```
/// use kite_color::{KiteColorizer, Srgb8, Tuning};
///
/// let colorizer = KiteColorizer::new().tuning(Tuning::default());
///
/// let ten_sevenths = colorizer.color(&[1, 0, 1, -1]).unwrap();
/// assert_eq!(ten_sevenths, Srgb8::new(232, 186, 135));
/// ```
#[derive(Clone)]
pub struct KiteColorizer {
    tuning: Tuning,
    observer: Arc<dyn Observer + Send + Sync>,
}

impl KiteColorizer {
    /// Default tuning, no observer.
    pub fn new() -> Self {
        Self {
            tuning: Tuning::default(),
            observer: Arc::new(NoopObserver),
        }
    }

    /// Replace the tuning constants. They are validated on each evaluation.
    #[inline]
    pub fn tuning(mut self, tuning: Tuning) -> Self {
        self.tuning = tuning;
        self
    }

    /// Attach an observer that receives intermediate values.
    #[inline]
    pub fn observer(mut self, observer: impl Observer + Send + Sync + 'static) -> Self {
        self.observer = Arc::new(observer);
        self
    }

    /// The active tuning.
    #[inline]
    pub fn current_tuning(&self) -> &Tuning {
        &self.tuning
    }

    /// Full analysis of a monzo.
    pub fn analyze(&self, monzo: &[i32]) -> Result<MonzoAnalysis, ColorError> {
        analyze(monzo, &self.tuning, self.observer.as_ref())
    }

    /// Oklch color of a monzo.
    pub fn lch(&self, monzo: &[i32]) -> Result<Oklch, ColorError> {
        Ok(self.analyze(monzo)?.color)
    }

    /// Display color of a monzo.
    pub fn color(&self, monzo: &[i32]) -> Result<Srgb8, ColorError> {
        Ok(Srgb8::from(self.lch(monzo)?))
    }

    /// Hue of an interval size in cents.
    pub fn hue_from_cents(&self, cents: f64) -> Result<f64, ColorError> {
        self.tuning.validate()?;
        hue_from_cents(cents, &self.tuning)
    }

    /// Hue of a prime harmonic or undertone.
    pub fn hue_from_prime(&self, prime: u64, undertone: bool) -> Result<f64, ColorError> {
        self.tuning.validate()?;
        hue_from_prime(prime, undertone, &self.tuning)
    }
}

impl Default for KiteColorizer {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for KiteColorizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KiteColorizer")
            .field("tuning", &self.tuning)
            .finish_non_exhaustive()
    }
}
