//! Trace hook for the monzo pipeline
//!
//! An [`Observer`] sees every intermediate value the aggregator computes.
//! It cannot influence the result: all methods take `&self`, return nothing,
//! and are called after the value they report has been fixed.

use crate::color::gamut::GamutCusp;
use crate::color::Oklch;
use crate::tuning::FifthsAndComma;
use crate::wolf::WolfFold;

/// Per-prime chroma and lightness, before averaging.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrimeContribution {
    /// The prime (5, 7, 11, ...)
    pub prime: u64,
    /// Its monzo exponent, never zero
    pub exponent: i32,
    /// Hue of the prime (or of its undertone for negative exponents)
    pub hue: f64,
    /// Gamut cusp at that hue
    pub cusp: GamutCusp,
    /// Cusp lightness after clamping into the prime's lightness band
    pub lightness: f64,
    /// Chroma at the clamped lightness
    pub chroma: f64,
}

/// Receives intermediate pipeline values. Every method defaults to a no-op.
pub trait Observer {
    /// A monzo slot was decomposed into fifths and comma.
    fn prime_decomposed(&self, _prime: u64, _exponent: i32, _decomposition: FifthsAndComma) {}

    /// Totals before wolf folding.
    fn totals_accumulated(&self, _fifths: i64, _comma: f64) {}

    /// Totals after wolf folding.
    fn wolves_folded(&self, _fold: WolfFold) {}

    /// The interval's hue was resolved.
    fn hue_resolved(&self, _hue: f64) {}

    /// A prime beyond 3 contributed to chroma and lightness.
    fn prime_contributed(&self, _contribution: PrimeContribution) {}

    /// Final blended color, with the chroma before desaturation.
    fn color_blended(&self, _color: Oklch, _contributors: usize, _undesaturated_chroma: f64) {}
}

/// Observer that ignores everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl Observer for NoopObserver {}
