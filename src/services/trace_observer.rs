use kite_color::observer::{Observer, PrimeContribution};
use kite_color::tuning::FifthsAndComma;
use kite_color::wolf::WolfFold;
use kite_color::Oklch;

/// Forwards pipeline intermediates to `tracing` at debug/trace level
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl Observer for TracingObserver {
    fn prime_decomposed(&self, prime: u64, exponent: i32, decomposition: FifthsAndComma) {
        tracing::trace!(
            prime,
            exponent,
            fifths = decomposition.fifths,
            comma = decomposition.comma,
            "Decomposed prime"
        );
    }

    fn totals_accumulated(&self, fifths: i64, comma: f64) {
        tracing::debug!(fifths, comma, "Accumulated totals");
    }

    fn wolves_folded(&self, fold: WolfFold) {
        if fold.wolves != 0 {
            tracing::debug!(
                fifths = fold.fifths,
                wolves = fold.wolves,
                comma = fold.comma,
                "Folded wolves"
            );
        }
    }

    fn hue_resolved(&self, hue: f64) {
        tracing::debug!(hue, "Resolved hue");
    }

    fn prime_contributed(&self, contribution: PrimeContribution) {
        tracing::trace!(
            prime = contribution.prime,
            exponent = contribution.exponent,
            hue = contribution.hue,
            cusp_lightness = contribution.cusp.lightness,
            lightness = contribution.lightness,
            chroma = contribution.chroma,
            "Prime contribution"
        );
    }

    fn color_blended(&self, color: Oklch, contributors: usize, undesaturated_chroma: f64) {
        tracing::debug!(
            l = color.l,
            c = color.c,
            h = color.h,
            contributors,
            undesaturated_chroma,
            "Blended color"
        );
    }
}
