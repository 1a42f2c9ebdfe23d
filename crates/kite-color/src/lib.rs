#![allow(clippy::excessive_precision)]

//! kite-color: perceptual colors for just-intonation intervals
//!
//! Maps a monzo (a vector of prime exponents) to a color in Kite's color
//! notation, then to display-ready sRGB.
//!
//! # Quick Start
//!
//! ```
//! use kite_color::{color_from_monzo, Srgb8};
//!
//! // 10/7 = 2^1 · 3^0 · 5^1 · 7^-1
//! let color = color_from_monzo(&[1, 0, 1, -1]).unwrap();
//! assert_eq!(color, Srgb8::new(232, 186, 135));
//! ```
//!
//! For repeated use with custom constants or tracing, build a
//! [`KiteColorizer`].
//!
//! # Pipeline
//!
//! ```text
//! monzo [e2 e3 e5 e7 ...>
//!     |
//!     +--> per prime: closest fifths + comma      (tuning)
//!     |        |
//!     |    sum weighted by exponent
//!     |        |
//!     |    fold wolves (|fifths| < 12)            (wolf)
//!     |        |
//!     |    hue from fifths and comma              (hue)
//!     |
//!     +--> per prime >= 5 with nonzero exponent:
//!              prime hue -> gamut cusp            (color::gamut)
//!              clamp lightness into prime band
//!              chroma at that lightness
//!          average, desaturate per extra prime    (monzo)
//!     |
//!     v
//! Oklch -> Oklab -> LinearRgb -> Srgb8            (color)
//! ```
//!
//! ## Hue
//!
//! Each prime is approximated by a stack of pure fifths found by searching
//! `0, +1, -1, +2, ...` until the octave-reduced residual (the comma) is
//! within a quarter tone (65/63). Totals of twelve or more fifths fold back
//! by the Pythagorean comma. Intervals whose comma (near the center of the
//! chain) or fifths count (further out) is negative start on the upper half
//! of the wheel at 222°, the others on the lower half at 78°, and the comma
//! pushes the hue away from the neutral 150° without ever crossing it.
//!
//! ## Chroma and lightness
//!
//! Only primes from 5 upward color an interval. Each such prime takes its own
//! hue's gamut cusp, with lightness held in a band that gets darker for
//! higher primes: `[(2/p)^(1/3), (2/p_prev)^(1/3)]`. The contributions are
//! averaged, and each extra prime multiplies chroma by the desaturation
//! factor (0.4), so complex intervals drift toward grey.

pub mod api;
pub mod color;
pub mod config;
pub mod error;
pub mod hue;
pub mod monzo;
pub mod observer;
pub mod primes;
pub mod tuning;
pub mod wolf;


pub use api::KiteColorizer;
pub use color::{LinearRgb, Oklab, Oklch, Srgb8};
pub use config::Tuning;
pub use error::ColorError;
pub use monzo::{analyze, color_from_monzo, lch_from_monzo, Monzo, MonzoAnalysis};
pub use observer::{NoopObserver, Observer, PrimeContribution};
