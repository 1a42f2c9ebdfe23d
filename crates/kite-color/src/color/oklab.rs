//! Oklab perceptual color space and its polar form
//!
//! The pipeline only ever goes one way, from Oklch toward display RGB.
//!
//! # References
//!
//! Björn Ottosson, "A perceptual color space for image processing"
//! <https://bottosson.github.io/posts/oklab/>

/// Oklab `(L, a, b)` to nonlinear cone response `(l', m', s')`.
pub(crate) const LAB_TO_CONE: [[f64; 3]; 3] = [
    [1.0, 0.3963377774, 0.2158037573],
    [1.0, -0.1055613458, -0.0638541728],
    [1.0, -0.0894841775, -1.2914855480],
];

/// Linear cone response `(l, m, s)` to linear sRGB.
pub(crate) const CONE_TO_LINEAR_RGB: [[f64; 3]; 3] = [
    [4.0767416621, -3.3077115913, 0.2309699292],
    [-1.2684380046, 2.6097574011, -0.3413193965],
    [-0.0041960863, -0.7034186147, 1.7076147010],
];

/// Unit direction `(cos h, sin h)` of a hue given in degrees.
#[inline]
pub(crate) fn hue_direction(hue_degrees: f64) -> (f64, f64) {
    let (sin, cos) = hue_degrees.to_radians().sin_cos();
    (cos, sin)
}

/// A color in Oklab.
///
/// Values are not clamped; an Oklab color may lie outside the sRGB gamut.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Oklab {
    /// Lightness: 0.0 (black) to 1.0 (white) for in-gamut colors
    pub l: f64,
    /// Green-red axis
    pub a: f64,
    /// Blue-yellow axis
    pub b: f64,
}

impl Oklab {
    #[inline]
    pub fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }
}

/// Oklch: lightness, chroma and hue in degrees.
///
/// This is the color the monzo aggregator produces.
///
/// # Example
///
/// ```
/// use kite_color::{Oklab, Oklch};
///
/// let lch = Oklch::new(0.7, 0.1, 90.0);
/// let lab = Oklab::from(lch);
/// assert!(lab.a.abs() < 1e-12);
/// assert!((lab.b - 0.1).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Oklch {
    /// Lightness, roughly 0.0..=1.0
    pub l: f64,
    /// Chroma, >= 0.0
    pub c: f64,
    /// Hue in degrees, `[0, 360)` when built with [`Oklch::new`]
    pub h: f64,
}

impl Oklch {
    /// Create an Oklch color, wrapping the hue into `[0, 360)`.
    #[inline]
    pub fn new(l: f64, c: f64, h: f64) -> Self {
        let h = h.rem_euclid(360.0);
        // rem_euclid can round up to exactly 360 for tiny negative input
        let h = if h >= 360.0 { 0.0 } else { h };
        Self { l, c, h }
    }

    /// Lightness 1, no chroma: the color of intervals built from 2 and 3 only.
    #[inline]
    pub fn white(h: f64) -> Self {
        Self::new(1.0, 0.0, h)
    }
}

impl From<Oklch> for Oklab {
    fn from(lch: Oklch) -> Self {
        let (a, b) = hue_direction(lch.h);
        Oklab::new(lch.l, lch.c * a, lch.c * b)
    }
}

/// Linear-light sRGB, unclamped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearRgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl LinearRgb {
    #[inline]
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Largest of the three channels.
    #[inline]
    pub fn max_channel(self) -> f64 {
        self.r.max(self.g).max(self.b)
    }
}

impl From<Oklab> for LinearRgb {
    fn from(lab: Oklab) -> Self {
        let input = [lab.l, lab.a, lab.b];
        let mut cone = [0.0; 3];
        for (row, out) in LAB_TO_CONE.iter().zip(cone.iter_mut()) {
            let nonlinear = row[0] * input[0] + row[1] * input[1] + row[2] * input[2];
            *out = nonlinear * nonlinear * nonlinear;
        }
        let [r, g, b] = CONE_TO_LINEAR_RGB
            .map(|row| row[0] * cone[0] + row[1] * cone[1] + row[2] * cone[2]);
        LinearRgb::new(r, g, b)
    }
}
