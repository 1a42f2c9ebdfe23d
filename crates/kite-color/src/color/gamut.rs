//! sRGB gamut boundary in Oklab
//!
//! For a hue, the most saturated in-gamut color (saturation `S = C / L`) is
//! where one linear RGB channel reaches zero. That channel's boundary is a
//! cubic in `S`; a polynomial fit gives the starting point and Halley's method
//! refines it. Scaling the boundary color until its brightest channel reaches
//! one gives the cusp lightness.
//!
//! # References
//!
//! Björn Ottosson, "sRGB gamut clipping"
//! <https://bottosson.github.io/posts/gamutclipping/>

use super::oklab::{hue_direction, LinearRgb, Oklab, CONE_TO_LINEAR_RGB, LAB_TO_CONE};

/// Fixed number of Halley refinements after the polynomial seed.
pub const HALLEY_STEPS: usize = 2;

/// Which linear RGB channel clips first when saturating a hue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Red,
    Green,
    Blue,
}

impl Region {
    /// Classify the unit hue direction `(a, b)`.
    pub fn of(a: f64, b: f64) -> Self {
        if -1.88170328 * a - 0.80936493 * b > 1.0 {
            Region::Red
        } else if 1.81444104 * a - 1.19445276 * b > 1.0 {
            Region::Green
        } else {
            Region::Blue
        }
    }

    /// Coefficients `k0..k4` of the seed `k0 + k1 a + k2 b + k3 a² + k4 ab`.
    fn seed_coefficients(self) -> [f64; 5] {
        match self {
            Region::Red => [1.19086277, 1.76576728, 0.59662641, 0.75515197, 0.56771245],
            Region::Green => [0.73956515, -0.45954404, 0.08285427, 0.12541070, 0.14503204],
            Region::Blue => [1.35733652, -0.00915799, -1.15130210, -0.50559606, 0.00692167],
        }
    }

    /// Row of the cone-to-linear-RGB matrix for the clipping channel.
    fn channel_weights(self) -> [f64; 3] {
        match self {
            Region::Red => CONE_TO_LINEAR_RGB[0],
            Region::Green => CONE_TO_LINEAR_RGB[1],
            Region::Blue => CONE_TO_LINEAR_RGB[2],
        }
    }
}

/// One Halley step on `f(S) = Σ w_i (1 + S k_i)^3`.
fn halley_step(saturation: f64, k: [f64; 3], weights: [f64; 3]) -> f64 {
    let mut f0 = 0.0;
    let mut f1 = 0.0;
    let mut f2 = 0.0;
    for (k, w) in k.into_iter().zip(weights) {
        let base = 1.0 + saturation * k;
        f0 += w * base * base * base;
        f1 += 3.0 * w * k * base * base;
        f2 += 6.0 * w * k * k * base;
    }
    saturation - f0 * f1 / (f1 * f1 - 0.5 * f0 * f2)
}

/// Maximum in-gamut saturation `C / L` at a hue given in degrees.
///
/// # Example
///
/// ```
/// use kite_color::color::gamut::max_saturation;
///
/// let s = max_saturation(0.0);
/// assert!((s - 0.4054).abs() < 1e-3);
/// ```
pub fn max_saturation(hue_degrees: f64) -> f64 {
    let (a, b) = hue_direction(hue_degrees);
    let region = Region::of(a, b);

    let [k0, k1, k2, k3, k4] = region.seed_coefficients();
    let mut saturation = k0 + k1 * a + k2 * b + k3 * a * a + k4 * a * b;

    let k = LAB_TO_CONE.map(|row| row[1] * a + row[2] * b);
    let weights = region.channel_weights();
    for _ in 0..HALLEY_STEPS {
        saturation = halley_step(saturation, k, weights);
    }
    saturation
}

/// Lightness at which `(hue, saturation)` touches the top of the gamut.
///
/// Evaluates the color at `L = 1` and scales it down by the cube root of its
/// brightest linear channel. For the maximum saturation this is the cusp
/// lightness, in `(0, 1]`.
pub fn lightness_at_saturation(hue_degrees: f64, saturation: f64) -> f64 {
    let (a, b) = hue_direction(hue_degrees);
    let rgb = LinearRgb::from(Oklab::new(1.0, saturation * a, saturation * b));
    (1.0 / rgb.max_channel()).cbrt()
}

/// The most chromatic in-gamut point of a hue.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GamutCusp {
    /// Maximum saturation `C / L`
    pub saturation: f64,
    /// Lightness of the cusp
    pub lightness: f64,
}

impl GamutCusp {
    /// Chroma of the cusp itself.
    #[inline]
    pub fn chroma(&self) -> f64 {
        self.saturation * self.lightness
    }
}

/// Solve the cusp for a hue.
pub fn find_cusp(hue_degrees: f64) -> GamutCusp {
    let saturation = max_saturation(hue_degrees);
    GamutCusp {
        saturation,
        lightness: lightness_at_saturation(hue_degrees, saturation),
    }
}
