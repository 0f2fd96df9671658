//! Complementary error function and its inverse
//!
//! Both follow Numerical Recipes: `erfc` is the Chebyshev-fitted rational
//! approximation from the 2nd edition (p. 221), `ierfc` the inverse from
//! the 3rd edition (p. 265).

use num::traits::FloatConst;

/// magnitude returned by [`ierfc`] outside of the open interval $(0, 2)$
pub const SATURATION: f64 = 100.;

// halley steps applied to the initial guess of `ierfc`
const REFINEMENT_STEPS: usize = 2;

/// the complementary error function $\mathrm{erfc}(x) = 1 - \mathrm{erf}(x)$
///
/// Fractional error is below $1.2 \cdot 10^{-7}$ everywhere.
pub fn erfc(x: f64) -> f64 {
    let z = x.abs();
    let t = 1. / (1. + z / 2.);
    #[rustfmt::skip]
    let r = t * (-z * z - 1.26551223 + t * (1.00002368 + t * (0.37409196 + t * (
        0.09678418 + t * (-0.18628806 + t * (0.27886807 + t * (-1.13520398 +
        t * (1.48851587 + t * (-0.82215223 + t * 0.17087277)))))))))
        .exp();
    if x >= 0. {
        r
    } else {
        2. - r
    }
}

/// the inverse complementary error function $\mathrm{erfc}^{-1}(x)$
///
/// Arguments at or beyond the ends of $(0, 2)$ saturate to $\pm$[`SATURATION`]
/// rather than returning an infinity.
pub fn ierfc(x: f64) -> f64 {
    if x >= 2. {
        log::trace!("ierfc({}) saturated low", x);
        return -SATURATION;
    }
    if x <= 0. {
        log::trace!("ierfc({}) saturated high", x);
        return SATURATION;
    }
    let xx = if x < 1. { x } else { 2. - x };
    let t = (-2. * (xx / 2.).ln()).sqrt();
    let mut r = -0.70711 * ((2.30753 + t * 0.27061) / (1. + t * (0.99229 + t * 0.04481)) - t);
    for _ in 0..REFINEMENT_STEPS {
        let err = erfc(r) - xx;
        r += err / (f64::FRAC_2_SQRT_PI() * (-(r * r)).exp() - r * err);
    }
    if x < 1. {
        r
    } else {
        -r
    }
}
