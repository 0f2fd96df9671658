//! `closedform` provides univariate Cauchy, Laplace and Gaussian distributions
//! whose density, cumulative distribution and quantile functions all have
//! closed forms, an algebra for combining Gaussian beliefs, and a handful of
//! location estimators for raw samples.
//!
//! ```
//! use closedform::distributions::ContinuousDistribution;
//! use closedform::gaussian::Gaussian;
//!
//! let prior = Gaussian::new(0., 4.)?;
//! let measurement = Gaussian::new(2., 1.)?;
//! let posterior = prior.mul(measurement)?;
//! assert!(posterior.variance() < measurement.variance());
//! assert!(posterior.cdf(posterior.mean()) > 0.49);
//! # Ok::<(), closedform::Error>(())
//! ```
extern crate ndarray;
extern crate ndarray_stats;

mod dist_util;
pub mod distributions;
mod erf;
pub mod error;
pub mod gaussian;
pub mod location;

pub use error::{Error, Result};

/// `erfc` and its inverse
///
/// Both are the Numerical Recipes approximations, so
/// [`Gaussian`](crate::gaussian::Gaussian) probabilities are accurate to
/// about $10^{-7}$ rather than to full `f64` precision.
pub mod gauss {
    pub use crate::erf::{erfc, ierfc, SATURATION};
}
