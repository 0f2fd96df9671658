//! Closed-form univariate distributions
use crate::dist_util::map_elementwise;
use crate::error::{finite, positive, Error, Result};
use ndarray::{Array, ArrayBase, Data, Dimension};
use num::traits::FloatConst;
use serde::{Deserialize, Serialize};

/// Density, cumulative distribution and quantile of a univariate distribution
pub trait ContinuousDistribution {
	/// probability density at `x`
	fn pdf(&self, x: f64) -> f64;

	/// probability mass at or below `x`
	fn cdf(&self, x: f64) -> f64;

	/// percent point function, the inverse of [`cdf`](Self::cdf)
	fn ppf(&self, p: f64) -> f64;

	/// [`pdf`](Self::pdf) of every element, keeping the shape of `x`
	fn pdf_array<S, D>(&self, x: &ArrayBase<S, D>) -> Array<f64, D>
	where
		Self: Sync,
		S: Data<Elem = f64>,
		D: Dimension,
	{
		map_elementwise(x, |x| self.pdf(x))
	}

	/// [`cdf`](Self::cdf) of every element, keeping the shape of `x`
	fn cdf_array<S, D>(&self, x: &ArrayBase<S, D>) -> Array<f64, D>
	where
		Self: Sync,
		S: Data<Elem = f64>,
		D: Dimension,
	{
		map_elementwise(x, |x| self.cdf(x))
	}

	/// [`ppf`](Self::ppf) of every element, keeping the shape of `p`
	fn ppf_array<S, D>(&self, p: &ArrayBase<S, D>) -> Array<f64, D>
	where
		Self: Sync,
		S: Data<Elem = f64>,
		D: Dimension,
	{
		map_elementwise(p, |p| self.ppf(p))
	}
}

/// Cauchy distribution with location $x_0$ and half-width at half-maximum $\gamma$
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CauchyParams", into = "CauchyParams")]
pub struct Cauchy {
	x0: f64,
	gamma: f64,
}

/// Unvalidated serialized form of [`Cauchy`]
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct CauchyParams {
	pub x0: f64,
	pub gamma: f64,
}

impl Cauchy {
	/// Fails unless `x0` is finite and `gamma` is finite and `> 0`.
	pub fn new(x0: f64, gamma: f64) -> Result<Self> {
		Ok(Cauchy {
			x0: finite("x0", x0)?,
			gamma: positive("gamma", gamma)?,
		})
	}

	pub fn x0(&self) -> f64 {
		self.x0
	}

	pub fn gamma(&self) -> f64 {
		self.gamma
	}
}

impl ContinuousDistribution for Cauchy {
	fn pdf(&self, x: f64) -> f64 {
		let z = (x - self.x0) / self.gamma;
		1. / (f64::PI() * self.gamma * (1. + z * z))
	}

	fn cdf(&self, x: f64) -> f64 {
		((x - self.x0) / self.gamma).atan() / f64::PI() + 0.5
	}

	/// Diverges at `p = 0` and `p = 1`; those are left to the caller.
	fn ppf(&self, p: f64) -> f64 {
		self.x0 + self.gamma * (f64::PI() * (p - 0.5)).tan()
	}
}

impl TryFrom<CauchyParams> for Cauchy {
	type Error = Error;

	fn try_from(params: CauchyParams) -> Result<Self> {
		Cauchy::new(params.x0, params.gamma)
	}
}

impl From<Cauchy> for CauchyParams {
	fn from(dist: Cauchy) -> Self {
		CauchyParams {
			x0: dist.x0,
			gamma: dist.gamma,
		}
	}
}

/// Laplace (double exponential) distribution parameterized by mean and variance
///
/// The scale is $b = \sqrt{\sigma^2 / 2}$.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "LaplaceParams", into = "LaplaceParams")]
pub struct Laplace {
	mean: f64,
	variance: f64,
	b: f64,
}

/// Unvalidated serialized form of [`Laplace`]
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct LaplaceParams {
	pub mean: f64,
	pub variance: f64,
}

impl Laplace {
	/// Fails unless `mean` is finite and `variance` is finite and `> 0`.
	pub fn new(mean: f64, variance: f64) -> Result<Self> {
		let mean = finite("mean", mean)?;
		let variance = positive("variance", variance)?;
		Ok(Laplace {
			mean,
			variance,
			b: variance.sqrt() / f64::SQRT_2(),
		})
	}

	pub fn mean(&self) -> f64 {
		self.mean
	}

	pub fn variance(&self) -> f64 {
		self.variance
	}

	pub fn b(&self) -> f64 {
		self.b
	}
}

impl ContinuousDistribution for Laplace {
	fn pdf(&self, x: f64) -> f64 {
		(-(x - self.mean).abs() / self.b).exp() / (2. * self.b)
	}

	fn cdf(&self, x: f64) -> f64 {
		if x < self.mean {
			0.5 * ((x - self.mean) / self.b).exp()
		} else {
			1. - 0.5 * (-(x - self.mean) / self.b).exp()
		}
	}

	fn ppf(&self, p: f64) -> f64 {
		if p < 0.5 {
			self.mean + self.b * (2. * p).ln()
		} else {
			self.mean - self.b * (2. * (1. - p)).ln()
		}
	}
}

impl TryFrom<LaplaceParams> for Laplace {
	type Error = Error;

	fn try_from(params: LaplaceParams) -> Result<Self> {
		Laplace::new(params.mean, params.variance)
	}
}

impl From<Laplace> for LaplaceParams {
	fn from(dist: Laplace) -> Self {
		LaplaceParams {
			mean: dist.mean,
			variance: dist.variance,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use approx::{assert_abs_diff_eq, assert_relative_eq};
	use ndarray::arr1;
	use proptest::prelude::*;
	use statrs::distribution::{Continuous, ContinuousCDF};

	#[test]
	fn test_cauchy_rejects_scale() {
		assert!(Cauchy::new(0., 0.).is_err());
		assert!(Cauchy::new(0., -2.).is_err());
		assert!(Cauchy::new(f64::NAN, 1.).is_err());
		assert!(Cauchy::new(3., 0.1).is_ok());
		assert_eq!(
			Cauchy::new(0., -2.),
			Err(Error::InvalidParameter {
				name: "gamma",
				expected: "finite and > 0",
				value: -2.
			})
		);
	}

	#[test]
	fn test_cauchy_standard() {
		let dist = Cauchy::new(0., 1.).unwrap();
		assert_eq!(dist.cdf(0.), 0.5);
		assert_relative_eq!(dist.pdf(0.), f64::FRAC_1_PI(), max_relative = 1e-12);
		assert_relative_eq!(dist.cdf(1.), 0.75, max_relative = 1e-12);
		assert_relative_eq!(dist.ppf(0.75), 1., epsilon = 1e-12);
		assert_eq!(dist.ppf(0.5), 0.);
	}

	#[test]
	fn test_cauchy_matches_statrs() {
		let dist = Cauchy::new(-1.5, 2.5).unwrap();
		let reference = statrs::distribution::Cauchy::new(-1.5, 2.5).unwrap();
		for &x in &[-40., -3., -1.5, 0., 0.7, 12.] {
			assert_relative_eq!(dist.pdf(x), reference.pdf(x), max_relative = 1e-12);
			assert_relative_eq!(dist.cdf(x), reference.cdf(x), max_relative = 1e-12);
		}
	}

	#[test]
	fn test_laplace_rejects_variance() {
		assert!(Laplace::new(0., 0.).is_err());
		assert!(Laplace::new(0., -1e-12).is_err());
		assert!(Laplace::new(0., f64::INFINITY).is_err());
		assert!(Laplace::new(-7., 1e-12).is_ok());
	}

	#[test]
	fn test_laplace_standard() {
		let dist = Laplace::new(0., 1.).unwrap();
		assert_relative_eq!(dist.b(), 0.5f64.sqrt(), max_relative = 1e-12);
		assert_relative_eq!(dist.pdf(0.), 0.5 / 0.5f64.sqrt(), max_relative = 1e-12);
		assert_abs_diff_eq!(dist.pdf(0.), 0.70710678, epsilon = 1e-8);
		assert_eq!(dist.cdf(0.), 0.5);
		assert_eq!(dist.ppf(0.5), 0.);
	}

	#[test]
	fn test_laplace_matches_statrs() {
		let dist = Laplace::new(2., 8.).unwrap();
		let reference = statrs::distribution::Laplace::new(2., dist.b()).unwrap();
		for &x in &[-10., 0., 1.9, 2., 2.1, 15.] {
			assert_relative_eq!(dist.pdf(x), reference.pdf(x), max_relative = 1e-12);
			assert_relative_eq!(dist.cdf(x), reference.cdf(x), max_relative = 1e-12);
		}
	}

	#[test]
	fn test_laplace_cdf_tails() {
		let dist = Laplace::new(0., 2.).unwrap();
		assert_eq!(dist.cdf(f64::NEG_INFINITY), 0.);
		assert_eq!(dist.cdf(f64::INFINITY), 1.);
		assert_eq!(dist.ppf(0.), f64::NEG_INFINITY);
		assert_eq!(dist.ppf(1.), f64::INFINITY);
	}

	#[test]
	fn test_cauchy_ppf_boundaries() {
		let dist = Cauchy::new(0., 1.).unwrap();
		let (lo, hi) = (dist.ppf(0.), dist.ppf(1.));
		// tan diverges at +-pi/2 and nothing clamps it
		assert!(lo < -1e15);
		assert!(hi > 1e15);
		assert_ne!(lo, -100.);
		assert_ne!(hi, 100.);
	}

	#[test]
	fn test_batch_evaluation() {
		let dist = Laplace::new(0., 1.).unwrap();
		let x = arr1(&[-1., 0., 1.]);
		let cdf = dist.cdf_array(&x);
		assert_eq!(cdf.len(), 3);
		assert_eq!(cdf[1], 0.5);
		assert_relative_eq!(cdf[0] + cdf[2], 1., epsilon = 1e-15);
		let back = dist.ppf_array(&cdf);
		for (a, b) in back.iter().zip(x.iter()) {
			assert_abs_diff_eq!(a, b, epsilon = 1e-12);
		}
		let pdf = dist.pdf_array(&x.view());
		assert_eq!(pdf[0], pdf[2]);
	}

	#[test]
	fn test_serde() {
		let dist = Laplace::new(1., 4.).unwrap();
		let json = serde_json::to_string(&dist).unwrap();
		assert_eq!(json, r#"{"mean":1.0,"variance":4.0}"#);
		let back: Laplace = serde_json::from_str(&json).unwrap();
		assert_eq!(back, dist);

		let err = serde_json::from_str::<Cauchy>(r#"{"x0":0.0,"gamma":-1.0}"#).unwrap_err();
		assert!(err.to_string().contains("gamma must be finite and > 0"));
	}

	proptest! {
		#[test]
		fn cauchy_round_trip(x0 in -50f64..50., gamma in 0.01f64..100., p in 0.01f64..0.99) {
			let dist = Cauchy::new(x0, gamma).unwrap();
			prop_assert!((dist.cdf(dist.ppf(p)) - p).abs() < 1e-6);
		}

		#[test]
		fn laplace_round_trip(mean in -50f64..50., variance in 0.01f64..100., p in 0.01f64..0.99) {
			let dist = Laplace::new(mean, variance).unwrap();
			prop_assert!((dist.cdf(dist.ppf(p)) - p).abs() < 1e-6);
		}

		#[test]
		fn cauchy_cdf_monotone(x0 in -50f64..50., gamma in 0.01f64..100., a in -1e3f64..1e3, d in 0f64..1e3) {
			let dist = Cauchy::new(x0, gamma).unwrap();
			let (lo, hi) = (dist.cdf(a), dist.cdf(a + d));
			prop_assert!(lo <= hi);
			prop_assert!((0. ..=1.).contains(&lo) && (0. ..=1.).contains(&hi));
		}

		#[test]
		fn laplace_cdf_monotone(mean in -50f64..50., variance in 0.01f64..100., a in -1e3f64..1e3, d in 0f64..1e3) {
			let dist = Laplace::new(mean, variance).unwrap();
			let (lo, hi) = (dist.cdf(a), dist.cdf(a + d));
			prop_assert!(lo <= hi);
			prop_assert!((0. ..=1.).contains(&lo) && (0. ..=1.).contains(&hi));
		}

		#[test]
		fn pdf_symmetric(loc in -50f64..50., scale in 0.01f64..100., d in 0f64..100.) {
			let cauchy = Cauchy::new(loc, scale).unwrap();
			let laplace = Laplace::new(loc, scale).unwrap();
			prop_assert!((cauchy.pdf(loc + d) - cauchy.pdf(loc - d)).abs() <= 1e-9 * cauchy.pdf(loc));
			prop_assert!((laplace.pdf(loc + d) - laplace.pdf(loc - d)).abs() <= 1e-9 * laplace.pdf(loc));
		}
	}
}
