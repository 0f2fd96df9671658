//! Gaussian distribution and Gaussian belief algebra
//!
//! Products and quotients of Gaussians are taken in precision space
//! ($\tau = 1/\sigma^2$), so [`Gaussian::mul`] fuses two independent
//! beliefs and [`Gaussian::div`] removes one again. Precision is never
//! stored; each combinator derives it from the variance and rebuilds the
//! result through [`Gaussian::from_precision_mean`].
use crate::distributions::ContinuousDistribution;
use crate::error::{finite, positive, Error, Result};
use crate::gauss::{erfc, ierfc};
use num::traits::FloatConst;
use serde::{Deserialize, Serialize};

/// Normal distribution $N(\mu, \sigma^2)$
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "GaussianParams", into = "GaussianParams")]
pub struct Gaussian {
    mean: f64,
    variance: f64,
    standard_deviation: f64,
}

/// Unvalidated serialized form of [`Gaussian`]
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct GaussianParams {
    pub mean: f64,
    pub variance: f64,
}

/// Right-hand side of [`Gaussian::mul`] and [`Gaussian::div`]
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Factor {
    Scalar(f64),
    Gaussian(Gaussian),
}

impl From<f64> for Factor {
    fn from(c: f64) -> Self {
        Factor::Scalar(c)
    }
}

impl From<Gaussian> for Factor {
    fn from(d: Gaussian) -> Self {
        Factor::Gaussian(d)
    }
}

impl From<&Gaussian> for Factor {
    fn from(d: &Gaussian) -> Self {
        Factor::Gaussian(*d)
    }
}

impl Gaussian {
    /// Fails unless `mean` is finite and `variance` is finite and `> 0`.
    pub fn new(mean: f64, variance: f64) -> Result<Self> {
        let mean = finite("mean", mean)?;
        let variance = positive("variance", variance)?;
        Ok(Gaussian {
            mean,
            variance,
            standard_deviation: variance.sqrt(),
        })
    }

    /// Builds $N(\eta / \tau, 1 / \tau)$ from precision $\tau$ and
    /// precision-weighted mean $\eta$.
    ///
    /// Fails unless $\tau$ is finite and strictly positive.
    pub fn from_precision_mean(precision: f64, precision_mean: f64) -> Result<Self> {
        let precision = positive("precision", precision)?;
        Gaussian::new(precision_mean / precision, 1. / precision)
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }

    pub fn variance(&self) -> f64 {
        self.variance
    }

    pub fn standard_deviation(&self) -> f64 {
        self.standard_deviation
    }

    /// $1 / \sigma^2$, computed on demand
    pub fn precision(&self) -> f64 {
        1. / self.variance
    }

    /// Product with a scalar (same as [`scale`](Self::scale)) or, for another
    /// Gaussian, the normalized product of the two densities.
    #[allow(clippy::should_implement_trait)]
    pub fn mul<F: Into<Factor>>(&self, factor: F) -> Result<Gaussian> {
        match factor.into() {
            Factor::Scalar(c) => self.scale(c),
            Factor::Gaussian(d) => {
                let (tau, dtau) = (self.precision(), d.precision());
                Gaussian::from_precision_mean(tau + dtau, tau * self.mean + dtau * d.mean)
            }
        }
    }

    /// Quotient by a scalar (scale by `1/c`) or, for another Gaussian, the
    /// inverse of [`mul`](Self::mul).
    ///
    /// Dividing by a Gaussian at least as precise as `self` leaves no
    /// positive precision and is reported as an error.
    #[allow(clippy::should_implement_trait)]
    pub fn div<F: Into<Factor>>(&self, divisor: F) -> Result<Gaussian> {
        match divisor.into() {
            Factor::Scalar(c) => self.scale(1. / c),
            Factor::Gaussian(d) => {
                let (tau, dtau) = (self.precision(), d.precision());
                let precision = tau - dtau;
                if precision <= 0. {
                    log::debug!(
                        "quotient of N({}, {}) by N({}, {}) has precision {}",
                        self.mean,
                        self.variance,
                        d.mean,
                        d.variance,
                        precision
                    );
                }
                Gaussian::from_precision_mean(precision, tau * self.mean - dtau * d.mean)
            }
        }
    }

    /// Distribution of $X + Y$ for independent $X \sim$ `self`, $Y \sim$ `d`
    #[allow(clippy::should_implement_trait)]
    pub fn add(&self, d: &Gaussian) -> Result<Gaussian> {
        Gaussian::new(self.mean + d.mean, self.variance + d.variance)
    }

    /// Distribution of $X - Y$; the variances still add.
    #[allow(clippy::should_implement_trait)]
    pub fn sub(&self, d: &Gaussian) -> Result<Gaussian> {
        Gaussian::new(self.mean - d.mean, self.variance + d.variance)
    }

    /// Distribution of $cX$
    pub fn scale(&self, c: f64) -> Result<Gaussian> {
        Gaussian::new(self.mean * c, self.variance * c * c)
    }
}

impl ContinuousDistribution for Gaussian {
    fn pdf(&self, x: f64) -> f64 {
        let m = self.standard_deviation * f64::TAU().sqrt();
        let e = (-(x - self.mean).powi(2) / (2. * self.variance)).exp();
        e / m
    }

    fn cdf(&self, x: f64) -> f64 {
        0.5 * erfc(-(x - self.mean) / (self.standard_deviation * f64::SQRT_2()))
    }

    /// Saturates to `mean ± 100·sqrt(2)·σ` for `p <= 0` and `p >= 1`.
    fn ppf(&self, p: f64) -> f64 {
        self.mean - self.standard_deviation * f64::SQRT_2() * ierfc(2. * p)
    }
}

impl TryFrom<GaussianParams> for Gaussian {
    type Error = Error;

    fn try_from(params: GaussianParams) -> Result<Self> {
        Gaussian::new(params.mean, params.variance)
    }
}

impl From<Gaussian> for GaussianParams {
    fn from(dist: Gaussian) -> Self {
        GaussianParams {
            mean: dist.mean,
            variance: dist.variance,
        }
    }
}
