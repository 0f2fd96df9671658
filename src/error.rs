//! Error types

use thiserror::Error;

/// Errors raised while constructing or combining distributions
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A distribution parameter lies outside its domain
    #[error("{name} must be {expected} (but was {value})")]
    InvalidParameter {
        name: &'static str,
        expected: &'static str,
        value: f64,
    },
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Checks a scale-like parameter (variance, gamma) for being finite and `> 0`.
pub(crate) fn positive(name: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0. {
        Ok(value)
    } else {
        log::debug!("rejecting {} = {}", name, value);
        Err(Error::InvalidParameter {
            name,
            expected: "finite and > 0",
            value,
        })
    }
}

/// Checks a location parameter for being finite.
pub(crate) fn finite(name: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        log::debug!("rejecting {} = {}", name, value);
        Err(Error::InvalidParameter {
            name,
            expected: "finite",
            value,
        })
    }
}
