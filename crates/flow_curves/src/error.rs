//! Error types and result alias for the crate.
//!
//! This module defines [`enum@crate::error::Error`] and the crate-wide [Result] alias. Variants cover
//! rejected parameters, seeds outside the field, and out-of-domain field sampling.
//! Density cell saturation is not an error; see [`crate::density::DensityCell`].
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[non_exhaustive]
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("seed ({x}, {y}) lies outside the flow field")]
    SeedOutOfBounds { x: f64, y: f64 },

    #[error("position ({x}, {y}) lies outside the flow field")]
    OutOfBounds { x: f64, y: f64 },
}

impl Error {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Error::InvalidParameter(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_wraps_message() {
        let err = Error::invalid("d_sep must be > 0");
        assert!(matches!(err, Error::InvalidParameter(ref msg) if msg == "d_sep must be > 0"));
    }

    #[test]
    fn display_includes_coordinates() {
        let err = Error::SeedOutOfBounds { x: -1.0, y: 2.5 };
        assert_eq!(err.to_string(), "seed (-1, 2.5) lies outside the flow field");
    }
}
