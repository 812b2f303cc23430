//! Error types for mobius-rs.
//!
//! Every fallible operation in the crate returns [`Result`], an alias over
//! [`StripError`].

use thiserror::Error;

/// Result type alias using [`StripError`].
pub type Result<T> = std::result::Result<T, StripError>;

/// Errors that can occur while building, integrating or rendering a strip.
#[derive(Error, Debug)]
pub enum StripError {
    /// A strip or sampling parameter is outside its valid range.
    #[error("invalid parameter: {name} = {value} ({reason})")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// The rejected value, formatted.
        value: String,
        /// Why the value was rejected.
        reason: &'static str,
    },

    /// An integration produced NaN or infinity.
    #[error("{quantity} is not finite ({value})")]
    NonFinite {
        /// Which quantity was being integrated.
        quantity: &'static str,
        /// The offending value.
        value: f64,
    },

    /// The drawing backend failed.
    #[error("rendering failed: {0}")]
    Render(String),

    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl StripError {
    /// Create an invalid parameter error.
    pub fn invalid_param<T: std::fmt::Display>(
        name: &'static str,
        value: T,
        reason: &'static str,
    ) -> Self {
        StripError::InvalidParameter {
            name,
            value: value.to_string(),
            reason,
        }
    }
}
