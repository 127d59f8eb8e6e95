//! Error types for palette generation.

use thiserror::Error;

/// Result type alias for tintshade operations.
pub type Result<T> = std::result::Result<T, PaletteError>;

/// Errors raised while parsing colors or validating a palette request.
///
/// All of them are caller input errors. Nothing is transient, so retrying
/// the same call always fails the same way.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PaletteError {
    /// The input could not be parsed as a hex string, named color or RGB
    /// triple.
    #[error("Invalid color format: {input:?}")]
    InvalidColorFormat {
        /// The rejected input.
        input: String,
    },

    /// A request parameter is out of its valid domain.
    #[error("Invalid parameter: {parameter} = {value}")]
    InvalidParameter {
        /// Name of the offending parameter.
        parameter: String,
        /// The rejected value, rendered for display.
        value: String,
    },
}

impl PaletteError {
    /// Create an invalid color format error for the given input.
    pub fn invalid_color(input: impl Into<String>) -> Self {
        Self::InvalidColorFormat {
            input: input.into(),
        }
    }

    /// Create an invalid parameter error.
    pub fn invalid_parameter(parameter: impl Into<String>, value: impl ToString) -> Self {
        Self::InvalidParameter {
            parameter: parameter.into(),
            value: value.to_string(),
        }
    }
}
