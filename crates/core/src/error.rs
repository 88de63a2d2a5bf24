//! Error types for randcolor.

use thiserror::Error;

/// Errors produced by color generation and mutation.
///
/// Only malformed requests surface here. A mutation that leaves the gamut of
/// a chroma-based model is repaired internally and never becomes an error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ColorError {
    /// A symmetric delta was negative.
    #[error("negative delta: {0} (must be >= 0)")]
    NegativeDelta(f64),

    /// The lower delta of an asymmetric shift exceeded the upper delta.
    #[error("invalid delta range: min {min} is greater than max {max}")]
    InvalidDelta { min: f64, max: f64 },

    /// The lower proportion of an asymmetric spread exceeded the upper one.
    #[error("invalid proportion range: min {min} is greater than max {max}")]
    InvertedRange { min: f64, max: f64 },

    /// A spread proportion fell outside its allowed range.
    #[error("proportion {value} out of range [{min}, {max}]")]
    ProportionOutOfRange { value: f64, min: f64, max: f64 },

    /// A clamped primitive computed an interval whose lower bound lies above
    /// its upper bound.
    #[error("inverted sampling interval [{lo}, {hi}]")]
    InvertedInterval { lo: f64, hi: f64 },

    /// A requested opacity fell outside `[0, 1]` or was NaN.
    #[error("opacity {0} out of range [0, 1]")]
    OpacityOutOfRange(f64),

    /// An input scalar was NaN or infinite.
    #[error("non-finite value for {0}")]
    NonFinite(&'static str),

    /// A color string could not be parsed.
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// A color model name was not recognized.
    #[error("unknown color model: {0}")]
    UnknownModel(String),

    /// A channel name was not recognized for the given model.
    #[error("unknown channel '{channel}' for model {model}")]
    UnknownChannel { model: String, channel: String },

    /// An operation kind was not recognized.
    #[error("unknown operation: {0}")]
    UnknownOperation(String),

    /// A required operation parameter was missing.
    #[error("parameter not found: {0}")]
    ParamNotFound(String),

    /// A recipe failed validation.
    #[error("invalid recipe: {0}")]
    InvalidRecipe(String),

    /// Reading or writing a file failed.
    #[error("I/O error: {0}")]
    Io(String),
}

impl ColorError {
    /// Rejects NaN and infinities for the named input.
    pub(crate) fn check_finite(name: &'static str, value: f64) -> Result<f64, ColorError> {
        if value.is_finite() {
            Ok(value)
        } else {
            Err(ColorError::NonFinite(name))
        }
    }

    /// Accepts an opacity in `[0, 1]`.
    pub(crate) fn check_opacity(value: f64) -> Result<f64, ColorError> {
        if (0.0..=1.0).contains(&value) {
            Ok(value)
        } else {
            Err(ColorError::OpacityOutOfRange(value))
        }
    }
}
