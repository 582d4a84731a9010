//! Error types for structured error handling.
//!
//! This module provides:
//! - `PricingError`: Errors from instrument construction and pricing operations

use thiserror::Error;

/// Categorised pricing errors.
///
/// Every failure is reported at the point it is detected, either when an
/// instrument is constructed or when it is priced. There is no recovery
/// layer: the caller receives the error and decides what to do with it.
///
/// # Variants
/// - `InvalidParameter`: A parameter violates its domain constraint
/// - `NumericDegeneracy`: A formula would divide by zero or return a non-finite value
/// - `UnknownInstrument`: An instrument type name could not be parsed
///
/// # Examples
/// ```
/// use pricer_core::types::PricingError;
///
/// let err = PricingError::invalid_parameter("strike", -100.0, "positive and finite");
/// assert_eq!(
///     format!("{}", err),
///     "Invalid parameter: strike = -100 (must be positive and finite)"
/// );
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PricingError {
    /// A parameter violates its domain constraint.
    #[error("Invalid parameter: {parameter} = {value} (must be {constraint})")]
    InvalidParameter {
        /// Name of the offending parameter
        parameter: &'static str,
        /// The rejected value
        value: f64,
        /// Human-readable constraint the value must satisfy
        constraint: &'static str,
    },

    /// Formula evaluation degenerated (division by zero, non-finite result).
    #[error("Numeric degeneracy: {message}")]
    NumericDegeneracy {
        /// Description of the degenerate computation
        message: String,
    },

    /// Unrecognised instrument type name.
    #[error("Unknown instrument type: {0}")]
    UnknownInstrument(String),
}

impl PricingError {
    /// Create an `InvalidParameter` error.
    pub fn invalid_parameter(
        parameter: &'static str,
        value: f64,
        constraint: &'static str,
    ) -> Self {
        Self::InvalidParameter {
            parameter,
            value,
            constraint,
        }
    }

    /// Create a `NumericDegeneracy` error.
    pub fn numeric_degeneracy(message: impl Into<String>) -> Self {
        Self::NumericDegeneracy {
            message: message.into(),
        }
    }

    /// Returns whether this is an `InvalidParameter` error.
    #[inline]
    pub fn is_invalid_parameter(&self) -> bool {
        matches!(self, Self::InvalidParameter { .. })
    }

    /// Returns whether this is a `NumericDegeneracy` error.
    #[inline]
    pub fn is_numeric_degeneracy(&self) -> bool {
        matches!(self, Self::NumericDegeneracy { .. })
    }

    /// Returns the name of the offending parameter, if any.
    pub fn parameter(&self) -> Option<&'static str> {
        match self {
            Self::InvalidParameter { parameter, .. } => Some(parameter),
            Self::NumericDegeneracy { .. } | Self::UnknownInstrument(_) => None,
        }
    }
}
