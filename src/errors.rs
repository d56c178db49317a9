//! Error types produced while validating inputs or estimating loads.

use thiserror::Error;

/// Error returned when a [`BuildingDescription`](crate::BuildingDescription) cannot be
/// turned into a thermal load.
///
/// # Examples
///
/// ```
/// use hvac_load::{compute_thermal_load, BuildingDescription, InvalidInputError};
///
/// let building = BuildingDescription {
///     outside_temp_f: 72.0,
///     desired_indoor_temp_f: 72.0,
///     ..BuildingDescription::default()
/// };
/// let error = compute_thermal_load(&building).expect_err("zero delta is rejected");
/// assert_eq!(error, InvalidInputError::EqualTemperatures { temperature: 72.0 });
/// ```
#[derive(Clone, Debug, Error, PartialEq)]
pub enum InvalidInputError {
    /// Returned when the outside and desired indoor temperatures match.
    #[error("outside and indoor temperatures are both {temperature} °F; the design delta is zero")]
    EqualTemperatures {
        /// The shared temperature in degrees Fahrenheit.
        temperature: f64,
    },
    /// Returned when a numeric field is NaN or infinite.
    #[error("{field} must be a finite number (received {value})")]
    NonFinite {
        /// Name of the offending field.
        field: &'static str,
        /// Rejected value.
        value: f64,
    },
    /// Returned when a dimension that must be strictly positive is zero or negative.
    #[error("{field} must be positive (received {value})")]
    NonPositive {
        /// Name of the offending field.
        field: &'static str,
        /// Rejected value.
        value: f64,
    },
}

/// Error returned when coercing calculator form text into a building description.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum FormError {
    /// Returned when a required field is blank or zero.
    #[error("{0} is required")]
    MissingField(&'static str),
    /// Returned when a numeric field does not parse as a number.
    #[error("{field} is not a number (received {text:?})")]
    InvalidNumber {
        /// Name of the offending field.
        field: &'static str,
        /// Text as entered.
        text: String,
    },
    /// Returned when a count field is not a non-negative whole number.
    #[error("{field} must be a whole number of zero or more (received {text:?})")]
    InvalidCount {
        /// Name of the offending field.
        field: &'static str,
        /// Text as entered.
        text: String,
    },
}

/// Error returned when loading or checking [`DesignFactors`](crate::DesignFactors).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Returned when the factors file cannot be read.
    #[error("could not read design factors: {0}")]
    Io(#[from] std::io::Error),
    /// Returned when the factors file is not valid JSON for the expected shape.
    #[error("could not parse design factors: {0}")]
    Parse(#[from] serde_json::Error),
    /// Returned when a factor is non-finite or not strictly positive.
    #[error("design factor {field} must be a positive finite number (received {value})")]
    Invalid {
        /// Name of the offending factor.
        field: &'static str,
        /// Rejected value.
        value: f64,
    },
}
