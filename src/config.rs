//! Tunable design assumptions used by the load engine.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Heat capacity of air in BTU per cubic foot per °F.
pub const AIR_HEAT_CAPACITY: f64 = 0.018;

/// BTU/hr released per watt of electric lighting.
pub const BTU_PER_WATT: f64 = 3.41;

/// BTU/hr in one ton of heating or cooling capacity.
pub const BTU_PER_TON: f64 = 12_000.0;

/// Safety margins and rule-of-thumb sizes applied during a load estimate.
///
/// Every field falls back to its default when omitted from a JSON document, so a
/// file only needs to name the factors it overrides.
///
/// # Examples
/// ```
/// use hvac_load::DesignFactors;
///
/// let factors: DesignFactors =
///     serde_json::from_str(r#"{ "coolingSafetyFactor": 1.25 }"#).expect("valid json");
/// assert_eq!(factors.cooling_safety_factor, 1.25);
/// assert_eq!(factors.heating_safety_factor, 1.20);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct DesignFactors {
    /// Multiplier applied to the total heat loss.
    pub heating_safety_factor: f64,
    /// Multiplier applied to the total heat gain.
    pub cooling_safety_factor: f64,
    /// Assumed area of one window in square feet.
    pub window_size_sqft: f64,
    /// Assumed area of one exterior door in square feet.
    pub door_size_sqft: f64,
    /// Peak solar radiation on glazing in BTU/hr·ft².
    pub peak_solar_radiation: f64,
    /// Sensible and latent gain per occupant in BTU/hr.
    pub occupant_gain_btu: f64,
    /// Gain per major appliance in BTU/hr.
    pub appliance_gain_btu: f64,
}

impl Default for DesignFactors {
    fn default() -> Self {
        Self {
            heating_safety_factor: 1.20,
            cooling_safety_factor: 1.15,
            window_size_sqft: 15.0,
            door_size_sqft: 20.0,
            peak_solar_radiation: 230.0,
            occupant_gain_btu: 400.0,
            appliance_gain_btu: 800.0,
        }
    }
}

impl DesignFactors {
    /// Read factors from a JSON file and check them.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] when the file cannot be read,
    /// [`ConfigError::Parse`] when it is not a valid factors document and
    /// [`ConfigError::Invalid`] when a factor is not a positive finite number.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Parse factors from JSON text and check them.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and
    /// [`ConfigError::Invalid`] when a factor is not a positive finite number.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let factors: Self = serde_json::from_str(text)?;
        factors.validate()?;
        Ok(factors)
    }

    /// Check that every factor is a positive finite number.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first offending factor.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("heatingSafetyFactor", self.heating_safety_factor),
            ("coolingSafetyFactor", self.cooling_safety_factor),
            ("windowSizeSqft", self.window_size_sqft),
            ("doorSizeSqft", self.door_size_sqft),
            ("peakSolarRadiation", self.peak_solar_radiation),
            ("occupantGainBtu", self.occupant_gain_btu),
            ("applianceGainBtu", self.appliance_gain_btu),
        ];
        for (field, value) in fields {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::Invalid { field, value });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        DesignFactors::default()
            .validate()
            .expect("default factors are valid");
    }

    #[test]
    fn empty_document_yields_defaults() {
        let factors = DesignFactors::from_json("{}").expect("empty object parses");
        assert_eq!(factors, DesignFactors::default());
    }

    #[test]
    fn non_positive_factor_is_rejected() {
        let error = DesignFactors::from_json(r#"{ "heatingSafetyFactor": 0.0 }"#)
            .expect_err("zero factor rejected");
        assert!(matches!(
            error,
            ConfigError::Invalid {
                field: "heatingSafetyFactor",
                ..
            }
        ));
    }

    #[test]
    fn unknown_field_is_a_parse_error() {
        let error = DesignFactors::from_json(r#"{ "safety": 2.0 }"#).expect_err("typo rejected");
        assert!(matches!(error, ConfigError::Parse(_)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let error = DesignFactors::from_path("does/not/exist.json").expect_err("no such file");
        assert!(matches!(error, ConfigError::Io(_)));
    }
}
