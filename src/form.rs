//! Coercion of calculator form text into a [`BuildingDescription`].

use serde::Deserialize;

use crate::errors::FormError;
use crate::load::BuildingDescription;

/// Calculator fields exactly as a user typed them.
///
/// Numeric fields hold text; blank entries are read as zero.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CalculatorForm {
    /// Facade orientation label.
    pub location: String,
    /// Floor area in square feet.
    pub floor_area_sqft: String,
    /// Ceiling height in feet.
    pub ceiling_height_ft: String,
    /// Insulation grade label.
    pub insulation_grade: String,
    /// Number of windows.
    pub window_count: String,
    /// Glazing type label.
    pub window_type: String,
    /// Number of exterior doors.
    pub exterior_door_count: String,
    /// Door type label.
    pub door_type: String,
    /// Number of occupants.
    pub occupant_count: String,
    /// Number of appliances.
    pub appliance_count: String,
    /// Lighting power in watts.
    pub total_lighting_watts: String,
    /// Outdoor design temperature in °F.
    pub outside_temp_f: String,
    /// Indoor set point in °F.
    pub desired_indoor_temp_f: String,
}

impl CalculatorForm {
    /// Coerce the form into a building description.
    ///
    /// Floor area, ceiling height and both temperatures must be present and
    /// non-zero. Category labels are passed through untouched.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::MissingField`] when a required field is blank or zero,
    /// [`FormError::InvalidNumber`] when numeric text does not parse and
    /// [`FormError::InvalidCount`] when a count is not a whole number of zero or more.
    ///
    /// # Examples
    /// ```
    /// use hvac_load::{CalculatorForm, FormError};
    ///
    /// let form = CalculatorForm {
    ///     floor_area_sqft: "1500".into(),
    ///     ceiling_height_ft: "8".into(),
    ///     outside_temp_f: "".into(),
    ///     desired_indoor_temp_f: "72".into(),
    ///     ..CalculatorForm::default()
    /// };
    /// assert_eq!(form.to_description(), Err(FormError::MissingField("outsideTempF")));
    /// ```
    pub fn to_description(&self) -> Result<BuildingDescription, FormError> {
        let description = BuildingDescription {
            location: self.location.clone(),
            floor_area_sqft: number("floorAreaSqft", &self.floor_area_sqft)?,
            ceiling_height_ft: number("ceilingHeightFt", &self.ceiling_height_ft)?,
            insulation_grade: self.insulation_grade.clone(),
            window_count: count("windowCount", &self.window_count)?,
            window_type: self.window_type.clone(),
            exterior_door_count: count("exteriorDoorCount", &self.exterior_door_count)?,
            door_type: self.door_type.clone(),
            occupant_count: count("occupantCount", &self.occupant_count)?,
            appliance_count: count("applianceCount", &self.appliance_count)?,
            total_lighting_watts: number("totalLightingWatts", &self.total_lighting_watts)?,
            outside_temp_f: number("outsideTempF", &self.outside_temp_f)?,
            desired_indoor_temp_f: number("desiredIndoorTempF", &self.desired_indoor_temp_f)?,
        };

        let required = [
            ("floorAreaSqft", description.floor_area_sqft),
            ("ceilingHeightFt", description.ceiling_height_ft),
            ("outsideTempF", description.outside_temp_f),
            ("desiredIndoorTempF", description.desired_indoor_temp_f),
        ];
        if let Some(&(field, _)) = required.iter().find(|(_, value)| *value == 0.0) {
            return Err(FormError::MissingField(field));
        }

        Ok(description)
    }
}

/// Parse a real number, reading blank text as zero.
fn number(field: &'static str, text: &str) -> Result<f64, FormError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(0.0);
    }
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| FormError::InvalidNumber {
            field,
            text: text.to_owned(),
        })
}

/// Parse a non-negative whole number, reading blank text as zero.
fn count(field: &'static str, text: &str) -> Result<u32, FormError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(0);
    }
    trimmed.parse::<u32>().map_err(|_| FormError::InvalidCount {
        field,
        text: text.to_owned(),
    })
}
