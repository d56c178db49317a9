//! Heating and cooling load estimation for a single-zone building.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::coefficients::Coefficients;
use crate::config::{DesignFactors, AIR_HEAT_CAPACITY, BTU_PER_TON, BTU_PER_WATT};
use crate::equipment::{round_up_to_half_ton, EquipmentSize};
use crate::errors::InvalidInputError;
use crate::geometry::EnvelopeAreas;

/// Description of the building whose loads are being estimated.
///
/// Category fields hold free-text labels. Unrecognised labels are not an error;
/// they resolve to the default coefficient for that category.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildingDescription {
    /// Orientation of the main glazed facade, e.g. `"south"`.
    pub location: String,
    /// Conditioned floor area in square feet.
    pub floor_area_sqft: f64,
    /// Ceiling height in feet.
    pub ceiling_height_ft: f64,
    /// Insulation grade: `"poor"`, `"average"` or `"good"`.
    pub insulation_grade: String,
    /// Number of windows.
    pub window_count: u32,
    /// Glazing type: `"single-pane"`, `"double-pane"` or `"low-e"`.
    pub window_type: String,
    /// Number of exterior doors.
    pub exterior_door_count: u32,
    /// Door type: `"insulated"` or `"non-insulated"`.
    pub door_type: String,
    /// Number of regular occupants.
    pub occupant_count: u32,
    /// Number of major heat-producing appliances.
    pub appliance_count: u32,
    /// Installed lighting power in watts.
    pub total_lighting_watts: f64,
    /// Outdoor design temperature in °F.
    pub outside_temp_f: f64,
    /// Indoor set point in °F.
    pub desired_indoor_temp_f: f64,
}

impl BuildingDescription {
    /// Check the description before any arithmetic is performed.
    ///
    /// Matching temperatures are reported first, whatever the other fields hold.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInputError::EqualTemperatures`] when the design delta is zero,
    /// [`InvalidInputError::NonFinite`] for NaN or infinite numbers and
    /// [`InvalidInputError::NonPositive`] when the floor area or ceiling height is not
    /// strictly positive.
    pub fn validate(&self) -> Result<(), InvalidInputError> {
        if self.outside_temp_f == self.desired_indoor_temp_f {
            return Err(InvalidInputError::EqualTemperatures {
                temperature: self.outside_temp_f,
            });
        }
        let numbers = [
            ("floorAreaSqft", self.floor_area_sqft),
            ("ceilingHeightFt", self.ceiling_height_ft),
            ("totalLightingWatts", self.total_lighting_watts),
            ("outsideTempF", self.outside_temp_f),
            ("desiredIndoorTempF", self.desired_indoor_temp_f),
        ];
        for (field, value) in numbers {
            if !value.is_finite() {
                return Err(InvalidInputError::NonFinite { field, value });
            }
        }
        for &(field, value) in &numbers[..2] {
            if value <= 0.0 {
                return Err(InvalidInputError::NonPositive { field, value });
            }
        }
        Ok(())
    }

    /// Interior air volume in cubic feet.
    #[must_use]
    pub fn volume_cuft(&self) -> f64 {
        self.floor_area_sqft * self.ceiling_height_ft
    }
}

/// Temperature difference driving heat loss, in °F.
#[must_use]
pub fn heating_delta(outside_temp_f: f64, desired_indoor_temp_f: f64) -> f64 {
    desired_indoor_temp_f - outside_temp_f
}

/// Temperature difference driving heat gain, in °F.
#[must_use]
pub fn cooling_delta(outside_temp_f: f64, desired_indoor_temp_f: f64) -> f64 {
    outside_temp_f - desired_indoor_temp_f
}

/// Heat loss by path in BTU/hr.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeatLoss {
    /// Conduction through walls.
    pub wall: f64,
    /// Conduction through the roof.
    pub roof: f64,
    /// Conduction through the floor.
    pub floor: f64,
    /// Conduction through windows.
    pub window: f64,
    /// Conduction through doors.
    pub door: f64,
    /// Air leakage.
    pub infiltration: f64,
}

impl HeatLoss {
    /// Sum of the conduction terms.
    #[must_use]
    pub fn conduction(&self) -> f64 {
        self.wall + self.roof + self.floor + self.window + self.door
    }

    /// Sum of every loss path.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.conduction() + self.infiltration
    }
}

/// Heat gain by source in BTU/hr.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeatGain {
    /// Conduction through walls.
    pub wall: f64,
    /// Conduction through the roof.
    pub roof: f64,
    /// Conduction through the floor.
    pub floor: f64,
    /// Conduction through windows.
    pub window: f64,
    /// Conduction through doors.
    pub door: f64,
    /// Solar radiation admitted by the glazing.
    pub solar: f64,
    /// People.
    pub occupant: f64,
    /// Appliances.
    pub appliance: f64,
    /// Electric lighting.
    pub lighting: f64,
}

impl HeatGain {
    /// Sum of the conduction terms.
    #[must_use]
    pub fn conduction(&self) -> f64 {
        self.wall + self.roof + self.floor + self.window + self.door
    }

    /// Sum of occupant, appliance and lighting gains.
    #[must_use]
    pub fn internal(&self) -> f64 {
        self.occupant + self.appliance + self.lighting
    }

    /// Sum of every gain source.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.conduction() + self.solar + self.internal()
    }
}

/// Outcome of a load estimate.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThermalLoadResult {
    /// Coefficients resolved from the building's categories.
    pub coefficients: Coefficients,
    /// Envelope areas in square feet.
    pub areas: EnvelopeAreas,
    /// Indoor minus outdoor temperature in °F.
    pub heating_delta_f: f64,
    /// Outdoor minus indoor temperature in °F.
    pub cooling_delta_f: f64,
    /// Heat loss by path.
    pub heat_loss: HeatLoss,
    /// Heat gain by source.
    pub heat_gain: HeatGain,
    /// Occupant, appliance and lighting gains in BTU/hr.
    pub internal_heat_gain: f64,
    /// Total heat loss in BTU/hr.
    pub total_heat_loss: f64,
    /// Total heat gain in BTU/hr.
    pub total_heat_gain: f64,
    /// Heat loss with the heating safety factor applied, in BTU/hr.
    #[serde(rename = "designHeatingLoadBTU")]
    pub design_heating_load_btu: f64,
    /// Heat gain with the cooling safety factor applied, in BTU/hr.
    #[serde(rename = "designCoolingLoadBTU")]
    pub design_cooling_load_btu: f64,
    /// Design heating load in tons.
    pub heating_load_tons: f64,
    /// Design cooling load in tons.
    pub cooling_load_tons: f64,
    /// Heating tonnage rounded up to the next half ton.
    pub recommended_heating_tons: f64,
    /// Cooling tonnage rounded up to the next half ton.
    pub recommended_cooling_tons: f64,
    /// Equipment chosen from the unrounded cooling tonnage.
    pub recommended_equipment: EquipmentSize,
}

impl ThermalLoadResult {
    /// Whether the openings consumed the whole wall, making the estimate suspect.
    #[must_use]
    pub fn has_implausible_geometry(&self) -> bool {
        self.areas.is_implausible()
    }
}

/// Estimate heating and cooling loads using the default [`DesignFactors`].
///
/// # Errors
///
/// Returns [`InvalidInputError`] when the description fails
/// [`BuildingDescription::validate`].
///
/// # Examples
/// ```
/// use hvac_load::{compute_thermal_load, BuildingDescription};
///
/// let building = BuildingDescription {
///     location: "south".into(),
///     floor_area_sqft: 1_500.0,
///     ceiling_height_ft: 8.0,
///     insulation_grade: "average".into(),
///     window_count: 8,
///     window_type: "double-pane".into(),
///     exterior_door_count: 2,
///     door_type: "insulated".into(),
///     occupant_count: 4,
///     appliance_count: 5,
///     total_lighting_watts: 500.0,
///     outside_temp_f: 95.0,
///     desired_indoor_temp_f: 75.0,
/// };
/// let result = compute_thermal_load(&building).expect("valid building");
/// assert_eq!(result.heat_gain.occupant, 1_600.0);
/// assert_eq!(result.recommended_equipment.to_string(), "5 Ton Unit");
/// ```
pub fn compute_thermal_load(
    building: &BuildingDescription,
) -> Result<ThermalLoadResult, InvalidInputError> {
    compute_thermal_load_with(building, &DesignFactors::default())
}

/// Estimate heating and cooling loads using explicit design factors.
///
/// # Errors
///
/// Returns [`InvalidInputError`] when the description fails
/// [`BuildingDescription::validate`].
pub fn compute_thermal_load_with(
    building: &BuildingDescription,
    factors: &DesignFactors,
) -> Result<ThermalLoadResult, InvalidInputError> {
    building.validate()?;

    let coefficients = Coefficients::resolve(
        &building.insulation_grade,
        &building.window_type,
        &building.door_type,
        &building.location,
    );
    let areas = EnvelopeAreas::from_footprint(
        building.floor_area_sqft,
        building.ceiling_height_ft,
        building.window_count,
        building.exterior_door_count,
        factors,
    );
    if areas.is_implausible() {
        warn!(
            wall_area = areas.wall,
            window_count = building.window_count,
            door_count = building.exterior_door_count,
            "openings exceed gross wall area"
        );
    }

    let heating_delta_f = heating_delta(building.outside_temp_f, building.desired_indoor_temp_f);
    let cooling_delta_f = cooling_delta(building.outside_temp_f, building.desired_indoor_temp_f);

    let heat_loss = HeatLoss {
        wall: coefficients.wall_u_value * areas.wall * heating_delta_f,
        roof: coefficients.roof_u_value * areas.roof * heating_delta_f,
        floor: coefficients.floor_u_value * areas.floor * heating_delta_f,
        window: coefficients.window_u_value * areas.window * heating_delta_f,
        door: coefficients.door_u_value * areas.door * heating_delta_f,
        infiltration: AIR_HEAT_CAPACITY
            * building.volume_cuft()
            * heating_delta_f
            * coefficients.infiltration_rate,
    };

    let heat_gain = HeatGain {
        wall: coefficients.wall_u_value * areas.wall * cooling_delta_f,
        roof: coefficients.roof_u_value * areas.roof * cooling_delta_f,
        floor: coefficients.floor_u_value * areas.floor * cooling_delta_f,
        window: coefficients.window_u_value * areas.window * cooling_delta_f,
        door: coefficients.door_u_value * areas.door * cooling_delta_f,
        solar: areas.window
            * coefficients.solar_heat_gain_coefficient
            * coefficients.sun_exposure_factor
            * factors.peak_solar_radiation,
        occupant: f64::from(building.occupant_count) * factors.occupant_gain_btu,
        appliance: f64::from(building.appliance_count) * factors.appliance_gain_btu,
        lighting: building.total_lighting_watts * BTU_PER_WATT,
    };

    let total_heat_loss = heat_loss.total();
    let total_heat_gain = heat_gain.total();
    let design_heating_load_btu = total_heat_loss * factors.heating_safety_factor;
    let design_cooling_load_btu = total_heat_gain * factors.cooling_safety_factor;
    let heating_load_tons = design_heating_load_btu / BTU_PER_TON;
    let cooling_load_tons = design_cooling_load_btu / BTU_PER_TON;
    let recommended_equipment = EquipmentSize::for_cooling_tons(cooling_load_tons);

    debug!(
        total_heat_loss,
        total_heat_gain,
        cooling_load_tons,
        equipment = %recommended_equipment,
        "thermal load computed"
    );

    Ok(ThermalLoadResult {
        coefficients,
        areas,
        heating_delta_f,
        cooling_delta_f,
        heat_loss,
        heat_gain,
        internal_heat_gain: heat_gain.internal(),
        total_heat_loss,
        total_heat_gain,
        design_heating_load_btu,
        design_cooling_load_btu,
        heating_load_tons,
        cooling_load_tons,
        recommended_heating_tons: round_up_to_half_ton(heating_load_tons),
        recommended_cooling_tons: round_up_to_half_ton(cooling_load_tons),
        recommended_equipment,
    })
}
