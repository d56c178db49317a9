#![warn(clippy::all)]
#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]
#![doc = include_str!("../README.md")]

mod coefficients;
mod config;
mod equipment;
mod errors;
mod form;
mod geometry;
mod load;

pub use coefficients::{
    resolve_infiltration_rate, resolve_solar_heat_gain_coefficient, resolve_sun_exposure_factor,
    resolve_u_value, CoefficientTable, Coefficients, DoorType, InsulationGrade, Orientation,
    Surface, UnknownCategory, WindowType, DOOR_U_VALUES, FLOOR_U_VALUES, GENERIC_U_VALUE,
    INFILTRATION_RATES, ROOF_U_VALUES, SOLAR_HEAT_GAIN_COEFFICIENTS, SUN_EXPOSURE_FACTORS,
    WALL_U_VALUES, WINDOW_U_VALUES,
};
pub use config::{DesignFactors, AIR_HEAT_CAPACITY, BTU_PER_TON, BTU_PER_WATT};
pub use equipment::{round_up_to_half_ton, EquipmentSize};
pub use errors::{ConfigError, FormError, InvalidInputError};
pub use form::CalculatorForm;
pub use geometry::{compute_wall_area, gross_wall_area, opening_area, perimeter, EnvelopeAreas};
pub use load::{
    compute_thermal_load, compute_thermal_load_with, cooling_delta, heating_delta,
    BuildingDescription, HeatGain, HeatLoss, ThermalLoadResult,
};
