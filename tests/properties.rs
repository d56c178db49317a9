#![warn(clippy::pedantic)]

use approx::assert_relative_eq;
use hvac_load::{compute_thermal_load, BuildingDescription, InvalidInputError};
use proptest::prelude::*;

fn any_building() -> impl Strategy<Value = BuildingDescription> {
    (
        (
            prop::sample::select(vec!["north", "South", "east", "WEST", "southwest", "attic"]),
            200.0..6_000.0f64,
            7.0..14.0f64,
            prop::sample::select(vec!["poor", "average", "good", ""]),
            0..30u32,
            prop::sample::select(vec!["single-pane", "double-pane", "low-e", "stained"]),
        ),
        (
            0..5u32,
            prop::sample::select(vec!["insulated", "non-insulated", "steel"]),
            0..12u32,
            0..15u32,
            0.0..5_000.0f64,
            -20.0..115.0f64,
            60.0..80.0f64,
        ),
    )
        .prop_map(
            |(
                (location, floor_area, ceiling_height, insulation, windows, window_type),
                (doors, door_type, occupants, appliances, lighting, outside, indoor),
            )| BuildingDescription {
                location: location.to_owned(),
                floor_area_sqft: floor_area,
                ceiling_height_ft: ceiling_height,
                insulation_grade: insulation.to_owned(),
                window_count: windows,
                window_type: window_type.to_owned(),
                exterior_door_count: doors,
                door_type: door_type.to_owned(),
                occupant_count: occupants,
                appliance_count: appliances,
                total_lighting_watts: lighting,
                outside_temp_f: outside,
                desired_indoor_temp_f: indoor,
            },
        )
        .prop_filter("temperatures must differ", |b| {
            b.outside_temp_f != b.desired_indoor_temp_f
        })
}

proptest! {
    #[test]
    fn identical_inputs_give_identical_results(building in any_building()) {
        let first = compute_thermal_load(&building).expect("valid building");
        let second = compute_thermal_load(&building.clone()).expect("valid building");
        prop_assert_eq!(first, second);
    }

    #[test]
    fn equal_temperatures_always_fail(mut building in any_building(), temperature in -50.0..150.0f64) {
        building.outside_temp_f = temperature;
        building.desired_indoor_temp_f = temperature;
        prop_assert_eq!(
            compute_thermal_load(&building),
            Err(InvalidInputError::EqualTemperatures { temperature })
        );
    }

    #[test]
    fn recommended_cooling_tons_is_the_next_half_ton(building in any_building()) {
        let result = compute_thermal_load(&building).expect("valid building");
        let doubled = result.recommended_cooling_tons * 2.0;
        prop_assert_eq!(doubled, doubled.round());
        prop_assert!(result.recommended_cooling_tons >= result.cooling_load_tons);
        prop_assert!(result.recommended_cooling_tons - result.cooling_load_tons < 0.5);
    }

    #[test]
    fn each_occupant_adds_four_hundred_btu(building in any_building()) {
        let base = compute_thermal_load(&building).expect("valid building");
        let more = BuildingDescription {
            occupant_count: building.occupant_count + 1,
            ..building
        };
        let extra = compute_thermal_load(&more).expect("valid building");
        assert_relative_eq!(
            extra.total_heat_gain - base.total_heat_gain,
            400.0,
            epsilon = 1.0e-6
        );
    }
}
