use hvac_load::{compute_thermal_load, BuildingDescription};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Describe a modest ranch house on a cold design day
    let building = BuildingDescription {
        location: "northwest".into(),
        floor_area_sqft: 1_800.0,
        ceiling_height_ft: 8.0,
        insulation_grade: "good".into(),
        window_count: 10,
        window_type: "low-e".into(),
        exterior_door_count: 2,
        door_type: "insulated".into(),
        occupant_count: 3,
        appliance_count: 4,
        total_lighting_watts: 600.0,
        outside_temp_f: 10.0,
        desired_indoor_temp_f: 70.0,
    };

    // Estimate the loads
    let result = compute_thermal_load(&building)?;

    println!(
        "Heating: {:.0} BTU/hr ({:.1} tons)",
        result.design_heating_load_btu, result.recommended_heating_tons
    );
    println!(
        "Cooling: {:.0} BTU/hr -> {}",
        result.design_cooling_load_btu, result.recommended_equipment
    );

    // All done
    Ok(())
}
