use hvac_load::ThermalLoadResult;
use std::fmt::Write;

/// Render a textual summary of a load estimate.
///
/// The breakdown lists each loss and gain path so the totals can be checked by
/// hand against a Manual J style worksheet.
#[must_use]
pub fn render_summary(result: &ThermalLoadResult) -> String {
    let mut output = String::new();

    writeln!(
        &mut output,
        "Thermal load estimate (heating Δ = {:+.1} °F, cooling Δ = {:+.1} °F)",
        result.heating_delta_f, result.cooling_delta_f
    )
    .expect("writing to string cannot fail");

    writeln!(
        &mut output,
        "Envelope: wall = {:.1} ft², roof = {:.1} ft², floor = {:.1} ft², windows = {:.1} ft², doors = {:.1} ft²",
        result.areas.wall, result.areas.roof, result.areas.floor, result.areas.window, result.areas.door
    )
    .expect("writing to string cannot fail");
    if result.has_implausible_geometry() {
        output.push_str("Warning: windows and doors exceed the gross wall area\n");
    }

    let loss = &result.heat_loss;
    writeln!(
        &mut output,
        "Heat loss (BTU/hr): wall {:.0}, roof {:.0}, floor {:.0}, windows {:.0}, doors {:.0}, infiltration {:.0}",
        loss.wall, loss.roof, loss.floor, loss.window, loss.door, loss.infiltration
    )
    .expect("writing to string cannot fail");

    let gain = &result.heat_gain;
    writeln!(
        &mut output,
        "Heat gain (BTU/hr): conduction {:.0}, solar {:.0}, occupants {:.0}, appliances {:.0}, lighting {:.0}",
        gain.conduction(),
        gain.solar,
        gain.occupant,
        gain.appliance,
        gain.lighting
    )
    .expect("writing to string cannot fail");

    writeln!(
        &mut output,
        "Totals: loss = {:.0} BTU/hr, gain = {:.0} BTU/hr (internal {:.0})",
        result.total_heat_loss, result.total_heat_gain, result.internal_heat_gain
    )
    .expect("writing to string cannot fail");

    writeln!(
        &mut output,
        "Design heating: {:.0} BTU/hr = {:.2} tons -> {:.1} tons",
        result.design_heating_load_btu, result.heating_load_tons, result.recommended_heating_tons
    )
    .expect("writing to string cannot fail");
    writeln!(
        &mut output,
        "Design cooling: {:.0} BTU/hr = {:.2} tons -> {:.1} tons",
        result.design_cooling_load_btu, result.cooling_load_tons, result.recommended_cooling_tons
    )
    .expect("writing to string cannot fail");

    writeln!(
        &mut output,
        "Recommended equipment: {}",
        result.recommended_equipment
    )
    .expect("writing to string cannot fail");

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use hvac_load::{compute_thermal_load, BuildingDescription};

    fn building() -> BuildingDescription {
        BuildingDescription {
            location: "south".into(),
            floor_area_sqft: 1_500.0,
            ceiling_height_ft: 8.0,
            insulation_grade: "average".into(),
            window_count: 8,
            window_type: "double-pane".into(),
            exterior_door_count: 2,
            door_type: "insulated".into(),
            occupant_count: 4,
            appliance_count: 5,
            total_lighting_watts: 500.0,
            outside_temp_f: 95.0,
            desired_indoor_temp_f: 75.0,
        }
    }

    #[test]
    fn formats_human_readable_report() {
        let result = compute_thermal_load(&building()).expect("valid building");
        let report = render_summary(&result);
        assert!(report.contains("Thermal load estimate"));
        assert!(report.contains("occupants 1600"));
        assert!(report.contains("-> 4.5 tons"));
        assert!(report.contains("Recommended equipment: 5 Ton Unit"));
        assert!(!report.contains("Warning"));
    }

    #[test]
    fn flags_implausible_geometry() {
        let crowded = BuildingDescription {
            floor_area_sqft: 100.0,
            window_count: 40,
            ..building()
        };
        let result = compute_thermal_load(&crowded).expect("numeric result");
        assert!(render_summary(&result).contains("Warning: windows and doors"));
    }
}
