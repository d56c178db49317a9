//! Lookup of engineering coefficients from qualitative building descriptors.
//!
//! Every table carries an explicit fallback so unrecognised labels resolve to a
//! sensible value instead of failing. The fallbacks mirror the "average",
//! "double-pane" and "insulated" entries except where noted on the table.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when a label does not name a known category.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownCategory(
    /// Label as supplied.
    pub String,
);

impl fmt::Display for UnknownCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown category {:?}", self.0)
    }
}

impl std::error::Error for UnknownCategory {}

/// Declare a category enum with its canonical hyphenated labels.
macro_rules! category {
    ($(#[$meta:meta])* $name:ident { $($(#[$vmeta:meta])* $variant:ident => $label:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $label)]
                $variant,
            )+
        }

        impl $name {
            /// Every variant in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Canonical label for this category.
            #[must_use]
            pub const fn label(self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }

        impl FromStr for $name {
            type Err = UnknownCategory;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let trimmed = s.trim();
                $name::ALL
                    .iter()
                    .copied()
                    .find(|category| category.label().eq_ignore_ascii_case(trimmed))
                    .ok_or_else(|| UnknownCategory(s.to_owned()))
            }
        }
    };
}

category! {
    /// Compass orientation of the main glazed facade.
    Orientation {
        /// Facing north.
        North => "north",
        /// Facing south.
        South => "south",
        /// Facing east.
        East => "east",
        /// Facing west.
        West => "west",
        /// Facing north-east.
        Northeast => "northeast",
        /// Facing north-west.
        Northwest => "northwest",
        /// Facing south-east.
        Southeast => "southeast",
        /// Facing south-west.
        Southwest => "southwest",
    }
}

category! {
    /// Overall insulation quality of the opaque envelope.
    InsulationGrade {
        /// Little or degraded insulation.
        Poor => "poor",
        /// Typical code-minimum insulation.
        Average => "average",
        /// Above-code insulation.
        Good => "good",
    }
}

category! {
    /// Glazing construction.
    WindowType {
        /// Single glazing.
        SinglePane => "single-pane",
        /// Double glazing.
        DoublePane => "double-pane",
        /// Double glazing with a low-emissivity coating.
        LowE => "low-e",
    }
}

category! {
    /// Exterior door construction.
    DoorType {
        /// Foam-core or otherwise insulated door.
        Insulated => "insulated",
        /// Solid wood or hollow-core door.
        NonInsulated => "non-insulated",
    }
}

/// Opaque envelope surfaces with insulation-grade dependent U-values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Surface {
    /// Exterior walls.
    Wall,
    /// Roof or ceiling below an unconditioned attic.
    Roof,
    /// Floor over an unconditioned space or slab.
    Floor,
}

/// Immutable mapping from a category to a coefficient with an explicit fallback.
#[derive(Clone, Copy, Debug)]
pub struct CoefficientTable<K: 'static> {
    /// Coefficient for each recognised category.
    entries: &'static [(K, f64)],
    /// Coefficient for anything else.
    fallback: f64,
}

impl<K: Copy + PartialEq + FromStr> CoefficientTable<K> {
    /// Create a table from its entries and the value used for anything else.
    #[must_use]
    pub const fn new(entries: &'static [(K, f64)], fallback: f64) -> Self {
        Self { entries, fallback }
    }

    /// Value used when a category is missing or unrecognised.
    #[must_use]
    pub const fn fallback(&self) -> f64 {
        self.fallback
    }

    /// Look up a typed category.
    #[must_use]
    pub fn get(&self, key: Option<K>) -> f64 {
        key.and_then(|key| {
            self.entries
                .iter()
                .find(|(candidate, _)| *candidate == key)
                .map(|(_, value)| *value)
        })
        .unwrap_or(self.fallback)
    }

    /// Look up a free-text label, falling back when it does not parse.
    #[must_use]
    pub fn resolve(&self, label: &str) -> f64 {
        let key = label.parse::<K>().ok();
        if key.is_none() {
            tracing::warn!(label, fallback = self.fallback, "unrecognised category, using fallback");
        }
        self.get(key)
    }
}

/// Wall U-values in BTU/hr·ft²·°F.
pub const WALL_U_VALUES: CoefficientTable<InsulationGrade> = CoefficientTable::new(
    &[
        (InsulationGrade::Poor, 0.35),
        (InsulationGrade::Average, 0.25),
        (InsulationGrade::Good, 0.15),
    ],
    0.25,
);

/// Roof U-values in BTU/hr·ft²·°F.
pub const ROOF_U_VALUES: CoefficientTable<InsulationGrade> = CoefficientTable::new(
    &[
        (InsulationGrade::Poor, 0.30),
        (InsulationGrade::Average, 0.20),
        (InsulationGrade::Good, 0.10),
    ],
    0.20,
);

/// Floor U-values in BTU/hr·ft²·°F.
pub const FLOOR_U_VALUES: CoefficientTable<InsulationGrade> = CoefficientTable::new(
    &[
        (InsulationGrade::Poor, 0.25),
        (InsulationGrade::Average, 0.15),
        (InsulationGrade::Good, 0.08),
    ],
    0.15,
);

/// Window U-values in BTU/hr·ft²·°F.
///
/// Unlike the other tables the fallback is the generic 0.25 rather than the
/// double-pane entry.
pub const WINDOW_U_VALUES: CoefficientTable<WindowType> = CoefficientTable::new(
    &[
        (WindowType::SinglePane, 0.9),
        (WindowType::DoublePane, 0.5),
        (WindowType::LowE, 0.3),
    ],
    GENERIC_U_VALUE,
);

/// Door U-values in BTU/hr·ft²·°F.
///
/// Falls back to the generic 0.25 rather than the insulated entry.
pub const DOOR_U_VALUES: CoefficientTable<DoorType> = CoefficientTable::new(
    &[(DoorType::Insulated, 0.2), (DoorType::NonInsulated, 0.5)],
    GENERIC_U_VALUE,
);

/// Solar heat gain coefficients by glazing type.
pub const SOLAR_HEAT_GAIN_COEFFICIENTS: CoefficientTable<WindowType> = CoefficientTable::new(
    &[
        (WindowType::SinglePane, 0.75),
        (WindowType::DoublePane, 0.60),
        (WindowType::LowE, 0.40),
    ],
    0.60,
);

/// Infiltration multipliers by insulation grade.
pub const INFILTRATION_RATES: CoefficientTable<InsulationGrade> = CoefficientTable::new(
    &[
        (InsulationGrade::Poor, 1.2),
        (InsulationGrade::Average, 0.8),
        (InsulationGrade::Good, 0.5),
    ],
    0.8,
);

/// Sun exposure multipliers by orientation.
pub const SUN_EXPOSURE_FACTORS: CoefficientTable<Orientation> = CoefficientTable::new(
    &[
        (Orientation::North, 0.7),
        (Orientation::South, 1.2),
        (Orientation::East, 0.9),
        (Orientation::West, 1.0),
        (Orientation::Northeast, 0.8),
        (Orientation::Northwest, 0.8),
        (Orientation::Southeast, 1.1),
        (Orientation::Southwest, 1.1),
    ],
    1.0,
);

/// U-value used when nothing more specific matches.
pub const GENERIC_U_VALUE: f64 = 0.25;

/// Resolve a U-value from a material label.
///
/// With a [`Surface`] the label is read as an insulation grade. Without one it is
/// read as a window or door type, falling back to [`GENERIC_U_VALUE`].
///
/// # Examples
/// ```
/// use hvac_load::{resolve_u_value, Surface};
///
/// assert_eq!(resolve_u_value("good", Some(Surface::Roof)), 0.10);
/// assert_eq!(resolve_u_value("low-e", None), 0.3);
/// assert_eq!(resolve_u_value("non-insulated", None), 0.5);
/// assert_eq!(resolve_u_value("triple-pane", None), 0.25);
/// ```
#[must_use]
pub fn resolve_u_value(material: &str, surface: Option<Surface>) -> f64 {
    match surface {
        Some(Surface::Wall) => WALL_U_VALUES.resolve(material),
        Some(Surface::Roof) => ROOF_U_VALUES.resolve(material),
        Some(Surface::Floor) => FLOOR_U_VALUES.resolve(material),
        None => {
            if let Ok(window) = material.parse::<WindowType>() {
                WINDOW_U_VALUES.get(Some(window))
            } else if let Ok(door) = material.parse::<DoorType>() {
                DOOR_U_VALUES.get(Some(door))
            } else {
                tracing::warn!(material, "unrecognised fenestration type, using generic U-value");
                GENERIC_U_VALUE
            }
        }
    }
}

/// Resolve the solar heat gain coefficient for a glazing label.
#[must_use]
pub fn resolve_solar_heat_gain_coefficient(window_type: &str) -> f64 {
    SOLAR_HEAT_GAIN_COEFFICIENTS.resolve(window_type)
}

/// Resolve the infiltration multiplier for an insulation grade label.
#[must_use]
pub fn resolve_infiltration_rate(insulation_grade: &str) -> f64 {
    INFILTRATION_RATES.resolve(insulation_grade)
}

/// Resolve the sun exposure multiplier for an orientation label, ignoring case.
#[must_use]
pub fn resolve_sun_exposure_factor(location: &str) -> f64 {
    SUN_EXPOSURE_FACTORS.resolve(location)
}

/// All coefficients needed for one load calculation.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Coefficients {
    /// Wall U-value.
    pub wall_u_value: f64,
    /// Roof U-value.
    pub roof_u_value: f64,
    /// Floor U-value.
    pub floor_u_value: f64,
    /// Window U-value.
    pub window_u_value: f64,
    /// Door U-value.
    pub door_u_value: f64,
    /// Solar heat gain coefficient of the glazing.
    pub solar_heat_gain_coefficient: f64,
    /// Infiltration multiplier.
    pub infiltration_rate: f64,
    /// Sun exposure multiplier.
    pub sun_exposure_factor: f64,
}

impl Coefficients {
    /// Resolve every coefficient from the building's category labels.
    #[must_use]
    pub fn resolve(
        insulation_grade: &str,
        window_type: &str,
        door_type: &str,
        location: &str,
    ) -> Self {
        Self {
            wall_u_value: resolve_u_value(insulation_grade, Some(Surface::Wall)),
            roof_u_value: resolve_u_value(insulation_grade, Some(Surface::Roof)),
            floor_u_value: resolve_u_value(insulation_grade, Some(Surface::Floor)),
            window_u_value: resolve_u_value(window_type, None),
            door_u_value: resolve_u_value(door_type, None),
            solar_heat_gain_coefficient: resolve_solar_heat_gain_coefficient(window_type),
            infiltration_rate: resolve_infiltration_rate(insulation_grade),
            sun_exposure_factor: resolve_sun_exposure_factor(location),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insulation_tables_match_published_values() {
        let expected = [
            ("poor", 0.35, 0.30, 0.25, 1.2),
            ("average", 0.25, 0.20, 0.15, 0.8),
            ("good", 0.15, 0.10, 0.08, 0.5),
        ];
        for (grade, wall, roof, floor, infiltration) in expected {
            assert_eq!(resolve_u_value(grade, Some(Surface::Wall)), wall);
            assert_eq!(resolve_u_value(grade, Some(Surface::Roof)), roof);
            assert_eq!(resolve_u_value(grade, Some(Surface::Floor)), floor);
            assert_eq!(resolve_infiltration_rate(grade), infiltration);
        }
    }

    #[test]
    fn unknown_grade_uses_average_values() {
        for label in ["", "excellent", "R-30"] {
            assert_eq!(resolve_u_value(label, Some(Surface::Wall)), 0.25);
            assert_eq!(resolve_u_value(label, Some(Surface::Roof)), 0.20);
            assert_eq!(resolve_u_value(label, Some(Surface::Floor)), 0.15);
            assert_eq!(resolve_infiltration_rate(label), 0.8);
        }
    }

    #[test]
    fn unknown_window_type_differs_between_u_value_and_shgc() {
        assert_eq!(resolve_u_value("stained-glass", None), GENERIC_U_VALUE);
        assert_eq!(resolve_solar_heat_gain_coefficient("stained-glass"), 0.60);
        assert_eq!(WINDOW_U_VALUES.fallback(), 0.25);
    }

    #[test]
    fn fenestration_and_door_values() {
        assert_eq!(resolve_u_value("single-pane", None), 0.9);
        assert_eq!(resolve_u_value("double-pane", None), 0.5);
        assert_eq!(resolve_u_value("low-e", None), 0.3);
        assert_eq!(resolve_u_value("insulated", None), 0.2);
        assert_eq!(resolve_u_value("non-insulated", None), 0.5);
        assert_eq!(DOOR_U_VALUES.get(None), 0.25);
        assert_eq!(resolve_solar_heat_gain_coefficient("single-pane"), 0.75);
        assert_eq!(resolve_solar_heat_gain_coefficient("low-e"), 0.40);
    }

    #[test]
    fn sun_exposure_ignores_case() {
        assert_eq!(resolve_sun_exposure_factor("South"), 1.2);
        assert_eq!(resolve_sun_exposure_factor("NORTHWEST"), 0.8);
        assert_eq!(resolve_sun_exposure_factor(" southeast "), 1.1);
        assert_eq!(resolve_sun_exposure_factor("up"), 1.0);
    }

    #[test]
    fn labels_round_trip_through_from_str() {
        for orientation in Orientation::ALL {
            assert_eq!(orientation.label().parse::<Orientation>(), Ok(*orientation));
        }
        assert_eq!("Low-E".parse::<WindowType>(), Ok(WindowType::LowE));
        assert_eq!(
            "metal".parse::<DoorType>(),
            Err(UnknownCategory("metal".to_owned()))
        );
    }

    #[test]
    fn categories_serialize_with_hyphenated_labels() {
        let json = serde_json::to_string(&WindowType::DoublePane).expect("serializes");
        assert_eq!(json, "\"double-pane\"");
        let door: DoorType = serde_json::from_str("\"non-insulated\"").expect("deserializes");
        assert_eq!(door, DoorType::NonInsulated);
    }
}
