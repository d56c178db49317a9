//! Tonnage rounding and packaged equipment selection.

use std::fmt;

use serde::{Serialize, Serializer};

/// Nominal equipment size recommended for a cooling load.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EquipmentSize {
    /// 1.5 ton unit.
    OneAndHalfTon,
    /// 2 ton unit.
    TwoTon,
    /// 2.5 ton unit.
    TwoAndHalfTon,
    /// 3 ton unit.
    ThreeTon,
    /// 4 ton unit.
    FourTon,
    /// 5 ton unit.
    FiveTon,
    /// Loads above five tons need more than one packaged unit.
    Custom,
}

/// Inclusive upper bounds in tons, checked in ascending order.
const BREAKPOINTS: [(f64, EquipmentSize); 6] = [
    (1.5, EquipmentSize::OneAndHalfTon),
    (2.0, EquipmentSize::TwoTon),
    (2.5, EquipmentSize::TwoAndHalfTon),
    (3.0, EquipmentSize::ThreeTon),
    (4.0, EquipmentSize::FourTon),
    (5.0, EquipmentSize::FiveTon),
];

impl EquipmentSize {
    /// Select the smallest unit whose capacity covers `cooling_load_tons`.
    ///
    /// The comparison uses the unrounded tonnage.
    ///
    /// # Examples
    /// ```
    /// use hvac_load::EquipmentSize;
    ///
    /// assert_eq!(EquipmentSize::for_cooling_tons(1.5), EquipmentSize::OneAndHalfTon);
    /// assert_eq!(EquipmentSize::for_cooling_tons(1.50001), EquipmentSize::TwoTon);
    /// assert_eq!(EquipmentSize::for_cooling_tons(7.0).to_string(),
    ///     "Multiple Units or Custom System Required");
    /// ```
    #[must_use]
    pub fn for_cooling_tons(cooling_load_tons: f64) -> Self {
        BREAKPOINTS
            .iter()
            .find(|(limit, _)| cooling_load_tons <= *limit)
            .map_or(Self::Custom, |(_, size)| *size)
    }

    /// Human-readable label for the recommendation.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::OneAndHalfTon => "1.5 Ton Unit",
            Self::TwoTon => "2 Ton Unit",
            Self::TwoAndHalfTon => "2.5 Ton Unit",
            Self::ThreeTon => "3 Ton Unit",
            Self::FourTon => "4 Ton Unit",
            Self::FiveTon => "5 Ton Unit",
            Self::Custom => "Multiple Units or Custom System Required",
        }
    }

    /// Nominal capacity in tons, if a single packaged unit suffices.
    #[must_use]
    pub fn nominal_tons(self) -> Option<f64> {
        BREAKPOINTS
            .iter()
            .find(|(_, size)| *size == self)
            .map(|(limit, _)| *limit)
    }
}

impl fmt::Display for EquipmentSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for EquipmentSize {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// Round a tonnage up to the next multiple of half a ton.
///
/// # Examples
/// ```
/// use hvac_load::round_up_to_half_ton;
///
/// assert_eq!(round_up_to_half_ton(2.01), 2.5);
/// assert_eq!(round_up_to_half_ton(3.0), 3.0);
/// assert_eq!(round_up_to_half_ton(-2.07), -2.0);
/// ```
#[must_use]
pub fn round_up_to_half_ton(tons: f64) -> f64 {
    (tons * 2.0).ceil() / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds_are_inclusive_upper_bounds() {
        let cases = [
            (0.0, EquipmentSize::OneAndHalfTon),
            (1.5, EquipmentSize::OneAndHalfTon),
            (1.500_01, EquipmentSize::TwoTon),
            (2.0, EquipmentSize::TwoTon),
            (2.3, EquipmentSize::TwoAndHalfTon),
            (3.0, EquipmentSize::ThreeTon),
            (3.2, EquipmentSize::FourTon),
            (5.0, EquipmentSize::FiveTon),
            (5.000_1, EquipmentSize::Custom),
        ];
        for (tons, expected) in cases {
            assert_eq!(EquipmentSize::for_cooling_tons(tons), expected, "{tons} tons");
        }
    }

    #[test]
    fn negative_load_selects_smallest_unit() {
        assert_eq!(
            EquipmentSize::for_cooling_tons(-1.0),
            EquipmentSize::OneAndHalfTon
        );
    }

    #[test]
    fn nominal_capacity_matches_label() {
        assert_eq!(EquipmentSize::TwoAndHalfTon.nominal_tons(), Some(2.5));
        assert_eq!(EquipmentSize::Custom.nominal_tons(), None);
        assert_eq!(EquipmentSize::FourTon.to_string(), "4 Ton Unit");
    }

    #[test]
    fn serializes_as_label() {
        let json = serde_json::to_string(&EquipmentSize::ThreeTon).expect("serializes");
        assert_eq!(json, "\"3 Ton Unit\"");
    }

    #[test]
    fn rounding_goes_up_to_half_tons() {
        assert_eq!(round_up_to_half_ton(0.0), 0.0);
        assert_eq!(round_up_to_half_ton(0.1), 0.5);
        assert_eq!(round_up_to_half_ton(4.258), 4.5);
        assert_eq!(round_up_to_half_ton(4.5), 4.5);
    }
}
