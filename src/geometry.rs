//! Envelope surface areas derived from a building footprint.
//!
//! The footprint is treated as a square single-storey box, so the roof and floor
//! areas both equal the floor area and the gross wall area follows from the
//! perimeter of that square.

use serde::Serialize;

use crate::config::DesignFactors;

/// Surface areas of the building envelope in square feet.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvelopeAreas {
    /// Net opaque wall area after removing windows and doors. May be negative.
    pub wall: f64,
    /// Roof area.
    pub roof: f64,
    /// Floor area.
    pub floor: f64,
    /// Total glazed area.
    pub window: f64,
    /// Total exterior door area.
    pub door: f64,
}

impl EnvelopeAreas {
    /// Derive every envelope area using the given assumed opening sizes.
    ///
    /// # Examples
    /// ```
    /// use hvac_load::{DesignFactors, EnvelopeAreas};
    ///
    /// let areas = EnvelopeAreas::from_footprint(1_600.0, 8.0, 4, 1, &DesignFactors::default());
    /// assert_eq!(areas.window, 60.0);
    /// assert_eq!(areas.door, 20.0);
    /// assert_eq!(areas.wall, 160.0 * 8.0 - 80.0);
    /// ```
    #[must_use]
    pub fn from_footprint(
        floor_area_sqft: f64,
        ceiling_height_ft: f64,
        window_count: u32,
        door_count: u32,
        factors: &DesignFactors,
    ) -> Self {
        let window = opening_area(window_count, factors.window_size_sqft);
        let door = opening_area(door_count, factors.door_size_sqft);
        Self {
            wall: gross_wall_area(floor_area_sqft, ceiling_height_ft) - window - door,
            roof: floor_area_sqft,
            floor: floor_area_sqft,
            window,
            door,
        }
    }

    /// Whether the openings consume the entire wall.
    #[must_use]
    pub fn is_implausible(&self) -> bool {
        self.wall <= 0.0
    }
}

/// Perimeter of a square footprint with the given area.
#[must_use]
pub fn perimeter(floor_area_sqft: f64) -> f64 {
    4.0 * floor_area_sqft.sqrt()
}

/// Wall area before windows and doors are removed.
#[must_use]
pub fn gross_wall_area(floor_area_sqft: f64, ceiling_height_ft: f64) -> f64 {
    perimeter(floor_area_sqft) * ceiling_height_ft
}

/// Combined area of `count` openings of `size_sqft` each.
#[must_use]
pub fn opening_area(count: u32, size_sqft: f64) -> f64 {
    f64::from(count) * size_sqft
}

/// Net wall area using the default 15 ft² window and 20 ft² door sizes.
///
/// The result is not clamped: window and door counts that exceed the gross wall
/// area yield a negative value.
///
/// # Examples
/// ```
/// use hvac_load::compute_wall_area;
///
/// assert_eq!(compute_wall_area(100.0, 10.0, 0, 0), 400.0);
/// assert!(compute_wall_area(100.0, 10.0, 30, 0) < 0.0);
/// ```
#[must_use]
pub fn compute_wall_area(
    floor_area_sqft: f64,
    ceiling_height_ft: f64,
    window_count: u32,
    door_count: u32,
) -> f64 {
    EnvelopeAreas::from_footprint(
        floor_area_sqft,
        ceiling_height_ft,
        window_count,
        door_count,
        &DesignFactors::default(),
    )
    .wall
}
