use std::f64::consts::PI;

use crate::geometry::primitives::{Circle, Point};

/// Item to be packed, reduced to its circular footprint.
/// Built once per packing pass and immutable thereafter.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PackableItem {
    /// Index of the item in the host's item sequence
    pub handle: usize,
    /// Footprint radius, already including half of the spacing padding
    pub radius: f64,
    /// Footprint area, `π·radius²`
    pub area: f64,
}

impl PackableItem {
    pub fn new(handle: usize, radius: f64) -> Self {
        PackableItem {
            handle,
            radius,
            area: PI * radius * radius,
        }
    }

    /// Items with a non-positive or non-finite footprint can never be packed
    pub fn is_degenerate(&self) -> bool {
        !(self.radius.is_finite() && self.radius > 0.0 && self.area > 0.0)
    }

    /// The footprint of the item if it were centered at `center`
    pub fn circle_at(&self, center: Point) -> Circle {
        Circle::new(center, self.radius)
    }
}
