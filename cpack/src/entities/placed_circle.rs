use crate::entities::PackableItem;
use crate::geometry::primitives::{Circle, Point};

/// Footprint of an item that has been placed in a [`Layout`](crate::entities::Layout)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlacedCircle {
    /// Index of the item in the host's item sequence
    pub handle: usize,
    /// Footprint in plane coordinates
    pub circle: Circle,
}

impl PlacedCircle {
    pub fn new(item: &PackableItem, center: Point) -> Self {
        PlacedCircle {
            handle: item.handle,
            circle: item.circle_at(center),
        }
    }

    pub fn center(&self) -> Point {
        self.circle.center
    }

    pub fn radius(&self) -> f64 {
        self.circle.radius
    }
}
