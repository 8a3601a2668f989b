use ordered_float::OrderedFloat;

use crate::entities::{PackableItem, PlacedCircle, Surface};
use crate::geometry::geo_traits::{CollidesWith, DistanceTo, Shape};
use crate::geometry::primitives::{Circle, Point};
use crate::util::assertions;

/// A [`Layout`] is the registry of all circles placed on a [`Surface`] during a packing pass.
/// Circles can only be appended, never moved or removed.
#[derive(Clone, Debug)]
pub struct Layout {
    /// The surface the circles are placed on
    pub surface: Surface,
    placed: Vec<PlacedCircle>,
}

impl Layout {
    pub fn new(surface: Surface) -> Self {
        Layout {
            surface,
            placed: vec![],
        }
    }

    /// Places an item with its footprint centered at `center`.
    /// Returns the index of the placed circle in the registry.
    pub fn place(&mut self, item: &PackableItem, center: Point) -> usize {
        let pc = PlacedCircle::new(item, center);
        debug_assert!(
            assertions::circle_is_feasible(self, &pc.circle),
            "infeasible placement of item {} at {:?}",
            item.handle,
            center
        );
        self.placed.push(pc);
        self.placed.len() - 1
    }

    /// Whether `circle` lies inside the surface without overlapping any placed circle
    pub fn is_feasible(&self, circle: &Circle) -> bool {
        self.surface.fits(circle.center, circle.radius) && !self.collides(circle, None)
    }

    /// Whether `circle` overlaps any placed circle, except the one at index `ignored`.
    /// Tangency is not an overlap.
    pub fn collides(&self, circle: &Circle, ignored: Option<usize>) -> bool {
        self.placed
            .iter()
            .enumerate()
            .filter(|(i, _)| Some(*i) != ignored)
            .any(|(_, pc)| pc.circle.collides_with(circle))
    }

    /// Distance from `p` to the center of the nearest placed circle, `None` if the layout is empty
    pub fn nearest_center_distance(&self, p: Point) -> Option<f64> {
        self.placed
            .iter()
            .map(|pc| pc.center().distance_to(&p))
            .min_by_key(|&d| OrderedFloat(d))
    }

    pub fn placed(&self) -> &[PlacedCircle] {
        &self.placed
    }

    pub fn len(&self) -> usize {
        self.placed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placed.is_empty()
    }

    /// Total area of all placed circles
    pub fn placed_area(&self) -> f64 {
        self.placed.iter().map(|pc| pc.circle.area()).sum()
    }

    /// Ratio of the placed area to the surface area
    pub fn usage(&self) -> f64 {
        match self.surface.is_degenerate() {
            true => 0.0,
            false => self.placed_area() / self.surface.area(),
        }
    }
}
