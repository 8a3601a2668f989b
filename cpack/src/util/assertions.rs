use itertools::Itertools;
use log::error;

use crate::entities::{Layout, PackableItem, Surface};
use crate::geometry::primitives::Circle;
use crate::util::FPA;

//Various checks to verify correctness of the state of the system
//Used in debug_assertion!() blocks and tests

/// Slack granted to floating point errors when verifying placements
pub const PLACEMENT_TOLERANCE: f64 = 1e-4;

/// Whether `circle` fits on the surface of `layout` and does not overlap any placed circle, up to [`PLACEMENT_TOLERANCE`].
pub fn circle_is_feasible(layout: &Layout, circle: &Circle) -> bool {
    circle_is_contained(&layout.surface, circle)
        && layout
            .placed()
            .iter()
            .all(|pc| pc.circle.gap(circle) >= -PLACEMENT_TOLERANCE)
}

/// Whether `circle` lies inside the surface, up to [`PLACEMENT_TOLERANCE`].
pub fn circle_is_contained(surface: &Surface, circle: &Circle) -> bool {
    let (margin_x, margin_y) = surface.margins(&circle.center);
    margin_x - circle.radius >= -PLACEMENT_TOLERANCE
        && margin_y - circle.radius >= -PLACEMENT_TOLERANCE
}

/// Checks that no two placed circles overlap and that all of them are contained in the surface.
pub fn layout_is_valid(layout: &Layout) -> bool {
    for pc in layout.placed() {
        if !circle_is_contained(&layout.surface, &pc.circle) {
            error!("item {} sticks out of the surface: {:?}", pc.handle, pc.circle);
            return false;
        }
    }
    for (a, b) in layout.placed().iter().tuple_combinations() {
        if a.circle.gap(&b.circle) < -PLACEMENT_TOLERANCE {
            error!(
                "items {} and {} overlap: {:?}, {:?}",
                a.handle, b.handle, a.circle, b.circle
            );
            return false;
        }
    }
    true
}

/// Checks that the summed area of `selected` items does not exceed `usable_area`.
pub fn selection_respects_budget(selected: &[PackableItem], usable_area: f64) -> bool {
    let total: f64 = selected.iter().map(|i| i.area).sum();
    FPA(total) <= FPA(usable_area)
}
