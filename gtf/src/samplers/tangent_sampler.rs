use cpack::entities::Layout;
use cpack::geometry::primitives::Point;

/// Generates candidate positions for a new circle that are exactly tangent to an already placed circle.
///
/// Around every placed circle `P`, `n_angles` positions are generated at equally spaced angles (starting at 0),
/// at distance `r_p + radius` from the center of `P`.
/// Placed circles are visited in registry order.
#[derive(Debug, Clone, Copy)]
pub struct TangentSampler {
    pub n_angles: usize,
    pub radius: f64,
}

/// A tangent position and the index of the placed circle it touches
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TangentCandidate {
    pub parent: usize,
    pub position: Point,
}

impl TangentSampler {
    pub fn new(n_angles: usize, radius: f64) -> Self {
        assert!(n_angles > 0);
        Self { n_angles, radius }
    }

    pub fn candidates<'a>(&self, layout: &'a Layout) -> impl Iterator<Item = TangentCandidate> + 'a {
        let TangentSampler { n_angles, radius } = *self;
        layout
            .placed()
            .iter()
            .enumerate()
            .flat_map(move |(parent, pc)| {
                let distance = pc.radius() + radius;
                Point::equally_spaced_angles(n_angles).map(move |angle| TangentCandidate {
                    parent,
                    position: pc.center().polar_offset(angle, distance),
                })
            })
    }

    /// Total number of candidates generated for `layout`
    pub fn n_candidates(&self, layout: &Layout) -> usize {
        layout.len() * self.n_angles
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cpack::entities::{PackableItem, Surface};
    use cpack::geometry::geo_traits::DistanceTo;
    use float_cmp::approx_eq;

    #[test]
    fn candidates_touch_their_parent() {
        let mut layout = Layout::new(Surface::new(5.0, 5.0));
        layout.place(&PackableItem::new(0, 1.0), Point(0.0, 0.0));
        layout.place(&PackableItem::new(1, 0.5), Point(1.5, 0.0));

        let sampler = TangentSampler::new(6, 0.25);
        let candidates = sampler.candidates(&layout).collect::<Vec<_>>();
        assert_eq!(candidates.len(), sampler.n_candidates(&layout));

        for c in &candidates {
            let parent = &layout.placed()[c.parent];
            let d = parent.center().distance_to(&c.position);
            assert!(approx_eq!(f64, d, parent.radius() + 0.25, epsilon = 1e-12));
        }
        // registry order, first angle is 0
        assert_eq!(candidates[0].parent, 0);
        assert_eq!(candidates[0].position, Point(1.25, 0.0));
        assert_eq!(candidates[6].parent, 1);
    }
}
