use std::f64::consts::PI;

use crate::geometry::geo_traits::{CollidesWith, DistanceTo, Shape};
use crate::geometry::primitives::Point;

/// Geometric primitive representing a circle
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
}

impl Circle {
    pub fn new(center: Point, radius: f64) -> Self {
        debug_assert!(
            radius.is_finite() && radius >= 0.0,
            "invalid circle radius: {radius}"
        );
        debug_assert!(center.is_finite(), "invalid circle center: {center:?}");

        Self { center, radius }
    }

    /// Distance between the boundaries of two circles, negative if they overlap.
    pub fn gap(&self, other: &Circle) -> f64 {
        self.center.distance_to(&other.center) - (self.radius + other.radius)
    }
}

/// Two circles collide when their interiors overlap.
/// Exact tangency (center distance equal to the sum of radii) is not a collision.
impl CollidesWith<Circle> for Circle {
    #[inline(always)]
    fn collides_with(&self, other: &Circle) -> bool {
        let sq_d = self.center.sq_distance_to(&other.center);
        let r_sum = self.radius + other.radius;

        sq_d < r_sum * r_sum
    }
}

impl Shape for Circle {
    fn area(&self) -> f64 {
        self.radius * self.radius * PI
    }
}
