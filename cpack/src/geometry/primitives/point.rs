use std::f64::consts::TAU;

use crate::geometry::geo_traits::DistanceTo;

/// Geometric primitive representing a point (or a direction) in the packing plane
#[derive(Debug, Clone, PartialEq, Copy, Default)]
pub struct Point(pub f64, pub f64);

impl Point {
    /// The point at `distance` from `self` in the direction of `angle` (radians, counter-clockwise from the x-axis).
    pub fn polar_offset(&self, angle: f64, distance: f64) -> Point {
        let (sin, cos) = angle.sin_cos();
        Point(self.0 + cos * distance, self.1 + sin * distance)
    }

    /// `n` equally spaced angles in `[0, 2π)`, starting at 0.
    pub fn equally_spaced_angles(n: usize) -> impl Iterator<Item = f64> + Clone {
        (0..n).map(move |i| TAU * i as f64 / n as f64)
    }

    pub fn dot(&self, other: &Point) -> f64 {
        self.0 * other.0 + self.1 * other.1
    }

    pub fn norm(&self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Unit vector in the same direction, `None` for a (near) zero vector.
    pub fn normalized(&self) -> Option<Point> {
        let norm = self.norm();
        match norm > f64::EPSILON {
            true => Some(Point(self.0 / norm, self.1 / norm)),
            false => None,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.0.is_finite() && self.1.is_finite()
    }
}

impl DistanceTo<Point> for Point {
    #[inline(always)]
    fn distance_to(&self, other: &Point) -> f64 {
        self.sq_distance_to(other).sqrt()
    }

    #[inline(always)]
    fn sq_distance_to(&self, other: &Point) -> f64 {
        (self.0 - other.0).powi(2) + (self.1 - other.1).powi(2)
    }
}

impl From<Point> for (f64, f64) {
    fn from(p: Point) -> Self {
        (p.0, p.1)
    }
}
