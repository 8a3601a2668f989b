use anyhow::Result;
use anyhow::ensure;

use crate::geometry::geo_traits::{CollidesWith, Contains};
use crate::geometry::primitives::Circle;
use crate::geometry::primitives::Point;

///Axis-aligned rectangle
#[derive(Clone, Debug, PartialEq, Copy)]
pub struct Rect {
    pub x_min: f64,
    pub y_min: f64,
    pub x_max: f64,
    pub y_max: f64,
}

impl Rect {
    /// Degenerate rectangles (zero width or height) are allowed, inverted ones are not.
    pub fn try_new(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> Result<Self> {
        ensure!(
            x_min <= x_max && y_min <= y_max,
            "invalid rectangle, x_min: {x_min}, x_max: {x_max}, y_min: {y_min}, y_max: {y_max}"
        );
        Ok(Rect {
            x_min,
            y_min,
            x_max,
            y_max,
        })
    }

    /// Returns a new rectangle with the same centroid as `self` but shrunk by `d` on every side.
    /// If the new rectangle would be inverted, returns None.
    pub fn inset(mut self, d: f64) -> Option<Self> {
        self.x_min += d;
        self.y_min += d;
        self.x_max -= d;
        self.y_max -= d;

        match self.x_min <= self.x_max && self.y_min <= self.y_max {
            true => Some(self),
            false => None,
        }
    }

    /// Returns a new rectangle with the same centroid but scaled by `factor`.
    pub fn scale(self, factor: f64) -> Self {
        let dx = (self.x_max - self.x_min) * (factor - 1.0) / 2.0;
        let dy = (self.y_max - self.y_min) * (factor - 1.0) / 2.0;
        Rect {
            x_min: self.x_min - dx,
            y_min: self.y_min - dy,
            x_max: self.x_max + dx,
            y_max: self.y_max + dy,
        }
    }

    /// Distances from `point` to the nearest vertical and the nearest horizontal boundary.
    /// Negative when the point lies outside in that dimension.
    pub fn margins(&self, point: &Point) -> (f64, f64) {
        let Point(x, y) = *point;
        let margin_x = f64::min(x - self.x_min, self.x_max - x);
        let margin_y = f64::min(y - self.y_min, self.y_max - y);
        (margin_x, margin_y)
    }

    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }
}

impl CollidesWith<Point> for Rect {
    #[inline(always)]
    fn collides_with(&self, point: &Point) -> bool {
        let Point(x, y) = *point;
        x >= self.x_min && x <= self.x_max && y >= self.y_min && y <= self.y_max
    }
}

impl Contains<Circle> for Rect {
    /// Closed containment test with radius inset, a circle touching a side from within is contained.
    #[inline(always)]
    fn contains(&self, circle: &Circle) -> bool {
        let Circle {
            center: Point(x, y),
            radius: r,
        } = *circle;
        x - r >= self.x_min && x + r <= self.x_max && y - r >= self.y_min && y + r <= self.y_max
    }
}
