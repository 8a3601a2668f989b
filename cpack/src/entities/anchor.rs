use serde::{Deserialize, Serialize};

use crate::entities::Surface;
use crate::geometry::primitives::Point;

/// Reference point on the surface used to seed a packing: where the first item goes,
/// and which region later fallback placements are drawn towards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StartAnchor {
    #[default]
    Center,
    TopEdge,
    BottomEdge,
    LeftEdge,
    RightEdge,
    TopLeftCorner,
    TopRightCorner,
    BottomLeftCorner,
    BottomRightCorner,
}

impl StartAnchor {
    pub const ALL: [StartAnchor; 9] = [
        StartAnchor::Center,
        StartAnchor::TopEdge,
        StartAnchor::BottomEdge,
        StartAnchor::LeftEdge,
        StartAnchor::RightEdge,
        StartAnchor::TopLeftCorner,
        StartAnchor::TopRightCorner,
        StartAnchor::BottomLeftCorner,
        StartAnchor::BottomRightCorner,
    ];

    /// Signs of the x and y coordinates of the anchor on the surface
    fn side(&self) -> (f64, f64) {
        match self {
            StartAnchor::Center => (0.0, 0.0),
            StartAnchor::TopEdge => (0.0, 1.0),
            StartAnchor::BottomEdge => (0.0, -1.0),
            StartAnchor::LeftEdge => (-1.0, 0.0),
            StartAnchor::RightEdge => (1.0, 0.0),
            StartAnchor::TopLeftCorner => (-1.0, 1.0),
            StartAnchor::TopRightCorner => (1.0, 1.0),
            StartAnchor::BottomLeftCorner => (-1.0, -1.0),
            StartAnchor::BottomRightCorner => (1.0, -1.0),
        }
    }

    /// Center of a circle of `radius` touching the boundary (or boundaries) of the anchor from the inside.
    /// [`StartAnchor::Center`] is the origin.
    pub fn position(&self, surface: &Surface, radius: f64) -> Point {
        let (sx, sy) = self.side();
        Point(
            sx * (surface.half_width - radius),
            sy * (surface.half_height - radius),
        )
    }

    /// Unit direction pointing from the anchor into the interior of the surface.
    /// Edges point along the perpendicular axis, corners along the diagonal towards the center.
    /// [`StartAnchor::Center`] has no direction and returns the zero vector.
    pub fn inward_direction(&self, surface: &Surface) -> Point {
        let (sx, sy) = self.side();
        let towards_center = Point(-sx * surface.half_width, -sy * surface.half_height);
        towards_center.normalized().unwrap_or_default()
    }
}
