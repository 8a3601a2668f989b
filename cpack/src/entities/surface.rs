use serde::{Deserialize, Serialize};

use crate::geometry::geo_traits::Contains;
use crate::geometry::primitives::{Circle, Point, Rect};

/// How the dimensions of the surface are derived from the host's reference object
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SizeMode {
    /// The reference scale is taken literally as width and height
    #[default]
    Scale,
    /// The reference mesh bounds multiplied by the reference scale
    MeshBounds,
}

/// Bounded rectangular surface on which items are packed.
/// Axis-aligned in plane coordinates and centered on the plane origin.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Surface {
    pub half_width: f64,
    pub half_height: f64,
}

impl Surface {
    pub fn new(half_width: f64, half_height: f64) -> Self {
        Surface {
            half_width,
            half_height,
        }
    }

    /// Derives the surface from a reference object: its `scale` (x, y) and optionally the size of its mesh bounds (x, y).
    /// [`SizeMode::MeshBounds`] without mesh bounds behaves as [`SizeMode::Scale`].
    pub fn from_reference(scale: (f64, f64), mesh_size: Option<(f64, f64)>, mode: SizeMode) -> Self {
        let (width, height) = match (mode, mesh_size) {
            (SizeMode::MeshBounds, Some((mesh_w, mesh_h))) => (mesh_w * scale.0, mesh_h * scale.1),
            (SizeMode::MeshBounds, None) | (SizeMode::Scale, _) => scale,
        };
        Surface::new(width.abs() / 2.0, height.abs() / 2.0)
    }

    pub fn width(&self) -> f64 {
        2.0 * self.half_width
    }

    pub fn height(&self) -> f64 {
        2.0 * self.half_height
    }

    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    /// A surface without positive, finite area cannot hold anything
    pub fn is_degenerate(&self) -> bool {
        let area = self.area();
        !(area.is_finite() && area > 0.0 && self.half_width > 0.0 && self.half_height > 0.0)
    }

    pub fn rect(&self) -> Rect {
        Rect {
            x_min: -self.half_width,
            y_min: -self.half_height,
            x_max: self.half_width,
            y_max: self.half_height,
        }
    }

    /// Whether a circle of `radius` fits at all, i.e. it does not exceed either half-extent
    pub fn can_hold(&self, radius: f64) -> bool {
        radius <= self.half_width && radius <= self.half_height
    }

    /// Whether a circle of `radius` centered at `center` lies fully inside the surface.
    /// Touching a side is allowed.
    pub fn fits(&self, center: Point, radius: f64) -> bool {
        self.rect().contains(&Circle { center, radius })
    }

    /// The region in which the center of a circle of `radius` must lie to fit, `None` if it can never fit.
    pub fn inset(&self, radius: f64) -> Option<Rect> {
        self.rect().inset(radius)
    }

    /// Distances from `p` to the nearest vertical and the nearest horizontal side
    pub fn margins(&self, p: &Point) -> (f64, f64) {
        self.rect().margins(p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(SizeMode::Scale, None, (2.0, 1.0); "literal scale")]
    #[test_case(SizeMode::Scale, Some((10.0, 10.0)), (2.0, 1.0); "literal scale ignores mesh")]
    #[test_case(SizeMode::MeshBounds, Some((3.0, 0.5)), (3.0, 0.25); "mesh bounds times scale")]
    #[test_case(SizeMode::MeshBounds, None, (2.0, 1.0); "missing mesh bounds")]
    fn derived_from_reference(mode: SizeMode, mesh: Option<(f64, f64)>, half_extents: (f64, f64)) {
        let surface = Surface::from_reference((4.0, 2.0), mesh, mode);
        assert_eq!((surface.half_width, surface.half_height), half_extents);
    }

    #[test]
    fn negative_scale_is_mirrored() {
        let surface = Surface::from_reference((-4.0, 2.0), None, SizeMode::Scale);
        assert_eq!(surface.half_width, 2.0);
    }

    #[test]
    fn degenerate_surfaces() {
        assert!(Surface::new(0.0, 1.0).is_degenerate());
        assert!(Surface::new(f64::NAN, 1.0).is_degenerate());
        assert!(!Surface::new(0.5, 0.5).is_degenerate());
    }

    #[test]
    fn hold_and_fit() {
        let surface = Surface::new(2.0, 1.0);
        assert!(surface.can_hold(1.0));
        assert!(!surface.can_hold(1.1));
        assert!(surface.fits(Point(1.0, 0.0), 1.0));
        assert!(!surface.fits(Point(1.0, 0.5), 1.0));
    }
}
