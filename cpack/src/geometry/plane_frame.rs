use anyhow::{Context, Result, ensure};
use serde::{Deserialize, Serialize};

use crate::geometry::primitives::{Point, Vec3};

/// Frame of the packing plane in host world space.
///
/// `right` and `up` span the plane and define its 2D `x` and `y` axes, both unit length.
/// `forward` is the in-plane facing direction given to placed items when orientation is requested.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlaneFrame {
    pub origin: Vec3,
    pub right: Vec3,
    pub up: Vec3,
    pub forward: Vec3,
}

impl PlaneFrame {
    /// Creates a frame, normalizing `right` and `up`.
    /// Fails when either spanning axis is degenerate or when both are parallel.
    pub fn try_new(origin: Vec3, right: Vec3, up: Vec3, forward: Vec3) -> Result<Self> {
        ensure!(origin.is_finite(), "plane origin is not finite: {origin:?}");
        let right = right
            .normalized()
            .with_context(|| format!("degenerate plane right axis: {right:?}"))?;
        let up = up
            .normalized()
            .with_context(|| format!("degenerate plane up axis: {up:?}"))?;
        ensure!(
            right.cross(&up).length() > 1e-6,
            "plane right and up axes are parallel: {right:?}, {up:?}"
        );
        Ok(PlaneFrame {
            origin,
            right,
            up,
            forward,
        })
    }

    /// The world XY plane: right = +X, up = +Y, forward = +Y.
    pub fn xy() -> Self {
        PlaneFrame {
            origin: Vec3::ZERO,
            right: Vec3::X,
            up: Vec3::Y,
            forward: Vec3::Y,
        }
    }

    /// Same axes, different origin
    pub fn with_origin(&self, origin: Vec3) -> Self {
        PlaneFrame { origin, ..*self }
    }

    /// Projects a world position onto the plane, relative to the origin.
    pub fn project(&self, world: Vec3) -> Point {
        let rel = world - self.origin;
        Point(rel.dot(&self.right), rel.dot(&self.up))
    }

    /// Transforms a plane position back into world space.
    pub fn to_world(&self, p: Point) -> Vec3 {
        self.origin + self.right * p.0 + self.up * p.1
    }

    /// Facing direction for placed items: `forward`, or `right` when `forward` is degenerate.
    pub fn facing(&self) -> Vec3 {
        self.forward.normalized().unwrap_or(self.right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::approx_eq;

    fn floor_frame() -> PlaneFrame {
        // a horizontal floor: plane x along world X, plane y along world Z
        PlaneFrame::try_new(
            Vec3::new(10.0, 1.0, -3.0),
            Vec3::X,
            Vec3::new(0.0, 0.0, 2.0),
            Vec3::Z,
        )
        .unwrap()
    }

    #[test]
    fn projection_inverts_to_world() {
        let frame = floor_frame();
        let p = Point(0.75, -1.25);
        let world = frame.to_world(p);
        assert_eq!(world.y, 1.0);
        let back = frame.project(world);
        assert!(approx_eq!(f64, back.0, p.0) && approx_eq!(f64, back.1, p.1));
    }

    #[test]
    fn axes_are_normalized() {
        assert_eq!(floor_frame().up, Vec3::Z);
    }

    #[test]
    fn degenerate_axes_are_rejected() {
        assert!(PlaneFrame::try_new(Vec3::ZERO, Vec3::ZERO, Vec3::Y, Vec3::Y).is_err());
        assert!(PlaneFrame::try_new(Vec3::ZERO, Vec3::X, Vec3::X * 3.0, Vec3::Y).is_err());
    }

    #[test]
    fn facing_falls_back_to_right() {
        let frame = PlaneFrame {
            forward: Vec3::ZERO,
            ..floor_frame()
        };
        assert_eq!(frame.facing(), Vec3::X);
        assert_eq!(floor_frame().facing(), Vec3::Z);
    }
}
