use serde::{Deserialize, Serialize};

use crate::geometry::primitives::Vec3;

/// Axis-aligned bounding box in host world space, the geometric extent of an item
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb3 {
    pub center: Vec3,
    /// Half of the size along each world axis, components are non-negative
    pub half_size: Vec3,
}

impl Aabb3 {
    pub fn new(center: Vec3, half_size: Vec3) -> Self {
        debug_assert!(
            half_size.x >= 0.0 && half_size.y >= 0.0 && half_size.z >= 0.0,
            "negative half size: {half_size:?}"
        );
        Aabb3 { center, half_size }
    }

    /// All 8 corners of the box
    pub fn corners(&self) -> [Vec3; 8] {
        let Vec3 { x, y, z } = self.half_size;
        let signs = [-1.0, 1.0];
        let mut corners = [Vec3::ZERO; 8];
        let mut i = 0;
        for sx in signs {
            for sy in signs {
                for sz in signs {
                    corners[i] = self.center + Vec3::new(sx * x, sy * y, sz * z);
                    i += 1;
                }
            }
        }
        corners
    }

    /// Returns a copy of the box moved by `delta`
    pub fn translated(&self, delta: Vec3) -> Aabb3 {
        Aabb3 {
            center: self.center + delta,
            half_size: self.half_size,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.center.is_finite() && self.half_size.is_finite()
    }
}
