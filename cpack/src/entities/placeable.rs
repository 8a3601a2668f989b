use anyhow::{Result, ensure};

use crate::geometry::PlaneFrame;
use crate::geometry::footprint;
use crate::geometry::primitives::{Aabb3, Vec3};

/// Capability a host object must offer to be packed.
///
/// Host adapters implement this per engine, keeping all engine geometry out of the packing algorithm.
pub trait Placeable {
    /// Radius of the item's geometry projected into the packing plane defined by `frame`.
    /// An `Err` marks a malformed handle, which is excluded from packing.
    fn planar_radius(&self, frame: &PlaneFrame) -> Result<f64>;

    /// Moves the item to its final world `position`.
    /// `forward` is `Some` when the item should also be rotated to face that direction.
    fn set_planar_pose(&mut self, position: Vec3, forward: Option<Vec3>);
}

/// Host item described by a pivot and an (optional) world-space bounding box
#[derive(Clone, Debug, PartialEq)]
pub struct BoxItem {
    pub id: u64,
    /// World position of the item
    pub pivot: Vec3,
    /// World extent of the item's geometry, `None` if it has none
    pub extent: Option<Aabb3>,
    /// Facing direction, set when the item was oriented during packing
    pub forward: Option<Vec3>,
}

impl BoxItem {
    pub fn new(id: u64, pivot: Vec3, extent: Option<Aabb3>) -> Self {
        BoxItem {
            id,
            pivot,
            extent,
            forward: None,
        }
    }
}

impl Placeable for BoxItem {
    /// The radius is measured around the item's own pivot.
    fn planar_radius(&self, frame: &PlaneFrame) -> Result<f64> {
        ensure!(
            self.pivot.is_finite(),
            "item {} has a non-finite pivot: {:?}",
            self.id,
            self.pivot
        );
        if let Some(extent) = &self.extent {
            ensure!(
                extent.is_finite(),
                "item {} has a non-finite extent: {:?}",
                self.id,
                extent
            );
        }
        let frame = frame.with_origin(self.pivot);
        Ok(footprint::planar_radius(self.extent.as_ref(), &frame))
    }

    fn set_planar_pose(&mut self, position: Vec3, forward: Option<Vec3>) {
        let delta = position - self.pivot;
        self.extent = self.extent.map(|e| e.translated(delta));
        self.pivot = position;
        if forward.is_some() {
            self.forward = forward;
        }
    }
}
