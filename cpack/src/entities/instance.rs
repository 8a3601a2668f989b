use crate::entities::{BoxItem, Surface};
use crate::geometry::PlaneFrame;

/// A packing problem as read from an external source: items to be packed onto a surface lying in a plane.
#[derive(Clone, Debug)]
pub struct Instance {
    pub name: String,
    pub surface: Surface,
    pub frame: PlaneFrame,
    /// Items in ingestion order
    pub items: Vec<BoxItem>,
}
