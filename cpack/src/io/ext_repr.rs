use serde::{Deserialize, Serialize};

use crate::geometry::primitives::Vec3;

/// External representation of an [`Instance`](crate::entities::Instance).
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtInstance {
    /// The name of the instance
    pub name: String,
    /// Reference object from which the surface is derived
    pub surface: ExtSurface,
    /// Packing plane, the world XY plane if not specified
    #[serde(default)]
    pub plane: ExtPlane,
    /// Items to pack, in the order they are ingested
    pub items: Vec<ExtItem>,
}

/// External representation of the reference object of a [`Surface`](crate::entities::Surface).
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtSurface {
    /// Scale of the reference object along the plane's right and up axes
    pub scale: (f64, f64),
    /// Size of the reference object's mesh bounds, if it has a mesh
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mesh_size: Option<(f64, f64)>,
}

/// External representation of a [`PlaneFrame`](crate::geometry::PlaneFrame).
#[derive(Serialize, Deserialize, Clone, Copy, Debug)]
pub struct ExtPlane {
    pub origin: Vec3,
    pub right: Vec3,
    pub up: Vec3,
    pub forward: Vec3,
}

impl Default for ExtPlane {
    fn default() -> Self {
        ExtPlane {
            origin: Vec3::ZERO,
            right: Vec3::X,
            up: Vec3::Y,
            forward: Vec3::Y,
        }
    }
}

/// External representation of a [`BoxItem`](crate::entities::BoxItem).
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtItem {
    /// Unique identifier of the item
    pub id: u64,
    /// World position of the item
    pub pivot: Vec3,
    /// World bounding box of the item's geometry.
    /// The item is assumed to have no geometry if not specified
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extent: Option<ExtExtent>,
}

/// World-space axis-aligned box, given by its center and full size
#[derive(Serialize, Deserialize, Clone, Copy, Debug)]
pub struct ExtExtent {
    pub center: Vec3,
    pub size: Vec3,
}

/// External representation of a packing solution.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtSolution {
    /// The final layout
    pub layout: ExtLayout,
    /// Number of items with a valid footprint
    pub n_candidates: usize,
    /// Number of items admitted by the area budget
    pub n_selected: usize,
    /// Number of items actually placed
    pub n_placed: usize,
    /// Summed footprint area of the admitted items
    pub selected_area: f64,
    /// Ratio of placed footprint area to surface area
    pub usage: f64,
    /// Time the packing pass took in milliseconds
    pub run_time_ms: f64,
}

/// External representation of a [`Layout`](crate::entities::Layout).
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtLayout {
    pub half_width: f64,
    pub half_height: f64,
    /// The placed items, in placement order
    pub placed_items: Vec<ExtPlacedItem>,
}

/// External representation of a [`PlacedCircle`](crate::entities::PlacedCircle).
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtPlacedItem {
    /// The id of the placed item
    pub item_id: u64,
    /// Center of the footprint in plane coordinates
    pub plane_position: (f64, f64),
    /// Radius of the footprint
    pub radius: f64,
    /// Final world position of the item
    pub world_position: Vec3,
    /// Final facing direction of the item, if it was oriented
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forward: Option<Vec3>,
}
