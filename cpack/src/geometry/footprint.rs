use crate::geometry::PlaneFrame;
use crate::geometry::primitives::Aabb3;

/// Radius assumed for items without any geometry
pub const FALLBACK_RADIUS: f64 = 0.5;

/// Radius of the bounding circle of `extent` in the packing plane.
///
/// Every corner of the extent is projected onto the plane spanned by `frame.right` and `frame.up`.
/// The radius is the largest distance between a projected corner and the projected `frame.origin`.
/// Items without geometry get [`FALLBACK_RADIUS`].
pub fn planar_radius(extent: Option<&Aabb3>, frame: &PlaneFrame) -> f64 {
    match extent {
        None => FALLBACK_RADIUS,
        Some(extent) => extent
            .corners()
            .into_iter()
            .map(|corner| frame.project(corner).norm())
            .fold(0.0, f64::max),
    }
}

/// Radius of an item's circular footprint: its planar radius padded with half of the spacing.
pub fn footprint_radius(planar_radius: f64, spacing_padding: f64) -> f64 {
    planar_radius + spacing_padding * 0.5
}
