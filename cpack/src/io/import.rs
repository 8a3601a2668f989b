use anyhow::{Context, Result, ensure};
use itertools::Itertools;
use log::warn;

use crate::entities::{BoxItem, Instance, SizeMode, Surface};
use crate::geometry::PlaneFrame;
use crate::geometry::primitives::{Aabb3, Vec3};
use crate::io::ext_repr::{ExtInstance, ExtItem, ExtPlane, ExtSurface};

/// Converts external representations of instances into internal ones.
#[derive(Clone, Debug, Copy)]
pub struct Importer {
    /// How the surface dimensions are derived from its reference object
    pub size_mode: SizeMode,
}

impl Importer {
    pub fn new(size_mode: SizeMode) -> Importer {
        Importer { size_mode }
    }

    pub fn import_instance(&self, ext_instance: &ExtInstance) -> Result<Instance> {
        let surface = self
            .import_surface(&ext_instance.surface)
            .with_context(|| format!("invalid surface in instance {}", ext_instance.name))?;
        let frame = import_plane(&ext_instance.plane)
            .with_context(|| format!("invalid plane in instance {}", ext_instance.name))?;

        ensure!(
            ext_instance.items.iter().map(|i| i.id).all_unique(),
            "item ids are not unique in instance {}",
            ext_instance.name
        );
        let items = ext_instance.items.iter().map(import_item).collect_vec();

        Ok(Instance {
            name: ext_instance.name.clone(),
            surface,
            frame,
            items,
        })
    }

    pub fn import_surface(&self, ext_surface: &ExtSurface) -> Result<Surface> {
        let (sx, sy) = ext_surface.scale;
        ensure!(
            sx.is_finite() && sy.is_finite(),
            "surface scale is not finite: {:?}",
            ext_surface.scale
        );
        if let Some((mx, my)) = ext_surface.mesh_size {
            ensure!(
                mx.is_finite() && my.is_finite(),
                "surface mesh size is not finite: {:?}",
                ext_surface.mesh_size
            );
        }
        let surface = Surface::from_reference(ext_surface.scale, ext_surface.mesh_size, self.size_mode);
        if surface.is_degenerate() {
            warn!("[IMPORT] surface has no area, nothing will be packed: {surface:?}");
        }
        Ok(surface)
    }
}

pub fn import_plane(ext_plane: &ExtPlane) -> Result<PlaneFrame> {
    let ExtPlane {
        origin,
        right,
        up,
        forward,
    } = *ext_plane;
    PlaneFrame::try_new(origin, right, up, forward)
}

/// Items are imported as-is, malformed ones are excluded later on when their footprint is queried.
pub fn import_item(ext_item: &ExtItem) -> BoxItem {
    let extent = ext_item.extent.map(|e| {
        let half_size = Vec3::new(e.size.x.abs(), e.size.y.abs(), e.size.z.abs()) * 0.5;
        Aabb3::new(e.center, half_size)
    });
    BoxItem::new(ext_item.id, ext_item.pivot, extent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::ext_repr::ExtExtent;

    fn ext_instance(items: Vec<ExtItem>) -> ExtInstance {
        ExtInstance {
            name: "test".to_string(),
            surface: ExtSurface {
                scale: (4.0, 2.0),
                mesh_size: Some((0.5, 0.5)),
            },
            plane: ExtPlane::default(),
            items,
        }
    }

    fn ext_item(id: u64) -> ExtItem {
        ExtItem {
            id,
            pivot: Vec3::ZERO,
            extent: Some(ExtExtent {
                center: Vec3::ZERO,
                size: Vec3::new(-1.0, 2.0, 0.0),
            }),
        }
    }

    #[test]
    fn surface_follows_size_mode() {
        let ext = ext_instance(vec![]);
        let scaled = Importer::new(SizeMode::Scale).import_instance(&ext).unwrap();
        assert_eq!(scaled.surface, Surface::new(2.0, 1.0));
        let meshed = Importer::new(SizeMode::MeshBounds).import_instance(&ext).unwrap();
        assert_eq!(meshed.surface, Surface::new(1.0, 0.5));
    }

    #[test]
    fn extent_sizes_are_halved() {
        let item = import_item(&ext_item(3));
        assert_eq!(item.id, 3);
        assert_eq!(item.extent.unwrap().half_size, Vec3::new(0.5, 1.0, 0.0));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let ext = ext_instance(vec![ext_item(1), ext_item(1)]);
        assert!(Importer::new(SizeMode::Scale).import_instance(&ext).is_err());
    }

    #[test]
    fn degenerate_plane_is_rejected() {
        let mut ext = ext_instance(vec![ext_item(1)]);
        ext.plane.up = ext.plane.right;
        assert!(Importer::new(SizeMode::Scale).import_instance(&ext).is_err());
    }
}
