use itertools::Itertools;

use crate::entities::{BoxItem, Layout};
use crate::geometry::PlaneFrame;
use crate::io::ext_repr::{ExtLayout, ExtPlacedItem};

/// Exports a [`Layout`] by composing an [`ExtLayout`] from it.
/// `items` are the host items the layout's handles refer to, after their poses were written back.
pub fn export_layout(layout: &Layout, items: &[BoxItem], frame: &PlaneFrame) -> ExtLayout {
    let placed_items = layout
        .placed()
        .iter()
        .map(|pc| {
            let item = &items[pc.handle];
            ExtPlacedItem {
                item_id: item.id,
                plane_position: pc.center().into(),
                radius: pc.radius(),
                world_position: frame.to_world(pc.center()),
                forward: item.forward,
            }
        })
        .collect_vec();

    ExtLayout {
        half_width: layout.surface.half_width,
        half_height: layout.surface.half_height,
        placed_items,
    }
}
