use log::{debug, warn};
use rand::SeedableRng;
use rand::rngs::SmallRng;

use cpack::entities::{Layout, PackableItem, Placeable, Surface};
use cpack::geometry::PlaneFrame;
use cpack::geometry::footprint;

use crate::opt::selection::{self, Selection};

/// State of a single packing pass.
/// Created at the start of a pass and discarded once the results are written back to the host items.
pub struct PackingSession {
    /// All items with a valid footprint, in ingestion order
    pub candidates: Vec<PackableItem>,
    /// The first `selection.n_selected` candidates are admitted by the area budget
    pub selection: Selection,
    /// SmallRng is a fast, non-cryptographic PRNG <https://rust-random.github.io/book/guide-rngs.html>
    pub rng: SmallRng,
    /// Registry of the circles placed so far
    pub layout: Layout,
}

impl PackingSession {
    pub fn new(
        layout: Layout,
        candidates: Vec<PackableItem>,
        area_usage_limit: f64,
        rng: SmallRng,
    ) -> Self {
        let usable_area = usable_area(&layout.surface, area_usage_limit);
        let selection = selection::select_within_budget(&candidates, usable_area);
        Self {
            candidates,
            selection,
            rng,
            layout,
        }
    }

    /// The candidates admitted by the area budget, in ingestion order
    pub fn selected(&self) -> &[PackableItem] {
        &self.candidates[..self.selection.n_selected]
    }
}

/// Seeded generator for a nonzero `seed`, entropy otherwise
pub fn session_rng(seed: u64) -> SmallRng {
    match seed {
        0 => SmallRng::from_os_rng(),
        seed => SmallRng::seed_from_u64(seed),
    }
}

/// Queries the footprint of every host item.
///
/// Malformed items (failing radius query or non-finite radius) are excluded with a warning,
/// degenerate footprints (non-positive radius) are excluded silently.
pub fn collect_candidates<P: Placeable>(
    items: &[P],
    frame: &PlaneFrame,
    spacing_padding: f64,
) -> Vec<PackableItem> {
    items
        .iter()
        .enumerate()
        .filter_map(|(handle, item)| match item.planar_radius(frame) {
            Ok(r) if r.is_finite() => Some(PackableItem::new(
                handle,
                footprint::footprint_radius(r, spacing_padding),
            )),
            Ok(r) => {
                warn!("[GTF] item {handle} has a non-finite planar radius ({r}), excluded");
                None
            }
            Err(e) => {
                warn!("[GTF] item {handle} is malformed, excluded: {e:#}");
                None
            }
        })
        .filter(|c| match c.is_degenerate() {
            true => {
                debug!(
                    "[GTF] item {} has a degenerate footprint (radius: {}), excluded",
                    c.handle, c.radius
                );
                false
            }
            false => true,
        })
        .collect()
}

/// Usable area of `surface`: its area times `area_usage_limit` clamped to [0, 1]
pub fn usable_area(surface: &Surface, area_usage_limit: f64) -> f64 {
    let limit = match area_usage_limit.is_nan() {
        true => 0.0,
        false => area_usage_limit.clamp(0.0, 1.0),
    };
    surface.area() * limit
}
