use std::time::{Duration, Instant};

use log::{debug, info};
use thousands::Separable;

use cpack::entities::{Layout, Placeable, Surface};
use cpack::geometry::PlaneFrame;
use cpack::util::assertions;

use crate::config::GTFConfig;
use crate::opt::search::{PlacementKind, search};
use crate::opt::selection;
use crate::opt::session::{self, PackingSession};

/// Greedy Tangent Fill (GTF) optimizer.
///
/// Packs the circular footprints of host items onto a [`Surface`]: the first item at the start anchor,
/// every next one tangent to an already placed item or, if that fails, at a randomly sampled position biased towards the anchor.
/// Positions are written back to the host items through [`Placeable`].
pub struct GTFOptimizer {
    pub surface: Surface,
    pub frame: PlaneFrame,
    pub config: GTFConfig,
    /// Total number of positions evaluated over all packing passes
    pub sample_counter: usize,
}

/// Outcome of a single packing pass
#[derive(Debug, Clone)]
pub struct GTFSolution {
    /// The placed footprints, in placement order
    pub layout: Layout,
    /// Number of items with a valid footprint
    pub n_candidates: usize,
    /// Number of items admitted by the area budget
    pub n_selected: usize,
    /// Summed footprint area of the admitted items
    pub selected_area: f64,
    /// Duration of the packing pass
    pub time: Duration,
}

impl GTFSolution {
    fn empty(surface: Surface) -> Self {
        GTFSolution {
            layout: Layout::new(surface),
            n_candidates: 0,
            n_selected: 0,
            selected_area: 0.0,
            time: Duration::ZERO,
        }
    }

    /// Number of items placed on the surface
    pub fn n_placed(&self) -> usize {
        self.layout.len()
    }
}

impl GTFOptimizer {
    pub fn new(surface: Surface, frame: PlaneFrame, config: GTFConfig) -> Self {
        Self {
            surface,
            frame,
            config,
            sample_counter: 0,
        }
    }

    /// Runs a packing pass over `items`, moving every placed item to its new position.
    /// Items that are not placed keep their pose.
    pub fn solve<P: Placeable>(&mut self, items: &mut [P]) -> GTFSolution {
        let start = Instant::now();

        if self.surface.is_degenerate() {
            info!("[GTF] surface has no area, nothing to pack: {:?}", self.surface);
            return GTFSolution::empty(self.surface);
        }
        if items.is_empty() {
            info!("[GTF] no items to pack");
            return GTFSolution::empty(self.surface);
        }

        let candidates =
            session::collect_candidates(items, &self.frame, self.config.spacing_padding);
        let mut session = PackingSession::new(
            Layout::new(self.surface),
            candidates,
            self.config.area_usage_limit,
            session::session_rng(self.config.random_seed),
        );

        info!(
            "[GTF] {}/{} items selected ({} candidates), covering {:.3} of {:.3} usable area",
            session.selection.n_selected,
            items.len(),
            session.candidates.len(),
            session.selection.selected_area,
            session.selection.usable_area
        );

        let order = selection::sequence(session.selected(), self.config.sort_mode);
        let orientation = self.config.orient_to_surface.then(|| self.frame.facing());

        for (i, idx) in order.into_iter().enumerate() {
            let item = session.selected()[idx];
            let placement = search(
                &session.layout,
                &item,
                &self.config,
                &mut session.rng,
                &mut self.sample_counter,
            );
            match placement {
                Some((p, kind)) => {
                    session.layout.place(&item, p);
                    items[item.handle].set_planar_pose(self.frame.to_world(p), orientation);
                    info!(
                        "[GTF] placing item {}/{} (handle {}, radius {:.3}) at [{:.3}, {:.3}] ({})",
                        session.layout.len(),
                        session.selection.n_selected,
                        item.handle,
                        item.radius,
                        p.0,
                        p.1,
                        placement_label(&kind)
                    );
                }
                None => {
                    debug!(
                        "[GTF] no position found for item {} (#{i}, radius {:.3}), skipping it",
                        item.handle, item.radius
                    );
                }
            }
        }

        debug_assert!(assertions::layout_is_valid(&session.layout));

        let time = start.elapsed();
        info!(
            "[GTF] packing finished in {:.3}ms ({} samples)",
            time.as_secs_f64() * 1000.0,
            self.sample_counter.separate_with_commas()
        );
        info!(
            "[GTF] placed {}/{} selected items, covering {:.3}% of the surface",
            session.layout.len(),
            session.selection.n_selected,
            session.layout.usage() * 100.0
        );

        GTFSolution {
            n_candidates: session.candidates.len(),
            n_selected: session.selection.n_selected,
            selected_area: session.selection.selected_area,
            layout: session.layout,
            time,
        }
    }

    /// Runs a packing pass and returns only the number of placed items
    pub fn pack<P: Placeable>(&mut self, items: &mut [P]) -> usize {
        self.solve(items).n_placed()
    }
}

fn placement_label(kind: &PlacementKind) -> String {
    match kind {
        PlacementKind::Anchor => "anchor".to_string(),
        PlacementKind::Tangent(loss) => format!("tangent, loss: {:.3}", loss.value()),
        PlacementKind::Fallback(loss) => format!("fallback, loss: {:.3}", loss.value()),
    }
}

/// Convenience entry point: packs `items` onto `surface` in the plane `frame` with `config`.
/// Returns the number of placed items.
pub fn pack<P: Placeable>(
    surface: Surface,
    frame: PlaneFrame,
    config: GTFConfig,
    items: &mut [P],
) -> usize {
    GTFOptimizer::new(surface, frame, config).pack(items)
}
