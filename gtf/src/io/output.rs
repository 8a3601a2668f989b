use serde::{Deserialize, Serialize};

use cpack::entities::BoxItem;
use cpack::geometry::PlaneFrame;
use cpack::io::export::export_layout;
use cpack::io::ext_repr::{ExtInstance, ExtSolution};

use crate::config::GTFConfig;
use crate::opt::gtf_optimizer::GTFSolution;

/// Everything written to the solution file: the input, the outcome and the configuration that produced it
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct GTFOutput {
    #[serde(flatten)]
    pub instance: ExtInstance,
    pub solution: ExtSolution,
    pub config: GTFConfig,
}

/// `items` are the host items after the packing pass wrote their poses back.
pub fn export_solution(solution: &GTFSolution, items: &[BoxItem], frame: &PlaneFrame) -> ExtSolution {
    ExtSolution {
        layout: export_layout(&solution.layout, items, frame),
        n_candidates: solution.n_candidates,
        n_selected: solution.n_selected,
        n_placed: solution.n_placed(),
        selected_area: solution.selected_area,
        usage: solution.layout.usage(),
        run_time_ms: solution.time.as_secs_f64() * 1000.0,
    }
}
