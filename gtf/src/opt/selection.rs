use std::cmp::Reverse;

use itertools::Itertools;
use log::debug;
use ordered_float::NotNan;

use cpack::entities::PackableItem;
use cpack::util::assertions;

use crate::config::SortMode;

/// Outcome of the area budget selection: the first `n_selected` candidates are admitted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Selection {
    pub n_selected: usize,
    pub selected_area: f64,
    pub usable_area: f64,
}

/// Walks the candidates in ingestion order, accumulating their area.
/// Stops at the first candidate that would push the total over `usable_area`: it, and every candidate after it, is excluded.
///
/// Candidates are expected to be non-degenerate (see [`PackableItem::is_degenerate`]).
pub fn select_within_budget(candidates: &[PackableItem], usable_area: f64) -> Selection {
    debug_assert!(candidates.iter().all(|c| !c.is_degenerate()));

    let mut selected_area = 0.0;
    let mut n_selected = 0;
    for candidate in candidates {
        if selected_area + candidate.area > usable_area {
            debug!(
                "[SEL] item {} (area: {:.3}) exceeds the area budget ({:.3}/{:.3}), excluding it and {} more",
                candidate.handle,
                candidate.area,
                selected_area,
                usable_area,
                candidates.len() - n_selected - 1
            );
            break;
        }
        selected_area += candidate.area;
        n_selected += 1;
    }

    debug_assert!(assertions::selection_respects_budget(
        &candidates[..n_selected],
        usable_area
    ));

    Selection {
        n_selected,
        selected_area,
        usable_area,
    }
}

/// Returns the order (as indices into `selected`) in which the items are placed.
/// The sort is stable, items with equal radii keep their ingestion order.
pub fn sequence(selected: &[PackableItem], sort_mode: SortMode) -> Vec<usize> {
    let radius = |i: &usize| NotNan::new(selected[*i].radius).expect("radius is NaN");
    let indices = 0..selected.len();
    match sort_mode {
        SortMode::LargestFirst => indices.sorted_by_key(|i| Reverse(radius(i))).collect_vec(),
        SortMode::SmallestFirst => indices.sorted_by_key(radius).collect_vec(),
        SortMode::None => indices.collect_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn items(radii: &[f64]) -> Vec<PackableItem> {
        radii
            .iter()
            .enumerate()
            .map(|(h, &r)| PackableItem::new(h, r))
            .collect_vec()
    }

    #[test]
    fn budget_stops_at_first_excess() {
        // areas: π, 4π, π/4
        let candidates = items(&[1.0, 2.0, 0.5]);
        let sel = select_within_budget(&candidates, 2.0 * std::f64::consts::PI);
        assert_eq!(sel.n_selected, 1);
        assert_eq!(sel.selected_area, std::f64::consts::PI);
    }

    #[test]
    fn twenty_small_items_on_half_budget() {
        let candidates = items(&[0.3; 20]);
        let sel = select_within_budget(&candidates, 2.0);
        assert_eq!(sel.n_selected, 7);
        assert!(sel.selected_area <= 2.0);
    }

    #[test]
    fn zero_budget_selects_nothing() {
        let sel = select_within_budget(&items(&[0.1, 0.2]), 0.0);
        assert_eq!(sel.n_selected, 0);
        assert_eq!(sel.selected_area, 0.0);
    }

    #[test_case(SortMode::LargestFirst, vec![1, 3, 0, 2]; "largest first")]
    #[test_case(SortMode::SmallestFirst, vec![0, 2, 1, 3]; "smallest first")]
    #[test_case(SortMode::None, vec![0, 1, 2, 3]; "ingestion order")]
    fn sequencing(sort_mode: SortMode, expected: Vec<usize>) {
        let selected = items(&[0.5, 2.0, 0.5, 2.0]);
        assert_eq!(sequence(&selected, sort_mode), expected);
    }
}
