use log::{debug, trace};
use rand::Rng;

use cpack::entities::{Layout, PackableItem};
use cpack::geometry::primitives::Point;

use crate::config::GTFConfig;
use crate::opt::loss::{FallbackLoss, TangentLoss};
use crate::samplers::tangent_sampler::TangentSampler;
use crate::samplers::uniform_rect_sampler::UniformRectSampler;

/// How a position for an item was found
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlacementKind {
    /// First item of the layout, placed at the start anchor
    Anchor,
    /// Tangent to an already placed circle
    Tangent(TangentLoss),
    /// Randomly sampled position, after no tangent position was valid
    Fallback(FallbackLoss),
}

/// Search the layout for a valid position of the item's footprint, with minimal loss.
/// Returns `None` if no valid position was found.
pub fn search(
    layout: &Layout,
    item: &PackableItem,
    config: &GTFConfig,
    rng: &mut impl Rng,
    sample_counter: &mut usize,
) -> Option<(Point, PlacementKind)> {
    let surface = &layout.surface;
    if !surface.can_hold(item.radius) {
        debug!(
            "[SEARCH] item {} (radius: {:.3}) cannot fit on the surface",
            item.handle, item.radius
        );
        return None;
    }

    if layout.is_empty() {
        let p = config.start_anchor.position(surface, item.radius);
        return Some((p, PlacementKind::Anchor));
    }

    tangent_search(layout, item, config, sample_counter)
        .map(|(p, loss)| (p, PlacementKind::Tangent(loss)))
        .or_else(|| {
            fallback_search(layout, item, config, rng, sample_counter)
                .map(|(p, loss)| (p, PlacementKind::Fallback(loss)))
        })
}

/// Tries all positions tangent to a placed circle, keeping the one closest to its nearest neighbor.
/// Ties are resolved in favor of the first generated candidate.
pub fn tangent_search(
    layout: &Layout,
    item: &PackableItem,
    config: &GTFConfig,
    sample_counter: &mut usize,
) -> Option<(Point, TangentLoss)> {
    let sampler = TangentSampler::new(config.tangent_samples(), item.radius);
    let mut best: Option<(Point, TangentLoss)> = None;

    for candidate in sampler.candidates(layout) {
        let circle = item.circle_at(candidate.position);
        //the parent is touched by construction, floating point errors should not reject it
        if !layout.surface.fits(circle.center, circle.radius)
            || layout.collides(&circle, Some(candidate.parent))
        {
            continue;
        }
        let Some(nearest) = layout.nearest_center_distance(candidate.position) else {
            continue;
        };
        let loss = TangentLoss::new(nearest);
        let improves = match &best {
            Some((_, best_loss)) => loss < *best_loss,
            None => true,
        };
        if improves {
            trace!(
                "[TAN] better: {:?} touching {} ({:.3})",
                candidate.position,
                candidate.parent,
                loss.value()
            );
            best = Some((candidate.position, loss));
        }
    }

    *sample_counter += sampler.n_candidates(layout);

    best
}

/// Samples random positions inside the region where the footprint fits, keeping the valid one with the lowest [`FallbackLoss`].
/// Positions without a comparable loss are rejected like colliding ones.
pub fn fallback_search(
    layout: &Layout,
    item: &PackableItem,
    config: &GTFConfig,
    rng: &mut impl Rng,
    sample_counter: &mut usize,
) -> Option<(Point, FallbackLoss)> {
    let surface = &layout.surface;
    let region = surface.inset(item.radius)?;
    let mut sampler = UniformRectSampler::new(region).ok()?;

    let n_attempts = config.fallback_attempts();
    let inward_bias_scale = config.effective_inward_bias_scale();
    let mut best: Option<(Point, FallbackLoss)> = None;

    for i in 0..n_attempts {
        let p = sampler.sample(rng);
        if layout.collides(&item.circle_at(p), None) {
            continue;
        }
        let Some(loss) = FallbackLoss::from_position(
            p,
            surface,
            config.start_anchor,
            inward_bias_scale,
            config.border_penalty_scale,
        ) else {
            continue;
        };
        let improves = match &best {
            Some((_, best_loss)) => loss < *best_loss,
            None => true,
        };
        if improves {
            trace!("[FB: {i}/{n_attempts}] better: {p:?} ({:.3})", loss.value());
            best = Some((p, loss));
        }
    }

    *sample_counter += sampler.n_samples;

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use cpack::entities::{StartAnchor, Surface};
    use cpack::geometry::geo_traits::DistanceTo;
    use cpack::util::assertions;
    use float_cmp::approx_eq;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn run(
        layout: &Layout,
        item: &PackableItem,
        config: &GTFConfig,
    ) -> Option<(Point, PlacementKind)> {
        let mut rng = SmallRng::seed_from_u64(0);
        search(layout, item, config, &mut rng, &mut 0)
    }

    #[test]
    fn first_item_goes_to_the_anchor() {
        let layout = Layout::new(Surface::new(2.0, 1.0));
        let item = PackableItem::new(0, 0.5);
        let config = GTFConfig {
            start_anchor: StartAnchor::BottomLeftCorner,
            ..GTFConfig::default()
        };
        assert_eq!(
            run(&layout, &item, &config),
            Some((Point(-1.5, -0.5), PlacementKind::Anchor))
        );
    }

    #[test]
    fn oversized_item_is_rejected() {
        let layout = Layout::new(Surface::new(0.5, 0.5));
        assert_eq!(run(&layout, &PackableItem::new(0, 0.6), &GTFConfig::default()), None);
    }

    #[test]
    fn second_item_is_tangent_to_the_first() {
        let mut layout = Layout::new(Surface::new(2.0, 2.0));
        layout.place(&PackableItem::new(0, 0.5), Point(0.0, 0.0));
        let (p, kind) = run(&layout, &PackableItem::new(1, 0.5), &GTFConfig::default()).unwrap();

        assert!(matches!(kind, PlacementKind::Tangent(_)));
        assert!(approx_eq!(f64, p.distance_to(&Point(0.0, 0.0)), 1.0, epsilon = 1e-12));
    }

    #[test]
    fn tangent_picks_the_tightest_candidate() {
        let mut layout = Layout::new(Surface::new(3.0, 3.0));
        layout.place(&PackableItem::new(0, 1.0), Point(-1.5, 0.0));
        layout.place(&PackableItem::new(1, 0.2), Point(1.5, 0.0));
        let item = PackableItem::new(2, 0.3);
        let config = GTFConfig {
            rotations_around: 4,
            ..GTFConfig::default()
        };
        let (p, loss) = tangent_search(&layout, &item, &config, &mut 0).unwrap();

        // first candidate around the small circle, all four around it are equally tight
        assert_eq!(p, Point(2.0, 0.0));
        assert_eq!(loss.value(), 0.5);

        // touching the big circle is valid as well, but looser
        let looser = Point(-1.5, 0.0).polar_offset(0.0, 1.3);
        assert!(assertions::circle_is_feasible(&layout, &item.circle_at(looser)));
        let looser_loss = TangentLoss::new(layout.nearest_center_distance(looser).unwrap());
        assert!(loss < looser_loss);
    }

    #[test]
    fn tangent_ties_keep_the_first_candidate() {
        let mut layout = Layout::new(Surface::new(2.0, 2.0));
        layout.place(&PackableItem::new(0, 0.5), Point(0.0, 0.0));
        let config = GTFConfig {
            rotations_around: 4,
            ..GTFConfig::default()
        };
        let (p, loss) =
            tangent_search(&layout, &PackableItem::new(1, 0.5), &config, &mut 0).unwrap();
        assert_eq!(p, Point(1.0, 0.0));
        assert_eq!(loss.value(), 1.0);
    }

    #[test]
    fn tangent_prefers_the_tightest_fit() {
        let mut layout = Layout::new(Surface::new(3.0, 3.0));
        layout.place(&PackableItem::new(0, 1.0), Point(-1.0, 0.0));
        layout.place(&PackableItem::new(1, 1.0), Point(1.0, 0.0));
        let item = PackableItem::new(2, 0.5);
        let (p, loss) = tangent_search(&layout, &item, &GTFConfig::default(), &mut 0).unwrap();

        // no position can be closer to its nearest neighbor than the sum of radii
        assert!(loss.value() >= 1.5 - 1e-9);
        assert!(assertions::circle_is_feasible(&layout, &item.circle_at(p)));
        let nearest = layout.nearest_center_distance(p).unwrap();
        assert!(approx_eq!(f64, nearest, loss.value()));
    }

    #[test]
    fn fallback_when_no_tangent_position_fits() {
        // a small circle touching the top border, no tangent position leaves room for the item
        let mut layout = Layout::new(Surface::new(4.0, 1.0));
        layout.place(&PackableItem::new(0, 0.2), Point(0.0, 0.8));
        let item = PackableItem::new(1, 0.9);
        let config = GTFConfig {
            rotations_around: 4,
            max_placement_attempts_per_item: 256,
            ..GTFConfig::default()
        };
        let (p, kind) = run(&layout, &item, &config).unwrap();

        assert!(matches!(kind, PlacementKind::Fallback(_)));
        assert!(layout.is_feasible(&item.circle_at(p)));
        assert!(p.distance_to(&Point(0.0, 0.8)) >= 1.1);
    }

    #[test]
    fn fallback_counts_its_samples() {
        let mut layout = Layout::new(Surface::new(2.0, 2.0));
        layout.place(&PackableItem::new(0, 0.5), Point(0.0, 0.0));
        let config = GTFConfig {
            max_placement_attempts_per_item: 3,
            ..GTFConfig::default()
        };
        let mut rng = SmallRng::seed_from_u64(7);
        let mut counter = 0;
        fallback_search(&layout, &PackableItem::new(1, 0.25), &config, &mut rng, &mut counter);
        assert_eq!(counter, 8);
    }

    #[test]
    fn fallback_keeps_the_lowest_loss() {
        let mut layout = Layout::new(Surface::new(4.0, 1.0));
        layout.place(&PackableItem::new(0, 0.4), Point(0.0, 0.0));
        let item = PackableItem::new(1, 0.3);
        let config = GTFConfig {
            start_anchor: StartAnchor::BottomEdge,
            max_placement_attempts_per_item: 64,
            ..GTFConfig::default()
        };
        let mut rng = SmallRng::seed_from_u64(11);
        let (p, loss) = fallback_search(&layout, &item, &config, &mut rng, &mut 0).unwrap();

        // replay the same sample stream and score every valid sample
        let mut rng = SmallRng::seed_from_u64(11);
        let mut sampler = UniformRectSampler::new(layout.surface.inset(item.radius).unwrap()).unwrap();
        let scored = (0..config.fallback_attempts())
            .map(|_| sampler.sample(&mut rng))
            .filter(|s| !layout.collides(&item.circle_at(*s), None))
            .filter_map(|s| {
                FallbackLoss::from_position(
                    s,
                    &layout.surface,
                    config.start_anchor,
                    config.effective_inward_bias_scale(),
                    config.border_penalty_scale,
                )
                .map(|l| (s, l))
            })
            .collect::<Vec<_>>();
        assert!(scored.len() > 1);

        let (expected_p, expected_loss) = scored.iter().min_by_key(|(_, l)| *l).copied().unwrap();
        assert_eq!((p, loss), (expected_p, expected_loss));
        assert!(scored.iter().any(|(_, l)| *l > loss));
    }

    #[test]
    fn fallback_rejects_incomparable_losses() {
        let mut layout = Layout::new(Surface::new(2.0, 2.0));
        layout.place(&PackableItem::new(0, 0.5), Point(0.0, 0.0));
        let config = GTFConfig {
            border_penalty_scale: f64::NAN,
            ..GTFConfig::default()
        };
        let mut rng = SmallRng::seed_from_u64(3);
        let result = fallback_search(&layout, &PackableItem::new(1, 0.25), &config, &mut rng, &mut 0);
        assert_eq!(result, None);
    }
}
