use serde::{Deserialize, Serialize};

use cpack::entities::{SizeMode, StartAnchor};

use crate::io::svg_util::SvgDrawOptions;

/// Order in which the selected items are placed
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    /// Descending radius, big items first to reduce fragmentation later on
    #[default]
    LargestFirst,
    /// Ascending radius, reserving the big items for last
    SmallestFirst,
    /// Ingestion order
    None,
}

/// Configuration for the GTF optimizer
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct GTFConfig {
    /// Rotate placed items to face the in-plane forward axis of the packing plane
    pub orient_to_surface: bool,
    /// Seed for the PRNG. If zero, the algorithm will run in non-deterministic mode using entropy
    pub random_seed: u64,
    /// Fraction of the surface area that the footprints of the selected items may cover, clamped to [0, 1]
    pub area_usage_limit: f64,
    /// Extra margin around every item, half of it is added to each footprint radius
    pub spacing_padding: f64,
    /// Weight of the penalty for fallback positions close to the border
    pub border_penalty_scale: f64,
    /// Maximum number of random positions tried per item when no tangent position is valid, at least [`MIN_FALLBACK_ATTEMPTS`]
    pub max_placement_attempts_per_item: usize,
    /// Weight of the bias towards the anchor for fallback positions, non-positive or non-finite values are replaced by [`DEFAULT_INWARD_BIAS_SCALE`]
    pub inward_bias_scale: f64,
    /// Number of tangent positions generated around every placed circle
    pub rotations_around: usize,
    /// Where the first item is placed and towards which region fallback positions are biased
    pub start_anchor: StartAnchor,
    /// Order in which the selected items are placed
    pub sort_mode: SortMode,
    /// How the surface dimensions are derived from its reference object
    pub size_mode: SizeMode,
    /// Optional SVG drawing options
    pub svg_draw_options: SvgDrawOptions,
}

/// Lower bound on the number of fallback samples per item
pub const MIN_FALLBACK_ATTEMPTS: usize = 8;

/// Replaces a non-positive or non-finite [`GTFConfig::inward_bias_scale`]
pub const DEFAULT_INWARD_BIAS_SCALE: f64 = 5.0;

impl GTFConfig {
    /// Number of fallback samples drawn per item
    pub fn fallback_attempts(&self) -> usize {
        usize::max(MIN_FALLBACK_ATTEMPTS, self.max_placement_attempts_per_item)
    }

    pub fn effective_inward_bias_scale(&self) -> f64 {
        match self.inward_bias_scale.is_finite() && self.inward_bias_scale > 0.0 {
            true => self.inward_bias_scale,
            false => DEFAULT_INWARD_BIAS_SCALE,
        }
    }

    /// Number of tangent positions per placed circle, at least one
    pub fn tangent_samples(&self) -> usize {
        usize::max(1, self.rotations_around)
    }
}

impl Default for GTFConfig {
    fn default() -> Self {
        Self {
            orient_to_surface: true,
            random_seed: 0,
            area_usage_limit: 0.85,
            spacing_padding: 0.0,
            border_penalty_scale: 1.0,
            max_placement_attempts_per_item: 64,
            inward_bias_scale: DEFAULT_INWARD_BIAS_SCALE,
            rotations_around: 24,
            start_anchor: StartAnchor::Center,
            sort_mode: SortMode::LargestFirst,
            size_mode: SizeMode::Scale,
            svg_draw_options: SvgDrawOptions::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_parameters_have_floors() {
        let config = GTFConfig {
            max_placement_attempts_per_item: 2,
            inward_bias_scale: -1.0,
            rotations_around: 0,
            ..GTFConfig::default()
        };
        assert_eq!(config.fallback_attempts(), MIN_FALLBACK_ATTEMPTS);
        assert_eq!(config.effective_inward_bias_scale(), DEFAULT_INWARD_BIAS_SCALE);
        assert_eq!(config.tangent_samples(), 1);

        let config = GTFConfig {
            inward_bias_scale: f64::INFINITY,
            ..GTFConfig::default()
        };
        assert_eq!(config.effective_inward_bias_scale(), DEFAULT_INWARD_BIAS_SCALE);
    }

    #[test]
    fn partial_config_file_uses_defaults() {
        let config: GTFConfig =
            serde_json::from_str(r#"{"random_seed": 42, "sort_mode": "SmallestFirst"}"#).unwrap();
        assert_eq!(config.random_seed, 42);
        assert_eq!(config.sort_mode, SortMode::SmallestFirst);
        assert_eq!(config.rotations_around, GTFConfig::default().rotations_around);
    }
}
