use ordered_float::NotNan;

use cpack::entities::{StartAnchor, Surface};
use cpack::geometry::primitives::Point;

/// Lower bound on the product of the border margins, keeps the border penalty finite
pub const BORDER_MARGIN_EPSILON: f64 = 1e-6;

/// The loss GTF assigns to a tangent candidate: the distance from the candidate to the center of its nearest placed circle.
/// <br>
/// Lower is better, so the tightest valid fit is preferred over the most spread out one.
#[derive(PartialEq, PartialOrd, Copy, Clone, Debug, Eq, Ord)]
pub struct TangentLoss(NotNan<f64>);

impl TangentLoss {
    pub fn new(nearest_distance: f64) -> Self {
        TangentLoss(NotNan::new(nearest_distance).expect("tangent loss is NaN"))
    }

    pub fn value(&self) -> f64 {
        self.0.into_inner()
    }
}

/// The loss GTF assigns to a randomly sampled fallback position.
/// Sum of a bias towards the anchor and a weighted penalty for proximity to the border.
#[derive(PartialEq, PartialOrd, Copy, Clone, Debug, Eq, Ord)]
pub struct FallbackLoss(NotNan<f64>);

impl FallbackLoss {
    /// `None` when the terms cannot be combined into a comparable loss (e.g. `-inf + inf`).
    pub fn new(inward_bias: f64, border_penalty: f64, border_penalty_scale: f64) -> Option<Self> {
        let loss = inward_bias + border_penalty * border_penalty_scale;
        NotNan::new(loss).ok().map(FallbackLoss)
    }

    pub fn from_position(
        p: Point,
        surface: &Surface,
        anchor: StartAnchor,
        inward_bias_scale: f64,
        border_penalty_scale: f64,
    ) -> Option<Self> {
        FallbackLoss::new(
            inward_bias(p, surface, anchor, inward_bias_scale),
            border_penalty(p, surface),
            border_penalty_scale,
        )
    }

    pub fn value(&self) -> f64 {
        self.0.into_inner()
    }
}

/// Bias towards the anchor, lower for positions closer to it.
///
/// For [`StartAnchor::Center`] this is the squared distance to the center of the surface.
/// For other anchors, the projection of `p` on the inward direction of the anchor, scaled by `inward_bias_scale`.
pub fn inward_bias(p: Point, surface: &Surface, anchor: StartAnchor, inward_bias_scale: f64) -> f64 {
    match anchor {
        StartAnchor::Center => p.dot(&p),
        _ => p.dot(&anchor.inward_direction(surface)) * inward_bias_scale,
    }
}

/// Penalty for proximity to the border: the inverse of the product of the margins to the nearest vertical and horizontal side.
pub fn border_penalty(p: Point, surface: &Surface) -> f64 {
    let (margin_x, margin_y) = surface.margins(&p);
    1.0 / f64::max(BORDER_MARGIN_EPSILON, margin_x * margin_y)
}
