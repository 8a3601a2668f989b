use anyhow::Result;
use rand::Rng;
use rand::distr::{Distribution, Uniform};

use cpack::geometry::primitives::{Point, Rect};

/// Samples a [`Point`] from a uniform distribution over a given [`Rect`], boundaries included.
/// Degenerate rectangles (zero width or height) are supported.
#[derive(Debug, Clone)]
pub struct UniformRectSampler {
    pub bbox: Rect,
    pub x_range: Uniform<f64>,
    pub y_range: Uniform<f64>,
    pub n_samples: usize,
}

impl UniformRectSampler {
    pub fn new(bbox: Rect) -> Result<Self> {
        let x_range = Uniform::new_inclusive(bbox.x_min, bbox.x_max)?;
        let y_range = Uniform::new_inclusive(bbox.y_min, bbox.y_max)?;
        Ok(Self {
            bbox,
            x_range,
            y_range,
            n_samples: 0,
        })
    }

    pub fn sample(&mut self, rng: &mut impl Rng) -> Point {
        self.n_samples += 1;
        let x_sample = self.x_range.sample(rng);
        let y_sample = self.y_range.sample(rng);
        Point(x_sample, y_sample)
    }
}
