/// Candidate positions tangent to already placed circles
pub mod tangent_sampler;

/// Uniform random positions within a rectangle
pub mod uniform_rect_sampler;
