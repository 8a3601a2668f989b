/// Footprint estimation of items in the packing plane
pub mod footprint;

/// Set of traits for geometric primitives
pub mod geo_traits;

/// Set of geometric primitives
pub mod primitives;

mod plane_frame;

#[doc(inline)]
pub use plane_frame::PlaneFrame;
