//! Geometry, entities and host bindings for greedy circle packing on a bounded rectangular surface.
//!
//! Items are reduced to a circular footprint in a 2D packing plane, placed on a [`Surface`](entities::Surface)
//! and registered in a [`Layout`](entities::Layout).
//! The placement heuristics themselves live in the `gtf` crate.

/// Entities to model circle packing problems
pub mod entities;

/// Geometric primitives and base algorithms
pub mod geometry;

/// Importing problem instances into and exporting solutions out of this library
pub mod io;

/// Helper functions which do not belong to any specific module
pub mod util;
