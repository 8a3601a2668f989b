/// Trait for types that can detect collisions between `Self` and `T`.
pub trait CollidesWith<T> {
    fn collides_with(&self, other: &T) -> bool;
}

/// Trait for types that can fully contain a `T`.
///
/// Containment is closed: a `T` touching the boundary of `Self` from the inside is still contained.
pub trait Contains<T> {
    fn contains(&self, other: &T) -> bool;
}

/// Trait for types that can compute the minimum distance between `Self` and `T`.
pub trait DistanceTo<T> {
    /// Minimum distance between two primitives. Will be 0 in case of a collision.
    fn distance_to(&self, other: &T) -> f64;

    /// Squared version of [DistanceTo::distance_to]
    fn sq_distance_to(&self, other: &T) -> f64;
}

/// Trait for shared properties of geometric primitives.
pub trait Shape {
    /// Area of the interior of the shape
    fn area(&self) -> f64;
}
