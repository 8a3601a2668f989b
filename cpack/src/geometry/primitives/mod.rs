mod aabb3;
mod circle;
mod point;
mod rect;
mod vec3;

#[doc(inline)]
pub use aabb3::Aabb3;
#[doc(inline)]
pub use circle::Circle;
#[doc(inline)]
pub use point::Point;
#[doc(inline)]
pub use rect::Rect;
#[doc(inline)]
pub use vec3::Vec3;
