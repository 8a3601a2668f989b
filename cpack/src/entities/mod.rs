mod anchor;
mod instance;
mod item;
mod layout;
mod placeable;
mod placed_circle;
mod surface;

#[doc(inline)]
pub use anchor::StartAnchor;

#[doc(inline)]
pub use instance::Instance;

#[doc(inline)]
pub use item::PackableItem;

#[doc(inline)]
pub use layout::Layout;

#[doc(inline)]
pub use placeable::BoxItem;

#[doc(inline)]
pub use placeable::Placeable;

#[doc(inline)]
pub use placed_circle::PlacedCircle;

#[doc(inline)]
pub use surface::SizeMode;

#[doc(inline)]
pub use surface::Surface;
