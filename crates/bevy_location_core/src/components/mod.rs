//! Components for the generated location hierarchy.

pub mod location;
pub mod object;

pub use location::{GeneratedObjects, LocationBounds, LocationRoot};
pub use object::{
    AddressMode, BackgroundLayer, CollisionDisabled, ImageBinding, LocationObject,
    LocationPlacement, NodeKind, PolygonCollider, StackingDepth,
};
