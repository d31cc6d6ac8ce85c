//! Entity spawning functions.

pub mod colliders;
pub mod images;
pub mod location;
pub mod objects;

pub use colliders::build_collider;
pub use images::bind_image;
pub use location::{GeneratedLocation, generate_location, location_bounds};
pub use objects::{BuildState, spawn_children};
