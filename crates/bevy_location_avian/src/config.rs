//! Configuration for zone physics.

use avian2d::prelude::*;
use bevy::prelude::*;

/// Physics settings applied to every generated zone.
///
/// # Example
///
/// ```rust,no_run
/// use avian2d::prelude::*;
/// use bevy_location_avian::ZonePhysicsConfig;
///
/// let config = ZonePhysicsConfig {
///     sensor: false,
///     collision_layers: CollisionLayers::new(0b0010, 0b0001),
/// };
/// ```
#[derive(Resource, Clone, Debug)]
pub struct ZonePhysicsConfig {
    /// Zones only detect overlaps and never push bodies (default: true)
    pub sensor: bool,

    /// Collision layers of every zone collider
    pub collision_layers: CollisionLayers,
}

impl Default for ZonePhysicsConfig {
    fn default() -> Self {
        Self {
            sensor: true,
            collision_layers: CollisionLayers::default(),
        }
    }
}
