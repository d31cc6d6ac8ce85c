//! Location root components.

use bevy::prelude::*;
use bevy_location_assets::prelude::LocationAsset;

use crate::geometry::Bounds;

/// Destination container for a generated location.
///
/// Spawn an entity with this component to trigger generation once the location and
/// its images are loaded. Generated objects become children of this entity.
///
/// # Example
///
/// ```rust,no_run
/// # use bevy::prelude::*;
/// # use bevy_location_core::prelude::LocationRoot;
/// fn spawn_location(mut commands: Commands, asset_server: Res<AssetServer>) {
///     commands.spawn(LocationRoot {
///         handle: asset_server.load("locations/office.location.json"),
///         pixels_to_units: 1.0,
///     });
/// }
/// ```
#[derive(Component, Reflect, Debug, Clone)]
#[reflect(Component)]
#[require(Transform, Visibility)]
pub struct LocationRoot {
    /// Handle to the loaded `LocationAsset`.
    pub handle: Handle<LocationAsset>,
    /// How many authoring pixels make one scene unit.
    pub pixels_to_units: f32,
}

/// Top-level objects created by the last generation run.
///
/// Used to tear the previous run down before regenerating. Only these subtrees are
/// removed; other children of the container are left alone.
#[derive(Component, Reflect, Debug, Clone, Default, PartialEq)]
#[reflect(Component)]
pub struct GeneratedObjects(pub Vec<Entity>);

/// Overall bounds of the location in scene units (world-bounds frame).
#[derive(Component, Reflect, Debug, Clone, Copy, PartialEq)]
#[reflect(Component)]
pub struct LocationBounds(pub Bounds);
