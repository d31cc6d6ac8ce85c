//! Plugin for `Avian2D` physics integration.

use bevy::prelude::*;

use crate::config::ZonePhysicsConfig;
use crate::zones;

/// Plugin that integrates `Avian2D` physics with `bevy_location`.
///
/// This plugin:
/// - Registers the [`ZonePhysicsConfig`] resource for global configuration
/// - Adds the observer that turns zone outlines into colliders
///
/// Add `PhysicsPlugins` yourself; this plugin only attaches components.
///
/// # Example
///
/// ```rust,no_run
/// use bevy::prelude::*;
/// use bevy_location_avian::LocationAvianPlugin;
/// use avian2d::prelude::*;
///
/// App::new()
///     .add_plugins(DefaultPlugins)
///     .add_plugins(PhysicsPlugins::default())
///     .add_plugins(LocationAvianPlugin::default())
///     .run();
/// ```
#[derive(Default)]
pub struct LocationAvianPlugin {
    /// Physics configuration
    pub config: ZonePhysicsConfig,
}

impl LocationAvianPlugin {
    /// Create a new plugin with custom configuration.
    pub fn new(config: ZonePhysicsConfig) -> Self {
        Self { config }
    }
}

impl Plugin for LocationAvianPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(self.config.clone());

        app.add_observer(zones::on_location_object_spawned);

        info!("LocationAvianPlugin initialized");
    }
}
