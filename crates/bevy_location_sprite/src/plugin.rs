//! Main plugin for `bevy_location_sprite`.

use bevy::prelude::*;

use crate::config::SpriteRenderConfig;
use crate::images::on_location_object_spawned;
use crate::replace::on_replace_location_image;

/// Plugin for rendering location images as sprites.
///
/// This Layer 3 plugin observes events from `bevy_location_core` and adds
/// rendering components to entities.
///
/// # Example
///
/// ```rust,no_run
/// # use bevy::prelude::*;
/// # use bevy_location_sprite::LocationSpritePlugin;
/// App::new()
///     .add_plugins(LocationSpritePlugin::default());
/// ```
#[derive(Default)]
pub struct LocationSpritePlugin {
    /// Configuration for rendering
    pub config: SpriteRenderConfig,
}

impl LocationSpritePlugin {
    /// Create plugin with custom configuration.
    pub fn new(config: SpriteRenderConfig) -> Self {
        Self { config }
    }
}

impl Plugin for LocationSpritePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(self.config.clone());

        app.add_observer(on_location_object_spawned);
        app.add_observer(on_replace_location_image);

        info!("LocationSpritePlugin initialized");
    }
}
