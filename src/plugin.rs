//! Unified plugin for `bevy_location`.

use bevy::prelude::*;

use bevy_location_assets::LocationAssetsPlugin;
use bevy_location_core::behaviors::{LocationBehavior, TypeBehaviorMap};
use bevy_location_core::{LocationCoreConfig, LocationCorePlugin};

#[cfg(feature = "sprite")]
use bevy_location_sprite::{LocationSpritePlugin, SpriteRenderConfig};

#[cfg(feature = "avian")]
use bevy_location_avian::{LocationAvianPlugin, ZonePhysicsConfig};

/// Unified plugin that adds all enabled `bevy_location` functionality.
///
/// This plugin automatically includes:
/// - Asset loading ([`LocationAssetsPlugin`])
/// - Scene generation ([`LocationCorePlugin`])
/// - Enabled Layer 3 integrations based on feature flags
///
/// # Example
///
/// ```rust,no_run
/// use bevy::prelude::*;
/// use bevy_location::prelude::*;
///
/// #[derive(Component, Default)]
/// struct ClickableZone;
///
/// impl LocationBehavior for ClickableZone {
///     const INTERACTIVE_ZONE: bool = true;
/// }
///
/// App::new()
///     .add_plugins(DefaultPlugins)
///     .add_plugins(
///         LocationPlugin::default()
///             .with_behavior::<ClickableZone>("Zone")
///             .with_core(LocationCoreConfig {
///                 debug_bounds: true,
///                 ..default()
///             }),
///     )
///     .run();
/// ```
#[derive(Default)]
pub struct LocationPlugin {
    /// Core configuration
    pub core: LocationCoreConfig,

    /// Type tag to behavior mapping
    pub behaviors: TypeBehaviorMap,

    /// Sprite rendering configuration (if feature enabled)
    #[cfg(feature = "sprite")]
    pub sprite: SpriteRenderConfig,

    /// Avian physics configuration (if feature enabled)
    #[cfg(feature = "avian")]
    pub avian: ZonePhysicsConfig,
}

impl LocationPlugin {
    /// Create with custom core configuration
    pub fn with_core(mut self, config: LocationCoreConfig) -> Self {
        self.core = config;
        self
    }

    /// Attach behavior `B` to every object whose node is of type `type_tag`
    pub fn with_behavior<B: LocationBehavior>(mut self, type_tag: impl Into<String>) -> Self {
        self.behaviors.insert::<B>(type_tag);
        self
    }

    /// Create with custom sprite rendering configuration
    #[cfg(feature = "sprite")]
    pub fn with_sprite(mut self, config: SpriteRenderConfig) -> Self {
        self.sprite = config;
        self
    }

    /// Create with custom Avian physics configuration
    #[cfg(feature = "avian")]
    pub fn with_avian(mut self, config: ZonePhysicsConfig) -> Self {
        self.avian = config;
        self
    }
}

impl Plugin for LocationPlugin {
    fn build(&self, app: &mut App) {
        // Layer 1: Assets (always required)
        app.add_plugins(LocationAssetsPlugin);

        // Layer 2: Core (always required)
        app.add_plugins(
            LocationCorePlugin::new(self.core.clone()).with_behaviors(self.behaviors.clone()),
        );

        // Layer 3: Rendering (feature-gated)
        #[cfg(feature = "sprite")]
        app.add_plugins(LocationSpritePlugin::new(self.sprite.clone()));

        // Layer 3: Physics (feature-gated)
        #[cfg(feature = "avian")]
        app.add_plugins(LocationAvianPlugin::new(self.avian.clone()));

        info!("LocationPlugin initialized");
    }
}
