//! Plugin for `bevy_location_core`.

use bevy::prelude::*;

use crate::behaviors::TypeBehaviorMap;
use crate::components::{
    AddressMode, BackgroundLayer, CollisionDisabled, GeneratedObjects, ImageBinding,
    LocationBounds, LocationObject, LocationPlacement, LocationRoot, NodeKind, PolygonCollider,
    StackingDepth,
};
use crate::debug::{DebugLocationBounds, draw_location_debug};
use crate::geometry::Bounds;
use crate::systems::{mark_changed_roots, mark_modified_locations, process_loaded_locations};

/// Generation settings shared by every location.
///
/// # Example
///
/// ```rust,no_run
/// use bevy::prelude::*;
/// use bevy_location_core::{LocationCoreConfig, LocationCorePlugin};
///
/// App::new().add_plugins(LocationCorePlugin::new(LocationCoreConfig {
///     background_label: "Backdrop".into(),
///     ..default()
/// }));
/// ```
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct LocationCoreConfig {
    /// Label that designates an image node as the location's background layer.
    pub background_label: String,

    /// Depth increment between consecutively generated objects.
    pub depth_step: f32,

    /// Texture addressing requested for every bound image.
    pub address_mode: AddressMode,

    /// Draw location bounds and zone outlines with gizmos. Needs `GizmoPlugin`.
    pub debug_bounds: bool,
}

impl Default for LocationCoreConfig {
    fn default() -> Self {
        Self {
            background_label: "Background layer".into(),
            depth_step: 0.2,
            address_mode: AddressMode::Clamp,
            debug_bounds: false,
        }
    }
}

/// Plugin for the `bevy_location_core` generation system.
///
/// Add this plugin after `LocationAssetsPlugin` to enable automatic location generation.
///
/// # Example
///
/// ```rust,no_run
/// use bevy::prelude::*;
/// use bevy_location_assets::LocationAssetsPlugin;
/// use bevy_location_core::LocationCorePlugin;
/// use bevy_location_core::behaviors::LocationBehavior;
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
///     .add_plugins(LocationAssetsPlugin)
///     .add_plugins(LocationCorePlugin::default().with_behavior::<ClickableZone>("Zone"))
///     .run();
/// ```
#[derive(Default)]
pub struct LocationCorePlugin {
    config: LocationCoreConfig,
    behaviors: TypeBehaviorMap,
}

impl LocationCorePlugin {
    /// Create a new plugin with custom configuration.
    pub fn new(config: LocationCoreConfig) -> Self {
        Self {
            config,
            behaviors: TypeBehaviorMap::new(),
        }
    }

    /// Attach behavior `B` to every object whose node is of type `type_tag`.
    pub fn with_behavior<B: crate::behaviors::LocationBehavior>(
        mut self,
        type_tag: impl Into<String>,
    ) -> Self {
        self.behaviors.insert::<B>(type_tag);
        self
    }

    /// Replace the whole type to behavior mapping.
    pub fn with_behaviors(mut self, behaviors: TypeBehaviorMap) -> Self {
        self.behaviors = behaviors;
        self
    }
}

impl Plugin for LocationCorePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(self.config.clone())
            .insert_resource(self.behaviors.clone());

        // Register types for reflection
        app.register_type::<LocationRoot>()
            .register_type::<GeneratedObjects>()
            .register_type::<LocationBounds>()
            .register_type::<Bounds>()
            .register_type::<LocationObject>()
            .register_type::<NodeKind>()
            .register_type::<StackingDepth>()
            .register_type::<LocationPlacement>()
            .register_type::<AddressMode>()
            .register_type::<ImageBinding>()
            .register_type::<PolygonCollider>()
            .register_type::<CollisionDisabled>()
            .register_type::<BackgroundLayer>();

        // Reactive generation (runs in PreUpdate before user systems)
        app.add_systems(
            PreUpdate,
            (
                mark_modified_locations,
                mark_changed_roots,
                process_loaded_locations,
            )
                .chain(),
        );

        // Toggle at runtime by inserting or removing `DebugLocationBounds`
        if self.config.debug_bounds {
            app.init_resource::<DebugLocationBounds>().add_systems(
                PostUpdate,
                draw_location_debug.run_if(resource_exists::<DebugLocationBounds>),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::systems::RegenerateLocation;
    use bevy_location_assets::prelude::LocationAsset;

    fn app() -> App {
        let mut app = App::new();
        app.add_plugins((MinimalPlugins, AssetPlugin::default()))
            .init_asset::<Image>()
            .init_asset::<LocationAsset>()
            .add_plugins(LocationCorePlugin::default());
        app
    }

    fn spawn_location(app: &mut App) -> Entity {
        let json = serde_json::json!({
            "root": {
                "id": "root", "technical_name": "Office", "type": "Location",
                "children": [
                    { "id": "desk", "technical_name": "Desk", "type": "Spot" },
                    { "id": "door", "technical_name": "Door", "type": "Spot", "children": [
                        { "id": "handle", "technical_name": "Handle", "type": "Spot" }
                    ]}
                ]
            }
        });
        let location = LocationAsset::from_json_slice(json.to_string().as_bytes()).unwrap();
        let handle = app
            .world_mut()
            .resource_mut::<Assets<LocationAsset>>()
            .add(location);

        app.world_mut()
            .spawn(LocationRoot {
                handle,
                pixels_to_units: 1.0,
            })
            .id()
    }

    fn object_count(app: &mut App) -> usize {
        app.world_mut()
            .query::<&LocationObject>()
            .iter(app.world())
            .count()
    }

    #[test]
    fn generates_locations_added_at_runtime() {
        let mut app = app();
        let container = spawn_location(&mut app);
        app.update();

        let generated = app.world().get::<GeneratedObjects>(container).unwrap();
        assert_eq!(generated.0.len(), 2);
        assert_eq!(object_count(&mut app), 3);
        assert_eq!(
            app.world().get::<Name>(container).map(Name::as_str),
            Some("Location: Office")
        );
    }

    #[test]
    fn generates_once_until_requested() {
        let mut app = app();
        let container = spawn_location(&mut app);
        app.update();
        app.update();
        assert_eq!(object_count(&mut app), 3);

        app.world_mut()
            .entity_mut(container)
            .insert(RegenerateLocation);
        app.update();

        assert_eq!(object_count(&mut app), 3);
        assert!(app.world().get::<RegenerateLocation>(container).is_none());
    }

    #[test]
    fn invalid_scale_generates_nothing() {
        let mut app = app();
        let container = spawn_location(&mut app);
        app.world_mut()
            .get_mut::<LocationRoot>(container)
            .unwrap()
            .pixels_to_units = -1.0;
        app.update();

        assert_eq!(object_count(&mut app), 0);
        assert_eq!(
            app.world().get::<GeneratedObjects>(container),
            Some(&GeneratedObjects::default())
        );
    }

    #[test]
    fn default_config() {
        let config = LocationCoreConfig::default();
        assert_eq!(config.background_label, "Background layer");
        assert_eq!(config.depth_step, 0.2);
        assert_eq!(config.address_mode, AddressMode::Clamp);
        assert!(!config.debug_bounds);
    }
}
