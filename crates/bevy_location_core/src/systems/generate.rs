//! Main reactive generation system.

use bevy::asset::{LoadState, RecursiveDependencyLoadState};
use bevy::prelude::*;
use bevy_location_assets::prelude::LocationAsset;

use crate::behaviors::TypeBehaviorMap;
use crate::classify::resolve_label;
use crate::components::{GeneratedObjects, LocationRoot};
use crate::plugin::LocationCoreConfig;
use crate::spawn::generate_location;
use crate::systems::GenerateContext;

/// Marker component to trigger location regeneration.
///
/// Add this component to force the location to be regenerated even if it hasn't changed.
#[derive(Component, Debug, Default)]
pub struct RegenerateLocation;

/// Mark containers whose location asset was modified on disk.
pub fn mark_modified_locations(
    mut asset_events: MessageReader<AssetEvent<LocationAsset>>,
    roots: Query<(Entity, &LocationRoot)>,
    mut commands: Commands,
) {
    for event in asset_events.read() {
        let AssetEvent::Modified { id } = event else {
            continue;
        };

        for (entity, root) in &roots {
            if root.handle.id() == *id {
                debug!("Location asset {:?} modified, regenerating {:?}", id, entity);
                commands.entity(entity).insert(RegenerateLocation);
            }
        }
    }
}

/// Mark already generated containers whose `LocationRoot` was changed.
pub fn mark_changed_roots(
    roots: Query<Entity, (Changed<LocationRoot>, With<GeneratedObjects>)>,
    mut commands: Commands,
) {
    for entity in &roots {
        commands.entity(entity).insert(RegenerateLocation);
    }
}

/// Reactive system that generates locations once their assets finish loading.
///
/// Runs in `PreUpdate` before user systems.
///
/// # Triggers
///
/// - `Without<GeneratedObjects>` - Container not generated yet
/// - `With<RegenerateLocation>` - Hot reload, changed root, or manual request
///
/// Images that fail to load don't block generation; those objects are generated
/// without a visual. A location file that fails to load is reported once. Locations added to `Assets<LocationAsset>` at runtime are
/// generated right away.
pub fn process_loaded_locations(
    asset_server: Res<AssetServer>,
    location_assets: Res<Assets<LocationAsset>>,
    images: Res<Assets<Image>>,
    behaviors: Res<TypeBehaviorMap>,
    config: Res<LocationCoreConfig>,
    mut commands: Commands,
    location_query: Query<
        (Entity, &LocationRoot, Option<&GeneratedObjects>, Has<Name>),
        Or<(Without<GeneratedObjects>, With<RegenerateLocation>)>,
    >,
) {
    for (container, root, previous, has_name) in &location_query {
        if let Some(LoadState::Failed(e)) = asset_server.get_load_state(&root.handle) {
            error!("Location {:?} failed to load: {}", container, e);
            // Settle until a reload marks it again
            commands
                .entity(container)
                .insert(previous.cloned().unwrap_or_default())
                .remove::<RegenerateLocation>();
            continue;
        }

        // `None`: added to `Assets` directly, nothing to wait for
        match asset_server.get_recursive_dependency_load_state(&root.handle) {
            Some(RecursiveDependencyLoadState::Loaded) | None => {}
            Some(RecursiveDependencyLoadState::Failed(e)) => {
                warn!("Some dependencies of location {:?} failed to load: {}", container, e);
            }
            _ => continue,
        }

        let Some(location) = location_assets.get(&root.handle) else {
            continue;
        };

        let context =
            match GenerateContext::new(location, &behaviors, &config, root.pixels_to_units) {
                Ok(context) => context.with_images(&images),
                Err(e) => {
                    error!("Cannot generate location {:?}: {}", container, e);
                    // Keep the previous run's bookkeeping so a later fix can tear it down
                    commands
                        .entity(container)
                        .insert(previous.cloned().unwrap_or_default())
                        .remove::<RegenerateLocation>();
                    continue;
                }
            };

        match generate_location(&mut commands, &context, container, previous) {
            Ok(generated) => info!(
                "Generated location '{}': {} objects",
                resolve_label(location, location.root()),
                generated.spawned
            ),
            Err(e) => error!("Cannot generate location {:?}: {}", container, e),
        }

        if !has_name {
            commands.entity(container).insert(Name::new(format!(
                "Location: {}",
                resolve_label(location, location.root())
            )));
        }

        commands.entity(container).remove::<RegenerateLocation>();
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use bevy_location_assets::LocationAssetsPlugin;

    use super::*;
    use crate::components::LocationObject;
    use crate::plugin::LocationCorePlugin;

    fn app() -> App {
        let mut app = App::new();
        app.add_plugins((MinimalPlugins, AssetPlugin::default()))
            .init_asset::<Image>()
            .add_plugins((LocationAssetsPlugin, LocationCorePlugin::default()));
        app
    }

    fn location(children: &[&str]) -> LocationAsset {
        let children: Vec<serde_json::Value> = children
            .iter()
            .map(|id| serde_json::json!({ "id": id, "technical_name": id, "type": "Spot" }))
            .collect();
        let json = serde_json::json!({
            "root": { "id": "root", "technical_name": "Loc", "type": "Location", "children": children }
        });
        LocationAsset::from_json_slice(json.to_string().as_bytes()).unwrap()
    }

    fn source_ids(app: &mut App) -> Vec<String> {
        let mut ids: Vec<String> = app
            .world_mut()
            .query::<&LocationObject>()
            .iter(app.world())
            .map(|object| object.source_id.clone())
            .collect();
        ids.sort();
        ids
    }

    #[test]
    fn modified_asset_regenerates() {
        let mut app = app();
        let handle = app
            .world_mut()
            .resource_mut::<Assets<LocationAsset>>()
            .add(location(&["desk", "lamp"]));
        let container = app
            .world_mut()
            .spawn(LocationRoot {
                handle: handle.clone(),
                pixels_to_units: 1.0,
            })
            .id();
        app.update();
        assert_eq!(source_ids(&mut app), ["desk", "lamp"]);

        *app.world_mut()
            .resource_mut::<Assets<LocationAsset>>()
            .get_mut(&handle)
            .unwrap() = location(&["door"]);
        for _ in 0..3 {
            app.update();
        }

        assert_eq!(source_ids(&mut app), ["door"]);
        assert_eq!(
            app.world().get::<GeneratedObjects>(container).unwrap().0.len(),
            1
        );
        assert!(app.world().get::<RegenerateLocation>(container).is_none());
    }

    #[test]
    fn changed_root_regenerates() {
        let mut app = app();
        let (office, hallway) = {
            let mut assets = app.world_mut().resource_mut::<Assets<LocationAsset>>();
            (
                assets.add(location(&["desk"])),
                assets.add(location(&["stairs", "window"])),
            )
        };
        let container = app
            .world_mut()
            .spawn(LocationRoot {
                handle: office,
                pixels_to_units: 1.0,
            })
            .id();
        app.update();
        app.update();
        assert_eq!(source_ids(&mut app), ["desk"]);

        app.world_mut()
            .get_mut::<LocationRoot>(container)
            .unwrap()
            .handle = hallway;
        app.update();

        assert_eq!(source_ids(&mut app), ["stairs", "window"]);
    }

    #[test]
    fn unchanged_roots_are_left_alone() {
        let mut app = app();
        let handle = app
            .world_mut()
            .resource_mut::<Assets<LocationAsset>>()
            .add(location(&["desk"]));
        let container = app
            .world_mut()
            .spawn(LocationRoot {
                handle,
                pixels_to_units: 1.0,
            })
            .id();
        app.update();
        let first = app.world().get::<GeneratedObjects>(container).cloned();

        app.update();
        app.update();
        assert_eq!(app.world().get::<GeneratedObjects>(container).cloned(), first);
    }

    #[test]
    fn failed_location_load_settles() {
        let mut app = app();
        let handle = app
            .world()
            .resource::<AssetServer>()
            .load::<LocationAsset>("locations/missing.location.json");
        let container = app
            .world_mut()
            .spawn(LocationRoot {
                handle,
                pixels_to_units: 1.0,
            })
            .id();

        for _ in 0..200 {
            app.update();
            if app.world().get::<GeneratedObjects>(container).is_some() {
                break;
            }
            std::thread::sleep(Duration::from_millis(5));
        }

        assert_eq!(
            app.world().get::<GeneratedObjects>(container),
            Some(&GeneratedObjects::default())
        );
        assert!(source_ids(&mut app).is_empty());
    }
}
