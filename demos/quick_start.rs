//! Quick start demo for `bevy_location`.
//!
//! Loads a location, generates it with the unified `LocationPlugin`, and logs what
//! was generated. Press `R` to regenerate, `B` to swap the background image.

use bevy::prelude::*;
use bevy_location::prelude::*;

/// Behavior attached to every node of type `Zone` (and types deriving from it).
#[derive(Component, Default)]
struct ClickableZone;

impl LocationBehavior for ClickableZone {
    const INTERACTIVE_ZONE: bool = true;
}

/// Behavior attached to decorative images.
#[derive(Component, Default)]
struct Decoration;

impl LocationBehavior for Decoration {}

fn main() {
    App::new()
        .add_plugins(DefaultPlugins)
        .add_plugins(
            LocationPlugin::default()
                .with_behavior::<ClickableZone>("Zone")
                .with_behavior::<Decoration>("LocationImage")
                .with_core(LocationCoreConfig {
                    debug_bounds: true,
                    ..default()
                }),
        )
        .add_systems(Startup, (setup_camera, spawn_location))
        .add_systems(Update, (regenerate_on_key, swap_background_on_key))
        .run();
}

fn setup_camera(mut commands: Commands) {
    commands.spawn((Camera2d, Transform::from_xyz(400.0, 300.0, 0.0)));
}

fn spawn_location(mut commands: Commands, asset_server: Res<AssetServer>) {
    commands
        .spawn(LocationRoot {
            handle: asset_server.load("locations/office.location.json"),
            pixels_to_units: 1.0,
        })
        .observe(|trigger: On<LocationGenerated>, names: Query<&Name>| {
            let background = trigger
                .event()
                .background_layer
                .and_then(|entity| names.get(entity).ok());
            info!("Location generated, background layer: {:?}", background);
        });
}

fn regenerate_on_key(
    keys: Res<ButtonInput<KeyCode>>,
    roots: Query<Entity, With<LocationRoot>>,
    mut commands: Commands,
) {
    if !keys.just_pressed(KeyCode::KeyR) {
        return;
    }

    for entity in &roots {
        commands.entity(entity).insert(RegenerateLocation);
    }
}

fn swap_background_on_key(
    keys: Res<ButtonInput<KeyCode>>,
    backgrounds: Query<Entity, With<BackgroundLayer>>,
    asset_server: Res<AssetServer>,
    mut commands: Commands,
) {
    if !keys.just_pressed(KeyCode::KeyB) {
        return;
    }

    for entity in &backgrounds {
        commands.trigger(ReplaceLocationImage {
            entity,
            image: asset_server.load("locations/office_night.png"),
        });
    }
}
