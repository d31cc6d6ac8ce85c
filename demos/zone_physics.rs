//! Zone physics demo for `bevy_location`.
//!
//! Generates the office location with `avian2d` colliders on its zones and drops a
//! ball through the door. Zones are sensors, so the ball falls through and each
//! overlap is logged. Press `Space` to drop another ball.

use avian2d::prelude::*;
use bevy::prelude::*;
use bevy_location::prelude::*;

#[derive(Component, Default)]
struct ClickableZone;

impl LocationBehavior for ClickableZone {
    const INTERACTIVE_ZONE: bool = true;
}

fn main() {
    App::new()
        .add_plugins(DefaultPlugins)
        .add_plugins(PhysicsPlugins::default().with_length_unit(20.0))
        .insert_resource(Gravity(Vec2::NEG_Y * 400.0))
        .add_plugins(
            LocationPlugin::default()
                .with_behavior::<ClickableZone>("Zone")
                .with_avian(ZonePhysicsConfig::default()),
        )
        .add_observer(track_zone_overlaps)
        .add_systems(Startup, (setup_camera, spawn_location))
        .add_systems(Update, (drop_ball_on_key, log_zone_overlaps))
        .run();
}

fn setup_camera(mut commands: Commands) {
    commands.spawn((Camera2d, Transform::from_xyz(400.0, 300.0, 0.0)));
}

fn spawn_location(mut commands: Commands, asset_server: Res<AssetServer>) {
    commands.spawn(LocationRoot {
        handle: asset_server.load("locations/office.location.json"),
        pixels_to_units: 1.0,
    });
    spawn_ball(&mut commands);
}

fn spawn_ball(commands: &mut Commands) {
    commands.spawn((
        Name::new("Ball"),
        RigidBody::Dynamic,
        Collider::circle(10.0),
        Transform::from_xyz(650.0, 580.0, 5.0),
    ));
}

/// Zones report overlaps through `CollidingEntities`.
fn track_zone_overlaps(trigger: On<LocationObjectSpawned>, mut commands: Commands) {
    let event = trigger.event();
    if event.kind == NodeKind::Zone {
        commands
            .entity(event.entity)
            .insert(CollidingEntities::default());
    }
}

fn log_zone_overlaps(
    zones: Query<(&Name, &CollidingEntities), (With<ClickableZone>, Changed<CollidingEntities>)>,
) {
    for (name, colliding) in &zones {
        if !colliding.is_empty() {
            info!("Zone '{}' overlaps {} bodies", name, colliding.len());
        }
    }
}

fn drop_ball_on_key(keys: Res<ButtonInput<KeyCode>>, mut commands: Commands) {
    if keys.just_pressed(KeyCode::Space) {
        spawn_ball(&mut commands);
    }
}
