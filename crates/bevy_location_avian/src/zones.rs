//! Zone collider generation.

use avian2d::prelude::*;
use bevy::prelude::*;
use bevy_location_core::components::{CollisionDisabled, PolygonCollider};
use bevy_location_core::events::LocationObjectSpawned;

use crate::config::ZonePhysicsConfig;
use crate::shapes;

/// Observer that generates physics colliders for location zones.
///
/// The observer:
/// 1. Skips objects without a `PolygonCollider` or `CollisionDisabled`
/// 2. Turns a zone outline into a static closed-polyline collider
/// 3. Makes it a sensor and applies collision layers per `ZonePhysicsConfig`
/// 4. Marks layout-only outlines with `ColliderDisabled`
pub fn on_location_object_spawned(
    trigger: On<LocationObjectSpawned>,
    object_query: Query<(Option<&PolygonCollider>, Has<CollisionDisabled>)>,
    config: Res<ZonePhysicsConfig>,
    mut commands: Commands,
) {
    let event = trigger.event();

    let Ok((polygon, collision_disabled)) = object_query.get(event.entity) else {
        return;
    };

    if collision_disabled {
        commands.entity(event.entity).insert(ColliderDisabled);
        return;
    }

    let Some(polygon) = polygon else {
        return;
    };

    let Some(collider) = shapes::outline_to_collider(&polygon.points) else {
        warn!(
            "Zone '{}' has fewer than 2 outline points, skipping collider",
            event.source_id
        );
        return;
    };

    let mut entity_cmds = commands.entity(event.entity);
    entity_cmds.insert((
        RigidBody::Static,
        collider,
        config.collision_layers,
    ));

    if config.sensor {
        entity_cmds.insert(Sensor);
    }

    debug!("Created zone collider for '{}'", event.source_id);
}

#[cfg(test)]
mod tests {
    use bevy_location_core::components::NodeKind;

    use super::*;

    fn world(config: ZonePhysicsConfig) -> World {
        let mut world = World::new();
        world.insert_resource(config);
        world.add_observer(on_location_object_spawned);
        world
    }

    fn spawned(world: &mut World, entity: Entity, kind: NodeKind) {
        world.trigger(LocationObjectSpawned {
            entity,
            container: Entity::PLACEHOLDER,
            source_id: "door".into(),
            kind,
        });
        world.flush();
    }

    fn square() -> PolygonCollider {
        PolygonCollider {
            points: vec![
                Vec2::new(0.0, 0.0),
                Vec2::new(10.0, 0.0),
                Vec2::new(10.0, 10.0),
                Vec2::new(0.0, 10.0),
            ],
        }
    }

    #[test]
    fn zones_become_static_sensors() {
        let layers = CollisionLayers::new(0b0010, 0b0001);
        let mut world = world(ZonePhysicsConfig {
            sensor: true,
            collision_layers: layers,
        });
        let entity = world.spawn(square()).id();
        spawned(&mut world, entity, NodeKind::Zone);

        assert_eq!(world.get::<RigidBody>(entity), Some(&RigidBody::Static));
        assert!(world.get::<Collider>(entity).is_some());
        assert!(world.get::<Sensor>(entity).is_some());
        assert_eq!(world.get::<CollisionLayers>(entity), Some(&layers));
    }

    #[test]
    fn solid_zones_when_sensors_are_off() {
        let mut world = world(ZonePhysicsConfig {
            sensor: false,
            ..default()
        });
        let entity = world.spawn(square()).id();
        spawned(&mut world, entity, NodeKind::Zone);

        assert!(world.get::<Collider>(entity).is_some());
        assert!(world.get::<Sensor>(entity).is_none());
    }

    #[test]
    fn layout_outlines_disable_collision() {
        let mut world = world(ZonePhysicsConfig::default());
        let entity = world.spawn(CollisionDisabled).id();
        spawned(&mut world, entity, NodeKind::Image);

        assert!(world.get::<ColliderDisabled>(entity).is_some());
        assert!(world.get::<Collider>(entity).is_none());
        assert!(world.get::<RigidBody>(entity).is_none());
    }

    #[test]
    fn single_point_outline_gets_no_collider() {
        let mut world = world(ZonePhysicsConfig::default());
        let entity = world
            .spawn(PolygonCollider {
                points: vec![Vec2::ZERO],
            })
            .id();
        spawned(&mut world, entity, NodeKind::Zone);

        assert!(world.get::<Collider>(entity).is_none());
    }
}
