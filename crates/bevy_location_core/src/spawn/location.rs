//! Location generation entry point.

use bevy::prelude::*;
use bevy_location_assets::prelude::LocationAsset;

use crate::components::{GeneratedObjects, LocationBounds};
use crate::error::GenerateError;
use crate::events::LocationGenerated;
use crate::geometry::{Bounds, PixelScale};
use crate::spawn::objects::{BuildState, spawn_children};
use crate::systems::GenerateContext;

/// Summary of a completed generation run.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedLocation {
    /// The object designated as background layer, if any
    pub background_layer: Option<Entity>,
    /// Overall location bounds in scene units
    pub bounds: Bounds,
    /// Top-level generated objects (direct children of the container)
    pub objects: Vec<Entity>,
    /// Total number of generated objects
    pub spawned: usize,
}

/// Overall bounds of a location, in scene units.
///
/// Covers every vertex-bearing descendant of the root. Each polygon is flipped against
/// its own bounds before it is merged.
pub fn location_bounds(location: &LocationAsset, scale: PixelScale) -> Bounds {
    location
        .descendants(location.root())
        .into_iter()
        .filter_map(|id| location.node(id).vertices.as_deref())
        .fold(Bounds::EMPTY, |overall, vertices| {
            let reference_y = Bounds::from_points(vertices).y_max();
            let flipped: Vec<Vec2> = vertices
                .iter()
                .map(|v| scale.to_world(*v, reference_y))
                .collect();
            overall.union(Bounds::from_points(&flipped))
        })
}

/// Generate the location's object hierarchy under `container`.
///
/// Objects from the `previous` run are despawned first, so regenerating is
/// idempotent. Other children of the container are left alone. Nothing is touched
/// if the container doesn't exist.
///
/// On success the container receives [`GeneratedObjects`] and [`LocationBounds`] and
/// a [`LocationGenerated`] event is triggered on it.
pub fn generate_location(
    commands: &mut Commands,
    context: &GenerateContext,
    container: Entity,
    previous: Option<&GeneratedObjects>,
) -> Result<GeneratedLocation, GenerateError> {
    if commands.get_entity(container).is_err() {
        return Err(GenerateError::MissingContainer(container));
    }

    if let Some(previous) = previous {
        despawn_generated(commands, previous);
    }

    let bounds = location_bounds(context.location, context.scale);
    let mut state = BuildState::new(container, bounds);

    let objects = spawn_children(
        commands,
        context,
        container,
        Vec3::ZERO,
        context.location.root(),
        &mut state,
    );

    commands.entity(container).insert((
        GeneratedObjects(objects.clone()),
        LocationBounds(bounds),
    ));

    commands.trigger(LocationGenerated {
        entity: container,
        background_layer: state.background_layer,
    });

    if state.background_layer.is_none() {
        debug!("Location {:?} has no background layer", container);
    }

    Ok(GeneratedLocation {
        background_layer: state.background_layer,
        bounds,
        objects,
        spawned: state.spawned,
    })
}

/// Despawn the object subtrees of a previous run.
fn despawn_generated(commands: &mut Commands, previous: &GeneratedObjects) {
    for &entity in &previous.0 {
        if let Ok(mut entity_cmd) = commands.get_entity(entity) {
            entity_cmd.despawn();
        }
    }
}
