//! Recursive object generation.

use bevy::prelude::*;
use bevy_location_assets::prelude::NodeId;

use crate::classify::classify;
use crate::components::{
    BackgroundLayer, CollisionDisabled, LocationObject, LocationPlacement, NodeKind,
    StackingDepth,
};
use crate::events::LocationObjectSpawned;
use crate::geometry::Bounds;
use crate::order::sort_siblings;
use crate::spawn::{bind_image, build_collider};
use crate::systems::GenerateContext;

/// Mutable state threaded through one generation run.
#[derive(Debug, Clone)]
pub struct BuildState {
    /// Location container all objects are generated under
    pub container: Entity,

    /// Overall location bounds in scene units
    pub overall_bounds: Bounds,

    /// Depth handed to the next generated object
    pub depth: f32,

    /// Last object designated as background layer
    pub background_layer: Option<Entity>,

    /// Number of objects generated so far
    pub spawned: usize,
}

impl BuildState {
    pub fn new(container: Entity, overall_bounds: Bounds) -> Self {
        Self {
            container,
            overall_bounds,
            depth: 0.0,
            background_layer: None,
            spawned: 0,
        }
    }
}

/// Generate objects for every child of `source`, depth-first, in stacking order.
///
/// # Arguments
///
/// * `commands` - Bevy commands for entity spawning
/// * `context` - Location data and settings for this run
/// * `parent` - Entity the generated children are attached to
/// * `parent_placement` - Absolute placement of `parent` in the location frame
/// * `source` - Node whose children are generated
/// * `state` - Running depth and bookkeeping
///
/// # Returns
///
/// The direct children generated under `parent`
pub fn spawn_children(
    commands: &mut Commands,
    context: &GenerateContext,
    parent: Entity,
    parent_placement: Vec3,
    source: NodeId,
    state: &mut BuildState,
) -> Vec<Entity> {
    let children = sort_siblings(context.location, context.location.children(source));

    children
        .into_iter()
        .map(|child| spawn_object(commands, context, parent, parent_placement, child, state))
        .collect()
}

/// Generate one object, then its subtree.
fn spawn_object(
    commands: &mut Commands,
    context: &GenerateContext,
    parent: Entity,
    parent_placement: Vec3,
    id: NodeId,
    state: &mut BuildState,
) -> Entity {
    let node = context.location.node(id);
    let classification = classify(context.location, id, context.behaviors);
    let kind = classification.kind;
    let depth = state.depth;

    let mut entity_cmd = commands.spawn((
        Name::new(classification.label.to_string()),
        LocationObject {
            source_id: node.id.clone(),
            kind,
        },
        StackingDepth(depth),
        ChildOf(parent),
    ));
    let entity = entity_cmd.id();

    for behavior in &classification.behaviors {
        behavior.attach(&mut entity_cmd);
    }

    let mut image_size = None;
    if let Some(asset_id) = classification.image_asset {
        image_size = bind_image(&mut entity_cmd, context, node, asset_id);

        if classification.label == context.config.background_label {
            entity_cmd.insert(BackgroundLayer);
            if let Some(previous) = state.background_layer.replace(entity) {
                warn!(
                    "Location has several background layers, '{}' replaces {:?}",
                    node.id, previous
                );
            }
        }
    }

    let local_bounds = match node.vertices.as_deref().filter(|v| !v.is_empty()) {
        Some(vertices) => {
            let outline: Vec<Vec2> = vertices.iter().map(|v| context.scale.to_local(*v)).collect();
            let bounds = Bounds::from_points(&outline);

            if kind == NodeKind::Zone {
                let collider = build_collider(&outline);
                if collider.is_degenerate() {
                    debug!("Zone '{}' has a degenerate outline", node.id);
                }
                entity_cmd.insert(collider);
            } else {
                entity_cmd.insert(CollisionDisabled);
            }

            bounds
        }
        None => match image_size {
            Some(size) => Bounds::from_size(context.scale.to_local(size)),
            None => {
                if kind == NodeKind::Zone {
                    warn!("Zone '{}' has no outline, generating it without a collider", node.id);
                }
                Bounds::ZERO
            }
        },
    };

    let translation = node
        .translation
        .map(|t| context.scale.to_local(t))
        .unwrap_or(Vec2::ZERO);

    // Zones are anchored by their outline, everything else by its origin
    let mut up = state.overall_bounds.h - local_bounds.h - translation.y;
    if kind == NodeKind::Zone {
        up += local_bounds.y_max();
    }
    let placement = Vec3::new(translation.x, up, depth);

    entity_cmd.insert((
        LocationPlacement(placement),
        Transform::from_translation(placement - parent_placement),
    ));

    commands.trigger(LocationObjectSpawned {
        entity,
        container: state.container,
        source_id: node.id.clone(),
        kind,
    });

    state.depth += context.config.depth_step;
    state.spawned += 1;

    spawn_children(commands, context, entity, placement, id, state);

    entity
}
