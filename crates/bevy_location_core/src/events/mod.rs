//! Event system for Layer 3 extension hooks.
//!
//! Rendering and physics plugins observe these events to attach their own components
//! to generated objects.

use bevy::prelude::*;

use crate::components::NodeKind;

/// Fired once for every generated object, after its components are queued.
///
/// # Example
///
/// ```ignore
/// app.add_observer(|trigger: On<LocationObjectSpawned>, mut commands: Commands| {
///     if trigger.event().kind == NodeKind::Zone {
///         commands.entity(trigger.event().entity).insert(Highlightable);
///     }
/// });
/// ```
#[derive(Event, Debug, Clone)]
pub struct LocationObjectSpawned {
    /// The generated object
    pub entity: Entity,
    /// The location container it was generated under
    pub container: Entity,
    /// Id of the source node in the content database
    pub source_id: String,
    pub kind: NodeKind,
}

/// Fired on the container when a generation run completes.
///
/// This is an `EntityEvent` that can be observed on the container entity.
///
/// # Example
///
/// ```ignore
/// commands.spawn(LocationRoot { ... })
///     .observe(|trigger: On<LocationGenerated>| {
///         info!("Background: {:?}", trigger.event().background_layer);
///     });
/// ```
#[derive(EntityEvent, Debug, Clone)]
pub struct LocationGenerated {
    /// The container entity
    #[event_target]
    pub entity: Entity,
    /// The object generated for the background layer, if any
    pub background_layer: Option<Entity>,
}
