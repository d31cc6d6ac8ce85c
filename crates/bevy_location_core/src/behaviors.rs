//! Type tag to behavior mapping.
//!
//! Maps content database type tags to ECS components ("behaviors") that are attached
//! to every generated object whose source node is of that type.
//!
//! # Example
//!
//! ```rust,no_run
//! use bevy::prelude::*;
//! use bevy_location_core::behaviors::{LocationBehavior, TypeBehaviorMap};
//!
//! #[derive(Component, Default)]
//! struct ClickableZone;
//!
//! impl LocationBehavior for ClickableZone {
//!     const INTERACTIVE_ZONE: bool = true;
//! }
//!
//! #[derive(Component, Default)]
//! struct Hotspot;
//!
//! impl LocationBehavior for Hotspot {}
//!
//! let map = TypeBehaviorMap::new()
//!     .with::<ClickableZone>("Zone")
//!     .with::<Hotspot>("Zone");
//! assert_eq!(map.len(), 2);
//! ```

use bevy::prelude::*;
use bevy_location_assets::prelude::SourceNode;

/// A component that can be attached to generated objects by type tag.
pub trait LocationBehavior: Component + Default {
    /// Objects carrying this behavior are zones: they get a polygon collider and are
    /// anchored by their outline.
    const INTERACTIVE_ZONE: bool = false;
}

/// Type-erased constructor for one behavior.
#[derive(Clone, Copy)]
pub struct BehaviorFactory {
    /// Rust type name of the behavior, for logging
    pub name: &'static str,
    pub interactive_zone: bool,
    insert: fn(&mut EntityCommands),
}

impl BehaviorFactory {
    pub fn of<B: LocationBehavior>() -> Self {
        Self {
            name: std::any::type_name::<B>(),
            interactive_zone: B::INTERACTIVE_ZONE,
            insert: insert_behavior::<B>,
        }
    }

    /// Attach a fresh instance of the behavior.
    pub fn attach(&self, entity: &mut EntityCommands) {
        (self.insert)(entity);
    }
}

impl std::fmt::Debug for BehaviorFactory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BehaviorFactory")
            .field("name", &self.name)
            .field("interactive_zone", &self.interactive_zone)
            .finish_non_exhaustive()
    }
}

fn insert_behavior<B: LocationBehavior>(entity: &mut EntityCommands) {
    entity.insert(B::default());
}

/// Ordered mapping from type tag to behaviors.
///
/// One tag may map to several behaviors, and a node matches every entry whose tag it
/// `is_a`, so inherited types pick up their base types' behaviors too. Entries are
/// applied in insertion order.
#[derive(Resource, Debug, Clone, Default)]
pub struct TypeBehaviorMap {
    entries: Vec<(String, BehaviorFactory)>,
}

impl TypeBehaviorMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`TypeBehaviorMap::insert`].
    pub fn with<B: LocationBehavior>(mut self, type_tag: impl Into<String>) -> Self {
        self.insert::<B>(type_tag);
        self
    }

    /// Map `type_tag` to behavior `B`.
    pub fn insert<B: LocationBehavior>(&mut self, type_tag: impl Into<String>) -> &mut Self {
        self.entries
            .push((type_tag.into(), BehaviorFactory::of::<B>()));
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Every behavior whose type tag the node matches, in insertion order.
    pub fn matching<'a>(
        &'a self,
        node: &'a SourceNode,
    ) -> impl Iterator<Item = &'a BehaviorFactory> + 'a {
        self.entries
            .iter()
            .filter(|(tag, _)| node.is_a(tag))
            .map(|(_, factory)| factory)
    }
}
