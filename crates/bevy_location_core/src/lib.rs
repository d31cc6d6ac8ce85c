//! # `bevy_location_core`
//!
//! Scene generation backbone for `bevy_location`. Converts a loaded location into an
//! ECS hierarchy of objects with stacking depth, placement, behaviors and collision
//! outlines.
//!
//! **This crate does NOT handle rendering or physics** - those are Layer 3 concerns that
//! plug in via events and component queries.
//!
//! ## Architecture
//!
//! Layer 2 (this crate) sits between:
//! - **Layer 1** (`bevy_location_assets`): Pure asset loading
//! - **Layer 3** (`bevy_location_sprite`, `bevy_location_avian`): Rendering/physics plugins
//!
//! ## What Layer 2 Provides
//!
//! 1. **Object hierarchy**: one entity per authored node, parented like the source tree
//! 2. **Classification**: zones, images and containers, with labels resolved through
//!    alias links
//! 3. **Placement**: pixel data converted to scene units, Y flipped, depth assigned in
//!    pre-order
//! 4. **Behaviors**: components attached by content type tag
//! 5. **Events**: extension hooks for Layer 3 plugins
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use bevy::prelude::*;
//! use bevy_location_assets::LocationAssetsPlugin;
//! use bevy_location_core::{LocationCorePlugin, LocationRoot};
//!
//! fn main() {
//!     App::new()
//!         .add_plugins(DefaultPlugins)
//!         .add_plugins(LocationAssetsPlugin)
//!         .add_plugins(LocationCorePlugin::default())
//!         .add_systems(Startup, spawn_location)
//!         .run();
//! }
//!
//! fn spawn_location(mut commands: Commands, asset_server: Res<AssetServer>) {
//!     commands.spawn(LocationRoot {
//!         handle: asset_server.load("locations/office.location.json"),
//!         pixels_to_units: 1.0,
//!     });
//! }
//! ```

pub mod behaviors;
pub mod classify;
pub mod components;
pub mod debug;
pub mod error;
pub mod events;
pub mod geometry;
pub mod order;
pub mod plugin;
pub mod spawn;
pub mod systems;

pub mod prelude {
    //! Common imports for `bevy_location_core` users.

    pub use crate::behaviors::{LocationBehavior, TypeBehaviorMap};
    pub use crate::components::{
        AddressMode, BackgroundLayer, CollisionDisabled, GeneratedObjects, ImageBinding,
        LocationBounds, LocationObject, LocationPlacement, LocationRoot, NodeKind,
        PolygonCollider, StackingDepth,
    };
    pub use crate::error::GenerateError;
    pub use crate::events::{LocationGenerated, LocationObjectSpawned};
    pub use crate::geometry::{Bounds, PixelScale};
    pub use crate::plugin::{LocationCoreConfig, LocationCorePlugin};
    pub use crate::spawn::{GeneratedLocation, generate_location};
    pub use crate::systems::{GenerateContext, RegenerateLocation};
}

pub use components::LocationRoot;
pub use plugin::{LocationCoreConfig, LocationCorePlugin};
