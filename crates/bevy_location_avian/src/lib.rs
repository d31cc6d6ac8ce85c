//! # `bevy_location_avian`
//!
//! `Avian2D` physics integration for `bevy_location`.
//!
//! This crate is a Layer 3 plugin: it observes generation events from
//! `bevy_location_core` and turns every zone's `PolygonCollider` outline into an
//! `Avian2D` collider. Zones become static sensors by default, so they report overlaps
//! (clicks, walk-ins) without blocking movement.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use avian2d::prelude::*;
//! use bevy::prelude::*;
//! use bevy_location_assets::LocationAssetsPlugin;
//! use bevy_location_avian::LocationAvianPlugin;
//! use bevy_location_core::LocationCorePlugin;
//!
//! fn main() {
//!     App::new()
//!         .add_plugins(DefaultPlugins)
//!         .add_plugins(PhysicsPlugins::default())
//!         .add_plugins(LocationAssetsPlugin)
//!         .add_plugins(LocationCorePlugin::default())
//!         .add_plugins(LocationAvianPlugin::default())
//!         .run();
//! }
//! ```

pub mod config;
pub mod plugin;
pub mod shapes;
pub mod zones;

pub use config::ZonePhysicsConfig;
pub use plugin::LocationAvianPlugin;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::ZonePhysicsConfig;
    pub use crate::plugin::LocationAvianPlugin;
    pub use crate::shapes::outline_to_collider;
}
