//! # `bevy_location`
//!
//! Generates playable 2D scenes from locations authored in a narrative content
//! database.
//!
//! This is a unified meta-crate that combines all `bevy_location_*` sub-crates with
//! convenient feature flags for easy integration.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use bevy::prelude::*;
//! use bevy_location::prelude::*;
//!
//! fn main() {
//!     App::new()
//!         .add_plugins(DefaultPlugins)
//!         .add_plugins(LocationPlugin::default())
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
//!
//! ## Features
//!
//! - **default**: Includes `sprite` feature for rendering
//! - **sprite**: Location images rendered as sprites
//! - **avian**: Zone collider generation using `avian2d`
//!
//! ## Architecture
//!
//! This crate is organized into 3 layers:
//!
//! - **Layer 1** ([`assets`]): Location file loading and the asset table
//! - **Layer 2** ([`core`]): Scene generation, placement, behaviors and events
//! - **Layer 3** (optional): Integration plugins for rendering and physics
//!   - `sprite`: Sprite rendering of image objects
//!   - `avian`: Physics integration with Avian2D

pub mod plugin;

// Re-export sub-crates for advanced usage
pub use bevy_location_assets as assets;
pub use bevy_location_core as core;

#[cfg(feature = "sprite")]
pub use bevy_location_sprite as sprite;

#[cfg(feature = "avian")]
pub use bevy_location_avian as avian;

/// Unified prelude for `bevy_location`
///
/// This module re-exports the most commonly used types from all sub-crates
/// for convenient access.
pub mod prelude {
    // Core functionality (always available)
    pub use crate::assets::prelude::*;
    pub use crate::core::prelude::*;

    // Layer 3 plugins (feature-gated)
    #[cfg(feature = "sprite")]
    pub use crate::sprite::prelude::*;

    #[cfg(feature = "avian")]
    pub use crate::avian::prelude::*;

    // Unified plugin
    pub use crate::plugin::LocationPlugin;
}
