//! # `bevy_location_sprite`
//!
//! Sprite rendering for `bevy_location`.
//!
//! This crate is a Layer 3 plugin that observes generation events from
//! `bevy_location_core` and turns every `ImageBinding` into a `Sprite`.
//!
//! ## Features
//!
//! - **Origin anchoring**: sprites are anchored bottom-left, matching object placement
//! - **Scene-unit sizing**: sprites are sized from the image's pixel size and the
//!   location's pixels-to-units scale
//! - **Address modes**: the binding's clamp/repeat/mirror mode is written to the sampler
//! - **Image replacement**: `ReplaceLocationImage` swaps a texture at runtime
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use bevy::prelude::*;
//! use bevy_location_assets::LocationAssetsPlugin;
//! use bevy_location_core::prelude::*;
//! use bevy_location_sprite::LocationSpritePlugin;
//!
//! fn main() {
//!     App::new()
//!         .add_plugins(DefaultPlugins)
//!         .add_plugins(LocationAssetsPlugin)
//!         .add_plugins(LocationCorePlugin::default())
//!         .add_plugins(LocationSpritePlugin::default())
//!         .run();
//! }
//! ```

pub mod config;
pub mod images;
pub mod plugin;
pub mod replace;
pub mod sampler;

pub use config::SpriteRenderConfig;
pub use plugin::LocationSpritePlugin;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::SpriteRenderConfig;
    pub use crate::plugin::LocationSpritePlugin;
    pub use crate::replace::ReplaceLocationImage;
}
