//! # `bevy_location_assets`
//!
//! Layer 1 of `bevy_location`: loads locations exported from a narrative content
//! database as Bevy assets.
//!
//! A location is a tree of nodes. Each node may carry an outline (vertices), a
//! translation, a z-index hint, an alias link to another node and a reference into the
//! location's asset table. The loader flattens the tree into a [`LocationAsset`]
//! arena and loads every referenced image as a dependency.
//!
//! [`LocationAsset`]: assets::LocationAsset

pub mod assets;
pub mod loaders;
pub mod plugin;

pub mod prelude {
    //! Common imports for `bevy_location_assets` users.

    pub use crate::assets::{
        AssetCategory, AssetEntry, LocationAsset, LocationError, NodeId, SourceNode,
    };
    pub use crate::loaders::{LocationAssetLoader, LocationLoaderError};
    pub use crate::plugin::LocationAssetsPlugin;
}

pub use plugin::LocationAssetsPlugin;
