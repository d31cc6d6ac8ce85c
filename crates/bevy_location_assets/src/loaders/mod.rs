//! Asset loaders for location files.

pub mod location;

pub use location::{LocationAssetLoader, LocationLoaderError};
