//! Asset types for location content.

pub mod location;

pub use location::{
    AssetCategory, AssetEntry, LocationAsset, LocationError, LocationFile, NodeId, SourceNode,
};
