//! Systems and generation context.

pub mod context;
pub mod generate;

pub use context::{GenerateContext, ImageUnavailable, ResolvedImage};
pub use generate::{
    RegenerateLocation, mark_changed_roots, mark_modified_locations, process_loaded_locations,
};
