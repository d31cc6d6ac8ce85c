use std::path::Path;

use bevy::{
    asset::{AssetLoader, LoadContext, io::Reader},
    prelude::*,
    tasks::ConditionalSendFuture,
};
use normalize_path::NormalizePath;
use thiserror::Error;

use crate::assets::location::{AssetCategory, LocationAsset, LocationError};

/// Asset loader for location files (`.location.json`)
///
/// Every image in the location's asset table is loaded as a dependency, so the
/// location only counts as fully loaded once its images are.
#[derive(Default)]
pub struct LocationAssetLoader;

#[derive(Debug, Error)]
pub enum LocationLoaderError {
    #[error("Failed to load location: {0}")]
    Location(#[from] LocationError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid path: {0}")]
    InvalidPath(String),
}

impl AssetLoader for LocationAssetLoader {
    type Asset = LocationAsset;
    type Settings = ();
    type Error = LocationLoaderError;

    fn load(
        &self,
        reader: &mut dyn Reader,
        _settings: &Self::Settings,
        load_context: &mut LoadContext,
    ) -> impl ConditionalSendFuture<Output = Result<Self::Asset, Self::Error>> {
        async move {
            let mut bytes = Vec::new();
            reader.read_to_end(&mut bytes).await?;

            let mut location = LocationAsset::from_json_slice(&bytes)?;

            let parent = load_context
                .asset_path()
                .path()
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_default();

            for (asset_id, entry) in &mut location.assets {
                let Some(path) = entry.path.as_mut() else {
                    continue;
                };
                *path = resolve_relative_path(&parent, path)?;

                if entry.category == AssetCategory::Image {
                    let handle: Handle<Image> = load_context.load(path.clone());
                    entry.image = Some(handle);
                } else {
                    debug!(
                        "Asset '{}' has category {:?}, not loading it",
                        asset_id, entry.category
                    );
                }
            }

            info!(
                "Loaded location '{}' with {} nodes and {} assets",
                load_context.asset_path(),
                location.len(),
                location.assets.len()
            );

            Ok(location)
        }
    }

    fn extensions(&self) -> &[&str] {
        &["location.json"]
    }
}

/// Resolve a path from a location file to a Bevy asset path.
///
/// Content databases export paths relative to the location file. Bevy's asset system
/// expects asset-root-relative paths with forward slashes and no `..` components.
///
/// # Arguments
/// * `parent` - Asset-root-relative directory of the location file
/// * `relative_path` - Path as written in the location file
pub fn resolve_relative_path(
    parent: &Path,
    relative_path: &str,
) -> Result<String, LocationLoaderError> {
    let relative_path = relative_path.replace('\\', "/");

    // Already asset-root-relative
    if let Some(stripped) = relative_path.strip_prefix("assets/") {
        return normalized_string(Path::new(stripped));
    }

    let parent_str = parent.to_str().ok_or_else(|| {
        LocationLoaderError::InvalidPath(format!("Invalid UTF-8 in path: {:?}", parent))
    })?;
    let parent_str = parent_str.replace('\\', "/");

    let full_path = if parent_str.is_empty() {
        relative_path
    } else {
        format!("{}/{}", parent_str, relative_path)
    };

    normalized_string(Path::new(&full_path))
}

fn normalized_string(path: &Path) -> Result<String, LocationLoaderError> {
    let normalized = path.normalize();
    normalized
        .to_str()
        .map(|s| s.replace('\\', "/"))
        .ok_or_else(|| {
            LocationLoaderError::InvalidPath(format!("Invalid UTF-8 in path: {:?}", normalized))
        })
}
