//! Generation context for accessing location and asset data.

use bevy::prelude::*;
use bevy_location_assets::prelude::{AssetCategory, LocationAsset};
use thiserror::Error;

use crate::behaviors::TypeBehaviorMap;
use crate::error::GenerateError;
use crate::geometry::PixelScale;
use crate::plugin::LocationCoreConfig;

/// Read-only context for one generation run.
pub struct GenerateContext<'a> {
    /// The location being generated
    pub location: &'a LocationAsset,

    /// Type tag to behavior mapping
    pub behaviors: &'a TypeBehaviorMap,

    pub config: &'a LocationCoreConfig,

    /// Loaded images, for pixel sizes the location file doesn't declare
    pub images: Option<&'a Assets<Image>>,

    pub scale: PixelScale,
}

/// An image asset ready to be bound to an object.
#[derive(Debug, Clone)]
pub struct ResolvedImage {
    pub handle: Handle<Image>,
    /// Raw pixel dimensions, if declared or already loaded
    pub pixel_size: Option<Vec2>,
}

/// Why an image reference could not be bound.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ImageUnavailable {
    #[error("asset '{0}' is not in the location's asset table")]
    UnknownAsset(String),

    #[error("asset '{0}' is a {1:?} asset, not an image")]
    NotAnImage(String, AssetCategory),

    #[error("asset '{0}' has no loaded image")]
    NotLoaded(String),
}

impl<'a> GenerateContext<'a> {
    /// Create a new context.
    ///
    /// Fails if `pixels_to_units` is not a finite positive number.
    pub fn new(
        location: &'a LocationAsset,
        behaviors: &'a TypeBehaviorMap,
        config: &'a LocationCoreConfig,
        pixels_to_units: f32,
    ) -> Result<Self, GenerateError> {
        Ok(Self {
            location,
            behaviors,
            config,
            images: None,
            scale: PixelScale::new(pixels_to_units)?,
        })
    }

    pub fn with_images(mut self, images: &'a Assets<Image>) -> Self {
        self.images = Some(images);
        self
    }

    /// Resolve an entry of the location's asset table to a bindable image.
    ///
    /// The pixel size comes from the declared size if present, otherwise from the
    /// loaded image.
    pub fn resolve_image_asset(&self, asset_id: &str) -> Result<ResolvedImage, ImageUnavailable> {
        let entry = self
            .location
            .asset(asset_id)
            .ok_or_else(|| ImageUnavailable::UnknownAsset(asset_id.to_string()))?;

        if entry.category != AssetCategory::Image {
            return Err(ImageUnavailable::NotAnImage(
                asset_id.to_string(),
                entry.category,
            ));
        }

        let handle = entry
            .image
            .clone()
            .ok_or_else(|| ImageUnavailable::NotLoaded(asset_id.to_string()))?;

        let pixel_size = entry.size.map(|size| size.as_vec2()).or_else(|| {
            self.images
                .and_then(|images| images.get(&handle))
                .map(Image::size_f32)
        });

        Ok(ResolvedImage { handle, pixel_size })
    }
}
