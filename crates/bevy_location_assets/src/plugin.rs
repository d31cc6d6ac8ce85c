use bevy::prelude::*;

use crate::assets::location::LocationAsset;
use crate::loaders::location::LocationAssetLoader;

/// Plugin that registers the location asset type and its loader
///
/// This plugin enables loading location files (`.location.json`) exported from the
/// content database as Bevy assets.
///
/// # Example
/// ```no_run
/// use bevy::prelude::*;
/// use bevy_location_assets::LocationAssetsPlugin;
///
/// App::new()
///     .add_plugins(DefaultPlugins)
///     .add_plugins(LocationAssetsPlugin)
///     .run();
/// ```
///
/// # What this plugin does NOT do
///
/// - Entity generation (that's Layer 2 - `bevy_location_core`)
/// - Rendering (that's Layer 3 - `bevy_location_sprite`)
/// - Physics integration (that's Layer 3 - `bevy_location_avian`)
pub struct LocationAssetsPlugin;

impl Plugin for LocationAssetsPlugin {
    fn build(&self, app: &mut App) {
        app.init_asset::<LocationAsset>()
            .register_asset_loader(LocationAssetLoader);
    }
}
