//! Image binding for image-bearing nodes.

use bevy::prelude::*;
use bevy_location_assets::prelude::SourceNode;

use crate::components::ImageBinding;
use crate::systems::GenerateContext;

/// Bind the node's image to the object being generated.
///
/// Returns the image's pixel size, used as a bounds fallback for nodes without an
/// outline. An image that can't be resolved is logged and the object is generated
/// without a visual.
pub fn bind_image(
    entity_cmd: &mut EntityCommands,
    context: &GenerateContext,
    node: &SourceNode,
    asset_id: &str,
) -> Option<Vec2> {
    let resolved = match context.resolve_image_asset(asset_id) {
        Ok(resolved) => resolved,
        Err(e) => {
            warn!(
                "Node '{}' ({}): {}, generating it without an image",
                node.id, node.technical_name, e
            );
            return None;
        }
    };

    entity_cmd.insert(ImageBinding {
        image: resolved.handle,
        address_mode: context.config.address_mode,
        pixel_size: resolved.pixel_size,
        size: resolved.pixel_size.map(|size| context.scale.to_local(size)),
    });

    resolved.pixel_size
}
