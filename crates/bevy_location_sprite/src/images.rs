//! Observer for location image rendering.

use bevy::prelude::*;
use bevy::sprite::Anchor;
use bevy_location_core::components::ImageBinding;
use bevy_location_core::events::LocationObjectSpawned;

use crate::config::SpriteRenderConfig;
use crate::sampler::set_address_mode;

/// Build the sprite for an image binding.
///
/// The sprite is drawn at the binding's scene-unit size when known, otherwise at the
/// texture's own size.
pub fn sprite_for(binding: &ImageBinding, config: &SpriteRenderConfig) -> Sprite {
    Sprite {
        image: binding.image.clone(),
        color: config.color,
        custom_size: binding.size,
        ..default()
    }
}

/// Observer that renders image-bearing location objects as sprites.
///
/// When an object with an `ImageBinding` is generated by Layer 2, this observer:
/// 1. Creates a Sprite with the bound image
/// 2. Sets anchor to BottomLeft (objects are placed by their origin, Y up)
/// 3. Writes the binding's address mode into the image sampler
pub fn on_location_object_spawned(
    trigger: On<LocationObjectSpawned>,
    bindings: Query<&ImageBinding>,
    config: Res<SpriteRenderConfig>,
    mut images: ResMut<Assets<Image>>,
    mut commands: Commands,
) {
    let event = trigger.event();

    // Not every object carries an image
    let Ok(binding) = bindings.get(event.entity) else {
        return;
    };

    commands.entity(event.entity).insert((
        sprite_for(binding, &config),
        Anchor(Vec2::new(-0.5, -0.5)), // BottomLeft
    ));

    if config.apply_address_modes {
        match images.get_mut(&binding.image) {
            Some(image) => {
                if set_address_mode(image, binding.address_mode) {
                    debug!(
                        "Set {:?} addressing on image of '{}'",
                        binding.address_mode, event.source_id
                    );
                }
            }
            None => debug!(
                "Image of '{}' not loaded yet, keeping its default sampler",
                event.source_id
            ),
        }
    }
}
