//! Runtime image replacement.

use bevy::prelude::*;
use bevy_location_core::components::ImageBinding;

/// Swap the texture of a generated image object.
///
/// The sprite keeps its size and anchor; only the texture changes. Typical use is
/// switching the background layer to another variant.
///
/// # Example
///
/// ```ignore
/// commands.trigger(ReplaceLocationImage {
///     entity: background,
///     image: asset_server.load("backgrounds/office_night.png"),
/// });
/// ```
#[derive(EntityEvent, Debug, Clone)]
pub struct ReplaceLocationImage {
    #[event_target]
    pub entity: Entity,
    pub image: Handle<Image>,
}

/// Observer applying [`ReplaceLocationImage`].
pub fn on_replace_location_image(
    trigger: On<ReplaceLocationImage>,
    mut objects: Query<(&mut Sprite, Option<&mut ImageBinding>, Option<&Name>)>,
) {
    let event = trigger.event();

    let Ok((mut sprite, binding, name)) = objects.get_mut(event.entity) else {
        info!("Could not change image on {:?}: it has no sprite", event.entity);
        return;
    };

    sprite.image = event.image.clone();
    if let Some(mut binding) = binding {
        binding.image = event.image.clone();
    }

    debug!("Changed image on {:?} ({:?})", event.entity, name);
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy_location_core::components::AddressMode;

    #[test]
    fn replaces_sprite_and_binding_image() {
        let mut world = World::new();
        world.add_observer(on_replace_location_image);

        let mut images = Assets::<Image>::default();
        let old_image = images.add(Image::default());
        let new_image = images.add(Image::default());
        let entity = world
            .spawn((
                Sprite {
                    image: old_image.clone(),
                    custom_size: Some(Vec2::new(4.0, 3.0)),
                    ..default()
                },
                ImageBinding {
                    image: old_image,
                    address_mode: AddressMode::Clamp,
                    pixel_size: None,
                    size: Some(Vec2::new(4.0, 3.0)),
                },
            ))
            .id();

        world.trigger(ReplaceLocationImage {
            entity,
            image: new_image.clone(),
        });

        let sprite = world.get::<Sprite>(entity).unwrap();
        assert_eq!(sprite.image, new_image);
        assert_eq!(sprite.custom_size, Some(Vec2::new(4.0, 3.0)));
        assert_eq!(world.get::<ImageBinding>(entity).unwrap().image, new_image);
    }

    #[test]
    fn missing_sprite_is_ignored() {
        let mut world = World::new();
        world.add_observer(on_replace_location_image);
        let entity = world.spawn_empty().id();

        world.trigger(ReplaceLocationImage {
            entity,
            image: Handle::default(),
        });

        assert!(world.get::<Sprite>(entity).is_none());
    }
}
