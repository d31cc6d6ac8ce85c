//! Image sampler addressing.

use bevy::image::{ImageAddressMode, ImageSampler, ImageSamplerDescriptor};
use bevy::prelude::*;
use bevy_location_core::components::AddressMode;

pub fn image_address_mode(mode: AddressMode) -> ImageAddressMode {
    match mode {
        AddressMode::Clamp => ImageAddressMode::ClampToEdge,
        AddressMode::Repeat => ImageAddressMode::Repeat,
        AddressMode::Mirror => ImageAddressMode::MirrorRepeat,
    }
}

/// Set the U and V addressing of an image's sampler, keeping its other settings.
///
/// Returns `false` if the sampler already used that mode.
pub fn set_address_mode(image: &mut Image, mode: AddressMode) -> bool {
    let address_mode = image_address_mode(mode);

    let mut descriptor = match &image.sampler {
        ImageSampler::Descriptor(descriptor) => descriptor.clone(),
        ImageSampler::Default => ImageSamplerDescriptor::default(),
    };

    if descriptor.address_mode_u == address_mode && descriptor.address_mode_v == address_mode {
        return false;
    }

    descriptor.address_mode_u = address_mode;
    descriptor.address_mode_v = address_mode;
    image.sampler = ImageSampler::Descriptor(descriptor);
    true
}

#[cfg(test)]
mod tests {
    use bevy::image::ImageFilterMode;

    use super::*;

    fn descriptor(image: &Image) -> &ImageSamplerDescriptor {
        match &image.sampler {
            ImageSampler::Descriptor(descriptor) => descriptor,
            ImageSampler::Default => panic!("sampler was not set"),
        }
    }

    #[test]
    fn repeat_sets_both_axes() {
        let mut image = Image::default();
        assert!(set_address_mode(&mut image, AddressMode::Repeat));

        let descriptor = descriptor(&image);
        assert_eq!(descriptor.address_mode_u, ImageAddressMode::Repeat);
        assert_eq!(descriptor.address_mode_v, ImageAddressMode::Repeat);
    }

    #[test]
    fn keeps_existing_filtering() {
        let mut image = Image::default();
        image.sampler = ImageSampler::nearest();
        set_address_mode(&mut image, AddressMode::Mirror);

        let descriptor = descriptor(&image);
        assert_eq!(descriptor.mag_filter, ImageFilterMode::Nearest);
        assert_eq!(descriptor.address_mode_u, ImageAddressMode::MirrorRepeat);
    }

    #[test]
    fn unchanged_mode_reports_false() {
        let mut image = Image::default();
        assert!(set_address_mode(&mut image, AddressMode::Repeat));
        assert!(!set_address_mode(&mut image, AddressMode::Repeat));
    }
}
