//! Pixel space to scene space conversion.
//!
//! Three frames are involved and must not be mixed:
//!
//! - **Pixel frame**: authored data, origin top-left, Y grows downward, pixel units.
//! - **World-bounds frame**: Y grows upward, scene units. Each polygon is flipped
//!   against its own bounds before it contributes to the overall location bounds.
//! - **Object-local frame**: scene units, no flip. Collider outlines and per-object
//!   bounds live here.

use bevy::prelude::*;

use crate::error::GenerateError;

/// Conversion factor from authoring pixels to scene units.
#[derive(Debug, Clone, Copy, PartialEq, Reflect)]
pub struct PixelScale(f32);

impl PixelScale {
    /// Create a converter, rejecting zero, negative and non-finite scales.
    pub fn new(pixels_to_units: f32) -> Result<Self, GenerateError> {
        if pixels_to_units.is_finite() && pixels_to_units > 0.0 {
            Ok(Self(pixels_to_units))
        } else {
            Err(GenerateError::InvalidScale(pixels_to_units))
        }
    }

    /// Pixel frame to world-bounds frame, flipping Y against `reference_y`.
    pub fn to_world(&self, point: Vec2, reference_y: f32) -> Vec2 {
        Vec2::new(point.x / self.0, (reference_y - point.y) / self.0)
    }

    /// Inverse of [`PixelScale::to_world`].
    pub fn from_world(&self, point: Vec2, reference_y: f32) -> Vec2 {
        Vec2::new(point.x * self.0, reference_y - point.y * self.0)
    }

    /// Pixel frame to object-local frame (scale only).
    pub fn to_local(&self, point: Vec2) -> Vec2 {
        point / self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_invalid_scales() {
        assert!(PixelScale::new(0.0).is_err());
        assert!(PixelScale::new(-2.0).is_err());
        assert!(PixelScale::new(f32::NAN).is_err());
        assert!(PixelScale::new(f32::INFINITY).is_err());
        assert_eq!(PixelScale::new(2.5), Ok(PixelScale(2.5)));
    }

    #[test]
    fn flips_and_scales_into_world_frame() {
        let scale = PixelScale::new(2.0).unwrap();
        assert_eq!(scale.to_world(Vec2::new(10.0, 0.0), 100.0), Vec2::new(5.0, 50.0));
        assert_eq!(scale.to_world(Vec2::new(10.0, 100.0), 100.0), Vec2::new(5.0, 0.0));
    }

    #[test]
    fn local_frame_does_not_flip() {
        let scale = PixelScale::new(4.0).unwrap();
        assert_eq!(scale.to_local(Vec2::new(8.0, 12.0)), Vec2::new(2.0, 3.0));
    }

    #[test]
    fn world_conversion_round_trips() {
        let scale = PixelScale::new(3.0).unwrap();
        let reference_y = 480.0;
        for point in [
            Vec2::new(0.0, 0.0),
            Vec2::new(123.5, 77.25),
            Vec2::new(-40.0, 600.0),
        ] {
            let world = scale.to_world(point, reference_y);
            let back = scale.from_world(world, reference_y);
            assert!(back.abs_diff_eq(point, 1e-4), "{point} became {back}");
        }
    }
}
