//! Components attached to generated objects.

use bevy::prelude::*;

/// How a source node was classified.
///
/// Exactly one kind drives placement and collider generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect)]
pub enum NodeKind {
    /// Interactive polygon: anchored by its outline, gets a `PolygonCollider`
    Zone,
    /// Carries an image reference: anchored by its origin, never collides
    Image,
    /// Plain grouping node
    Container,
}

/// Marker + back-reference on every generated object.
#[derive(Component, Debug, Clone, PartialEq, Reflect)]
#[reflect(Component)]
#[require(Transform, Visibility)]
pub struct LocationObject {
    /// Id of the source node in the content database
    pub source_id: String,
    pub kind: NodeKind,
}

/// Monotonic draw/interaction order. Also used as the object's translation Z.
#[derive(Component, Debug, Clone, Copy, PartialEq, PartialOrd, Reflect)]
#[reflect(Component)]
pub struct StackingDepth(pub f32);

/// Absolute position in the location frame.
///
/// Source positions are absolute, so the object's `Transform` holds this value
/// relative to its parent object.
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
pub struct LocationPlacement(pub Vec3);

/// Texture addressing used when the image is sampled outside 0..1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Reflect)]
pub enum AddressMode {
    #[default]
    Clamp,
    Repeat,
    Mirror,
}

/// Image bound to a generated object.
///
/// Layer 3 rendering plugins turn this into a sprite, anchored bottom-left.
#[derive(Component, Debug, Clone, Reflect)]
#[reflect(Component)]
pub struct ImageBinding {
    pub image: Handle<Image>,
    pub address_mode: AddressMode,
    /// Raw image dimensions in pixels, if known
    pub pixel_size: Option<Vec2>,
    /// Display size in scene units, if known
    pub size: Option<Vec2>,
}

/// Custom polygon collision shape in object-local scene units.
///
/// A single polygon, points in authored order. Self-intersecting or oddly wound
/// outlines are passed through as-is.
#[derive(Component, Debug, Clone, PartialEq, Reflect)]
#[reflect(Component)]
pub struct PolygonCollider {
    pub points: Vec<Vec2>,
}

/// Collision is disabled for this object (outline used for layout only).
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct CollisionDisabled;

/// The location's designated backdrop image.
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct BackgroundLayer;
