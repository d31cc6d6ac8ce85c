//! Configuration for sprite rendering.

use bevy::prelude::*;

/// Configuration for the sprite rendering plugin.
#[derive(Resource, Clone, Debug)]
pub struct SpriteRenderConfig {
    /// Tint applied to every location sprite (default: white)
    pub color: Color,

    /// Write each binding's address mode into its image sampler (default: true)
    pub apply_address_modes: bool,
}

impl Default for SpriteRenderConfig {
    fn default() -> Self {
        Self {
            color: Color::WHITE,
            apply_address_modes: true,
        }
    }
}
