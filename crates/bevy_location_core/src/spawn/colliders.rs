//! Polygon collider generation for zones.

use bevy::prelude::*;

use crate::components::PolygonCollider;

/// Build a custom polygon collider from a zone outline.
///
/// The outline must already be in object-local scene units. Points are kept exactly as
/// given: one polygon, no convex decomposition, no winding or self-intersection fixes.
pub fn build_collider(outline: &[Vec2]) -> PolygonCollider {
    PolygonCollider {
        points: outline.to_vec(),
    }
}

impl PolygonCollider {
    /// Fewer than three points enclose no area.
    pub fn is_degenerate(&self) -> bool {
        self.points.len() < 3
    }
}
