//! Shape conversion from zone outlines to `Avian2D` colliders.

use avian2d::prelude::*;
use bevy::prelude::*;

/// Segment indices closing an outline of `len` points into a loop.
pub fn closed_loop_indices(len: usize) -> Vec<[u32; 2]> {
    if len < 2 {
        return Vec::new();
    }

    (0..len)
        .map(|i| [i as u32, ((i + 1) % len) as u32])
        .collect()
}

/// Convert a zone outline to an `Avian2D` collider.
///
/// The outline becomes a closed polyline, so concave and self-intersecting outlines
/// are kept exactly as authored.
///
/// # Returns
///
/// - `Some(Collider)` if the outline has at least two points
/// - `None` otherwise
pub fn outline_to_collider(outline: &[Vec2]) -> Option<Collider> {
    if outline.len() < 2 {
        return None;
    }

    Some(Collider::polyline(
        outline.to_vec(),
        Some(closed_loop_indices(outline.len())),
    ))
}
