//! Debug visualization for generated locations.

use bevy::prelude::*;

use crate::components::{LocationBounds, PolygonCollider};

/// Resource to enable location debug visualization.
///
/// While it exists, each location's overall bounds and every zone outline are drawn.
/// `LocationCoreConfig::debug_bounds` installs it at startup; remove it to pause drawing.
///
/// # Example
///
/// ```rust,no_run
/// # use bevy::prelude::*;
/// # use bevy_location_core::debug::DebugLocationBounds;
/// fn toggle_debug(mut commands: Commands, debug: Option<Res<DebugLocationBounds>>) {
///     if debug.is_some() {
///         commands.remove_resource::<DebugLocationBounds>();
///     } else {
///         commands.insert_resource(DebugLocationBounds::default());
///     }
/// }
/// ```
#[derive(Resource, Debug, Clone)]
pub struct DebugLocationBounds {
    /// Color for the location bounds rectangle
    pub bounds_color: Color,
    /// Color for zone outlines
    pub zone_color: Color,
}

impl Default for DebugLocationBounds {
    fn default() -> Self {
        Self {
            bounds_color: Color::srgba(0.0, 1.0, 0.0, 0.8),
            zone_color: Color::srgba(1.0, 1.0, 0.0, 0.8),
        }
    }
}

/// Draw each location's bounds and its zone outlines.
///
/// Only runs when `DebugLocationBounds` resource is present.
pub fn draw_location_debug(
    config: Res<DebugLocationBounds>,
    locations: Query<(&LocationBounds, &GlobalTransform)>,
    zones: Query<(&PolygonCollider, &GlobalTransform)>,
    mut gizmos: Gizmos,
) {
    for (LocationBounds(bounds), global_transform) in &locations {
        if bounds.is_empty() {
            continue;
        }

        let origin = global_transform.translation().truncate();
        let min = origin + bounds.min();
        let max = origin + bounds.max();

        gizmos.rect_2d(
            Isometry2d::from_translation((min + max) / 2.0),
            max - min,
            config.bounds_color,
        );
    }

    for (collider, global_transform) in &zones {
        if collider.points.len() < 2 {
            continue;
        }

        let origin = global_transform.translation().truncate();
        gizmos.linestrip_2d(
            collider
                .points
                .iter()
                .chain(collider.points.first())
                .map(|point| origin + *point),
            config.zone_color,
        );
    }
}
