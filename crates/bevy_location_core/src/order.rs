//! Sibling ordering for visual stacking.

use bevy_location_assets::prelude::{LocationAsset, NodeId};

/// Order siblings by z-index, lowest first.
///
/// Only sorts when every sibling carries a z-index. With partial z-data the authored
/// order is returned untouched. The sort is stable, so equal z-indices keep their
/// authored order.
pub fn sort_siblings(location: &LocationAsset, siblings: &[NodeId]) -> Vec<NodeId> {
    let mut keyed = Vec::with_capacity(siblings.len());
    for &id in siblings {
        let Some(z) = location.node(id).z_index else {
            return siblings.to_vec();
        };
        keyed.push((z, id));
    }

    keyed.sort_by(|(a, _), (b, _)| a.total_cmp(b));
    keyed.into_iter().map(|(_, id)| id).collect()
}
