//! Node classification: labels, zone detection, image detection.

use std::collections::HashSet;

use bevy::prelude::*;
use bevy_location_assets::prelude::{AssetCategory, LocationAsset, NodeId, SourceNode};

use crate::behaviors::{BehaviorFactory, TypeBehaviorMap};
use crate::components::NodeKind;

/// Result of inspecting one source node.
#[derive(Debug, Clone)]
pub struct Classification<'a> {
    pub label: &'a str,
    pub kind: NodeKind,
    /// Image asset reference, kept only when it names an image-category asset
    pub image_asset: Option<&'a str>,
    /// Behaviors to attach, in mapping order
    pub behaviors: Vec<&'a BehaviorFactory>,
}

/// Display name if present, technical name otherwise.
fn own_label(node: &SourceNode) -> &str {
    node.display_name.as_deref().unwrap_or(&node.technical_name)
}

/// Resolve the label of a node, following alias links to their final target.
///
/// A link cycle is reported and resolution stops at the last node before the cycle
/// closes.
pub fn resolve_label(location: &LocationAsset, id: NodeId) -> &str {
    let mut visited = HashSet::from([id]);
    let mut current = location.node(id);

    while let Some(target) = current.target {
        if !visited.insert(target) {
            warn!(
                "Alias cycle detected at node '{}' while resolving the label of '{}'",
                current.id,
                location.node(id).id
            );
            break;
        }
        current = location.node(target);
    }

    own_label(current)
}

/// The node's image reference, if it points at an image-category asset table entry.
///
/// Whether the image itself loaded doesn't matter here.
pub fn image_reference<'a>(location: &'a LocationAsset, node: &'a SourceNode) -> Option<&'a str> {
    let asset_id = node.image_asset.as_deref()?;
    match location.asset(asset_id) {
        Some(entry) if entry.category == AssetCategory::Image => Some(asset_id),
        Some(entry) => {
            debug!(
                "Node '{}' references {:?} asset '{}', not an image",
                node.id, entry.category, asset_id
            );
            None
        }
        None => {
            warn!("Node '{}' references unknown asset '{}'", node.id, asset_id);
            None
        }
    }
}

/// Classify a node against the behavior map.
///
/// A node is a zone if any of its matched behaviors is zone-capable, even when other
/// matched behaviors are not. Otherwise it is an image if it references an image-category
/// asset, and a plain container if it does neither.
pub fn classify<'a>(
    location: &'a LocationAsset,
    id: NodeId,
    behaviors: &'a TypeBehaviorMap,
) -> Classification<'a> {
    let node = location.node(id);
    let matched: Vec<&BehaviorFactory> = behaviors.matching(node).collect();

    let zone_capable = matched.iter().filter(|b| b.interactive_zone).count();
    if zone_capable > 0 && zone_capable < matched.len() {
        debug!(
            "Node '{}' matches behaviors that disagree on zone status, treating it as a zone",
            node.id
        );
    }

    let image_asset = image_reference(location, node);
    let kind = if zone_capable > 0 {
        NodeKind::Zone
    } else if image_asset.is_some() {
        NodeKind::Image
    } else {
        NodeKind::Container
    };

    Classification {
        label: resolve_label(location, id),
        kind,
        image_asset,
        behaviors: matched,
    }
}
