use std::collections::HashMap;

use bevy::prelude::*;
use serde::Deserialize;
use thiserror::Error;

/// Index of a node inside a [`LocationAsset`].
///
/// Only valid for the asset that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Reflect)]
pub struct NodeId(pub usize);

/// Category of an asset in the content database's asset table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Reflect)]
pub enum AssetCategory {
    Image,
    Audio,
    Video,
    Document,
    #[serde(other)]
    Misc,
}

/// Entry of the location's asset table.
#[derive(Debug, Clone)]
pub struct AssetEntry {
    pub category: AssetCategory,
    /// Asset-root-relative path (already resolved by the loader)
    pub path: Option<String>,
    /// Declared pixel dimensions, if the content database exported them
    pub size: Option<UVec2>,
    /// Loaded image (only for `AssetCategory::Image` entries with a path)
    pub image: Option<Handle<Image>>,
}

/// One node of the authored location tree.
///
/// Capabilities are optional: a plain folder has no vertices, no transform and no image.
#[derive(Debug, Clone)]
pub struct SourceNode {
    /// Stable identifier from the content database
    pub id: String,
    pub technical_name: String,
    pub display_name: Option<String>,
    /// Concrete type of the node, used for behavior lookup
    pub type_tag: String,
    /// Types the concrete type derives from, nearest first
    pub base_types: Vec<String>,
    /// Outline in pixel space (Y grows downward). Order defines the outline.
    pub vertices: Option<Vec<Vec2>>,
    /// Translation in pixel space
    pub translation: Option<Vec2>,
    /// Stacking hint among siblings
    pub z_index: Option<f32>,
    /// Alias target: the node this one is a link to
    pub target: Option<NodeId>,
    /// Key into [`LocationAsset::assets`]
    pub image_asset: Option<String>,
    pub children: Vec<NodeId>,
}

impl SourceNode {
    /// Whether this node is of type `tag`, directly or through inheritance.
    pub fn is_a(&self, tag: &str) -> bool {
        self.type_tag == tag || self.base_types.iter().any(|base| base == tag)
    }
}

/// A location loaded from the content database, flattened into an arena.
///
/// Nodes are stored in pre-order, so the root is always the first node.
#[derive(Asset, TypePath, Debug, Clone)]
pub struct LocationAsset {
    root: NodeId,
    nodes: Vec<SourceNode>,
    index: HashMap<String, NodeId>,
    /// Asset table, keyed by asset id
    pub assets: HashMap<String, AssetEntry>,
}

#[derive(Debug, Error)]
pub enum LocationError {
    #[error("duplicate node id `{0}`")]
    DuplicateId(String),

    #[error("invalid location file: {0}")]
    Json(#[from] serde_json::Error),
}

impl LocationAsset {
    /// Flatten a parsed location file.
    ///
    /// Alias targets that name an unknown node are dropped with a warning.
    pub fn from_file(file: LocationFile) -> Result<Self, LocationError> {
        let mut nodes = Vec::new();
        let mut index = HashMap::new();
        let mut pending_targets = Vec::new();

        let root = flatten_node(file.root, &mut nodes, &mut index, &mut pending_targets)?;

        for (node, target) in pending_targets {
            match index.get(&target) {
                Some(&target_id) => nodes[node.0].target = Some(target_id),
                None => warn!(
                    "Node '{}' links to unknown node '{}', ignoring the link",
                    nodes[node.0].id, target
                ),
            }
        }

        let assets = file
            .assets
            .into_iter()
            .map(|(id, asset)| {
                (
                    id,
                    AssetEntry {
                        category: asset.category,
                        path: asset.path,
                        size: asset.size.map(UVec2::from),
                        image: None,
                    },
                )
            })
            .collect();

        Ok(Self {
            root,
            nodes,
            index,
            assets,
        })
    }

    /// Parse and flatten a location from JSON bytes.
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self, LocationError> {
        let file: LocationFile = serde_json::from_slice(bytes)?;
        Self::from_file(file)
    }

    /// The location node itself.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Get a node by arena index.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not produced by this asset.
    pub fn node(&self, id: NodeId) -> &SourceNode {
        &self.nodes[id.0]
    }

    /// Look up a node by its content database id.
    pub fn find(&self, source_id: &str) -> Option<NodeId> {
        self.index.get(source_id).copied()
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.node(id).children
    }

    /// All nodes below `id` (excluding `id`), in pre-order.
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.children(id).iter().rev().copied().collect();
        while let Some(next) = stack.pop() {
            out.push(next);
            stack.extend(self.children(next).iter().rev().copied());
        }
        out
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn asset(&self, asset_id: &str) -> Option<&AssetEntry> {
        self.assets.get(asset_id)
    }

    /// Attach a loaded image to an asset table entry.
    ///
    /// Returns `false` if the entry doesn't exist.
    pub fn set_image_handle(&mut self, asset_id: &str, handle: Handle<Image>) -> bool {
        match self.assets.get_mut(asset_id) {
            Some(entry) => {
                entry.image = Some(handle);
                true
            }
            None => false,
        }
    }
}

fn flatten_node(
    node: NodeFile,
    nodes: &mut Vec<SourceNode>,
    index: &mut HashMap<String, NodeId>,
    pending_targets: &mut Vec<(NodeId, String)>,
) -> Result<NodeId, LocationError> {
    let NodeFile {
        id,
        technical_name,
        display_name,
        type_tag,
        base_types,
        vertices,
        translation,
        z_index,
        target,
        image_asset,
        children,
    } = node;

    let node_id = NodeId(nodes.len());
    if index.insert(id.clone(), node_id).is_some() {
        return Err(LocationError::DuplicateId(id));
    }
    if let Some(target) = target {
        pending_targets.push((node_id, target));
    }

    nodes.push(SourceNode {
        id,
        technical_name,
        display_name,
        type_tag,
        base_types,
        vertices: vertices.map(|points| points.into_iter().map(Vec2::from).collect()),
        translation: translation.map(Vec2::from),
        z_index,
        target: None,
        image_asset,
        children: Vec::new(),
    });

    let mut child_ids = Vec::with_capacity(children.len());
    for child in children {
        child_ids.push(flatten_node(child, nodes, index, pending_targets)?);
    }
    nodes[node_id.0].children = child_ids;

    Ok(node_id)
}

// ===== FILE FORMAT =====

/// Raw location file as exported from the content database.
#[derive(Debug, Clone, Deserialize)]
pub struct LocationFile {
    pub root: NodeFile,
    #[serde(default)]
    pub assets: HashMap<String, AssetFile>,
}

/// Raw node, children nested inline.
#[derive(Debug, Clone, Deserialize)]
pub struct NodeFile {
    pub id: String,
    pub technical_name: String,
    pub display_name: Option<String>,
    #[serde(rename = "type")]
    pub type_tag: String,
    #[serde(default)]
    pub base_types: Vec<String>,
    pub vertices: Option<Vec<[f32; 2]>>,
    pub translation: Option<[f32; 2]>,
    pub z_index: Option<f32>,
    /// Id of the node this one links to
    pub target: Option<String>,
    pub image_asset: Option<String>,
    #[serde(default)]
    pub children: Vec<NodeFile>,
}

/// Raw asset table entry.
#[derive(Debug, Clone, Deserialize)]
pub struct AssetFile {
    pub category: AssetCategory,
    pub path: Option<String>,
    pub size: Option<[u32; 2]>,
}
