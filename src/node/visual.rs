use super::{DEFAULT_NODE_EXTENT, NodeKind, NodeRecord, Position, Size};
use serde::{Deserialize, Serialize};

/// Display kind the editor registers its workflow node component under.
pub const VISUAL_NODE_TYPE: &str = "textUpdater";

fn default_visual_type() -> String {
    VISUAL_NODE_TYPE.to_string()
}

/// Editor-facing field block carried by every visual node.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VisualNodeData {
    pub name: Option<String>,
    pub description: Option<String>,
    pub nexts: Option<Vec<String>>,
    #[serde(rename = "type")]
    pub kind: Option<NodeKind>,
    pub tool: Option<String>,
    pub info: Option<String>,
    pub true_next: Option<String>,
    pub false_next: Option<String>,
    pub width: Option<f64>,
    pub height: Option<f64>,
}

/// A node as the canvas sees it: identity, geometry and a data block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisualNode {
    pub id: String,
    #[serde(rename = "type", default = "default_visual_type")]
    pub display_type: String,
    #[serde(default)]
    pub position: Position,
    #[serde(default)]
    pub width: Option<f64>,
    #[serde(default)]
    pub height: Option<f64>,
    #[serde(default)]
    pub data: VisualNodeData,
}

/// The canvas writes cleared inputs back as empty strings.
fn non_empty(value: &Option<String>) -> Option<String> {
    value.as_ref().filter(|s| !s.is_empty()).cloned()
}

impl NodeRecord {
    /// Builds the canvas representation, promoting geometry to the top level.
    pub fn to_visual(&self) -> VisualNode {
        VisualNode {
            id: self.id.clone(),
            display_type: default_visual_type(),
            position: self.position,
            width: Some(self.size.width),
            height: Some(self.size.height),
            data: VisualNodeData {
                name: Some(self.name.clone()),
                description: Some(self.description.clone()),
                nexts: Some(self.nexts.clone()),
                kind: Some(self.kind),
                tool: Some(self.tool.clone()),
                info: Some(self.info.clone()),
                true_next: self.true_next.clone(),
                false_next: self.false_next.clone(),
                width: Some(self.size.width),
                height: Some(self.size.height),
            },
        }
    }

    /// Reads a canvas node back. A data block without a kind resolves to
    /// [`NodeKind::VISUAL_DEFAULT`].
    pub fn from_visual(node: &VisualNode) -> Self {
        let data = &node.data;
        let width = node.width.or(data.width).unwrap_or(DEFAULT_NODE_EXTENT);
        let height = node.height.or(data.height).unwrap_or(DEFAULT_NODE_EXTENT);

        Self {
            id: node.id.clone(),
            kind: data.kind.unwrap_or(NodeKind::VISUAL_DEFAULT),
            name: data.name.clone().unwrap_or_default(),
            description: data.description.clone().unwrap_or_default(),
            tool: data.tool.clone().unwrap_or_default(),
            info: data.info.clone().unwrap_or_default(),
            nexts: data.nexts.clone().unwrap_or_default(),
            true_next: non_empty(&data.true_next),
            false_next: non_empty(&data.false_next),
            position: node.position,
            size: Size::new(width, height),
        }
    }
}

impl From<&NodeRecord> for VisualNode {
    fn from(record: &NodeRecord) -> Self {
        record.to_visual()
    }
}

impl From<&VisualNode> for NodeRecord {
    fn from(node: &VisualNode) -> Self {
        NodeRecord::from_visual(node)
    }
}
