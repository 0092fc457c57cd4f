use crate::node::{DEFAULT_NODE_EXTENT, NodeKind, NodeRecord, Position, Size};
use serde::{Deserialize, Serialize};

/// The nested `ext` block of a document node.
///
/// Holds geometry plus the INFO prompt text. Keeping `info` here is part of
/// the wire format and must not move.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NodeExt {
    pub pos_x: Option<f64>,
    pub pos_y: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub info: Option<String>,
}

/// One node in the portable document format.
///
/// Every field is optional on the wire; [`NodeRecord::from_document`]
/// resolves absent or `null` values to the document-import defaults.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentNode {
    pub uniq_id: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<NodeKind>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub tool: Option<String>,
    pub nexts: Option<Vec<String>>,
    pub true_next: Option<String>,
    pub false_next: Option<String>,
    pub ext: Option<NodeExt>,
}

impl NodeRecord {
    /// Flattens the record into its transport shape.
    pub fn to_document(&self) -> DocumentNode {
        DocumentNode {
            uniq_id: Some(self.id.clone()),
            kind: Some(self.kind),
            name: Some(self.name.clone()),
            description: Some(self.description.clone()),
            tool: Some(self.tool.clone()),
            nexts: Some(self.nexts.clone()),
            true_next: self.true_next.clone(),
            false_next: self.false_next.clone(),
            ext: Some(NodeExt {
                pos_x: Some(self.position.x),
                pos_y: Some(self.position.y),
                width: Some(self.size.width),
                height: Some(self.size.height),
                info: Some(self.info.clone()),
            }),
        }
    }

    /// Rebuilds a record from its transport shape. Never fails.
    pub fn from_document(doc: &DocumentNode) -> Self {
        let ext = doc.ext.clone().unwrap_or_default();

        Self {
            id: doc.uniq_id.clone().unwrap_or_default(),
            kind: doc.kind.unwrap_or(NodeKind::DOCUMENT_DEFAULT),
            name: doc.name.clone().unwrap_or_default(),
            description: doc.description.clone().unwrap_or_default(),
            tool: doc.tool.clone().unwrap_or_default(),
            info: ext.info.unwrap_or_default(),
            nexts: doc.nexts.clone().unwrap_or_default(),
            true_next: doc.true_next.clone(),
            false_next: doc.false_next.clone(),
            position: Position::new(ext.pos_x.unwrap_or(0.0), ext.pos_y.unwrap_or(0.0)),
            size: Size::new(
                ext.width.unwrap_or(DEFAULT_NODE_EXTENT),
                ext.height.unwrap_or(DEFAULT_NODE_EXTENT),
            ),
        }
    }
}

impl From<&NodeRecord> for DocumentNode {
    fn from(record: &NodeRecord) -> Self {
        record.to_document()
    }
}

impl From<&DocumentNode> for NodeRecord {
    fn from(doc: &DocumentNode) -> Self {
        NodeRecord::from_document(doc)
    }
}
