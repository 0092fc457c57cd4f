use super::NodeKind;
use serde::{Deserialize, Serialize};

/// Width and height used whenever a node arrives without geometry.
pub const DEFAULT_NODE_EXTENT: f64 = 200.0;

/// Canvas coordinates of a node's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Rendered extent of a node on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl Default for Size {
    fn default() -> Self {
        Self {
            width: DEFAULT_NODE_EXTENT,
            height: DEFAULT_NODE_EXTENT,
        }
    }
}

/// The canonical, encoding-independent representation of one workflow node.
///
/// Edges are not stored anywhere. They are derived from `nexts`, `true_next`
/// and `false_next` by [`crate::edge::reconstruct`].
#[derive(Debug, Clone, PartialEq)]
pub struct NodeRecord {
    pub id: String,
    pub kind: NodeKind,
    pub name: String,
    pub description: String,
    pub tool: String,
    pub info: String,
    pub nexts: Vec<String>,
    pub true_next: Option<String>,
    pub false_next: Option<String>,
    pub position: Position,
    pub size: Size,
}

impl NodeRecord {
    /// Creates a record with the document-import defaults for every field but `id`.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: NodeKind::DOCUMENT_DEFAULT,
            name: String::new(),
            description: String::new(),
            tool: String::new(),
            info: String::new(),
            nexts: Vec::new(),
            true_next: None,
            false_next: None,
            position: Position::default(),
            size: Size::default(),
        }
    }

    pub fn with_kind(mut self, kind: NodeKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_tool(mut self, tool: impl Into<String>) -> Self {
        self.tool = tool.into();
        self
    }

    pub fn with_info(mut self, info: impl Into<String>) -> Self {
        self.info = info.into();
        self
    }

    pub fn with_nexts<I, S>(mut self, nexts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.nexts = nexts.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_true_next(mut self, target: impl Into<String>) -> Self {
        self.true_next = Some(target.into());
        self
    }

    pub fn with_false_next(mut self, target: impl Into<String>) -> Self {
        self.false_next = Some(target.into());
        self
    }

    pub fn with_position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    pub fn with_size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    /// Every node id this record points at, plain successors first.
    pub fn successor_ids(&self) -> impl Iterator<Item = &str> {
        self.nexts
            .iter()
            .map(String::as_str)
            .chain(self.true_next.as_deref())
            .chain(self.false_next.as_deref())
    }

    /// Drops every adjacency entry that targets `id`. Returns whether anything changed.
    pub fn forget_successor(&mut self, id: &str) -> bool {
        let before = self.nexts.len();
        self.nexts.retain(|next| next != id);
        let mut changed = self.nexts.len() != before;

        if self.true_next.as_deref() == Some(id) {
            self.true_next = None;
            changed = true;
        }
        if self.false_next.as_deref() == Some(id) {
            self.false_next = None;
            changed = true;
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_record_uses_document_defaults() {
        let record = NodeRecord::new("n1");
        assert_eq!(record.kind, NodeKind::Start);
        assert_eq!(record.size, Size::new(200.0, 200.0));
        assert_eq!(record.position, Position::new(0.0, 0.0));
        assert!(record.nexts.is_empty());
        assert!(record.true_next.is_none() && record.false_next.is_none());
    }

    #[test]
    fn successor_ids_lists_plain_then_branches() {
        let record = NodeRecord::new("a")
            .with_nexts(["b", "c"])
            .with_true_next("t")
            .with_false_next("f");
        let ids: Vec<_> = record.successor_ids().collect();
        assert_eq!(ids, vec!["b", "c", "t", "f"]);
    }

    #[test]
    fn forget_successor_clears_every_slot() {
        let mut record = NodeRecord::new("a")
            .with_nexts(["x", "b", "x"])
            .with_true_next("x");
        assert!(record.forget_successor("x"));
        assert_eq!(record.nexts, vec!["b".to_string()]);
        assert!(record.true_next.is_none());
        assert!(!record.forget_successor("missing"));
    }
}
