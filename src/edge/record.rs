use serde::{Deserialize, Serialize};
use std::fmt;

/// Discriminates an unconditional link from a conditional branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Handle {
    Plain,
    True,
    False,
}

impl Handle {
    /// Id of the source handle the editor attaches this kind of edge to.
    pub fn source_handle_id(&self) -> &'static str {
        match self {
            Handle::Plain => "a",
            Handle::True => "true",
            Handle::False => "false",
        }
    }

    /// Maps an editor source-handle id back. Anything other than a branch id is plain.
    pub fn from_source_handle_id(id: Option<&str>) -> Self {
        match id {
            Some("true") => Handle::True,
            Some("false") => Handle::False,
            _ => Handle::Plain,
        }
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Handle::Plain => f.write_str("plain"),
            Handle::True => f.write_str("true"),
            Handle::False => f.write_str("false"),
        }
    }
}

/// A derived connection between two nodes. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EdgeRecord {
    pub source: String,
    pub target: String,
    pub handle: Handle,
}

impl EdgeRecord {
    pub fn new(source: impl Into<String>, target: impl Into<String>, handle: Handle) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            handle,
        }
    }

    pub fn plain(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self::new(source, target, Handle::Plain)
    }

    /// Builds the canvas edge shape.
    pub fn to_visual(&self) -> VisualEdge {
        let source_handle = self.handle.source_handle_id();
        VisualEdge {
            id: format!("{}-{}-{}", self.source, source_handle, self.target),
            source: self.source.clone(),
            target: self.target.clone(),
            source_handle: source_handle.to_string(),
        }
    }
}

/// An edge as the canvas receives it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisualEdge {
    pub id: String,
    pub source: String,
    pub target: String,
    #[serde(rename = "sourceHandle")]
    pub source_handle: String,
}

impl From<&VisualEdge> for EdgeRecord {
    fn from(edge: &VisualEdge) -> Self {
        EdgeRecord::new(
            edge.source.clone(),
            edge.target.clone(),
            Handle::from_source_handle_id(Some(&edge.source_handle)),
        )
    }
}
