use serde::{Deserialize, Serialize};
use std::fmt;

/// The role a node plays inside a workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum NodeKind {
    Start,
    Step,
    Tool,
    Condition,
    Info,
}

impl NodeKind {
    /// Kind assigned to a record built directly or imported from a document without a `type`.
    pub const DOCUMENT_DEFAULT: NodeKind = NodeKind::Start;

    /// Kind assigned to an editor node whose data block carries no `type`.
    pub const VISUAL_DEFAULT: NodeKind = NodeKind::Step;

    pub const ALL: [NodeKind; 5] = [
        NodeKind::Start,
        NodeKind::Step,
        NodeKind::Tool,
        NodeKind::Condition,
        NodeKind::Info,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Start => "START",
            NodeKind::Step => "STEP",
            NodeKind::Tool => "TOOL",
            NodeKind::Condition => "CONDITION",
            NodeKind::Info => "INFO",
        }
    }

    /// Whether the editor asks for a name on nodes of this kind.
    pub fn requires_name(&self) -> bool {
        matches!(self, NodeKind::Step | NodeKind::Condition | NodeKind::Info)
    }

    /// Whether this kind is expected to branch through `true_next`/`false_next`.
    pub fn is_branching(&self) -> bool {
        matches!(self, NodeKind::Condition)
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
