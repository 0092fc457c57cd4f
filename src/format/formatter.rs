use crate::edge::{EdgeRecord, Handle};
use crate::node::NodeRecord;
use itertools::Itertools;

/// Formats graphs into human-readable summaries.
pub struct GraphFormatter;

impl GraphFormatter {
    /// Renders edges one per line, labelling conditional branches.
    pub fn format_edges(edges: &[EdgeRecord]) -> String {
        edges.iter().map(Self::format_edge).join("\n")
    }

    pub fn format_edge(edge: &EdgeRecord) -> String {
        match edge.handle {
            Handle::Plain => format!("{} -> {}", edge.source, edge.target),
            branch => format!("{} -[{}]-> {}", edge.source, branch, edge.target),
        }
    }

    /// One line per node: id, kind and, when present, the quoted name.
    pub fn format_nodes(nodes: &[NodeRecord]) -> String {
        nodes
            .iter()
            .map(|node| {
                if node.name.is_empty() {
                    format!("{} [{}]", node.id, node.kind)
                } else {
                    format!("{} [{}] \"{}\"", node.id, node.kind, node.name)
                }
            })
            .join("\n")
    }
}
