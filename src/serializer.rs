//! Conversion between node lists and the portable document format.
//!
//! The save path is [`serialize`] (or [`serialize_visual`] straight from
//! canvas nodes). The load path is [`deserialize`]: nodes are decoded first,
//! then the edge set is rebuilt from their adjacency fields, and finally the
//! id counter is restored.

use crate::document::Document;
use crate::edge::{DanglingReference, EdgeRecord, VisualEdge, dangling_references, reconstruct};
use crate::error::DecodeError;
use crate::node::{NodeRecord, VisualNode};
use serde_json::Value;

/// Everything the editor needs after loading a document.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedGraph {
    pub nodes: Vec<NodeRecord>,
    pub edges: Vec<EdgeRecord>,
    pub node_counter: u64,
    /// Edges whose target is missing from `nodes`. The edges themselves are still in `edges`.
    pub dangling: Vec<DanglingReference>,
}

impl LoadedGraph {
    /// Converts the loaded graph into the shapes the canvas consumes.
    pub fn into_visual(self) -> (Vec<VisualNode>, Vec<VisualEdge>) {
        let nodes = self.nodes.iter().map(NodeRecord::to_visual).collect();
        let edges = self.edges.iter().map(EdgeRecord::to_visual).collect();
        (nodes, edges)
    }
}

/// Assembles a document from a node list and the session's counter.
pub fn serialize(nodes: &[NodeRecord], node_counter: u64) -> Document {
    tracing::debug!(nodes = nodes.len(), node_counter, "serializing document");
    Document::new(nodes.iter().map(NodeRecord::to_document).collect(), node_counter)
}

/// Assembles a document directly from canvas nodes.
pub fn serialize_visual(nodes: &[VisualNode], node_counter: u64) -> Document {
    let records: Vec<NodeRecord> = nodes.iter().map(NodeRecord::from_visual).collect();
    serialize(&records, node_counter)
}

/// Decodes a JSON value into nodes, derived edges and the restored counter.
pub fn deserialize(value: Value) -> Result<LoadedGraph, DecodeError> {
    let document = Document::from_value(value)?;
    Ok(load_document(&document))
}

/// Like [`deserialize`], starting from JSON text.
pub fn deserialize_str(text: &str) -> Result<LoadedGraph, DecodeError> {
    let document = Document::from_json(text)?;
    Ok(load_document(&document))
}

/// Rebuilds the graph from an already decoded document. Never fails.
pub fn load_document(document: &Document) -> LoadedGraph {
    let nodes: Vec<NodeRecord> = document
        .nodes
        .iter()
        .map(NodeRecord::from_document)
        .collect();

    // Edge targets resolve against the complete node set.
    let edges = reconstruct(&nodes);
    let dangling = dangling_references(&nodes, &edges);
    for reference in &dangling {
        tracing::warn!(
            from = %reference.source,
            to = %reference.target,
            handle = %reference.handle,
            "dangling reference"
        );
    }

    tracing::debug!(
        nodes = nodes.len(),
        edges = edges.len(),
        node_counter = document.node_counter,
        "loaded document"
    );

    LoadedGraph {
        nodes,
        edges,
        node_counter: document.node_counter,
        dangling,
    }
}
