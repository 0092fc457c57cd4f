//! Editor-side state: the node list plus the counter used to mint node ids.

use crate::document::{DEFAULT_NODE_COUNTER, Document};
use crate::edge::{EdgeRecord, Handle, reconstruct};
use crate::error::SessionError;
use crate::node::{NodeKind, NodeRecord, Position};
use crate::serializer::{LoadedGraph, load_document, serialize};

/// Owns a workflow while it is being edited.
///
/// Edges are never stored here; [`EditorSession::edges`] derives them on every call.
#[derive(Debug, Clone, PartialEq)]
pub struct EditorSession {
    nodes: Vec<NodeRecord>,
    node_counter: u64,
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorSession {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            node_counter: DEFAULT_NODE_COUNTER,
        }
    }

    pub fn from_loaded(graph: LoadedGraph) -> Self {
        Self {
            nodes: graph.nodes,
            node_counter: graph.node_counter,
        }
    }

    pub fn from_document(document: &Document) -> Self {
        Self::from_loaded(load_document(document))
    }

    pub fn nodes(&self) -> &[NodeRecord] {
        &self.nodes
    }

    pub fn node_counter(&self) -> u64 {
        self.node_counter
    }

    pub fn node(&self, id: &str) -> Option<&NodeRecord> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn node_mut(&mut self, id: &str) -> Option<&mut NodeRecord> {
        self.nodes.iter_mut().find(|n| n.id == id)
    }

    pub fn edges(&self) -> Vec<EdgeRecord> {
        reconstruct(&self.nodes)
    }

    pub fn to_document(&self) -> Document {
        serialize(&self.nodes, self.node_counter)
    }

    /// Adds a node with a freshly minted id and returns it.
    ///
    /// Ids are the decimal value of the counter. Values already taken by a
    /// loaded node are skipped so the new id is always unique. Fails once the
    /// counter cannot be advanced any further.
    pub fn add_node(
        &mut self,
        kind: NodeKind,
        position: Position,
    ) -> Result<&NodeRecord, SessionError> {
        let id = self.mint_id()?;
        tracing::debug!(%id, %kind, "adding node");
        self.nodes
            .push(NodeRecord::new(id).with_kind(kind).with_position(position));
        Ok(&self.nodes[self.nodes.len() - 1])
    }

    fn mint_id(&mut self) -> Result<String, SessionError> {
        loop {
            let next = self
                .node_counter
                .checked_add(1)
                .ok_or(SessionError::CounterExhausted(self.node_counter))?;
            let candidate = self.node_counter.to_string();
            self.node_counter = next;
            if self.node(&candidate).is_none() {
                return Ok(candidate);
            }
        }
    }

    /// Records a connection in the source node's adjacency fields.
    ///
    /// Returns `Ok(None)` when the exact edge already exists. A branch
    /// handle replaces any previous target on that branch.
    pub fn connect(
        &mut self,
        source: &str,
        target: &str,
        handle: Handle,
    ) -> Result<Option<EdgeRecord>, SessionError> {
        if self.node(target).is_none() {
            return Err(SessionError::NodeNotFound(target.to_string()));
        }
        let node = self
            .node_mut(source)
            .ok_or_else(|| SessionError::NodeNotFound(source.to_string()))?;

        let slot = match handle {
            Handle::Plain => {
                if node.nexts.iter().any(|next| next == target) {
                    return Ok(None);
                }
                node.nexts.push(target.to_string());
                return Ok(Some(EdgeRecord::plain(source, target)));
            }
            Handle::True => &mut node.true_next,
            Handle::False => &mut node.false_next,
        };

        if slot.as_deref() == Some(target) {
            return Ok(None);
        }
        if let Some(previous) = slot.replace(target.to_string()) {
            tracing::debug!(from = source, %previous, %handle, "replacing branch target");
        }
        Ok(Some(EdgeRecord::new(source, target, handle)))
    }

    /// Removes a connection. Returns whether the edge existed.
    pub fn disconnect(&mut self, edge: &EdgeRecord) -> bool {
        let Some(node) = self.node_mut(&edge.source) else {
            return false;
        };

        match edge.handle {
            Handle::Plain => {
                let before = node.nexts.len();
                node.nexts.retain(|next| *next != edge.target);
                node.nexts.len() != before
            }
            Handle::True => take_if_target(&mut node.true_next, &edge.target),
            Handle::False => take_if_target(&mut node.false_next, &edge.target),
        }
    }

    /// Removes a node and every reference other nodes hold to it.
    pub fn remove_node(&mut self, id: &str) -> Option<NodeRecord> {
        let index = self.nodes.iter().position(|n| n.id == id)?;
        let removed = self.nodes.remove(index);
        for node in &mut self.nodes {
            node.forget_successor(id);
        }
        tracing::debug!(%id, "removed node");
        Some(removed)
    }
}

fn take_if_target(slot: &mut Option<String>, target: &str) -> bool {
    if slot.as_deref() == Some(target) {
        *slot = None;
        true
    } else {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minted_ids_follow_the_counter() {
        let mut session = EditorSession::new();
        let first = session
            .add_node(NodeKind::Start, Position::default())
            .unwrap()
            .id
            .clone();
        let second = session
            .add_node(NodeKind::Step, Position::new(10.0, 0.0))
            .unwrap()
            .id
            .clone();

        assert_eq!(first, "1");
        assert_eq!(second, "2");
        assert_eq!(session.node_counter(), 3);
    }

    #[test]
    fn minting_skips_ids_already_in_use() {
        let document = Document::new(vec![NodeRecord::new("1").to_document()], 1);
        let mut session = EditorSession::from_document(&document);

        let id = session
            .add_node(NodeKind::Step, Position::default())
            .unwrap()
            .id
            .clone();
        assert_eq!(id, "2");
        assert_eq!(session.node_counter(), 3);
    }

    #[test]
    fn exhausted_counter_refuses_new_nodes() {
        let document = Document::new(Vec::new(), u64::MAX);
        let mut session = EditorSession::from_document(&document);

        assert_eq!(
            session.add_node(NodeKind::Step, Position::default()),
            Err(SessionError::CounterExhausted(u64::MAX))
        );
        assert!(session.nodes().is_empty());
        assert_eq!(session.node_counter(), u64::MAX);
    }

    #[test]
    fn branch_connect_replaces_previous_target() {
        let mut session = EditorSession::new();
        for _ in 0..3 {
            session
                .add_node(NodeKind::Condition, Position::default())
                .unwrap();
        }

        session.connect("1", "2", Handle::True).unwrap();
        let edge = session.connect("1", "3", Handle::True).unwrap();

        assert_eq!(edge, Some(EdgeRecord::new("1", "3", Handle::True)));
        assert_eq!(session.edges(), vec![EdgeRecord::new("1", "3", Handle::True)]);
    }

    #[test]
    fn disconnect_only_removes_matching_handle() {
        let mut session = EditorSession::new();
        session
            .add_node(NodeKind::Condition, Position::default())
            .unwrap();
        session.add_node(NodeKind::Step, Position::default()).unwrap();
        session.connect("1", "2", Handle::False).unwrap();

        assert!(!session.disconnect(&EdgeRecord::new("1", "2", Handle::True)));
        assert!(session.disconnect(&EdgeRecord::new("1", "2", Handle::False)));
        assert!(session.edges().is_empty());
    }
}
