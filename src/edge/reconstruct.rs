use super::{EdgeRecord, Handle};
use crate::node::NodeRecord;
use ahash::AHashSet;
use std::fmt;

/// Derives the edge set from the adjacency fields of `nodes`.
///
/// Nodes are visited in order. For each node the plain successors come first
/// (in `nexts` order), then the `true_next` branch, then the `false_next`
/// branch. Targets are not resolved, so dangling references still produce an
/// edge, but an empty `true_next`/`false_next` produces none. A
/// `(target, handle)` pair repeated on the same source is emitted once.
pub fn reconstruct(nodes: &[NodeRecord]) -> Vec<EdgeRecord> {
    let mut edges = Vec::new();

    for node in nodes {
        let mut seen: AHashSet<(&str, Handle)> = AHashSet::new();
        let plain = node.nexts.iter().map(|id| (id.as_str(), Handle::Plain));
        // An empty branch target means the branch is unset.
        let branches = [
            node.true_next
                .as_deref()
                .filter(|id| !id.is_empty())
                .map(|id| (id, Handle::True)),
            node.false_next
                .as_deref()
                .filter(|id| !id.is_empty())
                .map(|id| (id, Handle::False)),
        ];

        for (target, handle) in plain.chain(branches.into_iter().flatten()) {
            if seen.insert((target, handle)) {
                edges.push(EdgeRecord::new(node.id.as_str(), target, handle));
            } else {
                tracing::debug!(from = %node.id, to = target, %handle, "skipping duplicate edge");
            }
        }
    }

    tracing::debug!(
        nodes = nodes.len(),
        edges = edges.len(),
        "reconstructed edge set"
    );
    edges
}

/// An edge whose target id does not name any node in the set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DanglingReference {
    pub source: String,
    pub target: String,
    pub handle: Handle,
}

impl fmt::Display for DanglingReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "node '{}' has a {} successor '{}' that is not in the graph",
            self.source, self.handle, self.target
        )
    }
}

/// Lists every edge pointing at an id absent from `nodes`, in edge order.
pub fn dangling_references(nodes: &[NodeRecord], edges: &[EdgeRecord]) -> Vec<DanglingReference> {
    let known: AHashSet<&str> = nodes.iter().map(|n| n.id.as_str()).collect();

    edges
        .iter()
        .filter(|edge| !known.contains(edge.target.as_str()))
        .map(|edge| DanglingReference {
            source: edge.source.clone(),
            target: edge.target.clone(),
            handle: edge.handle,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::NodeKind;

    #[test]
    fn plain_edges_precede_branches() {
        let nodes = vec![
            NodeRecord::new("a")
                .with_kind(NodeKind::Condition)
                .with_nexts(["p"])
                .with_false_next("f")
                .with_true_next("t"),
        ];

        let edges = reconstruct(&nodes);
        assert_eq!(
            edges,
            vec![
                EdgeRecord::new("a", "p", Handle::Plain),
                EdgeRecord::new("a", "t", Handle::True),
                EdgeRecord::new("a", "f", Handle::False),
            ]
        );
    }

    #[test]
    fn repeated_successor_is_emitted_once() {
        let nodes = vec![NodeRecord::new("a").with_nexts(["b", "b", "c"])];
        let edges = reconstruct(&nodes);
        assert_eq!(
            edges,
            vec![EdgeRecord::plain("a", "b"), EdgeRecord::plain("a", "c")]
        );
    }

    #[test]
    fn same_target_on_different_handles_is_kept() {
        let nodes = vec![
            NodeRecord::new("a")
                .with_nexts(["b"])
                .with_true_next("b")
                .with_false_next("b"),
        ];
        assert_eq!(reconstruct(&nodes).len(), 3);
    }

    #[test]
    fn dangling_references_point_at_missing_ids() {
        let nodes = vec![
            NodeRecord::new("a").with_nexts(["b", "ghost"]),
            NodeRecord::new("b").with_true_next("a"),
        ];
        let edges = reconstruct(&nodes);
        let dangling = dangling_references(&nodes, &edges);

        assert_eq!(dangling.len(), 1);
        assert_eq!(dangling[0].target, "ghost");
        assert_eq!(dangling[0].handle, Handle::Plain);
        assert!(dangling[0].to_string().contains("'ghost'"));
    }
}
