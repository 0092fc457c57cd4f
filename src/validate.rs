//! Report-only checks for conventions the data model does not enforce.

use crate::node::{NodeKind, NodeRecord};
use itertools::Itertools;
use std::fmt;

/// A node that breaks an editor convention. Loading never fails because of one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConventionViolation {
    /// The id is shared by more than one node.
    DuplicateId { id: String },
    /// A CONDITION node also lists unconditional successors.
    PlainSuccessorsOnCondition { id: String, nexts: Vec<String> },
    /// A node that is not a CONDITION carries a true/false successor.
    BranchOnNonCondition { id: String, kind: NodeKind },
    /// A kind that needs a name has an empty one.
    MissingName { id: String, kind: NodeKind },
}

impl fmt::Display for ConventionViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConventionViolation::DuplicateId { id } => {
                write!(f, "node id '{}' is used more than once", id)
            }
            ConventionViolation::PlainSuccessorsOnCondition { id, nexts } => write!(
                f,
                "CONDITION node '{}' has plain successors [{}]",
                id,
                nexts.iter().join(", ")
            ),
            ConventionViolation::BranchOnNonCondition { id, kind } => {
                write!(f, "{} node '{}' has a true/false successor", kind, id)
            }
            ConventionViolation::MissingName { id, kind } => {
                write!(f, "{} node '{}' has no name", kind, id)
            }
        }
    }
}

/// Collects every convention violation in `nodes`, duplicates first, then per node in order.
pub fn validate(nodes: &[NodeRecord]) -> Vec<ConventionViolation> {
    let mut violations: Vec<ConventionViolation> = nodes
        .iter()
        .map(|n| n.id.as_str())
        .duplicates()
        .map(|id| ConventionViolation::DuplicateId { id: id.to_string() })
        .collect();

    for node in nodes {
        if node.kind.is_branching() {
            if !node.nexts.is_empty() {
                violations.push(ConventionViolation::PlainSuccessorsOnCondition {
                    id: node.id.clone(),
                    nexts: node.nexts.clone(),
                });
            }
        } else if node.true_next.is_some() || node.false_next.is_some() {
            violations.push(ConventionViolation::BranchOnNonCondition {
                id: node.id.clone(),
                kind: node.kind,
            });
        }

        if node.kind.requires_name() && node.name.trim().is_empty() {
            violations.push(ConventionViolation::MissingName {
                id: node.id.clone(),
                kind: node.kind,
            });
        }
    }

    for violation in &violations {
        tracing::warn!(%violation, "workflow convention violated");
    }
    violations
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_graph_has_no_violations() {
        let nodes = vec![
            NodeRecord::new("1").with_nexts(["2"]),
            NodeRecord::new("2")
                .with_kind(NodeKind::Condition)
                .with_name("ready?")
                .with_true_next("3"),
            NodeRecord::new("3").with_kind(NodeKind::Tool),
        ];
        assert!(validate(&nodes).is_empty());
    }

    #[test]
    fn reports_each_convention() {
        let nodes = vec![
            NodeRecord::new("1")
                .with_kind(NodeKind::Condition)
                .with_name("c")
                .with_nexts(["2"]),
            NodeRecord::new("2")
                .with_kind(NodeKind::Step)
                .with_name("s")
                .with_false_next("1"),
            NodeRecord::new("2").with_kind(NodeKind::Info),
        ];

        let violations = validate(&nodes);
        assert_eq!(
            violations,
            vec![
                ConventionViolation::DuplicateId { id: "2".into() },
                ConventionViolation::PlainSuccessorsOnCondition {
                    id: "1".into(),
                    nexts: vec!["2".into()],
                },
                ConventionViolation::BranchOnNonCondition {
                    id: "2".into(),
                    kind: NodeKind::Step,
                },
                ConventionViolation::MissingName {
                    id: "2".into(),
                    kind: NodeKind::Info,
                },
            ]
        );
    }
}
