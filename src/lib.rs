//! # flowdoc - Workflow Graph Documents
//!
//! **flowdoc** is the data layer beneath a node-based workflow editor. A
//! workflow is a list of typed nodes (START, STEP, TOOL, CONDITION, INFO).
//! Edges are never stored: every node carries its own successors in `nexts`,
//! `true_next` and `false_next`, and the edge set is rebuilt from those fields
//! whenever a workflow is loaded or edited.
//!
//! ## Core Workflow
//!
//! 1.  **Load**: Decode a document with [`serializer::deserialize`]. Nodes are
//!     decoded first, then [`edge::reconstruct`] derives the edges and the node
//!     id counter is restored.
//! 2.  **Edit**: Wrap the result in an [`session::EditorSession`] to add nodes
//!     with freshly minted ids, connect or disconnect them, or remove them.
//! 3.  **Check**: Run [`validate::validate`] to list convention violations such
//!     as duplicate ids or branches on non-CONDITION nodes. It only reports.
//! 4.  **Save**: Produce a document with [`serializer::serialize`] and hand it
//!     to a [`store::DocumentStore`].
//!
//! ## Quick Start
//!
//! ```rust
//! use flowdoc::prelude::*;
//! use serde_json::json;
//!
//! fn main() -> std::result::Result<(), DecodeError> {
//!     let graph = deserialize(json!({
//!         "node_counter": 3,
//!         "nodes": [
//!             { "uniq_id": "n1", "type": "CONDITION", "name": "check",
//!               "nexts": [], "true_next": "n2", "false_next": "n3", "ext": {} },
//!             { "uniq_id": "n2", "type": "STEP", "name": "ok", "tool": "noop", "nexts": [], "ext": {} },
//!             { "uniq_id": "n3", "type": "STEP", "name": "fail", "tool": "noop", "nexts": [], "ext": {} }
//!         ]
//!     }))?;
//!
//!     assert_eq!(graph.node_counter, 3);
//!     assert_eq!(
//!         graph.edges,
//!         vec![
//!             EdgeRecord::new("n1", "n2", Handle::True),
//!             EdgeRecord::new("n1", "n3", Handle::False),
//!         ]
//!     );
//!
//!     // Saving is the inverse, with the counter threaded through explicitly.
//!     let document = serialize(&graph.nodes, graph.node_counter);
//!     assert_eq!(document.nodes.len(), 3);
//!     Ok(())
//! }
//! ```

pub mod document;
pub mod edge;
pub mod error;
pub mod format;
pub mod node;
pub mod prelude;
pub mod serializer;
pub mod session;
pub mod store;
pub mod validate;
