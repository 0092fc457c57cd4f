//! Prelude module for convenient imports
//!
//! Re-exports the types and operations most callers need to load, edit and
//! save workflow documents.
//!
//! # Example
//!
//! ```rust,no_run
//! use flowdoc::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let text = std::fs::read_to_string("path/to/flow.json")?;
//! let graph = deserialize_str(&text)?;
//! println!("{}", GraphFormatter::format_edges(&graph.edges));
//!
//! let mut session = EditorSession::from_loaded(graph);
//! session.add_node(NodeKind::Step, Position::new(120.0, 40.0))?;
//! JsonFileStore::new("path/to/flow.json").save(&session.to_document())?;
//! # Ok(())
//! # }
//! ```

// Node model and converters
pub use crate::node::{NodeKind, NodeRecord, Position, Size, VisualNode, VisualNodeData};

// Documents
pub use crate::document::{Document, DocumentNode, NodeExt};

// Edges
pub use crate::edge::{
    DanglingReference, EdgeRecord, Handle, VisualEdge, dangling_references, reconstruct,
};

// Save and load paths
pub use crate::serializer::{
    LoadedGraph, deserialize, deserialize_str, load_document, serialize, serialize_visual,
};

// Editing, validation and storage
pub use crate::session::EditorSession;
pub use crate::store::{DocumentStore, JsonFileStore};
pub use crate::validate::{ConventionViolation, validate};

// Error types
pub use crate::error::{DecodeError, SessionError, StoreError};

// Formatting
pub use crate::format::GraphFormatter;

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
