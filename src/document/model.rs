use super::DocumentNode;
use crate::error::{DecodeError, json_kind};
use serde::Serialize;
use serde_json::Value;

/// Counter restored when a document carries none.
pub const DEFAULT_NODE_COUNTER: u64 = 1;

/// The portable representation of a workflow: its nodes plus the id counter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Document {
    pub nodes: Vec<DocumentNode>,
    pub node_counter: u64,
}

impl Default for Document {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            node_counter: DEFAULT_NODE_COUNTER,
        }
    }
}

impl Document {
    pub fn new(nodes: Vec<DocumentNode>, node_counter: u64) -> Self {
        Self {
            nodes,
            node_counter,
        }
    }

    /// Decodes a document from arbitrary JSON.
    ///
    /// Only the outer shape is checked strictly. Missing `nodes` yields an
    /// empty list. A `node_counter` that is missing, `null`, zero or not a
    /// non-negative integer yields [`DEFAULT_NODE_COUNTER`].
    pub fn from_value(value: Value) -> Result<Self, DecodeError> {
        let mut map = match value {
            Value::Object(map) => map,
            other => {
                return Err(DecodeError::NotAnObject {
                    found: json_kind(&other),
                });
            }
        };

        let nodes = match map.remove("nodes") {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::Array(items)) => items
                .into_iter()
                .enumerate()
                .map(|(index, item)| {
                    serde_json::from_value::<DocumentNode>(item)
                        .map_err(|source| DecodeError::InvalidNode { index, source })
                })
                .collect::<Result<Vec<_>, _>>()?,
            Some(other) => {
                return Err(DecodeError::NodesNotASequence {
                    found: json_kind(&other),
                });
            }
        };

        let node_counter = match map.remove("node_counter") {
            None | Some(Value::Null) => DEFAULT_NODE_COUNTER,
            Some(found) => match found.as_u64() {
                Some(0) => DEFAULT_NODE_COUNTER,
                Some(counter) => counter,
                None => {
                    tracing::warn!(%found, "unusable node_counter, restoring default");
                    DEFAULT_NODE_COUNTER
                }
            },
        };

        Ok(Self {
            nodes,
            node_counter,
        })
    }

    /// Parses JSON text and decodes it with [`Document::from_value`].
    pub fn from_json(text: &str) -> Result<Self, DecodeError> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_value(value)
    }

    /// Renders the document with two-space indentation, the format the editor saves.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
