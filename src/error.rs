use thiserror::Error;

/// Errors that can occur while decoding a workflow document.
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("Failed to parse document JSON: {0}")]
    JsonParseError(#[from] serde_json::Error),

    #[error("Document must be a JSON object, but found {found}")]
    NotAnObject { found: &'static str },

    #[error("Document field 'nodes' must be a sequence, but found {found}")]
    NodesNotASequence { found: &'static str },

    #[error("Node at index {index} is malformed: {source}")]
    InvalidNode {
        index: usize,
        #[source]
        source: serde_json::Error,
    },
}

/// Errors raised by structural edits on an `EditorSession`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("Node '{0}' not found in the current session")]
    NodeNotFound(String),

    #[error("Node id counter is exhausted at {0}; no further ids can be minted")]
    CounterExhausted(u64),
}

/// Errors raised by a `DocumentStore` while saving or loading.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Could not access '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not encode document: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("Stored document at '{path}' is invalid: {source}")]
    Decode {
        path: String,
        #[source]
        source: DecodeError,
    },
}

/// Maps a JSON value to the name used in decode error messages.
pub(crate) fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
