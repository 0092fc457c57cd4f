use crate::document::Document;
use crate::error::StoreError;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

/// Durable storage for workflow documents.
pub trait DocumentStore {
    /// Persists the document, replacing whatever was stored before.
    fn save(&self, document: &Document) -> Result<(), StoreError>;

    /// Returns the stored document, or `None` when nothing has been saved yet.
    fn load(&self) -> Result<Option<Document>, StoreError>;
}

/// Stores a document as pretty-printed JSON in a single file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.display().to_string(),
            source,
        }
    }
}

impl DocumentStore for JsonFileStore {
    fn save(&self, document: &Document) -> Result<(), StoreError> {
        let json = document.to_json_pretty().map_err(StoreError::Encode)?;
        let mut file = fs::File::create(&self.path).map_err(|e| self.io_error(e))?;
        file.write_all(json.as_bytes())
            .map_err(|e| self.io_error(e))?;
        tracing::debug!(path = %self.path.display(), nodes = document.nodes.len(), "saved document");
        Ok(())
    }

    fn load(&self) -> Result<Option<Document>, StoreError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no stored document");
                return Ok(None);
            }
            Err(e) => return Err(self.io_error(e)),
        };

        Document::from_json(&contents)
            .map(Some)
            .map_err(|source| StoreError::Decode {
                path: self.path.display().to_string(),
                source,
            })
    }
}
