use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::domain::errors::DomainError;
use crate::domain::ports::{JsonLineSource, OrderRepository};

use super::json_lines::FileJsonLineSource;

/// Orders stored one per line in a JSONL file. The file is re-read on every
/// call.
pub struct JsonlOrderRepository<S = FileJsonLineSource> {
    source: S,
    path: PathBuf,
}

impl<S: JsonLineSource> JsonlOrderRepository<S> {
    pub fn new(source: S, path: impl Into<PathBuf>) -> Self {
        Self {
            source,
            path: path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of records currently in the file.
    pub fn record_count(&self) -> Result<usize, DomainError> {
        Ok(self.source.read_lines(&self.path)?.len())
    }
}

impl<S: JsonLineSource> OrderRepository for JsonlOrderRepository<S> {
    fn all(&self) -> Result<Vec<Value>, DomainError> {
        match self.source.read_whole(&self.path)? {
            Value::Array(records) => Ok(records),
            other => Err(DomainError::MalformedData(format!(
                "expected an array of records, got {}",
                other
            ))),
        }
    }
}
