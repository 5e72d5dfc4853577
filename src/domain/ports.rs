use std::path::Path;

use serde_json::Value;

use super::errors::DomainError;
use super::order::{raw_order_id, Order};

/// Reads a JSON Lines file.
pub trait JsonLineSource: Send + Sync + 'static {
    /// The whole file decoded as a single JSON array, one element per line.
    fn read_whole(&self, path: &Path) -> Result<Value, DomainError>;

    /// The file decoded line by line.
    fn read_lines(&self, path: &Path) -> Result<Vec<Value>, DomainError>;
}

pub trait OrderRepository: Send + Sync + 'static {
    /// Every stored record, untouched, in source order.
    fn all(&self) -> Result<Vec<Value>, DomainError>;

    /// First order, in source order, whose id has the integer value `id`.
    ///
    /// Only the matching record is decoded, so a malformed record elsewhere
    /// in the source does not affect the lookup.
    fn find_by_id(&self, id: i64) -> Result<Option<Order>, DomainError> {
        let records = self.all()?;
        let Some((idx, record)) = records
            .into_iter()
            .enumerate()
            .find(|(_, record)| raw_order_id(record) == Some(id))
        else {
            return Ok(None);
        };

        serde_json::from_value(record)
            .map(Some)
            .map_err(|e| DomainError::MalformedData(format!("record {}: {}", idx + 1, e)))
    }
}
