use std::fs::{self, File};
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use serde_json::Value;

use crate::domain::errors::DomainError;
use crate::domain::ports::JsonLineSource;

/// JSON Lines reader backed by the local filesystem.
///
/// Blank lines are skipped. A missing or unreadable file, or one without a
/// single record, is reported as [`DomainError::SourceNotFound`]. Content that
/// is not UTF-8 or not JSON is [`DomainError::MalformedData`].
#[derive(Debug, Default, Clone, Copy)]
pub struct FileJsonLineSource;

impl FileJsonLineSource {
    pub fn new() -> Self {
        Self
    }
}

impl JsonLineSource for FileJsonLineSource {
    fn read_whole(&self, path: &Path) -> Result<Value, DomainError> {
        let bytes = fs::read(path).map_err(|e| unreadable(path, e))?;
        let content = String::from_utf8(bytes).map_err(|e| {
            let valid = &e.as_bytes()[..e.utf8_error().valid_up_to()];
            let line = valid.iter().filter(|&&b| b == b'\n').count() + 1;
            DomainError::MalformedData(format!("line {}: {}", line, e.utf8_error()))
        })?;

        let records = content
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(idx, line)| decode_line(idx, line))
            .collect::<Result<Vec<_>, _>>()?;

        non_empty(path, records).map(Value::Array)
    }

    fn read_lines(&self, path: &Path) -> Result<Vec<Value>, DomainError> {
        let file = File::open(path).map_err(|e| unreadable(path, e))?;
        let reader = BufReader::new(file);
        let mut records = Vec::new();

        for (idx, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| match e.kind() {
                io::ErrorKind::InvalidData => {
                    DomainError::MalformedData(format!("line {}: {}", idx + 1, e))
                }
                _ => unreadable(path, e),
            })?;
            if line.trim().is_empty() {
                continue;
            }
            records.push(decode_line(idx, &line)?);
        }

        non_empty(path, records)
    }
}

fn decode_line(idx: usize, line: &str) -> Result<Value, DomainError> {
    serde_json::from_str(line.trim())
        .map_err(|e| DomainError::MalformedData(format!("line {}: {}", idx + 1, e)))
}

fn unreadable(path: &Path, e: io::Error) -> DomainError {
    log::warn!("cannot read {}: {}", path.display(), e);
    DomainError::SourceNotFound
}

fn non_empty(path: &Path, records: Vec<Value>) -> Result<Vec<Value>, DomainError> {
    if records.is_empty() {
        log::warn!("{} holds no records", path.display());
        return Err(DomainError::SourceNotFound);
    }
    Ok(records)
}
