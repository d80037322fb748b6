//! Line-split view of the scanned file.

use crate::error::{ScanError, ScanResult};
use std::fs;
use std::path::Path;

/// Ordered, immutable lines of one source file.
///
/// `\r\n`, a lone `\r` and `\n` all end a line; no terminator is kept in
/// the line text. Indexes are 0-based; reports convert to 1-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLines {
    lines: Vec<String>,
}

impl SourceLines {
    /// Read `path` fully into memory and split it into lines.
    pub fn load(path: &Path) -> ScanResult<Self> {
        let text = fs::read_to_string(path).map_err(|source| ScanError::InputFile {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_text(&text))
    }

    pub fn from_text(text: &str) -> Self {
        let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
        Self {
            lines: normalized.split('\n').map(str::to_string).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn get(&self, idx: usize) -> Option<&str> {
        self.lines.get(idx).map(String::as_str)
    }

    /// Trimmed text of the line before `idx`, if there is one.
    pub fn previous_trimmed(&self, idx: usize) -> Option<&str> {
        idx.checked_sub(1)
            .and_then(|p| self.get(p))
            .map(str::trim)
    }

    /// Verbatim copy of the inclusive range `start..=end`.
    pub fn slice(&self, start: usize, end: usize) -> Vec<String> {
        self.lines[start..=end].to_vec()
    }
}
