//! Error types for the orphan scanner.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can stop a scan before any finding is reported.
///
/// Findings themselves are never errors; an empty or a long report is a
/// normal outcome.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The target file could not be opened or is not valid UTF-8 text
    #[error("cannot read {}: {source}", .path.display())]
    InputFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The property-shape pattern failed to compile
    #[error("invalid shape pattern: {0}")]
    Pattern(#[from] regex::Error),
}

impl ScanError {
    /// Check if this error came from reading the input file (exit status 2)
    pub fn is_input_file(&self) -> bool {
        matches!(self, ScanError::InputFile { .. })
    }
}

/// Result type for scan operations
pub type ScanResult<T> = Result<T, ScanError>;
