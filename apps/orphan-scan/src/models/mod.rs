//! Shared data models for scan input and report records.

pub mod source;

pub use source::SourceLines;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
/// Detection mode; each mode carries its own preceding-line rule.
pub enum Mode {
    /// Span grouping up to a stray `})` closer.
    Grouped,
    /// Independent flagging of single lines.
    PerLine,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// A single flagged line from the per-line mode.
pub struct OrphanCandidate {
    /// 1-based line number.
    pub line: usize,
    pub content: String,
    /// Preceding line, trimmed.
    pub previous: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// An orphan start line through its closer, inclusive.
pub struct OrphanSpan {
    pub start: usize,
    pub end: usize,
    pub lines: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
/// Findings of one scan, shaped by the mode that produced them.
pub enum Findings {
    Spans(Vec<OrphanSpan>),
    Lines(Vec<OrphanCandidate>),
}

impl Findings {
    pub fn len(&self) -> usize {
        match self {
            Findings::Spans(v) => v.len(),
            Findings::Lines(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// Scan results container.
pub struct ScanReport {
    /// Path as shown to the user.
    pub file: String,
    pub mode: Mode,
    pub findings: Findings,
}
