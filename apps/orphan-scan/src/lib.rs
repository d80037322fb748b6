//! orphan-scan core library.
//!
//! This crate exposes programmatic APIs for finding orphaned object-literal
//! property lines in a single JavaScript file: `key: value,` lines left over
//! after an enclosing `console.log({...})` was removed.
//!
//! High-level modules:
//! - `cli`: CLI argument parsing (binary uses this).
//! - `config`: Discovery and effective configuration resolution.
//! - `heuristics`: Ordered stage pipeline classifying single lines.
//! - `scan`: Grouped-span and per-line scanning over a loaded file.
//! - `models`: Source lines and report records.
//! - `output`: Human/JSON printers for scan reports.
//! - `error`: Error type for unreadable input.
//! - `utils`: Supporting helpers.
pub mod cli;
pub mod config;
pub mod error;
pub mod heuristics;
pub mod models;
pub mod output;
pub mod scan;
pub mod utils;

pub use error::{ScanError, ScanResult};
pub use models::{Findings, Mode, OrphanCandidate, OrphanSpan, ScanReport, SourceLines};
pub use scan::{scan_file, scan_lines};
