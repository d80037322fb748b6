//! Scan runners for the two detection modes.
//!
//! Grouped mode pairs every orphan start with the next stray `})` and skips
//! past it, so spans never overlap. Per-line mode flags each matching line on
//! its own and never looks for a closer.

use crate::error::ScanResult;
use crate::heuristics::Pipeline;
use crate::models::{Findings, Mode, OrphanCandidate, OrphanSpan, ScanReport, SourceLines};
use std::path::Path;

/// Trimmed content of a line that closes an orphan fragment.
pub const CLOSER: &str = "})";

/// First index at or after `from` whose trimmed line is exactly `})`.
///
/// `None` means the fragment has no closer before end of input.
pub fn find_closer(lines: &SourceLines, from: usize) -> Option<usize> {
    (from..lines.len()).find(|&j| lines.get(j).is_some_and(|l| l.trim() == CLOSER))
}

/// Group orphan starts with their closers into non-overlapping spans.
pub fn scan_grouped(lines: &SourceLines, pipeline: &Pipeline) -> Vec<OrphanSpan> {
    let mut spans = Vec::new();
    let mut i = 0usize;
    while i < lines.len() {
        if pipeline.is_orphan(lines, i) {
            if let Some(j) = find_closer(lines, i) {
                spans.push(OrphanSpan {
                    start: i + 1,
                    end: j + 1,
                    lines: lines.slice(i, j),
                });
                i = j + 1;
                continue;
            }
        }
        i += 1;
    }
    spans
}

/// Flag every line the pipeline admits, one candidate per line.
pub fn scan_per_line(lines: &SourceLines, pipeline: &Pipeline) -> Vec<OrphanCandidate> {
    (0..lines.len())
        .filter(|&i| pipeline.is_orphan(lines, i))
        .filter_map(|i| {
            let content = lines.get(i)?.trim_end().to_string();
            let previous = lines.previous_trimmed(i)?.to_string();
            Some(OrphanCandidate {
                line: i + 1,
                content,
                previous,
            })
        })
        .collect()
}

/// Run `mode` over already loaded lines.
pub fn scan_lines(
    lines: &SourceLines,
    display: &str,
    mode: Mode,
    extra_skip: &[String],
) -> ScanResult<ScanReport> {
    let pipeline = Pipeline::for_mode(mode, extra_skip)?;
    let findings = match mode {
        Mode::Grouped => Findings::Spans(scan_grouped(lines, &pipeline)),
        Mode::PerLine => Findings::Lines(scan_per_line(lines, &pipeline)),
    };
    Ok(ScanReport {
        file: display.to_string(),
        mode,
        findings,
    })
}

/// Load `path` once and scan it in `mode`.
///
/// `display` is the path text used in the report banner. The only error is
/// an unreadable or non-UTF-8 input file.
pub fn scan_file(
    path: &Path,
    display: &str,
    mode: Mode,
    extra_skip: &[String],
) -> ScanResult<ScanReport> {
    let lines = SourceLines::load(path)?;
    scan_lines(&lines, display, mode, extra_skip)
}
