//! Output rendering for scan reports.
//!
//! Supports `human` (default) and `json` outputs. Human rendering is a pure
//! function of the report and the color flag, so a rescan of an unchanged
//! file prints the same bytes.

use crate::models::{Findings, Mode, OrphanCandidate, OrphanSpan, ScanReport};
use owo_colors::OwoColorize;
use serde_json::json;
use serde_json::Value as JsonVal;
use std::fmt::Write as _;

/// Width of the `=` rule framing a report.
pub const RULE_WIDTH: usize = 60;

fn use_colors(output: &str, color: bool) -> bool {
    color && output != "json" && std::env::var_os("NO_COLOR").is_none()
}

fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

fn banner(report: &ScanReport) -> String {
    match report.mode {
        Mode::Grouped => format!("🔍 Deep scan of {}...", report.file),
        Mode::PerLine => format!("🔍 Scanning {} for orphaned properties...", report.file),
    }
}

fn found_heading(report: &ScanReport) -> String {
    let n = report.findings.len();
    match report.mode {
        Mode::Grouped => format!("❌ Found {} orphaned console.log fragments:", n),
        Mode::PerLine => format!("❌ Found {} potential orphaned properties:", n),
    }
}

fn clean_heading(mode: Mode) -> &'static str {
    match mode {
        Mode::Grouped => "✅ No orphaned fragments found!",
        Mode::PerLine => "✅ No orphaned properties found!",
    }
}

fn render_spans(out: &mut String, spans: &[OrphanSpan], color: bool) {
    for (idx, span) in spans.iter().enumerate() {
        let head = format!("{}. Lines {}-{}:", idx + 1, span.start, span.end);
        if color {
            let _ = writeln!(out, "{}", head.bold());
        } else {
            let _ = writeln!(out, "{}", head);
        }
        for line in &span.lines {
            let _ = writeln!(out, "   {}", line);
        }
        out.push('\n');
    }
}

fn render_candidates(out: &mut String, found: &[OrphanCandidate], color: bool) {
    for c in found {
        let head = format!("Line {}:", c.line);
        if color {
            let _ = writeln!(out, "{} {}", head.bold(), c.content);
            let _ = writeln!(out, "  {} {}", "Previous:".bright_black(), c.previous);
        } else {
            let _ = writeln!(out, "{} {}", head, c.content);
            let _ = writeln!(out, "  Previous: {}", c.previous);
        }
        out.push('\n');
    }
}

/// Render the human report: banner, rule, findings or a clean note, rule.
pub fn render_human(report: &ScanReport, color: bool) -> String {
    let mut out = String::new();
    let head = banner(report);
    if color {
        let _ = writeln!(out, "{}", head.bold());
    } else {
        let _ = writeln!(out, "{}", head);
    }
    let _ = writeln!(out, "{}", rule());

    if report.findings.is_empty() {
        let msg = clean_heading(report.mode);
        if color {
            let _ = writeln!(out, "\n{}", msg.green().bold());
        } else {
            let _ = writeln!(out, "\n{}", msg);
        }
    } else {
        let msg = found_heading(report);
        if color {
            let _ = writeln!(out, "\n{}\n", msg.red().bold());
        } else {
            let _ = writeln!(out, "\n{}\n", msg);
        }
        match &report.findings {
            Findings::Spans(spans) => render_spans(&mut out, spans, color),
            Findings::Lines(found) => render_candidates(&mut out, found, color),
        }
    }

    let _ = writeln!(out, "{}", rule());
    out
}

/// Compose report JSON object (pure) for testing/snapshot purposes.
pub fn compose_report_json(report: &ScanReport) -> JsonVal {
    json!({
        "file": report.file,
        "mode": report.mode,
        "findings": report.findings,
        "summary": { "count": report.findings.len() },
    })
}

/// Print a scan report in the requested format.
pub fn print_report(report: &ScanReport, output: &str, color: bool) {
    match output {
        "json" => match serde_json::to_string_pretty(&compose_report_json(report)) {
            Ok(s) => println!("{}", s),
            Err(e) => eprintln!("{} {}", crate::utils::error_prefix(color), e),
        },
        _ => print!("{}", render_human(report, use_colors(output, color))),
    }
}
