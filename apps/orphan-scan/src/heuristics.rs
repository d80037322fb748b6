//! Line classification as an ordered pipeline of named stages.
//!
//! A line is an orphan only when every stage admits it. Stages run in order
//! and stop at the first rejection:
//! - `denylist`: substrings that mark known-valid constructs (i18n maps,
//!   declarations, control statements, comments, inline styles).
//! - `shape`: the `key: value,` property pattern.
//! - `preceding-line`: what the trimmed line above must look like. The rule
//!   differs per mode (`closed-call` for grouped, `not-opener` for per-line).

use crate::error::ScanResult;
use crate::models::{Mode, SourceLines};
use regex::Regex;

/// Substrings that always exclude a line.
pub const DEFAULT_DENYLIST: &[&str] = &[
    "en:",
    "ru:",
    "const ",
    "let ",
    "var ",
    "return ",
    "case ",
    "//",
    "style={{",
    "style: {",
];

/// Indented `identifier: value,` with only whitespace after the comma.
pub const SHAPE_PATTERN: &str = r"^\s{2,}[a-zA-Z_][a-zA-Z0-9_]*:\s+.+,\s*$";

/// One filter step of the classification pipeline.
pub trait Stage {
    fn name(&self) -> &'static str;

    /// Whether the line at `idx` survives this stage.
    fn admits(&self, lines: &SourceLines, idx: usize) -> bool;
}

/// Rejects lines containing any denylisted substring.
pub struct Denylist {
    needles: Vec<String>,
}

impl Denylist {
    /// Built-in list plus `extra`; the built-in entries cannot be removed.
    pub fn new(extra: &[String]) -> Self {
        let mut needles: Vec<String> = DEFAULT_DENYLIST.iter().map(|s| s.to_string()).collect();
        for e in extra {
            if !e.is_empty() && !needles.contains(e) {
                needles.push(e.clone());
            }
        }
        Self { needles }
    }

    pub fn needles(&self) -> &[String] {
        &self.needles
    }

    pub fn hit<'a>(&'a self, line: &str) -> Option<&'a str> {
        self.needles
            .iter()
            .find(|n| line.contains(n.as_str()))
            .map(String::as_str)
    }
}

impl Stage for Denylist {
    fn name(&self) -> &'static str {
        "denylist"
    }

    fn admits(&self, lines: &SourceLines, idx: usize) -> bool {
        match lines.get(idx) {
            Some(line) => self.hit(line).is_none(),
            None => false,
        }
    }
}

/// Admits lines shaped like an object property assignment.
pub struct ShapeMatch {
    re: Regex,
}

impl ShapeMatch {
    pub fn new() -> ScanResult<Self> {
        Ok(Self {
            re: Regex::new(SHAPE_PATTERN)?,
        })
    }

    pub fn matches(&self, line: &str) -> bool {
        self.re.is_match(line)
    }
}

impl Stage for ShapeMatch {
    fn name(&self) -> &'static str {
        "shape"
    }

    fn admits(&self, lines: &SourceLines, idx: usize) -> bool {
        lines.get(idx).is_some_and(|l| self.matches(l))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Rule applied to the trimmed line above a shape match.
pub enum PrecedingLine {
    /// Above line ends in `)` but not in `({`: a call that was just closed.
    ClosedCall,
    /// Above line is non-empty and does not end in `{`, `(` or `[`.
    NotOpener,
}

impl PrecedingLine {
    /// `ClosedCall` for grouped scans, `NotOpener` for per-line scans.
    pub fn for_mode(mode: Mode) -> Self {
        match mode {
            Mode::Grouped => PrecedingLine::ClosedCall,
            Mode::PerLine => PrecedingLine::NotOpener,
        }
    }

    /// Short rule name, e.g. `closed-call`.
    pub fn label(&self) -> &'static str {
        match self {
            PrecedingLine::ClosedCall => "closed-call",
            PrecedingLine::NotOpener => "not-opener",
        }
    }

    /// Apply the rule to an already trimmed preceding line.
    pub fn accepts(&self, prev: &str) -> bool {
        match self {
            PrecedingLine::ClosedCall => prev.ends_with(')') && !prev.ends_with("({"),
            PrecedingLine::NotOpener => {
                !prev.is_empty() && !prev.ends_with(['{', '(', '['])
            }
        }
    }
}

impl Stage for PrecedingLine {
    fn name(&self) -> &'static str {
        "preceding-line"
    }

    fn admits(&self, lines: &SourceLines, idx: usize) -> bool {
        // First line has nothing above it.
        lines.previous_trimmed(idx).is_some_and(|p| self.accepts(p))
    }
}

/// Ordered stages deciding whether a line starts an orphan fragment.
pub struct Pipeline {
    mode: Mode,
    stages: Vec<Box<dyn Stage>>,
}

impl Pipeline {
    /// Standard pipeline for `mode` with optional extra denylist entries.
    pub fn for_mode(mode: Mode, extra_skip: &[String]) -> ScanResult<Self> {
        let stages: Vec<Box<dyn Stage>> = vec![
            Box::new(Denylist::new(extra_skip)),
            Box::new(ShapeMatch::new()?),
            Box::new(PrecedingLine::for_mode(mode)),
        ];
        Ok(Self { mode, stages })
    }

    pub fn grouped(extra_skip: &[String]) -> ScanResult<Self> {
        Self::for_mode(Mode::Grouped, extra_skip)
    }

    pub fn per_line(extra_skip: &[String]) -> ScanResult<Self> {
        Self::for_mode(Mode::PerLine, extra_skip)
    }

    /// Mode whose preceding-line rule this pipeline applies.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Stage names in evaluation order.
    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|s| s.name()).collect()
    }

    /// Name of the first stage rejecting the line, or `None` when it passes.
    pub fn rejected_by(&self, lines: &SourceLines, idx: usize) -> Option<&'static str> {
        self.stages
            .iter()
            .find(|s| !s.admits(lines, idx))
            .map(|s| s.name())
    }

    pub fn is_orphan(&self, lines: &SourceLines, idx: usize) -> bool {
        self.rejected_by(lines, idx).is_none()
    }
}
