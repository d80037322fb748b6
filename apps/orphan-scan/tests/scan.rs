use orphan_scan::heuristics::Pipeline;
use orphan_scan::output::{compose_report_json, render_human};
use orphan_scan::{scan_file, Findings, Mode, ScanReport, SourceLines};
use std::path::Path;
use tempfile::tempdir;

fn write(dir: &Path, name: &str, body: &str) -> std::path::PathBuf {
    let p = dir.join(name);
    std::fs::write(&p, body).unwrap();
    p
}

fn spans(r: &ScanReport) -> &[orphan_scan::OrphanSpan] {
    match &r.findings {
        Findings::Spans(s) => s,
        Findings::Lines(_) => panic!("expected spans"),
    }
}

fn candidates(r: &ScanReport) -> &[orphan_scan::OrphanCandidate] {
    match &r.findings {
        Findings::Lines(c) => c,
        Findings::Spans(_) => panic!("expected line candidates"),
    }
}

const COMPONENT: &str = r#"import React from 'react';

export default function InvestingTab({ user }) {
  const [plans, setPlans] = useState([]);

  useEffect(() => {
    loadPlans()
      userId: user.id,
      count: plans.length,
    })
  }, []);

  const handleInvest = async (plan) => {
    await api.post('/invest', {
      planId: plan.id,
      amount: plan.min,
    });
    refresh()
      planId: plan.id,
      status: 'done',
    })
  };

  const labels = {
    en: 'Invest',
    ru: 'Инвестировать',
  };

  return (
    <div style={{
      padding: 8,
    }}>
      {plans.length}
    </div>
  );
}
"#;

#[test]
fn grouped_scan_finds_both_fragments_in_component() {
    let dir = tempdir().unwrap();
    let p = write(dir.path(), "index.js", COMPONENT);
    let report = scan_file(&p, "index.js", Mode::Grouped, &[]).unwrap();
    let found = spans(&report);
    assert_eq!(found.len(), 2);
    assert_eq!((found[0].start, found[0].end), (8, 10));
    assert_eq!((found[1].start, found[1].end), (19, 21));
    assert_eq!(found[1].lines[1], "      status: 'done',");

    // start lines satisfy the grouped pipeline, end lines are closers
    let lines = SourceLines::from_text(COMPONENT);
    let pipeline = Pipeline::grouped(&[]).unwrap();
    let mut last_end = 0;
    for s in found {
        assert!(pipeline.is_orphan(&lines, s.start - 1));
        assert_eq!(lines.get(s.end - 1).unwrap().trim(), "})");
        assert!(s.start > last_end);
        last_end = s.end;
    }
}

#[test]
fn per_line_scan_reports_every_orphan_line() {
    let dir = tempdir().unwrap();
    let p = write(dir.path(), "index.js", COMPONENT);
    let report = scan_file(&p, "index.js", Mode::PerLine, &[]).unwrap();
    let nums: Vec<_> = candidates(&report).iter().map(|c| c.line).collect();
    // object bodies after `{` / `({` openers and the i18n map stay quiet
    assert_eq!(nums, vec![8, 9, 16, 19, 20]);
    assert_eq!(candidates(&report)[0].previous, "loadPlans()");
    assert_eq!(candidates(&report)[2].previous, "planId: plan.id,");
}

#[test]
fn locale_declaration_has_no_findings() {
    let dir = tempdir().unwrap();
    let p = write(dir.path(), "i18n.js", "const x = { en: 'a', ru: 'b' };\n");
    for mode in [Mode::Grouped, Mode::PerLine] {
        let report = scan_file(&p, "i18n.js", mode, &[]).unwrap();
        assert!(report.findings.is_empty());
    }
}

#[test]
fn closed_call_fragment_in_both_modes() {
    let dir = tempdir().unwrap();
    let p = write(dir.path(), "a.js", "foo()\n  bar: 1,\n})\n");
    let report = scan_file(&p, "a.js", Mode::Grouped, &[]).unwrap();
    let found = spans(&report);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].lines, vec!["  bar: 1,", "})"]);

    let report = scan_file(&p, "a.js", Mode::PerLine, &[]).unwrap();
    assert_eq!(candidates(&report).len(), 1);
    assert_eq!(candidates(&report)[0].line, 2);
    assert_eq!(candidates(&report)[0].previous, "foo()");
}

#[test]
fn unclosed_trailing_orphan_only_in_per_line_mode() {
    let dir = tempdir().unwrap();
    let p = write(dir.path(), "tail.js", "track()\n  event: name,");
    let report = scan_file(&p, "tail.js", Mode::Grouped, &[]).unwrap();
    assert!(report.findings.is_empty());
    let report = scan_file(&p, "tail.js", Mode::PerLine, &[]).unwrap();
    assert_eq!(candidates(&report)[0].line, 2);
}

#[test]
fn repeated_scans_render_identically() {
    let dir = tempdir().unwrap();
    let p = write(dir.path(), "index.js", COMPONENT);
    for mode in [Mode::Grouped, Mode::PerLine] {
        let a = scan_file(&p, "index.js", mode, &[]).unwrap();
        let b = scan_file(&p, "index.js", mode, &[]).unwrap();
        assert_eq!(a, b);
        assert_eq!(render_human(&a, false), render_human(&b, false));
        assert_eq!(compose_report_json(&a), compose_report_json(&b));
    }
}

#[test]
fn missing_file_is_an_input_error() {
    let dir = tempdir().unwrap();
    let err = scan_file(&dir.path().join("gone.js"), "gone.js", Mode::PerLine, &[]).unwrap_err();
    assert!(err.is_input_file());
    assert!(err.to_string().contains("gone.js"));
}
