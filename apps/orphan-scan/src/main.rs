//! orphan-scan CLI binary entry point.
//! Delegates to the library for scanning and prints results.

use clap::Parser;
use orphan_scan::cli::{Cli, Commands, CommonOpts};
use orphan_scan::{config, output, scan, utils, Mode};

fn run_scan(mode: Mode, path: Option<&str>, opts: &CommonOpts) {
    let eff = config::resolve_effective(
        opts.repo_root.as_deref(),
        path,
        opts.output.as_deref(),
        opts.no_color,
    );
    if eff.output != "json" {
        // Friendly note if no config was found
        if !eff.config_found {
            eprintln!(
                "{} No orphan-scan.toml found; using defaults.",
                utils::note_prefix(eff.color)
            );
        }
        if !eff.skip.is_empty() {
            eprintln!(
                "{} Extra skip substrings: [{}]",
                utils::info_prefix(eff.color),
                eff.skip.join(", ")
            );
        }
    }

    let report = match scan::scan_file(&eff.file, &eff.display, mode, &eff.skip) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("{} {}", utils::error_prefix(eff.color), e);
            std::process::exit(2);
        }
    };
    output::print_report(&report, &eff.output, eff.color);
    if opts.check && !report.findings.is_empty() {
        std::process::exit(1);
    }
}

fn main() {
    let cli = Cli::parse();
    match cli.cmd {
        Commands::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
        }
        Commands::Deep { opts } => run_scan(Mode::Grouped, None, &opts),
        Commands::Lines { path, opts } => run_scan(Mode::PerLine, path.as_deref(), &opts),
    }
}
