//! CLI argument parsing via `clap`.

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "orphan-scan",
    version,
    about = "Find orphaned console.log fragments in a JavaScript file",
    long_about = "orphan-scan — a line-oriented heuristic scanner for `key: value,` lines left behind after an enclosing console.log({...}) was deleted.\n\nConfiguration precedence: CLI > orphan-scan.toml > defaults.",
    after_help = "Examples:\n  orphan-scan deep\n  orphan-scan lines src/app/page.js\n  orphan-scan lines src/app/page.js --output json --check",
    arg_required_else_help = true
)]
/// Top-level CLI options and subcommands.
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Args, Clone, Debug, Default)]
/// Options shared by both scan modes.
pub struct CommonOpts {
    #[arg(long, help = "Repository root (default: current dir)")]
    pub repo_root: Option<String>,
    #[arg(long, help = "Output mode: human|json (default: human)")]
    pub output: Option<String>,
    #[arg(long, action = clap::ArgAction::SetTrue, help = "Disable colored output")]
    pub no_color: bool,
    #[arg(long, action = clap::ArgAction::SetTrue, help = "Exit non-zero when findings exist")]
    pub check: bool,
}

#[derive(Subcommand)]
/// Scan modes.
pub enum Commands {
    /// Show version
    #[command(
        about = "Show version",
        long_about = "Print the current orphan-scan version."
    )]
    Version,
    /// Grouped-span scan
    #[command(
        about = "Group orphaned fragments up to their stray `})`",
        long_about = "Deep scan: report spans starting at an orphaned property line right after a closed call and ending at the next line that is exactly `})`. Scans the file from orphan-scan.toml or the built-in default.",
        after_help = "Examples:\n  orphan-scan deep\n  orphan-scan deep --repo-root ../web --output json"
    )]
    Deep {
        #[command(flatten)]
        opts: CommonOpts,
    },
    /// Per-line scan
    #[command(
        about = "Flag each orphaned property line",
        long_about = "Report every property-shaped line whose previous line does not open an object, call or array. No closer is required.",
        after_help = "Examples:\n  orphan-scan lines\n  orphan-scan lines src/components/Header.js"
    )]
    Lines {
        #[arg(help = "File to scan (default: from config or built-in path)")]
        path: Option<String>,
        #[command(flatten)]
        opts: CommonOpts,
    },
}
