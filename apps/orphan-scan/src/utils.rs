//! Colored prefixes for stderr diagnostics.
//!
//! `color` is the effective setting from CLI/config; `NO_COLOR` still wins.

use owo_colors::OwoColorize;

fn colors_enabled(color: bool) -> bool {
    color && std::env::var_os("NO_COLOR").is_none()
}

fn prefix(label: &str, color: bool, paint: fn(&str) -> String) -> String {
    if colors_enabled(color) {
        paint(label)
    } else {
        label.to_string()
    }
}

pub fn error_prefix(color: bool) -> String {
    prefix("error:", color, |s| s.red().bold().to_string())
}

pub fn note_prefix(color: bool) -> String {
    prefix("note:", color, |s| s.yellow().bold().to_string())
}

pub fn info_prefix(color: bool) -> String {
    prefix("info:", color, |s| s.blue().bold().to_string())
}
