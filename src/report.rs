//! Console output of the scanner.

use std::env;
use std::path::Path;

use crate::{format_hms, FolderSink, Stats};

const COLOR_YELLOW: &str = "\x1b[33m";
const COLOR_GREEN: &str = "\x1b[32m";
const COLOR_RESET: &str = "\x1b[0m";

/// Longest folder path printed in verbose mode, in characters.
pub const DISPLAY_PATH_MAX: usize = 90;

/// Colors are on unless `NO_COLOR` is set.
pub fn colors_enabled() -> bool {
    env::var_os("NO_COLOR").is_none()
}

fn colorize(text: &str, color: &str, enabled: bool) -> String {
    if enabled {
        format!("{}{}{}", color, text, COLOR_RESET)
    } else {
        text.to_string()
    }
}

/// Shortens `path` to at most `max_len` characters by replacing its middle
/// with `...`.
pub fn truncate_path(path: &str, max_len: usize) -> String {
    let len = path.chars().count();
    if len <= max_len {
        return path.to_string();
    }

    let keep = (max_len / 2).saturating_sub(2);
    let head: String = path.chars().take(keep).collect();
    let tail: String = path.chars().skip(len - keep).collect();
    format!("{}...{}", head, tail)
}

pub fn banner(path: &Path) -> String {
    format!("🕒 Scanning folder: {}", path.display())
}

pub fn folder_line(path: &Path, duration_seconds: f64, colored: bool) -> String {
    let shown = truncate_path(&path.display().to_string(), DISPLAY_PATH_MAX);
    format!(
        "🟡 {} {}",
        format_hms(duration_seconds),
        colorize(&shown, COLOR_GREEN, colored)
    )
}

pub fn summary(stats: &Stats, colored: bool) -> String {
    let files = stats.total_files.to_string();
    let folders = stats.total_folders_with_media.to_string();
    let duration = format_hms(stats.total_duration_seconds).to_string();

    format!(
        "\n📊 Result:\n👌 Found {} MP4 files in {} folders.\n🏁 Total duration: {}",
        colorize(&files, COLOR_YELLOW, colored),
        colorize(&folders, COLOR_YELLOW, colored),
        colorize(&duration, COLOR_YELLOW, colored)
    )
}

/// Prints verbose folder lines to stdout.
#[derive(Debug, Clone, Copy)]
pub struct ConsoleSink {
    colored: bool,
}

impl ConsoleSink {
    pub fn new(colored: bool) -> Self {
        ConsoleSink { colored }
    }
}

impl FolderSink for ConsoleSink {
    fn folder(&mut self, path: &Path, duration_seconds: f64) {
        println!("{}", folder_line(path, duration_seconds, self.colored));
    }
}
