use log::debug;
use std::path::Path;
use walkdir::WalkDir;

use crate::duration::get_duration;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Report every folder that directly holds MP4 files.
    pub verbose: bool,
}

/// Totals for one folder and everything below it.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct FolderResult {
    pub files_found: u64,
    pub folders_with_media: u64,
    pub duration_seconds: f64,
}

impl FolderResult {
    /// Result for the files held directly by a folder. The folder counts as
    /// a media folder iff at least one of those files had a duration.
    pub fn local(files_found: u64, duration_seconds: f64) -> Self {
        FolderResult {
            files_found,
            folders_with_media: if files_found > 0 { 1 } else { 0 },
            duration_seconds,
        }
    }

    pub fn merge(self, other: FolderResult) -> FolderResult {
        FolderResult {
            files_found: self.files_found + other.files_found,
            folders_with_media: self.folders_with_media + other.folders_with_media,
            duration_seconds: self.duration_seconds + other.duration_seconds,
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Stats {
    pub total_files: u64,
    pub total_folders_with_media: u64,
    pub total_duration_seconds: f64,
}

impl From<FolderResult> for Stats {
    fn from(result: FolderResult) -> Stats {
        Stats {
            total_files: result.files_found,
            total_folders_with_media: result.folders_with_media,
            total_duration_seconds: result.duration_seconds,
        }
    }
}

/// Receives the folders reported in verbose mode.
pub trait FolderSink {
    /// Called once per folder holding MP4 files directly, after its
    /// subfolders have been visited. `duration_seconds` only covers the files
    /// in that folder.
    fn folder(&mut self, path: &Path, duration_seconds: f64);
}

impl<F: FnMut(&Path, f64)> FolderSink for F {
    fn folder(&mut self, path: &Path, duration_seconds: f64) {
        self(path, duration_seconds)
    }
}

/// Returns true when the file name ends in `.mp4`, ignoring case.
pub fn is_mp4_file<P: AsRef<Path>>(path: P) -> bool {
    let name = match path.as_ref().file_name() {
        Some(name) => name.to_string_lossy(),
        None => return false,
    };
    match name.rfind('.') {
        Some(dot) => name[dot + 1..].eq_ignore_ascii_case("mp4"),
        None => false,
    }
}

/// Walks `path` depth-first and adds up the duration of every MP4 file in it.
///
/// Folders that can't be listed and entries that can't be classified are
/// skipped. Symbolic links are never followed.
pub fn scan<P, S>(path: P, options: &Options, sink: &mut S) -> FolderResult
where
    P: AsRef<Path>,
    S: FolderSink,
{
    let dir = path.as_ref();

    let mut local_files = 0;
    let mut local_duration = 0.0;
    let mut nested = FolderResult::default();

    let entries = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name();

    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                debug!("skipping entry of {}: {}", dir.display(), err);
                continue;
            }
        };

        let file_type = entry.file_type();
        if file_type.is_dir() {
            nested = nested.merge(scan(entry.path(), options, sink));
        } else if file_type.is_file() && is_mp4_file(entry.path()) {
            if let Some(seconds) = get_duration(entry.path()) {
                local_files += 1;
                local_duration += seconds;
            }
        }
    }

    if options.verbose && local_files > 0 {
        sink.folder(dir, local_duration);
    }

    FolderResult::local(local_files, local_duration).merge(nested)
}
