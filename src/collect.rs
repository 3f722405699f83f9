//! Walking the root and turning matches into records.

use std::fs;
use std::path::{Path, PathBuf};

use glob::{MatchOptions, Pattern};
use walkdir::WalkDir;

use crate::config::{Config, ExtensionPass};
use crate::error::SkipReason;

const NAME_MATCH: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: false,
    require_literal_leading_dot: false,
};

/// A matched file that was read successfully.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Path relative to the scanned root.
    pub relative_path: PathBuf,
    pub tag: String,
    /// Decoded content, not yet trimmed.
    pub content: String,
}

/// A matched entry that produced no record.
#[derive(Debug)]
pub struct Skipped {
    pub path: PathBuf,
    pub reason: SkipReason,
}

#[derive(Debug)]
pub enum FileOutcome {
    Record(Record),
    Skipped(Skipped),
}

/// Runs every pass of `config` in order.
///
/// All outcomes of one pass are yielded before the next pass starts walking.
pub fn collect(config: &Config) -> impl Iterator<Item = FileOutcome> + '_ {
    config
        .passes
        .iter()
        .flat_map(move |pass| scan(config.root(), pass))
}

/// A single pass over `root`.
///
/// Entries are visited depth first, each directory's children sorted by
/// name. Symlinks are not followed. The root itself is never a candidate.
pub fn scan<'a>(root: &'a Path, pass: &'a ExtensionPass) -> impl Iterator<Item = FileOutcome> + 'a {
    let matches = name_matcher(&pass.suffix);

    WalkDir::new(root)
        .min_depth(1)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_map(move |entry| match entry {
            Ok(entry) => {
                let name = entry.file_name().to_string_lossy();
                if !matches(&*name) {
                    return None;
                }
                Some(read_match(root, entry.path(), &pass.tag))
            }
            Err(err) => {
                let path = err.path().unwrap_or(root).to_path_buf();
                Some(FileOutcome::Skipped(Skipped {
                    path,
                    reason: SkipReason::Walk(err),
                }))
            }
        })
}

fn name_matcher(suffix: &str) -> impl Fn(&str) -> bool {
    let pattern = Pattern::new(&format!("*{}", Pattern::escape(suffix))).ok();
    let suffix = suffix.to_owned();

    move |name| match &pattern {
        Some(pattern) => pattern.matches_with(name, NAME_MATCH),
        None => name.ends_with(&suffix),
    }
}

fn read_match(root: &Path, path: &Path, tag: &str) -> FileOutcome {
    match fs::read(path) {
        Ok(bytes) => FileOutcome::Record(Record {
            relative_path: path.strip_prefix(root).unwrap_or(path).to_path_buf(),
            tag: tag.to_owned(),
            content: decode_lossy(&bytes),
        }),
        Err(err) => FileOutcome::Skipped(Skipped {
            path: path.to_path_buf(),
            reason: SkipReason::Read(err),
        }),
    }
}

/// Decodes UTF-8, dropping invalid sequences, and folds `\r\n` and lone `\r`
/// into `\n`.
pub fn decode_lossy(bytes: &[u8]) -> String {
    let mut text = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        text.push_str(chunk.valid());
    }

    if text.contains('\r') {
        text = text.replace("\r\n", "\n").replace('\r', "\n");
    }
    text
}
