//! What to scan and how to label it.

use std::path::{Path, PathBuf};

/// Directory scanned by the binary.
///
/// Fixed at build time: `SRCGRAB_ROOT` if it was set when the crate was
/// compiled, otherwise the crate's own manifest directory.
pub const DEFAULT_ROOT: &str = match option_env!("SRCGRAB_ROOT") {
    Some(root) => root,
    None => env!("CARGO_MANIFEST_DIR"),
};

/// Passes run by the binary, in order: headers first, then sources.
pub const DEFAULT_PASSES: [(&str, &str); 2] = [(".hpp", "cpp"), (".cpp", "cpp")];

/// One recursive scan: every entry whose name ends with `suffix` is emitted
/// under the fence tag `tag`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionPass {
    pub suffix: String,
    pub tag: String,
}

impl ExtensionPass {
    pub fn new(suffix: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            suffix: suffix.into(),
            tag: tag.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub root: PathBuf,
    pub passes: Vec<ExtensionPass>,
}

impl Config {
    /// A config for `root` with no passes yet.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            passes: Vec::new(),
        }
    }

    /// Appends a pass. Passes run in the order they were added.
    pub fn with_pass(mut self, suffix: impl Into<String>, tag: impl Into<String>) -> Self {
        self.passes.push(ExtensionPass::new(suffix, tag));
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl Default for Config {
    fn default() -> Self {
        DEFAULT_PASSES
            .iter()
            .fold(Config::new(DEFAULT_ROOT), |config, (suffix, tag)| {
                config.with_pass(*suffix, *tag)
            })
    }
}
