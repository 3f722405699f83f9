//! Concatenates the source files under a directory into one text stream.
//!
//! Each matched file becomes its path relative to the root followed by its
//! content inside a fenced block tagged with a language name. Files that
//! cannot be read are skipped; the run carries on.
//!
//! ```no_run
//! use srcgrab::{grab, Config};
//!
//! let config = Config::new("/path/to/project")
//!     .with_pass(".hpp", "cpp")
//!     .with_pass(".cpp", "cpp");
//! let summary = grab(&config, &mut std::io::stdout().lock())?;
//! eprintln!("{} files", summary.emitted);
//! # Ok::<(), srcgrab::GrabError>(())
//! ```

pub mod cli;
pub mod collect;
pub mod config;
pub mod error;
pub mod render;

use std::io::Write;

use tracing::debug;

pub use collect::{collect, FileOutcome, Record, Skipped};
pub use config::{Config, ExtensionPass};
pub use error::{GrabError, SkipReason};

/// Counts for one run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub emitted: usize,
    pub skipped: usize,
}

/// Scans `config.root` pass by pass and writes every readable match to `out`.
///
/// Skipped entries are only logged at debug level. The only error is a
/// failure to write to `out`.
pub fn grab<W: Write>(config: &Config, out: &mut W) -> Result<Summary, GrabError> {
    let mut summary = Summary::default();

    for outcome in collect(config) {
        match outcome {
            FileOutcome::Record(record) => {
                render::write_record(out, &record)?;
                summary.emitted += 1;
            }
            FileOutcome::Skipped(skipped) => {
                debug!(path = %skipped.path.display(), reason = %skipped.reason, "skipping");
                summary.skipped += 1;
            }
        }
    }

    out.flush()?;
    debug!(
        root = %config.root.display(),
        emitted = summary.emitted,
        skipped = summary.skipped,
        "scan finished"
    );
    Ok(summary)
}
