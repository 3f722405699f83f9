use std::io::{self, Write};

use crate::collect::Record;

const FENCE: &str = "```";

/// Writes one record: the relative path line, an opening fence carrying the
/// tag, the content with trailing whitespace trimmed, a closing fence and a
/// blank separator line.
pub fn write_record<W: Write>(out: &mut W, record: &Record) -> io::Result<()> {
    writeln!(out, "{}", record.relative_path.display())?;
    writeln!(out, "{}{}", FENCE, record.tag)?;
    writeln!(out, "{}", record.content.trim_end())?;
    writeln!(out, "{}", FENCE)?;
    writeln!(out)?;
    Ok(())
}
