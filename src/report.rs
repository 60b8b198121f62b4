//! Standard-output reporting.
//!
//! The stdout contract is fixed: one header line per group, one line per
//! member path, a blank separator line, and (after reclamation) a single
//! total line with the raw byte count. Counts and timings go to the log,
//! never stdout.

use std::io::{self, Write};

use crate::similarity::SimilarGroup;

/// Write every group to `out`: header, member paths, blank separator.
///
/// # Errors
///
/// Returns any I/O error from the writer.
pub fn write_groups<W: Write, F>(out: &mut W, groups: &[SimilarGroup<'_, F>]) -> io::Result<()> {
    for group in groups {
        writeln!(out, "Similar images:")?;
        for member in group.members() {
            writeln!(out, "{}", member.path.display())?;
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Write the total-bytes-freed line.
///
/// # Errors
///
/// Returns any I/O error from the writer.
pub fn write_total_saved<W: Write>(out: &mut W, bytes: u64) -> io::Result<()> {
    writeln!(out, "Total space saved: {bytes} bytes")
}
