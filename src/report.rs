///
/// @package flag-checker
///
/// @file Report functions
/// @copyright 2025-present Christoph Kappel <christoph@unexist.dev>
/// @version $Id$
///
/// This program can be distributed under the terms of the GNU GPLv3.
/// See the file LICENSE for details.
///

use std::io::Write;
use anyhow::Result;
use crate::aggregate::FlagCount;

const BANNER_WIDTH: usize = 60;
const NAME_WIDTH: usize = 50;

/// Write the frequency table
///
/// # Arguments
///
/// * `out` - Sink to write to
/// * `total` - Number of analyzed hex values
/// * `counts` - Flag counts, already sorted
///
/// # Returns
///
/// A [`Result`] with either [`unit`] on success or otherwise [`anyhow::Error`]
pub fn write_report<W: Write>(out: &mut W, total: usize, counts: &[FlagCount]) -> Result<()> {
    let banner = "=".repeat(BANNER_WIDTH);

    writeln!(out, "{}", banner)?;
    writeln!(out, "ANALYZING FLAGS")?;
    writeln!(out, "{}", banner)?;

    writeln!(out, "\nFlag frequency across {} files:\n", total)?;

    for (name, count) in counts {
        writeln!(out, "{}", format_line(name, *count, total))?;
    }

    Ok(())
}

/// Format a single row of the table
pub fn format_line(name: &str, count: usize, total: usize) -> String {
    let percentage = count as f64 / total as f64 * 100.0;

    format!("{:<width$} {:>3}/{} ({:>5.1}%)", name, count, total, percentage, width = NAME_WIDTH)
}
