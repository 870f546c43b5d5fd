///
/// @package flag-checker
///
/// @file Checker functions
/// @copyright 2025-present Christoph Kappel <christoph@unexist.dev>
/// @version $Id$
///
/// This program can be distributed under the terms of the GNU GPLv3.
/// See the file LICENSE for details.
///

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use anyhow::{Context, Result};
use log::{debug, info};
use stdext::function_name;
use crate::aggregate;
use crate::error::CheckerError;
use crate::extract;
use crate::report;

/// Read the whole input file
///
/// # Arguments
///
/// * `path` - Path of the input file
///
/// # Returns
///
/// A [`Result`] with either the content on success or otherwise [`anyhow::Error`]
pub fn read_input(path: &Path) -> Result<String> {
    let mut file = File::open(path)
        .map_err(|_| CheckerError::FileNotFound(path.to_path_buf()))?;

    let mut content = String::new();

    file.read_to_string(&mut content)
        .with_context(|| format!("Failed to read `{}'", path.display()))?;

    debug!("{}: path={}, bytes={}", function_name!(), path.display(), content.len());

    Ok(content)
}

/// Scan a file and write the flag report
///
/// # Arguments
///
/// * `path` - Path of the input file
/// * `out` - Sink for the report
///
/// # Returns
///
/// A [`Result`] with either [`unit`] on success or otherwise [`anyhow::Error`]
pub fn run<W: Write>(path: &Path, out: &mut W) -> Result<()> {
    info!("Reading file `{}'", path.display());

    let content = read_input(path)?;

    let tokens = extract::extract_hex_values(&content);

    if tokens.is_empty() {
        return Err(CheckerError::NoHexValues.into());
    }

    writeln!(out, "Found {} hex values\n", tokens.len())?;

    let counts = aggregate::count_flags(&tokens)?;

    report::write_report(out, tokens.len(), &counts)?;

    out.flush()?;

    Ok(())
}
