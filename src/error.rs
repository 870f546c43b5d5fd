///
/// @package flag-checker
///
/// @file Error functions
/// @copyright 2025-present Christoph Kappel <christoph@unexist.dev>
/// @version $Id$
///
/// This program can be distributed under the terms of the GNU GPLv3.
/// See the file LICENSE for details.
///

use std::fmt;
use std::path::PathBuf;

/// Failures with a fixed wording on the console
#[derive(Debug, PartialEq)]
pub enum CheckerError {
    /// Wrong arguments; carries the program name
    Usage(String),
    /// Input file cannot be opened
    FileNotFound(PathBuf),
    /// Input contains no hex literal at all
    NoHexValues,
    /// Token isn't a valid hex number
    InvalidHex(String),
}

impl fmt::Display for CheckerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckerError::Usage(program) => write!(f, "Usage: {} <filename>", program),
            CheckerError::FileNotFound(path) => write!(f, "Error: File '{}' not found!", path.display()),
            CheckerError::NoHexValues => write!(f, "No hex values found in file!"),
            CheckerError::InvalidHex(token) => write!(f, "Error: invalid hex literal '{}'", token),
        }
    }
}

impl std::error::Error for CheckerError {}

/// Render any error the way it is printed to stdout
///
/// # Arguments
///
/// * `err` - Error to render
///
/// # Returns
///
/// The console line for that error
pub fn console_message(err: &anyhow::Error) -> String {
    match err.downcast_ref::<CheckerError>() {
        Some(checker_err) => checker_err.to_string(),
        None => format!("Error: {:#}", err),
    }
}
