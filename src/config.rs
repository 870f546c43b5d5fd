///
/// @package flag-checker
///
/// @file Config functions
/// @copyright 2025-present Christoph Kappel <christoph@unexist.dev>
/// @version $Id$
///
/// This program can be distributed under the terms of the GNU GPLv3.
/// See the file LICENSE for details.
///

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use clap::Parser;
use clap::error::ErrorKind;
use crate::error::CheckerError;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Set logging level LEVEL
    #[arg(short = 'l', long = "level", default_value = "")]
    pub loglevel: String,

    /// Print debugging messages
    #[arg(short = 'D', long)]
    pub debug: bool,

    /// File to scan for hex values
    #[arg(allow_hyphen_values = true)]
    pub filename: PathBuf,
}

/// Outcome of parsing the command line
#[derive(Debug)]
pub enum ParseOutcome {
    /// Arguments are fine, carry on
    Run(Config),
    /// Help or version was requested; carries the text to print
    Info(String),
}

impl Config {
    /// Parse command line arguments
    ///
    /// # Arguments
    ///
    /// * `args` - Arguments including the program name
    ///
    /// # Returns
    ///
    /// A [`Result`] with either [`ParseOutcome`] on success or otherwise [`CheckerError::Usage`]
    pub fn try_parse_args<I, T>(args: I) -> Result<ParseOutcome, CheckerError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let args: Vec<OsString> = args.into_iter().map(Into::into).collect();

        match Config::try_parse_from(args.iter().cloned()) {
            Ok(config) => Ok(ParseOutcome::Run(config)),
            Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
                Ok(ParseOutcome::Info(err.render().to_string()))
            },
            // A lone argument is always the filename, even when it looks like an option
            Err(_) if 2 == args.len() => Ok(ParseOutcome::Run(Config {
                loglevel: String::new(),
                debug: false,
                filename: PathBuf::from(&args[1]),
            })),
            Err(_) => Err(CheckerError::Usage(program_name(args.first()))),
        }
    }
}

fn program_name(arg0: Option<&OsString>) -> String {
    arg0.and_then(|arg| Path::new(arg).file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| env!("CARGO_PKG_NAME").into())
}
