///
/// @package flag-checker
///
/// @file Main functions
/// @copyright 2025-present Christoph Kappel <christoph@unexist.dev>
/// @version $Id$
///
/// This program can be distributed under the terms of the GNU GPLv3.
/// See the file LICENSE for details.
///

use std::io;
use std::process::ExitCode;
use anyhow::Result;
use log::{debug, info};
use flag_checker::checker;
use flag_checker::config::{Config, ParseOutcome};
use flag_checker::error::console_message;
use flag_checker::logger;

fn print_version() {
    info!("{} {} - Copyright (c) 2025-present {}",
        env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"), env!("CARGO_PKG_AUTHORS"));
    info!("Released under the GNU Public License");
}

fn run(config: &Config) -> Result<()> {
    logger::init(config)?;

    debug!("Config: {:?}", config);

    print_version();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    checker::run(&config.filename, &mut out)
}

fn main() -> ExitCode {
    let config = match Config::try_parse_args(std::env::args_os()) {
        Ok(ParseOutcome::Run(config)) => config,
        Ok(ParseOutcome::Info(text)) => {
            print!("{}", text);

            return ExitCode::SUCCESS;
        },
        Err(err) => {
            println!("{}", err);

            return ExitCode::FAILURE;
        },
    };

    if let Err(err) = run(&config) {
        println!("{}", console_message(&err));

        return ExitCode::FAILURE;
    }

    info!("Exit");

    ExitCode::SUCCESS
}
