///
/// @package flag-checker
///
/// @file Library functions
/// @copyright 2025-present Christoph Kappel <christoph@unexist.dev>
/// @version $Id$
///
/// This program can be distributed under the terms of the GNU GPLv3.
/// See the file LICENSE for details.
///

pub mod aggregate;
pub mod checker;
pub mod config;
pub mod decode;
pub mod error;
pub mod extract;
pub mod flags;
pub mod logger;
pub mod report;

#[cfg(test)]
mod tests;
