///
/// @package flag-checker
///
/// @file Aggregate functions
/// @copyright 2025-present Christoph Kappel <christoph@unexist.dev>
/// @version $Id$
///
/// This program can be distributed under the terms of the GNU GPLv3.
/// See the file LICENSE for details.
///

use anyhow::{Context, Result};
use indexmap::IndexMap;
use itertools::Itertools;
use log::{debug, warn};
use stdext::function_name;
use crate::decode::FlagValue;

/// Flag name and how often it was set
pub type FlagCount = (&'static str, usize);

/// Count flags over all tokens
///
/// # Arguments
///
/// * `tokens` - Hex tokens as returned by the extractor
///
/// # Returns
///
/// A [`Result`] with either the counts sorted by descending frequency on success or otherwise
/// [`anyhow::Error`] when a token isn't valid hex
pub fn count_flags<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<FlagCount>> {
    let mut counts: IndexMap<&'static str, usize> = IndexMap::new();

    for token in tokens {
        let token = token.as_ref();
        let value: FlagValue = token.parse()
            .with_context(|| format!("Parsing of hex value `{}' failed", token))?;

        if value.width > u32::BITS {
            warn!("Value 0x{} is wider than {} bits, upper bits ignored", token, u32::BITS);
        }

        let names = value.names();

        debug!("{}: value={}, flags={:?}", function_name!(), value, names);

        for name in names {
            *counts.entry(name).or_insert(0) += 1;
        }
    }

    // sorted_by is stable, so ties keep the order names were first counted in
    Ok(counts.into_iter()
        .sorted_by(|a, b| b.1.cmp(&a.1))
        .collect())
}
