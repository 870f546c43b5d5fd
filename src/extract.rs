///
/// @package flag-checker
///
/// @file Extract functions
/// @copyright 2025-present Christoph Kappel <christoph@unexist.dev>
/// @version $Id$
///
/// This program can be distributed under the terms of the GNU GPLv3.
/// See the file LICENSE for details.
///

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use stdext::function_name;

static HEX_LITERAL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)0x([0-9a-f]+)").expect("Hex literal pattern is valid")
});

/// Collect all hex literals of a text
///
/// # Arguments
///
/// * `text` - Text to scan
///
/// # Returns
///
/// The digits of every `0x` literal without prefix, in order of appearance
pub fn extract_hex_values(text: &str) -> Vec<&str> {
    let tokens: Vec<&str> = HEX_LITERAL.captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|digits| digits.as_str())
        .collect();

    debug!("{}: tokens={}", function_name!(), tokens.len());

    tokens
}
