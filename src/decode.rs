///
/// @package flag-checker
///
/// @file Decode functions
/// @copyright 2025-present Christoph Kappel <christoph@unexist.dev>
/// @version $Id$
///
/// This program can be distributed under the terms of the GNU GPLv3.
/// See the file LICENSE for details.
///

use std::fmt;
use std::str::FromStr;
use crate::error::CheckerError;
use crate::flags::{ObjectFlags, FLAG_TABLE};

/// Hex digits that fit into the flag mask
const MASK_DIGITS: usize = 8;

/// Value of a single hex literal
#[derive(Default, Debug, PartialEq, Eq, Copy, Clone)]
pub struct FlagValue {
    /// Lower 32 bits of the literal, the only ones known flags can live in
    pub flags: ObjectFlags,
    /// Number of significant bits of the whole literal
    pub width: u32,
}

impl FlagValue {
    pub fn new(bits: u32) -> Self {
        Self {
            flags: ObjectFlags::from_bits_retain(bits),
            width: u32::BITS - bits.leading_zeros(),
        }
    }

    /// Names of all known flags set in this value
    pub fn names(&self) -> Vec<&'static str> {
        decode(self.flags.bits())
    }
}

impl fmt::Display for FlagValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:08X} (width={})", self.flags.bits(), self.width)
    }
}

impl FromStr for FlagValue {
    type Err = CheckerError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let digits = token.strip_prefix("0x")
            .or_else(|| token.strip_prefix("0X"))
            .unwrap_or(token);

        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(CheckerError::InvalidHex(token.into()));
        }

        // Literals may be arbitrarily wide; everything above the mask can't match
        let significant = digits.trim_start_matches('0');
        let low = &significant[significant.len().saturating_sub(MASK_DIGITS)..];

        let bits = if low.is_empty() {
            0
        } else {
            u32::from_str_radix(low, 16).map_err(|_| CheckerError::InvalidHex(token.into()))?
        };

        let width = match significant.chars().next().and_then(|c| c.to_digit(16)) {
            Some(lead) => (significant.len() - 1)
                .saturating_mul(4)
                .saturating_add((u32::BITS - lead.leading_zeros()) as usize),
            None => 0,
        };

        Ok(Self {
            flags: ObjectFlags::from_bits_retain(bits),
            width: u32::try_from(width).unwrap_or(u32::MAX),
        })
    }
}

/// Decode a value into flag names
///
/// # Arguments
///
/// * `value` - Raw flag value
///
/// # Returns
///
/// Names of all known flags set in `value`, by ascending bit
pub fn decode(value: u32) -> Vec<&'static str> {
    let flags = ObjectFlags::from_bits_retain(value);

    FLAG_TABLE.iter()
        .filter(|(bit, _)| flags.intersects(*bit))
        .map(|(_, name)| *name)
        .collect()
}
