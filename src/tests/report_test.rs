///
/// @package flag-checker
///
/// @file Report tests
/// @copyright 2025-present Christoph Kappel <christoph@unexist.dev>
/// @version $Id$
///
/// This program can be distributed under the terms of the GNU GPLv3.
/// See the file LICENSE for details.
///

use crate::report::{format_line, write_report};

#[test]
fn should_format_line() {
    assert_eq!(format_line("RF_Public", 1, 2),
        format!("{}{} {:>3}/2 ( 50.0%)", "RF_Public", " ".repeat(41), 1));
    assert_eq!(format_line("RF_Transactional", 2, 2),
        format!("{}{}   2/2 (100.0%)", "RF_Transactional", " ".repeat(34)));
}

#[test]
fn should_not_truncate_long_names() {
    let name = "RF_HighlightedName/RF_EliminateObject/RF_RemappedName/RF_Protected";

    assert_eq!(format_line(name, 7, 9), format!("{}   7/9 ( 77.8%)", name));
}

#[test]
fn should_write_report() {
    let mut out = Vec::new();

    write_report(&mut out, 2, &[("RF_Transactional", 2), ("RF_Public", 1)]).unwrap();

    let banner = "=".repeat(60);
    let expected = format!("{banner}\nANALYZING FLAGS\n{banner}\n\nFlag frequency across 2 files:\n\n\
        {:<50}   2/2 (100.0%)\n{:<50}   1/2 ( 50.0%)\n", "RF_Transactional", "RF_Public");

    assert_eq!(String::from_utf8(out).unwrap(), expected);
}

#[test]
fn should_write_header_without_counts() {
    let mut out = Vec::new();

    write_report(&mut out, 3, &[]).unwrap();

    let text = String::from_utf8(out).unwrap();

    assert!(text.ends_with("Flag frequency across 3 files:\n\n"));
}
