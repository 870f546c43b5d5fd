///
/// @package flag-checker
///
/// @file CLI tests
/// @copyright 2025-present Christoph Kappel <christoph@unexist.dev>
/// @version $Id$
///
/// This program can be distributed under the terms of the GNU GPLv3.
/// See the file LICENSE for details.
///

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn run_checker(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_flag-checker"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Binary can be started")
}

fn write_input(dir: &TempDir, content: &str) -> String {
    let path = dir.path().join("flags.txt");

    fs::write(&path, content).unwrap();

    path.to_string_lossy().into_owned()
}

#[test]
fn should_report_flag_frequency() {
    let dir = TempDir::new().unwrap();
    let path = write_input(&dir, "flags: 0x00000005 0x00000001");

    let output = run_checker(&[&path]);

    assert!(output.status.success());

    let banner = "=".repeat(60);
    let expected = format!("Found 2 hex values\n\n{banner}\nANALYZING FLAGS\n{banner}\n\n\
        Flag frequency across 2 files:\n\n{:<50}   2/2 (100.0%)\n{:<50}   1/2 ( 50.0%)\n",
        "RF_Transactional", "RF_Public");

    assert_eq!(String::from_utf8_lossy(&output.stdout), expected);
}

#[test]
fn should_accept_hyphen_prefixed_filename() {
    let dir = TempDir::new().unwrap();

    fs::write(dir.path().join("-dump.txt"), "0x1").unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_flag-checker"))
        .arg("-dump.txt")
        .current_dir(dir.path())
        .env_remove("RUST_LOG")
        .output()
        .expect("Binary can be started");

    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(stdout.starts_with("Found 1 hex values\n\n"));
    assert!(stdout.ends_with(&format!("{:<50}   1/1 (100.0%)\n", "RF_Transactional")));
}

#[test]
fn should_fail_without_hex_values() {
    let dir = TempDir::new().unwrap();
    let path = write_input(&dir, "");

    let output = run_checker(&[&path]);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "No hex values found in file!\n");
}

#[test]
fn should_fail_on_missing_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing.txt");
    let path = path.to_string_lossy();

    let output = run_checker(&[&path]);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(String::from_utf8_lossy(&output.stdout), format!("Error: File '{}' not found!\n", path));
}

#[test]
fn should_print_usage() {
    for args in [&[][..], &["a.txt", "b.txt"][..]] {
        let output = run_checker(args);
        let program = Path::new(env!("CARGO_BIN_EXE_flag-checker"))
            .file_name().unwrap().to_string_lossy().into_owned();

        assert_eq!(output.status.code(), Some(1));
        assert_eq!(String::from_utf8_lossy(&output.stdout), format!("Usage: {} <filename>\n", program));
    }
}

#[test]
fn should_fail_on_invalid_utf8() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("binary.txt");

    fs::write(&path, [0x30, 0x78, 0x31, 0xff, 0xfe]).unwrap();

    let output = run_checker(&[&path.to_string_lossy()]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stdout).starts_with("Error: "));
}
