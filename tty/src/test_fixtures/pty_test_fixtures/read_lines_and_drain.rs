// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{ControlledChild, FAILURE_MARKER, SUCCESS_MARKER};
use portable_pty::PtyPair;
use std::io::{BufRead, BufReader, Read};

/// Reader for the controller side of a PTY.
pub type ControllerReader = BufReader<Box<dyn Read + Send>>;

/// Wraps a clone of the controller side reader of `pty_pair`.
///
/// # Panics
///
/// Panics if the reader can't be cloned.
pub fn controller_reader(pty_pair: &PtyPair) -> ControllerReader {
    BufReader::new(
        pty_pair
            .master
            .try_clone_reader()
            .expect("Failed to clone PTY reader"),
    )
}

/// Reads lines until one contains `marker` or [`FAILURE_MARKER`], or EOF. Trailing `\r`
/// and `\n` are stripped from every line. Returns the lines read (including the last
/// one) and whether `marker` was seen.
///
/// Lines written by the controlled process before it enters raw mode arrive with
/// `\r\n`, and lines written in raw mode should use `\r\n` explicitly, so splitting on
/// `\n` works for both.
pub fn read_until_marker(reader: &mut ControllerReader, marker: &str) -> (Vec<String>, bool) {
    let mut lines = vec![];
    let mut line = String::new();
    loop {
        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => return (lines, false),
            Ok(_) => {
                let trimmed = line.trim_end_matches(['\r', '\n']).to_string();
                eprintln!("📝 Controller read: {trimmed:?}");
                let found = trimmed.contains(marker);
                let failed = trimmed.contains(FAILURE_MARKER);
                lines.push(trimmed);
                if found || failed {
                    return (lines, found);
                }
            }
            // EIO once the controlled side closes.
            Err(_) => return (lines, false),
        }
    }
}

/// Closes the parent's handle to the controlled side, drains the controller reader
/// until EOF, then reaps the child. Returns whether the child exited successfully.
///
/// The drain keeps a child that is still writing (eg: flushing stdio in `exit()`) from
/// blocking on a full PTY buffer while the controller waits for it.
///
/// # Panics
///
/// Panics if waiting for the child fails.
pub fn drain_pty_and_wait(
    mut reader: ControllerReader,
    pty_pair: PtyPair,
    child: &mut ControlledChild,
) -> bool {
    drop(pty_pair);

    let mut discard = [0u8; 1024];
    while let Ok(count) = reader.read(&mut discard) {
        if count == 0 {
            break;
        }
    }

    let status = child.wait().expect("Failed to wait for controlled process");
    eprintln!("✅ Controlled process exited: {status:?}");
    status.success()
}

/// Reads until the controlled process reports [`SUCCESS_MARKER`], then drains the PTY
/// and reaps the child. Returns every line read.
///
/// # Panics
///
/// Panics if the controlled process reports [`FAILURE_MARKER`], closes the PTY before
/// reporting success, or exits with a failure status.
pub fn assert_controlled_success(
    mut reader: ControllerReader,
    pty_pair: PtyPair,
    mut child: ControlledChild,
) -> Vec<String> {
    let (lines, found) = read_until_marker(&mut reader, SUCCESS_MARKER);
    let exited_ok = drain_pty_and_wait(reader, pty_pair, &mut child);
    assert!(found, "Controlled process did not report success: {lines:#?}");
    assert!(exited_ok, "Controlled process exited with failure: {lines:#?}");
    lines
}
