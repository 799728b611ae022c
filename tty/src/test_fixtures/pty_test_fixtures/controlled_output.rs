// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Reporting helpers for the controlled process of a [`generate_pty_test!`] test.
//!
//! The controlled process may be in raw mode, where `\n` is not translated to `\r\n`,
//! so every line is terminated with [`CRLF`] explicitly.
//!
//! [`generate_pty_test!`]: crate::generate_pty_test

use crate::CRLF;
use std::io::{Write, stdout};

/// Printed once the controlled process is ready for input.
pub const READY_MARKER: &str = "CONTROLLED_READY";

/// Prefix of the last line of a controlled process whose checks all passed.
pub const SUCCESS_MARKER: &str = "SUCCESS:";

/// Prefix of the last line of a controlled process with a failed check.
pub const FAILURE_MARKER: &str = "FAILED:";

/// Prints `line` followed by [`CRLF`] and flushes.
///
/// # Panics
///
/// Panics if stdout can't be written.
pub fn controlled_print(line: &str) {
    let mut stdout = stdout().lock();
    write!(stdout, "{line}{CRLF}").expect("Failed to write stdout");
    stdout.flush().expect("Failed to flush stdout");
}

/// Reports a failed check and exits with status 1.
pub fn controlled_fail(message: &str) -> ! {
    controlled_print(&format!("{FAILURE_MARKER} {message}"));
    std::process::exit(1);
}

/// Reports that all checks passed and exits with status 0.
pub fn controlled_succeed(message: &str) -> ! {
    controlled_print(&format!("{SUCCESS_MARKER} {message}"));
    std::process::exit(0);
}
