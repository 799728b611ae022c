// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// cspell:words VTIME VMIN

use rustix::io::Errno;
use std::io;

/// A readable character device that returns after a bounded idle timeout.
///
/// Implementations must honor these return values, which [`poll_input()`] relies on:
/// - `Ok(n)` with `n > 0`: `n` bytes were written to the start of `buf`.
/// - `Ok(0)`: the idle timeout elapsed with nothing to read. Not an error.
/// - `Err(errno)`: the device failed.
///
/// [`poll_input()`]: crate::poll_input
pub trait RawInputSource {
    /// Performs exactly one read of at most `buf.len()` bytes.
    ///
    /// # Errors
    ///
    /// Returns the platform error code if the read fails.
    fn read_raw(&mut self, buf: &mut [u8]) -> Result<usize, Errno>;
}

/// Reads fd 0 directly, with no userspace buffering in between.
///
/// [`std::io::Stdin`] keeps an internal buffer, which would hide bytes that have already
/// left the tty from the next read. The idle timeout comes from the `VMIN` and `VTIME`
/// settings applied by [`TerminalModeController`].
///
/// [`TerminalModeController`]: crate::TerminalModeController
#[derive(Debug, Default, Clone, Copy)]
pub struct StdinSource;

impl RawInputSource for StdinSource {
    fn read_raw(&mut self, buf: &mut [u8]) -> Result<usize, Errno> {
        rustix::io::read(io::stdin(), buf)
    }
}
