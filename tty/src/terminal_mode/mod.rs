// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// cspell:words termios VTIME VMIN cfmakeraw deciseconds

//! Raw mode for the controlling terminal, with a bounded read timeout.
//!
//! ## Raw Mode vs Cooked Mode
//!
//! **Cooked Mode** (default):
//! - Input is line-buffered (waits for Enter key)
//! - Special characters are interpreted (Ctrl+C, Ctrl+D, etc.)
//! - Echoing is enabled (typed characters appear on screen)
//!
//! **Raw Mode** (as configured here):
//! - No line buffering, bytes are available immediately
//! - No special character processing, Ctrl+C arrives as `0x03`
//! - No echo
//! - 8 bit characters, no parity
//! - No output post processing, so output lines must end in `\r\n`
//!
//! ## Polling instead of blocking
//!
//! The usual raw mode setting is `VMIN=1, VTIME=0`, which makes `read()` block until at
//! least one byte arrives. This module uses `VMIN=0, VTIME=2` instead: a `read()`
//! returns as soon as bytes are available, or with zero bytes after 200ms of idle time.
//! That bounded wait is what lets [`KeyReader`] tick background tasks at a roughly fixed
//! cadence without a second thread or a timer.
//!
//! ```bash
//! # The same settings with stty, for comparison:
//! stty raw -echo min 0 time 2
//! ```
//!
//! ## Lifecycle
//!
//! [`TerminalModeController::enter_raw_mode()`] captures the original attributes once
//! and applies the derived raw configuration. The original attributes are reapplied
//! exactly once, either by an explicit [`TerminalModeController::restore()`] or when
//! the controller is dropped (including during unwinding).
//!
//! ## Platform Support
//!
//! - **Unix/Linux/macOS**: Uses rustix's safe termios API
//!
//! [`KeyReader`]: crate::KeyReader

// Private modules (hide internal structure).
mod raw_mode_core;
mod termios_dump;

// Re-export the public API (flat, ergonomic surface).
pub use raw_mode_core::*;
pub use termios_dump::*;

// Conditional re-export for automated integration tests (Unix only).
#[cfg(all(unix, any(test, doc)))]
pub mod integration_tests;
