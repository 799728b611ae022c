// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// cspell:words termios VTIME VMIN deciseconds

//! # r3bl_tty
//!
//! Unbuffered, non-blocking keyboard input for interactive terminal programs, without
//! threads and without an async runtime.
//!
//! - [`TerminalModeController`] switches the controlling terminal into raw mode and
//!   guarantees that the original attributes are restored exactly once, on every exit
//!   path (including panics and early returns with `?`).
//! - [`poll_input()`] performs a single read that returns after a bounded idle timeout
//!   (`VMIN=0`, `VTIME=2`, ie: 200ms) even when no bytes are available.
//! - [`decode_escape_sequence()`] collapses the ANSI escape sequences for arrows,
//!   Home/End, Insert/Delete, Page Up/Down and function keys into one [`LogicalKey`].
//! - [`TaskRegistry`] holds [`BackgroundTask`]s that get ticked once per poll, which is
//!   how a status line clock can keep running while the program waits for a key.
//! - [`KeyReader`] ties these together, and [`TtySession`] is the ready to use
//!   combination of raw mode and a key reader over stdin.
//!
//! ```text
//! get_next_key()
//!   │
//!   ├─▶ unread bytes in InputBuffer? ──yes──▶ return next byte (no poll, no tick)
//!   │
//!   └─▶ loop { poll_input() ─▶ tick tasks } until Ready(n)
//!         │
//!         └─▶ ESC lead + n > 1? ─▶ decode_escape_sequence()
//!               │
//!               └─▶ return byte at cursor, advance cursor
//! ```
//!
//! ## Usage
//!
//! ```no_run
//! use r3bl_tty::{LogicalKey, TtySession, TtySessionConfig, EOT};
//!
//! fn main() -> miette::Result<()> {
//!     let mut session = TtySession::try_new(TtySessionConfig::default())?;
//!     loop {
//!         let key = session.get_next_key()?;
//!         if key == LogicalKey::Char(EOT) {
//!             break;
//!         }
//!     }
//!     // Raw mode is restored when `session` is dropped.
//!     Ok(())
//! }
//! ```

// Enforce strict error handling in production library code only. Tests and examples are
// allowed to use .unwrap() (workspace `Cargo.toml` config allows it).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach modules (re-exported below to provide clean public API).
pub mod background_tasks;
pub mod constants;
pub mod error;
pub mod escape_decoder;
pub mod input_poller;
pub mod key_reader;
pub mod log;
pub mod logical_key;
pub mod terminal_mode;

#[cfg(any(test, doc))]
pub mod test_fixtures;

// Re-export stable public API using glob imports for ergonomic, flat API surface.
pub use background_tasks::*;
pub use constants::*;
pub use error::*;
pub use escape_decoder::*;
pub use input_poller::*;
pub use key_reader::*;
pub use log::*;
pub use logical_key::*;
pub use terminal_mode::*;

#[cfg(any(test, doc))]
pub use test_fixtures::*;
