// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! PTY based tests for [`TerminalModeController`]. Each test spawns itself as the
//! controlled process of a real PTY, so stdin is a terminal there even when `cargo test`
//! itself runs without one.
//!
//! Run with: `cargo test -p r3bl_tty --lib terminal_mode::integration_tests -- --nocapture`
//!
//! [`TerminalModeController`]: crate::TerminalModeController

// Attach sources.
mod test_flag_verification;
mod test_restore_round_trip;
