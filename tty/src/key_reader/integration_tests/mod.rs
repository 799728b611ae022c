// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! End to end tests of [`TtySession`] against a real PTY: keys written on the
//! controller side are decoded by the controlled process and reported back.
//!
//! Run with: `cargo test -p r3bl_tty --lib key_reader::integration_tests -- --nocapture`
//!
//! [`TtySession`]: crate::TtySession

// Attach sources.
mod test_keys_through_pty;
