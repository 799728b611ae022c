// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// cspell:words VTIME VMIN

//! Single bounded read of the input device into a small fixed capacity buffer.
//!
//! - [`InputBuffer`] holds the bytes of the last successful read, plus the cursor of the
//!   next byte to hand out.
//! - [`RawInputSource`] is the seam between the poller and the device. [`StdinSource`]
//!   reads fd 0 directly; tests use a scripted source instead.
//! - [`poll_input()`] performs one read and classifies it as [`PollResult`].

// Attach sources.
pub mod input_buffer;
pub mod poll;
pub mod raw_input_source;

// Re-export.
pub use input_buffer::*;
pub use poll::*;
pub use raw_input_source::*;
