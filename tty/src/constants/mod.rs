// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Byte constants for keyboard input.
//!
//! - **`ascii_control`**: C0 control characters and the key aliases built on them
//! - **`input_sequences`**: byte literals of the escape sequences that the
//!   [`escape_decoder`] recognizes, and the raw mode read timing constants
//!
//! [`escape_decoder`]: mod@crate::escape_decoder

// Skip rustfmt for rest of file to preserve manual alignment.
// https://stackoverflow.com/a/75910283/2085356
#![cfg_attr(rustfmt, rustfmt_skip)]

// Private modules (hide internal structure).
mod ascii_control;
mod input_sequences;

// Public re-exports (flat API) for convenience.
pub use ascii_control::*;
pub use input_sequences::*;
