// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod controlled_output;
pub mod generate_pty_test;
pub mod read_lines_and_drain;

// Re-export.
pub use controlled_output::*;
pub use read_lines_and_drain::*;

/// Child process spawned into the controlled side of a PTY.
pub type ControlledChild = Box<dyn portable_pty::Child + Send + Sync>;
