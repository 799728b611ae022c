// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod background_task_fixtures;
pub mod captured_output;
pub mod pty_test_fixtures;
pub mod scripted_input_source;

// Re-export.
pub use background_task_fixtures::*;
pub use captured_output::*;
pub use pty_test_fixtures::*;
pub use scripted_input_source::*;
