// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Cooperative background tasks, ticked by the [`KeyReader`](crate::KeyReader) once
//! per poll.
//!
//! A poll returns after at most 200ms, so a registered task runs roughly 5 times per
//! second while the user is not typing, and once per keystroke (or burst of keystrokes)
//! while they are. There is no thread and no timer; a task that blocks stalls input.

// Attach sources.
pub mod background_task;
pub mod task_registry;

// Re-export.
pub use background_task::*;
pub use task_registry::*;
