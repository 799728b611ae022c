// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! `tracing` setup for programs that use this crate.
//!
//! Logging is disabled until one of [`try_initialize_logging_global()`] or
//! [`try_initialize_logging_thread_local()`] is called with a level other than
//! [`LevelFilter::OFF`](tracing_core::LevelFilter::OFF).
//!
//! While the terminal is in raw mode, output post processing is off and a display layer
//! would interleave with the program's own output. Prefer [`WriterConfig::File`] there.

// Attach sources.
pub mod rolling_file_appender_impl;
pub mod tracing_config;
pub mod tracing_init;

// Re-export.
pub use tracing_config::*;
pub use tracing_init::*;
