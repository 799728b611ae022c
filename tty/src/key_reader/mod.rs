// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod key_diagnostics;
pub mod key_reader_impl;
pub mod tty_session;

// Re-export.
pub use key_diagnostics::*;
pub use key_reader_impl::*;
pub use tty_session::*;

#[cfg(all(unix, any(test, doc)))]
pub mod integration_tests;
