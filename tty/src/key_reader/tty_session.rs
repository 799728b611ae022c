// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{KeyReader, LogicalKey, SharedBackgroundTask, StdinSource,
            TerminalModeController, TtyError};

/// Construction options for a [`TtySession`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TtySessionConfig {
    /// Write the terminal attribute dumps and a description of every key to stdout.
    pub debug: bool,
}

/// Raw mode on stdin plus a [`KeyReader`] over it.
///
/// Creating a session switches the terminal into raw mode. The original attributes are
/// restored by [`finish()`](Self::finish), or when the session is dropped.
///
/// ```no_run
/// use r3bl_tty::{TtySession, TtySessionConfig};
///
/// let mut session = TtySession::try_new(TtySessionConfig { debug: true })?;
/// let key = session.get_next_key()?;
/// session.finish()?;
/// println!("{key}");
/// # Ok::<(), r3bl_tty::TtyError>(())
/// ```
#[derive(Debug)]
pub struct TtySession {
    key_reader: KeyReader<StdinSource>,
    terminal_mode: TerminalModeController,
}

impl TtySession {
    /// # Errors
    ///
    /// Returns [`TtyError::TerminalSetup`] if stdin is not a terminal, or its attributes
    /// can't be changed.
    pub fn try_new(config: TtySessionConfig) -> Result<Self, TtyError> {
        let terminal_mode = TerminalModeController::enter_raw_mode(config.debug)?;
        let key_reader = KeyReader::new(StdinSource, config.debug);

        tracing::debug!(message = "TtySession started", config = ?config);

        Ok(Self {
            key_reader,
            terminal_mode,
        })
    }

    /// See [`KeyReader::add_background_task()`].
    pub fn add_background_task(&mut self, task: SharedBackgroundTask) {
        self.key_reader.add_background_task(task);
    }

    /// See [`KeyReader::get_next_key()`].
    ///
    /// # Errors
    ///
    /// See [`KeyReader::get_next_key()`].
    pub fn get_next_key(&mut self) -> Result<LogicalKey, TtyError> {
        self.key_reader.get_next_key()
    }

    #[must_use]
    pub fn terminal_mode(&self) -> &TerminalModeController { &self.terminal_mode }

    #[must_use]
    pub fn key_reader(&self) -> &KeyReader<StdinSource> { &self.key_reader }

    /// Restores the original terminal attributes and ends the session, reporting a
    /// restore failure instead of only logging it (as [`Drop`] does).
    ///
    /// # Errors
    ///
    /// Returns [`TtyError::Restore`] if the original attributes can't be applied.
    pub fn finish(mut self) -> Result<(), TtyError> {
        let result = self.terminal_mode.restore();
        tracing::debug!(message = "TtySession finished", ok = %result.is_ok());
        result
    }
}
