// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// cspell:words termios errno

//! Errors for a terminal input session. See [`TtyError`] for details.

use rustix::io::Errno;

/// Errors from [`TtySession`], [`KeyReader`] and [`TerminalModeController`].
///
/// | Variant            | Cause                                              | Fatal to          |
/// | :----------------- | :------------------------------------------------- | :---------------- |
/// | [`TerminalSetup`]  | `tcgetattr()` or `tcsetattr()` failed at startup   | session startup   |
/// | [`InputRead`]      | `read()` on the input device returned an error     | active read loop  |
/// | [`Restore`]        | original attributes could not be reapplied         | nothing (logged)  |
/// | [`BackgroundTask`] | a registered task failed during a tick             | active read loop  |
///
/// There is no decoding error. An escape sequence that matches no known pattern is
/// delivered byte by byte as literal characters.
///
/// [`BackgroundTask`]: Self::BackgroundTask
/// [`InputRead`]: Self::InputRead
/// [`KeyReader`]: crate::KeyReader
/// [`Restore`]: Self::Restore
/// [`TerminalModeController`]: crate::TerminalModeController
/// [`TerminalSetup`]: Self::TerminalSetup
/// [`TtySession`]: crate::TtySession
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum TtyError {
    /// Capturing or applying terminal attributes failed, so raw input is not possible.
    #[error("Failed to {operation} terminal attributes")]
    #[diagnostic(
        code(r3bl_tty::terminal_setup),
        help("Make sure that stdin is connected to an interactive terminal (not a pipe)")
    )]
    TerminalSetup {
        /// Which step failed (`"capture"` or `"apply"`).
        operation: &'static str,
        #[source]
        source: Errno,
    },

    /// The input device reported an error (as opposed to an idle timeout).
    #[error("Failed to read from the input device (errno={code})")]
    #[diagnostic(code(r3bl_tty::input_read))]
    InputRead {
        /// Raw platform error code.
        code: i32,
        #[source]
        source: Errno,
    },

    /// Reapplying the original terminal attributes failed.
    #[error("Failed to restore original terminal attributes")]
    #[diagnostic(
        code(r3bl_tty::restore),
        help("Run `stty sane` (or `reset`) to recover the terminal")
    )]
    Restore {
        #[source]
        source: Errno,
    },

    /// A [`BackgroundTask`] returned an error from its tick. Tasks are not isolated from
    /// each other, so the remaining tasks in that tick did not run.
    ///
    /// [`BackgroundTask`]: crate::BackgroundTask
    #[error("Background task failed: {0}")]
    #[diagnostic(code(r3bl_tty::background_task))]
    BackgroundTask(miette::Report),
}

impl TtyError {
    /// Builds an [`TtyError::InputRead`] that carries the raw code for diagnostics.
    #[must_use]
    pub fn input_read(errno: Errno) -> Self {
        Self::InputRead {
            code: errno.raw_os_error(),
            source: errno,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_input_read_carries_raw_code() {
        let error = TtyError::input_read(Errno::IO);
        match error {
            TtyError::InputRead { code, source } => {
                assert_eq!(code, Errno::IO.raw_os_error());
                assert_eq!(source, Errno::IO);
            }
            other => panic!("unexpected variant: {other:?}"),
        }
    }

    #[test]
    fn test_background_task_message_includes_report() {
        let error = TtyError::BackgroundTask(miette::miette!("clock is broken"));
        assert_eq!(error.to_string(), "Background task failed: clock is broken");
    }

    #[test]
    fn test_terminal_setup_message_names_operation() {
        let error = TtyError::TerminalSetup {
            operation: "capture",
            source: Errno::NOTTY,
        };
        assert_eq!(error.to_string(), "Failed to capture terminal attributes");
    }
}
