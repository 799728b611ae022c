// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// cspell:words termios VTIME VMIN cfmakeraw IGNBRK BRKINT PARMRK ISTRIP INLCR IGNCR
// cspell:words ICRNL IXON OPOST ECHONL ICANON ISIG IEXTEN CSIZE PARENB

//! Raw mode controller with scoped acquisition and guaranteed restore.

use crate::{CRLF, TermiosDump, TtyError, VMIN_POLL_MODE, VTIME_POLL_MODE};
use rustix::termios::{self, ControlModes, InputModes, LocalModes, OptionalActions,
                      OutputModes, SpecialCodeIndex, Termios};
use std::{fmt::{Debug, Formatter},
          io::{self, Write}};

/// Derives the raw, polling configuration from the `original` attributes.
///
/// Same flag masking as `cfmakeraw()`, except for the read timing: `VMIN=0` and
/// `VTIME=2`, so that a read returns after 200ms of idle time instead of blocking.
#[must_use]
pub fn derive_raw_termios(original: &Termios) -> Termios {
    let mut it = original.clone();

    it.input_modes.remove(
        InputModes::IGNBRK
            | InputModes::BRKINT
            | InputModes::PARMRK
            | InputModes::ISTRIP
            | InputModes::INLCR
            | InputModes::IGNCR
            | InputModes::ICRNL
            | InputModes::IXON,
    );
    it.output_modes.remove(OutputModes::OPOST);
    it.local_modes.remove(
        LocalModes::ECHO
            | LocalModes::ECHONL
            | LocalModes::ICANON
            | LocalModes::ISIG
            | LocalModes::IEXTEN,
    );
    it.control_modes
        .remove(ControlModes::CSIZE | ControlModes::PARENB);
    it.control_modes.insert(ControlModes::CS8);

    it.special_codes[SpecialCodeIndex::VMIN] = VMIN_POLL_MODE;
    it.special_codes[SpecialCodeIndex::VTIME] = VTIME_POLL_MODE;

    it
}

/// Owns the raw mode lifecycle of the controlling terminal (stdin).
///
/// Holds two snapshots: the `original` attributes (captured once, never modified) and
/// the `raw` attributes derived from them. The original attributes are reapplied
/// exactly once, by [`restore()`] or by [`Drop`], whichever comes first.
///
/// ```no_run
/// use r3bl_tty::TerminalModeController;
///
/// {
///     let _raw_mode = TerminalModeController::enter_raw_mode(false)?;
///     // Terminal is now in raw mode.
/// } // Original attributes are restored here.
/// # Ok::<(), r3bl_tty::TtyError>(())
/// ```
///
/// [`restore()`]: Self::restore
pub struct TerminalModeController {
    original: Termios,
    raw: Termios,
    is_restored: bool,
}

impl TerminalModeController {
    /// Captures the current attributes of stdin and applies the raw configuration
    /// immediately.
    ///
    /// If `debug` is set, a field by field hex dump of both attribute sets is written to
    /// stdout. This is for observability only.
    ///
    /// # Errors
    ///
    /// Returns [`TtyError::TerminalSetup`] if the attributes can't be captured (eg: stdin
    /// is not a tty) or can't be applied.
    pub fn enter_raw_mode(debug: bool) -> Result<Self, TtyError> {
        let stdin = io::stdin();

        let original = termios::tcgetattr(&stdin).map_err(|source| {
            TtyError::TerminalSetup {
                operation: "capture",
                source,
            }
        })?;

        let raw = derive_raw_termios(&original);

        termios::tcsetattr(&stdin, OptionalActions::Now, &raw).map_err(|source| {
            TtyError::TerminalSetup {
                operation: "apply",
                source,
            }
        })?;

        // % is Display, ? is Debug.
        tracing::debug!(
            message = "Entered raw mode",
            vmin = %VMIN_POLL_MODE,
            vtime = %VTIME_POLL_MODE,
        );

        if debug {
            write_termios_dumps(&original, &raw);
        }

        Ok(Self {
            original,
            raw,
            is_restored: false,
        })
    }

    /// Reapplies the original attributes. Only the first call does anything; later calls
    /// (and the one from [`Drop`]) are no-ops, even if the first attempt failed.
    ///
    /// # Errors
    ///
    /// Returns [`TtyError::Restore`] if the attributes can't be applied.
    pub fn restore(&mut self) -> Result<(), TtyError> {
        if self.is_restored {
            return Ok(());
        }
        self.is_restored = true;

        termios::tcsetattr(io::stdin(), OptionalActions::Now, &self.original)
            .map_err(|source| TtyError::Restore { source })?;

        tracing::debug!(message = "Restored original terminal attributes");
        Ok(())
    }

    /// The attributes captured before raw mode was entered.
    #[must_use]
    pub fn original(&self) -> &Termios { &self.original }

    /// The attributes that were applied for raw mode.
    #[must_use]
    pub fn raw(&self) -> &Termios { &self.raw }

    #[must_use]
    pub fn is_restored(&self) -> bool { self.is_restored }
}

impl Drop for TerminalModeController {
    fn drop(&mut self) {
        if let Err(error) = self.restore() {
            tracing::error!(
                message = "Failed to restore terminal attributes on drop",
                error = ?error,
            );
        }
    }
}

impl Debug for TerminalModeController {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TerminalModeController")
            .field("is_restored", &self.is_restored)
            .finish_non_exhaustive()
    }
}

fn write_termios_dumps(original: &Termios, raw: &Termios) {
    let mut stdout = io::stdout().lock();
    let result = write!(
        stdout,
        "{}{}{CRLF}",
        TermiosDump(original),
        TermiosDump(raw)
    )
    .and_then(|()| stdout.flush());
    if let Err(error) = result {
        tracing::warn!(message = "Failed to write termios dump", error = ?error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// [`Termios`] has no public constructor, so a real value is needed as a seed. The
    /// cooked flags are forced on top of it.
    fn cooked_termios(seed: &Termios) -> Termios {
        let mut it = seed.clone();
        it.input_modes.insert(InputModes::ICRNL | InputModes::IXON | InputModes::BRKINT);
        it.output_modes.insert(OutputModes::OPOST);
        it.local_modes.insert(
            LocalModes::ECHO | LocalModes::ICANON | LocalModes::ISIG | LocalModes::IEXTEN,
        );
        it.control_modes.insert(ControlModes::PARENB);
        it.special_codes[SpecialCodeIndex::VMIN] = 1;
        it.special_codes[SpecialCodeIndex::VTIME] = 0;
        it
    }

    #[test]
    fn test_derive_raw_termios_masks_cooked_flags() {
        // The PTY based `test_raw_mode_flags` covers this when stdin is not a tty.
        let Ok(seed) = termios::tcgetattr(io::stdin()) else {
            return;
        };
        let cooked = cooked_termios(&seed);
        let raw = derive_raw_termios(&cooked);

        assert!(!raw.local_modes.intersects(
            LocalModes::ECHO | LocalModes::ICANON | LocalModes::ISIG | LocalModes::IEXTEN
        ));
        assert!(!raw.input_modes.intersects(InputModes::ICRNL | InputModes::IXON));
        assert!(!raw.output_modes.contains(OutputModes::OPOST));
        assert!(!raw.control_modes.contains(ControlModes::PARENB));
        assert!(raw.control_modes.contains(ControlModes::CS8));
        assert_eq!(raw.special_codes[SpecialCodeIndex::VMIN], VMIN_POLL_MODE);
        assert_eq!(raw.special_codes[SpecialCodeIndex::VTIME], VTIME_POLL_MODE);

        // The original is never modified.
        assert!(cooked.local_modes.contains(LocalModes::ICANON));
    }
}
