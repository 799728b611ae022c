// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! C0 control characters as they arrive from a terminal in raw mode.
//!
//! In raw mode the line discipline does not interpret any of these, so Ctrl+C arrives
//! as [`ETX`] and Ctrl+D as [`EOT`] instead of generating a signal or an end of file.

/// Ctrl+C (end of text).
pub const ETX: u8 = 0x03;

/// Ctrl+D (end of transmission).
pub const EOT: u8 = 0x04;

/// Backspace (Ctrl+H).
pub const BS: u8 = 0x08;

/// Horizontal tab.
pub const TAB: u8 = 0x09;

/// Line feed.
pub const LF: u8 = 0x0A;

/// Carriage return. This is what the Enter key sends when `ICRNL` is disabled.
pub const CR: u8 = 0x0D;

/// Cancel (Ctrl+X).
pub const CAN: u8 = 0x18;

/// Escape. Lead byte of every escape sequence.
pub const ESC: u8 = 0x1B;

/// Space. Everything below this is a control character.
pub const SP: u8 = 0x20;

/// Delete. Most terminal emulators send this for the Backspace key.
pub const DEL: u8 = 0x7F;

/// The Backspace key.
pub const KEY_BACKSPACE: u8 = DEL;

/// The cancel key (Ctrl+X).
pub const KEY_CANCEL: u8 = CAN;

/// The Enter key.
pub const KEY_ENTER: u8 = CR;

/// Line terminator to use while the terminal is in raw mode. `OPOST` is disabled, so a
/// bare `\n` moves the cursor down without returning it to column 0.
pub const CRLF: &str = "\r\n";
