// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Human readable text for the `debug` diagnostics channel.
//!
//! This is separate from `tracing`: it is meant to be read on the terminal while keys
//! are pressed. Raw mode disables output post processing, so lines end with [`CRLF`].

use crate::{CRLF, InputBuffer, LogicalKey, fmt_hex};

/// Hex view of the first four slots of a buffer that starts with an escape sequence,
/// as it is about to be decoded. The first column is the four slots read as one little
/// endian word.
///
/// ```
/// use r3bl_tty::{InputBuffer, describe_escape_window};
///
/// let buffer = InputBuffer::from_read(b"\x1b[A");
/// assert_eq!(describe_escape_window(&buffer), " 00415b1b 1b 5b 41 00\r\n");
/// ```
#[must_use]
pub fn describe_escape_window(buffer: &InputBuffer) -> String {
    let window = buffer.window::<4>();
    let word = fmt_hex(u32::from_le_bytes(window).into(), 8);
    let bytes: Vec<String> = window.iter().map(|byte| fmt_hex((*byte).into(), 2)).collect();
    format!(" {word} {}{CRLF}", bytes.join(" "))
}

/// One key as shown in the diagnostics stream: a space followed by its description.
///
/// ```
/// use r3bl_tty::{ExtendedKey, LogicalKey, describe_key};
///
/// assert_eq!(describe_key(LogicalKey::Extended(ExtendedKey::Home)), " KEY_HOME");
/// assert_eq!(describe_key(LogicalKey::Char(0x03)), " ^C");
/// ```
#[must_use]
pub fn describe_key(key: LogicalKey) -> String { format!(" {key}") }

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ExtendedKey, KEY_BACKSPACE};
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test_case(b"\x1b[3~", " 7e335b1b 1b 5b 33 7e\r\n" ; "four byte sequence")]
    #[test_case(b"\x1b[15~", " 35315b1b 1b 5b 31 35\r\n" ; "only first four bytes shown")]
    #[test_case(b"\x1bx", " 0000781b 1b 78 00 00\r\n" ; "short read shows zeros")]
    fn test_describe_escape_window(input: &[u8], expected: &str) {
        assert_eq!(describe_escape_window(&InputBuffer::from_read(input)), expected);
    }

    #[test_case(LogicalKey::Extended(ExtendedKey::F9), " KEY_F9")]
    #[test_case(LogicalKey::Char(KEY_BACKSPACE), " 7f")]
    #[test_case(LogicalKey::Char(b'a'), " a")]
    fn test_describe_key(key: LogicalKey, expected: &str) {
        assert_eq!(describe_key(key), expected);
    }
}
