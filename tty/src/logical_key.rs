// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The single decoded value that is delivered to the caller per input event.
//!
//! A [`LogicalKey`] fits in one byte. Literal characters keep their raw byte value, and
//! the [`ExtendedKey`] codes live in `0x81..=0x9C`, a range that plain ASCII input never
//! produces. This lets the [`InputBuffer`] hold decoded keys and raw bytes side by side,
//! and lets a single byte tell a literal apart from an extended key.
//!
//! [`InputBuffer`]: crate::InputBuffer

use crate::{DEL, KEY_BACKSPACE, KEY_CANCEL, KEY_ENTER, SP};
use std::fmt::{Display, Formatter, Result};
use strum_macros::{EnumCount, EnumIter, IntoStaticStr};

/// Cursor, editing, and function keys that arrive as escape sequences.
///
/// The discriminant is the byte value that the decoder writes into the
/// [`InputBuffer`](crate::InputBuffer).
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumCount, IntoStaticStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ExtendedKey {
    ArrowDown = 0x81,
    ArrowLeft = 0x82,
    ArrowRight = 0x83,
    ArrowUp = 0x84,
    Delete = 0x85,
    End = 0x86,
    Home = 0x87,
    Insert = 0x88,
    PageDown = 0x89,
    PageUp = 0x8A,
    F1 = 0x91,
    F2 = 0x92,
    F3 = 0x93,
    F4 = 0x94,
    F5 = 0x95,
    F6 = 0x96,
    F7 = 0x97,
    F8 = 0x98,
    F9 = 0x99,
    F10 = 0x9A,
    F11 = 0x9B,
    F12 = 0x9C,
}

impl ExtendedKey {
    /// The byte value of this key.
    #[must_use]
    pub const fn as_byte(self) -> u8 { self as u8 }

    /// Returns the extended key for `byte`, or [`None`] if `byte` is a literal.
    #[must_use]
    pub const fn from_byte(byte: u8) -> Option<Self> {
        let it = match byte {
            0x81 => Self::ArrowDown,
            0x82 => Self::ArrowLeft,
            0x83 => Self::ArrowRight,
            0x84 => Self::ArrowUp,
            0x85 => Self::Delete,
            0x86 => Self::End,
            0x87 => Self::Home,
            0x88 => Self::Insert,
            0x89 => Self::PageDown,
            0x8A => Self::PageUp,
            0x91 => Self::F1,
            0x92 => Self::F2,
            0x93 => Self::F3,
            0x94 => Self::F4,
            0x95 => Self::F5,
            0x96 => Self::F6,
            0x97 => Self::F7,
            0x98 => Self::F8,
            0x99 => Self::F9,
            0x9A => Self::F10,
            0x9B => Self::F11,
            0x9C => Self::F12,
            _ => return None,
        };
        Some(it)
    }

    /// Name used in diagnostics output, eg: `KEY_ARROW_UP`.
    #[must_use]
    pub fn name(self) -> String {
        let it: &'static str = self.into();
        format!("KEY_{it}")
    }
}

/// Either a literal byte or one of the [`ExtendedKey`] codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogicalKey {
    Char(u8),
    Extended(ExtendedKey),
}

impl LogicalKey {
    pub const BACKSPACE: Self = Self::Char(KEY_BACKSPACE);
    pub const CANCEL: Self = Self::Char(KEY_CANCEL);
    pub const ENTER: Self = Self::Char(KEY_ENTER);

    /// The byte that represents this key in the input buffer.
    #[must_use]
    pub const fn as_byte(self) -> u8 {
        match self {
            Self::Char(byte) => byte,
            Self::Extended(key) => key.as_byte(),
        }
    }

    #[must_use]
    pub const fn is_extended(self) -> bool { matches!(self, Self::Extended(_)) }
}

impl From<u8> for LogicalKey {
    fn from(byte: u8) -> Self {
        match ExtendedKey::from_byte(byte) {
            Some(key) => Self::Extended(key),
            None => Self::Char(byte),
        }
    }
}

impl From<ExtendedKey> for LogicalKey {
    fn from(key: ExtendedKey) -> Self { Self::Extended(key) }
}

/// Human readable description of a key, for the diagnostics channel.
///
/// - Extended keys by name: `KEY_PAGE_UP`.
/// - Control characters in caret notation: `^C`.
/// - [`DEL`] and above as two hex digits: `7f`.
/// - Everything else as the character itself.
impl Display for LogicalKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match *self {
            Self::Extended(key) => write!(f, "{}", key.name()),
            Self::Char(byte) if byte < SP => write!(f, "^{}", char::from(byte + 0x40)),
            Self::Char(byte) if byte >= DEL => write!(f, "{}", fmt_hex(byte.into(), 2)),
            Self::Char(byte) => write!(f, "{}", char::from(byte)),
        }
    }
}

/// Zero padded lowercase hex, eg: `fmt_hex(0x1b, 4)` is `001b`.
#[must_use]
pub fn fmt_hex(value: u64, width: usize) -> String { format!("{value:0width$x}") }
