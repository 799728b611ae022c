// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// cspell:words termios VTIME VMIN deciseconds

//! Escape sequence byte literals and raw mode read timing.
//!
//! # Sequence shapes
//!
//! | Length | Shape                  | Keys                                   |
//! | :----- | :--------------------- | :------------------------------------- |
//! | 3      | `ESC [ <letter>`       | arrows, Home, End                      |
//! | 3      | `ESC O <letter>`       | F2, F3, F4 (SS3 form)                  |
//! | 4      | `ESC [ <digit> ~`      | Insert, Delete, Page Up, Page Down     |
//! | 5      | `ESC [ <digit><digit> ~` | F5, F6, F7, F8, F9, F12              |
//!
//! F1, F10 and F11 are not listed. Common desktop terminal emulators (eg: Xfce Terminal)
//! capture them for their own menus and full screen toggles, so they never reach the
//! program.

// ==================== Sequence components ====================

/// CSI bracket byte: `[` (0x5B).
pub const ANSI_CSI_BRACKET: u8 = b'[';

/// SS3 byte: `O` (0x4F). Second byte of `ESC O <letter>` sequences.
pub const ANSI_SS3_O: u8 = b'O';

/// Function key terminator: `~` (0x7E).
pub const ANSI_FUNCTION_KEY_TERMINATOR: u8 = b'~';

// ==================== 3 byte sequences ====================

pub const SEQ_ARROW_UP: &[u8] = b"\x1b[A";
pub const SEQ_ARROW_DOWN: &[u8] = b"\x1b[B";
pub const SEQ_ARROW_RIGHT: &[u8] = b"\x1b[C";
pub const SEQ_ARROW_LEFT: &[u8] = b"\x1b[D";
pub const SEQ_END: &[u8] = b"\x1b[F";
pub const SEQ_HOME: &[u8] = b"\x1b[H";
pub const SEQ_F2: &[u8] = b"\x1bOQ";
pub const SEQ_F3: &[u8] = b"\x1bOR";
pub const SEQ_F4: &[u8] = b"\x1bOS";

// ==================== 4 byte sequences ====================

pub const SEQ_INSERT: &[u8] = b"\x1b[2~";
pub const SEQ_DELETE: &[u8] = b"\x1b[3~";
pub const SEQ_PAGE_UP: &[u8] = b"\x1b[5~";
pub const SEQ_PAGE_DOWN: &[u8] = b"\x1b[6~";

// ==================== 5 byte sequences ====================

pub const SEQ_F5: &[u8] = b"\x1b[15~";
pub const SEQ_F6: &[u8] = b"\x1b[17~";
pub const SEQ_F7: &[u8] = b"\x1b[18~";
pub const SEQ_F8: &[u8] = b"\x1b[19~";
pub const SEQ_F9: &[u8] = b"\x1b[20~";
pub const SEQ_F12: &[u8] = b"\x1b[24~";

// ==================== Raw mode read timing ====================

/// `VMIN` while polling: a read may return with zero bytes.
pub const VMIN_POLL_MODE: u8 = 0;

/// `VTIME` while polling, in deciseconds. A read returns after 200ms of idle time.
pub const VTIME_POLL_MODE: u8 = 2;
