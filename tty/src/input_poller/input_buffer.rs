// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::fmt_hex;
use std::fmt::{Debug, Formatter, Result};

/// Capacity of the [`InputBuffer`]. Must hold the longest recognized escape sequence
/// (5 bytes) plus the sentinel slot.
pub const INPUT_BUFFER_CAPACITY: usize = 16;

/// Slot that is cleared before every read, so that a 3 byte sequence can be compared as
/// a fixed 4 byte window without looking at bytes left over from an earlier read.
pub const SENTINEL_INDEX: usize = 3;

/// Fixed capacity buffer of raw input bytes.
///
/// - `count`: number of valid bytes from the last successful read.
/// - `cursor`: index of the next byte to hand out.
///
/// Invariant: `0 <= cursor <= count <= INPUT_BUFFER_CAPACITY`.
///
/// The whole valid region is replaced by each successful read (which also resets the
/// cursor to 0). The escape decoder may then [`collapse()`] a sequence, which writes the
/// decoded key byte over the last byte of the sequence and moves the cursor to it.
///
/// [`collapse()`]: Self::collapse
#[derive(Clone, PartialEq, Eq)]
pub struct InputBuffer {
    bytes: [u8; INPUT_BUFFER_CAPACITY],
    count: usize,
    cursor: usize,
}

impl Default for InputBuffer {
    fn default() -> Self { Self::new() }
}

impl InputBuffer {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            bytes: [0; INPUT_BUFFER_CAPACITY],
            count: 0,
            cursor: 0,
        }
    }

    /// A buffer that looks as if a read had just returned `bytes`. Anything beyond
    /// [`INPUT_BUFFER_CAPACITY`] is dropped, just like a short read would.
    #[must_use]
    pub fn from_read(bytes: &[u8]) -> Self {
        let mut it = Self::new();
        let count = bytes.len().min(INPUT_BUFFER_CAPACITY);
        it.read_target()[..count].copy_from_slice(&bytes[..count]);
        it.commit_read(count);
        it
    }

    #[must_use]
    pub fn count(&self) -> usize { self.count }

    #[must_use]
    pub fn cursor(&self) -> usize { self.cursor }

    #[must_use]
    pub fn has_unread(&self) -> bool { self.cursor < self.count }

    /// Bytes of the last read (after decoding, if any).
    #[must_use]
    pub fn valid_bytes(&self) -> &[u8] { &self.bytes[..self.count] }

    /// The first `N` slots, regardless of `count`. Slots past `count` hold zeros or stale
    /// bytes; the sentinel slot is always zero right after a short read.
    #[must_use]
    pub fn window<const N: usize>(&self) -> [u8; N] {
        let mut it = [0; N];
        let len = N.min(INPUT_BUFFER_CAPACITY);
        it[..len].copy_from_slice(&self.bytes[..len]);
        it
    }

    /// Returns the byte at the cursor and advances the cursor.
    pub fn take_next(&mut self) -> Option<u8> {
        if !self.has_unread() {
            return None;
        }
        let it = self.bytes[self.cursor];
        self.cursor += 1;
        Some(it)
    }

    /// Marks everything as consumed, ahead of a new read.
    pub fn clear(&mut self) {
        self.count = 0;
        self.cursor = 0;
    }

    /// Clears the sentinel slot and hands out the whole storage as the target of a read.
    pub fn read_target(&mut self) -> &mut [u8] {
        self.bytes[SENTINEL_INDEX] = 0;
        &mut self.bytes
    }

    /// Records that a read placed `count` bytes in [`read_target()`](Self::read_target).
    pub fn commit_read(&mut self, count: usize) {
        debug_assert!(count <= INPUT_BUFFER_CAPACITY);
        self.count = count.min(INPUT_BUFFER_CAPACITY);
        self.cursor = 0;
    }

    /// Replaces the byte at `index` with `key_byte` and moves the cursor there, so the
    /// bytes before `index` are skipped.
    pub fn collapse(&mut self, index: usize, key_byte: u8) {
        debug_assert!(index < self.count);
        self.bytes[index] = key_byte;
        self.cursor = index;
    }
}

impl Debug for InputBuffer {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let hex: Vec<String> = self
            .valid_bytes()
            .iter()
            .map(|byte| fmt_hex((*byte).into(), 2))
            .collect();
        f.debug_struct("InputBuffer")
            .field("bytes", &hex.join(" "))
            .field("count", &self.count)
            .field("cursor", &self.cursor)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_new_buffer_is_drained() {
        let mut buffer = InputBuffer::new();
        assert_eq!(buffer.count(), 0);
        assert_eq!(buffer.cursor(), 0);
        assert!(!buffer.has_unread());
        assert_eq!(buffer.take_next(), None);
    }

    #[test]
    fn test_take_next_drains_in_order() {
        let mut buffer = InputBuffer::from_read(b"abc");
        assert_eq!(buffer.take_next(), Some(b'a'));
        assert_eq!(buffer.take_next(), Some(b'b'));
        assert_eq!(buffer.take_next(), Some(b'c'));
        assert_eq!(buffer.take_next(), None);
        assert_eq!(buffer.cursor(), buffer.count());
    }

    #[test]
    fn test_read_target_clears_sentinel_slot() {
        let mut buffer = InputBuffer::from_read(b"\x1b[15~");
        assert_eq!(buffer.window::<4>(), *b"\x1b[15");

        // A shorter read only overwrites the first 3 slots.
        buffer.read_target()[..3].copy_from_slice(b"\x1b[A");
        buffer.commit_read(3);

        assert_eq!(buffer.window::<4>(), [0x1b, b'[', b'A', 0]);
        assert_eq!(buffer.valid_bytes(), b"\x1b[A");
    }

    #[test]
    fn test_commit_read_resets_cursor() {
        let mut buffer = InputBuffer::from_read(b"xy");
        buffer.take_next();
        buffer.read_target()[0] = b'z';
        buffer.commit_read(1);
        assert_eq!(buffer.cursor(), 0);
        assert_eq!(buffer.take_next(), Some(b'z'));
    }

    #[test]
    fn test_collapse_moves_cursor_to_key() {
        let mut buffer = InputBuffer::from_read(b"\x1b[3~x");
        buffer.collapse(3, 0x85);
        assert_eq!(buffer.cursor(), 3);
        assert_eq!(buffer.take_next(), Some(0x85));
        assert_eq!(buffer.take_next(), Some(b'x'));
        assert_eq!(buffer.take_next(), None);
    }

    #[test]
    fn test_from_read_truncates_to_capacity() {
        let bytes = [b'a'; INPUT_BUFFER_CAPACITY + 4];
        let buffer = InputBuffer::from_read(&bytes);
        assert_eq!(buffer.count(), INPUT_BUFFER_CAPACITY);
    }

    #[test]
    fn test_debug_shows_hex_bytes() {
        let buffer = InputBuffer::from_read(b"\x1b[A");
        assert_eq!(
            format!("{buffer:?}"),
            r#"InputBuffer { bytes: "1b 5b 41", count: 3, cursor: 0 }"#
        );
    }
}
