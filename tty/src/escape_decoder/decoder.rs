// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Collapses a recognized escape sequence at the start of the [`InputBuffer`] into one
//! [`ExtendedKey`] byte.
//!
//! Escape sequences are not self delimiting, so the decoder tries three fixed width
//! tables in order (3, then 4, then 5 bytes) and falls back to literal bytes when none of
//! them match. Each rule also requires the read to have returned at least as many bytes
//! as the pattern is long, so leftovers from an earlier read never complete a match.
//!
//! | Table | Match condition                                         | Key at / cursor |
//! | :---- | :------------------------------------------------------ | :-------------- |
//! | 3     | first 3 bytes equal, and the sentinel slot (index 3) is 0 | 2             |
//! | 4     | first 4 bytes equal                                     | 3               |
//! | 5     | first 5 bytes equal (so byte 4 is `~`)                  | 4               |
//!
//! The sentinel condition means a 3 byte sequence only decodes when it is the whole read.
//! `ESC [ A x` (a fast typist, or a paste) is delivered as 4 literal bytes.

use crate::{ESC, EscapeSequence, ExtendedKey, FIVE_BYTE_SEQUENCES, FOUR_BYTE_SEQUENCES,
            InputBuffer, SENTINEL_INDEX, THREE_BYTE_SEQUENCES};

/// Enable or disable trace logging of every decode attempt.
pub const DEBUG_TTY_DECODE: bool = false;

/// What [`decode_escape_sequence()`] did to the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodedSequence {
    pub key: ExtendedKey,
    /// Index of the decoded key byte, which is also the new cursor.
    pub cursor: usize,
}

/// Attempts to collapse the escape sequence at the start of `buffer`.
///
/// Only runs when the buffer holds more than one byte and the first one is [`ESC`]. On
/// a match the decoded key byte is written over the last byte of the sequence and the
/// cursor is moved to it, so the next byte handed out is the key. Otherwise the buffer
/// is left untouched and [`None`] is returned.
pub fn decode_escape_sequence(buffer: &mut InputBuffer) -> Option<DecodedSequence> {
    if buffer.count() <= 1 || buffer.valid_bytes().first() != Some(&ESC) {
        return None;
    }

    let decoded = find_match(buffer).map(|sequence| {
        let cursor = sequence.last_index();
        buffer.collapse(cursor, sequence.key.as_byte());
        DecodedSequence {
            key: sequence.key,
            cursor,
        }
    });

    DEBUG_TTY_DECODE.then(|| {
        // % is Display, ? is Debug.
        tracing::trace!(
            message = "decode_escape_sequence",
            decoded = ?decoded,
            buffer = ?buffer,
        );
    });

    decoded
}

fn find_match(buffer: &InputBuffer) -> Option<EscapeSequence> {
    let count = buffer.count();
    let window = buffer.window::<4>();

    if count >= 3 && window[SENTINEL_INDEX] == 0 {
        let hit = THREE_BYTE_SEQUENCES
            .iter()
            .find(|it| it.bytes == &window[..3]);
        if let Some(it) = hit {
            return Some(*it);
        }
    }

    if count >= 4 {
        let hit = FOUR_BYTE_SEQUENCES.iter().find(|it| it.bytes == &window[..]);
        if let Some(it) = hit {
            return Some(*it);
        }
    }

    if count >= 5 {
        let head = &buffer.valid_bytes()[..5];
        let hit = FIVE_BYTE_SEQUENCES.iter().find(|it| it.bytes == head);
        if let Some(it) = hit {
            return Some(*it);
        }
    }

    None
}
