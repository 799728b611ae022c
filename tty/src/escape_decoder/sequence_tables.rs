// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{ExtendedKey, SEQ_ARROW_DOWN, SEQ_ARROW_LEFT, SEQ_ARROW_RIGHT, SEQ_ARROW_UP,
            SEQ_DELETE, SEQ_END, SEQ_F2, SEQ_F3, SEQ_F4, SEQ_F5, SEQ_F6, SEQ_F7, SEQ_F8,
            SEQ_F9, SEQ_F12, SEQ_HOME, SEQ_INSERT, SEQ_PAGE_DOWN, SEQ_PAGE_UP};

/// One recognized escape sequence and the key it decodes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EscapeSequence {
    pub bytes: &'static [u8],
    pub key: ExtendedKey,
}

impl EscapeSequence {
    #[must_use]
    pub const fn new(bytes: &'static [u8], key: ExtendedKey) -> Self { Self { bytes, key } }

    /// Index of the last byte of the sequence. This is where the decoded key is written.
    #[must_use]
    pub const fn last_index(&self) -> usize { self.bytes.len() - 1 }
}

/// `ESC [ <letter>` and `ESC O <letter>` sequences.
pub const THREE_BYTE_SEQUENCES: [EscapeSequence; 9] = [
    EscapeSequence::new(SEQ_ARROW_UP, ExtendedKey::ArrowUp),
    EscapeSequence::new(SEQ_ARROW_DOWN, ExtendedKey::ArrowDown),
    EscapeSequence::new(SEQ_ARROW_RIGHT, ExtendedKey::ArrowRight),
    EscapeSequence::new(SEQ_ARROW_LEFT, ExtendedKey::ArrowLeft),
    EscapeSequence::new(SEQ_END, ExtendedKey::End),
    EscapeSequence::new(SEQ_HOME, ExtendedKey::Home),
    EscapeSequence::new(SEQ_F2, ExtendedKey::F2),
    EscapeSequence::new(SEQ_F3, ExtendedKey::F3),
    EscapeSequence::new(SEQ_F4, ExtendedKey::F4),
];

/// `ESC [ <digit> ~` sequences.
pub const FOUR_BYTE_SEQUENCES: [EscapeSequence; 4] = [
    EscapeSequence::new(SEQ_INSERT, ExtendedKey::Insert),
    EscapeSequence::new(SEQ_DELETE, ExtendedKey::Delete),
    EscapeSequence::new(SEQ_PAGE_UP, ExtendedKey::PageUp),
    EscapeSequence::new(SEQ_PAGE_DOWN, ExtendedKey::PageDown),
];

/// `ESC [ <digit> <digit> ~` sequences.
pub const FIVE_BYTE_SEQUENCES: [EscapeSequence; 6] = [
    EscapeSequence::new(SEQ_F5, ExtendedKey::F5),
    EscapeSequence::new(SEQ_F6, ExtendedKey::F6),
    EscapeSequence::new(SEQ_F7, ExtendedKey::F7),
    EscapeSequence::new(SEQ_F8, ExtendedKey::F8),
    EscapeSequence::new(SEQ_F9, ExtendedKey::F9),
    EscapeSequence::new(SEQ_F12, ExtendedKey::F12),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ANSI_CSI_BRACKET, ANSI_FUNCTION_KEY_TERMINATOR, ESC};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_table_entries_have_declared_length() {
        assert!(THREE_BYTE_SEQUENCES.iter().all(|it| it.bytes.len() == 3));
        assert!(FOUR_BYTE_SEQUENCES.iter().all(|it| it.bytes.len() == 4));
        assert!(FIVE_BYTE_SEQUENCES.iter().all(|it| it.bytes.len() == 5));
    }

    #[test]
    fn test_every_sequence_starts_with_esc() {
        let all = THREE_BYTE_SEQUENCES
            .iter()
            .chain(&FOUR_BYTE_SEQUENCES)
            .chain(&FIVE_BYTE_SEQUENCES);
        for it in all {
            assert_eq!(it.bytes[0], ESC, "{it:?}");
        }
    }

    #[test]
    fn test_tilde_sequences_are_csi() {
        for it in FOUR_BYTE_SEQUENCES.iter().chain(&FIVE_BYTE_SEQUENCES) {
            assert_eq!(it.bytes[1], ANSI_CSI_BRACKET);
            assert_eq!(it.bytes[it.last_index()], ANSI_FUNCTION_KEY_TERMINATOR);
        }
    }

    #[test]
    fn test_no_key_is_listed_twice() {
        let mut keys: Vec<u8> = THREE_BYTE_SEQUENCES
            .iter()
            .chain(&FOUR_BYTE_SEQUENCES)
            .chain(&FIVE_BYTE_SEQUENCES)
            .map(|it| it.key.as_byte())
            .collect();
        let total = keys.len();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), total);
        assert_eq!(total, 19);
    }
}
