// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{InputBuffer, RawInputSource};
use rustix::io::Errno;

/// Enable or disable trace logging for every single poll (5 per second when idle).
pub const DEBUG_TTY_POLL: bool = false;

/// Outcome of one [`poll_input()`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollResult {
    /// This many bytes (always more than 0) are now in the buffer.
    Ready(usize),
    /// The idle timeout elapsed with no input.
    Idle,
    /// The device reported an error. The caller must surface it, not retry.
    Failed(Errno),
}

/// Issues one read of up to the buffer's capacity from `source`.
///
/// The sentinel slot of `buffer` is cleared before the read. On [`PollResult::Ready`]
/// the buffer's valid region is replaced by the new bytes and its cursor is reset to 0.
/// On [`PollResult::Idle`] and [`PollResult::Failed`] the buffer's count and cursor are
/// left alone.
pub fn poll_input(
    source: &mut impl RawInputSource,
    buffer: &mut InputBuffer,
) -> PollResult {
    let result = match source.read_raw(buffer.read_target()) {
        Ok(0) => PollResult::Idle,
        Ok(count) => {
            buffer.commit_read(count);
            PollResult::Ready(count)
        }
        Err(errno) => PollResult::Failed(errno),
    };

    DEBUG_TTY_POLL.then(|| {
        // % is Display, ? is Debug.
        tracing::trace!(
            message = "poll_input",
            result = ?result,
            buffer = ?buffer,
        );
    });

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ScriptedInputSource, ScriptedRead};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_zero_byte_read_is_idle() {
        let mut source = ScriptedInputSource::new([ScriptedRead::Idle]);
        let mut buffer = InputBuffer::new();
        assert_eq!(poll_input(&mut source, &mut buffer), PollResult::Idle);
        assert_eq!(buffer.count(), 0);
    }

    #[test]
    fn test_bytes_are_ready_and_fill_buffer() {
        let mut source = ScriptedInputSource::new([ScriptedRead::bytes(b"hi")]);
        let mut buffer = InputBuffer::new();
        assert_eq!(poll_input(&mut source, &mut buffer), PollResult::Ready(2));
        assert_eq!(buffer.valid_bytes(), b"hi");
        assert_eq!(buffer.cursor(), 0);
    }

    #[test]
    fn test_error_is_failed_with_code() {
        let mut source = ScriptedInputSource::new([ScriptedRead::Error(Errno::IO)]);
        let mut buffer = InputBuffer::new();
        assert_eq!(
            poll_input(&mut source, &mut buffer),
            PollResult::Failed(Errno::IO)
        );
    }

    #[test]
    fn test_sentinel_is_cleared_before_every_read() {
        let mut source = ScriptedInputSource::new([
            ScriptedRead::bytes(b"\x1b[15~"),
            ScriptedRead::bytes(b"\x1b[A"),
        ]);
        let mut buffer = InputBuffer::new();

        poll_input(&mut source, &mut buffer);
        poll_input(&mut source, &mut buffer);

        assert_eq!(source.sentinels_seen(), &[0, 0]);
        assert_eq!(buffer.window::<4>(), [0x1b, b'[', b'A', 0]);
    }

    #[test]
    fn test_read_is_offered_whole_capacity() {
        let mut source = ScriptedInputSource::new([ScriptedRead::Idle]);
        let mut buffer = InputBuffer::new();
        poll_input(&mut source, &mut buffer);
        assert_eq!(source.read_lengths(), &[crate::INPUT_BUFFER_CAPACITY]);
    }
}
