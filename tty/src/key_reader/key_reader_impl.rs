// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{ESC, InputBuffer, LogicalKey, PollResult, RawInputSource,
            SharedBackgroundTask, TaskRegistry, TtyError, decode_escape_sequence,
            describe_escape_window, describe_key, poll_input};
use std::{fmt::{Debug, Formatter, Result as FmtResult},
          io::{self, Write}};

/// Enable or disable debug logging of every key handed to the caller.
pub const DEBUG_TTY_KEY: bool = false;

/// Delivers one [`LogicalKey`] per call from a [`RawInputSource`], ticking the
/// registered background tasks while it waits.
///
/// ```text
/// get_next_key()
///   ├─▶ unread bytes from the last read? ─▶ return the next one
///   └─▶ loop {
///         poll_input()  ── Failed ─▶ Err(InputRead), no retry
///           └─▶ Ready, ESC lead and more than 1 byte? ─▶ decode_escape_sequence()
///         tasks.tick()  ── Err ────▶ Err(BackgroundTask), decoded key stays buffered
///       } until Ready
///         └─▶ return the byte at the cursor
/// ```
///
/// A read of N plain bytes yields N keys, and only the first of those calls polls. A
/// decoded escape sequence yields exactly 1 key.
///
/// When a diagnostics writer is attached, the escape window of each decoded read and a
/// description of each freshly read key are written to it. Keys handed out from the
/// unread bytes of an earlier read are not described.
pub struct KeyReader<S: RawInputSource> {
    source: S,
    buffer: InputBuffer,
    tasks: TaskRegistry,
    diagnostics: Option<Box<dyn Write>>,
}

impl<S: RawInputSource> KeyReader<S> {
    /// Diagnostics go to stdout when `debug` is set.
    pub fn new(source: S, debug: bool) -> Self {
        Self {
            source,
            buffer: InputBuffer::new(),
            tasks: TaskRegistry::default(),
            diagnostics: debug.then(|| Box::new(io::stdout()) as Box<dyn Write>),
        }
    }

    /// Diagnostics go to `writer`.
    pub fn with_diagnostics(source: S, writer: impl Write + 'static) -> Self {
        Self {
            diagnostics: Some(Box::new(writer)),
            ..Self::new(source, false)
        }
    }

    /// Appends `task` to the tasks that are ticked once per poll. Register tasks before
    /// the first call to [`get_next_key()`](Self::get_next_key).
    pub fn add_background_task(&mut self, task: SharedBackgroundTask) {
        self.tasks.register(task);
    }

    /// Returns the next logical key, polling (and ticking the background tasks) for as
    /// long as it takes for input to arrive.
    ///
    /// # Errors
    ///
    /// - [`TtyError::InputRead`] if the input device reports an error. The read is not
    ///   retried and the background tasks are not ticked for that poll.
    /// - [`TtyError::BackgroundTask`] if a background task fails during a tick.
    pub fn get_next_key(&mut self) -> Result<LogicalKey, TtyError> {
        if let Some(byte) = self.buffer.take_next() {
            return Ok(LogicalKey::from(byte));
        }

        let key = LogicalKey::from(self.wait_for_input()?);
        write_diagnostics(&mut self.diagnostics, || describe_key(key));
        DEBUG_TTY_KEY.then(|| {
            // % is Display, ? is Debug.
            tracing::debug!(message = "get_next_key", key = %key);
        });
        Ok(key)
    }

    /// Polls until a read returns at least 1 byte, and returns the first key byte of that
    /// read. The tasks are ticked after every poll that did not fail, including the one
    /// that returns input.
    ///
    /// A fresh read is decoded before the tick, so if the tick fails the decoded key
    /// stays buffered for the next call.
    fn wait_for_input(&mut self) -> Result<u8, TtyError> {
        self.buffer.clear();
        loop {
            let result = poll_input(&mut self.source, &mut self.buffer);
            match result {
                PollResult::Failed(errno) => {
                    tracing::error!(message = "Input read failed", errno = ?errno);
                    return Err(TtyError::input_read(errno));
                }
                PollResult::Ready(_) => self.decode_fresh_read(),
                PollResult::Idle => {}
            }

            self.tasks.tick().map_err(TtyError::BackgroundTask)?;

            if let PollResult::Ready(_) = result
                && let Some(byte) = self.buffer.take_next()
            {
                return Ok(byte);
            }
        }
    }

    fn decode_fresh_read(&mut self) {
        if self.buffer.count() > 1 && self.buffer.valid_bytes().first() == Some(&ESC) {
            write_diagnostics(&mut self.diagnostics, || {
                describe_escape_window(&self.buffer)
            });
            decode_escape_sequence(&mut self.buffer);
        }
    }

    #[must_use]
    pub fn buffer(&self) -> &InputBuffer { &self.buffer }

    #[must_use]
    pub fn source(&self) -> &S { &self.source }

    #[must_use]
    pub fn task_count(&self) -> usize { self.tasks.len() }
}

impl<S: RawInputSource + Debug> Debug for KeyReader<S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("KeyReader")
            .field("source", &self.source)
            .field("buffer", &self.buffer)
            .field("tasks", &self.tasks)
            .field("diagnostics", &self.diagnostics.is_some())
            .finish()
    }
}

fn write_diagnostics(diagnostics: &mut Option<Box<dyn Write>>, text: impl FnOnce() -> String) {
    let Some(writer) = diagnostics.as_mut() else {
        return;
    };
    let result = writer
        .write_all(text().as_bytes())
        .and_then(|()| writer.flush());
    if let Err(error) = result {
        tracing::warn!(message = "Failed to write key diagnostics", error = ?error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CapturedOutput, ExtendedKey, FailingTask, RecordingTask,
                SCRIPT_EXHAUSTED_ERRNO, ScriptedInputSource, ScriptedRead, TickLog};
    use pretty_assertions::assert_eq;
    use rustix::io::Errno;
    use std::{cell::RefCell, rc::Rc};

    fn reader(script: impl IntoIterator<Item = ScriptedRead>) -> KeyReader<ScriptedInputSource> {
        KeyReader::new(ScriptedInputSource::new(script), false)
    }

    #[test]
    fn test_plain_bytes_drain_before_next_poll() {
        let mut reader = reader([ScriptedRead::bytes(b"abc")]);

        assert_eq!(reader.get_next_key().unwrap(), LogicalKey::Char(b'a'));
        assert_eq!(reader.get_next_key().unwrap(), LogicalKey::Char(b'b'));
        assert_eq!(reader.get_next_key().unwrap(), LogicalKey::Char(b'c'));
        assert_eq!(reader.source().reads_performed(), 1);

        // Buffer is drained, so the next call polls again (and hits the end of script).
        let error = reader.get_next_key().unwrap_err();
        assert!(matches!(
            error,
            TtyError::InputRead { source, .. } if source == SCRIPT_EXHAUSTED_ERRNO
        ));
        assert_eq!(reader.source().reads_performed(), 2);
    }

    #[test]
    fn test_arrow_up_yields_one_key() {
        let mut reader = reader([ScriptedRead::bytes(&[0x1B, 0x5B, 0x41])]);

        assert_eq!(
            reader.get_next_key().unwrap(),
            LogicalKey::Extended(ExtendedKey::ArrowUp)
        );
        assert!(!reader.buffer().has_unread());
        assert_eq!(reader.buffer().cursor(), 3);
    }

    #[test]
    fn test_delete_sequence_yields_one_key() {
        let mut reader = reader([ScriptedRead::bytes(b"\x1b[3~"), ScriptedRead::bytes(b"x")]);

        assert_eq!(
            reader.get_next_key().unwrap(),
            LogicalKey::Extended(ExtendedKey::Delete)
        );
        assert_eq!(reader.get_next_key().unwrap(), LogicalKey::Char(b'x'));
        assert_eq!(reader.source().reads_performed(), 2);
    }

    #[test]
    fn test_unmatched_sequence_is_delivered_literally() {
        let mut reader = reader([ScriptedRead::bytes(&[0x1B, 0x5B, 0x39, 0x39])]);

        let keys: Vec<LogicalKey> = (0..4).map(|_| reader.get_next_key().unwrap()).collect();
        assert_eq!(
            keys,
            vec![
                LogicalKey::Char(ESC),
                LogicalKey::Char(b'['),
                LogicalKey::Char(b'9'),
                LogicalKey::Char(b'9'),
            ]
        );
        assert_eq!(reader.source().reads_performed(), 1);
    }

    #[test]
    fn test_lone_escape_is_a_key() {
        let mut reader = reader([ScriptedRead::bytes(&[ESC])]);
        assert_eq!(reader.get_next_key().unwrap(), LogicalKey::Char(ESC));
    }

    #[test]
    fn test_idle_poll_ticks_then_polls_again() {
        let log = TickLog::default();
        let mut reader = reader([
            ScriptedRead::Idle,
            ScriptedRead::Idle,
            ScriptedRead::bytes(b"q"),
        ]);
        reader.add_background_task(RecordingTask::new_shared("clock", &log));

        assert_eq!(reader.get_next_key().unwrap(), LogicalKey::Char(b'q'));
        assert_eq!(reader.source().reads_performed(), 3);
        // One tick per poll, including the one that returned input.
        assert_eq!(log.entries(), vec!["clock", "clock", "clock"]);
    }

    #[test]
    fn test_buffered_bytes_do_not_tick() {
        let log = TickLog::default();
        let mut reader = reader([ScriptedRead::bytes(b"ab")]);
        reader.add_background_task(RecordingTask::new_shared("clock", &log));

        reader.get_next_key().unwrap();
        reader.get_next_key().unwrap();
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn test_tasks_tick_in_registration_order() {
        let log = TickLog::default();
        let mut reader = reader([ScriptedRead::Idle, ScriptedRead::bytes(b"q")]);
        reader.add_background_task(RecordingTask::new_shared("clock", &log));
        reader.add_background_task(RecordingTask::new_shared("counter", &log));
        assert_eq!(reader.task_count(), 2);

        reader.get_next_key().unwrap();
        assert_eq!(log.entries(), vec!["clock", "counter", "clock", "counter"]);
    }

    #[test]
    fn test_failed_read_is_not_retried_or_ticked() {
        let log = TickLog::default();
        let mut reader = reader([ScriptedRead::Error(Errno::IO), ScriptedRead::bytes(b"a")]);
        reader.add_background_task(RecordingTask::new_shared("clock", &log));

        let error = reader.get_next_key().unwrap_err();
        assert!(matches!(
            error,
            TtyError::InputRead { code, .. } if code == Errno::IO.raw_os_error()
        ));
        assert_eq!(reader.source().reads_performed(), 1);
        assert!(log.is_empty());
    }

    #[test]
    fn test_interrupted_read_is_not_retried() {
        let mut reader = reader([ScriptedRead::Error(Errno::INTR), ScriptedRead::bytes(b"a")]);
        assert!(reader.get_next_key().is_err());
        assert!(!reader.source().is_exhausted());
    }

    #[test]
    fn test_task_error_propagates() {
        let mut reader = reader([ScriptedRead::Idle, ScriptedRead::bytes(b"a")]);
        reader.add_background_task(Rc::new(RefCell::new(FailingTask::new("clock stopped"))));

        let error = reader.get_next_key().unwrap_err();
        assert_eq!(error.to_string(), "Background task failed: clock stopped");
        assert_eq!(reader.source().reads_performed(), 1);
    }

    #[test]
    fn test_task_error_on_ready_poll_keeps_decoded_key() {
        let mut reader = reader([ScriptedRead::bytes(b"\x1b[A"), ScriptedRead::bytes(b"x")]);
        reader.add_background_task(Rc::new(RefCell::new(FailingTask::once("clock stopped"))));

        let error = reader.get_next_key().unwrap_err();
        assert!(matches!(error, TtyError::BackgroundTask(_)));

        // The sequence was decoded before the tick, so it is still one key.
        assert_eq!(
            reader.get_next_key().unwrap(),
            LogicalKey::Extended(ExtendedKey::ArrowUp)
        );
        assert_eq!(reader.get_next_key().unwrap(), LogicalKey::Char(b'x'));
        assert_eq!(reader.source().reads_performed(), 2);
    }

    #[test]
    fn test_task_error_on_ready_poll_keeps_plain_bytes() {
        let mut reader = reader([ScriptedRead::bytes(b"ab")]);
        reader.add_background_task(Rc::new(RefCell::new(FailingTask::once("clock stopped"))));

        assert!(reader.get_next_key().is_err());
        assert_eq!(reader.get_next_key().unwrap(), LogicalKey::Char(b'a'));
        assert_eq!(reader.get_next_key().unwrap(), LogicalKey::Char(b'b'));
        assert_eq!(reader.source().reads_performed(), 1);
    }

    #[test]
    fn test_diagnostics_describe_fresh_keys_only() {
        let output = CapturedOutput::new();
        let mut reader = KeyReader::with_diagnostics(
            ScriptedInputSource::new([
                ScriptedRead::bytes(b"\x1b[A"),
                ScriptedRead::bytes(b"\x03x"),
            ]),
            output.clone(),
        );

        reader.get_next_key().unwrap();
        reader.get_next_key().unwrap();
        reader.get_next_key().unwrap();

        assert_eq!(output.contents(), " 00415b1b 1b 5b 41 00\r\n KEY_ARROW_UP ^C");
    }

    #[test]
    fn test_no_diagnostics_by_default() {
        let reader = reader(std::iter::empty());
        assert!(format!("{reader:?}").contains("diagnostics: false"));
    }
}
