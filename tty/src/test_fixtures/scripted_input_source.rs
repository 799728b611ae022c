// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{RawInputSource, SENTINEL_INDEX};
use rustix::io::Errno;
use std::collections::VecDeque;

/// One scripted outcome of [`RawInputSource::read_raw()`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptedRead {
    Bytes(Vec<u8>),
    Idle,
    Error(Errno),
}

impl ScriptedRead {
    #[must_use]
    pub fn bytes(bytes: &[u8]) -> Self { Self::Bytes(bytes.to_vec()) }
}

/// Errno returned once the script runs out, so a test that polls more often than it
/// expects fails instead of spinning forever.
pub const SCRIPT_EXHAUSTED_ERRNO: Errno = Errno::PIPE;

/// [`RawInputSource`] that plays back a fixed script of reads, and records what each
/// read call was offered.
#[derive(Debug, Default)]
pub struct ScriptedInputSource {
    script: VecDeque<ScriptedRead>,
    sentinels_seen: Vec<u8>,
    read_lengths: Vec<usize>,
}

impl ScriptedInputSource {
    pub fn new(script: impl IntoIterator<Item = ScriptedRead>) -> Self {
        Self {
            script: script.into_iter().collect(),
            ..Default::default()
        }
    }

    /// Number of read calls so far.
    #[must_use]
    pub fn reads_performed(&self) -> usize { self.read_lengths.len() }

    /// Value of the sentinel slot at the moment of each read call.
    #[must_use]
    pub fn sentinels_seen(&self) -> &[u8] { &self.sentinels_seen }

    /// Length of the buffer offered to each read call.
    #[must_use]
    pub fn read_lengths(&self) -> &[usize] { &self.read_lengths }

    #[must_use]
    pub fn is_exhausted(&self) -> bool { self.script.is_empty() }
}

impl RawInputSource for ScriptedInputSource {
    fn read_raw(&mut self, buf: &mut [u8]) -> Result<usize, Errno> {
        self.read_lengths.push(buf.len());
        self.sentinels_seen
            .push(buf.get(SENTINEL_INDEX).copied().unwrap_or_default());

        match self.script.pop_front() {
            Some(ScriptedRead::Bytes(bytes)) => {
                assert!(
                    bytes.len() <= buf.len(),
                    "scripted read of {} bytes does not fit in {}",
                    bytes.len(),
                    buf.len()
                );
                buf[..bytes.len()].copy_from_slice(&bytes);
                Ok(bytes.len())
            }
            Some(ScriptedRead::Idle) => Ok(0),
            Some(ScriptedRead::Error(errno)) => Err(errno),
            None => Err(SCRIPT_EXHAUSTED_ERRNO),
        }
    }
}
