// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::BackgroundTask;
use miette::miette;
use std::{cell::RefCell, rc::Rc};

/// Shared, ordered record of which task ticked when. Clones share the same list.
#[derive(Debug, Clone, Default)]
pub struct TickLog {
    entries: Rc<RefCell<Vec<&'static str>>>,
}

impl TickLog {
    pub fn record(&self, name: &'static str) { self.entries.borrow_mut().push(name); }

    #[must_use]
    pub fn entries(&self) -> Vec<&'static str> { self.entries.borrow().clone() }

    #[must_use]
    pub fn len(&self) -> usize { self.entries.borrow().len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.entries.borrow().is_empty() }
}

/// Task that appends its name to a [`TickLog`] on every tick.
#[derive(Debug)]
pub struct RecordingTask {
    name: &'static str,
    log: TickLog,
    ticks: usize,
}

impl RecordingTask {
    #[must_use]
    pub fn new(name: &'static str, log: &TickLog) -> Self {
        Self {
            name,
            log: log.clone(),
            ticks: 0,
        }
    }

    #[must_use]
    pub fn new_shared(name: &'static str, log: &TickLog) -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(Self::new(name, log)))
    }

    #[must_use]
    pub fn ticks(&self) -> usize { self.ticks }
}

impl BackgroundTask for RecordingTask {
    fn run_tick(&mut self) -> miette::Result<()> {
        self.ticks += 1;
        self.log.record(self.name);
        Ok(())
    }
}

/// Task that fails with a fixed message, on every tick or only on the first one.
#[derive(Debug)]
pub struct FailingTask {
    message: &'static str,
    fail_once: bool,
    ticks: usize,
}

impl FailingTask {
    /// Fails on every tick.
    #[must_use]
    pub fn new(message: &'static str) -> Self {
        Self {
            message,
            fail_once: false,
            ticks: 0,
        }
    }

    /// Fails on the first tick, then succeeds.
    #[must_use]
    pub fn once(message: &'static str) -> Self {
        Self {
            fail_once: true,
            ..Self::new(message)
        }
    }

    #[must_use]
    pub fn ticks(&self) -> usize { self.ticks }
}

impl BackgroundTask for FailingTask {
    fn run_tick(&mut self) -> miette::Result<()> {
        self.ticks += 1;
        if self.fail_once && self.ticks > 1 {
            return Ok(());
        }
        Err(miette!("{}", self.message))
    }
}
