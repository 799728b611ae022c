// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::SharedBackgroundTask;
use miette::miette;
use std::fmt::{Debug, Formatter, Result};

/// Append only, ordered list of [`SharedBackgroundTask`]s.
///
/// Registration is expected to happen before polling starts. There is no removal and no
/// de-duplication: a task registered twice runs twice per tick.
#[derive(Default)]
pub struct TaskRegistry {
    tasks: Vec<SharedBackgroundTask>,
}

impl TaskRegistry {
    pub fn register(&mut self, task: SharedBackgroundTask) { self.tasks.push(task); }

    #[must_use]
    pub fn len(&self) -> usize { self.tasks.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.tasks.is_empty() }

    /// Runs every task once, in registration order, on the calling thread.
    ///
    /// No-op when nothing is registered.
    ///
    /// # Errors
    ///
    /// Returns the first task error. Tasks after the failing one do not run in this tick.
    /// A task that is already mutably borrowed elsewhere (eg: by its configurator while
    /// it is being ticked) is reported as an error instead of panicking.
    pub fn tick(&self) -> miette::Result<()> {
        for (index, task) in self.tasks.iter().enumerate() {
            let mut task = task
                .try_borrow_mut()
                .map_err(|_| miette!("background task #{index} is already borrowed"))?;
            task.run_tick()?;
        }
        Ok(())
    }
}

impl Debug for TaskRegistry {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.debug_struct("TaskRegistry")
            .field("len", &self.tasks.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FailingTask, RecordingTask, TickLog};
    use pretty_assertions::assert_eq;
    use std::{cell::RefCell, rc::Rc};

    #[test]
    fn test_empty_registry_tick_is_noop() {
        let registry = TaskRegistry::default();
        assert!(registry.is_empty());
        assert!(registry.tick().is_ok());
    }

    #[test]
    fn test_tick_runs_every_task_once_in_registration_order() {
        let log = TickLog::default();
        let mut registry = TaskRegistry::default();
        registry.register(RecordingTask::new_shared("clock", &log));
        registry.register(RecordingTask::new_shared("counter", &log));
        registry.register(RecordingTask::new_shared("spinner", &log));

        registry.tick().unwrap();
        assert_eq!(log.entries(), vec!["clock", "counter", "spinner"]);

        registry.tick().unwrap();
        assert_eq!(
            log.entries(),
            vec!["clock", "counter", "spinner", "clock", "counter", "spinner"]
        );
    }

    #[test]
    fn test_same_task_registered_twice_runs_twice() {
        let log = TickLog::default();
        let task = RecordingTask::new_shared("clock", &log);
        let mut registry = TaskRegistry::default();
        registry.register(task.clone());
        registry.register(task);

        registry.tick().unwrap();
        assert_eq!(registry.len(), 2);
        assert_eq!(log.entries(), vec!["clock", "clock"]);
    }

    #[test]
    fn test_failing_task_stops_the_tick() {
        let log = TickLog::default();
        let mut registry = TaskRegistry::default();
        registry.register(RecordingTask::new_shared("before", &log));
        registry.register(Rc::new(RefCell::new(FailingTask::new("disk full"))));
        registry.register(RecordingTask::new_shared("after", &log));

        let error = registry.tick().unwrap_err();
        assert_eq!(error.to_string(), "disk full");
        assert_eq!(log.entries(), vec!["before"]);
    }

    #[test]
    fn test_borrowed_task_is_an_error() {
        let log = TickLog::default();
        let task = RecordingTask::new_shared("clock", &log);
        let mut registry = TaskRegistry::default();
        registry.register(task.clone());

        let _held = task.borrow_mut();
        let error = registry.tick().unwrap_err();
        assert_eq!(error.to_string(), "background task #0 is already borrowed");
    }

    #[test]
    fn test_external_owner_sees_task_state() {
        let log = TickLog::default();
        let task = Rc::new(RefCell::new(RecordingTask::new("clock", &log)));
        let mut registry = TaskRegistry::default();
        registry.register(task.clone());

        registry.tick().unwrap();
        registry.tick().unwrap();
        assert_eq!(task.borrow().ticks(), 2);
    }
}
