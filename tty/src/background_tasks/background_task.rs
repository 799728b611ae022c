// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{cell::RefCell, rc::Rc};

/// A unit of work that runs one short step per scheduler tick.
///
/// `run_tick()` is called on the input thread between polls, so it must return quickly.
/// An error ends the current [`get_next_key()`] call with
/// [`TtyError::BackgroundTask`](crate::TtyError::BackgroundTask).
///
/// [`get_next_key()`]: crate::KeyReader::get_next_key
pub trait BackgroundTask {
    /// Executes one tick.
    ///
    /// # Errors
    ///
    /// Any error is propagated to the caller of [`get_next_key()`], and the remaining
    /// tasks are skipped for this tick.
    ///
    /// [`get_next_key()`]: crate::KeyReader::get_next_key
    fn run_tick(&mut self) -> miette::Result<()>;
}

/// Shared handle to a task. The registry holds one clone, and whoever configures the
/// task (eg: changes the column a clock is drawn in) can hold another.
///
/// ```
/// use r3bl_tty::{BackgroundTask, SharedBackgroundTask, TaskRegistry};
/// use std::{cell::RefCell, rc::Rc};
///
/// #[derive(Default)]
/// struct Counter { ticks: usize }
///
/// impl BackgroundTask for Counter {
///     fn run_tick(&mut self) -> miette::Result<()> {
///         self.ticks += 1;
///         Ok(())
///     }
/// }
///
/// let counter = Rc::new(RefCell::new(Counter::default()));
/// let mut registry = TaskRegistry::default();
/// registry.register(counter.clone());
///
/// registry.tick()?;
/// assert_eq!(counter.borrow().ticks, 1);
/// # Ok::<(), miette::Report>(())
/// ```
pub type SharedBackgroundTask = Rc<RefCell<dyn BackgroundTask>>;
