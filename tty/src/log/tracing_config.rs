// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{DynLayer, try_create_layers};
use tracing::dispatcher::DefaultGuard;
use tracing_core::LevelFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Log file used when none is given.
pub const DEFAULT_LOG_FILE_NAME: &str = "r3bl_tty.log";

/// Where the logs go, and at which level.
///
/// - `writer_config`: [`WriterConfig`] to choose where to write the logs.
/// - `level_filter`: [`LevelFilter`], use [`LevelFilter::OFF`] to disable logging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracingConfig {
    pub writer_config: WriterConfig,
    pub level_filter: LevelFilter,
}

/// - `DisplayPreference`: the preferred display to log to.
/// - `String`: path of the log file, eg: `/tmp/tty_keys.log` or `tty_keys.log`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriterConfig {
    None,
    Display(DisplayPreference),
    File(String),
    DisplayAndFile(DisplayPreference, String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayPreference {
    Stdout,
    Stderr,
}

impl TracingConfig {
    /// Log to a file (at [`DEFAULT_LOG_FILE_NAME`] if `filename` is [`None`]) at the
    /// `DEBUG` level.
    #[must_use]
    pub fn new_file(filename: Option<String>) -> Self {
        Self {
            writer_config: WriterConfig::File(
                filename.unwrap_or_else(|| DEFAULT_LOG_FILE_NAME.to_string()),
            ),
            level_filter: LevelFilter::DEBUG,
        }
    }

    /// Log to `preferred_display` at the `DEBUG` level.
    #[must_use]
    pub fn new_display(preferred_display: DisplayPreference) -> Self {
        Self {
            writer_config: WriterConfig::Display(preferred_display),
            level_filter: LevelFilter::DEBUG,
        }
    }

    /// Logging disabled.
    #[must_use]
    pub fn off() -> Self {
        Self {
            writer_config: WriterConfig::None,
            level_filter: LevelFilter::OFF,
        }
    }

    #[must_use]
    pub fn get_writer_config(&self) -> WriterConfig { self.writer_config.clone() }

    #[must_use]
    pub fn get_level_filter(&self) -> LevelFilter { self.level_filter }

    /// Installs the global default subscriber. It can't be changed afterwards, so this is
    /// for programs, not tests.
    ///
    /// # Errors
    ///
    /// Returns an error if the log file can't be created, or a global subscriber is
    /// already installed.
    pub fn install_global(self) -> miette::Result<()> {
        let layers = self.create_layers()?;
        tracing_subscriber::registry()
            .with(layers)
            .try_init()
            .map_err(|error| miette::miette!("Failed to install tracing: {error}"))
    }

    /// Installs a subscriber for the current thread only, until the returned guard is
    /// dropped. This is for tests.
    ///
    /// # Errors
    ///
    /// Returns an error if the log file can't be created.
    pub fn install_thread_local(self) -> miette::Result<DefaultGuard> {
        let layers = self.create_layers()?;
        Ok(tracing_subscriber::registry().with(layers).set_default())
    }

    fn create_layers(self) -> miette::Result<Vec<Box<DynLayer<tracing_subscriber::Registry>>>> {
        Ok(try_create_layers(self)?.unwrap_or_default())
    }
}

impl Default for TracingConfig {
    fn default() -> Self { Self::off() }
}
