// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use miette::miette;
use std::path::PathBuf;
use tracing_appender::rolling::{self, RollingFileAppender};

/// Appender that writes (and appends) to exactly `path_str`, never rolling over.
///
/// # Errors
///
/// Returns an error if `path_str` has no parent directory or no file name.
pub fn try_create(path_str: &str) -> miette::Result<RollingFileAppender> {
    let path = PathBuf::from(path_str);

    let parent = path
        .parent()
        .ok_or_else(|| miette!("Log file path has no parent folder: {}", path.display()))?;

    let file_name = path
        .file_name()
        .ok_or_else(|| miette!("Log file path has no file name: {}", path.display()))?;

    Ok(rolling::never(parent, file_name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_without_file_name_is_rejected() {
        assert!(try_create("/").is_err());
    }

    #[test]
    fn test_file_in_existing_folder_is_created() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("r3bl_tty_test.log");
        assert!(try_create(path.to_str().unwrap()).is_ok());
        assert!(path.exists());
    }
}
