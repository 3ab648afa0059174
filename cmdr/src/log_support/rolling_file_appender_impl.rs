// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::path::PathBuf;

/// Note that if you wrap this up in a non blocking writer, it doesn't work. Here's an
/// example of this:
/// `tracing_appender::non_blocking(try_create_rolling_file_appender("foo")?)`
///
/// # Errors
///
/// When `path_str` has no parent folder or no file name.
pub fn try_create(
    path_str: &str,
) -> miette::Result<tracing_appender::rolling::RollingFileAppender> {
    let path = PathBuf::from(&path_str);

    // A bare file name like `log.txt` has an empty parent, which means the current folder.
    let parent = match path.parent() {
        Some(it) if it.as_os_str().is_empty() => PathBuf::from("."),
        Some(it) => it.to_path_buf(),
        None => {
            return Err(miette::miette!(
                "Can't access current folder {}. It might not exist, or don't have required permissions.",
                path.display()
            ));
        }
    };

    let file_stem = path.file_name().ok_or_else(|| {
        miette::miette!(
            "Can't access file name {}. It might not exist, or don't have required permissions.",
            path.display()
        )
    })?;

    Ok(tracing_appender::rolling::never(parent, file_stem))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_create_in_folder() {
        let dir = tempfile::TempDir::new().unwrap();
        let file_path = dir.path().join("mc_admin.log");
        let it = try_create(file_path.to_str().unwrap());
        assert!(it.is_ok());
    }

    #[test]
    fn test_try_create_rejects_root() {
        assert!(try_create("/").is_err());
    }
}
