// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use miette::IntoDiagnostic;
use std::path::Path;
use tracing_appender::rolling::{RollingFileAppender, Rotation};

/// Appender for `file_path` that never rotates. A bare file name like `log.txt` lands in
/// the current folder. The file is opened for append immediately, so a bad path fails
/// here and not at the first log line.
///
/// Don't wrap the result in [`tracing_appender::non_blocking`]. Its worker thread is
/// torn down with the guard, and the guard would have to outlive every read loop.
///
/// # Errors
///
/// Returns an error if `file_path` has no file name component, eg: `..` or `/`, or if
/// the file can't be opened.
pub fn try_create(file_path: &str) -> miette::Result<RollingFileAppender> {
    let path = Path::new(file_path);

    let Some(file_name) = path.file_name().and_then(|it| it.to_str()) else {
        miette::bail!("log file path {file_path:?} does not name a file");
    };

    let folder = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name)
        .build(folder)
        .into_diagnostic()
}
