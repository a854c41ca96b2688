// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use tracing_core::LevelFilter;

/// Everything [`crate::init_tracing()`] needs to build and install a subscriber.
#[derive(Debug, Clone)]
pub struct TracingConfig {
    pub scope: TracingScope,
    pub writer_config: WriterConfig,
    pub level_filter: LevelFilter,
}

/// Binaries want [`Global`](Self::Global). Tests want [`ThreadLocal`](Self::ThreadLocal),
/// since the global subscriber can only be set once per process.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TracingScope {
    Global,
    ThreadLocal,
}

/// Where the formatted log lines go. The `String` is the log file path (and prefix),
/// eg: `/tmp/rawline.log` or `log.txt`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriterConfig {
    None,
    Display(DisplayPreference),
    File(String),
    DisplayAndFile(DisplayPreference, String),
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DisplayPreference {
    Stdout,
    Stderr,
}

impl TracingConfig {
    /// Log to a file only. `None` picks `log.txt` in the current folder.
    #[must_use]
    pub fn new_file(filename: Option<String>, level_filter: LevelFilter) -> Self {
        Self {
            scope: TracingScope::Global,
            writer_config: WriterConfig::File(
                filename.unwrap_or_else(|| super::LOG_FILE_NAME.to_string()),
            ),
            level_filter,
        }
    }

    #[must_use]
    pub fn get_writer_config(&self) -> WriterConfig { self.writer_config.clone() }

    #[must_use]
    pub fn get_level_filter(&self) -> LevelFilter { self.level_filter }
}
