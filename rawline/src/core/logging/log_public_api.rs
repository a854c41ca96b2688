// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! This is just a shim (thin wrapper) around [`crate::init_tracing`] for apps that only
//! want "log to a file, or don't log at all".

use crate::{TracingConfig, init_tracing, ok};
use tracing_core::LevelFilter;

pub const LOG_FILE_NAME: &str = "log.txt";

/// Logging is **DISABLED** by **default**.
///
/// If you don't call this function w/ a value other than [`LevelFilter::OFF`], then
/// logging won't be enabled. The [`tracing::info!`], [`tracing::debug!`], etc. calls
/// inside this crate are then free.
///
/// Installs a global subscriber that writes to [`LOG_FILE_NAME`] in the current folder.
///
/// # Errors
///
/// Returns an error if the log file can't be created.
pub fn try_initialize_logging_global(level_filter: LevelFilter) -> miette::Result<()> {
    // Early return if the level filter is off.
    if matches!(level_filter, LevelFilter::OFF) {
        return ok!();
    }

    init_tracing(TracingConfig::new_file(None, level_filter))?;

    ok!()
}
