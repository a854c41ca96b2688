// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Logging setup on top of [`tracing_subscriber`]. The line editor only emits
//! [`tracing`] events; nothing is recorded until an application installs a subscriber
//! with [`init_tracing`] or [`try_initialize_logging_global`].
//!
//! Logging to stdout while a line is being edited garbles the line, so the file writer
//! is the sensible choice for interactive programs.

// Attach sources.
pub mod log_public_api;
pub mod rolling_file_appender_impl;
pub mod tracing_config;
pub mod tracing_init;

// Re-export.
pub use log_public_api::*;
pub use tracing_config::*;
pub use tracing_init::*;
