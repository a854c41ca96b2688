// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Infrastructure that the line editor is built on: ANSI constants, terminal raw mode,
//! logging setup, small declarative macros, and test fixtures.

// Attach sources.
pub mod ansi;
pub mod decl_macros;
pub mod logging;
pub mod terminal_raw_mode;
pub mod test_fixtures;

// Re-export.
pub use ansi::*;
pub use logging::*;
pub use terminal_raw_mode::*;
pub use test_fixtures::*;

/// The history handle and the test fixtures lock with this. Poisoning is ignored
/// wherever it is locked.
pub type StdMutex<T> = std::sync::Mutex<T>;
