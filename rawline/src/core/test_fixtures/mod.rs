// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Mock devices for driving a [`crate::LineEditor`] without a real terminal. For plain
//! keystrokes any [`std::io::Read`], like [`std::io::Cursor`], works. [`InputMock`] is
//! for scripts that also need read errors.

// Attach sources.
pub mod input_mock;
pub mod raw_mode_mock;
pub mod stdout_mock;

// Re-export.
pub use input_mock::*;
pub use raw_mode_mock::*;
pub use stdout_mock::*;
