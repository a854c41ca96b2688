// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Put the terminal in raw mode for the duration of one line.
//!
//! In the default (cooked) mode the tty driver buffers a whole line, echoes it, and
//! turns `Ctrl+C` into `SIGINT`. The line editor needs every byte as it is typed, with
//! no echo, so that it can draw the line itself and see `0x03` as a key.
//!
//! Nothing in `readline` touches termios. It goes through [`RawModeControl`], which
//! [`TermiosRawMode`] implements for real terminals and [`crate::RawModeMock`] for tests.
//! [`RawModeGuard`] turns raw mode off again on drop.
//!
//! ```no_run
//! use rawline::{RawModeGuard, TermiosRawMode};
//!
//! let mut raw_mode = TermiosRawMode::default();
//! {
//!     let _guard = RawModeGuard::try_new(&mut raw_mode)?;
//!     // Read keys here.
//! }
//! # Ok::<(), miette::Report>(())
//! ```
//!
//! To see what a key sends: `stty raw -echo; cat -v; stty sane`.

// Attach sources.
mod raw_mode_core;

#[cfg(unix)]
mod raw_mode_unix;

#[cfg(not(unix))]
mod raw_mode_unsupported;

// Re-export.
pub use raw_mode_core::*;

#[cfg(unix)]
pub use raw_mode_unix::*;

#[cfg(not(unix))]
pub use raw_mode_unsupported::*;
