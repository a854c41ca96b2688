// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # rawline
//!
//! A small, blocking, single line editor for terminal applications. It reads raw
//! keystrokes from a terminal in raw mode, echoes the edited text in place, and lets
//! the user walk a history of previously entered lines with the up and down arrow keys.
//! Think of it as a minimal `readline`.
//!
//! # Table of contents
//!
//! <!-- TOC -->
//! - [Mental model](#mental-model)
//! - [Usage](#usage)
//! - [Outcomes](#outcomes)
//! - [Testing with mocks](#testing-with-mocks)
//! <!-- /TOC -->
//!
//! # Mental model
//!
//! ```text
//! raw bytes (stdin, raw mode)
//!    │
//! ┌──▼─────────────────────┐
//! │ KeyDecoder             │  bytes → KeyEvent (UTF-8 chars, controls, CSI keys)
//! └────────────────────────┘
//!    │
//! ┌──▼─────────────────────┐      ┌────────────────────┐
//! │ LineEditSession        │─────▶│ LineBuffer         │  text + cursor
//! │ (Editing → Accepted /  │      └────────────────────┘
//! │  Cancelled)            │      ┌────────────────────┐
//! │                        │─────▶│ HistoryStore       │  shared across sessions
//! └────────────────────────┘      └────────────────────┘
//!    │
//! ┌──▼─────────────────────┐
//! │ TerminalRenderer       │  \r prompt+text ESC[K, ESC[nC / ESC[nD
//! └────────────────────────┘
//!    │
//!    ▼
//! raw output sink (stdout)
//! ```
//!
//! [`LineEditor`] owns the [`HistoryStore`] (via a [`SafeHistory`] handle) and hands a
//! clone of that handle to each [`LineEditSession`] it creates. Every call to
//! [`LineEditor::get_line`] is a fresh, single use session. Raw mode is acquired by a
//! [`RawModeGuard`] for the duration of one session and restored on every exit path.
//!
//! # Usage
//!
//! ```no_run
//! use rawline::{EditorOptions, LineEditor, ReadlineEvent};
//!
//! let mut editor = LineEditor::new_stdio(EditorOptions::default());
//! loop {
//!     match editor.get_line("> ") {
//!         Ok(ReadlineEvent::Line(line)) => println!("got: {line}"),
//!         Ok(ReadlineEvent::Cancelled(reason)) => {
//!             eprintln!("{reason}");
//!             break;
//!         }
//!         Err(error) => {
//!             eprintln!("{error}");
//!             break;
//!         }
//!     }
//! }
//! ```
//!
//! # Outcomes
//!
//! [`LineEditor::get_line`] never uses errors for things the user did. Pressing
//! `Ctrl+C`, pressing `Ctrl+D`, the input stream closing, or an unrecognized escape
//! sequence all end the session with [`ReadlineEvent::Cancelled`] and a
//! [`CancelReason`] that tells them apart. [`ReadlineError`] is reserved for I/O and
//! raw mode failures.
//!
//! # Testing with mocks
//!
//! All three devices are injected. See [`LineEditor::new_with_devices`],
//! [`StdoutMock`], and [`RawModeMock`].

// Enforce strict error handling in production library code only. Tests are allowed to
// use .unwrap() (workspace `Cargo.toml` config allows it).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach modules (re-exported below to provide clean public API).
pub mod core;
pub mod readline;

// Re-export stable public API using glob imports for ergonomic, flat API surface.
pub use core::*;
pub use readline::*;
