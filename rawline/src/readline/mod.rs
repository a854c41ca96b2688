// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The line editor proper. Leaf first:
//!
//! 1. [`KeyDecoder`] turns raw input bytes into [`KeyEvent`]s.
//! 2. [`LineBuffer`] holds the line being edited and the cursor.
//! 3. [`HistoryStore`] holds every line of every session, shared via [`SafeHistory`].
//! 4. [`TerminalRenderer`] writes the redraw sequences.
//! 5. [`LineEditSession`] is the state machine that ties the four together for one read.
//! 6. [`LineEditor`] is the public entry point that owns the devices and the history.

// Attach sources.
pub mod editor;
pub mod error;
pub mod history;
pub mod key_decoder;
pub mod line_buffer;
pub mod renderer;
pub mod session;

// Re-export.
pub use editor::*;
pub use error::*;
pub use history::*;
pub use key_decoder::*;
pub use line_buffer::*;
pub use renderer::*;
pub use session::*;
