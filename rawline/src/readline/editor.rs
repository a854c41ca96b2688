// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{HistoryStore, KeyDecoder, LineEditSession, RawModeControl, RawModeGuard,
            ReadlineError, ReadlineEvent, SafeHistory, StdMutex, TerminalInput,
            TermiosRawMode};
use std::{fmt,
          io::{self, Read, Write},
          sync::Arc};

/// Knobs for a [`LineEditor`]. Construct with field init on top of [`Default`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct EditorOptions {
    /// Before applying each key, print its raw bytes as hex on their own row. Handy for
    /// finding out what a terminal sends for a given key.
    pub debug_keys: bool,
}

/// The public entry point. Owns the input, the output, the raw mode control, and the
/// [`HistoryStore`] that every [`get_line`](Self::get_line) call shares.
///
/// # Devices
///
/// All three devices are trait objects so that tests can pass in a
/// [`std::io::Cursor`] of scripted keystrokes, a [`crate::StdoutMock`], and a
/// [`crate::RawModeMock`]. [`new_stdio`](Self::new_stdio) wires up the real terminal.
///
/// The [`KeyDecoder`] lives here, not in a session, so that a byte it had to read ahead
/// at the end of one line is not lost before the next.
pub struct LineEditor {
    decoder: KeyDecoder<Box<dyn Read + Send>>,
    output: Box<dyn Write + Send>,
    raw_mode: Box<dyn RawModeControl + Send>,
    safe_history: SafeHistory,
    options: EditorOptions,
}

impl fmt::Debug for LineEditor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LineEditor")
            .field("safe_history", &self.safe_history)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl LineEditor {
    #[must_use]
    pub fn new_with_devices(
        input: impl Read + Send + 'static,
        output: impl Write + Send + 'static,
        raw_mode: impl RawModeControl + Send + 'static,
        options: EditorOptions,
    ) -> Self {
        let input: Box<dyn Read + Send> = Box::new(input);
        Self {
            decoder: KeyDecoder::new(input),
            output: Box::new(output),
            raw_mode: Box::new(raw_mode),
            safe_history: Arc::new(StdMutex::new(HistoryStore::new())),
            options,
        }
    }

    /// Editor on the user's terminal and stdout. Keys are read from stdin if it is a
    /// terminal, otherwise from `/dev/tty`, and raw mode is applied to that same
    /// terminal (see [`TerminalInput`]).
    ///
    /// If there is no terminal at all, keys are read from stdin and
    /// [`get_line`](Self::get_line) reports the raw mode failure.
    #[must_use]
    pub fn new_stdio(options: EditorOptions) -> Self {
        let input: Box<dyn Read + Send> = match TerminalInput::open() {
            Ok(terminal_input) => Box::new(terminal_input),
            Err(report) => {
                tracing::warn!(
                    message = "rawline -> no terminal to read keys from",
                    error = %report
                );
                Box::new(io::stdin())
            }
        };
        Self::new_with_devices(input, io::stdout(), TermiosRawMode::default(), options)
    }

    /// Replace the history with `history`, eg: lines loaded by the caller.
    #[must_use]
    pub fn with_history(self, history: HistoryStore) -> Self {
        Self {
            safe_history: Arc::new(StdMutex::new(history)),
            ..self
        }
    }

    /// Clone of the handle to the history shared by every session of this editor.
    #[must_use]
    pub fn safe_history(&self) -> SafeHistory { self.safe_history.clone() }

    #[must_use]
    pub fn options(&self) -> EditorOptions { self.options }

    /// Show `prompt` and read one line. Raw mode is on for exactly the duration of this
    /// call, and restored however it returns (or panics).
    ///
    /// Each call is an independent [`LineEditSession`] that appends one entry to the
    /// shared history, even if the session is cancelled.
    ///
    /// # Errors
    ///
    /// - [`ReadlineError::RawMode`] if raw mode can't be enabled. Nothing is written and
    ///   the history is untouched.
    /// - [`ReadlineError::IO`] if reading input or writing output fails.
    ///
    /// Interrupt, end of input, and unknown escape sequences are not errors; they come
    /// back as [`ReadlineEvent::Cancelled`].
    pub fn get_line(&mut self, prompt: &str) -> Result<ReadlineEvent, ReadlineError> {
        let _guard = RawModeGuard::try_new(self.raw_mode.as_mut())?;
        let session =
            LineEditSession::new(prompt, self.safe_history.clone(), self.options);
        session.read(&mut self.decoder, self.output.as_mut())
    }
}
