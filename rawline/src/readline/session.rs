// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! One read of one line. See [`LineEditSession`].

use crate::{CancelReason, EditorOptions, EscapeBytes, KeyDecoder, KeyEvent, LineBuffer,
            ReadlineError, ReadlineEvent, SafeHistory, TerminalRenderer, lock_history};
use std::{io::{self, Read, Write},
          ops::ControlFlow};
use strum_macros::Display;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Display)]
pub enum SessionState {
    Editing,
    Accepted,
    Cancelled,
}

/// What the terminal needs after a key has been applied.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Redraw {
    Nothing,
    Full,
    CursorBy(isize),
}

/// State machine for reading a single line.
///
/// ```text
///             Printable / Backspace / Delete / arrows
///               ┌──────────┐
///               │          │
///          ┌────▼──────────┴─┐  Enter        ┌──────────┐
///   new ──▶│     Editing     ├──────────────▶│ Accepted │
///          └────────┬────────┘               └──────────┘
///                   │ Interrupt / EndOfInput / UnknownEscape
///                   │                        ┌───────────┐
///                   └───────────────────────▶│ Cancelled │
///                                            └───────────┘
/// ```
///
/// Creating a session appends a fresh, empty entry to the shared history and makes it
/// the active entry. Every edit is written straight back into whichever history entry is
/// active, so arrowing away and back finds the text as it was left.
///
/// A session is single use: [`read`](Self::read) takes `self`.
#[derive(Debug)]
pub struct LineEditSession {
    prompt: String,
    buffer: LineBuffer,
    active_index: usize,
    safe_history: SafeHistory,
    options: EditorOptions,
    state: SessionState,
}

impl LineEditSession {
    #[must_use]
    pub fn new(
        prompt: impl Into<String>,
        safe_history: SafeHistory,
        options: EditorOptions,
    ) -> Self {
        let active_index = lock_history(&safe_history).start_new_entry();
        Self {
            prompt: prompt.into(),
            buffer: LineBuffer::new(),
            active_index,
            safe_history,
            options,
            state: SessionState::Editing,
        }
    }

    #[must_use]
    pub fn prompt(&self) -> &str { &self.prompt }

    #[must_use]
    pub fn buffer(&self) -> &LineBuffer { &self.buffer }

    #[must_use]
    pub fn active_index(&self) -> usize { self.active_index }

    #[must_use]
    pub fn state(&self) -> SessionState { self.state }

    /// Write the prompt, then apply keys from `decoder` until one ends the session.
    ///
    /// # Errors
    ///
    /// Returns an error if reading a key or writing to `term` fails. The history keeps
    /// whatever was typed up to that point.
    pub fn read<R: Read>(
        mut self,
        decoder: &mut KeyDecoder<R>,
        term: &mut dyn Write,
    ) -> Result<ReadlineEvent, ReadlineError> {
        let mut renderer = TerminalRenderer::new(term);
        renderer.write_prompt(&self.prompt)?;

        loop {
            let key = decoder.next_key()?;

            tracing::debug!(
                message = "rawline -> key",
                key = key.name(),
                bytes = %EscapeBytes::from(decoder.last_key_bytes())
            );

            if self.options.debug_keys && key != KeyEvent::Enter {
                renderer.show_key_bytes(decoder.last_key_bytes())?;
            }

            if let ControlFlow::Break(event) = self.apply_key(key, &mut renderer)? {
                return Ok(event);
            }
        }
    }

    /// Apply one key: update the buffer and history, then bring the terminal up to date.
    /// Returns [`ControlFlow::Break`] with the outcome once the session is over.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the terminal fails.
    ///
    /// # Panics
    ///
    /// Panics if the session is already over.
    pub fn apply_key(
        &mut self,
        key: KeyEvent,
        renderer: &mut TerminalRenderer<'_>,
    ) -> io::Result<ControlFlow<ReadlineEvent>> {
        assert_eq!(
            self.state,
            SessionState::Editing,
            "key applied to a session that is already over"
        );

        let redraw = match key {
            KeyEvent::Printable(ch) => {
                self.buffer.insert(ch);
                self.write_through_to_history();
                Redraw::Full
            }
            KeyEvent::Backspace => {
                let changed = self.buffer.backspace();
                self.write_through_to_history();
                if changed { Redraw::Full } else { Redraw::Nothing }
            }
            KeyEvent::Delete => {
                let changed = self.buffer.delete();
                self.write_through_to_history();
                if changed { Redraw::Full } else { Redraw::Nothing }
            }
            KeyEvent::ArrowLeft => Redraw::CursorBy(self.buffer.move_cursor(-1)),
            KeyEvent::ArrowRight => Redraw::CursorBy(self.buffer.move_cursor(1)),
            KeyEvent::ArrowUp => self.navigate_history(-1),
            KeyEvent::ArrowDown => self.navigate_history(1),
            KeyEvent::Enter => return self.accept(renderer),
            KeyEvent::Interrupt => {
                return self.cancel(renderer, CancelReason::Interrupted);
            }
            KeyEvent::EndOfInput => {
                return self.cancel(renderer, CancelReason::EndOfInput);
            }
            KeyEvent::UnknownEscape(bytes) => {
                tracing::warn!(message = "rawline -> unknown escape", bytes = %bytes);
                return self.cancel(renderer, CancelReason::UnknownEscape(bytes));
            }
        };

        // The key's hex dump replaced the row, so the line must come back in full.
        let redraw = if self.options.debug_keys { Redraw::Full } else { redraw };
        tracing::trace!(
            message = "rawline -> redraw",
            ?redraw,
            line_len = self.buffer.len_chars()
        );

        match redraw {
            Redraw::Nothing => {}
            Redraw::Full => renderer.redraw(&self.prompt, &self.buffer)?,
            Redraw::CursorBy(delta) => renderer.move_cursor_by(delta)?,
        }

        Ok(ControlFlow::Continue(()))
    }

    /// Move the active index by `delta`, clamped to the history. Moving past either end
    /// changes nothing.
    fn navigate_history(&mut self, delta: isize) -> Redraw {
        let history = lock_history(&self.safe_history);
        let last_index = history.last_index().unwrap_or_default();
        let new_index = self.active_index.saturating_add_signed(delta).min(last_index);
        if new_index == self.active_index {
            return Redraw::Nothing;
        }
        self.active_index = new_index;
        self.buffer.replace(history.get(new_index));
        Redraw::Full
    }

    fn write_through_to_history(&self) {
        lock_history(&self.safe_history).set(self.active_index, self.buffer.line());
    }

    fn accept(
        &mut self,
        renderer: &mut TerminalRenderer<'_>,
    ) -> io::Result<ControlFlow<ReadlineEvent>> {
        self.write_through_to_history();
        renderer.end_line()?;
        self.state = SessionState::Accepted;
        tracing::info!(
            message = "rawline -> accepted",
            line = self.buffer.line(),
            history_index = self.active_index
        );
        Ok(ControlFlow::Break(ReadlineEvent::Line(
            self.buffer.line().to_string(),
        )))
    }

    /// Leave the row so the caller's next output starts at column 0.
    fn cancel(
        &mut self,
        renderer: &mut TerminalRenderer<'_>,
        reason: CancelReason,
    ) -> io::Result<ControlFlow<ReadlineEvent>> {
        renderer.end_line()?;
        self.state = SessionState::Cancelled;
        tracing::debug!(message = "rawline -> cancelled", reason = %reason);
        Ok(ControlFlow::Break(ReadlineEvent::Cancelled(reason)))
    }
}
