// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Reconcile what the terminal shows with a [`LineBuffer`].
//!
//! The renderer never asks the terminal where its cursor is. It relies on one fact:
//! after [`TerminalRenderer::rewrite_line`] the terminal cursor sits right after the last
//! char of the text, so the distance to the logical cursor is
//! `cursor - len_chars`, which is zero or negative.
//!
//! ```text
//! \r  > hello wor|ld  ESC[K      rewrite_line: cursor lands after "world"
//!                      ESC[2D    move_cursor_by(-2): back to the logical cursor
//! ```
//!
//! Every method flushes, since the terminal is in raw mode and nothing else will.

use crate::{CARRIAGE_RETURN, CRLF, CSI_START, CUB_CURSOR_BACKWARD, CUF_CURSOR_FORWARD,
            EL_ERASE_TO_END_OF_LINE, LineBuffer, write_hex_bytes};
use std::io::{self, Write};

pub struct TerminalRenderer<'a> {
    term: &'a mut dyn Write,
}

impl std::fmt::Debug for TerminalRenderer<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TerminalRenderer").finish_non_exhaustive()
    }
}

impl<'a> TerminalRenderer<'a> {
    #[must_use]
    pub fn new(term: &'a mut dyn Write) -> Self { Self { term } }

    /// Written once, when a session starts.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the terminal fails.
    pub fn write_prompt(&mut self, prompt: &str) -> io::Result<()> {
        self.term.write_all(prompt.as_bytes())?;
        self.term.flush()
    }

    /// Go to column 0, write `prompt` and `text`, and erase whatever was left of the
    /// previous, possibly longer, line.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the terminal fails.
    pub fn rewrite_line(&mut self, prompt: &str, text: &str) -> io::Result<()> {
        write!(
            self.term,
            "{CARRIAGE_RETURN}{prompt}{text}{EL_ERASE_TO_END_OF_LINE}"
        )?;
        self.term.flush()
    }

    /// Move the terminal cursor `|delta|` columns right (positive) or left (negative).
    /// Zero writes nothing at all.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the terminal fails.
    pub fn move_cursor_by(&mut self, delta: isize) -> io::Result<()> {
        let columns = delta.unsigned_abs();
        match delta.signum() {
            1 => write!(self.term, "{CSI_START}{columns}{CUF_CURSOR_FORWARD}")?,
            -1 => write!(self.term, "{CSI_START}{columns}{CUB_CURSOR_BACKWARD}")?,
            _ => return Ok(()),
        }
        self.term.flush()
    }

    /// Full redraw: rewrite the line, then step back from its end to the cursor.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the terminal fails.
    pub fn redraw(&mut self, prompt: &str, buffer: &LineBuffer) -> io::Result<()> {
        self.rewrite_line(prompt, buffer.line())?;
        let chars_after_cursor = buffer.len_chars() - buffer.cursor();
        self.move_cursor_by(-isize::try_from(chars_after_cursor).unwrap_or(isize::MAX))
    }

    /// Terminate the accepted line.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the terminal fails.
    pub fn end_line(&mut self) -> io::Result<()> {
        self.term.write_all(CRLF.as_bytes())?;
        self.term.flush()
    }

    /// Debug keys mode. Replace the current row with the raw bytes of a key, as hex,
    /// and move to the next row.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the terminal fails.
    pub fn show_key_bytes(&mut self, bytes: &[u8]) -> io::Result<()> {
        let mut hex = String::new();
        write_hex_bytes(&mut hex, bytes).map_err(io::Error::other)?;
        write!(
            self.term,
            "{CARRIAGE_RETURN}{EL_ERASE_TO_END_OF_LINE}{hex}{CRLF}"
        )?;
        self.term.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StdoutMock;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    fn render(f: impl FnOnce(&mut TerminalRenderer<'_>) -> io::Result<()>) -> String {
        let mut stdout_mock = StdoutMock::default();
        let mut renderer = TerminalRenderer::new(&mut stdout_mock);
        f(&mut renderer).unwrap();
        stdout_mock.get_copy_of_buffer_as_string()
    }

    #[test]
    fn test_rewrite_line() {
        assert_eq!(
            render(|it| it.rewrite_line("> ", "hello")),
            "\r> hello\x1b[K"
        );
    }

    #[test_case(0, "" ; "zero emits nothing")]
    #[test_case(3, "\x1b[3C" ; "right")]
    #[test_case(-1, "\x1b[1D" ; "left")]
    #[test_case(-12, "\x1b[12D" ; "left multi digit")]
    fn test_move_cursor_by(delta: isize, expected: &str) {
        assert_eq!(render(|it| it.move_cursor_by(delta)), expected);
    }

    #[test]
    fn test_redraw_with_cursor_at_end_has_no_motion() {
        let buffer = LineBuffer::new_at_end("abc");
        assert_eq!(render(|it| it.redraw("> ", &buffer)), "\r> abc\x1b[K");
    }

    #[test]
    fn test_redraw_steps_back_to_cursor() {
        let mut buffer = LineBuffer::new_at_end("hello world");
        buffer.move_cursor(-2);
        assert_eq!(
            render(|it| it.redraw("> ", &buffer)),
            "\r> hello world\x1b[K\x1b[2D"
        );
    }

    #[test]
    fn test_end_line_and_prompt() {
        assert_eq!(
            render(|it| {
                it.write_prompt("$ ")?;
                it.end_line()
            }),
            "$ \r\n"
        );
    }

    #[test]
    fn test_show_key_bytes() {
        assert_eq!(
            render(|it| it.show_key_bytes(b"\x1b[A")),
            "\r\x1b[K0x1b 0x5b 0x41\r\n"
        );
    }
}
