// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use miette::Diagnostic;
use smallvec::SmallVec;
use std::{fmt, io};
use thiserror::Error;

/// Raw bytes of an escape sequence. Most sequences fit inline.
pub type EscapeByteVec = SmallVec<[u8; 8]>;

/// The raw bytes of an escape sequence the decoder did not recognize. Displays as space
/// separated hex, eg: `0x1b 0x5b 0x48`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EscapeBytes(pub EscapeByteVec);

impl EscapeBytes {
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] { &self.0 }
}

impl From<&[u8]> for EscapeBytes {
    fn from(bytes: &[u8]) -> Self { Self(SmallVec::from_slice(bytes)) }
}

impl fmt::Display for EscapeBytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_hex_bytes(f, &self.0)
    }
}

/// Write `bytes` as space separated lowercase hex with a `0x` prefix.
///
/// # Errors
///
/// Returns an error if the underlying writer fails.
pub fn write_hex_bytes(f: &mut impl fmt::Write, bytes: &[u8]) -> fmt::Result {
    for (index, byte) in bytes.iter().enumerate() {
        if index > 0 {
            f.write_char(' ')?;
        }
        write!(f, "{byte:#04x}")?;
    }
    Ok(())
}

/// Why a session ended without producing a line. These are outcomes the user caused (or
/// the input stream caused), not failures of the editor. They are kept distinct so a
/// REPL can, for example, exit quietly on [`CancelReason::EndOfInput`] but print a
/// message on [`CancelReason::Interrupted`].
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum CancelReason {
    /// The user pressed `Ctrl+C`.
    #[error("read interrupted")]
    #[diagnostic(code(rawline::cancelled::interrupted))]
    Interrupted,

    /// The user pressed `Ctrl+D`, or the input stream closed.
    #[error("end of input")]
    #[diagnostic(code(rawline::cancelled::end_of_input))]
    EndOfInput,

    /// A complete (or invalidated) escape sequence that maps to no key.
    #[error("unknown ANSI escape: {0}")]
    #[diagnostic(
        code(rawline::cancelled::unknown_escape),
        help("Only the arrow keys (ESC [ A/B/C/D) and Delete (ESC [ 3 ~) are supported.")
    )]
    UnknownEscape(EscapeBytes),
}

/// Result of one [`crate::LineEditor::get_line`] call that did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadlineEvent {
    /// The user pressed Enter.
    Line(String),
    /// The session ended without a line.
    Cancelled(CancelReason),
}

impl ReadlineEvent {
    /// Turn a cancellation into an error, so callers can use `?`.
    ///
    /// # Errors
    ///
    /// Returns the [`CancelReason`] if the session was cancelled.
    pub fn into_line(self) -> Result<String, CancelReason> {
        match self {
            ReadlineEvent::Line(line) => Ok(line),
            ReadlineEvent::Cancelled(reason) => Err(reason),
        }
    }
}

/// Error returned from [`crate::LineEditor::get_line`]. Such errors come from the
/// terminal, not from the user, and generally require the caller to give up on the
/// terminal.
#[derive(Debug, Error, Diagnostic)]
pub enum ReadlineError {
    /// An internal I/O error occurred while reading keys or writing the line.
    #[error(transparent)]
    #[diagnostic(code(rawline::io))]
    IO(#[from] io::Error),

    /// Raw mode could not be enabled.
    #[error("terminal raw mode failed: {0}")]
    #[diagnostic(code(rawline::raw_mode))]
    RawMode(String),
}

/// For convenience, convert [`miette::Report`] (what the raw mode layer returns) to
/// [`ReadlineError`].
impl From<miette::Report> for ReadlineError {
    fn from(report: miette::Report) -> Self { ReadlineError::RawMode(format!("{report}")) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_escape_bytes_display_as_hex() {
        let bytes = EscapeBytes::from(&b"\x1b[H"[..]);
        assert_eq!(bytes.to_string(), "0x1b 0x5b 0x48");
        assert_eq!(
            CancelReason::UnknownEscape(bytes).to_string(),
            "unknown ANSI escape: 0x1b 0x5b 0x48"
        );
    }

    #[test]
    fn test_into_line() {
        assert_eq!(
            ReadlineEvent::Line("ls".into()).into_line(),
            Ok("ls".to_string())
        );
        assert_eq!(
            ReadlineEvent::Cancelled(CancelReason::Interrupted).into_line(),
            Err(CancelReason::Interrupted)
        );
    }

    #[test]
    fn test_interrupted_and_end_of_input_are_distinct() {
        assert_ne!(CancelReason::Interrupted, CancelReason::EndOfInput);
        assert_ne!(
            CancelReason::Interrupted.to_string(),
            CancelReason::EndOfInput.to_string()
        );
    }

    #[test]
    fn test_report_converts_to_raw_mode_error() {
        let error = ReadlineError::from(miette::miette!("no tty"));
        assert!(matches!(error, ReadlineError::RawMode(ref msg) if msg == "no tty"));
    }
}
