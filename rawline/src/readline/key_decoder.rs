// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Raw byte stream to [`KeyEvent`] decoding.
//!
//! # Where You Are in the Pipeline
//!
//! ```text
//! raw input (stdin in raw mode, or any `Read` in tests)
//!    │
//! ┌──▼───────────────────────────────────────┐  ┌──────────────────┐
//! │  KeyDecoder::next_key()                  ◀──┤ **YOU ARE HERE** │
//! │  • control bytes classified directly     │  └──────────────────┘
//! │  • UTF-8 lead byte → read continuations  │
//! │  • ESC → EscapeScanner until complete    │
//! └──────────────────────────────────────────┘
//!    │
//!    ▼
//! KeyEvent → LineEditSession
//! ```
//!
//! # Never over-read
//!
//! The decoder pulls exactly one byte at a time and stops as soon as one key is
//! determined. The only exception is a byte that *ends* a malformed sequence without
//! belonging to it (a control byte, `ESC`, `DEL`, or a non ASCII byte). That byte is
//! kept in a one byte pushback slot and becomes the start of the next key, so the
//! decoder resynchronizes at the sequence boundary. A printable ASCII byte that
//! invalidates a sequence (eg: the `a` in `ESC a`) is counted as part of the bad
//! sequence.
//!
//! # Blocking
//!
//! An escape sequence that never completes blocks in `read` until more input arrives,
//! the same way a half typed character would. There is no timeout.

use crate::{ANSI_ESC, ARROW_DOWN_SEQUENCE, ARROW_LEFT_SEQUENCE, ARROW_RIGHT_SEQUENCE,
            ARROW_UP_SEQUENCE, ASCII_BS_BACKSPACE, ASCII_DEL_BACKSPACE,
            CARRIAGE_RETURN_BYTE, CONTROL_C_INTERRUPT, CONTROL_D_END_OF_INPUT,
            DELETE_SEQUENCE, EscapeByteVec, EscapeBytes, EscapeScan, EscapeScanner,
            LINE_FEED_BYTE};
use std::io::{self, ErrorKind, Read};
use strum_macros::IntoStaticStr;

/// One logical key. Produced by [`KeyDecoder::next_key`], consumed once by
/// [`crate::LineEditSession::apply_key`].
#[derive(Debug, Clone, PartialEq, Eq, IntoStaticStr)]
pub enum KeyEvent {
    Printable(char),
    Backspace,
    Delete,
    Enter,
    /// `Ctrl+C`. Cancels the session.
    Interrupt,
    /// `Ctrl+D`, or the input stream closed. Cancels the session.
    EndOfInput,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    /// An escape sequence that is complete but not one of the above, or that was cut
    /// short by a byte that can't continue it.
    UnknownEscape(EscapeBytes),
}

impl KeyEvent {
    /// Name of the variant, for logging.
    #[must_use]
    pub fn name(&self) -> &'static str { self.into() }
}

/// Map a complete escape sequence to a key, by exact byte match.
#[must_use]
pub fn classify_escape_sequence(bytes: &[u8]) -> KeyEvent {
    match bytes {
        ARROW_UP_SEQUENCE => KeyEvent::ArrowUp,
        ARROW_DOWN_SEQUENCE => KeyEvent::ArrowDown,
        ARROW_RIGHT_SEQUENCE => KeyEvent::ArrowRight,
        ARROW_LEFT_SEQUENCE => KeyEvent::ArrowLeft,
        DELETE_SEQUENCE => KeyEvent::Delete,
        _ => KeyEvent::UnknownEscape(EscapeBytes::from(bytes)),
    }
}

/// Decodes keys from any byte source. Owns the source for the lifetime of the editor,
/// so a byte left in the pushback slot at the end of one session is the first byte seen
/// by the next one.
#[derive(Debug)]
pub struct KeyDecoder<R> {
    reader: R,
    pushback: Option<u8>,
    /// Bytes consumed for the most recent key.
    last_key_bytes: EscapeByteVec,
}

impl<R: Read> KeyDecoder<R> {
    #[must_use]
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pushback: None,
            last_key_bytes: EscapeByteVec::new(),
        }
    }

    /// The raw bytes that made up the key most recently returned by
    /// [`next_key`](Self::next_key). Empty if that key was produced by the stream
    /// closing.
    #[must_use]
    pub fn last_key_bytes(&self) -> &[u8] { &self.last_key_bytes }

    #[must_use]
    pub fn into_inner(self) -> R { self.reader }

    /// Block until one key can be determined and return it.
    ///
    /// # Errors
    ///
    /// Returns an error if reading from the underlying source fails. A closed source is
    /// not an error; it decodes as [`KeyEvent::EndOfInput`].
    pub fn next_key(&mut self) -> io::Result<KeyEvent> {
        self.last_key_bytes.clear();

        let Some(byte) = self.read_byte()? else {
            return Ok(KeyEvent::EndOfInput);
        };

        let key = match byte {
            ANSI_ESC => self.decode_escape_sequence()?,
            CONTROL_C_INTERRUPT => KeyEvent::Interrupt,
            CONTROL_D_END_OF_INPUT => KeyEvent::EndOfInput,
            ASCII_DEL_BACKSPACE | ASCII_BS_BACKSPACE => KeyEvent::Backspace,
            CARRIAGE_RETURN_BYTE | LINE_FEED_BYTE => KeyEvent::Enter,
            0x00..=0x7F => KeyEvent::Printable(char::from(byte)),
            lead => self.decode_utf8_char(lead)?,
        };

        Ok(key)
    }

    /// `ESC` has been read. Keep reading until the grammar says the sequence is complete
    /// or invalid.
    fn decode_escape_sequence(&mut self) -> io::Result<KeyEvent> {
        let mut scanner = EscapeScanner::new();
        loop {
            let Some(byte) = self.read_byte()? else {
                // Stream closed mid sequence.
                return Ok(self.unknown_escape());
            };
            match scanner.push(byte) {
                EscapeScan::Pending => {}
                EscapeScan::Complete => {
                    return Ok(classify_escape_sequence(&self.last_key_bytes));
                }
                EscapeScan::Rejected => {
                    if !(0x20..=0x7E).contains(&byte) {
                        self.unread(byte);
                    }
                    return Ok(self.unknown_escape());
                }
            }
        }
    }

    /// `lead` is a byte `>= 0x80`. Read the continuation bytes it announces and decode
    /// them. Anything malformed decodes as [`char::REPLACEMENT_CHARACTER`].
    fn decode_utf8_char(&mut self, lead: u8) -> io::Result<KeyEvent> {
        let width = match lead {
            0xC2..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF4 => 4,
            // Stray continuation byte, overlong lead, or out of range.
            _ => return Ok(KeyEvent::Printable(char::REPLACEMENT_CHARACTER)),
        };

        for _ in 1..width {
            match self.read_byte()? {
                Some(byte) if (0x80..=0xBF).contains(&byte) => {}
                Some(byte) => {
                    self.unread(byte);
                    return Ok(KeyEvent::Printable(char::REPLACEMENT_CHARACTER));
                }
                None => return Ok(KeyEvent::Printable(char::REPLACEMENT_CHARACTER)),
            }
        }

        let ch = std::str::from_utf8(&self.last_key_bytes)
            .ok()
            .and_then(|it| it.chars().next())
            .unwrap_or(char::REPLACEMENT_CHARACTER);

        Ok(KeyEvent::Printable(ch))
    }

    fn unknown_escape(&self) -> KeyEvent {
        KeyEvent::UnknownEscape(EscapeBytes::from(&self.last_key_bytes[..]))
    }

    /// Read exactly one byte, from the pushback slot if it is full. `None` means the
    /// source is closed.
    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        if let Some(byte) = self.pushback.take() {
            self.last_key_bytes.push(byte);
            return Ok(Some(byte));
        }

        let mut buf = [0_u8; 1];
        loop {
            match self.reader.read(&mut buf) {
                Ok(0) => return Ok(None),
                Ok(_) => {
                    self.last_key_bytes.push(buf[0]);
                    return Ok(Some(buf[0]));
                }
                Err(error) if error.kind() == ErrorKind::Interrupted => {}
                Err(error) => return Err(error),
            }
        }
    }

    /// Give back the byte just read. It is no longer part of the current key.
    fn unread(&mut self, byte: u8) {
        debug_assert!(self.pushback.is_none());
        self.last_key_bytes.pop();
        self.pushback = Some(byte);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use crate::{InputMock, InputStep};
    use std::io::Cursor;
    use test_case::test_case;

    fn decode_all(input: &[u8]) -> Vec<KeyEvent> {
        let mut decoder = KeyDecoder::new(Cursor::new(input.to_vec()));
        let mut keys = vec![];
        loop {
            let key = decoder.next_key().unwrap();
            if key == KeyEvent::EndOfInput && decoder.last_key_bytes().is_empty() {
                return keys;
            }
            keys.push(key);
        }
    }

    fn unknown(bytes: &[u8]) -> KeyEvent { KeyEvent::UnknownEscape(EscapeBytes::from(bytes)) }

    #[test_case(b"a", KeyEvent::Printable('a') ; "printable ascii")]
    #[test_case(b" ", KeyEvent::Printable(' ') ; "space")]
    #[test_case(b"\x7f", KeyEvent::Backspace ; "del is backspace")]
    #[test_case(b"\x08", KeyEvent::Backspace ; "bs is backspace")]
    #[test_case(b"\r", KeyEvent::Enter ; "carriage return")]
    #[test_case(b"\n", KeyEvent::Enter ; "line feed")]
    #[test_case(b"\x03", KeyEvent::Interrupt ; "ctrl c")]
    #[test_case(b"\x04", KeyEvent::EndOfInput ; "ctrl d")]
    #[test_case(b"\x1b[A", KeyEvent::ArrowUp ; "arrow up")]
    #[test_case(b"\x1b[B", KeyEvent::ArrowDown ; "arrow down")]
    #[test_case(b"\x1b[C", KeyEvent::ArrowRight ; "arrow right")]
    #[test_case(b"\x1b[D", KeyEvent::ArrowLeft ; "arrow left")]
    #[test_case(b"\x1b[3~", KeyEvent::Delete ; "delete")]
    #[test_case("é".as_bytes(), KeyEvent::Printable('é') ; "two byte utf8")]
    #[test_case("€".as_bytes(), KeyEvent::Printable('€') ; "three byte utf8")]
    #[test_case("🦀".as_bytes(), KeyEvent::Printable('🦀') ; "four byte utf8")]
    fn test_single_key(input: &[u8], expected: KeyEvent) {
        let mut decoder = KeyDecoder::new(Cursor::new(input.to_vec()));
        assert_eq!(decoder.next_key().unwrap(), expected);
        assert_eq!(decoder.last_key_bytes(), input);
    }

    #[test_case(b"\x1b[H" ; "home")]
    #[test_case(b"\x1b[1;5C" ; "ctrl right")]
    #[test_case(b"\x1b[15~" ; "f5")]
    #[test_case(b"\x1bO" ; "ss3 introducer")]
    fn test_complete_but_unrecognized_sequences(input: &[u8]) {
        assert_eq!(decode_all(input), vec![unknown(input)]);
    }

    #[test]
    fn test_closed_stream_is_end_of_input() {
        let mut decoder = KeyDecoder::new(Cursor::new(vec![]));
        assert_eq!(decoder.next_key().unwrap(), KeyEvent::EndOfInput);
        assert!(decoder.last_key_bytes().is_empty());
    }

    #[test]
    fn test_mixed_stream() {
        assert_eq!(
            decode_all(b"ab\x1b[D\x7fc\x1b[3~\r"),
            vec![
                KeyEvent::Printable('a'),
                KeyEvent::Printable('b'),
                KeyEvent::ArrowLeft,
                KeyEvent::Backspace,
                KeyEvent::Printable('c'),
                KeyEvent::Delete,
                KeyEvent::Enter,
            ]
        );
    }

    #[test]
    fn test_resync_after_sequence_cut_by_escape() {
        // The second ESC can't continue `ESC [ 1`, so it starts a new sequence.
        assert_eq!(
            decode_all(b"\x1b[1\x1b[Ax"),
            vec![
                unknown(b"\x1b[1"),
                KeyEvent::ArrowUp,
                KeyEvent::Printable('x'),
            ]
        );
    }

    #[test]
    fn test_resync_after_sequence_cut_by_control_byte() {
        assert_eq!(
            decode_all(b"\x1b[\x03"),
            vec![unknown(b"\x1b["), KeyEvent::Interrupt]
        );
        assert_eq!(
            decode_all(b"\x1b\r"),
            vec![unknown(b"\x1b"), KeyEvent::Enter]
        );
    }

    #[test]
    fn test_printable_byte_that_invalidates_is_consumed() {
        // `ESC a` (Alt+a) is not in the grammar. The `a` belongs to the bad sequence.
        assert_eq!(
            decode_all(b"\x1bab"),
            vec![unknown(b"\x1ba"), KeyEvent::Printable('b')]
        );
        // A parameter byte after an intermediate byte.
        assert_eq!(
            decode_all(b"\x1b[ 1\x1b[B"),
            vec![unknown(b"\x1b[ 1"), KeyEvent::ArrowDown]
        );
    }

    #[test]
    fn test_truncated_sequence_at_end_of_stream() {
        assert_eq!(decode_all(b"\x1b[3"), vec![unknown(b"\x1b[3")]);
    }

    #[test]
    fn test_malformed_utf8() {
        // Stray continuation byte.
        assert_eq!(
            decode_all(&[0x80, b'a']),
            vec![
                KeyEvent::Printable(char::REPLACEMENT_CHARACTER),
                KeyEvent::Printable('a'),
            ]
        );
        // Lead byte followed by ASCII: the ASCII byte is not swallowed.
        assert_eq!(
            decode_all(&[0xC3, b'a']),
            vec![
                KeyEvent::Printable(char::REPLACEMENT_CHARACTER),
                KeyEvent::Printable('a'),
            ]
        );
        // Encoded surrogate (U+D800) is rejected by `from_utf8`.
        assert_eq!(
            decode_all(&[0xED, 0xA0, 0x80]),
            vec![KeyEvent::Printable(char::REPLACEMENT_CHARACTER)]
        );
    }

    #[test]
    fn test_never_over_reads() {
        let mut decoder = KeyDecoder::new(Cursor::new(b"\x1b[Arest".to_vec()));
        assert_eq!(decoder.next_key().unwrap(), KeyEvent::ArrowUp);
        let cursor = decoder.into_inner();
        assert_eq!(cursor.position(), 3);
    }

    #[test]
    fn test_key_names() {
        assert_eq!(KeyEvent::ArrowUp.name(), "ArrowUp");
        assert_eq!(KeyEvent::Printable('x').name(), "Printable");
    }

    #[test]
    fn test_interrupted_reads_are_retried() {
        let mut decoder = KeyDecoder::new(InputMock::new([
            InputStep::Bytes(b"a".to_vec()),
            InputStep::Fail(ErrorKind::Interrupted),
            InputStep::Bytes(b"\x1b[".to_vec()),
            InputStep::Fail(ErrorKind::Interrupted),
            InputStep::Bytes(b"A".to_vec()),
        ]));

        assert_eq!(decoder.next_key().unwrap(), KeyEvent::Printable('a'));
        assert_eq!(decoder.next_key().unwrap(), KeyEvent::ArrowUp);
        assert_eq!(decoder.last_key_bytes(), b"\x1b[A");
        assert_eq!(decoder.next_key().unwrap(), KeyEvent::EndOfInput);
    }

    #[test]
    fn test_other_read_errors_are_returned() {
        let mut decoder = KeyDecoder::new(InputMock::new([
            InputStep::Bytes(b"a".to_vec()),
            InputStep::Fail(ErrorKind::BrokenPipe),
            InputStep::Bytes(b"b".to_vec()),
        ]));

        assert_eq!(decoder.next_key().unwrap(), KeyEvent::Printable('a'));
        assert_eq!(decoder.next_key().unwrap_err().kind(), ErrorKind::BrokenPipe);
        assert_eq!(decoder.next_key().unwrap(), KeyEvent::Printable('b'));
    }
}
