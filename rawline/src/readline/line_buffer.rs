// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The text being edited and the cursor inside it.
//!
//! The cursor is a **char index**, not a byte offset. It is always in
//! `0..=len_chars()`. Every method keeps that bound; there is no way to construct a
//! [`LineBuffer`] that violates it.
//!
//! Display width is assumed to be one column per char, so the same index doubles as the
//! column offset from the end of the prompt. Wide and zero width characters will
//! misalign the terminal cursor.

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LineBuffer {
    line: String,
    cursor: usize,
}

impl LineBuffer {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// Buffer holding `text` with the cursor at its end.
    #[must_use]
    pub fn new_at_end(text: &str) -> Self {
        Self {
            line: text.to_string(),
            cursor: text.chars().count(),
        }
    }

    #[must_use]
    pub fn line(&self) -> &str { &self.line }

    #[must_use]
    pub fn cursor(&self) -> usize { self.cursor }

    #[must_use]
    pub fn len_chars(&self) -> usize { self.line.chars().count() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.line.is_empty() }

    /// Insert `ch` at the cursor and advance the cursor past it.
    pub fn insert(&mut self, ch: char) {
        let byte_index = self.byte_offset(self.cursor);
        self.line.insert(byte_index, ch);
        self.cursor += 1;
    }

    /// Remove the char before the cursor. Returns `false` (and changes nothing) when the
    /// cursor is at column 0.
    pub fn backspace(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        let byte_index = self.byte_offset(self.cursor);
        self.line.remove(byte_index);
        true
    }

    /// Remove the char under the cursor. Returns `false` (and changes nothing) when the
    /// cursor is at the end of the line. The cursor does not move.
    pub fn delete(&mut self) -> bool {
        if self.cursor >= self.len_chars() {
            return false;
        }
        let byte_index = self.byte_offset(self.cursor);
        self.line.remove(byte_index);
        true
    }

    /// Move the cursor by `delta` chars, clamped to the line. Returns how far it actually
    /// moved, which is `0` at either boundary.
    pub fn move_cursor(&mut self, delta: isize) -> isize {
        let old = self.cursor;
        let new = old
            .saturating_add_signed(delta)
            .min(self.len_chars());
        self.cursor = new;
        signed_distance(old, new)
    }

    /// Replace the whole text (eg: with a history entry) and put the cursor at the end.
    pub fn replace(&mut self, text: &str) {
        self.line.clear();
        self.line.push_str(text);
        self.cursor = self.len_chars();
    }

    /// Byte offset in `line` of the char at `char_index`. An index equal to the char
    /// count maps to `line.len()`.
    fn byte_offset(&self, char_index: usize) -> usize {
        self.line
            .char_indices()
            .nth(char_index)
            .map_or(self.line.len(), |(byte_index, _)| byte_index)
    }
}

/// `to - from` as a signed count. Char counts of a single line never come close to
/// `isize::MAX`.
fn signed_distance(from: usize, to: usize) -> isize {
    let magnitude = isize::try_from(from.abs_diff(to)).unwrap_or(isize::MAX);
    if to >= from { magnitude } else { -magnitude }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    fn assert_cursor_in_bounds(buffer: &LineBuffer) {
        assert!(buffer.cursor() <= buffer.len_chars(), "{buffer:?}");
    }

    #[test]
    fn test_insert_appends_and_advances() {
        let mut buffer = LineBuffer::new();
        for ch in "abc".chars() {
            buffer.insert(ch);
        }
        assert_eq!(buffer.line(), "abc");
        assert_eq!(buffer.cursor(), 3);
    }

    #[test]
    fn test_insert_in_the_middle() {
        let mut buffer = LineBuffer::new_at_end("ac");
        assert_eq!(buffer.move_cursor(-1), -1);
        buffer.insert('b');
        assert_eq!(buffer.line(), "abc");
        assert_eq!(buffer.cursor(), 2);
    }

    #[test]
    fn test_two_backspaces() {
        let mut buffer = LineBuffer::new_at_end("abc");
        assert!(buffer.backspace());
        assert!(buffer.backspace());
        assert_eq!(buffer.line(), "a");
        assert_eq!(buffer.cursor(), 1);
    }

    #[test]
    fn test_backspace_at_column_zero_is_noop() {
        let mut buffer = LineBuffer::new_at_end("ab");
        buffer.move_cursor(-2);
        assert!(!buffer.backspace());
        assert_eq!(buffer.line(), "ab");
        assert_eq!(buffer.cursor(), 0);
    }

    #[test]
    fn test_delete_under_cursor() {
        let mut buffer = LineBuffer::new_at_end("abc");
        buffer.move_cursor(-2);
        assert!(buffer.delete());
        assert_eq!(buffer.line(), "ac");
        assert_eq!(buffer.cursor(), 1);
    }

    #[test]
    fn test_delete_at_end_is_noop() {
        let mut buffer = LineBuffer::new_at_end("abc");
        assert!(!buffer.delete());
        assert_eq!(buffer.line(), "abc");
        assert_eq!(buffer.cursor(), 3);
    }

    #[test_case("", 0, -1, 0 ; "left on empty line")]
    #[test_case("abc", 0, -1, 0 ; "left at column zero")]
    #[test_case("abc", 3, 1, 0 ; "right at end")]
    #[test_case("abc", 3, -1, -1 ; "left one")]
    #[test_case("abc", 1, 1, 1 ; "right one")]
    #[test_case("abc", 3, -10, -3 ; "clamped left")]
    #[test_case("abc", 0, 10, 3 ; "clamped right")]
    fn test_move_cursor(text: &str, start: usize, delta: isize, expected_moved: isize) {
        let mut buffer = LineBuffer::new_at_end(text);
        buffer.move_cursor(signed_distance(buffer.cursor(), start));
        assert_eq!(buffer.cursor(), start);

        assert_eq!(buffer.move_cursor(delta), expected_moved);
        assert_eq!(buffer.line(), text);
        assert_cursor_in_bounds(&buffer);
    }

    #[test]
    fn test_replace_moves_cursor_to_end() {
        let mut buffer = LineBuffer::new_at_end("hello");
        buffer.move_cursor(-4);
        buffer.replace("hi");
        assert_eq!(buffer.line(), "hi");
        assert_eq!(buffer.cursor(), 2);
    }

    #[test]
    fn test_multibyte_chars_are_edited_by_char() {
        let mut buffer = LineBuffer::new_at_end("héllo");
        assert_eq!(buffer.len_chars(), 5);
        buffer.move_cursor(-3);
        assert!(buffer.backspace());
        assert_eq!(buffer.line(), "hllo");
        buffer.insert('€');
        assert_eq!(buffer.line(), "h€llo");
        assert_eq!(buffer.cursor(), 2);
        assert!(buffer.delete());
        assert_eq!(buffer.line(), "h€lo");
    }

    #[test]
    fn test_cursor_stays_in_bounds_under_any_edit_sequence() {
        let mut buffer = LineBuffer::new();
        for round in 0_usize..60 {
            match (round * 7 + round / 3) % 6 {
                0 => buffer.insert('x'),
                1 => _ = buffer.backspace(),
                2 => _ = buffer.delete(),
                3 => _ = buffer.move_cursor(-2),
                4 => _ = buffer.move_cursor(3),
                _ => buffer.replace("yz"),
            }
            assert_cursor_in_bounds(&buffer);
        }
    }
}
