// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! ANSI/VT100 output sequences written by [`crate::TerminalRenderer`].

use const_format::concatcp;

/// Control Sequence Introducer, `ESC [`.
pub const CSI_START: &str = "\x1b[";

/// EL 0, erase from the cursor to the end of the line.
pub const EL_ERASE_TO_END_OF_LINE: &str = concatcp!(CSI_START, "K");

/// CUF final byte. `CSI n C` moves the cursor right by `n` columns.
pub const CUF_CURSOR_FORWARD: char = 'C';

/// CUB final byte. `CSI n D` moves the cursor left by `n` columns.
pub const CUB_CURSOR_BACKWARD: char = 'D';

/// Return the cursor to column 0 of the current row.
pub const CARRIAGE_RETURN: &str = "\r";

/// Terminates an accepted line. Raw mode turns off output post-processing, so the
/// carriage return has to be explicit.
pub const CRLF: &str = "\r\n";
