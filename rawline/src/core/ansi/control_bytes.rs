// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! C0 control bytes (and `DEL`) that the key decoder classifies directly, without
//! waiting for more input.

/// ESC byte (27 in decimal, 0x1B in hex). Introduces every escape sequence.
pub const ANSI_ESC: u8 = 0x1B;

/// ETX, `Ctrl+C` (3 in decimal). Interrupts the current read.
pub const CONTROL_C_INTERRUPT: u8 = 0x03;

/// EOT, `Ctrl+D` (4 in decimal). Signals that no more input will come.
pub const CONTROL_D_END_OF_INPUT: u8 = 0x04;

/// DEL (127 in decimal). What most terminals send for the Backspace key.
pub const ASCII_DEL_BACKSPACE: u8 = 0x7F;

/// BS, `Ctrl+H` (8 in decimal). What some terminals send for the Backspace key.
pub const ASCII_BS_BACKSPACE: u8 = 0x08;

/// CR (13 in decimal). Sent for Enter in raw mode.
pub const CARRIAGE_RETURN_BYTE: u8 = b'\r';

/// LF (10 in decimal). Sent for Enter when the input is piped.
pub const LINE_FEED_BYTE: u8 = b'\n';
