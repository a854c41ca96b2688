// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! ANSI/VT100 input sequences for the keys the line editor understands.
//!
//! # Keyboard Sequences
//!
//! ## Arrow Keys (CSI A/B/C/D)
//! - Up: `ESC[A`
//! - Down: `ESC[B`
//! - Right: `ESC[C`
//! - Left: `ESC[D`
//!
//! ## Special Keys (CSI n~)
//! - Delete: `ESC[3~`
//!
//! Every other complete escape sequence (Home, End, function keys, modified arrows,
//! `ESC` + letter, ...) decodes to [`crate::KeyEvent::UnknownEscape`].

/// CSI bracket byte: `[` (91 in decimal, 0x5B in hex)
pub const ANSI_CSI_BRACKET: u8 = 0x5B;

/// `ESC [ A`
pub const ARROW_UP_SEQUENCE: &[u8] = b"\x1b[A";

/// `ESC [ B`
pub const ARROW_DOWN_SEQUENCE: &[u8] = b"\x1b[B";

/// `ESC [ C`
pub const ARROW_RIGHT_SEQUENCE: &[u8] = b"\x1b[C";

/// `ESC [ D`
pub const ARROW_LEFT_SEQUENCE: &[u8] = b"\x1b[D";

/// `ESC [ 3 ~`
pub const DELETE_SEQUENCE: &[u8] = b"\x1b[3~";
